// src/export.rs
use std::{
    error::Error,
    io::{self, Write},
};

use csv::{Terminator, WriterBuilder};

use crate::{
    config::{
        consts::{STATUS_HEADER, STATUS_VALID, URL_HEADER},
        options::{ExportFormat, ExportOptions},
    },
    details::{BusinessDetails, FIELD_LABELS},
};

fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

/// `Google Maps URL,Status` table; every row is marked valid.
pub fn write_urls_csv<W: Write>(out: W, urls: &[String], include_headers: bool) -> csv::Result<()> {
    let mut wtr = csv_writer(out);
    if include_headers {
        wtr.write_record([URL_HEADER, STATUS_HEADER])?;
    }
    for url in urls {
        wtr.write_record([url.as_str(), STATUS_VALID])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One URL per line, nothing else.
pub fn write_urls_txt<W: Write>(mut out: W, urls: &[String]) -> io::Result<()> {
    for url in urls {
        writeln!(out, "{url}")?;
    }
    out.flush()
}

pub fn write_urls<W: Write>(out: W, urls: &[String], export: &ExportOptions) -> Result<(), Box<dyn Error>> {
    match export.format {
        ExportFormat::Csv => write_urls_csv(out, urls, export.include_headers)?,
        ExportFormat::Txt => write_urls_txt(out, urls)?,
    }
    Ok(())
}

/// The export as a string, for the clipboard.
pub fn to_export_string(urls: &[String], export: &ExportOptions) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    write_urls(&mut buf, urls, export)?;
    Ok(String::from_utf8(buf)?)
}

pub fn write_details_csv<W: Write>(
    out: W,
    details: &[BusinessDetails],
    include_headers: bool,
) -> csv::Result<()> {
    let mut wtr = csv_writer(out);
    if include_headers {
        wtr.write_record(FIELD_LABELS)?;
    }
    for d in details {
        wtr.write_record(d.values())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn details_to_string(details: &[BusinessDetails], include_headers: bool) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    write_details_csv(&mut buf, details, include_headers)?;
    Ok(String::from_utf8(buf)?)
}
