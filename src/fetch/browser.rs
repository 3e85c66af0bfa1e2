// src/fetch/browser.rs
//
// Headless Chrome session. Launch, load, scroll a few times so lazy result
// lists fill in, then read the rendered DOM. Dropping the session closes the
// tab and the browser process on every exit path.

use super::{FetchError, PageSource};
use crate::config::options::FetchOptions;

#[cfg(feature = "browser")]
mod imp {
    use std::{
        ffi::OsStr,
        path::PathBuf,
        sync::Arc,
        thread,
        time::Duration,
    };

    use headless_chrome::{Browser, LaunchOptions, Tab};

    use super::FetchError;
    use crate::config::{consts::SCROLL_PAUSE_MS, options::FetchOptions};

    const SCROLL_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

    pub struct BrowserSession {
        // Field order matters: the tab goes before the browser that owns it.
        tab: Arc<Tab>,
        _browser: Browser,
        settle: Duration,
    }

    fn chrome_path(opts: &FetchOptions) -> Option<PathBuf> {
        opts.chrome_path
            .clone()
            .or_else(|| std::env::var_os("CHROME_PATH").map(PathBuf::from))
    }

    impl BrowserSession {
        pub fn launch(opts: &FetchOptions) -> Result<Self, FetchError> {
            let unavailable = |e: String| FetchError::BrowserUnavailable(e);

            let args = [
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-extensions"),
            ];
            let launch = LaunchOptions::default_builder()
                .headless(true)
                .sandbox(false)
                .window_size(Some((1920, 1080)))
                .path(chrome_path(opts))
                .args(args.to_vec())
                .idle_browser_timeout(Duration::from_secs(opts.page_load_timeout_secs.max(1) * 3))
                .build()
                .map_err(|e| unavailable(e.to_string()))?;

            let browser = Browser::new(launch).map_err(|e| unavailable(e.to_string()))?;
            let tab = browser.new_tab().map_err(|e| unavailable(e.to_string()))?;
            tab.set_default_timeout(Duration::from_secs(opts.page_load_timeout_secs));
            if let Err(e) = tab.set_user_agent(&opts.user_agent, Some("en-US,en"), None) {
                logw!("Browser: couldn't set user agent: {e}");
            }
            logd!("Browser: launched");

            Ok(Self { tab, _browser: browser, settle: Duration::from_millis(opts.settle_ms) })
        }

        pub fn load(&self, url: &str) -> Result<(), FetchError> {
            self.tab
                .navigate_to(url)
                .map_err(|e| FetchError::Browser(format!("navigate to {url}: {e}")))?;
            self.tab
                .wait_until_navigated()
                .map_err(|e| FetchError::Browser(format!("load {url}: {e}")))?;
            thread::sleep(self.settle);
            Ok(())
        }

        pub fn scroll(&self, passes: u32) -> Result<(), FetchError> {
            for _ in 0..passes {
                self.tab
                    .evaluate(SCROLL_JS, false)
                    .map_err(|e| FetchError::Browser(e.to_string()))?;
                thread::sleep(Duration::from_millis(SCROLL_PAUSE_MS));
            }
            Ok(())
        }

        pub fn content(&self) -> Result<String, FetchError> {
            self.tab.get_content().map_err(|e| FetchError::Browser(e.to_string()))
        }

        pub fn title(&self) -> Option<String> {
            self.tab.get_title().ok().filter(|t| !t.trim().is_empty())
        }
    }

    impl Drop for BrowserSession {
        fn drop(&mut self) {
            if let Err(e) = self.tab.close(true) {
                logd!("Browser: tab close failed: {e}");
            }
            logd!("Browser: closed");
        }
    }
}

#[cfg(not(feature = "browser"))]
mod imp {
    use super::FetchError;
    use crate::config::options::FetchOptions;

    const NO_BROWSER: &str = "built without the `browser` feature";

    /// Stand-in when Chrome support is compiled out. Launch always fails, so
    /// `Auto` goes straight to HTTP.
    pub struct BrowserSession;

    impl BrowserSession {
        pub fn launch(_opts: &FetchOptions) -> Result<Self, FetchError> {
            Err(FetchError::BrowserUnavailable(s!(NO_BROWSER)))
        }
        pub fn load(&self, _url: &str) -> Result<(), FetchError> {
            Err(FetchError::BrowserUnavailable(s!(NO_BROWSER)))
        }
        pub fn scroll(&self, _passes: u32) -> Result<(), FetchError> {
            Ok(())
        }
        pub fn content(&self) -> Result<String, FetchError> {
            Err(FetchError::BrowserUnavailable(s!(NO_BROWSER)))
        }
        pub fn title(&self) -> Option<String> {
            None
        }
    }
}

pub use imp::BrowserSession;

/// One-shot `PageSource` over a fresh session per fetch.
pub struct BrowserSource {
    opts: FetchOptions,
}

impl BrowserSource {
    pub fn new(opts: &FetchOptions) -> Self {
        Self { opts: opts.clone() }
    }
}

impl PageSource for BrowserSource {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let session = BrowserSession::launch(&self.opts)?;
        session.load(url)?;
        if let Err(e) = session.scroll(self.opts.scroll_passes) {
            logw!("Browser: scroll failed on {url}: {e}");
        }
        session.content()
    }
}
