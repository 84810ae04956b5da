use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            dom::{self, ListingDocument},
            error::{Result, ScrapeError}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Browser session that manages a Chrome/Chromium instance and the tab it works in
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// Tab opened for this session
    tab: Arc<Tab>,

    /// Whether the browser process was started by this session
    launched: bool,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // One page per session, so the default idle timeout only needs to outlast a slow render
        launch_opts.idle_browser_timeout = Duration::from_secs(120);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| ScrapeError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab, launched: true })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect(options.ws_url).map_err(|e| ScrapeError::LaunchFailed(e.to_string()))?;
        Self::attach(browser)
    }

    /// Work in a new tab of a browser this session does not own
    fn attach(browser: Browser) -> Result<Self> {
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::TabOperationFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab, launched: false })
    }

    /// Navigate to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ScrapeError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| ScrapeError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Block until an element matching `css_selector` is present, or the timeout expires
    pub fn wait_for_element(&self, css_selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(css_selector, timeout)
            .map_err(|e| ScrapeError::TabOperationFailed(format!("Element '{}' did not appear: {}", css_selector, e)))?;

        Ok(())
    }

    /// Snapshot the rendered document of the tab
    pub fn document(&self) -> Result<ListingDocument> {
        dom::snapshot(&self.tab)
    }

    /// Close the session.
    ///
    /// A launched browser has all of its tabs closed and its process is killed when the
    /// `Browser` is dropped at the end of this call. An attached browser only loses the
    /// tab this session opened.
    pub fn close(self) -> Result<()> {
        if self.launched {
            let tabs = self
                .browser
                .get_tabs()
                .lock()
                .map_err(|e| ScrapeError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
                .clone();
            for tab in tabs {
                let _ = tab.close(false); // Ignore errors on individual tab closes
            }
        } else {
            self.tab
                .close(false)
                .map_err(|e| ScrapeError::TabOperationFailed(format!("Failed to close tab: {}", e)))?;
        }
        Ok(())
    }
}

/// A loaded, rendered page. Owns the browser session that produced it.
///
/// The handle must be released with [`PageHandle::close`], which consumes it, so a page
/// can only ever be closed once.
pub struct PageHandle {
    session: BrowserSession,
    url: String,
}

impl PageHandle {
    /// Navigate `session` to `url` and wait until `ready_selector` is present.
    ///
    /// A timeout while waiting for `ready_selector` is not an error: a page with no
    /// listings simply never renders one. When navigation fails the session is closed
    /// before the error is returned.
    pub fn open(session: BrowserSession, url: &str, ready_selector: &str, ready_timeout: Duration) -> Result<Self> {
        if let Err(e) = session.navigate(url).and_then(|()| session.wait_for_navigation()) {
            if let Err(close_err) = session.close() {
                log::warn!("Failed to close browser session for {}: {}", url, close_err);
            }
            return Err(e);
        }

        match session.wait_for_element(ready_selector, ready_timeout) {
            Ok(()) => log::debug!("Listing containers rendered on {}", url),
            Err(e) => log::warn!("{}; continuing with the current content of {}", e, url),
        }

        log::info!("Page content fetched successfully.");
        Ok(Self { session, url: url.to_string() })
    }

    /// Snapshot the rendered document
    pub fn document(&self) -> Result<ListingDocument> {
        self.session.document()
    }

    /// Release the browser session. Failures are logged, never returned.
    pub fn close(self) {
        let url = self.url;
        match self.session.close() {
            Ok(()) => log::debug!("Closed browser session for {}", url),
            Err(e) => log::warn!("Failed to close browser session for {}: {}", url, e),
        }
    }
}
