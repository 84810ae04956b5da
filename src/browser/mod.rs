//! Browser management and page loading
//!
//! - [`BrowserSession`]: a single Chrome instance (launched or attached) and its tab
//! - [`PageHandle`]: a rendered page that owns its session until closed
//! - [`PageLoader`]: the seam the scrape loop loads documents through

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::{BrowserSession, PageHandle};

use crate::{dom::ListingDocument, error::Result};

/// Produces rendered documents for URLs
pub trait PageLoader {
    /// Load `url` and snapshot it once an element matching `ready_selector` is present.
    ///
    /// Implementations release every resource they acquire before returning, on both
    /// the success and the failure path.
    fn load(&mut self, url: &str, ready_selector: &str) -> Result<ListingDocument>;
}

/// Where the loader gets its browser from
#[derive(Debug, Clone)]
pub enum BrowserSource {
    Launch(LaunchOptions),
    Connect(ConnectionOptions),
}

/// Loads pages with one fresh headless_chrome session per page
#[derive(Debug, Clone)]
pub struct ChromeLoader {
    source: BrowserSource,
    launch: LaunchOptions,
}

impl ChromeLoader {
    /// Launch a local browser for every page
    pub fn new(options: LaunchOptions) -> Self {
        Self {
            source: BrowserSource::Launch(options.clone()),
            launch: options,
        }
    }

    /// Attach to a running browser for every page; `options` still supplies the ready timeout
    pub fn connect(connection: ConnectionOptions, options: LaunchOptions) -> Self {
        Self {
            source: BrowserSource::Connect(connection),
            launch: options,
        }
    }

    fn session(&self) -> Result<BrowserSession> {
        match &self.source {
            BrowserSource::Launch(options) => BrowserSession::launch(options.clone()),
            BrowserSource::Connect(connection) => BrowserSession::connect(connection.clone()),
        }
    }
}

impl PageLoader for ChromeLoader {
    fn load(&mut self, url: &str, ready_selector: &str) -> Result<ListingDocument> {
        let session = self.session()?;
        let page = PageHandle::open(session, url, ready_selector, self.launch.ready_timeout_duration())?;

        let document = page.document();
        page.close();
        document
    }
}
