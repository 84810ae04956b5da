use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Options for launching a local Chrome/Chromium instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchOptions {
    /// Run without a visible window
    pub headless: bool,

    pub window_width: u32,
    pub window_height: u32,

    /// Path to the Chrome binary (auto-detected when unset)
    pub chrome_path: Option<PathBuf>,

    /// Persistent profile directory
    pub user_data_dir: Option<PathBuf>,

    pub sandbox: bool,

    /// How long to wait for the listing containers to render after navigation
    pub ready_timeout_ms: u64,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 1024,
            chrome_path: None,
            user_data_dir: None,
            sandbox: true,
            ready_timeout_ms: 5_000,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set the Chrome binary path
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Builder method: set a persistent profile directory
    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Builder method: enable or disable the Chrome sandbox
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Builder method: set the render wait timeout
    pub fn ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn ready_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }
}

/// Options for attaching to an already running browser over its DevTools WebSocket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionOptions {
    pub ws_url: String,
}

impl ConnectionOptions {
    pub fn new(ws_url: impl Into<String>) -> Self {
        Self { ws_url: ws_url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_wait_five_seconds() {
        let opts = LaunchOptions::default();
        assert!(opts.headless);
        assert_eq!(opts.ready_timeout_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let opts: LaunchOptions = serde_json::from_str(r#"{"headless": false, "chrome_path": "/usr/bin/chromium"}"#).unwrap();

        assert!(!opts.headless);
        assert_eq!(opts.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
        assert_eq!(opts.window_width, 1280);
        assert_eq!(opts.ready_timeout_ms, 5_000);
    }

    #[test]
    fn test_connection_options() {
        let opts = ConnectionOptions::new("ws://localhost:9222/devtools/browser/abc");
        assert_eq!(opts.ws_url, "ws://localhost:9222/devtools/browser/abc");
    }

    #[test]
    fn test_ready_timeout_builder() {
        let opts = LaunchOptions::new().ready_timeout(Duration::from_millis(1500));
        assert_eq!(opts.ready_timeout_ms, 1500);
    }

    #[test]
    fn test_ready_timeout_saturates() {
        let opts = LaunchOptions::new().ready_timeout(Duration::MAX);
        assert_eq!(opts.ready_timeout_ms, u64::MAX);
    }

    #[test]
    fn test_profile_and_sandbox_builders() {
        let opts = LaunchOptions::new().user_data_dir("/tmp/profile").sandbox(false);

        assert_eq!(opts.user_data_dir, Some(PathBuf::from("/tmp/profile")));
        assert!(!opts.sandbox);
    }
}
