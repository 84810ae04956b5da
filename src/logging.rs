//! Logger construction
//!
//! The logger is built explicitly and handed to [`install`], so nothing in the library
//! configures logging on its own.

use env_logger::{Builder, Logger, Target};
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

/// Build a logger writing `<timestamp> - <LEVEL> - <message>` lines to stderr.
///
/// `level` is the default filter; `RUST_LOG`, when set, overrides it.
pub fn build_logger(level: LevelFilter) -> Logger {
    build_logger_with(level, std::env::var("RUST_LOG").ok().as_deref(), Target::Stderr)
}

/// Like [`build_logger`], with the override filters and the output target passed in directly
pub fn build_logger_with(level: LevelFilter, filters: Option<&str>, target: Target) -> Logger {
    let mut builder = Builder::new();
    builder.filter_level(level).target(target);

    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }

    builder.format(|buf, record| writeln!(buf, "{} - {} - {}", buf.timestamp(), record.level(), record.args()));
    builder.build()
}

/// Install `logger` as the process-wide `log` backend
pub fn install(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use regex::Regex;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory sink for `Target::Pipe`
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn captured_logger(level: LevelFilter, filters: Option<&str>) -> (Logger, Captured) {
        let sink = Captured::default();
        let logger = build_logger_with(level, filters, Target::Pipe(Box::new(sink.clone())));
        (logger, sink)
    }

    #[test]
    fn test_default_level() {
        let (logger, _) = captured_logger(LevelFilter::Debug, None);
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_filters_override_level() {
        let (logger, _) = captured_logger(LevelFilter::Debug, Some("warn"));
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_line_format() {
        let (logger, sink) = captured_logger(LevelFilter::Debug, None);

        logger.log(
            &log::Record::builder()
                .args(format_args!("Fetching data for area: athina"))
                .level(log::Level::Info)
                .build(),
        );
        logger.flush();

        let line = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z - INFO - Fetching data for area: athina\n$").unwrap();
        let output = sink.contents();
        assert!(line.is_match(&output), "unexpected log line: {:?}", output);
    }

    #[test]
    fn test_filtered_record_not_written() {
        let (logger, sink) = captured_logger(LevelFilter::Info, None);

        logger.log(
            &log::Record::builder()
                .args(format_args!("Total structured data: 4 entries"))
                .level(log::Level::Debug)
                .build(),
        );
        logger.flush();

        assert!(sink.contents().is_empty());
    }
}
