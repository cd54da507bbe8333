//! Adapter that puts a [`Logger`] behind the `log` crate macros.
//!
//! The macro target (the call-site module path by default) becomes the
//! record scope, so `log::warn!("...")` from `myapp::net` lands as a
//! `WARNING myapp::net - ...` record. `Severity` variants without a `log`
//! counterpart (`Fatal`, `FinalInfo`, `CancelInfo`) stay reachable through
//! the [`Logger`] methods only.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{Logger, record::Severity};

struct FacadeLogger {
    logger: Logger,
}

fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info | Level::Debug | Level::Trace => Severity::Info,
    }
}

impl Log for FacadeLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let severity = severity_for(record.level());
        if let Err(e) = self
            .logger
            .log(severity, record.target(), &record.args().to_string())
        {
            // stderr is the only channel left once the file and stdout failed.
            eprintln!("{e}");
        }
    }

    fn flush(&self) {}
}

/// Installs `logger` as the process-wide sink behind the `log` macros.
/// Fails if another global logger was installed first.
pub fn init_global(logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(FacadeLogger { logger }))?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(severity_for(Level::Error), Severity::Error);
        assert_eq!(severity_for(Level::Warn), Severity::Warning);
        assert_eq!(severity_for(Level::Info), Severity::Info);
        assert_eq!(severity_for(Level::Debug), Severity::Info);
        assert_eq!(severity_for(Level::Trace), Severity::Info);
    }

    // The global logger can only be installed once per process, so the
    // whole facade round-trip lives in a single test.
    #[test]
    fn test_facade_routes_records_to_the_file() {
        let dir = std::path::PathBuf::from("/tmp/seqlog_test_facade");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("facade.log");

        let logger = Logger::new(&path).unwrap();
        init_global(logger).unwrap();

        log::info!("facade message");
        log::warn!(target: "facade_target", "routed warning");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("facade message"));
        assert!(content.contains("WARNING facade_target - routed warning"));
    }
}
