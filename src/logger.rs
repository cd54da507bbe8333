use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use colored::Colorize;

use crate::{
    error::LoggerError,
    record::{LogRecord, Severity},
    utils::format_record,
};

/// Serializes concurrent log calls into a single ordered append sequence on
/// one file, with optional mirrored console output.
///
/// The file is opened create-or-append once at construction to prove the
/// path writable, then the handle is released; every call reopens the file
/// in append mode for the duration of that write only, so each record is on
/// disk before the call returns. Lock-acquisition order is the sole ordering
/// authority for file contents — timestamps are informational.
///
/// Two processes writing to the same path are NOT coordinated; the
/// no-interleaving guarantee holds within one process only.
#[derive(Debug)]
pub struct Logger {
    path: PathBuf,
    mirror_console: AtomicBool,
    /// Guards the whole format-append-mirror sequence. No other state lives
    /// behind it, so a poisoned guard is still safe to reuse.
    write_lock: Mutex<()>,
}

impl Logger {
    /// Opens (creating if absent) the log file at `path` and releases the
    /// handle again. Console mirroring starts disabled.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, LoggerError> {
        let path = path.as_ref().to_path_buf();
        File::options()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::StorageUnavailable {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            mirror_console: AtomicBool::new(false),
            write_lock: Mutex::new(()),
        })
    }

    /// Sets the initial console mirroring flag.
    pub fn with_console_mirroring(mut self, yes: bool) -> Self {
        *self.mirror_console.get_mut() = yes;
        self
    }

    /// Toggles console mirroring at runtime.
    pub fn set_console_mirroring(&self, yes: bool) {
        self.mirror_console.store(yes, Ordering::Relaxed);
    }

    pub fn console_mirroring(&self) -> bool {
        self.mirror_console.load(Ordering::Relaxed)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Formats one record, appends it to the file and mirrors it to stdout
    /// when enabled, all under the instance lock.
    ///
    /// The file append and the console write are separable steps: both are
    /// attempted, and a failure in one does not skip the other. When both
    /// fail the file failure is the one reported. The built [`LogRecord`]
    /// comes back either way — on failure it travels inside the error.
    pub fn log(
        &self,
        severity: Severity,
        scope: &str,
        message: &str,
    ) -> Result<LogRecord, LoggerError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let record = LogRecord {
            message: format_record(severity, scope, message),
            severity,
        };
        let appended = self.append(&record.message);
        let mirrored = if self.console_mirroring() {
            mirror_to_console(&record)
        } else {
            Ok(())
        };
        if let Err(source) = appended {
            return Err(LoggerError::WriteFailure {
                path: self.path.clone(),
                record,
                source,
            });
        }
        if let Err(source) = mirrored {
            return Err(LoggerError::ConsoleFailure { record, source });
        }
        Ok(record)
    }

    pub fn info(&self, scope: &str, message: &str) -> Result<LogRecord, LoggerError> {
        self.log(Severity::Info, scope, message)
    }

    pub fn warn(&self, scope: &str, message: &str) -> Result<LogRecord, LoggerError> {
        self.log(Severity::Warning, scope, message)
    }

    pub fn error(&self, scope: &str, message: &str) -> Result<LogRecord, LoggerError> {
        self.log(Severity::Error, scope, message)
    }

    pub fn fatal(&self, scope: &str, message: &str) -> Result<LogRecord, LoggerError> {
        self.log(Severity::Fatal, scope, message)
    }

    pub fn final_info(&self, scope: &str, message: &str) -> Result<LogRecord, LoggerError> {
        self.log(Severity::FinalInfo, scope, message)
    }

    pub fn cancel_info(&self, scope: &str, message: &str) -> Result<LogRecord, LoggerError> {
        self.log(Severity::CancelInfo, scope, message)
    }

    fn append(&self, line: &str) -> io::Result<()> {
        // Reopened on every call; closing the handle is what makes each
        // record durable before the call returns.
        let mut file = File::options().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")
    }
}

fn mirror_to_console(record: &LogRecord) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match record.severity.console_color() {
        Some(color) => writeln!(out, "{}", record.message.as_str().color(color))?,
        None => writeln!(out, "{}", record.message)?,
    }
    out.flush()
}
