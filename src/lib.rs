//! # seqlog
//! Thread-safe single-file logger with optional colored console mirroring.
//!
//! Every call formats one record, appends it to the log file and, when
//! mirroring is enabled, echoes it to stdout. Calls from any number of
//! threads sharing one [`Logger`] are serialized; records never interleave
//! in the file and each call lands as exactly one line.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! seqlog = "0.1.0"
//! ```
//!
//! ```rust
//! use seqlog::Logger;
//!
//! let logger = Logger::new("/tmp/seqlog_doc_usage.log").expect("unable to open log file");
//! logger.info("startup", "Hello, world!").unwrap();
//! assert!(std::fs::read_to_string("/tmp/seqlog_doc_usage.log").unwrap().ends_with("Hello, world!\n"));
//! ```
//!
//! ## Multi-threaded logging
//! ```rust
//! use std::sync::Arc;
//! use seqlog::Logger;
//!
//! let logger = Arc::new(Logger::new("/tmp/seqlog_doc_threads.log").unwrap());
//! let handles: Vec<_> = (0..5).map(|i| {
//!     let logger = Arc::clone(&logger);
//!     std::thread::spawn(move || {
//!         logger.warn(&format!("thread {i}"), "Hello, world!").unwrap();
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Console mirroring
//! Mirroring is off by default. Enable it at construction or toggle it at
//! runtime; INFO prints cyan, WARNING yellow, ERROR red, everything else
//! unstyled. Colors degrade to plain text when stdout is not a terminal.
//!
//! ```rust
//! use seqlog::Logger;
//!
//! let logger = Logger::new("/tmp/seqlog_doc_console.log")
//!     .unwrap()
//!     .with_console_mirroring(true);
//! logger.error("net", "connection refused").unwrap();
//! logger.set_console_mirroring(false);
//! ```
//!
//! ## `log` macros
//! A [`Logger`] can also sit behind the `log` facade; the macro target
//! (the call-site module path) becomes the record scope.
//!
//! ```rust
//! use seqlog::{Logger, facade};
//!
//! let logger = Logger::new("/tmp/seqlog_doc_facade.log").unwrap();
//! facade::init_global(logger).unwrap();
//! log::info!("Hello, world!");
//! ```

mod config;
mod error;
mod logger;
mod record;
mod utils;

pub mod facade;

pub use config::SEQLOG_CONFIG;
pub use error::LoggerError;
pub use logger::Logger;
pub use record::{LogRecord, Severity};
