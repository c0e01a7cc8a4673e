//! Библиотека формата журналов Spektrum TLM
//!
//! Декодер бинарных телеметрических логов (.TLM), которые пишет
//! приёмник радиоуправления. Поток разбирается в ленивую
//! последовательность типизированных записей с метками времени.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use std::fs::File;
//! use tlm_core::TlmReader;
//!
//! let file = File::open("flight.TLM")?;
//! for result in TlmReader::new(file) {
//!     let record = result?;
//!     println!("{:#x} {:?} {}", record.offset, record.timestamp, record.label);
//! }
//! # Ok::<(), tlm_core::TlmError>(())
//! ```

pub mod payload;
pub mod reader;
pub mod source;

pub use payload::*;
pub use reader::*;
pub use source::*;

pub use tlm_types::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
