//! # scribe-csv
//!
//! Streaming CSV writer.
//!
//! Fields are written one at a time straight into any [`std::io::Write`] sink.
//! Each field is scanned once to decide whether it needs quoting, and embedded
//! quote characters are doubled while the field is being written, so a row is
//! never buffered in memory.
//!
//! ## Example
//!
//! ```rust
//! use scribe_csv::{CsvWriter, LineTerminator, WriteOptions};
//!
//! let options = WriteOptions::default().with_line_terminator(LineTerminator::LF);
//! let mut writer = CsvWriter::new(Vec::new(), options).unwrap();
//!
//! writer
//!     .write_line(["name", "comment"])
//!     .unwrap()
//!     .write_field("ada")
//!     .unwrap()
//!     .write_field("says \"hi\", twice")
//!     .unwrap()
//!     .end_line()
//!     .unwrap();
//!
//! let out = writer.into_inner().unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "name,comment\nada,\"says \"\"hi\"\", twice\"\n"
//! );
//! ```

mod error;
mod field;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use field::AsField;
pub use options::{LineTerminator, QuoteStrategy, WriteOptions};
pub use writer::CsvWriter;
