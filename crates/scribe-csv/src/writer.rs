//! CSV writer

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CsvResult;
use crate::field::AsField;
use crate::options::{QuoteStrategy, WriteOptions};

const CR: char = '\r';
const LF: char = '\n';

/// Where the next field lands within the current row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePosition {
    /// Nothing written since the last terminator; no separator needed
    LineStart,
    /// At least one field written; the next field is preceded by a separator
    MidLine,
}

/// Streaming CSV writer.
///
/// Every field goes straight to the sink as it is written. The writer only
/// remembers whether it is at the start of a line.
///
/// A write error leaves the current field or line partially written. The
/// writer performs no rollback, so treat the session as failed and drop or
/// [`close`](CsvWriter::close) it.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    sink: W,
    options: WriteOptions,
    terminator: &'static str,
    position: LinePosition,
}

impl CsvWriter<BufWriter<File>> {
    /// Create (or truncate) a CSV file
    pub fn create<P: AsRef<Path>>(path: P, options: WriteOptions) -> CsvResult<Self> {
        // Reject bad options before the file is created or truncated
        options.validate()?;
        let path = path.as_ref();
        let file = File::create(path)?;
        tracing::debug!("Opened CSV file {} for writing", path.display());
        Self::new(BufWriter::new(file), options)
    }

    /// Open a CSV file for appending, creating it if missing
    pub fn append<P: AsRef<Path>>(path: P, options: WriteOptions) -> CsvResult<Self> {
        // Reject bad options before the file is opened
        options.validate()?;
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing::debug!("Opened CSV file {} for appending", path.display());
        Self::new(BufWriter::new(file), options)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap a sink, rejecting options that would produce ambiguous output
    pub fn new(sink: W, options: WriteOptions) -> CsvResult<Self> {
        options.validate()?;
        let terminator = options.line_terminator.as_str();
        Ok(Self {
            sink,
            options,
            terminator,
            position: LinePosition::LineStart,
        })
    }

    /// Wrap a sink using the default options
    pub fn from_writer(sink: W) -> Self {
        let options = WriteOptions::default();
        Self {
            sink,
            terminator: options.line_terminator.as_str(),
            options,
            position: LinePosition::LineStart,
        }
    }

    /// The options this writer was built with
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Borrow the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Whether the next field starts a new row
    pub fn at_line_start(&self) -> bool {
        self.position == LinePosition::LineStart
    }

    /// Append a field to the current row.
    ///
    /// A separator is written first unless this is the first field of the row.
    /// The field is quoted when the strategy asks for it or when it contains
    /// the separator, the quote character, CR or LF. Embedded quote characters
    /// are doubled.
    pub fn write_field<F: AsField>(&mut self, value: F) -> CsvResult<&mut Self> {
        match self.position {
            LinePosition::MidLine => self.write_char(self.options.separator)?,
            LinePosition::LineStart => self.position = LinePosition::MidLine,
        }

        let strategy = self.options.quote_strategy;
        let value = match value.as_field() {
            Some(value) => value,
            None => {
                if strategy == QuoteStrategy::Always {
                    self.write_quote_pair()?;
                }
                return Ok(self);
            }
        };

        if value.is_empty() {
            if matches!(strategy, QuoteStrategy::Always | QuoteStrategy::Empty) {
                self.write_quote_pair()?;
            }
            return Ok(self);
        }

        let quote = self.options.quote;
        let separator = self.options.separator;
        let mut needs_quotes = strategy == QuoteStrategy::Always;
        let mut first_quote = None;

        // Stop at the first quote: the field is quoted anyway and the escaping
        // pass finds the remaining quotes itself.
        for (pos, c) in value.char_indices() {
            if c == quote {
                needs_quotes = true;
                first_quote = Some(pos);
                break;
            }
            if !needs_quotes && (c == separator || c == LF || c == CR) {
                needs_quotes = true;
            }
        }

        if needs_quotes {
            self.write_char(quote)?;
        }

        match first_quote {
            Some(pos) => self.write_escaped(value, pos)?,
            None => self.write_str(value)?,
        }

        if needs_quotes {
            self.write_char(quote)?;
        }

        Ok(self)
    }

    /// Write every value as a field, then terminate the line
    pub fn write_line<I>(&mut self, values: I) -> CsvResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsField,
    {
        for value in values {
            self.write_field(value)?;
        }
        self.end_line()
    }

    /// Terminate the current line, even if it holds no fields
    pub fn end_line(&mut self) -> CsvResult<&mut Self> {
        self.write_str(self.terminator)?;
        self.position = LinePosition::LineStart;
        Ok(self)
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> CsvResult<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying sink
    pub fn into_inner(mut self) -> CsvResult<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Flush and release the underlying sink
    pub fn close(mut self) -> CsvResult<()> {
        self.sink.flush()?;
        drop(self.sink);
        tracing::debug!("Closed CSV writer");
        Ok(())
    }

    /// Write `value` from the start, doubling each quote character.
    ///
    /// `first_quote` is the byte offset of the first quote in `value`.
    fn write_escaped(&mut self, value: &str, first_quote: usize) -> CsvResult<()> {
        let quote = self.options.quote;
        let quote_len = quote.len_utf8();
        let mut start = 0;
        let mut next_quote = Some(first_quote);

        while let Some(pos) = next_quote {
            let end = pos + quote_len;
            self.write_str(&value[start..end])?;
            self.write_char(quote)?;
            start = end;
            next_quote = value[start..].find(quote).map(|offset| start + offset);
        }

        if start < value.len() {
            self.write_str(&value[start..])?;
        }
        Ok(())
    }

    fn write_quote_pair(&mut self) -> CsvResult<()> {
        let quote = self.options.quote;
        self.write_char(quote)?;
        self.write_char(quote)
    }

    fn write_char(&mut self, c: char) -> CsvResult<()> {
        let mut buf = [0u8; 4];
        self.sink.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> CsvResult<()> {
        self.sink.write_all(s.as_bytes())?;
        Ok(())
    }
}
