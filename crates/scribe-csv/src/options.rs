//! CSV write options

use std::fmt;
use std::str::FromStr;

use crate::error::{CsvError, CsvResult};

const CR: char = '\r';
const LF: char = '\n';

/// Options for writing CSV
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriteOptions {
    /// Field separator (default: comma)
    pub separator: char,
    /// Quote character (default: double quote)
    pub quote: char,
    /// When fields get wrapped in quotes
    pub quote_strategy: QuoteStrategy,
    /// Line terminator (default: CRLF)
    pub line_terminator: LineTerminator,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            quote: '"',
            quote_strategy: QuoteStrategy::Required,
            line_terminator: LineTerminator::CRLF,
        }
    }
}

impl WriteOptions {
    /// Set the field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the quoting strategy
    pub fn with_quote_strategy(mut self, quote_strategy: QuoteStrategy) -> Self {
        self.quote_strategy = quote_strategy;
        self
    }

    /// Set the line terminator
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    /// Check that the options produce unambiguous output.
    ///
    /// The quote character must differ from the separator, and neither may be a
    /// carriage return or line feed.
    pub fn validate(&self) -> CsvResult<()> {
        if self.quote == self.separator {
            return Err(CsvError::invalid_options(format!(
                "quote character {:?} is also the field separator",
                self.quote
            )));
        }
        if self.separator == CR || self.separator == LF {
            return Err(CsvError::invalid_options(format!(
                "field separator {:?} is a line break character",
                self.separator
            )));
        }
        if self.quote == CR || self.quote == LF {
            return Err(CsvError::invalid_options(format!(
                "quote character {:?} is a line break character",
                self.quote
            )));
        }
        Ok(())
    }
}

/// When a field is wrapped in quote characters.
///
/// Fields containing the separator, the quote character, CR or LF are quoted
/// under every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuoteStrategy {
    /// Quote only when the content requires it
    #[default]
    Required,
    /// Quote every field, null and empty ones included
    Always,
    /// Quote empty strings, so they stay distinguishable from null fields
    Empty,
}

impl FromStr for QuoteStrategy {
    type Err = CsvError;

    fn from_str(s: &str) -> CsvResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "required" => Ok(QuoteStrategy::Required),
            "always" => Ok(QuoteStrategy::Always),
            "empty" => Ok(QuoteStrategy::Empty),
            _ => Err(CsvError::invalid_options(format!(
                "unknown quote strategy '{s}' (expected required, always or empty)"
            ))),
        }
    }
}

impl fmt::Display for QuoteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuoteStrategy::Required => "required",
            QuoteStrategy::Always => "always",
            QuoteStrategy::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    #[default]
    CRLF,
    /// Mac classic (CR)
    CR,
    /// CRLF on Windows, LF everywhere else
    Platform,
}

impl LineTerminator {
    /// The exact text written at the end of every line
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
            LineTerminator::CR => "\r",
            LineTerminator::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

impl FromStr for LineTerminator {
    type Err = CsvError;

    fn from_str(s: &str) -> CsvResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineTerminator::LF),
            "crlf" => Ok(LineTerminator::CRLF),
            "cr" => Ok(LineTerminator::CR),
            "platform" => Ok(LineTerminator::Platform),
            _ => Err(CsvError::invalid_options(format!(
                "unknown line terminator '{s}' (expected lf, crlf, cr or platform)"
            ))),
        }
    }
}
