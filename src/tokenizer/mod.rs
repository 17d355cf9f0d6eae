//! Shell-style argument vector tokenizer.
//!
//! Splits one command line into arguments under POSIX-like quoting and
//! escaping rules. Parsing runs in two passes over the same traversal: the
//! sizing pass validates the input and computes exact output sizes, then
//! the materializing pass fills buffers allocated once at their final size.

pub mod argv;
pub mod error;
pub mod separators;

mod classify;
mod cursor;

use crate::tokenizer::classify::{classify, ByteClass};
use crate::tokenizer::cursor::Cursor;

pub use argv::{Args, ParsedArgv};
pub use error::{ParseError, ParseErrorKind};
pub use separators::SeparatorSet;

/// Shell-style command-line tokenizer.
///
/// Owns its separator configuration, so concurrent parses through distinct
/// tokenizers never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    separators: SeparatorSet,
}

impl Tokenizer {
    /// Creates a tokenizer with the default whitespace separators.
    pub fn new() -> Self {
        Self {
            separators: SeparatorSet::default(),
        }
    }

    /// Creates a tokenizer with an explicit separator set.
    pub fn with_separators(separators: SeparatorSet) -> Self {
        Self { separators }
    }

    /// Replaces the separator set, or restores the default with `None`.
    pub fn configure_separators(&mut self, bytes: Option<&[u8]>) {
        self.separators = match bytes {
            Some(bytes) => SeparatorSet::new(bytes),
            None => SeparatorSet::default(),
        };
    }

    /// Returns the active separator set.
    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Parses one command-line string into an argument vector.
    pub fn parse(&self, input: &str) -> Result<ParsedArgv, ParseError> {
        self.parse_bytes(input.as_bytes())
    }

    /// Parses an optional input, mapping `None` to a missing-input error.
    ///
    /// Kept for callers bridging from interfaces where the input reference
    /// itself may be absent.
    pub fn parse_opt(&self, input: Option<&str>) -> Result<ParsedArgv, ParseError> {
        match input {
            Some(input) => self.parse(input),
            None => Err(ParseError::missing_input()),
        }
    }

    /// Parses one command line at the byte level.
    ///
    /// Separator bytes are arbitrary, so arguments are byte strings; with
    /// the default whitespace separators every argument of a `&str` input
    /// is valid UTF-8.
    pub fn parse_bytes(&self, input: &[u8]) -> Result<ParsedArgv, ParseError> {
        if input.is_empty() {
            return Err(ParseError::empty_input());
        }

        let mut measure = MeasurePass::default();
        scan(input, &self.separators, &mut measure)?;

        let mut fill = FillPass::sized_for(&measure);
        // The sizing pass already validated the input; the identical
        // traversal cannot fail here.
        scan(input, &self.separators, &mut fill)?;
        Ok(fill.into_argv())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses one command line with the default whitespace separators.
pub fn parse(input: &str) -> Result<ParsedArgv, ParseError> {
    Tokenizer::new().parse(input)
}

/// Output actions shared by the two passes.
///
/// [`scan`] is the single source of argument boundaries and escape
/// resolution; a sink only decides what each action does, so the sizing and
/// materializing passes cannot disagree on sizes.
trait ScanSink {
    /// An argument begins.
    fn open_argument(&mut self);
    /// One resolved content byte.
    fn emit_byte(&mut self, byte: u8);
    /// The current argument ends; accounts for one terminator byte.
    fn close_argument(&mut self);
}

/// Sizing pass: counts arguments and output bytes.
#[derive(Debug, Default)]
struct MeasurePass {
    argc: usize,
    data_len: usize,
}

impl ScanSink for MeasurePass {
    fn open_argument(&mut self) {
        self.argc += 1;
    }

    fn emit_byte(&mut self, _byte: u8) {
        self.data_len += 1;
    }

    fn close_argument(&mut self) {
        self.data_len += 1;
    }
}

/// Materializing pass: fills the exact-size buffers sized by
/// [`MeasurePass`].
#[derive(Debug)]
struct FillPass {
    data: Vec<u8>,
    offsets: Vec<usize>,
}

impl FillPass {
    fn sized_for(measured: &MeasurePass) -> Self {
        Self {
            data: Vec::with_capacity(measured.data_len),
            offsets: Vec::with_capacity(measured.argc + 1),
        }
    }

    fn into_argv(mut self) -> ParsedArgv {
        // Sentinel entry: one past the last argument's terminator.
        self.offsets.push(self.data.len());
        ParsedArgv::from_parts(self.data.into_boxed_slice(), self.offsets.into_boxed_slice())
    }
}

impl ScanSink for FillPass {
    fn open_argument(&mut self) {
        self.offsets.push(self.data.len());
    }

    fn emit_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    fn close_argument(&mut self) {
        self.data.push(0);
    }
}

/// Runs the shared traversal over positions `0..=input.len()`.
///
/// The one-past-the-end position classifies as a separator and flushes a
/// final in-progress argument.
fn scan<S: ScanSink>(
    input: &[u8],
    separators: &SeparatorSet,
    sink: &mut S,
) -> Result<(), ParseError> {
    let mut cursor = Cursor::new();
    let mut composing = false;

    while !cursor.past_end(input) {
        match classify(cursor.peek(input), separators) {
            ByteClass::Separator => {
                if composing {
                    composing = false;
                    sink.close_argument();
                }
                cursor.advance();
            }
            ByteClass::Backslash => {
                begin_argument(&mut composing, sink);
                scan_escape(input, &mut cursor, separators, sink);
            }
            ByteClass::DoubleQuote => {
                begin_argument(&mut composing, sink);
                scan_double_quoted(input, &mut cursor, sink)?;
            }
            ByteClass::SingleQuote => {
                begin_argument(&mut composing, sink);
                scan_single_quoted(input, &mut cursor, sink)?;
            }
            ByteClass::Ordinary(byte) => {
                begin_argument(&mut composing, sink);
                sink.emit_byte(byte);
                cursor.advance();
            }
        }
    }

    Ok(())
}

/// Opens an argument if none is in progress.
///
/// Quote delimiters open arguments too: an empty quoted span still yields
/// an (empty) argument.
fn begin_argument<S: ScanSink>(composing: &mut bool, sink: &mut S) {
    if !*composing {
        *composing = true;
        sink.open_argument();
    }
}

/// Resolves one backslash escape outside quoted spans, cursor on the
/// backslash.
fn scan_escape<S: ScanSink>(
    input: &[u8],
    cursor: &mut Cursor,
    separators: &SeparatorSet,
    sink: &mut S,
) {
    match cursor.peek_next(input) {
        // Escaped quote: the quote byte itself is the output, stripped of
        // its span-opening meaning. The backslash is dropped.
        Some(byte @ (b'"' | b'\'')) => {
            sink.emit_byte(byte);
            cursor.advance_by(2);
        }
        // Escaped separator: literal data, does not split the argument.
        Some(byte) if separators.contains(byte) => {
            sink.emit_byte(byte);
            cursor.advance_by(2);
        }
        // Dangling backslash at end of input stays literal data; the
        // end-of-input position then closes the argument as usual.
        None => {
            sink.emit_byte(b'\\');
            cursor.advance();
        }
        // Any other sequence keeps both bytes.
        Some(byte) => {
            sink.emit_byte(b'\\');
            sink.emit_byte(byte);
            cursor.advance_by(2);
        }
    }
}

/// Scans a double-quoted span, cursor on the opening quote.
///
/// Inside the span only `\"` collapses to a literal quote; a backslash
/// before any other byte keeps both bytes, and separators and single
/// quotes are ordinary data.
fn scan_double_quoted<S: ScanSink>(
    input: &[u8],
    cursor: &mut Cursor,
    sink: &mut S,
) -> Result<(), ParseError> {
    let opening_column = cursor.offset() + 1;
    cursor.advance();

    loop {
        match cursor.peek(input) {
            Some(b'"') => {
                cursor.advance();
                return Ok(());
            }
            Some(b'\\') => match cursor.peek_next(input) {
                Some(b'"') => {
                    sink.emit_byte(b'"');
                    cursor.advance_by(2);
                }
                Some(byte) => {
                    sink.emit_byte(b'\\');
                    sink.emit_byte(byte);
                    cursor.advance_by(2);
                }
                None => return Err(ParseError::unterminated_double_quote(opening_column)),
            },
            Some(byte) => {
                sink.emit_byte(byte);
                cursor.advance();
            }
            None => return Err(ParseError::unterminated_double_quote(opening_column)),
        }
    }
}

/// Scans a single-quoted span, cursor on the opening quote.
///
/// Every byte up to the closing quote is literal; backslashes have no
/// meaning here.
fn scan_single_quoted<S: ScanSink>(
    input: &[u8],
    cursor: &mut Cursor,
    sink: &mut S,
) -> Result<(), ParseError> {
    let opening_column = cursor.offset() + 1;
    cursor.advance();

    loop {
        match cursor.peek(input) {
            Some(b'\'') => {
                cursor.advance();
                return Ok(());
            }
            Some(byte) => {
                sink.emit_byte(byte);
                cursor.advance();
            }
            None => return Err(ParseError::unterminated_single_quote(opening_column)),
        }
    }
}
