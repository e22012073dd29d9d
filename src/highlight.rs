//! The classification engine: a single forward pass over a snippet that
//! tags every character with a display category.
//!
//! The scanner is driven entirely by the per-character sets of a
//! [`SyntaxProfile`]. Overlapping rules (block-comment delimiters, string
//! toggles, line-comment markers, call and accessor syntax) are resolved by
//! a fixed priority with one character of lookahead. Bare words accumulate
//! in a bounded buffer and are resolved against the profile sets when a
//! delimiter flushes them.

use crate::error::OverflowError;
use crate::profile::SyntaxProfile;
use crate::span::{Category, Position, Span};

/// Longest bare word the scanner will accumulate, in bytes.
pub const WORD_CAPACITY: usize = 256;

/// Scanner mode. Exactly one holds at a time; entering a string or comment
/// replaces the mode rather than setting a parallel flag, so contradictory
/// combinations cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    InString,
    InLineComment,
    InBlockComment,
}

/// Bounded accumulator for a bare word between delimiters.
#[derive(Debug)]
struct WordBuffer {
    text: String,
    start: Position,
}

impl WordBuffer {
    fn new() -> Self {
        WordBuffer { text: String::new(), start: Position::new(0, 0) }
    }

    /// Append one character; the first append records the word's start
    /// coordinate. Returns `false` when the word would exceed capacity.
    fn push(&mut self, c: char, at: Position) -> bool {
        if self.text.len() + c.len_utf8() > WORD_CAPACITY {
            return false;
        }
        if self.text.is_empty() {
            self.start = at;
        }
        self.text.push(c);
        true
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn as_str(&self) -> &str {
        &self.text
    }

    fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    cursor: Position,
    origin_col: usize,
    state: LexState,
    buf: WordBuffer,
    /// Open string/comment run: category, accumulated text, start coordinate.
    run: Option<(Category, String, Position)>,
    spans: Vec<Span>,
    profile: &'a SyntaxProfile,
}

/// Classify every character of `text`, producing ordered spans.
///
/// A pure function of its inputs: the same text, origin, and profile always
/// yield the same spans. Spans cover the input exactly, in document order,
/// whitespace and newlines included. An unterminated string or comment is
/// not an error; the remainder of the input simply keeps that category.
///
/// Fails only when a bare word outgrows the accumulation buffer, in which
/// case no spans are returned at all.
pub fn highlight(
    text: &str,
    origin: Position,
    profile: &SyntaxProfile,
) -> Result<Vec<Span>, OverflowError> {
    Scanner::new(text, origin, profile).run()
}

impl<'a> Scanner<'a> {
    fn new(text: &str, origin: Position, profile: &'a SyntaxProfile) -> Self {
        Scanner {
            chars: text.chars().collect(),
            pos: 0,
            cursor: origin,
            origin_col: origin.col,
            state: LexState::Normal,
            buf: WordBuffer::new(),
            run: None,
            spans: Vec::new(),
            profile,
        }
    }

    fn run(mut self) -> Result<Vec<Span>, OverflowError> {
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            match self.state {
                LexState::InBlockComment => self.scan_block_comment(c),
                LexState::InString => self.scan_string(c),
                LexState::InLineComment => self.scan_line_comment(c),
                LexState::Normal => self.scan_normal(c)?,
            }
        }
        self.close_run();
        self.flush_word(None);
        Ok(self.spans)
    }

    // ── Cursor and emission ──────────────────────────────────────────

    /// Consume the character under the cursor: newline drops to the next
    /// row and rewinds the column to the origin column.
    fn advance(&mut self, c: char) {
        self.pos += 1;
        if c == '\n' {
            self.cursor.row += 1;
            self.cursor.col = self.origin_col;
        } else {
            self.cursor.col += 1;
        }
    }

    /// Emit a single-character span.
    fn emit_char(&mut self, category: Category, c: char) {
        let start = self.cursor;
        self.advance(c);
        self.spans.push(Span::new(category, c.to_string(), start, self.cursor));
    }

    /// Start a string/comment run at the cursor. Characters consumed with
    /// `run_push` coalesce into one span until `close_run`.
    fn open_run(&mut self, category: Category) {
        self.run = Some((category, String::new(), self.cursor));
    }

    fn run_push(&mut self, c: char) {
        if let Some((_, text, _)) = self.run.as_mut() {
            text.push(c);
        }
        self.advance(c);
    }

    fn close_run(&mut self) {
        if let Some((category, text, start)) = self.run.take() {
            self.spans.push(Span::new(category, text, start, self.cursor));
        }
    }

    // ── Word buffer ──────────────────────────────────────────────────

    fn buffer_char(&mut self, c: char) -> Result<(), OverflowError> {
        if !self.buf.push(c, self.cursor) {
            return Err(OverflowError { position: self.cursor });
        }
        self.advance(c);
        Ok(())
    }

    /// Resolve the buffered word: keyword, then function, then symbol,
    /// then operator, then plain.
    fn classify_word(&self, word: &str) -> Category {
        let p = self.profile;
        if p.keywords.contains(word) {
            Category::Keyword
        } else if p.functions.contains(word) {
            Category::Function
        } else if p.symbols.contains(word) {
            Category::Symbol
        } else if p.operators.contains(word) {
            Category::Operator
        } else {
            Category::Plain
        }
    }

    /// Emit the buffered word, if any. `forced` overrides the standard
    /// classification (call targets become functions, digit flushes stay
    /// plain).
    fn flush_word(&mut self, forced: Option<Category>) {
        if self.buf.is_empty() {
            return;
        }
        let start = self.buf.start;
        let word = self.buf.take();
        let category = forced.unwrap_or_else(|| self.classify_word(&word));
        self.spans.push(Span::new(category, word, start, self.cursor));
    }

    // ── State handlers ───────────────────────────────────────────────

    fn scan_block_comment(&mut self, c: char) {
        let p = self.profile;
        // Close is the mirrored delimiter: trail char here, lead char next.
        if p.block_trail.contains_char(c) && p.block_lead.contains_at(&self.chars, self.pos + 1) {
            self.run_push(c);
            let next = self.chars[self.pos];
            self.run_push(next);
            self.close_run();
            self.state = LexState::Normal;
        } else {
            self.run_push(c);
        }
    }

    fn scan_string(&mut self, c: char) {
        self.run_push(c);
        if self.profile.string_delims.contains_char(c) {
            self.close_run();
            self.state = LexState::Normal;
        }
    }

    fn scan_line_comment(&mut self, c: char) {
        if c == '\n' {
            // The newline ends the comment but is not part of it.
            self.close_run();
            self.state = LexState::Normal;
            self.emit_char(Category::Plain, c);
        } else {
            self.run_push(c);
        }
    }

    /// True when `line_comment_len` consecutive characters starting at the
    /// cursor are each members of the line-comment set.
    fn line_marker_ahead(&self) -> bool {
        let p = self.profile;
        (0..p.line_comment_len).all(|k| p.line_comment_chars.contains_at(&self.chars, self.pos + k))
    }

    /// Greedy run of word characters after an accessor dot: one token,
    /// function when the profile knows it, plain otherwise.
    fn scan_accessor(&mut self) -> Result<(), OverflowError> {
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.buffer_char(c)?;
        }
        if self.buf.is_empty() {
            return Ok(());
        }
        let category = if self.profile.functions.contains(self.buf.as_str()) {
            Category::Function
        } else {
            Category::Plain
        };
        self.flush_word(Some(category));
        Ok(())
    }

    fn scan_normal(&mut self, c: char) -> Result<(), OverflowError> {
        let p = self.profile;

        // Block-comment open: lead char here, trail char next.
        if p.block_lead.contains_char(c) && p.block_trail.contains_at(&self.chars, self.pos + 1) {
            self.flush_word(None);
            self.open_run(Category::Comment);
            self.run_push(c);
            let next = self.chars[self.pos];
            self.run_push(next);
            self.state = LexState::InBlockComment;
            return Ok(());
        }

        // String delimiter: any member of the set toggles.
        if p.string_delims.contains_char(c) {
            self.flush_word(None);
            self.open_run(Category::String);
            self.run_push(c);
            self.state = LexState::InString;
            return Ok(());
        }

        if p.line_comment_chars.contains_char(c) {
            if self.line_marker_ahead() {
                self.flush_word(None);
                self.open_run(Category::Comment);
                for _ in 0..p.line_comment_len {
                    let m = self.chars[self.pos];
                    self.run_push(m);
                }
                self.state = LexState::InLineComment;
            } else {
                // Marker prefix without the rest: plain character, no comment.
                self.flush_word(None);
                self.emit_char(Category::Plain, c);
            }
            return Ok(());
        }

        // Any bare word directly before `(` is a call target, whether or
        // not the functions set lists it.
        if c == '(' {
            self.flush_word(Some(Category::Function));
            self.emit_char(Category::Symbol, c);
            return Ok(());
        }

        if c == '.' {
            self.flush_word(None);
            let category = if p.operators.contains_char('.') {
                Category::Operator
            } else {
                Category::Symbol
            };
            self.emit_char(category, c);
            self.scan_accessor()?;
            return Ok(());
        }

        if c.is_whitespace() {
            self.flush_word(None);
            self.emit_char(Category::Plain, c);
            return Ok(());
        }

        if c.is_ascii_digit() {
            self.flush_word(Some(Category::Plain));
            self.emit_char(Category::Number, c);
            return Ok(());
        }

        if p.operators.contains_char(c) {
            self.flush_word(None);
            self.emit_char(Category::Operator, c);
            return Ok(());
        }

        if p.symbols.contains_char(c) {
            self.flush_word(None);
            self.emit_char(Category::Symbol, c);
            return Ok(());
        }

        self.buffer_char(c)
    }
}
