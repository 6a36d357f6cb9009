//! Byte cursor over a single source line.
//!
//! The scanner works strictly line by line, so the cursor never sees a
//! `\n`. Reads past the end of the line return `0x00`, which no scanning
//! predicate accepts, so `eat_while` loops terminate at end of line without
//! explicit bounds checks in the callers.
//!
//! # Character Boundaries
//!
//! Positions are byte offsets. The cursor only advances by one byte over
//! ASCII, by [`advance_char`](LineCursor::advance_char) over anything else,
//! and by memchr offsets to ASCII quote bytes. Every position it reaches is
//! therefore a UTF-8 character boundary and slicing is always valid.

/// Cursor over one line of source text.
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the start of `line`.
    ///
    /// `line` should not contain `\n`; the scanner splits on it first.
    pub fn new(line: &'a str) -> Self {
        debug_assert!(!line.contains('\n'), "line cursor given a multi-line str");
        LineCursor { line, pos: 0 }
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every byte of the line has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Byte at the current position, `0x00` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead, `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.line.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Full character at the current position.
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance the cursor by one byte.
    ///
    /// Only valid when the current byte is ASCII.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "advance() over a non-ASCII byte");
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the line.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
    }

    /// Advance past one full UTF-8 character.
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.advance_n(width);
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred` must reject `0x00` and all non-ASCII bytes, otherwise the
    /// cursor could stop inside a multi-byte character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Move to the end of the line.
    #[inline]
    pub fn eat_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Offset from the current position to the next occurrence of `byte`.
    ///
    /// Uses memchr for the search. `byte` must be ASCII so the match is
    /// always a character boundary.
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        debug_assert!(byte.is_ascii(), "find_byte needs an ASCII needle");
        memchr::memchr(byte, &self.line.as_bytes()[self.pos..])
    }

    /// Unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Text from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} past cursor {}", self.pos);
        &self.line[start..self.pos]
    }

    /// 1-based character column of byte offset `pos`.
    pub fn column_of(&self, pos: usize) -> u32 {
        let chars = self.line[..pos.min(self.line.len())].chars().count();
        u32::try_from(chars + 1).unwrap_or(u32::MAX)
    }
}
