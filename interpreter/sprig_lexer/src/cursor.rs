//! Byte cursor over source text.
//!
//! The cursor advances byte-by-byte; reads at or past the end of input
//! yield `0x00`, so callers can branch on the current byte without a
//! separate bounds check. Positions are `u32` byte offsets, the same
//! width spans carry.
//!
//! Token boundaries only ever land on ASCII delimiters (whitespace,
//! brackets) or end of input, so `slice_from` always cuts on UTF-8
//! character boundaries even though the cursor walks bytes.

/// Read-only cursor over a source string.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        debug_assert!(
            u32::try_from(src.len()).is_ok(),
            "source length must fit in u32 offsets"
        );
        Cursor { src, pos: 0 }
    }

    /// The byte at the current position, or `0x00` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos as usize).copied().unwrap_or(0)
    }

    /// The byte one position ahead, or `0x00` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.src
            .as_bytes()
            .get(self.pos as usize + 1)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    /// Current byte offset into the source.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds for the current byte. Stops at end of
    /// input regardless of the predicate.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(&b) = self.src.as_bytes().get(self.pos as usize) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// The source text from `start` to the current position.
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} past cursor {}", self.pos);
        &self.src[start as usize..self.pos as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn current_and_advance_walk_the_source() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), b'a');
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
        cursor.advance();
        assert_eq!(cursor.current(), 0);
        assert!(cursor.is_eof());
    }

    #[test]
    fn peek_does_not_move() {
        let cursor = Cursor::new("xy");
        assert_eq!(cursor.peek(), b'y');
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn reads_past_end_yield_zero() {
        let cursor = Cursor::new("a");
        assert_eq!(cursor.peek(), 0);
        assert_eq!(Cursor::new("").current(), 0);
    }

    #[test]
    fn eat_while_stops_on_predicate_or_end() {
        let mut cursor = Cursor::new("aaab");
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), b'b');

        let mut run_off = Cursor::new("aaa");
        run_off.eat_while(|b| b == b'a');
        assert!(run_off.is_eof());
    }

    #[test]
    fn slice_from_returns_the_consumed_text() {
        let mut cursor = Cursor::new("word rest");
        cursor.eat_while(|b| !b.is_ascii_whitespace());
        assert_eq!(cursor.slice_from(0), "word");
    }
}
