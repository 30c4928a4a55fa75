use core::iter::FusedIterator;

/// Splits a line into tokens on demand, keeping its position between calls.
///
/// The delimiter set is chosen per call, so the same cursor can hand out a few
/// delimited tokens and then the unsplit rest of the line.
///
/// Splitting rules:
/// - delimiters in front of a token are skipped, so a run of delimiters never yields
///   an empty token;
/// - a token ends at the next delimiter, which is consumed;
/// - an empty delimiter set returns everything left, verbatim;
/// - once exhausted, every call returns `None`.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Creates a cursor at the start of `line` without consuming anything.
    pub const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Creates a cursor over `line` and returns it along with the first token.
    ///
    /// # Example
    /// ```
    /// let (mut cursor, first) = Tokenizer::begin("LED ON", &[' ']);
    /// assert_eq!(first, Some("LED"));
    /// assert_eq!(cursor.next_token(&[' ']), Some("ON"));
    /// ```
    pub fn begin(line: &'a str, delimiters: &[char]) -> (Self, Option<&'a str>) {
        let mut cursor = Self::new(line);
        let first = cursor.next_token(delimiters);
        (cursor, first)
    }

    /// Returns the next token delimited by any character of `delimiters`.
    pub fn next_token(&mut self, delimiters: &[char]) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(|c: char| delimiters.contains(&c));
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        match rest.find(|c: char| delimiters.contains(&c)) {
            Some(end) => {
                let delimiter_len = rest[end..].chars().next().map_or(0, char::len_utf8);
                self.rest = &rest[end + delimiter_len..];
                Some(&rest[..end])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }

    /// Returns everything not yet consumed, unsplit.
    pub fn remainder(&mut self) -> Option<&'a str> {
        self.next_token(&[])
    }

    /// Returns `true` once the whole line has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }
}

/// Argument cursor lent to a command handler.
///
/// The dispatcher has already consumed the command token; what is left are the
/// arguments, split on the configured delimiter. An `Arguments` value borrows the
/// received line and therefore cannot outlive the handler call it was passed to.
///
/// It is also a fused [`Iterator`] over the remaining arguments.
#[derive(Debug, Clone)]
pub struct Arguments<'a> {
    cursor: Tokenizer<'a>,
    delimiter: [char; 1],
}

impl<'a> Arguments<'a> {
    /// Wraps a cursor positioned after the command token.
    pub fn new(cursor: Tokenizer<'a>, delimiter: char) -> Self {
        Self {
            cursor,
            delimiter: [delimiter],
        }
    }

    /// Returns the next delimiter-separated argument, or `None` when exhausted.
    pub fn next_argument(&mut self) -> Option<&'a str> {
        self.cursor.next_token(&self.delimiter)
    }

    /// Returns the rest of the line as-is, or `None` when nothing is left.
    pub fn remaining_arguments(&mut self) -> Option<&'a str> {
        self.cursor.remainder()
    }

    /// The delimiter arguments are split on.
    pub fn delimiter(&self) -> char {
        self.delimiter[0]
    }
}

impl<'a> Iterator for Arguments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_argument()
    }
}

impl FusedIterator for Arguments<'_> {}

// ==================== TESTS =======================

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    const SPACE: &[char] = &[' '];

    // ==================== BEGIN / NEXT ====================

    #[test]
    fn test_begin_returns_first_token() {
        let (_, first) = Tokenizer::begin("LED ON", SPACE);
        assert_eq!(first, Some("LED"));
    }

    #[test]
    fn test_next_token_walks_all_tokens() {
        let (mut cursor, first) = Tokenizer::begin("set 1 2 3", SPACE);
        assert_eq!(first, Some("set"));
        assert_eq!(cursor.next_token(SPACE), Some("1"));
        assert_eq!(cursor.next_token(SPACE), Some("2"));
        assert_eq!(cursor.next_token(SPACE), Some("3"));
        assert_eq!(cursor.next_token(SPACE), None);
    }

    #[test]
    fn test_empty_line_has_no_token() {
        let (cursor, first) = Tokenizer::begin("", SPACE);
        assert_eq!(first, None);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_only_delimiters_has_no_token() {
        let (_, first) = Tokenizer::begin("    ", SPACE);
        assert_eq!(first, None);
    }

    // ==================== DELIMITER POLICY ====================

    #[test]
    fn test_consecutive_delimiters_are_collapsed() {
        let (mut cursor, first) = Tokenizer::begin("  a   b  ", SPACE);
        assert_eq!(first, Some("a"));
        assert_eq!(cursor.next_token(SPACE), Some("b"));
        assert_eq!(cursor.next_token(SPACE), None);
    }

    #[test]
    fn test_delimiter_set_can_change_between_calls() {
        let (mut cursor, first) = Tokenizer::begin("key=value,other", &['=']);
        assert_eq!(first, Some("key"));
        assert_eq!(cursor.next_token(&[',']), Some("value"));
        assert_eq!(cursor.next_token(&[',']), Some("other"));
    }

    #[test]
    fn test_multiple_delimiters_in_one_set() {
        let (mut cursor, first) = Tokenizer::begin("a,b;c", &[',', ';']);
        assert_eq!(first, Some("a"));
        assert_eq!(cursor.next_token(&[',', ';']), Some("b"));
        assert_eq!(cursor.next_token(&[',', ';']), Some("c"));
    }

    // ==================== REMAINDER ====================

    #[test]
    fn test_remainder_returns_rest_verbatim() {
        let (mut cursor, _) = Tokenizer::begin("say hello   big  world", SPACE);
        assert_eq!(cursor.remainder(), Some("hello   big  world"));
        assert_eq!(cursor.remainder(), None);
    }

    #[test]
    fn test_remainder_keeps_extra_leading_delimiters() {
        // Only the single delimiter ending the command is consumed.
        let (mut cursor, _) = Tokenizer::begin("say  hi", SPACE);
        assert_eq!(cursor.remainder(), Some(" hi"));
    }

    #[test]
    fn test_remainder_after_last_token_is_none() {
        let (mut cursor, _) = Tokenizer::begin("ping", SPACE);
        assert_eq!(cursor.remainder(), None);
    }

    // ==================== EXHAUSTION ====================

    #[test]
    fn test_exhaustion_is_sticky() {
        let (mut cursor, _) = Tokenizer::begin("cmd arg", SPACE);
        assert_eq!(cursor.next_token(SPACE), Some("arg"));
        for _ in 0..4 {
            assert_eq!(cursor.next_token(SPACE), None);
            assert_eq!(cursor.remainder(), None);
        }
        assert!(cursor.is_exhausted());
    }

    // ==================== ARGUMENTS ====================

    #[test]
    fn test_arguments_next_and_remaining() {
        let (cursor, _) = Tokenizer::begin("echo a b  c", SPACE);
        let mut args = Arguments::new(cursor, ' ');
        assert_eq!(args.next_argument(), Some("a"));
        assert_eq!(args.remaining_arguments(), Some("b  c"));
        assert_eq!(args.next_argument(), None);
    }

    #[test]
    fn test_arguments_iterate() {
        let (cursor, _) = Tokenizer::begin("sum 1 2 3", SPACE);
        let args = Arguments::new(cursor, ' ');
        let total: i32 = args.filter_map(|a| a.parse::<i32>().ok()).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_arguments_report_delimiter() {
        let args = Arguments::new(Tokenizer::new(""), ',');
        assert_eq!(args.delimiter(), ',');
    }
}
