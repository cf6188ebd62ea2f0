use crate::cursor::Cursor;
use std::fmt;
use thiserror::Error;

/// Why a parser rejected its input
///
/// The kind decides what enclosing combinators do with a failure:
/// alternation retries siblings after `NoMatch` and `Incomplete`, repetition
/// stops cleanly only on `NoMatch`, and nothing ever backtracks over `Fatal`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The construct does not apply here; siblings may be tried
    NoMatch,
    /// Input ended while a construct was only partially recognized
    Incomplete,
    /// A committed construct failed; never backtracked
    Fatal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NoMatch => write!(f, "no match"),
            FailureKind::Incomplete => write!(f, "incomplete input"),
            FailureKind::Fatal => write!(f, "fatal error"),
        }
    }
}

/// Failure half of a parse outcome
///
/// The cursor marks the furthest point the failing parser reached.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Failure<'code> {
    pub kind: FailureKind,
    pub cursor: Cursor<'code>,
}

impl<'code> Failure<'code> {
    pub fn new(kind: FailureKind, cursor: Cursor<'code>) -> Self {
        Self { kind, cursor }
    }

    pub fn no_match(cursor: Cursor<'code>) -> Self {
        Self::new(FailureKind::NoMatch, cursor)
    }

    pub fn incomplete(cursor: Cursor<'code>) -> Self {
        Self::new(FailureKind::Incomplete, cursor)
    }

    pub fn fatal(cursor: Cursor<'code>) -> Self {
        Self::new(FailureKind::Fatal, cursor)
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == FailureKind::Fatal
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position())
    }
}

/// Line and in-line offset of a position in the input
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// 0-based character offset within the line
    pub offset: usize,
}

impl Location {
    /// Calculate line number and character offset within that line
    ///
    /// We report a character offset instead of a column because columns
    /// depend on rendering (tab width, wide glyphs, combining marks).
    pub fn locate(input: &[char], position: usize) -> Self {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &ch) in input.iter().enumerate() {
            if i >= position {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        Location {
            line,
            offset: position.saturating_sub(line_start),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, offset {}", self.line, self.offset)
    }
}

/// Error returned by a built parser
///
/// Owns everything it reports so it can outlive the input it was produced
/// from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {location} (absolute position: {position})")]
pub struct ParseError {
    kind: FailureKind,
    position: usize,
    location: Location,
}

impl ParseError {
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Lines of context around the failure with a pointer at its position
    ///
    /// Returns up to 2 lines before and after the failing line. `input` must
    /// be the sequence this error was produced from.
    pub fn excerpt(&self, input: &[char]) -> Vec<String> {
        let target = self.location.line;
        let first = target.saturating_sub(2);
        let mut lines = Vec::new();

        for (index, content) in input.split(|&ch| ch == '\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > target + 2 {
                break;
            }

            let prefix = if number == target {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            let text: String = content.iter().collect();
            lines.push(format!("{}{}", prefix, text));

            if number == target {
                let pointer_offset = prefix.chars().count() + self.location.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl From<Failure<'_>> for ParseError {
    fn from(failure: Failure<'_>) -> Self {
        let position = failure.position();
        ParseError {
            kind: failure.kind,
            position,
            location: Location::locate(failure.cursor.source(), position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn error_at(data: &[char], position: usize, kind: FailureKind) -> ParseError {
        let mut cursor = Cursor::new(data);
        for _ in 0..position {
            cursor = cursor.next();
        }
        ParseError::from(Failure::new(kind, cursor))
    }

    #[rstest]
    #[case::no_match(FailureKind::NoMatch, "no match")]
    #[case::incomplete(FailureKind::Incomplete, "incomplete input")]
    #[case::fatal(FailureKind::Fatal, "fatal error")]
    fn test_kind_display(#[case] kind: FailureKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_failure_display_names_position() {
        let data = chars("abc");
        let failure = Failure::incomplete(Cursor::new(&data).next());
        assert_eq!(failure.to_string(), "incomplete input at position 1");
    }

    #[test]
    fn test_locate_first_line() {
        let data = chars("hello");
        assert_eq!(Location::locate(&data, 3), Location { line: 1, offset: 3 });
    }

    #[test]
    fn test_locate_past_end() {
        let data = chars("line1\nline2");
        // Position 11 = past end
        assert_eq!(Location::locate(&data, 11), Location { line: 2, offset: 5 });
    }

    #[test]
    fn test_locate_after_trailing_newline() {
        let data = chars("hello\n");
        assert_eq!(Location::locate(&data, 6), Location { line: 2, offset: 0 });
    }

    #[test]
    fn test_parse_error_display() {
        let data = chars("hello\nworld");
        let error = error_at(&data, 8, FailureKind::NoMatch);

        let message = error.to_string();
        assert!(message.contains("no match"), "unexpected message: {message}");
        assert!(message.contains("line 2"), "unexpected message: {message}");
        assert!(message.contains("offset 2"), "unexpected message: {message}");
        assert!(message.contains("absolute position: 8"), "unexpected message: {message}");
    }

    #[test]
    fn test_parse_error_keeps_kind_and_position() {
        let data = chars("ab");
        let error = error_at(&data, 2, FailureKind::Incomplete);
        assert_eq!(error.kind(), FailureKind::Incomplete);
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_excerpt_points_at_failure() {
        let data = chars("one\ntwo\nthree");
        let error = error_at(&data, 5, FailureKind::NoMatch);

        let excerpt = error.excerpt(&data);
        assert_eq!(
            excerpt,
            vec![
                "    1 | one".to_string(),
                "  > 2 | two".to_string(),
                "         ^--- here".to_string(),
                "    3 | three".to_string(),
            ]
        );
    }

    #[test]
    fn test_excerpt_empty_input() {
        let data: Vec<char> = Vec::new();
        let error = error_at(&data, 0, FailureKind::Incomplete);

        let excerpt = error.excerpt(&data);
        assert_eq!(excerpt, vec!["  > 1 | ".to_string(), "        ^--- here".to_string()]);
    }
}
