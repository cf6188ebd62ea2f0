/// Position in an immutable sequence of characters.
///
/// Cursors are cheap `Copy` values: advancing returns a new cursor and never
/// touches the underlying sequence, so any saved cursor stays valid and can be
/// used to restart parsing from that point (this is how alternation
/// backtracks).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor<'code> {
    /// Cursor pointing at a readable character
    Valid {
        data: &'code [char],
        /// Character offset in the data slice (0-based index)
        position: usize,
    },
    /// Cursor past the last character - nothing more to read
    EndOfInput { data: &'code [char] },
}

impl<'code> Cursor<'code> {
    pub fn new(data: &'code [char]) -> Self {
        if data.is_empty() {
            return Cursor::EndOfInput { data };
        }
        Cursor::Valid { data, position: 0 }
    }

    /// Get the character at the current position, or `None` at end of input
    pub fn value(&self) -> Option<char> {
        match self {
            Cursor::Valid { data, position } => Some(data[*position]),
            Cursor::EndOfInput { .. } => None,
        }
    }

    /// Advance by one character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        match self {
            Cursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    Cursor::EndOfInput { data }
                } else {
                    Cursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            Cursor::EndOfInput { data } => Cursor::EndOfInput { data },
        }
    }

    /// Current offset; for end-of-input cursors this is the sequence length
    pub fn position(&self) -> usize {
        match self {
            Cursor::Valid { position, .. } => *position,
            Cursor::EndOfInput { data } => data.len(),
        }
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self, Cursor::EndOfInput { .. })
    }

    /// The whole sequence this cursor walks over
    pub fn source(&self) -> &'code [char] {
        match self {
            Cursor::Valid { data, .. } => data,
            Cursor::EndOfInput { data } => data,
        }
    }

    /// The characters not yet consumed
    pub fn remaining(&self) -> &'code [char] {
        let data = self.source();
        &data[self.position()..]
    }
}
