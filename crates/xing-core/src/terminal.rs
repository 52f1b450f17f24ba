//! The four road terminals at the edges of the map.

use std::fmt;

use crate::error::CoreError;

/// A road endpoint where vehicles enter and leave the map.
///
/// The standard map has one terminal per compass edge, labelled `A` through
/// `D`.  Trips are ordered `(origin, destination)` pairs of terminals;
/// identity pairs are legal and complete with zero moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminal {
    A,
    B,
    C,
    D,
}

impl Terminal {
    /// All terminals in label order.
    pub const ALL: [Terminal; 4] = [Terminal::A, Terminal::B, Terminal::C, Terminal::D];

    /// Index into path-table axes (`A` = 0 … `D` = 3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            Terminal::A => 'A',
            Terminal::B => 'B',
            Terminal::C => 'C',
            Terminal::D => 'D',
        }
    }

    /// Parse a terminal label.  Accepts upper- and lowercase.
    pub fn from_char(c: char) -> Result<Terminal, CoreError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Terminal::A),
            'B' => Ok(Terminal::B),
            'C' => Ok(Terminal::C),
            'D' => Ok(Terminal::D),
            other => Err(CoreError::UnknownTerminal(other)),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
