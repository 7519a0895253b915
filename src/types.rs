use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One gene: a move in the 5-symbol alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Right,     // 'R'
    Left,      // 'L'
    JumpRight, // '+'
    JumpLeft,  // '-'
    Freeze,    // '/'
}

impl Move {
    pub const ALL: [Move; 5] = [
        Move::Right,
        Move::Left,
        Move::JumpRight,
        Move::JumpLeft,
        Move::Freeze,
    ];

    pub fn to_byte(self) -> u8 {
        match self {
            Move::Right => b'R',
            Move::Left => b'L',
            Move::JumpRight => b'+',
            Move::JumpLeft => b'-',
            Move::Freeze => b'/',
        }
    }

    /// Decode a byte. Anything outside the alphabet becomes `Freeze`.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'R' => Move::Right,
            b'L' => Move::Left,
            b'+' => Move::JumpRight,
            b'-' => Move::JumpLeft,
            _ => Move::Freeze,
        }
    }

    pub fn as_char(self) -> char {
        self.to_byte() as char
    }

    /// Uniform draw over the alphabet
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
