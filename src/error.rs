use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidAltchars,
    InvalidLength { length: usize },
    InvalidPadding { index: usize },
    InvalidSymbol { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidAltchars => {
                write!(f, "Altchars must be a pair of distinct bytes outside the standard alphabet")
            }
            Error::InvalidLength { length } => {
                write!(f, "Input length {} is not a multiple of 4", length)
            }
            Error::InvalidPadding { index } => write!(f, "Invalid padding at index {}", index),
            Error::InvalidSymbol { character, index } => {
                if character.is_ascii_graphic() {
                    write!(f, "Invalid symbol '{}' at index {}", character as char, index)
                } else {
                    write!(f, "Invalid symbol {:#04x} at index {}", character, index)
                }
            }
        }
    }
}
