use crate::error::Error;

/// Padding symbol appended so encoded length is always a multiple of 4.
pub const PADDING: u8 = b'=';

const STANDARD_SYMBOLS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The standard RFC 4648 alphabet, built once at compile time.
pub const STANDARD: Alphabet = match Alphabet::new(STANDARD_SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build standard alphabet"),
};

/// A pair of bytes replacing the index-62 (`+`) and index-63 (`/`)
/// symbols of the standard alphabet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Altchars {
    plus: u8,
    slash: u8,
}

impl Altchars {
    pub const fn new(plus: u8, slash: u8) -> Self {
        Self { plus, slash }
    }

    /// Equivalent to `Altchars::new(b'+', b'/')`.
    pub const fn default() -> Self {
        Self::new(b'+', b'/')
    }

    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self, Error> {
        let bytes = bytes.as_ref();
        if bytes.len() != 2 {
            return Err(Error::InvalidAltchars);
        }
        Ok(Self::new(bytes[0], bytes[1]))
    }

    pub fn plus(&self) -> u8 {
        self.plus
    }

    pub fn slash(&self) -> u8 {
        self.slash
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Entry {
    Invalid,
    Padding,
    Value(u8),
}

pub struct Alphabet {
    encode: [u8; 64],
    decode: [Entry; 256],
}

impl Alphabet {
    const fn new(symbols: &[u8; 64]) -> Result<Self, Error> {
        let mut encode = [0u8; 64];
        let mut decode = [Entry::Invalid; 256];
        decode[PADDING as usize] = Entry::Padding;

        let mut index = 0;
        while index < encode.len() {
            let symbol = symbols[index];
            match decode[symbol as usize] {
                Entry::Invalid => {}
                _ => return Err(Error::InvalidAltchars),
            }
            encode[index] = symbol;
            decode[symbol as usize] = Entry::Value(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Standard alphabet with the two substituted symbols. Collisions with
    /// the 62 unchanged symbols, with each other, or with `=` are rejected.
    pub fn with_altchars(altchars: Altchars) -> Result<Self, Error> {
        let mut symbols = *STANDARD_SYMBOLS;
        symbols[62] = altchars.plus();
        symbols[63] = altchars.slash();
        Self::new(&symbols)
    }

    pub fn symbol(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    pub fn value(&self, symbol: u8, index: usize) -> Result<u8, Error> {
        match self.decode[symbol as usize] {
            Entry::Value(value) => Ok(value),
            Entry::Padding => Err(Error::InvalidPadding { index }),
            Entry::Invalid => Err(Error::InvalidSymbol {
                character: symbol,
                index,
            }),
        }
    }
}
