use crate::alphabet::{Alphabet, Altchars, PADDING, STANDARD};
use crate::error::Error;

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if input.len() % 4 != 0 {
            return Err(Error::InvalidLength { length: input.len() });
        }
        if input.is_empty() {
            return Ok(0);
        }
        let padding = input.iter().rev().take_while(|&&symbol| symbol == PADDING).count();
        if padding > 2 {
            return Err(Error::InvalidPadding {
                index: input.len() - padding,
            });
        }
        let data = &input[..input.len() - padding];
        // Padding is only valid as a suffix of the final group.
        if let Some(index) = data.iter().position(|&symbol| symbol == PADDING) {
            return Err(Error::InvalidPadding { index });
        }
        if output.len() < input.len() / 4 * 3 - padding {
            return Err(Error::BufferTooSmall);
        }

        let mut index = 0;
        let mut offset = 0;
        let mut groups = data.chunks_exact(4);
        for group in &mut groups {
            let v0 = self.alphabet.value(group[0], offset)?;
            let v1 = self.alphabet.value(group[1], offset + 1)?;
            let v2 = self.alphabet.value(group[2], offset + 2)?;
            let v3 = self.alphabet.value(group[3], offset + 3)?;
            output[index] = v0 << 2 | v1 >> 4;
            output[index + 1] = (v1 & 0x0f) << 4 | v2 >> 2;
            output[index + 2] = (v2 & 0x03) << 6 | v3;
            index += 3;
            offset += 4;
        }
        // Final group with padding; low bits of the last data symbol are
        // dropped, matching the reference decoder on non-canonical input.
        match groups.remainder() {
            [] => {}
            &[s0, s1] => {
                let v0 = self.alphabet.value(s0, offset)?;
                let v1 = self.alphabet.value(s1, offset + 1)?;
                output[index] = v0 << 2 | v1 >> 4;
                index += 1;
            }
            &[s0, s1, s2] => {
                let v0 = self.alphabet.value(s0, offset)?;
                let v1 = self.alphabet.value(s1, offset + 1)?;
                let v2 = self.alphabet.value(s2, offset + 2)?;
                output[index] = v0 << 2 | v1 >> 4;
                output[index + 1] = (v1 & 0x0f) << 4 | v2 >> 2;
                index += 2;
            }
            _ => unreachable!(),
        }
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; input.len() / 4 * 3];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&STANDARD);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

/// Decode with the index-62/63 symbols replaced by `altchars`. The custom
/// alphabet is built fresh for this call.
pub fn decode_with_altchars(input: impl AsRef<[u8]>, altchars: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let alphabet = Alphabet::with_altchars(Altchars::from_bytes(altchars)?)?;
    Decoder::new(&alphabet).decode(input)
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode("FPucA9l+"), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]));
        assert_eq!(super::decode("FPucA9k="), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9]));
        assert_eq!(super::decode("FPucAw=="), Ok(vec![0x14, 0xfb, 0x9c, 0x03]));
        assert_eq!(super::decode(""), Ok(b"".to_vec()));
        assert_eq!(super::decode("Zg=="), Ok(b"f".to_vec()));
        assert_eq!(super::decode("Zm8="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("Zm9v"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode("Zm9vYg=="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode("Zm9vYmE="), Ok(b"fooba".to_vec()));
        assert_eq!(super::decode("Zm9vYmFy"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 6];
        let len = super::decode_into("Zm9vYmE=", &mut output);
        assert_eq!(len, Ok(5));
        assert_eq!(&output[..5], b"fooba");
    }

    #[test]
    fn decode_into_buffer_too_small() {
        let mut output = [0u8; 4];
        assert_eq!(super::decode_into("Zm9vYmE=", &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn decode_non_canonical_padding_bits() {
        // Low bits of the final data symbol are discarded without error.
        assert_eq!(super::decode("Zk=="), Ok(b"f".to_vec()));
        assert_eq!(super::decode("AB=="), Ok(vec![0x00]));
    }

    #[test]
    fn decode_invalid_length() {
        assert_eq!(super::decode("A"), Err(Error::InvalidLength { length: 1 }));
        assert_eq!(super::decode("AB"), Err(Error::InvalidLength { length: 2 }));
        assert_eq!(super::decode("ABC"), Err(Error::InvalidLength { length: 3 }));
        assert_eq!(super::decode("ABCDE"), Err(Error::InvalidLength { length: 5 }));
        assert_eq!(super::decode("Zg==\n"), Err(Error::InvalidLength { length: 5 }));
    }

    #[test]
    fn decode_invalid_padding() {
        assert_eq!(super::decode("A=A="), Err(Error::InvalidPadding { index: 1 }));
        assert_eq!(super::decode("AB=A"), Err(Error::InvalidPadding { index: 2 }));
        assert_eq!(super::decode("A==="), Err(Error::InvalidPadding { index: 1 }));
        assert_eq!(super::decode("===="), Err(Error::InvalidPadding { index: 0 }));
        assert_eq!(super::decode("AB==CDEF"), Err(Error::InvalidPadding { index: 2 }));
    }

    #[test]
    fn decode_invalid_symbol() {
        assert_eq!(
            super::decode([b'Z', b'm', b'9', 0xff]),
            Err(Error::InvalidSymbol {
                character: 0xff,
                index: 3
            })
        );
        // Strict decoding rejects embedded whitespace.
        assert_eq!(
            super::decode(b"Zm9\nYQ=="),
            Err(Error::InvalidSymbol {
                character: b'\n',
                index: 3
            })
        );
    }

    #[test]
    fn decode_with_altchars() {
        assert_eq!(
            super::decode_with_altchars("FPucA9l-", b"-_"),
            Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e])
        );
        assert_eq!(super::decode_with_altchars("Zm9vYmFy", b"-_"), Ok(b"foobar".to_vec()));
        // The standard symbols at index 62/63 are no longer valid.
        assert_eq!(
            super::decode_with_altchars("FPucA9l+", b"-_"),
            Err(Error::InvalidSymbol {
                character: b'+',
                index: 7
            })
        );
        assert_eq!(super::decode_with_altchars("Zm9v", b"-"), Err(Error::InvalidAltchars));
        assert_eq!(super::decode_with_altchars("Zm9v", b"--"), Err(Error::InvalidAltchars));
    }
}
