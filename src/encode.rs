use crate::alphabet::{Alphabet, Altchars, PADDING, STANDARD};
use crate::error::Error;

/// Encoded length of `length` input bytes: `4 * ceil(length / 3)`.
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < encoded_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        let mut groups = input.chunks_exact(3);
        for group in &mut groups {
            let (b0, b1, b2) = (group[0], group[1], group[2]);
            output[index] = self.alphabet.symbol(b0 >> 2);
            output[index + 1] = self.alphabet.symbol((b0 & 0x03) << 4 | b1 >> 4);
            output[index + 2] = self.alphabet.symbol((b1 & 0x0f) << 2 | b2 >> 6);
            output[index + 3] = self.alphabet.symbol(b2 & 0x3f);
            index += 4;
        }
        match groups.remainder() {
            [] => {}
            &[b0] => {
                output[index] = self.alphabet.symbol(b0 >> 2);
                output[index + 1] = self.alphabet.symbol((b0 & 0x03) << 4);
                output[index + 2] = PADDING;
                output[index + 3] = PADDING;
                index += 4;
            }
            &[b0, b1] => {
                output[index] = self.alphabet.symbol(b0 >> 2);
                output[index + 1] = self.alphabet.symbol((b0 & 0x03) << 4 | b1 >> 4);
                output[index + 2] = self.alphabet.symbol((b1 & 0x0f) << 2);
                output[index + 3] = PADDING;
                index += 4;
            }
            _ => unreachable!(),
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let mut output = vec![0u8; encoded_len(input.as_ref().len())];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len);
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&STANDARD);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Encoder::default().encode(input)
}

/// Encode with the index-62/63 symbols replaced by `altchars`. The custom
/// alphabet is built fresh for this call.
pub fn encode_with_altchars(input: impl AsRef<[u8]>, altchars: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let alphabet = Alphabet::with_altchars(Altchars::from_bytes(altchars)?)?;
    Ok(Encoder::new(&alphabet).encode(input))
}
