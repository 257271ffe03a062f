use crate::decode::Decoder;
use crate::encode::encode;
use crate::error::Error;

/// Line width of the legacy MIME-wrapped variant.
pub const LINE_LENGTH: usize = 76;

const LINE_BREAK: u8 = b'\n';

/// Encode with the standard alphabet, wrapped into 76-symbol lines, each
/// line terminated by a line feed. Empty input produces empty output with
/// no trailing line break.
pub fn encode_chunked(input: impl AsRef<[u8]>) -> Vec<u8> {
    let encoded = encode(input);
    let mut output = Vec::with_capacity(encoded.len() + encoded.len() / LINE_LENGTH + 1);
    for line in encoded.chunks(LINE_LENGTH) {
        output.extend_from_slice(line);
        output.push(LINE_BREAK);
    }
    output
}

/// Decode line-wrapped text: line feeds and carriage returns are discarded,
/// everything else goes through the strict decoder on the standard alphabet.
pub fn decode_chunked(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    if !input.contains(&b'\n') && !input.contains(&b'\r') {
        return Decoder::default().decode(input);
    }
    let stripped = input
        .iter()
        .copied()
        .filter(|&byte| byte != b'\n' && byte != b'\r')
        .collect::<Vec<u8>>();
    Decoder::default().decode(stripped)
}
