//! RFC 4648 Base64 encoding and decoding, byte-compatible with Python's
//! `base64.b64encode` / `base64.b64decode` (including the `altchars`
//! substitution pair) and `base64.encodebytes` (the legacy MIME
//! 76-column line-wrapped variant).
//!
//! Every entry point accepts `impl AsRef<[u8]>`, so `&[u8]`, `&str`,
//! `Vec<u8>` and arrays all work directly.
//!
//! ```
//! let encoded = rsbase64::encode(b"foobar");
//! assert_eq!(encoded, b"Zm9vYmFy");
//! assert_eq!(rsbase64::decode(&encoded).unwrap(), b"foobar");
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
pub mod mime;

pub use alphabet::{Alphabet, Altchars, PADDING, STANDARD};
pub use decode::{decode, decode_into, decode_with_altchars, Decoder};
pub use encode::{encode, encode_into, encode_with_altchars, encoded_len, Encoder};
pub use error::Error;
pub use mime::{decode_chunked, encode_chunked, LINE_LENGTH};
