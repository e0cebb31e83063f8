//! RFC 4648 Base16, Base32 and Base64 codecs.
//!
//! ```
//! use basen::{Base32, Base64, Codec};
//!
//! assert_eq!(Base64::STANDARD.to_text(b"foobar").unwrap(), "Zm9vYmFy");
//! assert_eq!(Base32::HEX.from_text("CO======").unwrap(), b"f");
//! assert_eq!(Base64::URL_SAFE.try_from_text("not base64!"), None);
//! ```
pub mod codec;
pub mod error;
pub mod types;

pub use codec::{Alphabet, Base16, Base32, Base64, Codec, Registry};
pub use error::{AlphabetError, BasenError, ErrorKind, Result};
pub use types::{CodecInfo, CodecMeta, Context, DecodedSize, InputSource, Mode, OutputDest, Padding};
