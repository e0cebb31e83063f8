use std::borrow::Cow;

use super::{Alphabet, Codec};
use crate::error::{BasenError, LengthConstraint, Result};
use crate::types::{CodecMeta, DecodedSize, Padding};

const STANDARD_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const TAIL_SYMBOLS: [usize; 3] = [0, 2, 3];
const TAIL_BYTES: [Option<usize>; 4] = [Some(0), None, Some(1), Some(2)];
const VALID_REMAINDERS: &[usize] = &[0, 2, 3];

const fn standard_alphabet(symbols: &[u8], padding: Padding) -> Alphabet<64> {
    match Alphabet::new(symbols, padding) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid built-in base64 alphabet"),
    }
}

/// Base64: three bytes become four 6-bit symbols.
///
/// ```text
///      [1             ] [2             ][3             ]
/// 1:{xx01 2345} 2:{xx67 0123} 3:{xx45 6701} 4:{xx23 4567}
/// ```
#[derive(Debug, Clone)]
pub struct Base64 {
    name: Cow<'static, str>,
    alphabet: Alphabet<64>,
}

impl Base64 {
    pub const STANDARD: Base64 = Base64 {
        name: Cow::Borrowed("RFC4648 Base64 with padding"),
        alphabet: standard_alphabet(STANDARD_ALPHABET, Padding::STANDARD),
    };

    pub const STANDARD_NO_PAD: Base64 = Base64 {
        name: Cow::Borrowed("RFC4648 Base64 without padding"),
        alphabet: standard_alphabet(STANDARD_ALPHABET, Padding::None),
    };

    /// URL and filename safe alphabet (`-` and `_` for `+` and `/`).
    pub const URL_SAFE: Base64 = Base64 {
        name: Cow::Borrowed("RFC4648 Base64url with padding"),
        alphabet: standard_alphabet(URL_ALPHABET, Padding::STANDARD),
    };

    pub const URL_SAFE_NO_PAD: Base64 = Base64 {
        name: Cow::Borrowed("RFC4648 Base64url without padding"),
        alphabet: standard_alphabet(URL_ALPHABET, Padding::None),
    };

    pub fn new(alphabet: &str, padding: Padding) -> Result<Self> {
        Ok(Self {
            name: Cow::Borrowed("Customized Base64 Encoding"),
            alphabet: Alphabet::parse(alphabet, padding)?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Cow::Owned(name.into());
        self
    }

    pub fn alphabet(&self) -> &Alphabet<64> {
        &self.alphabet
    }
}

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: self.name.to_string(),
            alphabet: self.alphabet.to_text(),
            padding: self.alphabet.padding().map(char::from),
            bits_per_symbol: 6,
            group_bytes: 3,
            group_symbols: 4,
        }
    }

    fn encoded_size(&self, len: usize) -> Result<usize> {
        let size = match self.alphabet.padding() {
            Some(_) => len.div_ceil(3).checked_mul(4),
            None => (len / 3).checked_mul(4).and_then(|full| full.checked_add(TAIL_SYMBOLS[len % 3])),
        };
        size.ok_or_else(|| BasenError::invalid_argument(format!("{} bytes is too large to encode", len)))
    }

    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> usize {
        let mut out = 0;
        let mut last: u32 = 6;
        let mut carry: u8 = 0;

        for &byte in input {
            output[out] = self.alphabet.symbol(carry | (byte >> (8 - last)));
            out += 1;
            if last <= 2 {
                output[out] = self.alphabet.symbol((byte >> (2 - last)) & 0x3F);
                out += 1;
                last += 6;
            }
            last -= 2;
            carry = (byte << last) & 0x3F;
        }

        if input.len() % 3 != 0 {
            output[out] = self.alphabet.symbol(carry);
            out += 1;
        }
        if let Some(pad) = self.alphabet.padding() {
            while out % 4 != 0 {
                output[out] = pad;
                out += 1;
            }
        }
        out
    }

    fn decoded_size(&self, input: &[u8]) -> Result<DecodedSize> {
        let padding = match self.alphabet.padding() {
            Some(_) => {
                if input.len() % 4 != 0 {
                    return Err(BasenError::invalid_length(LengthConstraint::MultipleOf(4), input.len()));
                }
                self.alphabet.trailing_padding(input, 3)
            }
            None => 0,
        };

        let data = input.len() - padding;
        match TAIL_BYTES[data % 4] {
            Some(tail) => Ok(DecodedSize {
                bytes: data / 4 * 3 + tail,
                padding,
            }),
            None if padding > 0 => Err(BasenError::invalid_padding(format!(
                "{} padding characters cannot end a base64 group",
                padding
            ))),
            None => Err(BasenError::invalid_length(
                LengthConstraint::Remainder {
                    modulus: 4,
                    allowed: VALID_REMAINDERS,
                },
                input.len(),
            )),
        }
    }

    fn decode_into(&self, input: &[u8], size: DecodedSize, output: &mut [u8]) -> Result<usize> {
        let data = &input[..input.len() - size.padding];
        let mut out = 0;
        let mut remain: u32 = 8;
        let mut acc: u32 = 0;

        for (position, &character) in data.iter().enumerate() {
            let value = u32::from(self.alphabet.value(character, position)?);
            if remain > 6 {
                remain -= 6;
                acc |= value << remain;
            } else {
                output[out] = (acc | (value >> (6 - remain))) as u8;
                out += 1;
                remain += 2;
                acc = (value << remain) & 0xFF;
            }
        }
        debug_assert_eq!(out, size.bytes);
        Ok(out)
    }

    fn is_valid(&self, input: &[u8]) -> bool {
        match self.decoded_size(input) {
            Ok(size) => self.alphabet.contains_all(&input[..input.len() - size.padding]),
            Err(_) => false,
        }
    }
}
