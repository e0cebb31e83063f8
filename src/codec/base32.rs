use std::borrow::Cow;

use super::{Alphabet, Codec};
use crate::error::{BasenError, LengthConstraint, Result};
use crate::types::{CodecMeta, DecodedSize, Padding};

const RFC4648_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const HEX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Symbols emitted for a trailing group of `n % 5` bytes, before padding.
const TAIL_SYMBOLS: [usize; 5] = [0, 2, 4, 5, 7];
/// Bytes carried by a trailing group of `len % 8` symbols; `None` for
/// remainders no byte count encodes to.
const TAIL_BYTES: [Option<usize>; 8] = [Some(0), None, Some(1), None, Some(2), Some(3), None, Some(4)];
const VALID_REMAINDERS: &[usize] = &[0, 2, 4, 5, 7];

const fn standard_alphabet(symbols: &[u8], padding: Padding) -> Alphabet<32> {
    match Alphabet::new(symbols, padding) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid built-in base32 alphabet"),
    }
}

/// Base32: five bytes become eight 5-bit symbols.
///
/// Bit layout of one group (digits are bit positions of the input bytes):
///
/// ```text
///       [1               ][2                      ] [3              ][4                       ][5              ]
/// 1:{xxx0 1234} 2:{xxx5 6701} 3:{xxx2 3456} 4:{xxx7 0123} 5:{xxx4 5670} 6:{xxx1 2345} 7:{xxx6 7012} 8:{xxx3 4567}
/// ```
#[derive(Debug, Clone)]
pub struct Base32 {
    name: Cow<'static, str>,
    alphabet: Alphabet<32>,
}

impl Base32 {
    pub const STANDARD: Base32 = Base32 {
        name: Cow::Borrowed("RFC4648 Base32 with padding"),
        alphabet: standard_alphabet(RFC4648_ALPHABET, Padding::STANDARD),
    };

    pub const STANDARD_NO_PAD: Base32 = Base32 {
        name: Cow::Borrowed("RFC4648 Base32 without padding"),
        alphabet: standard_alphabet(RFC4648_ALPHABET, Padding::None),
    };

    /// Extended hex alphabet; sorts in the same order as the encoded bytes.
    pub const HEX: Base32 = Base32 {
        name: Cow::Borrowed("RFC4648 Base32hex with padding"),
        alphabet: standard_alphabet(HEX_ALPHABET, Padding::STANDARD),
    };

    pub const HEX_NO_PAD: Base32 = Base32 {
        name: Cow::Borrowed("RFC4648 Base32hex without padding"),
        alphabet: standard_alphabet(HEX_ALPHABET, Padding::None),
    };

    pub fn new(alphabet: &str, padding: Padding) -> Result<Self> {
        Ok(Self {
            name: Cow::Borrowed("Customized Base32 Encoding"),
            alphabet: Alphabet::parse(alphabet, padding)?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Cow::Owned(name.into());
        self
    }

    pub fn alphabet(&self) -> &Alphabet<32> {
        &self.alphabet
    }
}

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: self.name.to_string(),
            alphabet: self.alphabet.to_text(),
            padding: self.alphabet.padding().map(char::from),
            bits_per_symbol: 5,
            group_bytes: 5,
            group_symbols: 8,
        }
    }

    fn encoded_size(&self, len: usize) -> Result<usize> {
        let size = match self.alphabet.padding() {
            Some(_) => len.div_ceil(5).checked_mul(8),
            None => (len / 5).checked_mul(8).and_then(|full| full.checked_add(TAIL_SYMBOLS[len % 5])),
        };
        size.ok_or_else(|| BasenError::invalid_argument(format!("{} bytes is too large to encode", len)))
    }

    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> usize {
        let mut out = 0;
        // bits of the next symbol still to be taken from the upcoming byte
        let mut last: u32 = 5;
        let mut carry: u8 = 0;

        for &byte in input {
            output[out] = self.alphabet.symbol(carry | (byte >> (8 - last)));
            out += 1;
            if last <= 3 {
                output[out] = self.alphabet.symbol((byte >> (3 - last)) & 0x1F);
                out += 1;
                last += 5;
            }
            last -= 3;
            carry = (byte << last) & 0x1F;
        }

        if input.len() % 5 != 0 {
            output[out] = self.alphabet.symbol(carry);
            out += 1;
        }
        if let Some(pad) = self.alphabet.padding() {
            while out % 8 != 0 {
                output[out] = pad;
                out += 1;
            }
        }
        out
    }

    fn decoded_size(&self, input: &[u8]) -> Result<DecodedSize> {
        let padding = match self.alphabet.padding() {
            Some(_) => {
                if input.len() % 8 != 0 {
                    return Err(BasenError::invalid_length(LengthConstraint::MultipleOf(8), input.len()));
                }
                self.alphabet.trailing_padding(input, 7)
            }
            None => 0,
        };

        let data = input.len() - padding;
        match TAIL_BYTES[data % 8] {
            Some(tail) => Ok(DecodedSize {
                bytes: data / 8 * 5 + tail,
                padding,
            }),
            // only 1, 3, 4 and 6 padding characters can close a group
            None if padding > 0 => Err(BasenError::invalid_padding(format!(
                "{} padding characters cannot end a base32 group",
                padding
            ))),
            None => Err(BasenError::invalid_length(
                LengthConstraint::Remainder {
                    modulus: 8,
                    allowed: VALID_REMAINDERS,
                },
                input.len(),
            )),
        }
    }

    fn decode_into(&self, input: &[u8], size: DecodedSize, output: &mut [u8]) -> Result<usize> {
        let data = &input[..input.len() - size.padding];
        let mut out = 0;
        // free bits in the byte being assembled
        let mut remain: u32 = 8;
        let mut acc: u32 = 0;

        for (position, &character) in data.iter().enumerate() {
            let value = u32::from(self.alphabet.value(character, position)?);
            if remain > 5 {
                remain -= 5;
                acc |= value << remain;
            } else {
                output[out] = (acc | (value >> (5 - remain))) as u8;
                out += 1;
                remain += 3;
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
