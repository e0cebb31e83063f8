use std::borrow::Cow;

use super::{Alphabet, Codec};
use crate::error::{BasenError, LengthConstraint, Result};
use crate::types::{CodecMeta, DecodedSize, Padding};

const UPPER_ALPHABET: &[u8] = b"0123456789ABCDEF";
const LOWER_ALPHABET: &[u8] = b"0123456789abcdef";

const fn standard_alphabet(symbols: &[u8]) -> Alphabet<16> {
    match Alphabet::new(symbols, Padding::None) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid built-in base16 alphabet"),
    }
}

/// Base16: every byte becomes two symbols, high nibble first.
#[derive(Debug, Clone)]
pub struct Base16 {
    name: Cow<'static, str>,
    alphabet: Alphabet<16>,
}

impl Base16 {
    /// RFC 4648 Base16 (uppercase).
    pub const STANDARD: Base16 = Base16 {
        name: Cow::Borrowed("Standard Base16 Encoding"),
        alphabet: standard_alphabet(UPPER_ALPHABET),
    };

    pub const LOWER: Base16 = Base16 {
        name: Cow::Borrowed("Lowercase Base16 Encoding"),
        alphabet: standard_alphabet(LOWER_ALPHABET),
    };

    pub fn new(alphabet: &str) -> Result<Self> {
        Ok(Self {
            name: Cow::Borrowed("Customized Base16 Encoding"),
            alphabet: Alphabet::parse(alphabet, Padding::None)?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Cow::Owned(name.into());
        self
    }

    pub fn alphabet(&self) -> &Alphabet<16> {
        &self.alphabet
    }
}

impl Codec for Base16 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: self.name.to_string(),
            alphabet: self.alphabet.to_text(),
            padding: None,
            bits_per_symbol: 4,
            group_bytes: 1,
            group_symbols: 2,
        }
    }

    fn encoded_size(&self, len: usize) -> Result<usize> {
        len.checked_mul(2)
            .ok_or_else(|| BasenError::invalid_argument(format!("{} bytes is too large to encode", len)))
    }

    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> usize {
        for (pair, &byte) in output.chunks_exact_mut(2).zip(input) {
            pair[0] = self.alphabet.symbol(byte >> 4);
            pair[1] = self.alphabet.symbol(byte & 0x0F);
        }
        input.len() * 2
    }

    fn decoded_size(&self, input: &[u8]) -> Result<DecodedSize> {
        if input.len() % 2 != 0 {
            return Err(BasenError::invalid_length(LengthConstraint::MultipleOf(2), input.len()));
        }
        Ok(DecodedSize {
            bytes: input.len() / 2,
            padding: 0,
        })
    }

    fn decode_into(&self, input: &[u8], size: DecodedSize, output: &mut [u8]) -> Result<usize> {
        for (index, (pair, byte)) in input.chunks_exact(2).zip(output.iter_mut()).enumerate() {
            let high = self.alphabet.value(pair[0], index * 2)?;
            let low = self.alphabet.value(pair[1], index * 2 + 1)?;
            *byte = (high << 4) | low;
        }
        Ok(size.bytes)
    }

    fn is_valid(&self, input: &[u8]) -> bool {
        input.len() % 2 == 0 && self.alphabet.contains_all(input)
    }
}
