use std::fmt;

use crate::error::{AlphabetError, BasenError, Result};
use crate::types::Padding;

const ABSENT: u8 = 0xFF;

/// An ordered set of `N` ASCII symbols plus the reverse lookup table used
/// while decoding, and the reserved padding character if the codec pads.
///
/// Tables are filled once at construction and never mutated, so an alphabet
/// can be shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    values: [u8; 128],
    padding: Option<u8>,
}

impl<const N: usize> Alphabet<N> {
    /// Builds an alphabet, rejecting non-ASCII symbols, wrong sizes,
    /// duplicates and a padding character that collides with a symbol.
    ///
    /// Usable in `const` context so the standard alphabets fail to compile
    /// rather than fail at runtime.
    pub const fn new(symbols: &[u8], padding: Padding) -> std::result::Result<Self, AlphabetError> {
        let mut index = 0;
        while index < symbols.len() {
            if symbols[index] >= 128 {
                return Err(AlphabetError::NonAscii { index });
            }
            index += 1;
        }
        if symbols.len() != N {
            return Err(AlphabetError::WrongSize {
                expected: N,
                actual: symbols.len(),
            });
        }

        let mut table = [0u8; N];
        let mut values = [ABSENT; 128];
        let mut index = 0;
        while index < N {
            let character = symbols[index];
            let seen = values[character as usize];
            if seen != ABSENT {
                return Err(AlphabetError::Duplicate {
                    character: character as char,
                    first: seen as usize,
                    second: index,
                });
            }
            table[index] = character;
            values[character as usize] = index as u8;
            index += 1;
        }

        let padding = match padding {
            Padding::None => None,
            Padding::Char(character) => {
                if character as u32 >= 128 {
                    return Err(AlphabetError::NonAsciiPadding { character });
                }
                let byte = character as u8;
                if values[byte as usize] != ABSENT {
                    return Err(AlphabetError::PaddingInAlphabet { character });
                }
                Some(byte)
            }
        };

        Ok(Self {
            symbols: table,
            values,
            padding,
        })
    }

    /// Runtime counterpart of [`Alphabet::new`] for user-supplied text.
    pub fn parse(symbols: &str, padding: Padding) -> Result<Self> {
        Self::new(symbols.as_bytes(), padding).map_err(BasenError::from)
    }

    #[inline]
    pub(crate) fn symbol(&self, value: u8) -> u8 {
        self.symbols[value as usize]
    }

    /// Looks up the value of `byte`; `position` only feeds the error.
    #[inline]
    pub(crate) fn value(&self, byte: u8, position: usize) -> Result<u8> {
        match self.values.get(byte as usize) {
            Some(&value) if value != ABSENT => Ok(value),
            _ => Err(BasenError::invalid_char(byte, position)),
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        matches!(self.values.get(byte as usize), Some(&value) if value != ABSENT)
    }

    pub(crate) fn contains_all(&self, data: &[u8]) -> bool {
        data.iter().all(|&byte| self.contains(byte))
    }

    pub fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// Length of the run of padding characters at the end of `input`,
    /// looking back at most `window` positions.
    pub(crate) fn trailing_padding(&self, input: &[u8], window: usize) -> usize {
        match self.padding {
            Some(pad) => input.iter().rev().take(window).take_while(|&&byte| byte == pad).count(),
            None => 0,
        }
    }

    pub fn symbols(&self) -> &[u8; N] {
        &self.symbols
    }

    pub fn to_text(&self) -> String {
        self.symbols.iter().map(|&byte| char::from(byte)).collect()
    }
}

impl<const N: usize> fmt::Debug for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.to_text())
            .field("padding", &self.padding.map(char::from))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &[u8] = b"0123456789ABCDEF";

    #[test]
    fn test_lookup() {
        let alphabet = Alphabet::<16>::new(HEX, Padding::None).unwrap();
        assert_eq!(alphabet.symbol(10), b'A');
        assert_eq!(alphabet.value(b'F', 0).unwrap(), 15);
        assert!(alphabet.contains(b'7'));
        assert!(!alphabet.contains(b'a'));
        assert!(!alphabet.contains(0xC3));
    }

    #[test]
    fn test_unknown_symbol_reports_position() {
        let alphabet = Alphabet::<16>::new(HEX, Padding::None).unwrap();
        match alphabet.value(b'g', 7) {
            Err(BasenError::InvalidCharacter { char: ch, position }) => {
                assert_eq!(ch, 'g');
                assert_eq!(position, 7);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_size() {
        assert_eq!(
            Alphabet::<16>::new(b"0123456789ABCDE", Padding::None),
            Err(AlphabetError::WrongSize { expected: 16, actual: 15 })
        );
    }

    #[test]
    fn test_duplicate() {
        assert_eq!(
            Alphabet::<16>::new(b"0123456789ABCDEA", Padding::None),
            Err(AlphabetError::Duplicate {
                character: 'A',
                first: 10,
                second: 15
            })
        );
    }

    #[test]
    fn test_non_ascii() {
        let result = Alphabet::<16>::parse("0123456789ABCDEé", Padding::None);
        assert!(matches!(result, Err(BasenError::InvalidAlphabet(AlphabetError::NonAscii { index: 15 }))));
    }

    #[test]
    fn test_padding_collision() {
        assert_eq!(
            Alphabet::<16>::new(HEX, Padding::Char('A')),
            Err(AlphabetError::PaddingInAlphabet { character: 'A' })
        );
        assert_eq!(
            Alphabet::<16>::new(HEX, Padding::Char('é')),
            Err(AlphabetError::NonAsciiPadding { character: 'é' })
        );
    }

    #[test]
    fn test_trailing_padding() {
        let alphabet = Alphabet::<16>::new(HEX, Padding::STANDARD).unwrap();
        assert_eq!(alphabet.trailing_padding(b"AB==", 3), 2);
        assert_eq!(alphabet.trailing_padding(b"A=B=", 3), 1);
        assert_eq!(alphabet.trailing_padding(b"========", 7), 7);
        assert_eq!(alphabet.trailing_padding(b"", 7), 0);

        let unpadded = Alphabet::<16>::new(HEX, Padding::None).unwrap();
        assert_eq!(unpadded.trailing_padding(b"AB==", 3), 0);
    }

    #[test]
    fn test_debug_is_readable() {
        let alphabet = Alphabet::<16>::new(HEX, Padding::None).unwrap();
        assert_eq!(
            format!("{:?}", alphabet),
            "Alphabet { symbols: \"0123456789ABCDEF\", padding: None }"
        );
    }
}
