mod alphabet;
mod base16;
mod base32;
mod base64;
pub mod registry;
pub mod util;

pub use alphabet::Alphabet;
pub use base16::Base16;
pub use base32::Base32;
pub use base64::Base64;
pub use registry::Registry;

use crate::error::{BasenError, Result};
use crate::types::{CodecMeta, DecodedSize};

/// A base-N engine.
///
/// Implementors provide the inner layer: size arithmetic and the packing
/// loops, which trust that buffers are already sized. The provided methods
/// form the checked boundary on top of them and are what callers normally use.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;

    /// Number of characters `len` bytes encode to.
    fn encoded_size(&self, len: usize) -> Result<usize>;

    /// Encodes `input` into the front of `output`, returning the number of
    /// characters written.
    ///
    /// `output` must hold at least `encoded_size(input.len())` bytes.
    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> usize;

    /// Infers the decoded length and trailing padding of `input`.
    fn decoded_size(&self, input: &[u8]) -> Result<DecodedSize>;

    /// Decodes `input` into the front of `output`.
    ///
    /// `size` must be the value `decoded_size` returned for this same input
    /// and `output` must hold at least `size.bytes` bytes. Only malformed
    /// content is reported as an error.
    fn decode_into(&self, input: &[u8], size: DecodedSize, output: &mut [u8]) -> Result<usize>;

    /// Whether `input` would decode without error. Never fails.
    fn is_valid(&self, input: &[u8]) -> bool;

    fn name(&self) -> String {
        self.meta().name
    }

    fn encode_range(
        &self,
        input: &[u8],
        offset: usize,
        length: usize,
        output: &mut [u8],
        output_offset: usize,
    ) -> Result<usize> {
        let source = checked_range(input, offset, length, "input")?;
        let needed = self.encoded_size(length)?;
        let target = checked_range_mut(output, output_offset, needed, "output")?;
        Ok(self.encode_into(source, target))
    }

    fn decoded_size_range(&self, input: &[u8], offset: usize, length: usize) -> Result<DecodedSize> {
        let source = checked_range(input, offset, length, "input")?;
        self.decoded_size(source)
    }

    fn decode_range(
        &self,
        input: &[u8],
        offset: usize,
        length: usize,
        output: &mut [u8],
        output_offset: usize,
    ) -> Result<usize> {
        let source = checked_range(input, offset, length, "input")?;
        let size = self.decoded_size(source)?;
        let target = checked_range_mut(output, output_offset, size.bytes, "output")?;
        self.decode_into(source, size, target)
    }

    /// Range errors are reported; malformed content only yields `false`.
    fn is_valid_range(&self, input: &[u8], offset: usize, length: usize) -> Result<bool> {
        let source = checked_range(input, offset, length, "input")?;
        Ok(self.is_valid(source))
    }

    fn encode_to_vec(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; self.encoded_size(input.len())?];
        let written = self.encode_into(input, &mut output);
        output.truncate(written);
        Ok(output)
    }

    fn decode_to_vec(&self, input: &[u8]) -> Result<Vec<u8>> {
        let size = self.decoded_size(input)?;
        let mut output = vec![0u8; size.bytes];
        let written = self.decode_into(input, size, &mut output)?;
        output.truncate(written);
        Ok(output)
    }

    fn to_text(&self, input: &[u8]) -> Result<String> {
        // alphabets and padding are ASCII, so every byte is a whole char
        Ok(self.encode_to_vec(input)?.into_iter().map(char::from).collect())
    }

    fn from_text(&self, text: &str) -> Result<Vec<u8>> {
        self.decode_to_vec(text.as_bytes())
    }

    fn try_from_text(&self, text: &str) -> Option<Vec<u8>> {
        self.from_text(text).ok()
    }

    fn is_valid_text(&self, text: &str) -> bool {
        self.is_valid(text.as_bytes())
    }
}

fn range_end(buffer_len: usize, offset: usize, length: usize, what: &str) -> Result<usize> {
    match offset.checked_add(length) {
        Some(end) if end <= buffer_len => Ok(end),
        _ => Err(BasenError::invalid_argument(format!(
            "{} range {}+{} exceeds buffer of {} bytes",
            what, offset, length, buffer_len
        ))),
    }
}

fn checked_range<'a>(buffer: &'a [u8], offset: usize, length: usize, what: &str) -> Result<&'a [u8]> {
    let end = range_end(buffer.len(), offset, length, what)?;
    Ok(&buffer[offset..end])
}

fn checked_range_mut<'a>(buffer: &'a mut [u8], offset: usize, length: usize, what: &str) -> Result<&'a mut [u8]> {
    let end = range_end(buffer.len(), offset, length, what)?;
    Ok(&mut buffer[offset..end])
}
