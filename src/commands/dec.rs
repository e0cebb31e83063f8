use serde::Serialize;

use crate::io::read_input;
use basen::codec::util::clean_for_mode;
use basen::error::Result;
use basen::types::{Context, InputSource, Mode};
use basen::{Base16, Codec};

#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub schema_version: u32,
    pub codec: String,
    pub bytes: usize,
    pub hex: String,
    /// Present when the decoded bytes are valid UTF-8.
    pub text: Option<String>,
}

pub fn run_decode(ctx: &Context, codec_name: &str, input: &InputSource, mode: Mode) -> Result<Vec<u8>> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    let text = String::from_utf8_lossy(&data);
    let cleaned = clean_for_mode(&text, mode);
    tracing::debug!(codec = codec_name, chars = cleaned.len(), ?mode, "decoding");
    codec.from_text(&cleaned)
}

pub fn run_decode_json(ctx: &Context, codec_name: &str, input: &InputSource, mode: Mode) -> Result<DecodeResult> {
    let decoded = run_decode(ctx, codec_name, input, mode)?;

    Ok(DecodeResult {
        schema_version: 1,
        codec: codec_name.to_string(),
        bytes: decoded.len(),
        hex: Base16::LOWER.to_text(&decoded)?,
        text: String::from_utf8(decoded).ok(),
    })
}
