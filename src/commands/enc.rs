use serde::Serialize;

use crate::io::read_input;
use basen::error::Result;
use basen::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub schema_version: u32,
    pub codec: String,
    pub bytes: usize,
    pub encoded: String,
}

pub fn run_encode(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<String> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    tracing::debug!(codec = codec_name, bytes = data.len(), "encoding");
    codec.to_text(&data)
}

pub fn run_encode_json(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<EncodeResult> {
    let codec = ctx.registry.get(codec_name)?;
    let data = read_input(input)?;
    let encoded = codec.to_text(&data)?;

    Ok(EncodeResult {
        schema_version: 1,
        codec: codec_name.to_string(),
        bytes: data.len(),
        encoded,
    })
}
