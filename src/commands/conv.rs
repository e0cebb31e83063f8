use serde::Serialize;

use crate::io::read_input;
use basen::codec::util::clean_for_mode;
use basen::error::Result;
use basen::types::{Context, InputSource, Mode};

#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub from_codec: String,
    pub to_codec: String,
    pub input: String,
    pub output: String,
}

pub fn run_conv(ctx: &Context, from_codec: &str, to_codec: &str, input: &InputSource, mode: Mode) -> Result<String> {
    Ok(convert(ctx, from_codec, to_codec, input, mode)?.output)
}

pub fn run_conv_json(
    ctx: &Context,
    from_codec: &str,
    to_codec: &str,
    input: &InputSource,
    mode: Mode,
) -> Result<ConvertResult> {
    convert(ctx, from_codec, to_codec, input, mode)
}

fn convert(ctx: &Context, from_codec: &str, to_codec: &str, input: &InputSource, mode: Mode) -> Result<ConvertResult> {
    let decoder = ctx.registry.get(from_codec)?;
    let encoder = ctx.registry.get(to_codec)?;

    let data = read_input(input)?;
    let text = String::from_utf8_lossy(&data);
    let cleaned = clean_for_mode(&text, mode);
    let decoded = decoder.from_text(&cleaned)?;
    let output = encoder.to_text(&decoded)?;
    tracing::debug!(from = from_codec, to = to_codec, bytes = decoded.len(), "converted");

    Ok(ConvertResult {
        from_codec: from_codec.to_string(),
        to_codec: to_codec.to_string(),
        input: cleaned,
        output,
    })
}
