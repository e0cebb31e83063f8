use serde::Serialize;

use crate::io::read_input;
use basen::codec::util::clean_for_mode;
use basen::error::Result;
use basen::types::{Context, InputSource, Mode};

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub codec: String,
    pub decoded_bytes: Option<usize>,
    pub error: Option<String>,
}

pub fn run_verify(ctx: &Context, codec_name: &str, input: &InputSource, mode: Mode) -> Result<VerifyResult> {
    let codec = ctx.registry.get(codec_name)?;

    let data = read_input(input)?;
    let text = String::from_utf8_lossy(&data);
    let cleaned = clean_for_mode(&text, mode);

    if codec.is_valid_text(&cleaned) {
        let size = codec.decoded_size(cleaned.as_bytes())?;
        return Ok(VerifyResult {
            schema_version: 1,
            valid: true,
            codec: codec_name.to_string(),
            decoded_bytes: Some(size.bytes),
            error: None,
        });
    }

    // decode only to explain why the input was rejected
    let error = match codec.from_text(&cleaned) {
        Ok(_) => "rejected by validation".to_string(),
        Err(e) => e.to_string(),
    };
    Ok(VerifyResult {
        schema_version: 1,
        valid: false,
        codec: codec_name.to_string(),
        decoded_bytes: None,
        error: Some(error),
    })
}
