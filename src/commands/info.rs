use basen::error::Result;
use basen::types::{CodecInfo, Context};

pub fn run_info(ctx: &Context, codec_name: &str) -> Result<CodecInfo> {
    ctx.registry.info(codec_name)
}
