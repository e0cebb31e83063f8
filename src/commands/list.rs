use basen::types::{CodecInfo, Context};

pub fn run_list(ctx: &Context) -> Vec<CodecInfo> {
    ctx.registry.list()
}
