use std::time::{Duration, Instant};

use rand::Rng;

use basen::error::Result;
use basen::types::Context;
use basen::Codec;

const BENCH_CODECS: [&str; 6] = ["base16", "base64", "base64url", "base32", "base32hex", "base16lower"];

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Outer loops, each one reported through the progress callback.
    pub loops: usize,
    pub rounds: usize,
    /// Source buffer sizes, roughly 1 MiB in total.
    pub sizes: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            loops: 8,
            rounds: 19,
            sizes: vec![0x10, 0x41, 0x100, 0x430, 0x1050, 0x4107, 0x17090, 0x40A0A, 0xA2E8E],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    pub runs: u64,
    pub bytes: u64,
    pub elapsed: Duration,
}

impl BenchReport {
    pub fn mib_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.bytes as f64 / (1024.0 * 1024.0) / secs
    }
}

/// Round trips random buffers through every RFC 4648 codec at shifting
/// offsets inside shared scratch buffers.
pub fn run_bench(ctx: &Context, config: &BenchConfig, mut progress: impl FnMut(usize, usize)) -> Result<BenchReport> {
    let codecs = BENCH_CODECS
        .iter()
        .map(|id| ctx.registry.get(id))
        .collect::<Result<Vec<&dyn Codec>>>()?;

    let mut rng = rand::thread_rng();
    let sources: Vec<Vec<u8>> = config
        .sizes
        .iter()
        .map(|&size| {
            let mut buf = vec![0u8; size];
            rng.fill(&mut buf[..]);
            buf
        })
        .collect();

    // offsets are masked to 12 bits; decode lands at twice the offset
    let max_len = config.sizes.iter().copied().max().unwrap_or(0);
    let mut max_encoded = 0;
    for codec in &codecs {
        max_encoded = max_encoded.max(codec.encoded_size(max_len)?);
    }
    let mut chars = vec![0u8; max_encoded + 0x1000];
    let mut bytes = vec![0u8; max_len + 0x2000 + 1];

    let mut runs: u64 = 0;
    let mut total_bytes: u64 = 0;
    let start = Instant::now();
    for i in 0..config.loops {
        for j in 0..config.rounds {
            for codec in &codecs {
                for source in &sources {
                    runs += 1;
                    total_bytes += source.len() as u64;
                    let base: u64 = if (i + j) % 2 == 0 { 0xCC55 } else { 0xAA33 };
                    let offset = (base.wrapping_sub(total_bytes) & 0xFFF) as usize;
                    let written = codec.encode_range(source, 0, source.len(), &mut chars, offset)?;
                    codec.decode_range(&chars, offset, written, &mut bytes, offset * 2 + 1)?;
                }
            }
        }
        tracing::debug!(loop_index = i + 1, runs, "benchmark loop done");
        progress(i + 1, config.loops);
    }

    Ok(BenchReport {
        runs,
        bytes: total_bytes,
        elapsed: start.elapsed(),
    })
}

/// Formats a count in binary units, e.g. `1.5K` or `27.3M`.
pub fn human_count(count: u64) -> String {
    const UNITS: [&str; 5] = ["", "K", "M", "G", "T"];
    let mut value = count as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}
