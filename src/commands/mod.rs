mod bench;
mod conv;
mod dec;
mod demo;
mod enc;
mod info;
mod list;
mod verify;

pub use bench::{human_count, run_bench, BenchConfig};
pub use conv::{run_conv, run_conv_json};
pub use dec::{run_decode, run_decode_json};
pub use demo::run_demo;
pub use enc::{run_encode, run_encode_json};
pub use info::run_info;
pub use list::run_list;
pub use verify::run_verify;

use serde::Serialize;

use crate::io::{write_output, OutputConfig};
use basen::error::{BasenError, Result};
use basen::types::{Context, InputSource, Mode, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| BasenError::Io(e.into()))?;
    println!("{}", text);
    Ok(())
}

fn write_text(text: &str, dest: &OutputDest) -> Result<()> {
    let config = OutputConfig {
        dest: dest.clone(),
        force: true,
    };
    write_output(text.as_bytes(), &config)?;
    if matches!(dest, OutputDest::Stdout) {
        println!();
    }
    Ok(())
}

pub struct EncCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            return print_json(&run_encode_json(ctx, &self.codec, &self.input)?);
        }

        let encoded = run_encode(ctx, &self.codec, &self.input)?;
        write_text(&encoded, &self.output)
    }
}

pub struct DecCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub mode: Mode,
    pub force: bool,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            return print_json(&run_decode_json(ctx, &self.codec, &self.input, self.mode)?);
        }

        let decoded = run_decode(ctx, &self.codec, &self.input, self.mode)?;
        let config = OutputConfig {
            dest: self.output.clone(),
            force: self.force,
        };
        write_output(&decoded, &config)
    }
}

pub struct ConvCommand {
    pub from: String,
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub mode: Mode,
    pub json: bool,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            return print_json(&run_conv_json(ctx, &self.from, &self.to, &self.input, self.mode)?);
        }

        let converted = run_conv(ctx, &self.from, &self.to, &self.input, self.mode)?;
        write_text(&converted, &self.output)
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let codecs = run_list(ctx);
        if self.json {
            return print_json(&codecs);
        }

        println!("{:<16} {:<8} DESCRIPTION", "NAME", "PADDING");
        println!("{}", "-".repeat(60));
        for c in codecs {
            let padding = c.meta.padding.map_or("-".to_string(), |p| p.to_string());
            println!("{:<16} {:<8} {}", c.id, padding, c.meta.name);
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub codec: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let info = run_info(ctx, &self.codec)?;
        if self.json {
            return print_json(&info);
        }

        println!("Name:        {}", info.id);
        println!("Aliases:     {}", info.aliases.join(", "));
        println!("Alphabet:    {}", info.meta.alphabet);
        println!("Padding:     {}", info.meta.padding.map_or("none".to_string(), |p| p.to_string()));
        println!(
            "Group:       {} bytes -> {} symbols of {} bits",
            info.meta.group_bytes, info.meta.group_symbols, info.meta.bits_per_symbol
        );
        println!("Description: {}", info.meta.name);
        Ok(())
    }
}

pub struct VerifyCommand {
    pub codec: String,
    pub input: InputSource,
    pub mode: Mode,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_verify(ctx, &self.codec, &self.input, self.mode)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else {
            println!("invalid: {}", result.error.as_deref().unwrap_or_default());
        }

        if !result.valid {
            return Err(BasenError::invalid_input(result.error.unwrap_or_default()));
        }
        Ok(())
    }
}

pub struct DemoCommand;

impl CommandHandler for DemoCommand {
    fn execute(&self, _ctx: &Context) -> Result<()> {
        for outcome in run_demo() {
            println!(
                "[{}]\tVector: {}\tBaseString: {}\t{}",
                outcome.codec,
                outcome.vector,
                outcome.encoded,
                if outcome.success { "Success" } else { "failed" }
            );
        }
        Ok(())
    }
}

pub struct BenchCommand;

impl CommandHandler for BenchCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let config = BenchConfig::default();
        println!("BENCHMARK BEGIN");
        let outcome = run_bench(ctx, &config, |done, total| {
            println!("\tLOOP {}/{}", done, total);
        });
        match outcome {
            Ok(report) => {
                println!(
                    "Total:  {}ms ({} TIMES, {} BYTES, {:.1} MiB/s)",
                    report.elapsed.as_millis(),
                    human_count(report.runs),
                    human_count(report.bytes),
                    report.mib_per_second()
                );
            }
            // benchmark failures are reported, never turned into an exit code
            Err(e) => {
                tracing::error!(error = %e, "benchmark aborted");
                eprintln!("benchmark aborted: {}", e);
            }
        }
        println!("BENCHMARK END");
        Ok(())
    }
}
