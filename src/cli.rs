use clap::{Parser, Subcommand, ValueEnum};

use crate::types::Mode;

#[derive(Parser)]
#[command(name = "basen")]
#[command(about = "RFC 4648 Base16/Base32/Base64 encode/decode CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode bytes to text")]
    Enc {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode text to bytes")]
    Dec {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, default_value = "strict")]
        mode: ModeArg,

        #[arg(long, help = "Write binary output to a terminal")]
        force: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Convert between encodings")]
    Conv {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, default_value = "strict")]
        mode: ModeArg,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List supported codecs")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show codec details")]
    Info {
        codec: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Verify input conforms to codec")]
    Verify {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, default_value = "strict")]
        mode: ModeArg,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Run the RFC 4648 test vectors through every standard codec")]
    Demo,

    #[command(about = "Measure encode/decode throughput on random data")]
    Bench,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Strict,
    Lenient,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Strict => Mode::Strict,
            ModeArg::Lenient => Mode::Lenient,
        }
    }
}
