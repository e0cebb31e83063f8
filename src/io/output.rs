use std::fs::File;
use std::io::{self, Write};

use is_terminal::IsTerminal;

use basen::{Base16, Codec};

use crate::error::Result;
use crate::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
}

pub fn write_output(data: &[u8], config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(data)?;
            tracing::debug!(bytes = data.len(), path = %path.display(), "wrote file");
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            if stdout.is_terminal() && !config.force && std::str::from_utf8(data).is_err() {
                eprintln!(
                    "Binary output ({} bytes). Showing hex preview (use --force to output raw or --out @file):\n",
                    data.len()
                );
                let mut handle = stdout.lock();
                for line in hex_preview(data)? {
                    writeln!(handle, "{}", line)?;
                }
            } else {
                let mut handle = stdout.lock();
                handle.write_all(data)?;
            }
            Ok(())
        }
    }
}

const BYTES_PER_LINE: usize = 16;
const MAX_LINES: usize = 32;

/// `offset  hex bytes  |ascii|` lines, truncated after `MAX_LINES`.
fn hex_preview(data: &[u8]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for (index, chunk) in data.chunks(BYTES_PER_LINE).take(MAX_LINES).enumerate() {
        let hex = Base16::LOWER.to_text(chunk)?;
        let pairs: Vec<&str> = (0..chunk.len()).map(|i| &hex[i * 2..i * 2 + 2]).collect();
        let ascii: String = chunk
            .iter()
            .map(|&byte| if byte.is_ascii_graphic() || byte == b' ' { char::from(byte) } else { '.' })
            .collect();
        lines.push(format!("{:08x}  {:<48} |{}|", index * BYTES_PER_LINE, pairs.join(" "), ascii));
    }

    let shown = BYTES_PER_LINE * MAX_LINES;
    if data.len() > shown {
        lines.push(format!("... ({} more bytes)", data.len() - shown));
    }
    Ok(lines)
}
