use std::fs;
use std::io::{self, Read};

use crate::error::Result;
use crate::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            tracing::debug!(bytes = buf.len(), "read stdin");
            Ok(buf)
        }
        InputSource::File(path) => {
            let buf = fs::read(path)?;
            tracing::debug!(bytes = buf.len(), path = %path.display(), "read file");
            Ok(buf)
        }
        InputSource::Literal(data) => Ok(data.clone()),
    }
}
