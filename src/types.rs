use serde::Serialize;
use std::path::PathBuf;

use crate::codec::Registry;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                if Self::looks_like_path(s) {
                    tracing::warn!("treating '{}' as literal data, use @{} to read from file", s, s);
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        // '/' is a Base64 symbol, so only a leading one counts
        if s.starts_with('/') || s.starts_with("./") || s.contains('\\') {
            return true;
        }
        let extensions = [".txt", ".bin", ".dat", ".b64", ".b32", ".hex"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

/// Padding setting of a Base32/Base64 engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    None,
    Char(char),
}

impl Padding {
    /// The RFC 4648 padding character `=`.
    pub const STANDARD: Padding = Padding::Char('=');

    pub fn as_char(self) -> Option<char> {
        match self {
            Padding::None => None,
            Padding::Char(c) => Some(c),
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::STANDARD
    }
}

/// Result of decode-size inference: how many bytes the input decodes to and
/// how many trailing padding characters it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DecodedSize {
    pub bytes: usize,
    pub padding: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: String,
    pub alphabet: String,
    pub padding: Option<char>,
    pub bits_per_symbol: u32,
    /// Bytes consumed per full output group.
    pub group_bytes: usize,
    /// Symbols produced per full output group.
    pub group_symbols: usize,
}

/// Registry entry as shown by `list` and `info`.
#[derive(Debug, Clone, Serialize)]
pub struct CodecInfo {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    #[serde(flatten)]
    pub meta: CodecMeta,
}
