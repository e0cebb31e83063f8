use std::collections::HashMap;
use std::sync::OnceLock;

use super::{Base16, Base32, Base64, Codec};
use crate::error::{BasenError, Result};
use crate::types::CodecInfo;

struct Entry {
    id: &'static str,
    aliases: &'static [&'static str],
    codec: Box<dyn Codec>,
}

macro_rules! register_codecs {
    ($($id:literal $(| $alias:literal)* => $codec:expr),* $(,)?) => {
        fn build_registry() -> Registry {
            let entries: Vec<Entry> = vec![
                $(Entry { id: $id, aliases: &[$($alias),*], codec: Box::new($codec) }),*
            ];

            let mut name_map = HashMap::new();
            for (idx, entry) in entries.iter().enumerate() {
                for name in std::iter::once(&entry.id).chain(entry.aliases) {
                    let previous = name_map.insert(*name, idx);
                    debug_assert!(previous.is_none(), "codec name '{}' registered twice", name);
                }
            }

            tracing::debug!(codecs = entries.len(), names = name_map.len(), "built codec registry");
            Registry { entries, name_map }
        }

        // Public for testing - generates list of expected codec ids
        pub fn expected_codec_ids() -> Vec<&'static str> {
            vec![$($id),*]
        }
    };
}

register_codecs! {
    "base16" | "hex" | "b16" | "base16upper" => Base16::STANDARD,
    "base16lower" | "hexlower" => Base16::LOWER,
    "base32" | "b32" => Base32::STANDARD,
    "base32nopad" => Base32::STANDARD_NO_PAD,
    "base32hex" | "b32hex" => Base32::HEX,
    "base32hexnopad" => Base32::HEX_NO_PAD,
    "base64" | "b64" => Base64::STANDARD,
    "base64nopad" => Base64::STANDARD_NO_PAD,
    "base64url" | "b64url" | "base64safe" => Base64::URL_SAFE,
    "base64urlnopad" => Base64::URL_SAFE_NO_PAD,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Named codec instances, looked up by id or alias (case-insensitive).
pub struct Registry {
    entries: Vec<Entry>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        let name_lower = name.to_lowercase();
        self.name_map
            .get(name_lower.as_str())
            .map(|&idx| self.entries[idx].codec.as_ref())
            .ok_or_else(|| BasenError::unsupported_codec(name))
    }

    pub fn info(&self, name: &str) -> Result<CodecInfo> {
        let name_lower = name.to_lowercase();
        self.name_map
            .get(name_lower.as_str())
            .map(|&idx| Self::describe(&self.entries[idx]))
            .ok_or_else(|| BasenError::unsupported_codec(name))
    }

    pub fn list(&self) -> Vec<CodecInfo> {
        self.entries.iter().map(Self::describe).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn Codec)> + '_ {
        self.entries.iter().map(|entry| (entry.id, entry.codec.as_ref()))
    }

    fn describe(entry: &Entry) -> CodecInfo {
        CodecInfo {
            id: entry.id,
            aliases: entry.aliases,
            meta: entry.codec.meta(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expected_codecs_registered() {
        let registry = Registry::global();
        let ids: Vec<&str> = registry.list().iter().map(|info| info.id).collect();
        assert_eq!(ids, expected_codec_ids());
    }

    #[test]
    fn test_lookup_by_alias_and_case() {
        let registry = Registry::global();
        assert_eq!(registry.get("HEX").unwrap().to_text(b"\xab").unwrap(), "AB");
        assert_eq!(registry.get("b64url").unwrap().to_text(b"\xfb\xff").unwrap(), "-_8=");
        assert_eq!(registry.info("base64safe").unwrap().id, "base64url");
    }

    #[test]
    fn test_unknown_codec() {
        let err = Registry::global().get("base58").err().unwrap();
        assert!(matches!(err, BasenError::UnsupportedCodec { ref name } if name == "base58"));
    }

    #[test]
    fn test_names_are_unique() {
        let registry = Registry::global();
        let total: usize = registry.list().iter().map(|info| 1 + info.aliases.len()).sum();
        assert_eq!(registry.name_map.len(), total);
    }

    #[test]
    fn test_every_codec_round_trips() {
        let data = b"The quick brown fox jumps over the lazy dog";
        for (id, codec) in Registry::global().iter() {
            let text = codec.to_text(data).unwrap();
            assert!(codec.is_valid_text(&text), "{} produced invalid text", id);
            assert_eq!(codec.from_text(&text).unwrap(), data, "roundtrip failed for {}", id);
        }
    }
}
