use basen::error::Result;
use basen::{Base16, Base32, Base64, Codec};

/// RFC 4648 section 10 test vectors.
const TEST_VECTORS: [&str; 7] = ["", "f", "fo", "foo", "foob", "fooba", "foobar"];

// left/right padding around the source bytes and offsets into the output
// buffers used by the ranged usage
const SOURCE_LEFT: usize = 33;
const SOURCE_RIGHT: usize = 44;
const ENCODE_OFFSET: usize = 99;
const DECODE_OFFSET: usize = 199;

#[derive(Debug, Clone, Copy)]
enum Usage {
    /// `to_text` / `from_text`
    Text,
    /// `encode_to_vec` / `decode_to_vec`
    Vec,
    /// `encode_range` / `decode_range` inside larger buffers
    Ranged,
}

#[derive(Debug)]
pub struct DemoOutcome {
    pub codec: &'static str,
    pub vector: &'static str,
    pub encoded: String,
    pub success: bool,
}

pub fn run_demo() -> Vec<DemoOutcome> {
    let cases: [(&'static str, &dyn Codec, Usage); 5] = [
        ("Base64", &Base64::STANDARD, Usage::Text),
        ("Base64Url", &Base64::URL_SAFE, Usage::Vec),
        ("Base32", &Base32::STANDARD, Usage::Text),
        ("Base32Hex", &Base32::HEX, Usage::Ranged),
        ("Base16", &Base16::STANDARD, Usage::Vec),
    ];

    let mut outcomes = Vec::new();
    for vector in TEST_VECTORS {
        for &(name, codec, usage) in cases.iter() {
            let outcome = match round_trip(codec, usage, vector.as_bytes()) {
                Ok((encoded, decoded)) => DemoOutcome {
                    codec: name,
                    vector,
                    encoded,
                    success: decoded == vector.as_bytes(),
                },
                Err(e) => {
                    tracing::warn!(codec = name, vector, error = %e, "demo round trip failed");
                    DemoOutcome {
                        codec: name,
                        vector,
                        encoded: String::new(),
                        success: false,
                    }
                }
            };
            outcomes.push(outcome);
        }
    }
    outcomes
}

fn round_trip(codec: &dyn Codec, usage: Usage, origin: &[u8]) -> Result<(String, Vec<u8>)> {
    match usage {
        Usage::Text => {
            let text = codec.to_text(origin)?;
            let bytes = codec.from_text(&text)?;
            Ok((text, bytes))
        }
        Usage::Vec => {
            let chars = codec.encode_to_vec(origin)?;
            let bytes = codec.decode_to_vec(&chars)?;
            Ok((chars.into_iter().map(char::from).collect(), bytes))
        }
        Usage::Ranged => {
            let mut source = vec![0u8; SOURCE_LEFT + origin.len() + SOURCE_RIGHT];
            source[SOURCE_LEFT..SOURCE_LEFT + origin.len()].copy_from_slice(origin);

            let mut chars = vec![0u8; codec.encoded_size(origin.len())? + ENCODE_OFFSET * 2];
            let written = codec.encode_range(&source, SOURCE_LEFT, origin.len(), &mut chars, ENCODE_OFFSET)?;

            let size = codec.decoded_size_range(&chars, ENCODE_OFFSET, written)?;
            let mut bytes = vec![0u8; size.bytes + DECODE_OFFSET * 2];
            let decoded = codec.decode_range(&chars, ENCODE_OFFSET, written, &mut bytes, DECODE_OFFSET)?;

            let text = chars[ENCODE_OFFSET..ENCODE_OFFSET + written].iter().map(|&c| char::from(c)).collect();
            Ok((text, bytes[DECODE_OFFSET..DECODE_OFFSET + decoded].to_vec()))
        }
    }
}
