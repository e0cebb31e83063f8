use crate::types::Mode;

/// Prepares encoded text read from a file or stdin for decoding.
///
/// Strict mode only drops the line ending a shell or editor leaves behind;
/// lenient mode removes all ASCII whitespace so wrapped output decodes.
pub fn clean_for_mode(input: &str, mode: Mode) -> String {
    match mode {
        Mode::Strict => input.strip_suffix('\n').map(|s| s.strip_suffix('\r').unwrap_or(s)).unwrap_or(input).to_string(),
        Mode::Lenient => input.chars().filter(|c| !c.is_ascii_whitespace()).collect(),
    }
}
