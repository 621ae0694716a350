// crates/infra/src/extraction/plain_text.rs
const BOM: char = '\u{FEFF}';

/// Lossy UTF-8 decode with a leading byte-order mark removed.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix(BOM).unwrap_or(&*text).to_owned()
}
