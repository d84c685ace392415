//! Scanning helpers for printed type text.

/// Byte offset just past the string literal whose opening quote is at `start`.
///
/// Either quote style is accepted and a backslash escapes the next byte. An
/// unterminated literal runs to the end of `text`.
pub fn string_literal_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    text.len()
}
