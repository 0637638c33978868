use std::borrow::Cow;

/// Decode one raw line into text
///
/// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252).
/// Many recorders write pilot and glider names in a Latin-1 code page.
/// Line terminators and trailing whitespace are stripped.
pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let text = match str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    };

    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim_end()),
        Cow::Owned(s) => Cow::Owned(s.trim_end().to_string()),
    }
}
