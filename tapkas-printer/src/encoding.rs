//! Windows-1252 encoding utilities for Western-European thermal printers
//!
//! The target printer class renders text from a single-byte code page, so
//! layout widths are measured in encoded bytes, not Unicode code points.

/// Get the Windows-1252 byte width of a string
///
/// One column per encodable character; unmappable characters fall back to
/// a replacement and still occupy one column.
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to fit within a column width
pub fn truncate_text(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a specific column width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_text(s: &str, width: usize, align_right: bool) -> String {
    let current = text_width(s);
    if current >= width {
        return truncate_text(s, width);
    }
    let spaces = width - current;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Encode text as Windows-1252 bytes for the printer
///
/// Characters outside the code page are replaced rather than dropped, so
/// the printed column count matches the layout's assumption.
pub fn encode_text(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1252.encode(encoded);
        if had_errors {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("hello"), 5);
        assert_eq!(text_width("Café"), 4);
        assert_eq!(text_width("2,50 €"), 6);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello world", 5), "hello");
        assert_eq!(truncate_text("hi", 5), "hi");
    }

    #[test]
    fn test_pad_text() {
        assert_eq!(pad_text("hi", 5, false), "hi   ");
        assert_eq!(pad_text("hi", 5, true), "   hi");
        assert_eq!(pad_text("hello world", 5, false), "hello");
    }

    #[test]
    fn test_encode_text_cp1252() {
        assert_eq!(encode_text("abc"), b"abc");
        // é -> 0xE9, € -> 0x80 in Windows-1252
        assert_eq!(encode_text("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(encode_text("€"), vec![0x80]);
    }

    #[test]
    fn test_encode_text_replaces_unmappable() {
        // One replacement byte per unmappable char keeps columns aligned
        assert_eq!(encode_text("a中b"), vec![b'a', b'?', b'b']);
    }
}
