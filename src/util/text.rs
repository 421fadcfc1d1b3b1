//! Byte-level text helpers
//!
//! The document is a byte buffer that is usually, but not necessarily, valid
//! UTF-8. These helpers step over it one character at a time, treating each
//! byte of an invalid sequence as a character of its own.

use std::borrow::Cow;

/// Tab width for visual column calculations
pub const TABULATOR_WIDTH: usize = 4;

/// Length in bytes of the character starting at `pos`
///
/// Returns 1 for a byte that does not start a valid UTF-8 sequence and 0 at
/// the end of the buffer.
pub fn char_len_at(bytes: &[u8], pos: usize) -> usize {
    let Some(&first) = bytes.get(pos) else {
        return 0;
    };

    let expected = match first {
        0x00..=0x7F => return 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return 1,
    };

    match bytes.get(pos..pos + expected) {
        Some(seq) if std::str::from_utf8(seq).is_ok() => expected,
        _ => 1,
    }
}

/// Offset of the character boundary after `pos`
pub fn next_boundary(bytes: &[u8], pos: usize) -> usize {
    (pos + char_len_at(bytes, pos)).min(bytes.len())
}

/// Offset of the character boundary before `pos`
pub fn prev_boundary(bytes: &[u8], pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }

    // A valid sequence is at most 4 bytes; prefer the longest one that ends
    // exactly at `pos`.
    for back in (2..=4).rev() {
        if let Some(start) = pos.checked_sub(back) {
            if char_len_at(bytes, start) == back {
                return start;
            }
        }
    }
    pos - 1
}

/// Decode the character at `pos`, mapping invalid bytes to U+FFFD
pub fn char_at(bytes: &[u8], pos: usize) -> Option<char> {
    let len = char_len_at(bytes, pos);
    if len == 0 {
        return None;
    }
    std::str::from_utf8(&bytes[pos..pos + len])
        .ok()
        .and_then(|s| s.chars().next())
        .or(Some(char::REPLACEMENT_CHARACTER))
}

/// Iterate `(byte_offset, char)` pairs over a byte slice
pub fn chars_with_offsets(bytes: &[u8]) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let ch = char_at(bytes, pos)?;
        let at = pos;
        pos = next_boundary(bytes, pos);
        Some((at, ch))
    })
}

/// Largest character start at or before `pos`
///
/// Scans from the start of the line containing `pos`; a newline byte always
/// ends a character, so the scan never has to look further back.
pub fn snap_to_boundary(bytes: &[u8], pos: usize) -> usize {
    if pos >= bytes.len() {
        return bytes.len();
    }
    let line_start = bytes[..pos]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    chars_with_offsets(&bytes[line_start..])
        .map(|(offset, _)| line_start + offset)
        .take_while(|&start| start <= pos)
        .last()
        .unwrap_or(pos)
}

/// Whether `pos` starts a character (or is the end of the buffer)
pub fn is_boundary(bytes: &[u8], pos: usize) -> bool {
    pos <= bytes.len() && snap_to_boundary(bytes, pos) == pos
}

/// Visual column of byte offset `byte_col` within a line, with tabs expanded
pub fn byte_col_to_visual_col(line: &[u8], byte_col: usize) -> usize {
    let mut visual = 0;
    for (offset, ch) in chars_with_offsets(line) {
        if offset >= byte_col {
            break;
        }
        visual = advance_visual(visual, ch);
    }
    visual
}

/// Byte offset within a line for a visual column
///
/// Lands on the character whose cell contains `visual_col`, or the end of
/// the line when the column is past it.
pub fn visual_col_to_byte_col(line: &[u8], visual_col: usize) -> usize {
    let mut visual = 0;
    for (offset, ch) in chars_with_offsets(line) {
        let next = advance_visual(visual, ch);
        if visual_col < next {
            // Snap to the nearer edge of wide cells (tabs)
            return if visual_col - visual > (next - visual) / 2 {
                next_boundary(line, offset)
            } else {
                offset
            };
        }
        visual = next;
    }
    line.len()
}

#[inline]
fn advance_visual(visual: usize, ch: char) -> usize {
    if ch == '\t' {
        visual + TABULATOR_WIDTH - (visual % TABULATOR_WIDTH)
    } else {
        visual + 1
    }
}

/// Decode a line for display, expanding tabs and replacing invalid bytes
///
/// Every invalid byte becomes its own U+FFFD so display columns line up with
/// [`byte_col_to_visual_col`].
pub fn display_line(line: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(line) {
        if !text.contains('\t') {
            return Cow::Borrowed(text);
        }
    }

    let mut result = String::with_capacity(line.len() * 2);
    let mut visual = 0;
    for (_, ch) in chars_with_offsets(line) {
        if ch == '\t' {
            let spaces = TABULATOR_WIDTH - (visual % TABULATOR_WIDTH);
            result.extend(std::iter::repeat(' ').take(spaces));
            visual += spaces;
        } else {
            result.push(ch);
            visual += 1;
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_ascii_and_multibyte() {
        let bytes = "aé€😀".as_bytes();
        assert_eq!(char_len_at(bytes, 0), 1);
        assert_eq!(char_len_at(bytes, 1), 2);
        assert_eq!(char_len_at(bytes, 3), 3);
        assert_eq!(char_len_at(bytes, 6), 4);
        assert_eq!(char_len_at(bytes, 10), 0);
    }

    #[test]
    fn test_char_len_invalid_bytes() {
        assert_eq!(char_len_at(&[0xFF, b'a'], 0), 1);
        // Truncated two-byte sequence
        assert_eq!(char_len_at(&[0xC3], 0), 1);
        // Lone continuation byte
        assert_eq!(char_len_at(&[0x80, 0x80], 0), 1);
    }

    #[test]
    fn test_prev_boundary_multibyte() {
        let bytes = "aé".as_bytes();
        assert_eq!(prev_boundary(bytes, 3), 1);
        assert_eq!(prev_boundary(bytes, 1), 0);
        assert_eq!(prev_boundary(bytes, 0), 0);
    }

    #[test]
    fn test_prev_boundary_invalid() {
        let bytes = [b'a', 0xFF, 0xFE];
        assert_eq!(prev_boundary(&bytes, 3), 2);
        assert_eq!(prev_boundary(&bytes, 2), 1);
    }

    #[test]
    fn test_next_boundary_clamps() {
        assert_eq!(next_boundary(b"ab", 2), 2);
        assert_eq!(next_boundary("é".as_bytes(), 0), 2);
    }

    #[test]
    fn test_snap_inside_three_byte_char() {
        let euro = "€".as_bytes();
        assert_eq!(snap_to_boundary(euro, 1), 0);
        assert_eq!(snap_to_boundary(euro, 2), 0);
        assert_eq!(snap_to_boundary(euro, 3), 3);
        assert!(!is_boundary(euro, 2));
    }

    #[test]
    fn test_snap_inside_four_byte_char_after_newline() {
        let text = "a\n😀b".as_bytes();
        for pos in 3..=5 {
            assert_eq!(snap_to_boundary(text, pos), 2);
        }
        assert_eq!(snap_to_boundary(text, 6), 6);
        assert!(is_boundary(text, text.len()));
        assert!(!is_boundary(text, text.len() + 1));
    }

    #[test]
    fn test_snap_keeps_invalid_bytes_as_chars() {
        let bytes = [b'a', 0xE2, 0x82, b'b'];
        assert_eq!(snap_to_boundary(&bytes, 2), 2);
        assert_eq!(snap_to_boundary(&bytes, 10), 4);
    }

    #[test]
    fn test_char_at_replacement() {
        assert_eq!(char_at(&[0xFF], 0), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(char_at(b"x", 0), Some('x'));
        assert_eq!(char_at(b"x", 1), None);
    }

    #[test]
    fn test_visual_columns_with_tabs() {
        let line = b"a\tb";
        assert_eq!(byte_col_to_visual_col(line, 0), 0);
        assert_eq!(byte_col_to_visual_col(line, 1), 1);
        assert_eq!(byte_col_to_visual_col(line, 2), 4);
        assert_eq!(byte_col_to_visual_col(line, 3), 5);
    }

    #[test]
    fn test_visual_to_byte_col() {
        let line = "héllo".as_bytes();
        assert_eq!(visual_col_to_byte_col(line, 0), 0);
        assert_eq!(visual_col_to_byte_col(line, 2), 3);
        assert_eq!(visual_col_to_byte_col(line, 99), line.len());
    }

    #[test]
    fn test_visual_to_byte_col_inside_tab() {
        let line = b"\tx";
        assert_eq!(visual_col_to_byte_col(line, 1), 0);
        assert_eq!(visual_col_to_byte_col(line, 3), 1);
        assert_eq!(visual_col_to_byte_col(line, 4), 1);
    }

    #[test]
    fn test_display_line_expands_tabs() {
        assert_eq!(display_line(b"a\tb"), "a   b");
        assert_eq!(display_line(b"plain"), "plain");
    }

    #[test]
    fn test_display_line_invalid_utf8() {
        assert_eq!(display_line(&[b'a', 0xFF, b'b']), "a\u{FFFD}b");
    }
}
