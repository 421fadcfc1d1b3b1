//! Literal find and replace-all over a byte buffer
//!
//! Matching is exact and case-sensitive. Offsets are byte offsets into the
//! document, so the same numbers work for valid UTF-8 and raw bytes alike.

/// Result of a replace-all pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The rewritten document
    pub text: Vec<u8>,
    /// Number of occurrences that were substituted
    pub count: usize,
}

/// Find `needle` in `haystack` starting at byte offset `from`
///
/// Returns the absolute offset of the match. An empty needle never matches.
pub fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

/// Zero-based offset of the first occurrence of `term`, or `None`
///
/// An empty term reports "not found": it would otherwise match at every
/// position and carry no information.
pub fn find(document: &[u8], term: &[u8]) -> Option<usize> {
    find_from(document, term, 0)
}

/// Replace every occurrence of `term` with `replacement`
///
/// See [`replace_all_counted`] for the scanning rules.
pub fn replace_all(document: &[u8], term: &[u8], replacement: &[u8]) -> Vec<u8> {
    replace_all_counted(document, term, replacement).text
}

/// Replace every occurrence of `term`, reporting how many were replaced
///
/// After each substitution the scan resumes right after the inserted
/// replacement, so a replacement that itself contains `term` is never
/// rescanned. An empty `term` leaves the document untouched.
pub fn replace_all_counted(document: &[u8], term: &[u8], replacement: &[u8]) -> Replacement {
    if term.is_empty() {
        return Replacement {
            text: document.to_vec(),
            count: 0,
        };
    }

    let mut text = document.to_vec();
    let mut count = 0;
    let mut pos = find_from(&text, term, 0);

    while let Some(start) = pos {
        text.splice(start..start + term.len(), replacement.iter().copied());
        count += 1;
        pos = find_from(&text, term, start + replacement.len());
    }

    tracing::debug!(
        target: "search",
        term_len = term.len(),
        replacement_len = replacement.len(),
        count,
        "replace_all"
    );

    Replacement { text, count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_single_occurrence() {
        assert_eq!(find(b"hello world", b"world"), Some(6));
    }

    #[test]
    fn test_find_returns_first_of_many() {
        assert_eq!(find(b"abcabcabc", b"bc"), Some(1));
    }

    #[test]
    fn test_find_absent() {
        assert_eq!(find(b"hello world", b"xyz"), None);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert_eq!(find(b"Hello", b"hello"), None);
    }

    #[test]
    fn test_find_empty_term_is_not_found() {
        assert_eq!(find(b"anything", b""), None);
        assert_eq!(find(b"", b""), None);
    }

    #[test]
    fn test_find_term_longer_than_document() {
        assert_eq!(find(b"ab", b"abc"), None);
    }

    #[test]
    fn test_find_multibyte_reports_byte_offset() {
        // "é" is two bytes in UTF-8
        assert_eq!(find("café au lait".as_bytes(), b"au"), Some(6));
    }

    #[test]
    fn test_find_in_invalid_utf8() {
        assert_eq!(find(&[0xFF, 0xFE, b'a', b'b'], b"ab"), Some(2));
    }

    #[test]
    fn test_find_from_past_end() {
        assert_eq!(find_from(b"abc", b"a", 4), None);
        assert_eq!(find_from(b"abc", b"c", 2), Some(2));
    }

    #[test]
    fn test_replace_all_basic() {
        assert_eq!(replace_all(b"foofoofoo", b"foo", b"bar"), b"barbarbar");
    }

    #[test]
    fn test_replace_all_growing_replacement_does_not_loop() {
        assert_eq!(replace_all(b"banana", b"a", b"aa"), b"baanaanaa");
    }

    #[test]
    fn test_replace_all_replacement_containing_term() {
        let result = replace_all_counted(b"x-x", b"x", b"xx");
        assert_eq!(result.text, b"xx-xx");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_replace_all_no_occurrences_is_unchanged() {
        let doc = b"nothing to see here";
        assert_eq!(replace_all(doc, b"zzz", b"y"), doc.to_vec());
    }

    #[test]
    fn test_replace_all_empty_term_is_noop() {
        let result = replace_all_counted(b"abc", b"", b"x");
        assert_eq!(result.text, b"abc");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_replace_all_with_empty_replacement_deletes() {
        assert_eq!(replace_all(b"a-b-c", b"-", b""), b"abc");
    }

    #[test]
    fn test_replace_all_shrinking_adjacent_matches() {
        // An "aa" that straddles the inserted text is behind the scan
        // position and stays.
        assert_eq!(replace_all(b"aaaa", b"aa", b"a"), b"aa");
    }

    #[test]
    fn test_replace_all_counted_reports_count() {
        let result = replace_all_counted(b"one two one", b"one", b"1");
        assert_eq!(result.text, b"1 two 1");
        assert_eq!(result.count, 2);
    }
}
