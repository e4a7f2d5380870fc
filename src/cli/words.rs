//! Word Navigation
//!
//! Word-boundary arithmetic for Ctrl-Left / Ctrl-Right. A word is any run
//! of characters other than space and newline; nothing else separates words.

fn is_separator(ch: char) -> bool {
    ch == ' ' || ch == '\n'
}

/// Offset of the start of the word before `pos`.
///
/// Skips the separators immediately behind `pos`, then the word behind
/// those. Returns 0 when there is nothing left to skip.
pub fn previous_word_boundary(text: &[char], pos: usize) -> usize {
    let mut cur = pos.min(text.len());
    while cur > 0 && is_separator(text[cur - 1]) {
        cur -= 1;
    }
    while cur > 0 && !is_separator(text[cur - 1]) {
        cur -= 1;
    }
    cur
}

/// Offset just past the end of the word at or after `pos`.
pub fn next_word_boundary(text: &[char], pos: usize) -> usize {
    let len = text.len();
    let mut cur = pos.min(len);
    while cur < len && is_separator(text[cur]) {
        cur += 1;
    }
    while cur < len && !is_separator(text[cur]) {
        cur += 1;
    }
    cur
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_previous_word_boundary() {
        let text = chars("hello big  world");
        assert_eq!(previous_word_boundary(&text, 16), 11);
        assert_eq!(previous_word_boundary(&text, 11), 6);
        assert_eq!(previous_word_boundary(&text, 8), 6);
        assert_eq!(previous_word_boundary(&text, 6), 0);
        assert_eq!(previous_word_boundary(&text, 0), 0);
    }

    #[test]
    fn test_next_word_boundary() {
        let text = chars("hello big  world");
        assert_eq!(next_word_boundary(&text, 0), 5);
        assert_eq!(next_word_boundary(&text, 5), 9);
        assert_eq!(next_word_boundary(&text, 9), 16);
        assert_eq!(next_word_boundary(&text, 16), 16);
    }

    #[test]
    fn test_newline_separates_words() {
        let text = chars("one\ntwo");
        assert_eq!(next_word_boundary(&text, 0), 3);
        assert_eq!(next_word_boundary(&text, 3), 7);
        assert_eq!(previous_word_boundary(&text, 7), 4);
        assert_eq!(previous_word_boundary(&text, 4), 0);
    }

    #[test]
    fn test_back_then_forward_returns_to_word_end() {
        let text = chars("alpha beta");
        let start = previous_word_boundary(&text, text.len());
        assert_eq!(start, 6);
        assert_eq!(next_word_boundary(&text, start), text.len());
    }

    #[test]
    fn test_out_of_range_position_is_clamped() {
        let text = chars("abc");
        assert_eq!(next_word_boundary(&text, 10), 3);
        assert_eq!(previous_word_boundary(&text, 10), 0);
        assert_eq!(previous_word_boundary(&[], 0), 0);
    }
}
