//! Text width utilities.

use unicode_width::UnicodeWidthStr;

/// Visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width_ascii() {
        assert_eq!(visual_width("Blink LED"), 9);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_visual_width_ohm_and_dash() {
        // Both are narrow
        assert_eq!(visual_width("220Ω"), 4);
        assert_eq!(visual_width("a – b"), 5);
    }

    #[test]
    fn test_visual_width_wide_chars() {
        assert_eq!(visual_width("你好"), 4);
    }
}
