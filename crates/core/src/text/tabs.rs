//! Tab expansion
//!
//! Every non-tab character is counted as one column. Wide and zero-width
//! glyphs are not measured specially.

/// Tab stop width used by the CLI
pub const TAB_STOP: usize = 8;

/// Replace each tab with spaces up to the next multiple of `tab_stop`
///
/// A `tab_stop` of 0 is treated as 1.
///
/// # Examples
/// ```
/// use boxit_core::text::tabs::expand_tabs;
///
/// assert_eq!(expand_tabs("a\tb", 8), "a       b");
/// assert_eq!(expand_tabs("no tabs", 8), "no tabs");
/// ```
pub fn expand_tabs(line: &str, tab_stop: usize) -> String {
    let tab_stop = tab_stop.max(1);
    let mut result = String::with_capacity(line.len());
    let mut column = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let spaces = tab_stop - (column % tab_stop);
            result.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            result.push(ch);
            column += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_after_one_char() {
        let expanded = expand_tabs("a\tb", TAB_STOP);
        assert_eq!(expanded, format!("a{}b", " ".repeat(7)));
        assert_eq!(expanded.chars().count(), 9);
    }

    #[test]
    fn test_leading_tab_is_full_width() {
        assert_eq!(expand_tabs("\tx", 8), format!("{}x", " ".repeat(8)));
    }

    #[test]
    fn test_tab_on_stop_boundary() {
        // Column 8 is already a stop, so the tab advances a full width
        assert_eq!(expand_tabs("12345678\t|", 8), format!("12345678{}|", " ".repeat(8)));
    }

    #[test]
    fn test_consecutive_tabs() {
        assert_eq!(expand_tabs("ab\t\tc", 4), "ab      c");
    }

    #[test]
    fn test_multibyte_chars_count_one_column() {
        assert_eq!(expand_tabs("é\t|", 4), "é   |");
    }

    #[test]
    fn test_zero_tab_stop_does_not_panic() {
        assert_eq!(expand_tabs("a\tb", 0), "a b");
    }

    #[test]
    fn test_tab_free_lines_unchanged() {
        let samples = ["", "plain", "  indented", "┌─┐ glyphs", "trailing  "];
        for stop in 1..=12 {
            for sample in samples {
                assert_eq!(expand_tabs(sample, stop), sample);
            }
        }
    }

    #[test]
    fn test_expansion_is_idempotent_and_tab_free() {
        let samples = ["\t", "a\tb\tc", "\t\t\tx", "mixed\t é \tend"];
        for stop in 1..=12 {
            for sample in samples {
                let once = expand_tabs(sample, stop);
                assert!(!once.contains('\t'));
                assert_eq!(expand_tabs(&once, stop), once);
            }
        }
    }
}
