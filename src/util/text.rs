use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculates the display width of a string in terminal columns.
///
/// Handles Unicode correctly: CJK characters and most emoji occupy two
/// columns, combining marks occupy zero.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis string used for truncation
const ELLIPSIS: &str = "...";
/// Display width of the ellipsis (3 columns for ASCII "...")
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to fit within a maximum display width.
///
/// If truncation is necessary, appends "..." to indicate text was cut off.
/// Width-aware so CJK text and emoji in article titles never overflow a
/// card's column budget.
///
/// Returns `Cow::Borrowed` when the string already fits (no allocation).
/// For very narrow widths (0-3 columns) the result is as many characters
/// as fit, without ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    // Too narrow for "char + ellipsis": return what fits, no ellipsis
    if max_width <= ELLIPSIS_WIDTH {
        let mut byte_end = 0;
        let mut current_width = 0;
        for (idx, c) in s.char_indices() {
            let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width > max_width {
                break;
            }
            current_width += char_width;
            byte_end = idx + c.len_utf8();
        }
        if byte_end == s.len() {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(s[..byte_end].to_string());
    }

    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let target_width = max_width.saturating_sub(ELLIPSIS_WIDTH);
    let mut byte_end = 0;
    let mut current_width = 0;
    for (idx, c) in s.char_indices() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        byte_end = idx + c.len_utf8();
    }

    let mut truncated = s[..byte_end].to_string();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Splits a string at a display-width boundary.
///
/// Returns `(head, tail)` where `head` is the longest prefix fitting in
/// `max_width` columns without splitting a character. Used for the crude
/// two-line summary wrap inside cards.
pub fn split_at_width(s: &str, max_width: usize) -> (&str, &str) {
    let mut byte_end = 0;
    let mut current_width = 0;
    for (idx, c) in s.char_indices() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        current_width += char_width;
        byte_end = idx + c.len_utf8();
    }
    s.split_at(byte_end)
}

/// Removes control characters from backend-supplied text.
///
/// Article titles and summaries are rendered into the terminal verbatim;
/// stray escape sequences in a feed could otherwise corrupt the display.
/// Tabs and newlines are replaced with single spaces.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| c.is_control()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect(),
    )
}
