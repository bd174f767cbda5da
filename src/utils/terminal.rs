//! Terminal output sanitization
//!
//! Keys and values come straight from data files and are echoed to the console
//! by the display and search commands. Escape sequences embedded in a file could
//! recolor the terminal, move the cursor or clear the screen, so every printed
//! line goes through [`sanitize_for_terminal`] first.

use std::borrow::Cow;

/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters other
/// than tab, newline and carriage return.
///
/// Returns the input unchanged, without allocating, when there is nothing to strip.
///
/// # Examples
///
/// ```
/// use record_explorer::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("Key:\x1b[31mred\x1b[0m Value:v"), "Key:red Value:v");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_stripped_control) {
        return Cow::Borrowed(text);
    }

    let mut clean = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte, which is a letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if !is_stripped_control(ch) {
            clean.push(ch);
        }
    }

    Cow::Owned(clean)
}

fn is_stripped_control(ch: char) -> bool {
    ch.is_control() && !matches!(ch, '\t' | '\n' | '\r')
}
