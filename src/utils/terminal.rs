//! Sanitising transcript text before it reaches the terminal.
//!
//! Message content comes straight from JSONL files and may contain ANSI escape
//! sequences. Drawn unfiltered they would move the cursor or restyle the TUI, so
//! every message goes through [`sanitize_for_display`] first.

const ESC: char = '\x1b';

/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters other
/// than tab, newline and carriage return.
///
/// ```
/// use transcript_viewer::utils::terminal::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[1mbold\x1b[0m"), "bold");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until the final alphabetic byte
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if is_displayable(ch) {
            out.push(ch);
        }
    }

    out
}

fn is_displayable(ch: char) -> bool {
    !ch.is_control() || matches!(ch, '\t' | '\n' | '\r')
}
