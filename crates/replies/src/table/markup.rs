//! Markup helpers used by the built-in templates.

/// Wrap `text` in `<em>` tags, leaving slash-commands outside the emphasis
/// so chat clients keep them clickable.
///
/// A command is a `/` followed by a letter and then letters, digits or
/// underscores, at the start of the text or after a character that cannot
/// be part of a word or path.
///
/// ```
/// use replies::table::markup::emphasis;
///
/// assert_eq!(emphasis("You left the chat!"), "<em>You left the chat!</em>");
/// assert_eq!(
///     emphasis("Use /start to join!"),
///     "<em>Use </em>/start<em> to join!</em>"
/// );
/// assert_eq!(emphasis("and/or"), "<em>and/or</em>");
/// ```
pub fn emphasis(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut run_start = 0;
    let mut previous: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if c == '/' && may_precede_command(previous) {
            let command_end = command_length(&text[index + 1..]).map(|len| index + 1 + len);
            if let Some(end) = command_end {
                push_emphasized(&mut out, &text[run_start..index]);
                out.push_str(&text[index..end]);
                run_start = end;
                while chars.next_if(|&(next, _)| next < end).is_some() {}
                previous = text[..end].chars().next_back();
                continue;
            }
        }
        previous = Some(c);
    }
    push_emphasized(&mut out, &text[run_start..]);
    out
}

/// Pick a face matching a warning count.
///
/// ```
/// use replies::table::markup::smiley;
///
/// assert_eq!(smiley(0), ":)");
/// assert_eq!(smiley(1), ":|");
/// assert_eq!(smiley(3), ":/");
/// assert_eq!(smiley(4), ":(");
/// ```
pub fn smiley(warnings: i64) -> &'static str {
    match warnings {
        ..=0 => ":)",
        1 => ":|",
        2..=3 => ":/",
        _ => ":(",
    }
}

fn push_emphasized(out: &mut String, run: &str) {
    if !run.is_empty() {
        out.push_str("<em>");
        out.push_str(run);
        out.push_str("</em>");
    }
}

fn may_precede_command(previous: Option<char>) -> bool {
    previous.is_none_or(|c| {
        !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '/'))
    })
}

/// Byte length of the command name at the start of `rest`, if there is one.
fn command_length(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let tail = chars
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .count();
    Some(1 + tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_at_start_is_not_emphasized() {
        assert_eq!(emphasis("/start now"), "/start<em> now</em>");
    }

    #[test]
    fn command_at_end_leaves_no_empty_run() {
        assert_eq!(emphasis("Tap /id"), "<em>Tap </em>/id");
    }

    #[test]
    fn several_commands_split_the_text() {
        assert_eq!(
            emphasis("(check /id or /toggleCredit to stop)"),
            "<em>(check </em>/id<em> or </em>/toggleCredit<em> to stop)</em>"
        );
    }

    #[test]
    fn slash_inside_words_is_text() {
        assert_eq!(emphasis("on/off"), "<em>on/off</em>");
        assert_eq!(emphasis("1/2"), "<em>1/2</em>");
        assert_eq!(emphasis("a // b"), "<em>a // b</em>");
    }

    #[test]
    fn placeholders_stay_inside_emphasis() {
        assert_eq!(emphasis("until {until!t}"), "<em>until {until!t}</em>");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(emphasis(""), "");
    }

    #[test]
    fn smiley_covers_negative_counts() {
        assert_eq!(smiley(-2), ":)");
    }
}
