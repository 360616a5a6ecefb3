//! Override file parser.
//!
//! Parses localization override files: a sequence of `KEY = body;` entries
//! with `//` line comments. A body is either a quoted template string or a
//! `:match(field) { ... }` block. Template strings are returned raw; their
//! placeholder syntax is checked when the file is loaded.

use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{MatchArm, OverrideBody, OverrideEntry};
use super::error::{ParseError, calculate_position};

/// Parse an entire override file into entries, in file order.
///
/// # Example
///
/// ```
/// use replies::parser::{OverrideBody, parse_file};
///
/// let entries = parse_file(r#"
///     // Spanish
///     ERR_COOLDOWN = "Tu cooldown expira el {until!t}";
/// "#).unwrap();
/// assert_eq!(entries[0].key, "ERR_COOLDOWN");
/// assert_eq!(entries[0].line, 3);
/// assert!(matches!(entries[0].body, OverrideBody::Text(_)));
/// ```
pub fn parse_file(input: &str) -> Result<Vec<OverrideEntry>, ParseError> {
    let mut remaining = input;
    let mut entries = Vec::new();

    loop {
        if skip_ws_and_comments(&mut remaining).is_err() {
            return Err(describe_failure(input, remaining));
        }
        if remaining.is_empty() {
            return Ok(entries);
        }

        let (line, column) = calculate_position(input, remaining);
        match override_entry(&mut remaining) {
            Ok((key, body)) => entries.push(OverrideEntry {
                key,
                line,
                column,
                body,
            }),
            Err(_) => return Err(describe_failure(input, remaining)),
        }
    }
}

/// Build an error for the position where parsing stopped.
fn describe_failure(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    match remaining.chars().next() {
        None => ParseError::UnexpectedEof { line, column },
        Some(c) => ParseError::Syntax {
            line,
            column,
            message: format!("unexpected character: '{c}'"),
        },
    }
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry: KEY = body ;
fn override_entry(input: &mut &str) -> ModalResult<(String, OverrideBody)> {
    let key = identifier(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let body = alt((match_block, quoted_string.map(OverrideBody::Text))).parse_next(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((key.to_string(), body))
}

/// Parse a key or field name.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// Parse a match block: :match(field) { arms }
fn match_block(input: &mut &str) -> ModalResult<OverrideBody> {
    ":match".parse_next(input)?;
    skip_ws_and_comments(input)?;
    let field = delimited(
        ('(', skip_ws_and_comments),
        identifier,
        (skip_ws_and_comments, ')'),
    )
    .parse_next(input)?;
    skip_ws_and_comments(input)?;
    let arms = delimited(
        ('{', skip_ws_and_comments),
        match_arms,
        (skip_ws_and_comments, '}'),
    )
    .parse_next(input)?;

    Ok(OverrideBody::Match {
        field: field.to_string(),
        arms,
    })
}

/// Parse match arms with trailing comma support.
fn match_arms(input: &mut &str) -> ModalResult<Vec<MatchArm>> {
    let arms: Vec<MatchArm> = separated(
        1..,
        match_arm,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;

    // Allow trailing comma
    let _ = opt((skip_ws_and_comments, ',')).parse_next(input)?;

    Ok(arms)
}

/// Parse a single arm: *? key1, key2: "template"
fn match_arm(input: &mut &str) -> ModalResult<MatchArm> {
    let is_default = opt('*').parse_next(input)?.is_some();
    let keys: Vec<String> = separated(
        1..,
        arm_key,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;
    skip_ws_and_comments(input)?;
    ':'.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let template = quoted_string(input)?;

    Ok(MatchArm {
        keys,
        template,
        is_default,
    })
}

/// Parse an arm key: a word, number or plural category.
fn arm_key(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse a double-quoted string with `\"`, `\\`, `\n` and `\t` escapes.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    let parts: Vec<char> =
        delimited('"', repeat(0.., alt((string_escape, none_of(['"', '\\'])))), '"')
            .parse_next(input)?;
    Ok(parts.into_iter().collect())
}

/// Parse a backslash escape inside a string.
fn string_escape(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
        )),
    )
    .parse_next(input)
}
