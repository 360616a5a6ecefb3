//! Template string parser using winnow.
//!
//! Parses reply template strings into an AST. Handles:
//! - Literal text segments
//! - Placeholders `{name}` and `{name!c}` with a single-character conversion
//! - Escape sequences: `{{` and `}}`

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use super::ast::{Field, ParsedTemplate, Segment};
use super::error::{ParseError, calculate_position};

/// Parse a template string into an AST.
///
/// # Example
///
/// ```
/// use replies::parser::{Field, Segment, parse_template};
///
/// let t = parse_template("Cooldown until {until!t}").unwrap();
/// assert_eq!(
///     t.segments[1],
///     Segment::Field(Field { name: "until".into(), conversion: Some('t') })
/// );
/// ```
pub fn parse_template(input: &str) -> Result<ParsedTemplate, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => Ok(t),
        _ => Err(describe_failure(input, remaining)),
    }
}

/// Build an error describing why parsing stopped at `remaining`.
fn describe_failure(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let message = if remaining.starts_with('}') {
        "single '}' encountered; write '}}' for a literal brace".to_string()
    } else if let Some(rest) = remaining.strip_prefix('{') {
        match rest.find('}') {
            None => return ParseError::UnexpectedEof { line, column },
            Some(end) => format!(
                "invalid placeholder '{{{}}}': expected {{name}} or {{name!c}}",
                &rest[..end]
            ),
        }
    } else {
        format!(
            "unexpected character: '{}'",
            remaining.chars().next().unwrap_or('?')
        )
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<ParsedTemplate> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(ParsedTemplate {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal run).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, field, literal_run)).parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a run of characters containing no braces.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: { name (!c)? }
fn field(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', (identifier, opt(preceded('!', conversion_code))), '}')
        .map(|(name, conversion): (&str, Option<char>)| {
            Segment::Field(Field {
                name: name.to_string(),
                conversion,
            })
        })
        .parse_next(input)
}

/// Parse a field name: a letter or underscore followed by alphanumerics.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// Parse a single-character conversion code.
fn conversion_code(input: &mut &str) -> ModalResult<char> {
    any.verify(|c: &char| c.is_ascii_alphanumeric())
        .parse_next(input)
}
