//! Shared reply semantics used by both the runtime and the `reply_kinds!` macro.
//!
//! This crate centralizes conversion-code resolution and the reply kind name
//! table so that compile-time (`replies-macros`) and runtime (`replies`)
//! behavior cannot drift apart.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Reserved override key selecting the template formatter for all renders.
///
/// No reply kind may use this name.
pub const FORMATTER_KEY: &str = "_FORMATTER_";

/// Canonical conversion identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionId {
    /// `x`: escape HTML-significant characters.
    Escape,
    /// `t`: absolute date and time.
    DateTime,
    /// `d`: elapsed duration.
    Duration,
}

impl ConversionId {
    /// The single-character code selecting this conversion in a template.
    pub fn code(self) -> char {
        match self {
            ConversionId::Escape => 'x',
            ConversionId::DateTime => 't',
            ConversionId::Duration => 'd',
        }
    }
}

/// Resolve a conversion code to a canonical conversion id.
///
/// Unknown codes resolve to `None`; callers fall back to the default string
/// form of the value instead of failing.
pub fn resolve_conversion(code: char) -> Option<ConversionId> {
    match code {
        'x' => Some(ConversionId::Escape),
        't' => Some(ConversionId::DateTime),
        'd' => Some(ConversionId::Duration),
        _ => None,
    }
}

/// Conversion codes with a dedicated conversion, used for diagnostics.
pub const KNOWN_CONVERSIONS: &[char] = &['x', 't', 'd'];

/// Convert a CamelCase identifier to SCREAMING_SNAKE_CASE.
///
/// ```
/// use replies_semantics::screaming_snake_case;
///
/// assert_eq!(screaming_snake_case("GivenCooldown"), "GIVEN_COOLDOWN");
/// assert_eq!(screaming_snake_case("ErrNoUserById"), "ERR_NO_USER_BY_ID");
/// ```
pub fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut previous: Option<char> = None;
    for c in ident.chars() {
        if c.is_ascii_uppercase() {
            if previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.push(c);
        } else if c == '_' {
            if previous.is_some_and(|p| p != '_') {
                out.push('_');
            }
        } else {
            out.push(c.to_ascii_uppercase());
        }
        previous = Some(c);
    }
    out
}

/// Error raised when building a [`NameTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTableError {
    /// The same name was declared twice.
    Duplicate {
        name: String,
        first: usize,
        second: usize,
    },
    /// A name collides with a reserved override key.
    Reserved { name: String, index: usize },
}

impl Display for NameTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NameTableError::Duplicate {
                name,
                first,
                second,
            } => write!(
                f,
                "duplicate reply kind '{name}' at positions {first} and {second}"
            ),
            NameTableError::Reserved { name, index } => {
                write!(f, "reply kind '{name}' at position {index} is a reserved key")
            }
        }
    }
}

impl Error for NameTableError {}

/// Bijective mapping between an ordered list of names and zero-based ids.
///
/// Declaration order determines the id. Duplicates are rejected at
/// construction time.
///
/// ```
/// use replies_semantics::NameTable;
///
/// let table = NameTable::new(["SUCCESS", "ERR_COOLDOWN"]).unwrap();
/// assert_eq!(table.id("ERR_COOLDOWN"), Some(1));
/// assert_eq!(table.name(0), Some("SUCCESS"));
/// assert!(NameTable::new(["A", "A"]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl NameTable {
    /// Build a table from names in declaration order.
    pub fn new<I, S>(names: I) -> Result<Self, NameTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = NameTable::default();
        for name in names {
            table.push(name.into())?;
        }
        Ok(table)
    }

    fn push(&mut self, name: String) -> Result<(), NameTableError> {
        let index = self.names.len();
        if name == FORMATTER_KEY {
            return Err(NameTableError::Reserved { name, index });
        }
        if let Some(&first) = self.ids.get(&name) {
            return Err(NameTableError::Duplicate {
                name,
                first,
                second: index,
            });
        }
        self.ids.insert(name.clone(), index);
        self.names.push(name);
        Ok(())
    }

    /// Look up the id assigned to a name.
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Look up the name assigned to an id.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
