use crate::types::{Fields, ReplyKind};

/// A typed request to render one user-facing message.
///
/// Pairs a [`ReplyKind`] with the fields its template reads. Replies are
/// immutable once built.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use replies::{Reply, ReplyKind, fields};
///
/// let reply = Reply::new(
///     ReplyKind::GivenCooldown,
///     fields! { "duration" => TimeDelta::hours(1), "deleted" => true },
/// );
/// assert_eq!(reply.kind(), ReplyKind::GivenCooldown);
/// assert_eq!(reply.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    kind: ReplyKind,
    fields: Fields,
}

impl Reply {
    pub fn new(kind: ReplyKind, fields: Fields) -> Self {
        Self { kind, fields }
    }

    /// A reply that carries no fields.
    pub fn bare(kind: ReplyKind) -> Self {
        Self::new(kind, Fields::new())
    }

    pub fn kind(&self) -> ReplyKind {
        self.kind
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl From<ReplyKind> for Reply {
    fn from(kind: ReplyKind) -> Self {
        Reply::bare(kind)
    }
}
