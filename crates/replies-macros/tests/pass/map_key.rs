// Test generated kinds work as ordered and hashed map keys
use std::collections::{BTreeMap, HashMap};

use replies_macros::reply_kinds;

reply_kinds! {
    /// Kinds with docs and attributes on variants.
    #[allow(dead_code)]
    pub(crate) enum Kind {
        /// Shown after joining.
        ChatJoin,
        ChatLeave,
        #[doc(hidden)]
        Internal,
    }
}

const FIRST: &str = Kind::ChatJoin.name();

fn main() {
    let mut ordered = BTreeMap::new();
    ordered.insert(Kind::Internal, 3);
    ordered.insert(Kind::ChatJoin, 1);
    assert_eq!(ordered.keys().next(), Some(&Kind::ChatJoin));

    let mut hashed = HashMap::new();
    hashed.insert(Kind::ChatLeave, "bye");
    assert_eq!(hashed[&Kind::ChatLeave], "bye");

    assert_eq!(FIRST, "CHAT_JOIN");
    assert_ne!(Kind::ChatJoin, Kind::ChatLeave);
}
