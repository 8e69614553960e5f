//! Identity references used across the ledger.
//!
//! All identifiers are opaque `u64` newtypes. Zero is reserved as the
//! "missing reference" sentinel: external systems that hand the ledger an
//! unsaved or absent record surface here as an id of zero, which
//! [`is_valid`](CustomerId::is_valid) rejects.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw identifier value.
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Returns `true` if this is a real reference (non-zero).
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

id_newtype!(
    /// Owner of a ledger entry.
    CustomerId,
    "customer"
);

id_newtype!(
    /// The store/tenant an entry originated from.
    StoreId,
    "store"
);

id_newtype!(
    /// Weak reference to the order a redemption was applied to.
    ///
    /// Relation only; the ledger never manages the order's lifecycle.
    OrderId,
    "order"
);

id_newtype!(
    /// Store-assigned entry identifier.
    ///
    /// Assigned monotonically on insert, which makes it a stable tie-break
    /// for entries sharing a timestamp.
    EntryId,
    "entry"
);
