//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can serve as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` for
//! direct indexing into column `Vec`s via `id.0 as usize`; callers should
//! prefer the `.index()` helper for clarity.
//!
//! Ordering matters: nearest-vertex and nearest-facility ties are broken by
//! the lowest identifier, so `Ord` on these types is part of the contract.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(u32::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a street-graph vertex.
    pub struct VertexId;
}

typed_id! {
    /// Index of a directed street-graph edge in CSR order.
    pub struct EdgeId;
}

typed_id! {
    /// Index of a service centre in the run's facility list.
    pub struct FacilityId;
}
