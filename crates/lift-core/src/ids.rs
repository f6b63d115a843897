//! Strongly typed identifiers and the floor number type.
//!
//! `CarId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.

use std::fmt;

/// A floor number.  Negative values are basements.
pub type Floor = i32;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of one elevator car, stable for the car's lifetime.
    pub struct CarId(u32);
}
