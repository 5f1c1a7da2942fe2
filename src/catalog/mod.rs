//! Value to shortest-expression catalogs and their dominance rule

mod core;

pub use self::core::{Admission, Catalog};
