//! Customization catalog
//!
//! Combination groups and their options, authored by restaurant staff
//! in the back-office and read-only to this crate. Deactivating a group
//! or option hides it from new orders without deleting history.

pub mod combination;
pub mod normalize;

pub use combination::{CombinationGroup, CombinationOption, SelectionMode};
pub use normalize::normalize_catalog;
