//! Card data: records and range categories.
//!
//! ## Key Types
//!
//! - `CardRecord`: one decoded dataset entry, with defaulting accessors
//! - `RangeCategory`: enumerated attack range with its accepted spellings

pub mod range;
pub mod record;

pub use range::RangeCategory;
pub use record::{Abilities, Ability, CardRecord, DEFAULT_SPEED};
