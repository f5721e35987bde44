mod colour_palette;
mod importance;
mod namespace_restriction;

pub use colour_palette::{ColourPalette, PALETTE};
pub use importance::{FixedImportance, Importance, ImportancePolicy};
pub use namespace_restriction::NamespaceRestriction;
