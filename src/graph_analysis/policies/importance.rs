use crate::graph_analysis::domain::ArtifactKey;
use std::num::NonZeroU32;

/// Edge weight, written verbatim as the rendered edge's `penwidth`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Importance(NonZeroU32);

impl Importance {
    /// Weight of an edge whose required version is current
    pub const CURRENT: Importance = Importance(NonZeroU32::MIN);

    /// Weight reserved for an edge whose required version is outdated
    pub const OUTDATED: Importance = match NonZeroU32::new(10) {
        Some(weight) => Importance(weight),
        None => Importance(NonZeroU32::MIN),
    };

    pub fn new(weight: u32) -> Option<Self> {
        NonZeroU32::new(weight).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Importance {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decides how heavily an edge to `dependency` at `version` is drawn.
///
/// No latest-version lookup exists yet, so the only implementation is
/// [`FixedImportance`]. A staleness-aware policy can replace it without
/// touching the index shapes.
pub trait ImportancePolicy {
    fn importance(&self, dependency: &ArtifactKey, version: &str) -> Importance;
}

/// Gives every edge the same weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedImportance(Importance);

impl FixedImportance {
    pub fn new(importance: Importance) -> Self {
        Self(importance)
    }
}

impl ImportancePolicy for FixedImportance {
    fn importance(&self, _dependency: &ArtifactKey, _version: &str) -> Importance {
        self.0
    }
}
