use super::ArtifactKey;
use std::collections::HashMap;
use std::fmt;

const NODE_PREFIX: &str = "Node_";

/// Render-local synthetic node identifier (`Node_0`, `Node_1`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    fn from_counter(counter: usize) -> Self {
        Self(format!("{}{}", NODE_PREFIX, counter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Binds artifact keys to node ids on first reference.
///
/// Ids come from a zero-based counter and are never reused or reassigned
/// until [`NodeIdAllocator::reset`].
#[derive(Debug, Default)]
pub struct NodeIdAllocator {
    next: usize,
    assigned: HashMap<ArtifactKey, NodeId>,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id bound to `key`, allocating the next one if unseen
    pub fn id_for(&mut self, key: &ArtifactKey) -> &NodeId {
        let next = &mut self.next;
        self.assigned.entry(key.clone()).or_insert_with(|| {
            let id = NodeId::from_counter(*next);
            *next += 1;
            id
        })
    }

    /// The id already bound to `key`, without allocating
    pub fn get(&self, key: &ArtifactKey) -> Option<&NodeId> {
        self.assigned.get(key)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn reset(&mut self) {
        self.next = 0;
        self.assigned.clear();
    }
}
