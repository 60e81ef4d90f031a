//! Layer and group-membership value types.

use serde::{Deserialize, Serialize};

use crate::{GroupId, SmartString};

/// The group memberships carried by a layer, in insertion order and
/// free of duplicates.
///
/// Under the flat model this holds at most one id. Under the nested
/// model it holds a group id plus the id of every ancestor group, so
/// that querying an ancestor finds all descendant layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSet(Vec<GroupId>);

impl GroupSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a group id unless it is already present.
    pub fn insert(&mut self, group: GroupId) {
        if !self.0.contains(&group) {
            self.0.push(group);
        }
    }

    pub fn contains(&self, group: &GroupId) -> bool {
        self.0.contains(group)
    }

    pub fn first(&self) -> Option<&GroupId> {
        self.0.first()
    }

    /// The member group with the fewest path segments, i.e. the
    /// outermost enclosing group. The earliest entry wins ties.
    pub fn outermost(&self) -> Option<&GroupId> {
        self.0.iter().min_by_key(|group| group.depth())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupId> + '_ {
        self.0.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// One uniquely identified unit in the host's ordered sequence.
///
/// The style payload is opaque: it is carried through every operation
/// unmodified and never inspected. Group membership lives in its own
/// typed field rather than inside the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: SmartString,
    #[serde(default)]
    pub style: serde_json::Value,
    #[serde(default, skip_serializing_if = "GroupSet::is_empty")]
    pub groups: GroupSet,
}

impl Layer {
    /// Creates an untagged layer with the given opaque style payload.
    pub fn new(id: impl Into<SmartString>, style: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            style,
            groups: GroupSet::new(),
        }
    }
}
