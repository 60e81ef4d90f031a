//! Group identifier normalization.
//!
//! Group ids live in a reserved namespace so they can never collide
//! with layer ids: every normalized id begins with [`GROUP_PREFIX`],
//! which is not permitted in caller-supplied group names. Nested groups
//! are addressed by `/`-separated paths (`$ui/labels`), and every
//! prefix of such a path is itself a valid group id.

use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};

use crate::SmartString;

/// Reserved first character of every normalized group id.
pub const GROUP_PREFIX: char = '$';

/// Separator between the path segments of a nested group id.
pub const GROUP_SEPARATOR: char = '/';

/// A normalized group identifier.
///
/// Two ids name the same group exactly when they compare equal after
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(SmartString);

impl GroupId {
    /// Creates a group id from a raw name, prepending the reserved
    /// prefix when it is not already present.
    ///
    /// Normalization is idempotent; the empty string passes through
    /// unchanged.
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() || raw.starts_with(GROUP_PREFIX) {
            Self(raw.into())
        } else {
            let mut id = SmartString::new();
            id.push(GROUP_PREFIX);
            id.push_str(raw);
            Self(id)
        }
    }

    /// Builds a nested group id from its path segments.
    ///
    /// `from_segments(["ui", "labels"])` yields `$ui/labels`.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut id = SmartString::new();
        id.push(GROUP_PREFIX);
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                id.push(GROUP_SEPARATOR);
            }
            id.push_str(segment.as_ref());
        }
        Self(id)
    }

    /// The id as a plain string, prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.0.matches(GROUP_SEPARATOR).count() + 1
    }

    /// Iterates the ancestor chain from the outermost group down to
    /// the id itself: `$a/b/c` yields `$a`, `$a/b`, `$a/b/c`.
    pub fn ancestors(&self) -> impl Iterator<Item = GroupId> + '_ {
        let id = self.as_str();
        id.match_indices(GROUP_SEPARATOR)
            .map(move |(at, _)| Self(id[..at].into()))
            .chain(iter::once(self.clone()))
    }
}

impl From<&str> for GroupId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
