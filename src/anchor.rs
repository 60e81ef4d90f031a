//! Placement of layers and groups within the host sequence.

use crate::{query, GroupId, Host, SmartString};

/// Where a layer or group should land in the host sequence.
///
/// Callers state what they are anchoring to, and [`resolve`] turns that
/// into the single concrete layer id (or end of sequence) accepted by
/// the host's primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Placement {
    /// Append at the end of the sequence.
    #[default]
    End,
    /// Insert immediately before the named layer. When that layer
    /// belongs to a group, the insertion lands before the first layer
    /// of its outermost enclosing group, so no group is ever split.
    BeforeLayer(SmartString),
    /// Insert immediately before the first layer of the named group.
    /// The id may be raw or normalized. A group with no members
    /// resolves to the end of the sequence.
    BeforeGroup(GroupId),
}

impl Placement {
    /// Classifies a raw reference the way a dynamically-typed caller
    /// would: an id the host knows as a layer anchors as a layer, and
    /// anything else is taken to be a group id.
    pub fn named(host: &impl Host, id: &str) -> Self {
        if host.layer(id).is_some() {
            Self::BeforeLayer(id.into())
        } else {
            Self::BeforeGroup(GroupId::new(id))
        }
    }
}

/// Resolves a placement to the `before` argument for host primitives:
/// `Some(layer id)` or `None` for append.
pub(crate) fn resolve(host: &impl Host, placement: &Placement) -> Option<SmartString> {
    match placement {
        Placement::End => None,
        Placement::BeforeLayer(id) => match host.layer(id) {
            Some(layer) => match layer.groups.outermost() {
                Some(group) => query::first_member_id(host, group),
                None => Some(id.clone()),
            },
            // Unknown ids pass through untouched; the host raises its
            // own rejection when the primitive runs.
            None => Some(id.clone()),
        },
        Placement::BeforeGroup(group) => query::first_member_id(host, group),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{resolve, Placement};
    use crate::{GroupId, Host, Layer, LayerStack};

    fn tagged(id: &str, groups: &[&str]) -> Layer {
        let mut layer = Layer::new(id, json!({}));
        for group in groups {
            layer.groups.insert(GroupId::new(group));
        }
        layer
    }

    fn sample() -> LayerStack {
        let mut stack = LayerStack::new();
        stack.insert_layer(Layer::new("plain", json!({})), None).unwrap();
        stack.insert_layer(tagged("a1", &["a"]), None).unwrap();
        stack.insert_layer(tagged("ab1", &["a", "a/b"]), None).unwrap();
        stack.insert_layer(tagged("ab2", &["a", "a/b"]), None).unwrap();
        stack
    }

    #[test]
    fn end_resolves_to_append() {
        let stack = sample();
        assert_eq!(resolve(&stack, &Placement::End), None);
    }

    #[test]
    fn ungrouped_layer_anchors_on_itself() {
        let stack = sample();
        let anchor = resolve(&stack, &Placement::BeforeLayer("plain".into()));
        assert_eq!(anchor.as_deref(), Some("plain"));
    }

    #[test]
    fn grouped_layer_anchors_on_its_outermost_group() {
        let stack = sample();
        // ab2 belongs to $a/b and $a; $a is the outermost, so the
        // anchor is $a's first layer rather than $a/b's.
        let anchor = resolve(&stack, &Placement::BeforeLayer("ab2".into()));
        assert_eq!(anchor.as_deref(), Some("a1"));
    }

    #[test]
    fn group_reference_anchors_on_its_first_layer() {
        let stack = sample();
        let anchor = resolve(&stack, &Placement::BeforeGroup(GroupId::new("a/b")));
        assert_eq!(anchor.as_deref(), Some("ab1"));
    }

    #[test]
    fn memberless_group_resolves_to_append() {
        let stack = sample();
        let anchor = resolve(&stack, &Placement::BeforeGroup(GroupId::new("ghost")));
        assert_eq!(anchor, None);
    }

    #[test]
    fn unknown_layer_id_passes_through() {
        let stack = sample();
        let anchor = resolve(&stack, &Placement::BeforeLayer("ghost".into()));
        assert_eq!(anchor.as_deref(), Some("ghost"));
    }

    #[test]
    fn named_classifies_layers_then_groups() {
        let stack = sample();
        assert_eq!(
            Placement::named(&stack, "plain"),
            Placement::BeforeLayer("plain".into())
        );
        assert_eq!(
            Placement::named(&stack, "a"),
            Placement::BeforeGroup(GroupId::new("a"))
        );
    }
}
