//! Membership queries over the live host sequence.
//!
//! No persistent index is kept anywhere. Every query is an independent
//! linear scan of [`Host::ordered_layers`], so results can never go
//! stale while mutations happen between calls.

use crate::{GroupId, Host, Layer, SmartString};

/// All layers whose membership includes `group`, in host order.
///
/// The group id may be given raw or normalized. Under the nested model
/// this includes the layers of every descendant group, since those
/// carry their ancestors' ids as well.
pub fn layers_in_group<'a, H: Host>(host: &'a H, group: &str) -> Vec<&'a Layer> {
    members(host, &GroupId::new(group))
}

/// Id of the first (bottom-most) layer of a group, if it has members.
pub fn group_first_layer_id(host: &impl Host, group: &str) -> Option<SmartString> {
    first_member_id(host, &GroupId::new(group))
}

/// Id of the last (top-most) layer of a group, if it has members.
pub fn group_last_layer_id(host: &impl Host, group: &str) -> Option<SmartString> {
    let group = GroupId::new(group);
    host.ordered_layers()
        .iter()
        .rev()
        .find(|layer| layer.groups.contains(&group))
        .map(|layer| layer.id.clone())
}

pub(crate) fn members<'a, H: Host>(host: &'a H, group: &GroupId) -> Vec<&'a Layer> {
    host.ordered_layers()
        .into_iter()
        .filter(|layer| layer.groups.contains(group))
        .collect()
}

pub(crate) fn first_member_id(host: &impl Host, group: &GroupId) -> Option<SmartString> {
    host.ordered_layers()
        .iter()
        .find(|layer| layer.groups.contains(group))
        .map(|layer| layer.id.clone())
}

pub(crate) fn first_member_index(host: &impl Host, group: &GroupId) -> Option<usize> {
    host.ordered_layers()
        .iter()
        .position(|layer| layer.groups.contains(group))
}

/// Backward scan from the top of the sequence.
pub(crate) fn last_member_index(host: &impl Host, group: &GroupId) -> Option<usize> {
    host.ordered_layers()
        .iter()
        .rposition(|layer| layer.groups.contains(group))
}
