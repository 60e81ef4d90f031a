//! The nested membership model: group ids form a `/`-separated
//! hierarchy, and a layer belongs to its own group plus every ancestor
//! group along the path.
//!
//! Because layers carry the full ancestor chain, querying a parent
//! group sees every descendant layer, and anchoring on a layer deep in
//! a sub-group resolves to the outermost enclosing group so that no
//! level of the hierarchy is ever split.

use crate::ops::{self, Tagging};
use crate::{GroupError, GroupId, GroupSet, Host, Layer, Placement};

pub use crate::query::{group_first_layer_id, group_last_layer_id, layers_in_group};

/// Adds a new group of layers to the host as one contiguous run.
///
/// Each layer is tagged with the normalized group id and all of its
/// ancestors, then inserted at the resolved placement in argument
/// order. Sub-groups are addressed by path: `"ui/labels"` (or
/// [`GroupId::from_segments`]).
pub fn add_group(
    host: &mut impl Host,
    group: &str,
    layers: Vec<Layer>,
    placement: Placement,
) -> Result<(), GroupError> {
    ops::add_group(
        host,
        &GroupId::new(group),
        layers,
        &placement,
        Tagging::WithAncestors,
    )
}

/// Adds a single layer to a group, tagging it with the group and all
/// of its ancestors unioned into any tags it already carries.
///
/// A supplied `before` must name a layer whose membership includes the
/// target group; when it is omitted the layer is appended right after
/// the group's current last member.
pub fn add_layer_to_group(
    host: &mut impl Host,
    group: &str,
    layer: Layer,
    before: Option<&str>,
) -> Result<(), GroupError> {
    ops::add_layer_to_group(
        host,
        &GroupId::new(group),
        layer,
        before,
        Tagging::WithAncestors,
    )
}

/// Removes a group and all of its layers from the host, descendant
/// sub-group layers included.
pub fn remove_group(host: &mut impl Host, group: &str) -> Result<(), GroupError> {
    ops::remove_group(host, &GroupId::new(group))
}

/// Moves a whole group (descendant sub-group layers included) to the
/// resolved placement, preserving internal layer order.
pub fn move_group(
    host: &mut impl Host,
    group: &str,
    placement: Placement,
) -> Result<(), GroupError> {
    ops::move_group(host, &GroupId::new(group), &placement)
}

/// Every group a layer belongs to, ancestors included. Empty when the
/// layer is unknown or untagged.
pub fn layer_group_ids(host: &impl Host, layer_id: &str) -> GroupSet {
    host.layer(layer_id)
        .map(|layer| layer.groups.clone())
        .unwrap_or_default()
}
