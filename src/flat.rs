//! The flat membership model: a layer belongs to at most one group.

use crate::ops::{self, Tagging};
use crate::{GroupError, GroupId, Host, Layer, Placement};

pub use crate::query::{group_first_layer_id, group_last_layer_id, layers_in_group};

/// Adds a new group of layers to the host as one contiguous run.
///
/// Each layer is tagged with the normalized group id and inserted at
/// the resolved placement, in argument order.
pub fn add_group(
    host: &mut impl Host,
    group: &str,
    layers: Vec<Layer>,
    placement: Placement,
) -> Result<(), GroupError> {
    ops::add_group(host, &GroupId::new(group), layers, &placement, Tagging::Exact)
}

/// Adds a single layer to a group.
///
/// A supplied `before` must name a layer within the same group; when it
/// is omitted the layer is appended right after the group's current
/// last member.
pub fn add_layer_to_group(
    host: &mut impl Host,
    group: &str,
    layer: Layer,
    before: Option<&str>,
) -> Result<(), GroupError> {
    ops::add_layer_to_group(host, &GroupId::new(group), layer, before, Tagging::Exact)
}

/// Removes a group and all of its layers from the host.
pub fn remove_group(host: &mut impl Host, group: &str) -> Result<(), GroupError> {
    ops::remove_group(host, &GroupId::new(group))
}

/// Moves a whole group to the resolved placement, preserving the
/// group's internal layer order.
pub fn move_group(
    host: &mut impl Host,
    group: &str,
    placement: Placement,
) -> Result<(), GroupError> {
    ops::move_group(host, &GroupId::new(group), &placement)
}

/// The group a layer belongs to, if any. `None` for unknown layers.
pub fn layer_group_id(host: &impl Host, layer_id: &str) -> Option<GroupId> {
    host.layer(layer_id)
        .and_then(|layer| layer.groups.first().cloned())
}
