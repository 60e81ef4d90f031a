//! Group operations shared by the flat and nested membership models.
//!
//! The two models differ only in how they tag layers on the way in;
//! everything else (anchor resolution, placement checks, the reduction
//! to host primitives) is identical and lives here.

use crate::{anchor, query, GroupId, GroupSet, Host, HostError, Layer, Placement, SmartString};

/// Failure of a group operation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    /// A single-layer add named a `before` layer outside the target
    /// group.
    #[error("'before' must reference a layer within the same group")]
    InvalidPlacement,
    /// A group move anchored on one of the group's own members.
    #[error("cannot move group '{0}' relative to its own member '{1}'")]
    AnchorInsideGroup(GroupId, SmartString),
    /// The host rejected a primitive call.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// How a membership model tags layers added to a group.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Tagging {
    /// The layer's tag becomes exactly the target group.
    Exact,
    /// The target group and all of its ancestors are unioned into the
    /// layer's existing tags.
    WithAncestors,
}

impl Tagging {
    fn apply(self, tags: &mut GroupSet, group: &GroupId) {
        match self {
            Self::Exact => {
                tags.clear();
                tags.insert(group.clone());
            }
            Self::WithAncestors => {
                for ancestor in group.ancestors() {
                    tags.insert(ancestor);
                }
            }
        }
    }
}

/// Inserts a new group of layers as one contiguous run.
///
/// The anchor is resolved once up front; every layer is then inserted
/// before that same anchor, in argument order. The per-layer placement
/// check of [`add_layer_to_group`] does not apply since none of the
/// group's layers exist yet.
pub(crate) fn add_group(
    host: &mut impl Host,
    group: &GroupId,
    layers: Vec<Layer>,
    placement: &Placement,
    tagging: Tagging,
) -> Result<(), GroupError> {
    if query::first_member_index(host, group).is_some() {
        log::warn!(
            "group '{}' already has members; the {} new layers will not join their run",
            group,
            layers.len()
        );
    }
    let before = anchor::resolve(host, placement);
    for mut layer in layers {
        tagging.apply(&mut layer.groups, group);
        host.insert_layer(layer, before.as_deref())?;
    }
    Ok(())
}

/// Inserts a single layer into a group.
///
/// A supplied `before` must name a layer that is itself a member of the
/// target group; this is checked before any host call so a violation
/// mutates nothing. When `before` is omitted the layer lands right
/// after the group's current last member, keeping the run contiguous.
/// A group with no members yet starts at the end of the sequence.
pub(crate) fn add_layer_to_group(
    host: &mut impl Host,
    group: &GroupId,
    mut layer: Layer,
    before: Option<&str>,
    tagging: Tagging,
) -> Result<(), GroupError> {
    let before: Option<SmartString> = match before {
        Some(before) => {
            let member = host
                .layer(before)
                .map_or(false, |anchor| anchor.groups.contains(group));
            if !member {
                return Err(GroupError::InvalidPlacement);
            }
            Some(before.into())
        }
        None => match query::last_member_index(host, group) {
            Some(last) => host
                .ordered_layers()
                .get(last + 1)
                .map(|next| next.id.clone()),
            None => None,
        },
    };
    tagging.apply(&mut layer.groups, group);
    host.insert_layer(layer, before.as_deref())?;
    Ok(())
}

/// Removes every layer of a group, in host order.
pub(crate) fn remove_group(host: &mut impl Host, group: &GroupId) -> Result<(), GroupError> {
    let ids: Vec<SmartString> = query::members(host, group)
        .into_iter()
        .map(|layer| layer.id.clone())
        .collect();
    log::trace!("removing {} layers of group '{}'", ids.len(), group);
    for id in ids {
        host.remove_layer(&id)?;
    }
    Ok(())
}

/// Moves every layer of a group to a single anchor, in host order,
/// preserving the group's internal order and leaving it contiguous.
///
/// The anchor and the member list are both computed before the first
/// move, so the moves themselves cannot shift them. An anchor that is
/// itself a member of the moving group would chase its own tail, so it
/// is rejected before any host call.
pub(crate) fn move_group(
    host: &mut impl Host,
    group: &GroupId,
    placement: &Placement,
) -> Result<(), GroupError> {
    let before = anchor::resolve(host, placement);
    if let Some(anchor_id) = &before {
        let inside = host
            .layer(anchor_id)
            .map_or(false, |anchor| anchor.groups.contains(group));
        if inside {
            return Err(GroupError::AnchorInsideGroup(group.clone(), anchor_id.clone()));
        }
    }
    let ids: Vec<SmartString> = query::members(host, group)
        .into_iter()
        .map(|layer| layer.id.clone())
        .collect();
    for id in ids {
        host.move_layer(&id, before.as_deref())?;
    }
    Ok(())
}
