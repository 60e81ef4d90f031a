//! The contract a rendering host must expose.

use crate::{Layer, SmartString};

/// Failure raised by a host primitive.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// An insert collided with an existing layer id.
    #[error("layer '{0}' already exists")]
    DuplicateLayer(SmartString),
    /// A remove, move, or insert referenced a missing layer id.
    #[error("no layer with id '{0}'")]
    UnknownLayer(SmartString),
}

/// Single-layer primitives of the rendering host.
///
/// The host owns the ordered layer sequence. This crate never caches a
/// copy of it; every query re-derives membership and position from
/// [`ordered_layers`](Host::ordered_layers). Multi-layer group
/// operations reduce to sequences of these calls and are not atomic: a
/// failing step aborts the remainder and leaves the sequence partially
/// updated.
pub trait Host {
    /// The full layer sequence, bottom to top.
    fn ordered_layers(&self) -> Vec<&Layer>;

    /// Looks up a single layer by id.
    fn layer(&self, id: &str) -> Option<&Layer>;

    /// Inserts a new layer immediately before `before`, or at the end
    /// of the sequence when `before` is `None`.
    fn insert_layer(&mut self, layer: Layer, before: Option<&str>) -> Result<(), HostError>;

    /// Removes and returns the named layer.
    fn remove_layer(&mut self, id: &str) -> Result<Layer, HostError>;

    /// Relocates an existing layer to immediately before `before`, or
    /// to the end of the sequence when `before` is `None`, preserving
    /// the relative order of all other layers. Moving a layer before
    /// itself is a no-op.
    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), HostError>;
}
