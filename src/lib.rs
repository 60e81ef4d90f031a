//! Named, nested layer groups over a flat, ordered layer stack.
//!
//! Rendering hosts keep their layers in a single ordered sequence and
//! expose only single-layer operations: insert, remove, move, fetch.
//! This crate maintains the illusion of named groups on top of that
//! sequence. A group is nothing more than a membership tag carried by
//! each of its layers, and every group operation reduces to a series of
//! single-layer calls against the [`Host`] contract.
//!
//! Two membership models are provided:
//! - [`flat`]: a layer belongs to at most one group.
//! - [`nested`]: group ids form a `/`-separated hierarchy, and a layer
//!   belongs to its own group plus every ancestor group along its path.

mod anchor;
mod host;
mod id;
mod layer;
mod ops;
mod query;
mod stack;

pub mod flat;
pub mod nested;

pub use anchor::Placement;
pub use host::{Host, HostError};
pub use id::{GroupId, GROUP_PREFIX, GROUP_SEPARATOR};
pub use layer::{GroupSet, Layer};
pub use ops::GroupError;
pub use stack::LayerStack;

use smartstring::LazyCompact;

pub type SmartString = smartstring::SmartString<LazyCompact>;
