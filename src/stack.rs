//! In-memory reference implementation of the [`Host`] contract.

use ahash::AHashMap;

use crate::{Host, HostError, Layer, SmartString};

/// An ordered layer stack backed by a position list and an id table.
///
/// This is the host used by the crate's own test suites, and doubles as
/// a minimal standalone layer store for embedders that do not bring
/// their own.
#[derive(Debug, Default)]
pub struct LayerStack {
    order: Vec<SmartString>,
    by_id: AHashMap<SmartString, Layer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of layers in the stack.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids of all layers, bottom to top.
    pub fn layer_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|id| id.as_str())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|other| other == id)
    }
}

impl Host for LayerStack {
    fn ordered_layers(&self) -> Vec<&Layer> {
        self.order.iter().filter_map(|id| self.by_id.get(id)).collect()
    }

    fn layer(&self, id: &str) -> Option<&Layer> {
        self.by_id.get(id)
    }

    fn insert_layer(&mut self, layer: Layer, before: Option<&str>) -> Result<(), HostError> {
        if self.by_id.contains_key(&layer.id) {
            return Err(HostError::DuplicateLayer(layer.id));
        }
        let at = match before {
            Some(before) => self
                .position(before)
                .ok_or_else(|| HostError::UnknownLayer(before.into()))?,
            None => self.order.len(),
        };
        self.order.insert(at, layer.id.clone());
        self.by_id.insert(layer.id.clone(), layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<Layer, HostError> {
        let layer = self
            .by_id
            .remove(id)
            .ok_or_else(|| HostError::UnknownLayer(id.into()))?;
        self.order.retain(|other| other != id);
        Ok(layer)
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), HostError> {
        let from = self
            .position(id)
            .ok_or_else(|| HostError::UnknownLayer(id.into()))?;
        if let Some(before) = before {
            if self.position(before).is_none() {
                return Err(HostError::UnknownLayer(before.into()));
            }
            if before == id {
                return Ok(());
            }
        }
        let moved = self.order.remove(from);
        let at = match before {
            // Recomputed after the removal so positions are current.
            Some(before) => self
                .position(before)
                .ok_or_else(|| HostError::UnknownLayer(before.into()))?,
            None => self.order.len(),
        };
        self.order.insert(at, moved);
        Ok(())
    }
}
