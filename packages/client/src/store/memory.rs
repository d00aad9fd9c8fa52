//! In-process configuration store
//!
//! [`MemoryStore`] implements the full [`ConfigStore`] contract over an
//! arena of nodes. Children keep insertion order, sibling names may
//! repeat, and key names are unique per node (a repeated `set_key`
//! overwrites in place, preserving the key's iteration position).

use std::collections::HashMap;

use serde_json::Value;

use crate::store::traits::{ConfigStore, NodeHandle, StoreError, StoreResult};

#[derive(Debug, Clone, Default)]
struct NodeData {
    children: Vec<usize>,
    names: Vec<String>,
    keys: Vec<(String, String)>,
}

/// Cursor over the children of one node
#[derive(Debug, Clone)]
pub struct MemoryChildCursor {
    node: usize,
    pos: usize,
}

/// Cursor over the key/value pairs of one node
#[derive(Debug, Clone)]
pub struct MemoryKeyCursor {
    node: usize,
    pos: usize,
}

/// In-memory hierarchical store with ordered children
///
/// Intended for tests, demos and embedders that assemble configuration
/// trees in process; [`MemoryStore::from_json`] loads one from a JSON
/// document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    nodes: Vec<NodeData>,
    find_scopes: HashMap<usize, usize>,
}

impl MemoryStore {
    /// Create a store holding only an empty root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::default()],
            find_scopes: HashMap::new(),
        }
    }

    /// Handle of the root node, without borrowing the store mutably
    #[inline]
    #[must_use]
    pub fn root_handle(&self) -> NodeHandle {
        NodeHandle::from_raw(0)
    }

    /// Append a child named `name` under `parent`, returning its handle
    ///
    /// Sibling names may repeat; children iterate in insertion order.
    pub fn add_child(&mut self, parent: NodeHandle, name: &str) -> StoreResult<NodeHandle> {
        let parent_idx = self.index(parent)?;
        let child_idx = self.nodes.len();
        self.nodes.push(NodeData::default());
        let parent_data = &mut self.nodes[parent_idx];
        parent_data.children.push(child_idx);
        parent_data.names.push(name.to_string());
        Ok(NodeHandle::from_raw(child_idx as u64))
    }

    /// Set key `key` to `value` on `node`
    ///
    /// Key names are unique per node; setting an existing key replaces
    /// its value in place.
    pub fn set_key(&mut self, node: NodeHandle, key: &str, value: &str) -> StoreResult<()> {
        let idx = self.index(node)?;
        let keys = &mut self.nodes[idx].keys;
        match keys.iter_mut().find(|(name, _)| name == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => keys.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    /// Build a store from a JSON document
    ///
    /// Mapping: a JSON object becomes a node; an object-valued entry
    /// becomes a child of that name; an array-valued entry becomes one
    /// same-named child per element (scalar elements are stored under a
    /// `value` key on their child); a scalar entry becomes a key, with
    /// numbers and booleans rendered to their literal text. Nulls and
    /// non-object top-level documents contribute nothing.
    #[must_use]
    pub fn from_json(doc: &Value) -> Self {
        let mut store = Self::new();
        if let Value::Object(map) = doc {
            store.populate(0, map);
        }
        store
    }

    fn populate(&mut self, node_idx: usize, map: &serde_json::Map<String, Value>) {
        for (name, value) in map {
            match value {
                Value::Object(child_map) => {
                    let child_idx = self.push_child(node_idx, name);
                    self.populate(child_idx, child_map);
                }
                Value::Array(items) => {
                    for item in items {
                        let child_idx = self.push_child(node_idx, name);
                        match item {
                            Value::Object(child_map) => self.populate(child_idx, child_map),
                            other => {
                                if let Some(text) = scalar_text(other) {
                                    self.nodes[child_idx].keys.push(("value".to_string(), text));
                                }
                            }
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        self.nodes[node_idx].keys.push((name.clone(), text));
                    }
                }
            }
        }
    }

    fn push_child(&mut self, parent_idx: usize, name: &str) -> usize {
        let child_idx = self.nodes.len();
        self.nodes.push(NodeData::default());
        self.nodes[parent_idx].children.push(child_idx);
        self.nodes[parent_idx].names.push(name.to_string());
        child_idx
    }

    fn index(&self, handle: NodeHandle) -> StoreResult<usize> {
        let idx = handle.raw() as usize;
        if idx < self.nodes.len() {
            Ok(idx)
        } else {
            Err(StoreError::InvalidHandle(handle))
        }
    }
}

/// Literal text of a scalar JSON value; `None` for null and containers
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl ConfigStore for MemoryStore {
    type ChildCursor = MemoryChildCursor;
    type KeyCursor = MemoryKeyCursor;

    fn root(&self) -> NodeHandle {
        self.root_handle()
    }

    fn find_start(&mut self, node: NodeHandle) -> StoreResult<()> {
        let idx = self.index(node)?;
        self.find_scopes.insert(idx, 0);
        Ok(())
    }

    fn find_next(&mut self, node: NodeHandle, name: &str) -> StoreResult<Option<NodeHandle>> {
        let idx = self.index(node)?;
        let start = self.find_scopes.get(&idx).copied().unwrap_or(0);
        let data = &self.nodes[idx];
        for pos in start..data.children.len() {
            if data.names[pos] == name {
                let found = NodeHandle::from_raw(data.children[pos] as u64);
                self.find_scopes.insert(idx, pos + 1);
                return Ok(Some(found));
            }
        }
        self.find_scopes.insert(idx, data.children.len());
        Ok(None)
    }

    fn child_iter_start(&mut self, node: NodeHandle) -> StoreResult<MemoryChildCursor> {
        let idx = self.index(node)?;
        Ok(MemoryChildCursor { node: idx, pos: 0 })
    }

    fn child_iter_next(
        &mut self,
        cursor: &mut MemoryChildCursor,
    ) -> StoreResult<Option<(NodeHandle, String)>> {
        let data = self
            .nodes
            .get(cursor.node)
            .ok_or(StoreError::InvalidHandle(NodeHandle::from_raw(
                cursor.node as u64,
            )))?;
        match data.children.get(cursor.pos) {
            Some(&child_idx) => {
                let name = data.names[cursor.pos].clone();
                cursor.pos += 1;
                Ok(Some((NodeHandle::from_raw(child_idx as u64), name)))
            }
            None => Ok(None),
        }
    }

    fn key_get(&mut self, node: NodeHandle, key: &str) -> StoreResult<Option<String>> {
        let idx = self.index(node)?;
        Ok(self.nodes[idx]
            .keys
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone()))
    }

    fn key_iter_start(&mut self, node: NodeHandle) -> StoreResult<MemoryKeyCursor> {
        let idx = self.index(node)?;
        Ok(MemoryKeyCursor { node: idx, pos: 0 })
    }

    fn key_iter_next(
        &mut self,
        cursor: &mut MemoryKeyCursor,
    ) -> StoreResult<Option<(String, String)>> {
        let data = self
            .nodes
            .get(cursor.node)
            .ok_or(StoreError::InvalidHandle(NodeHandle::from_raw(
                cursor.node as u64,
            )))?;
        match data.keys.get(cursor.pos) {
            Some((key, value)) => {
                let pair = (key.clone(), value.clone());
                cursor.pos += 1;
                Ok(Some(pair))
            }
            None => Ok(None),
        }
    }
}
