use generational_arena::{Arena, Index};
use serde_json::{Map, Value};
use tracing::instrument;

/// Synthetic root label. Depth 0, never part of an id-path, never serialized.
pub const ROOT_LABEL: &str = "*";

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TopoNode {
    /// Level label, e.g. `"core id: 1"`. Unique among full siblings.
    pub label: String,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based prefix tree of topology labels.
///
/// Uses a generational arena for memory-safe node references. The root is
/// created eagerly; inserting an id-path that shares a prefix with an
/// existing path merges at the shared nodes. The tree is build-once: there is
/// no removal, so every stored index stays valid for the tree's lifetime.
#[derive(Debug)]
pub struct TopoTree {
    arena: Arena<TopoNode>,
    root: Index,
}

impl Default for TopoTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TopoTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TopoNode {
            label: ROOT_LABEL.to_string(),
            parent: None,
            children: Vec::new(),
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&TopoNode> {
        self.arena.get(idx)
    }

    /// Label of a node. Panics on a foreign index.
    pub fn label(&self, idx: Index) -> &str {
        &self.arena[idx].label
    }

    /// Children of a node, in insertion order. Panics on a foreign index.
    pub fn children(&self, idx: Index) -> &[Index] {
        &self.arena[idx].children
    }

    /// Insert one root-to-leaf label path, reusing shared prefixes.
    ///
    /// Idempotent: re-inserting a path leaves the tree unchanged.
    #[instrument(level = "trace", skip(self, path))]
    pub fn insert_path<S: AsRef<str>>(&mut self, path: &[S]) {
        let mut current = self.root;
        for label in path {
            let label = label.as_ref();
            current = match self.child_by_label(current, label) {
                Some(child) => child,
                None => self.insert_node(label, current),
            };
        }
    }

    fn child_by_label(&self, parent: Index, label: &str) -> Option<Index> {
        self.arena[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.arena[child].label == label)
    }

    fn insert_node(&mut self, label: &str, parent: Index) -> Index {
        let idx = self.arena.insert(TopoNode {
            label: label.to_string(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.arena[parent].children.push(idx);
        idx
    }

    /// Number of nodes excluding the synthetic root.
    pub fn node_count(&self) -> usize {
        self.arena.len() - 1
    }

    /// Number of leaves; the root of an empty tree does not count.
    pub fn leaf_count(&self) -> usize {
        self.arena
            .iter()
            .filter(|&(idx, node)| idx != self.root && node.children.is_empty())
            .count()
    }

    /// Number of levels below the root on the longest path.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, idx: Index) -> usize {
        self.arena[idx]
            .children
            .iter()
            .map(|&child| 1 + self.depth_below(child))
            .max()
            .unwrap_or(0)
    }

    /// Nested-map dump of the tree: each node becomes a key mapping to the
    /// object of its children, a leaf maps to `{}`. The synthetic root is the
    /// top-level object itself. Keys sort lexicographically at every depth.
    #[instrument(level = "debug", skip(self))]
    pub fn to_json(&self) -> Value {
        self.json_below(self.root)
    }

    fn json_below(&self, idx: Index) -> Value {
        let mut map = Map::new();
        for &child in &self.arena[idx].children {
            map.insert(self.arena[child].label.clone(), self.json_below(child));
        }
        Value::Object(map)
    }
}
