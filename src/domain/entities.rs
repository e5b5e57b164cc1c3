//! Domain entities: core data structures

use std::cell::OnceCell;
use std::collections::HashMap;

use crate::domain::error::DomainError;

/// One line of a tower description: a program, its own weight, and the
/// names of the programs standing directly on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub weight: i64,
    pub children: Vec<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, weight: i64, children: Vec<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            children,
        }
    }
}

/// Program in the resolved tower.
///
/// Children are referenced by name and resolved through the owning
/// [`Tower`], never via embedded pointers. The subtree weight cache is
/// written at most once (the tower is immutable after construction), so
/// a plain `OnceCell` keeps queries `&self` without locking.
#[derive(Debug)]
pub struct Node {
    pub name: String,
    pub weight: i64,
    pub children: Vec<String>,
    subtree_weight: OnceCell<i64>,
}

impl Node {
    pub fn new(name: impl Into<String>, weight: i64, children: Vec<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            children,
            subtree_weight: OnceCell::new(),
        }
    }

    /// Memoized total weight of this node plus everything above it.
    /// `None` until the aggregator has visited the node.
    pub fn cached_subtree_weight(&self) -> Option<i64> {
        self.subtree_weight.get().copied()
    }

    pub(crate) fn cache_subtree_weight(&self, total: i64) {
        // Setting twice is a no-op; the aggregator skips cached nodes.
        let _ = self.subtree_weight.set(total);
    }
}

impl From<Record> for Node {
    fn from(record: Record) -> Self {
        Node::new(record.name, record.weight, record.children)
    }
}

/// Resolved tower: sole owner of all nodes, keyed by name, plus the
/// derived root. Construct via [`TowerBuilder`](crate::domain::TowerBuilder),
/// which enforces the closed-reference and unique-root invariants.
#[derive(Debug)]
pub struct Tower {
    nodes: HashMap<String, Node>,
    root: String,
}

impl Tower {
    pub(crate) fn new(nodes: HashMap<String, Node>, root: String) -> Self {
        Self { nodes, root }
    }

    /// Name of the bottom program (the one no other program references).
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Lookup that treats an unknown name as a caller bug.
    pub fn get(&self, name: &str) -> Result<&Node, DomainError> {
        self.nodes
            .get(name)
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }
}
