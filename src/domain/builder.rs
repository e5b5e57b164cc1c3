//! Tower builder: resolves flat records into a validated tower.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::entities::{Node, Record, Tower};
use crate::domain::error::StructuralError;

/// Constructs a [`Tower`] from parsed records, enforcing the structural
/// invariants: every referenced child exists, and exactly one program
/// is referenced by nobody (the root).
pub struct TowerBuilder;

impl Default for TowerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TowerBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a tower from records. Order-independent: children are bound
    /// by name lookup, so forward references between records are fine.
    #[instrument(level = "debug", skip(self, records), fields(records = records.len()))]
    pub fn build(&self, records: Vec<Record>) -> Result<Tower, StructuralError> {
        if records.is_empty() {
            return Err(StructuralError::EmptyInput);
        }

        let mut nodes: HashMap<String, Node> = HashMap::with_capacity(records.len());
        for record in records {
            let name = record.name.clone();
            if nodes.insert(name.clone(), Node::from(record)).is_some() {
                return Err(StructuralError::DuplicateRecord(name));
            }
        }

        // Closed reference set: every child name must have its own record,
        // and no name may be claimed by two parents (tree, not DAG).
        let mut referenced: HashSet<&str> = HashSet::new();
        for node in nodes.values() {
            for child in &node.children {
                if !nodes.contains_key(child) {
                    return Err(StructuralError::DanglingChild {
                        parent: node.name.clone(),
                        child: child.clone(),
                    });
                }
                if !referenced.insert(child) {
                    return Err(StructuralError::SharedChild {
                        child: child.clone(),
                    });
                }
            }
        }

        // Root candidates: names that no node references as a child.
        let roots: Vec<String> = nodes
            .keys()
            .filter(|name| !referenced.contains(name.as_str()))
            .cloned()
            .sorted()
            .collect();

        if roots.len() > 1 {
            return Err(StructuralError::MultipleRoots(roots));
        }
        let root = match roots.into_iter().next() {
            Some(root) => root,
            None => return Err(StructuralError::NoRoot),
        };

        // Every program must hang off the root. A disconnected cycle
        // (say b -> c -> b beside a standalone root) survives the checks
        // above: its members are each referenced exactly once and the
        // root is still unique, but traversal over it would never
        // terminate.
        let mut reachable: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![root.as_str()];
        while let Some(current) = stack.pop() {
            if !reachable.insert(current) {
                continue;
            }
            if let Some(node) = nodes.get(current) {
                for child in &node.children {
                    stack.push(child.as_str());
                }
            }
        }
        if reachable.len() < nodes.len() {
            let unreachable: Vec<String> = nodes
                .keys()
                .filter(|name| !reachable.contains(name.as_str()))
                .cloned()
                .sorted()
                .collect();
            return Err(StructuralError::UnreachablePrograms(unreachable));
        }
        debug!(root = %root, nodes = nodes.len(), "tower built");

        Ok(Tower::new(nodes, root))
    }
}
