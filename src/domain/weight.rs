//! Weight aggregation: memoized subtree totals.

use tracing::{instrument, trace};

use crate::domain::entities::Tower;
use crate::domain::error::DomainResult;

/// Total weight of the subtree rooted at `name`: the program's own
/// weight plus the subtree weights of everything standing on it.
///
/// Results are memoized on the nodes, so repeated queries over an
/// already-aggregated subtree cost a single lookup. The walk uses an
/// explicit post-order work stack rather than native recursion, so a
/// degenerate chain-shaped tower cannot exhaust the call stack.
#[instrument(level = "trace", skip(tower))]
pub fn subtree_weight(tower: &Tower, name: &str) -> DomainResult<i64> {
    let start = tower.get(name)?;
    if let Some(total) = start.cached_subtree_weight() {
        return Ok(total);
    }

    // Two-phase stack: the first pop schedules the children, the second
    // pop folds their cached totals into the parent.
    let mut stack: Vec<(&str, bool)> = vec![(start.name.as_str(), false)];
    while let Some((current, children_done)) = stack.pop() {
        let node = tower.get(current)?;
        if node.cached_subtree_weight().is_some() {
            continue;
        }
        if children_done {
            let mut total = node.weight;
            for child in &node.children {
                total += tower
                    .get(child)?
                    .cached_subtree_weight()
                    .expect("post-order: children are aggregated before their parent");
            }
            node.cache_subtree_weight(total);
            trace!(program = current, total, "subtree weight cached");
        } else {
            stack.push((current, true));
            for child in node.children.iter().rev() {
                stack.push((child.as_str(), false));
            }
        }
    }

    Ok(start
        .cached_subtree_weight()
        .expect("start node is aggregated by the walk above"))
}
