//! Imbalance location: descend from the root to the single wrong program.

use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::entities::Tower;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::weight::subtree_weight;

/// Outcome of the balance analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceReport {
    /// Every program's children carry equal subtree weights.
    Balanced,
    /// Changing `culprit`'s own weight to `corrected_weight` balances
    /// the tower.
    Corrected {
        culprit: String,
        corrected_weight: i64,
    },
}

/// Walk down from the root, at each level comparing the children's
/// subtree weights and following the odd one out, until a program whose
/// children all agree is reached. That program is the culprit; its
/// corrected own weight is derived from the sibling majority carried
/// down from the level above.
///
/// Any level where the odd one out is not unique (more than two
/// distinct weights, two equally sized groups, or several equally rare
/// holders) violates the single-culprit assumption and is reported as
/// [`DomainError::AmbiguousImbalance`] instead of guessed at.
#[instrument(level = "debug", skip(tower), fields(root = tower.root()))]
pub fn find_correction(tower: &Tower) -> DomainResult<BalanceReport> {
    descend(tower, tower.root(), None)
}

fn descend(tower: &Tower, name: &str, expected: Option<i64>) -> DomainResult<BalanceReport> {
    let node = tower.get(name)?;

    let child_weights: Vec<(&str, i64)> = node
        .children
        .iter()
        .map(|child| Ok((child.as_str(), subtree_weight(tower, child)?)))
        .collect::<DomainResult<_>>()?;

    // Group children by subtree weight, lightest group first.
    let mut groups: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
    for &(child, weight) in &child_weights {
        groups.entry(weight).or_default().push(child);
    }
    let groups: Vec<(i64, Vec<&str>)> = groups.into_iter().collect();

    match groups.as_slice() {
        // All children agree (or there is at most one): the imbalance,
        // if any, is this program's own weight.
        [] | [_] => match expected {
            None => Ok(BalanceReport::Balanced),
            Some(target) => {
                let carried = subtree_weight(tower, name)? - node.weight;
                debug!(culprit = name, target, carried, "descent terminated");
                Ok(BalanceReport::Corrected {
                    culprit: name.to_string(),
                    corrected_weight: target - carried,
                })
            }
        },
        [(weight_a, group_a), (weight_b, group_b)] => {
            let (majority, minority) = if group_a.len() > group_b.len() {
                (*weight_a, group_b)
            } else if group_b.len() > group_a.len() {
                (*weight_b, group_a)
            } else {
                // Two equally sized groups: no strict majority to trust.
                return Err(ambiguous(name, &child_weights));
            };
            match minority.as_slice() {
                [culprit] => {
                    debug!(parent = name, culprit, majority, "descending into outlier");
                    descend(tower, culprit, Some(majority))
                }
                // Several equally rare weight holders.
                _ => Err(ambiguous(name, &child_weights)),
            }
        }
        // Three or more distinct weights: more than one program is wrong.
        _ => Err(ambiguous(name, &child_weights)),
    }
}

fn ambiguous(node: &str, child_weights: &[(&str, i64)]) -> DomainError {
    DomainError::AmbiguousImbalance {
        node: node.to_string(),
        weights: child_weights.iter().map(|&(_, w)| w).sorted().collect(),
    }
}
