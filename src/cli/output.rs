//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::{subtree_weight, DomainResult, Tower};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed result (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Convert a tower into a renderable [`termtree::Tree`], rooted at `name`.
///
/// Each label carries the program's own weight; with `with_weights` the
/// aggregated subtree weight is appended as well.
///
/// Assembled with an explicit post-order work stack, like the weight
/// aggregator, so chain-shaped towers of any depth can be rendered.
pub fn to_termtree(
    tower: &Tower,
    name: &str,
    with_weights: bool,
) -> DomainResult<termtree::Tree<String>> {
    let start = tower.get(name)?;

    // Two-phase stack: the first pop schedules the children, the second
    // pop collects their assembled subtrees from the top of `assembled`
    // (completion order is left to right, so the slice order matches).
    let mut stack: Vec<(&str, bool)> = vec![(start.name.as_str(), false)];
    let mut assembled: Vec<termtree::Tree<String>> = Vec::new();
    while let Some((current, children_done)) = stack.pop() {
        let node = tower.get(current)?;
        if children_done {
            let label = if with_weights {
                format!(
                    "{} ({}) [{}]",
                    node.name,
                    node.weight,
                    subtree_weight(tower, current)?
                )
            } else {
                format!("{} ({})", node.name, node.weight)
            };
            let leaves = assembled.split_off(assembled.len() - node.children.len());
            assembled.push(termtree::Tree::new(label).with_leaves(leaves));
        } else {
            stack.push((current, true));
            for child in node.children.iter().rev() {
                stack.push((child.as_str(), false));
            }
        }
    }

    Ok(assembled
        .pop()
        .expect("start node is assembled by the walk above"))
}
