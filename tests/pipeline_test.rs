//! End-to-end tests: parse -> build -> analyze -> render

use towerlint::cli::output::to_termtree;
use towerlint::domain::{find_correction, BalanceReport, Tower, TowerBuilder};
use towerlint::parser::RecordParser;
use towerlint::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

const EXAMPLE: &str = "\
pbga (66)
xhth (57)
ebii (61)
havc (66)
ktlj (57)
fwft (72) -> ktlj, cntj, xhth
qoyq (66)
padx (45) -> pbga, havc, qoyq
tknk (41) -> ugml, padx, fwft
jptl (61)
ugml (68) -> gyxo, ebii, jptl
gyxo (61)
cntj (57)
";

fn example_tower() -> Tower {
    let records = RecordParser::new().parse(EXAMPLE).unwrap();
    TowerBuilder::new().build(records).unwrap()
}

#[test]
fn given_example_description_when_analyzing_then_root_and_fix_are_reported() {
    let tower = example_tower();

    assert_eq!(tower.root(), "tknk");
    assert_eq!(
        find_correction(&tower).unwrap(),
        BalanceReport::Corrected {
            culprit: "ugml".to_string(),
            corrected_weight: 60,
        }
    );
}

#[test]
fn given_example_tower_when_rendering_then_every_program_appears() {
    let tower = example_tower();

    let rendered = to_termtree(&tower, tower.root(), false).unwrap().to_string();

    for node in tower.iter() {
        assert!(
            rendered.contains(&format!("{} ({})", node.name, node.weight)),
            "missing {} in rendering:\n{}",
            node.name,
            rendered
        );
    }
    // Root is the first line.
    assert!(rendered.starts_with("tknk (41)"));
}

#[test]
fn given_deep_chain_when_rendering_then_every_level_appears() {
    // Chain deep enough that naive recursion over children would be at
    // risk; the renderer walks with an explicit stack like the
    // aggregator does.
    let depth = 2_000;
    let mut records = Vec::with_capacity(depth);
    for i in 0..depth {
        let children = if i + 1 < depth {
            vec![format!("p{}", i + 1)]
        } else {
            vec![]
        };
        records.push(towerlint::domain::Record::new(format!("p{}", i), 1, children));
    }
    let tower = TowerBuilder::new().build(records).unwrap();

    let rendered = to_termtree(&tower, tower.root(), false).unwrap().to_string();

    assert!(rendered.starts_with("p0 (1)"));
    assert_eq!(rendered.lines().count(), depth);
    assert!(rendered.contains(&format!("p{} (1)", depth - 1)));
}

#[test]
fn given_weight_annotations_when_rendering_then_subtree_totals_appear() {
    let tower = example_tower();

    let rendered = to_termtree(&tower, tower.root(), true).unwrap().to_string();

    assert!(rendered.contains("tknk (41) [778]"));
    assert!(rendered.contains("ugml (68) [251]"));
    assert!(rendered.contains("padx (45) [243]"));
    assert!(rendered.contains("gyxo (61) [61]"));
}
