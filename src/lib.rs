//! Tower balance analysis.
//!
//! Ingests a flat textual description of a weighted tower (one record
//! per line: program name, own weight, programs standing on it) and
//! answers two questions: which program is at the bottom, and what
//! single weight change would balance the whole structure.
//!
//! ```
//! use towerlint::domain::{find_correction, BalanceReport, TowerBuilder};
//! use towerlint::parser::RecordParser;
//!
//! let input = "\
//! tknk (41) -> ugml, padx, fwft
//! ugml (68) -> gyxo, ebii, jptl
//! padx (45) -> pbga, havc, qoyq
//! fwft (72) -> ktlj, cntj, xhth
//! pbga (66)\nhavc (66)\nqoyq (66)
//! ktlj (57)\ncntj (57)\nxhth (57)
//! gyxo (61)\nebii (61)\njptl (61)
//! ";
//!
//! let records = RecordParser::new().parse(input).unwrap();
//! let tower = TowerBuilder::new().build(records).unwrap();
//! assert_eq!(tower.root(), "tknk");
//! assert_eq!(
//!     find_correction(&tower).unwrap(),
//!     BalanceReport::Corrected { culprit: "ugml".to_string(), corrected_weight: 60 }
//! );
//! ```

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod util;

pub use domain::{
    find_correction, subtree_weight, BalanceReport, DomainError, DomainResult, Node, Record,
    StructuralError, Tower, TowerBuilder,
};
pub use parser::{ParseError, RecordParser};
