//! Rule catalog: which material flows are legal for each building category,
//! and which restriction dimensions each flow supports.
//!
//! The catalog is a static table built once at startup from a hand-authored
//! sequence of category definitions. Rule ids are persistence keys — stored
//! restriction settings reference rules by (building, rule id) — so ids
//! within a category never move once shipped.

mod catalog;
mod plugin;
mod resolver;
mod types;

pub use plugin::RulesPlugin;
pub use resolver::effective_rules;
pub use types::{MatchDirection, ReasonRule, RuleCatalog, RuleId};
