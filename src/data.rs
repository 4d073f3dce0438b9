// src/data.rs
//
// Result shapes produced by one command. Everything here is built fresh per
// command and dropped once formatted; nothing is cached between runs.
//
// Maps are insertion-ordered so the output lists nodes and projects in page order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Expected yield of one resource at one node.
/// - `initial`: Σ chance × items-per-stack
/// - `stacks`:  Σ chance
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    pub initial: f64,
    pub stacks: f64,
}

impl DropEntry {
    pub fn add(&mut self, chance: f64, per_stack: i64) {
        self.initial += chance * per_stack as f64;
        self.stacks += chance;
    }

    /// Items per run when every dropped stack carries `bonus` extra items.
    pub fn with_bonus(&self, bonus: f64) -> f64 {
        self.initial + bonus * self.stacks
    }
}

/// Resource key → drops, for one node table.
pub type NodeDrops = IndexMap<String, DropEntry>;

/// Node name → drops.
pub type FarmingResult = IndexMap<String, NodeDrops>;

/// Material key → count, for one project.
pub type ProjectCost = IndexMap<String, i64>;

/// "Project N X" → cost.
pub type ProjectsResult = IndexMap<String, ProjectCost>;

/// What a command produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Blocks closed by Collapse All. Leaves the output untouched.
    Collapsed(usize),
    Farming(FarmingResult),
    Projects(ProjectsResult),
}

impl Outcome {
    /// Entries in the result (nodes or projects); 0 for Collapse All.
    pub fn len(&self) -> usize {
        match self {
            Outcome::Collapsed(_) => 0,
            Outcome::Farming(r) => r.len(),
            Outcome::Projects(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
