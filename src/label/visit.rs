//! Per-traversal visitation state and barrier installation.
//!
//! Responsibility nodes are installed pre-visited so that one
//! Responsibility's zone cannot flow through, and merge with, a sibling
//! Responsibility's zone. Visitation lives in a [`VisitSet`] scoped to a
//! single traversal phase; it is never stored on the node records.

use std::collections::HashSet;

use crate::ssm::Ssm;

/// Which nodes act as impermeable traversal barriers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarrierPolicy {
    /// Every Responsibility node. Roles get rlabels like any other node.
    #[default]
    Responsibilities,
    /// Responsibilities plus the single Role node — the historical policy
    /// from before Roles were themselves coded.
    WithRole,
}

/// Set of visited node ids for one traversal phase.
#[derive(Debug, Default)]
pub struct VisitSet {
    visited: HashSet<i64>,
}

impl VisitSet {
    /// Fresh state with the given barrier ids pre-visited.
    pub fn with_barriers(responsibilities: &[i64], role: Option<i64>, policy: BarrierPolicy) -> Self {
        let mut visited: HashSet<i64> = responsibilities.iter().copied().collect();
        if policy == BarrierPolicy::WithRole {
            if let Some(role_id) = role {
                visited.insert(role_id);
            }
        }
        VisitSet { visited }
    }

    /// Mark a node visited. Returns true when it was previously unvisited,
    /// i.e. the caller should enqueue it.
    pub fn mark(&mut self, id: i64) -> bool {
        self.visited.insert(id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.visited.contains(&id)
    }
}

/// Barrier configuration for one map, captured once per labeling run.
///
/// Backward and undirected phases must not inherit visitation state left by
/// a prior phase, so every phase calls [`Barriers::install`] for a fresh set.
#[derive(Debug)]
pub struct Barriers {
    responsibilities: Vec<i64>,
    role: Option<i64>,
    policy: BarrierPolicy,
}

impl Barriers {
    pub fn new(ssm: &Ssm, policy: BarrierPolicy) -> Self {
        Barriers {
            responsibilities: ssm.responsibility_ids(),
            role: ssm.role_id(),
            policy,
        }
    }

    /// A fresh visitation set with all barriers pre-visited.
    pub fn install(&self) -> VisitSet {
        VisitSet::with_barriers(&self.responsibilities, self.role, self.policy)
    }
}
