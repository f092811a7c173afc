//! How to register your policy
//!
//! 1) Implement `MovePolicy` for your type in its module.
//! 2) Add a new `PolicyFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed plus same board must give the same move.

use crate::ai::{HeuristicPolicy, MovePolicy, RandomPolicy};

/// Factory definition for constructing move policies.
pub struct PolicyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn MovePolicy + Send + Sync>,
}

static POLICY_FACTORIES: &[PolicyFactory] = &[
    PolicyFactory {
        name: RandomPolicy::NAME,
        version: RandomPolicy::VERSION,
        make: make_random_policy,
    },
    PolicyFactory {
        name: HeuristicPolicy::NAME,
        version: HeuristicPolicy::VERSION,
        make: make_heuristic_policy,
    },
];

/// Returns the statically registered policy factories.
pub fn registered_policies() -> &'static [PolicyFactory] {
    POLICY_FACTORIES
}

/// Finds a registered policy factory by its name.
pub fn by_name(name: &str) -> Option<&'static PolicyFactory> {
    registered_policies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_random_policy(seed: Option<u64>) -> Box<dyn MovePolicy + Send + Sync> {
    Box::new(RandomPolicy::new(seed))
}

fn make_heuristic_policy(seed: Option<u64>) -> Box<dyn MovePolicy + Send + Sync> {
    Box::new(HeuristicPolicy::new(seed))
}
