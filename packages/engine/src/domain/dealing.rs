//! Deterministic skill dealing.

use crate::domain::rng::MixRng;
use crate::domain::skills::{Skill, SkillKind};

/// Skills dealt to one side at game start.
pub const SKILLS_PER_SIDE: usize = 3;

/// Deal one side's skills: 3 kinds drawn uniformly without replacement from
/// the catalog, each with cooldown 0.
///
/// Fisher-Yates over a catalog copy with the deterministic generator, then
/// the first three. Same seed, same deal.
pub fn deal_skills(seed: u64) -> Vec<Skill> {
    let mut kinds = SkillKind::ALL;
    shuffle_with_seed(&mut kinds, seed);
    kinds
        .into_iter()
        .take(SKILLS_PER_SIDE)
        .map(Skill::new)
        .collect()
}

fn shuffle_with_seed(kinds: &mut [SkillKind], seed: u64) {
    let mut rng = MixRng::new(seed);
    for i in (1..kinds.len()).rev() {
        let j = rng.next_range(i + 1);
        kinds.swap(i, j);
    }
}
