//! Metrics collection and output for arena match results.

use serde::Serialize;

use engine::domain::{Point, Side, SkillKind};

use crate::simulator::{MatchOutcome, Verdict};

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    /// Hex-encoded match seed, replayable with `--seed`.
    pub seed: String,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<MoveRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub black_policy: String,
    pub white_policy: String,
    pub skill_chance: f64,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub verdict: &'static str,
    pub plies: u32,
    pub black_skills_used: u32,
    pub white_skills_used: u32,
    pub duration_ms: f64,
}

/// One logged action in the detailed move list.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub ply: u32,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<SkillKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<Point>,
}

pub fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::BlackWin => "black",
        Verdict::WhiteWin => "white",
        Verdict::Draw => "draw",
    }
}

/// Build metrics from a finished match.
pub fn build_match_metrics(
    match_id: u32,
    match_seed: u64,
    policy_names: (&str, &str),
    total_matches: u32,
    skill_chance: f64,
    outcome: &MatchOutcome,
    duration_ms: f64,
    include_moves: bool,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let moves = if include_moves {
        outcome
            .moves
            .iter()
            .map(|m| MoveRecord {
                ply: m.ply,
                side: m.side,
                skill: m.skill,
                at: m.at,
            })
            .collect()
    } else {
        Vec::new()
    };

    MatchMetrics {
        match_id,
        seed: hex::encode(match_seed.to_be_bytes()),
        timestamp,
        config: MatchConfig {
            black_policy: policy_names.0.to_string(),
            white_policy: policy_names.1.to_string(),
            skill_chance,
            total_matches,
        },
        result: MatchResultMetrics {
            verdict: verdict_label(outcome.verdict),
            plies: outcome.plies,
            black_skills_used: outcome.skills_used[0],
            white_skills_used: outcome.skills_used[1],
            duration_ms,
        },
        moves,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: String,
    pub verdict: String,
    pub plies: u32,
    pub black_policy: String,
    pub white_policy: String,
    pub black_skills_used: u32,
    pub white_skills_used: u32,
    pub duration_ms: f64,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed.clone(),
            verdict: metrics.result.verdict.to_string(),
            plies: metrics.result.plies,
            black_policy: metrics.config.black_policy.clone(),
            white_policy: metrics.config.white_policy.clone(),
            black_skills_used: metrics.result.black_skills_used,
            white_skills_used: metrics.result.white_skills_used,
            duration_ms: metrics.result.duration_ms,
        }
    }
}
