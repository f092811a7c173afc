//! Session event log entries: system notices and narrator lines.
//!
//! Events are append-only per game; observers poll with a cursor and
//! render [`SessionEvent::message`] (or their own view of the payload).

use serde::{Deserialize, Serialize};

use crate::domain::{Point, Side, SkillKind};

/// Display label of a side in log lines. Black is the human seat.
pub fn actor_label(side: Side) -> &'static str {
    match side {
        Side::Black => "玩家",
        Side::White => "AI",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Narrator line from the commentary boundary.
    Commentary { text: String },
    /// Free-form system notice.
    Notice { text: String },
    /// A skill was activated and its effect applied.
    SkillActivated { side: Side, kind: SkillKind },
    /// A skill was consumed without producing an effect.
    SkillFizzled { side: Side, kind: SkillKind },
    /// Undo removed these placements.
    UndoApplied { side: Side, removed: Vec<Point> },
    /// Undo was consumed with nothing to remove.
    UndoRefused { side: Side },
    /// The side keeps the turn for one extra placement.
    DoubleMoveArmed { side: Side },
    /// A frozen side just lost its turn.
    TurnSkipped { side: Side },
}

impl SessionEvent {
    /// Observer-facing log line.
    pub fn message(&self) -> String {
        match self {
            SessionEvent::Commentary { text } | SessionEvent::Notice { text } => text.clone(),
            SessionEvent::SkillActivated { side, kind } => {
                format!(
                    "⚡ {} 发动了技能：{}！",
                    actor_label(*side),
                    kind.display_name()
                )
            }
            SessionEvent::SkillFizzled { .. } => "💨 技能没有生效。".to_string(),
            SessionEvent::UndoApplied { .. } => "🕰️ 时光倒流成功！".to_string(),
            SessionEvent::UndoRefused { .. } => "❌ 无法悔棋：历史记录不足。".to_string(),
            SessionEvent::DoubleMoveArmed { .. } => "🚀 获得额外行动机会！".to_string(),
            SessionEvent::TurnSkipped { side } => {
                format!("🚫 {} 被冻结，跳过回合！", actor_label(*side))
            }
        }
    }
}
