//! Skill kinds, catalog metadata, and per-match skill instances.

use serde::{Deserialize, Serialize};

/// The six skill kinds, in fixed catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    Undo,
    Swap,
    Boom,
    DoubleMove,
    Freeze,
    Randomize,
}

impl SkillKind {
    pub const ALL: [SkillKind; 6] = [
        SkillKind::Undo,
        SkillKind::Swap,
        SkillKind::Boom,
        SkillKind::DoubleMove,
        SkillKind::Freeze,
        SkillKind::Randomize,
    ];

    /// Stable string id, used by presentation layers.
    pub fn id(self) -> &'static str {
        match self {
            SkillKind::Undo => "skill-undo",
            SkillKind::Swap => "skill-swap",
            SkillKind::Boom => "skill-boom",
            SkillKind::DoubleMove => "skill-double",
            SkillKind::Freeze => "skill-freeze",
            SkillKind::Randomize => "skill-random",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SkillKind::Undo => "悔棋大法",
            SkillKind::Swap => "乾坤挪移",
            SkillKind::Boom => "局部核平",
            SkillKind::DoubleMove => "左右互搏",
            SkillKind::Freeze => "葵花点穴",
            SkillKind::Randomize => "听天由命",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SkillKind::Undo => "时光倒流！撤回上一步棋。",
            SkillKind::Swap => "随机将对手的一颗棋子变成你的！",
            SkillKind::Boom => "随机炸掉棋盘上 3x3 区域内的所有棋子。",
            SkillKind::DoubleMove => "本回合可以连续下两步棋！",
            SkillKind::Freeze => "对手下回合无法行动（被跳过）。",
            SkillKind::Randomize => "棋盘上随机一个空位会出现你的棋子。",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillKind::Undo => "↩️",
            SkillKind::Swap => "🔄",
            SkillKind::Boom => "💣",
            SkillKind::DoubleMove => "⚡",
            SkillKind::Freeze => "❄️",
            SkillKind::Randomize => "🎲",
        }
    }

    /// Presentation color class, carried through the snapshot untouched.
    pub fn color(self) -> &'static str {
        match self {
            SkillKind::Undo => "bg-blue-500",
            SkillKind::Swap => "bg-purple-500",
            SkillKind::Boom => "bg-red-500",
            SkillKind::DoubleMove => "bg-yellow-500",
            SkillKind::Freeze => "bg-cyan-500",
            SkillKind::Randomize => "bg-green-500",
        }
    }

    /// Turns the skill stays unavailable after an activation.
    pub fn max_cooldown(self) -> u8 {
        match self {
            SkillKind::Undo => 5,
            SkillKind::Swap => 8,
            SkillKind::Boom => 10,
            SkillKind::DoubleMove => 7,
            SkillKind::Freeze => 9,
            SkillKind::Randomize => 4,
        }
    }
}

/// A dealt skill with its remaining cooldown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub kind: SkillKind,
    /// Turns until ready again; 0 means ready.
    pub cooldown: u8,
}

impl Skill {
    /// Fresh instance, ready to use.
    pub fn new(kind: SkillKind) -> Self {
        Self { kind, cooldown: 0 }
    }

    pub fn ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Pay the activation cost: cooldown back to its maximum.
    pub fn consume(&mut self) {
        self.cooldown = self.kind.max_cooldown();
    }

    /// End-of-turn countdown, floored at 0.
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}
