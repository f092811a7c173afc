use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No match in progress (status is Idle, Won, or Draw).
    NotPlaying,
    /// The acting side is not the current side.
    OutOfTurn,
    /// Coordinate outside the board.
    OutOfBounds { x: u8, y: u8 },
    /// Target cell already holds a stone.
    CellOccupied { x: u8, y: u8 },
    /// The acting side was not dealt that skill.
    SkillNotHeld,
    /// The skill is still cooling down.
    SkillOnCooldown { remaining: u8 },
    Other(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::NotPlaying => write!(f, "no match in progress"),
            DomainError::OutOfTurn => write!(f, "out of turn"),
            DomainError::OutOfBounds { x, y } => write!(f, "out of bounds: ({x}, {y})"),
            DomainError::CellOccupied { x, y } => write!(f, "cell occupied: ({x}, {y})"),
            DomainError::SkillNotHeld => write!(f, "skill not held"),
            DomainError::SkillOnCooldown { remaining } => {
                write!(f, "skill on cooldown: {remaining} turns left")
            }
            DomainError::Other(s) => write!(f, "domain error: {s}"),
        }
    }
}

impl Error for DomainError {}
