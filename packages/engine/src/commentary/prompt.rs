//! Prompt construction for the remote commentator.

use super::MoveContext;
use crate::domain::Side;

/// Narrative role of a side. Black is the human seat, White the computer.
pub(crate) fn role(side: Side) -> &'static str {
    match side {
        Side::Black => "Player (Black)",
        Side::White => "AI (White)",
    }
}

pub(crate) fn remark_prompt(context: &MoveContext) -> String {
    let role = role(context.side);
    let situation = if context.win {
        format!("The game just ended. {role} won!")
    } else {
        format!(
            "{role} just played at coordinate ({}, {}).",
            context.at.x, context.at.y
        )
    };

    format!(
        "You are a hilarious, sarcastic, and slightly mean commentator for a game of \
         'Skill Gobang' (Five-in-a-row with super powers).\n\
         The game is inspired by Chinese comedy sketches (小品).\n\
         Speak in Chinese, but you can use some English slang.\n\
         Keep it short (max 1 sentence).\n\
         Be responsive to the board situation if possible, but prioritize being funny.\n\
         \n\
         Context: {situation}\n\
         Current Board State (Simplified representation): Board Area around move:\n\
         {excerpt}\n\
         If it's a win, roast the loser or praise the winner sarcastically.\n\
         If it's a normal move, comment on whether it was a smart move or a \
         \"stinky pawn\" (臭棋).",
        excerpt = context.excerpt,
    )
}

pub(crate) fn opening_prompt() -> String {
    "Generate a short, funny opening line for a comedy-style Gobang game.\n\
     Pretend you are a wise but eccentric master waiting for a challenger.\n\
     Chinese language."
        .to_string()
}
