//! Offline commentator used when no API key is configured.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::prelude::*;

use super::{Commentator, MoveContext};

/// Opening lines served without a remote model.
const GREETINGS: [&str; 3] = [
    "来吧，让你三招！(Come on, I'll give you a head start!)",
    "我看你骨骼惊奇，是块下棋的料。(You look like a chess prodigy.)",
    "准备好接受来自AI的降维打击了吗？(Ready for some dimensional strikes?)",
];

/// What the keyless remote path would say about a move.
const OFFLINE_REMARK: &str = "API Key missing. I can't speak!";

/// Commentator with a fixed greeting pool and a stock remark. Never fails,
/// never blocks on the network.
pub struct CannedCommentator {
    rng: Mutex<StdRng>,
}

impl CannedCommentator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for CannedCommentator {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl Commentator for CannedCommentator {
    async fn opening(&self) -> String {
        let pick = match self.rng.lock() {
            Ok(mut rng) => GREETINGS.choose(&mut *rng).copied(),
            Err(_) => None,
        };
        pick.unwrap_or(GREETINGS[0]).to_string()
    }

    async fn remark(&self, _context: &MoveContext) -> String {
        OFFLINE_REMARK.to_string()
    }
}
