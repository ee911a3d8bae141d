use crate::entities::PlayerSlot;

/// Notable things that happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Fired { by: PlayerSlot },
    Hit {
        target: PlayerSlot,
        by: PlayerSlot,
        health: u8,
    },
    Eliminated { target: PlayerSlot, by: PlayerSlot },
    MatchWon { winner: PlayerSlot },
    MatchReset,
}
