use serde::Serialize;

/// Commentary bucket for the batting side's win probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Commentary {
    Dominant,
    Strong,
    Even,
    NeedsMiracle,
    Bleak,
}

impl Commentary {
    /// Walk the ladder top-down. Comparisons are strict, so a probability
    /// sitting exactly on a threshold lands in the bucket below it.
    pub fn from_win_probability(win: f64) -> Self {
        if win > 0.8 {
            Commentary::Dominant
        } else if win > 0.6 {
            Commentary::Strong
        } else if win > 0.4 {
            Commentary::Even
        } else if win > 0.2 {
            Commentary::NeedsMiracle
        } else {
            Commentary::Bleak
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Commentary::Dominant => "🔥 Dominating performance! Almost a sure win!",
            Commentary::Strong => "🚀 In a strong position!",
            Commentary::Even => "😬 It's anybody's game!",
            Commentary::NeedsMiracle => "😓 Need a miracle now!",
            Commentary::Bleak => "💀 Things look bleak...",
        }
    }
}
