use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{Board, Game, LayoutError, Orientation, PieceKind, Reserve, STANDARD_LAYOUT};

/// How to set up a game, as read from a JSON file.
///
/// ```
/// # use dobutsu::{GameConfig, Orientation, PieceKind};
/// let config: GameConfig = serde_json::from_str(r#"{
///     "layout": ["l..", "...", "..L"],
///     "reserves": { "backward": { "chicken": 2 } }
/// }"#).unwrap();
/// let game = config.build().unwrap();
/// assert_eq!(game.turn(), Orientation::Forward);
/// assert_eq!(game.player(Orientation::Backward).reserve().count(PieceKind::Chicken), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// The board, top row first, in the format of [`Board::from_rows()`].
    #[serde(default = "standard_layout")]
    pub layout: Vec<String>,
    #[serde(default = "forward")]
    pub first_to_move: Orientation,
    #[serde(default)]
    pub reserves: ReservesConfig,
}

/// Pieces each player holds at the start of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservesConfig {
    #[serde(default)]
    pub forward: BTreeMap<PieceKind, u32>,
    #[serde(default)]
    pub backward: BTreeMap<PieceKind, u32>,
}

fn standard_layout() -> Vec<String> {
    STANDARD_LAYOUT.iter().map(|&row| String::from(row)).collect()
}

fn forward() -> Orientation {
    Orientation::Forward
}

fn reserve_from_counts(counts: &BTreeMap<PieceKind, u32>) -> Reserve {
    let mut reserve = Reserve::new();
    for (&kind, &count) in counts {
        reserve.add_many(kind, count);
    }
    reserve
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: standard_layout(),
            first_to_move: Orientation::Forward,
            reserves: ReservesConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read game config '{}'", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid game config '{}'", path.display()))?;
        Ok(config)
    }

    /// Sets up a fresh game.
    pub fn build(&self) -> Result<Game, LayoutError> {
        let board = Board::from_rows(&self.layout)?;
        Ok(Game::with_reserves(
            board,
            reserve_from_counts(&self.reserves.forward),
            reserve_from_counts(&self.reserves.backward),
            self.first_to_move,
        ))
    }
}
