use serde::{Deserialize, Serialize};
use web_sys::Storage;

use rotoku_core::GameState;

pub(crate) const GAME_RECORD_VERSION: u32 = 1;
pub(crate) const GAME_RECORD_KEY: &str = "rotoku.game.v1";

#[derive(Clone, Serialize, Deserialize)]
struct GameRecord {
    version: u32,
    game: GameState,
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub(crate) fn save_game(game: &GameState) {
    let Some(storage) = local_storage() else {
        return;
    };
    let record = GameRecord {
        version: GAME_RECORD_VERSION,
        game: game.clone(),
    };
    match serde_json::to_string(&record) {
        Ok(text) => {
            if storage.set_item(GAME_RECORD_KEY, &text).is_err() {
                gloo::console::warn!("failed to persist game state");
            }
        }
        Err(err) => {
            gloo::console::warn!("failed to encode game state:", err.to_string());
        }
    }
}

/// Restores the saved game, or `None` on a missing, corrupt, or
/// outdated record (the caller starts fresh).
pub(crate) fn load_game() -> Option<GameState> {
    let storage = local_storage()?;
    let text = storage.get_item(GAME_RECORD_KEY).ok()??;
    let record: GameRecord = serde_json::from_str(&text).ok()?;
    (record.version == GAME_RECORD_VERSION).then_some(record.game)
}
