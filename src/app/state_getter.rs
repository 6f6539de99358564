//! エンジンのスナップショットや統計を JSON 文字列にして JS に返すところ。

use log::{debug, error};
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::engine::GameSnapshot;
use crate::protocol::{ChangeData, GameStateData};
use crate::systems::stats_system::StatsSnapshot;

/// 何かを JSON 文字列にする。失敗したらログに出して、エラーを JS に返す。
fn to_json<T: Serialize>(what: &str, value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        let error_msg = format!("Failed to serialize {}: {}", what, e);
        error!("{}", error_msg);
        error_msg
    })
}

/// 盤面を JSON 文字列にする。
pub fn game_state_json(snapshot: &GameSnapshot) -> Result<String, String> {
    let data = GameStateData::from(snapshot);
    let json = to_json("game state", &data)?;
    debug!("Serialized game state ({} bytes).", json.len());
    Ok(json)
}

/// `onChange` のリスナーに渡す JSON。盤面と、その時点の統計と undo / redo の可否。
pub fn change_json(snapshot: &GameSnapshot, stats: StatsSnapshot, can_undo: bool, can_redo: bool) -> Result<String, String> {
    let data = ChangeData { state: GameStateData::from(snapshot), stats, can_undo, can_redo };
    to_json("change event", &data)
}

/// 盤面を JSON にして `JsValue` で返す (GameApp::get_state_json の中身)。
pub fn get_game_state_json(snapshot: &GameSnapshot) -> Result<JsValue, JsValue> {
    game_state_json(snapshot)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&e))
}

/// 統計を JSON にして `JsValue` で返す。
pub fn get_stats_json(stats: &StatsSnapshot) -> Result<JsValue, JsValue> {
    to_json("stats", stats)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&e))
}
