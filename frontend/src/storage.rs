use shared::StoredBallot;
use web_sys::{console, window, Storage};
use crate::config::CONFIG;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// The ballot remembered by this browser, if any can be read back.
pub fn load_ballot() -> Option<StoredBallot> {
    let raw = local_storage()?.get_item(CONFIG.storage_key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Best effort: a failed write is logged and otherwise ignored.
pub fn save_ballot(ballot: &StoredBallot) {
    let result = serde_json::to_string(ballot)
        .map_err(|e| e.to_string())
        .and_then(|raw| {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .set_item(CONFIG.storage_key, &raw)
                .map_err(|e| format!("{:?}", e))
        });

    if let Err(e) = result {
        console::warn_1(&format!("localStorage write failed: {}", e).into());
    }
}
