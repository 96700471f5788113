use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the bearer token under `key`
pub fn save_token(key: &str, token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, token).is_err() {
            log::warn!("failed to persist token under {}", key);
        }
    }
}

/// Stored token, empty values count as absent
pub fn get_token(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

pub fn clear_token(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
