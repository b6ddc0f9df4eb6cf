use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    // web-sys imports panic when called outside wasm (native test runs)
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    window()?.local_storage().ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Could not remove from localStorage".to_string())
}

/// Best-effort removal
pub fn clear_storage_keys(keys: &[&str]) {
    if get_local_storage().is_none() {
        return;
    }
    for key in keys {
        if let Err(e) = remove_from_storage(key) {
            log::warn!("⚠️ Could not clear '{}': {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_unavailable_off_wasm() {
        assert!(get_local_storage().is_none());
        assert!(remove_from_storage("session").is_err());
        clear_storage_keys(&["session", "profile"]);
    }
}
