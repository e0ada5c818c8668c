//! Identity persistence in browser local storage

/// Local storage key holding the logged-in email
pub const IDENTITY_KEY: &str = "userEmail";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored email, if any. Blank values count as logged out.
pub fn load_identity() -> Option<String> {
    local_storage()?
        .get_item(IDENTITY_KEY)
        .ok()
        .flatten()
        .filter(|email| !email.trim().is_empty())
}

pub fn save_identity(email: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(IDENTITY_KEY, email);
    }
}

pub fn clear_identity() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(IDENTITY_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_identity_roundtrip() {
        clear_identity();
        assert_eq!(load_identity(), None);

        save_identity("a@b.com");
        assert_eq!(load_identity(), Some("a@b.com".to_string()));

        save_identity("   ");
        assert_eq!(load_identity(), None);

        clear_identity();
        assert_eq!(load_identity(), None);
    }
}
