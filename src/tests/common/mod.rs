pub mod mocks;

use crate::utils::{ KeyValueStorage, ThemeState, THEME_STORAGE_KEY };

pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decodes whatever is currently persisted under the theme key.
pub fn persisted<S: KeyValueStorage>(storage: &S) -> Option<ThemeState> {
    storage
        .get_item(THEME_STORAGE_KEY)
        .expect("storage read")
        .map(|raw| serde_json::from_str(&raw).expect("persisted theme is valid JSON"))
}
