mod document;
mod scroll;
pub mod storage;
pub mod theme_state;
pub mod theme_store;
mod use_theme;

pub use scroll::use_scrolled;
pub use storage::{ FileStorage, KeyValueStorage, MemoryStorage, PlatformStorage };
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use theme_state::{ select, ThemeSource, ThemeState };
pub use theme_store::{ get_initial, toggle, ThemeStore, THEME_STORAGE_KEY };
pub use use_theme::{ use_theme, use_theme_provider, SiteThemeStore, ThemeHandle };
