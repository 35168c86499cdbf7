use dioxus::prelude::*;

use crate::error::ThemeError;
use crate::utils::document::apply_root_theme;
use crate::utils::storage::PlatformStorage;
use crate::utils::theme_store::ThemeStore;

pub type SiteThemeStore = ThemeStore<PlatformStorage>;

/// What components hold: one query and one command on the shared store.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeHandle {
    store: Signal<SiteThemeStore>,
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.store.read().is_dark()
    }

    pub fn toggle(&mut self) {
        if let Err(e) = self.store.write().toggle() {
            log::warn!("Theme left unchanged: {}", e);
        }
    }
}

fn open_store() -> Result<SiteThemeStore, ThemeError> {
    let storage = PlatformStorage::open()?;
    let mut store = ThemeStore::load(storage)?;

    apply_root_theme(store.is_dark());
    store.subscribe(|state| apply_root_theme(state.is_dark));
    Ok(store)
}

/// Loads the theme once for the whole app and provides it to descendants.
///
/// The result is cached, so a failed load fails every render of the caller.
pub fn use_theme_provider() -> Result<ThemeHandle, ThemeError> {
    use_hook(|| -> Result<ThemeHandle, ThemeError> {
        let store = open_store()
            .map(Signal::new)
            .map_err(|e| {
                log::error!("Theme initialization failed: {}", e);
                e
            })?;
        provide_context(store);
        Ok(ThemeHandle { store })
    })
}

pub fn use_theme() -> ThemeHandle {
    ThemeHandle { store: use_context::<Signal<SiteThemeStore>>() }
}
