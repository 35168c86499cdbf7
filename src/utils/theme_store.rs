use std::fmt;

use crate::error::ThemeError;
use crate::utils::storage::KeyValueStorage;
use crate::utils::theme_state::{ select, ThemeState };

/// Fixed storage key of the persisted preference.
pub const THEME_STORAGE_KEY: &str = "dc_theme";

pub type Subscriber = Box<dyn Fn(&ThemeState)>;

/// Reads the persisted theme, seeding storage with the default on first run.
///
/// An empty value counts as absent. Any other value is decoded leniently; if
/// it is not JSON at all the error propagates instead of falling back.
pub fn get_initial<S: KeyValueStorage + ?Sized>(storage: &S) -> Result<ThemeState, ThemeError> {
    let stored = storage.get_item(THEME_STORAGE_KEY)?.filter(|raw| !raw.is_empty());
    if let Some(raw) = stored {
        let state: ThemeState = serde_json::from_str(&raw)?;
        log::debug!("Loaded theme preference: {:?}", state);
        return Ok(state);
    }

    let state = ThemeState::default();
    persist(storage, &state)?;
    log::info!("No theme preference stored, seeded {}", THEME_STORAGE_KEY);
    Ok(state)
}

/// Flips the theme and writes the result through before returning it.
pub fn toggle<S: KeyValueStorage + ?Sized>(
    storage: &S,
    state: &ThemeState
) -> Result<ThemeState, ThemeError> {
    let next = state.toggled();
    persist(storage, &next)?;
    Ok(next)
}

fn persist<S: KeyValueStorage + ?Sized>(storage: &S, state: &ThemeState) -> Result<(), ThemeError> {
    let encoded = serde_json::to_string(state).map_err(|e| ThemeError::Encode(e.to_string()))?;
    storage.set_item(THEME_STORAGE_KEY, &encoded)
}

/// The theme cell: current state, its backing storage, and the consumers
/// notified after every toggle.
///
/// `toggle` is the only writer, and it commits in memory only after the
/// storage write succeeded.
pub struct ThemeStore<S> {
    storage: S,
    state: ThemeState,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    pub fn load(storage: S) -> Result<Self, ThemeError> {
        let state = get_initial(&storage)?;
        Ok(Self {
            storage,
            state,
            subscribers: Vec::new(),
        })
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn is_dark(&self) -> bool {
        select(&self.state)
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&ThemeState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn toggle(&mut self) -> Result<&ThemeState, ThemeError> {
        let next = toggle(&self.storage, &self.state).map_err(|e| {
            log::error!("Failed to persist theme toggle: {}", e);
            e
        })?;
        log::debug!("Theme toggled: is_dark={}", next.is_dark);
        self.state = next;

        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        Ok(&self.state)
    }
}

impl<S> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
