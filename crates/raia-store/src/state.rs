use serde::{Deserialize, Serialize};

use raia_dossier::Dossier;

/// The whole application state: all dossiers, the active selection, and
/// settings. One instance per store; no ambient globals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub dossiers: Vec<Dossier>,
    /// Index of the currently open dossier, if any.
    #[serde(default)]
    pub active: Option<usize>,
    #[serde(default)]
    pub settings: Settings,
}

impl AppState {
    /// The currently open dossier, if a valid selection exists.
    pub fn active_dossier(&self) -> Option<&Dossier> {
        self.active.and_then(|i| self.dossiers.get(i))
    }

    pub fn active_dossier_mut(&mut self) -> Option<&mut Dossier> {
        self.active.and_then(|i| self.dossiers.get_mut(i))
    }
}

/// User settings, persisted with the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Actor identity recorded in audit entries.
    pub actor: String,
    /// When `false`, the store skips snapshot writes.
    pub persist: bool,
    /// UI flag: dark color scheme. Carried for display layers.
    pub dark_mode: bool,
    /// UI flag: show workflow hints. Carried for display layers.
    pub training_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            actor: "reviewer".to_string(),
            persist: true,
            dark_mode: false,
            training_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raia_types::{Authority, Pathway};

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.actor, "reviewer");
        assert!(settings.persist);
    }

    #[test]
    fn active_selection_is_bounds_checked() {
        let mut state = AppState::default();
        state.active = Some(3);
        assert!(state.active_dossier().is_none());

        state
            .dossiers
            .push(Dossier::new("D", Authority::Sahpra, Pathway::Abridged).unwrap());
        state.active = Some(0);
        assert_eq!(state.active_dossier().unwrap().name(), "D");
    }

    #[test]
    fn state_deserializes_from_empty_object() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert!(state.dossiers.is_empty());
        assert!(state.active.is_none());
    }
}
