use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use raia_audit::AuditOutcome;
use raia_dossier::Dossier;
use raia_types::{Authority, Pathway};

use crate::error::StoreError;
use crate::state::AppState;

/// File-backed application store.
///
/// All mutation happens in memory first; [`save`](Store::save) writes the
/// snapshot. A failed save is warning-grade: the in-memory state is
/// intact, only durability is at risk.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    pub state: AppState,
}

impl Store {
    /// Open a store at `path`, loading the existing snapshot if present.
    ///
    /// A missing snapshot file yields a fresh state, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_str(&data)?
        } else {
            debug!(path = %path.display(), "no snapshot found, starting fresh");
            AppState::default()
        };
        Ok(Self { path, state })
    }

    /// Write the snapshot, honoring the `persist` setting.
    ///
    /// Returns `Ok(false)` when persistence is disabled.
    pub fn save(&self) -> Result<bool, StoreError> {
        if !self.state.settings.persist {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, data).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!(path = %self.path.display(), "snapshot written");
        Ok(true)
    }

    /// Save, degrading failure to a warning. Used after operations whose
    /// in-memory mutation has already committed.
    pub fn save_best_effort(&self) {
        if let Err(err) = self.save() {
            warn!(%err, "snapshot save failed; changes may not survive a restart");
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a dossier, make it active, and audit the creation.
    ///
    /// Dossier names are unique within the store.
    pub fn create_dossier(
        &mut self,
        name: &str,
        authority: Authority,
        pathway: Pathway,
    ) -> Result<AuditOutcome, StoreError> {
        if self.state.dossiers.iter().any(|d| d.name() == name.trim()) {
            return Err(StoreError::DossierExists(name.trim().to_string()));
        }
        let actor = self.state.settings.actor.clone();
        let created = Dossier::create(name, authority, pathway, &actor)?;
        let audit = created.audit;

        self.state.dossiers.push(created.value);
        self.state.active = Some(self.state.dossiers.len() - 1);
        Ok(audit)
    }

    /// Adopt an imported dossier, making it active. The name must not
    /// collide with an existing dossier.
    pub fn adopt_dossier(&mut self, dossier: Dossier) -> Result<(), StoreError> {
        if self.state.dossiers.iter().any(|d| d.name() == dossier.name()) {
            return Err(StoreError::DossierExists(dossier.name().to_string()));
        }
        self.state.dossiers.push(dossier);
        self.state.active = Some(self.state.dossiers.len() - 1);
        Ok(())
    }

    /// Open (select) a dossier by name.
    pub fn select_dossier(&mut self, name: &str) -> Result<&mut Dossier, StoreError> {
        let index = self
            .state
            .dossiers
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| StoreError::DossierNotFound(name.to_string()))?;
        self.state.active = Some(index);
        Ok(&mut self.state.dossiers[index])
    }

    /// Remove a dossier by name. Clears the active selection if it
    /// pointed at the removed dossier.
    pub fn delete_dossier(&mut self, name: &str) -> Result<Dossier, StoreError> {
        let index = self
            .state
            .dossiers
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| StoreError::DossierNotFound(name.to_string()))?;
        let removed = self.state.dossiers.remove(index);
        self.state.active = match self.state.active {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Ok(removed)
    }

    /// The currently open dossier.
    pub fn active_dossier_mut(&mut self) -> Result<&mut Dossier, StoreError> {
        self.state
            .active_dossier_mut()
            .ok_or(StoreError::NoActiveDossier)
    }

    pub fn active_dossier(&self) -> Result<&Dossier, StoreError> {
        self.state
            .active_dossier()
            .ok_or(StoreError::NoActiveDossier)
    }
}
