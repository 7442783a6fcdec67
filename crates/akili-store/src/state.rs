use crate::error::StoreError;
use akili_model::profile::LearnerProfile;
use akili_model::tab::Tab;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The one fixed key under which everything the client remembers lives.
pub const STATE_FILE: &str = "akili_state.json";

/// The whole durable record: written after every profile or tab change,
/// read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub user: Option<LearnerProfile>,
    #[serde(default)]
    pub active_tab: Tab,
}

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(STATE_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Startup hydration. A missing, unreadable or corrupt record means a
    /// fresh start, never a fatal error; a garbled profile is never surfaced.
    pub async fn load(&self) -> PersistedState {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return PersistedState::default(),
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, path = ?self.path, "could not read stored state");
                return PersistedState::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, path = ?self.path, "stored state is corrupt, starting fresh");
                PersistedState::default()
            }
        }
    }

    /// Writes the record via a temp file and rename, so a crash mid-write
    /// leaves the previous record intact.
    pub async fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Fire-and-forget persistence: the foreground action never waits on an
    /// acknowledgment or sees a storage failure, it is only logged.
    pub async fn persist(&self, state: &PersistedState) {
        if let Err(error) = self.save(state).await {
            tracing::error!(error = &error as &dyn Error, path = ?self.path, "failed to persist state");
        }
    }

    /// Removes the record; part of the confirmed sign-out wipe.
    pub async fn wipe(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
