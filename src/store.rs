//! JSON blob key-value store backing the app: one blob each for the roster, all matches and saved opponents.

use crate::models::{GameMatch, HockeyState, Opponent, Player};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Key holding the `Player[]` blob.
pub const PLAYERS_KEY: &str = "hockey_players";
/// Key holding the `Match[]` blob.
pub const MATCHES_KEY: &str = "hockey_matches";
/// Key holding the `Opponent[]` blob.
pub const OPPONENTS_KEY: &str = "hockey_opponents";

/// Errors reading or writing a blob.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json { key: String, source: serde_json::Error },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O failed: {}", e),
            StoreError::Json { key, source } => write!(f, "blob '{}' is not valid JSON: {}", key, source),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

enum Backend {
    Memory(Mutex<HashMap<String, String>>),
    Directory(PathBuf),
}

/// String blobs by key, either in memory or as `<key>.json` files in a directory.
pub struct BlobStore {
    backend: Backend,
}

impl BlobStore {
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Files live under `dir`, which is created on first write.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::Directory(dir.into()),
        }
    }

    /// Raw blob for `key`, or None if it was never written.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match &self.backend {
            Backend::Memory(blobs) => Ok(blobs.lock().await.get(key).cloned()),
            Backend::Directory(dir) => {
                match tokio::fs::read_to_string(dir.join(format!("{key}.json"))).await {
                    Ok(blob) => Ok(Some(blob)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    pub async fn set_raw(&self, key: &str, blob: String) -> Result<(), StoreError> {
        match &self.backend {
            Backend::Memory(blobs) => {
                blobs.lock().await.insert(key.to_string(), blob);
            }
            Backend::Directory(dir) => {
                tokio::fs::create_dir_all(dir).await?;
                let path = dir.join(format!("{key}.json"));
                let tmp = dir.join(format!("{key}.json.tmp"));
                tokio::fs::write(&tmp, blob).await?;
                tokio::fs::rename(&tmp, &path).await?;
            }
        }
        Ok(())
    }

    /// Deserialize the blob at `key`; a missing key yields `T::default()`.
    pub async fn get<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        match self.get_raw(key).await? {
            Some(blob) => serde_json::from_str(&blob).map_err(|source| StoreError::Json {
                key: key.to_string(),
                source,
            }),
            None => Ok(T::default()),
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let blob = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, blob).await
    }

    /// Current roster, matches and saved opponents.
    pub async fn load_state(&self) -> Result<HockeyState, StoreError> {
        let players: Vec<Player> = self.get(PLAYERS_KEY).await?;
        let matches: Vec<GameMatch> = self.get(MATCHES_KEY).await?;
        let opponents: Vec<Opponent> = self.get(OPPONENTS_KEY).await?;
        log::info!(
            "Loaded {} player(s), {} match(es) and {} saved opponent(s)",
            players.len(),
            matches.len(),
            opponents.len()
        );
        Ok(HockeyState::new(players, matches, opponents))
    }

    pub async fn save_players(&self, players: &[Player]) -> Result<(), StoreError> {
        self.set(PLAYERS_KEY, players).await
    }

    pub async fn save_matches(&self, matches: &[GameMatch]) -> Result<(), StoreError> {
        self.set(MATCHES_KEY, matches).await
    }

    pub async fn save_opponents(&self, opponents: &[Opponent]) -> Result<(), StoreError> {
        self.set(OPPONENTS_KEY, opponents).await
    }

    pub async fn save_state(&self, state: &HockeyState) -> Result<(), StoreError> {
        self.save_players(&state.players).await?;
        self.save_matches(&state.matches).await?;
        self.save_opponents(&state.opponents).await
    }
}
