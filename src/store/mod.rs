//! Catalog Store
//!
//! Single source of truth for the artifact collection and the viewer's
//! like-set. Every mutation updates both in memory and writes through to
//! the persistence slots before observers are notified.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Artifact, CatalogChange, NewArtifact, Theme};
use crate::persist::{SlotStore, ARTIFACT_SLOT, LIKE_SLOT};
use crate::seed::seed_artifacts;
use crate::views;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Callback invoked after each successful mutation.
pub type Listener = Box<dyn Fn(&CatalogChange)>;

/// The session's authoritative catalog: artifact sequence (newest first),
/// the viewer's like-set, and the slot store they are written through to.
pub struct CatalogStore {
    slots: SlotStore,
    artifacts: Vec<Artifact>,
    liked: Vec<String>,
    listeners: Vec<Listener>,
}

impl CatalogStore {
    /// Open the catalog at the given database path and hydrate it.
    pub fn open(db_path: &str) -> StoreResult<Self> {
        Self::from_slots(SlotStore::new(db_path)?)
    }

    /// In-memory catalog for testing.
    pub fn in_memory() -> StoreResult<Self> {
        Self::from_slots(SlotStore::in_memory()?)
    }

    /// Hydrate a catalog from an already-opened slot store.
    pub fn from_slots(slots: SlotStore) -> StoreResult<Self> {
        let mut store = Self {
            slots,
            artifacts: Vec::new(),
            liked: Vec::new(),
            listeners: Vec::new(),
        };
        store.hydrate()?;
        Ok(store)
    }

    /// Load both slots. Absent or unreadable data is not an error: the
    /// artifact slot falls back to the seed collection (written back so the
    /// next session finds it), the like slot to an empty set.
    fn hydrate(&mut self) -> StoreResult<()> {
        self.artifacts = match self.slots.load(ARTIFACT_SLOT)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(artifacts) => artifacts,
                Err(err) => {
                    log::warn!("artifact slot unreadable, reseeding: {}", err);
                    self.adopt_seed()?
                }
            },
            None => {
                log::info!("artifact slot empty, seeding initial collection");
                self.adopt_seed()?
            }
        };

        self.liked = match self.slots.load(LIKE_SLOT)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(ids) => ids,
                Err(err) => {
                    log::warn!("like slot unreadable, starting empty: {}", err);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(())
    }

    fn adopt_seed(&self) -> StoreResult<Vec<Artifact>> {
        let artifacts = seed_artifacts();
        self.slots
            .save(ARTIFACT_SLOT, &serde_json::to_string(&artifacts)?)?;
        Ok(artifacts)
    }

    // ==================== Commands ====================

    /// Create an artifact from caller-supplied fields. The store assigns a
    /// fresh id and a zero like count and prepends it (newest first).
    /// Returns the new artifact's id.
    pub fn add_artifact(&mut self, new: NewArtifact) -> StoreResult<String> {
        let artifact = Artifact {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            image: new.image,
            theme: new.theme,
            description: new.description,
            date: new.date,
            likes: 0,
        };
        let id = artifact.id.clone();
        self.artifacts.insert(0, artifact);
        self.persist_artifacts()?;
        log::debug!("added artifact {}", id);
        self.emit(&CatalogChange::ArtifactAdded { id: id.clone() });
        Ok(id)
    }

    /// Remove the artifact with the given id. A missing id is a no-op,
    /// not an error; returns whether anything was removed. The like-set is
    /// left alone: a dangling liked id has no observable effect.
    pub fn remove_artifact(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.artifacts.len();
        self.artifacts.retain(|a| a.id != id);
        if self.artifacts.len() == before {
            return Ok(false);
        }
        self.persist_artifacts()?;
        log::debug!("removed artifact {}", id);
        self.emit(&CatalogChange::ArtifactRemoved { id: id.to_string() });
        Ok(true)
    }

    /// Flip the viewer's like for an artifact: membership in the like-set
    /// and the artifact's counter move together, and both slots are written
    /// through in the same logical operation. The decrement saturates at
    /// zero. A missing id is a silent no-op (stale references from derived
    /// views are expected); returns whether the toggle applied.
    pub fn toggle_like(&mut self, id: &str) -> StoreResult<bool> {
        let index = match self.artifacts.iter().position(|a| a.id == id) {
            Some(index) => index,
            None => return Ok(false),
        };

        let liked = match self.liked.iter().position(|liked_id| liked_id == id) {
            Some(pos) => {
                self.liked.remove(pos);
                let artifact = &mut self.artifacts[index];
                artifact.likes = artifact.likes.saturating_sub(1);
                false
            }
            None => {
                self.liked.push(id.to_string());
                self.artifacts[index].likes += 1;
                true
            }
        };

        self.persist_artifacts()?;
        self.persist_liked()?;
        self.emit(&CatalogChange::LikeToggled {
            id: id.to_string(),
            liked,
        });
        Ok(true)
    }

    // ==================== Queries ====================

    /// The current snapshot: all artifacts, newest first.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Ids the viewer has liked, in the order they were liked.
    pub fn liked_ids(&self) -> &[String] {
        &self.liked
    }

    /// Whether the viewer has liked the given artifact.
    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.iter().any(|liked_id| liked_id == id)
    }

    /// Artifacts matching the theme selector, order preserved.
    pub fn filter_by_theme(&self, theme: Theme) -> Vec<Artifact> {
        views::filter_by_theme(&self.artifacts, theme)
    }

    /// The artifact with the most likes, if any.
    pub fn featured(&self) -> Option<&Artifact> {
        views::featured(&self.artifacts)
    }

    /// Sum of like counters across the collection.
    pub fn total_likes(&self) -> u64 {
        views::total_likes(&self.artifacts)
    }

    /// Number of distinct theme labels present in the collection.
    pub fn distinct_theme_count(&self) -> usize {
        views::distinct_theme_count(&self.artifacts)
    }

    // ==================== Notification ====================

    /// Register a callback invoked after each successful mutation, once
    /// both in-memory state and persistence reflect the change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&CatalogChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, change: &CatalogChange) {
        for listener in &self.listeners {
            listener(change);
        }
    }

    // ==================== Write-through ====================

    fn persist_artifacts(&self) -> StoreResult<()> {
        self.slots
            .save(ARTIFACT_SLOT, &serde_json::to_string(&self.artifacts)?)
    }

    fn persist_liked(&self) -> StoreResult<()> {
        self.slots
            .save(LIKE_SLOT, &serde_json::to_string(&self.liked)?)
    }
}
