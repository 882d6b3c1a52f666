use crate::constants::FAVORITES_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

/// Abstraction over a string key-value store such as `localStorage`.
/// Platform-specific implementations provide this.
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory store used by tests and the QA harness.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with a malformed payload.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Malformed favorites payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Identifiers of the games the player has marked.
///
/// Kept sorted so the persisted form only depends on membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    ids: BTreeSet<String>,
}

impl FavoritesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted payload. An absent payload is an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Malformed`] when the payload is not a JSON
    /// array of strings.
    pub fn parse(raw: Option<&str>) -> Result<Self, FavoritesError> {
        match raw {
            None => Ok(Self::new()),
            Some(text) => Ok(serde_json::from_str(text)?),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| String::from("[]"))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`. Returns true when `id` is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Favorites bound to their persistent store. Single writer per session.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    set: FavoritesSet,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Start with an empty set; call [`Self::hydrate`] to restore.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            set: FavoritesSet::new(),
        }
    }

    /// Read the persisted set, falling back to empty on any failure.
    pub fn hydrate(&mut self) -> &FavoritesSet {
        self.set = match self.load() {
            Ok(set) => set,
            Err(err) => {
                log::warn!("Failed to parse favorites, starting empty: {err}");
                FavoritesSet::new()
            }
        };
        &self.set
    }

    /// Typed read of the persisted set.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the payload is malformed.
    pub fn load(&self) -> Result<FavoritesSet, FavoritesError> {
        let raw = self
            .storage
            .get_item(FAVORITES_STORAGE_KEY)
            .map_err(|e| FavoritesError::Storage(e.to_string()))?;
        FavoritesSet::parse(raw.as_deref())
    }

    /// Flip membership of `id` and rewrite storage.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = self.set.toggle(id);
        self.persist();
        now_favorite
    }

    /// Serialize the full set over the prior content. Failures are logged.
    pub fn persist(&self) {
        if let Err(err) = self
            .storage
            .set_item(FAVORITES_STORAGE_KEY, &self.set.to_json())
        {
            log::warn!("Failed to persist favorites: {err}");
        }
    }

    #[must_use]
    pub const fn set(&self) -> &FavoritesSet {
        &self.set
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
