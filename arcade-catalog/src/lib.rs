//! NovaArcade catalog engine
//!
//! Platform-agnostic core for the NovaArcade game catalog: catalog parsing,
//! the favorites store, the filter engine, the view controller and the
//! embedded viewer model. This crate has no UI or browser dependencies.

pub mod constants;
pub mod data;
pub mod favorites;
pub mod filter;
pub mod session;
pub mod view;
pub mod viewer;

// Re-export commonly used types
pub use data::{Catalog, CatalogError, CatalogIssue, Category, GameRecord};
pub use favorites::{FavoritesError, FavoritesSet, FavoritesStore, KeyValueStore, MemoryStore};
pub use filter::{FilterCriteria, compute_visible, featured, featured_section_visible};
pub use session::{ArcadeSession, LoadState, SessionSnapshot};
pub use view::{NavTarget, ViewController, ViewError, ViewState};
pub use viewer::{ContentSource, FullscreenNotice, FullscreenRequest, ViewerState};

/// Trait for abstracting where the catalog comes from.
/// Platform-specific implementations should provide this.
pub trait CatalogSource {
    /// Load the full catalog in one go.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be fetched or parsed.
    fn load_catalog(&self) -> Result<Catalog, CatalogError>;
}

/// Catalog source backed by an in-memory JSON document.
#[derive(Debug, Clone)]
pub struct JsonSource {
    json: String,
}

impl JsonSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for JsonSource {
    fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_json(&self.json)
    }
}

/// Wires a catalog source and a favorites store into sessions.
pub struct ArcadeEngine<L, S>
where
    L: CatalogSource,
    S: KeyValueStore,
{
    source: L,
    favorites: FavoritesStore<S>,
}

impl<L, S> ArcadeEngine<L, S>
where
    L: CatalogSource,
    S: KeyValueStore,
{
    /// Create an engine with the provided catalog source and storage
    pub fn new(source: L, storage: S) -> Self {
        Self {
            source,
            favorites: FavoritesStore::new(storage),
        }
    }

    /// Hydrate favorites, load the catalog once and return a ready session.
    ///
    /// Load failures are absorbed: the session comes back with an empty
    /// catalog and [`LoadState::Failed`].
    pub fn start_session(&mut self) -> ArcadeSession {
        let favorites = self.favorites.hydrate().clone();
        let mut session = ArcadeSession::new(favorites);
        session.finish_load(self.source.load_catalog());
        session
    }

    /// Toggle a favorite, persist it and mirror the result into `session`.
    pub fn toggle_favorite(&mut self, session: &mut ArcadeSession, id: &str) -> bool {
        let now_favorite = self.favorites.toggle(id);
        session.set_favorites(self.favorites.set().clone());
        now_favorite
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }
}
