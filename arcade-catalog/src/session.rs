use crate::data::{Catalog, CatalogError, Category, GameRecord};
use crate::favorites::FavoritesSet;
use crate::filter::{FilterCriteria, compute_visible, featured, featured_section_visible};
use crate::view::{NavTarget, ViewController, ViewError, ViewState};
use serde::Serialize;

/// Catalog availability. `Loading` lasts until the one startup fetch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Immutable view of the session handed to rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub load_state: LoadState,
    pub loading: bool,
    pub view: ViewState,
    pub query: String,
    pub category: Category,
    pub active: Option<GameRecord>,
    pub visible: Vec<GameRecord>,
    pub featured: Vec<GameRecord>,
    pub show_featured: bool,
    pub show_reset: bool,
    pub result_count: usize,
    pub favorites: FavoritesSet,
}

impl SessionSnapshot {
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible.iter().map(|g| g.id.as_str()).collect()
    }

    #[must_use]
    pub fn featured_ids(&self) -> Vec<&str> {
        self.featured.iter().map(|g| g.id.as_str()).collect()
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }
}

/// Centrally owned UI state. Each user action maps to one command here.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcadeSession {
    catalog: Catalog,
    load_state: LoadState,
    query: String,
    category: Category,
    view: ViewController,
    favorites: FavoritesSet,
}

impl Default for ArcadeSession {
    fn default() -> Self {
        Self::new(FavoritesSet::new())
    }
}

impl ArcadeSession {
    /// A session waiting on the catalog fetch, with hydrated favorites.
    #[must_use]
    pub fn new(favorites: FavoritesSet) -> Self {
        Self {
            catalog: Catalog::empty(),
            load_state: LoadState::Loading,
            query: String::new(),
            category: Category::All,
            view: ViewController::new(),
            favorites,
        }
    }

    /// A ready session over an already parsed catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, favorites: FavoritesSet) -> Self {
        let mut session = Self::new(favorites);
        session.finish_load(Ok(catalog));
        session
    }

    /// Settle the startup fetch. Failures leave an empty, ready catalog.
    pub fn finish_load(&mut self, result: Result<Catalog, CatalogError>) {
        match result {
            Ok(catalog) => {
                log::info!("Catalog ready with {} games", catalog.len());
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                log::warn!("Failed to load games: {err}");
                self.catalog = Catalog::empty();
                self.load_state = LoadState::Failed;
            }
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.view.state()
    }

    #[must_use]
    pub const fn active(&self) -> Option<&GameRecord> {
        self.view.active()
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// # Errors
    ///
    /// Returns an error while a game is open.
    pub fn navigate(&mut self, target: NavTarget) -> Result<(), ViewError> {
        self.view.navigate(target)
    }

    /// # Errors
    ///
    /// Returns an error if a game is already open.
    pub fn select(&mut self, game: GameRecord) -> Result<(), ViewError> {
        self.view.select(game)
    }

    /// Open the catalog record with `id`. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is already open.
    pub fn select_by_id(&mut self, id: &str) -> Result<bool, ViewError> {
        let Some(game) = self.catalog.find(id).cloned() else {
            log::debug!("Ignoring selection of unknown game '{id}'");
            return Ok(false);
        };
        self.view.select(game)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns an error if no game is open.
    pub fn close(&mut self) -> Result<(), ViewError> {
        self.view.close()
    }

    /// Flip favorite membership. Touches nothing but the favorites set.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    /// Replace favorites wholesale, e.g. after the store persisted a toggle.
    pub fn set_favorites(&mut self, favorites: FavoritesSet) {
        self.favorites = favorites;
    }

    /// Back to the unfiltered landing state.
    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.category = Category::All;
        let closed = match self.view.state() {
            ViewState::ViewingDetail => self.view.close(),
            ViewState::Browsing | ViewState::FavoritesOnly => Ok(()),
        };
        if let Err(err) = closed.and_then(|()| self.view.navigate(NavTarget::Browsing)) {
            log::debug!("Reset left the view as it was: {err}");
        }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&GameRecord> {
        compute_visible(
            self.catalog.games(),
            &FilterCriteria {
                query: &self.query,
                category: self.category,
                view: self.view.state(),
                favorites: &self.favorites,
            },
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let visible: Vec<GameRecord> = self.visible().into_iter().cloned().collect();
        let view = self.view.state();
        SessionSnapshot {
            load_state: self.load_state,
            loading: self.load_state.is_loading(),
            view,
            query: self.query.clone(),
            category: self.category,
            active: self.view.active().cloned(),
            result_count: visible.len(),
            show_reset: !self.load_state.is_loading() && visible.is_empty(),
            visible,
            featured: featured(self.catalog.games()).into_iter().cloned().collect(),
            show_featured: featured_section_visible(view, &self.query, self.category),
            favorites: self.favorites.clone(),
        }
    }
}
