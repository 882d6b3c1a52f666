mod catalog;
mod navigation;
mod player;
mod prefs;

use crate::app::state::AppState;
use crate::catalog::{Category, NavTarget};
use yew::prelude::*;

pub use catalog::{
    build_category_select, build_reset_filters, build_search_change, build_toggle_favorite,
};
pub use navigation::{build_close_player, build_navigate, build_select_game};
pub use player::{build_dismiss_notice, build_toggle_fullscreen};
pub use prefs::build_lang_change;

/// One callback per user action. Components only ever emit these.
#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub search_change: Callback<String>,
    pub category_select: Callback<Category>,
    pub reset_filters: Callback<()>,
    pub toggle_favorite: Callback<String>,
    pub navigate: Callback<NavTarget>,
    pub select_game: Callback<String>,
    pub close_player: Callback<()>,
    pub toggle_fullscreen: Callback<()>,
    pub dismiss_notice: Callback<()>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            search_change: build_search_change(state),
            category_select: build_category_select(state),
            reset_filters: build_reset_filters(state),
            toggle_favorite: build_toggle_favorite(state),
            navigate: build_navigate(state),
            select_game: build_select_game(state),
            close_player: build_close_player(state),
            toggle_fullscreen: build_toggle_fullscreen(state),
            dismiss_notice: build_dismiss_notice(state),
            lang_change: build_lang_change(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{FavoritesStore, LocalStore};

    #[test]
    fn favorites_store_stays_authoritative_when_storage_fails() {
        let mut store = FavoritesStore::new(LocalStore);
        assert!(store.toggle("a"));
        assert!(store.set().contains("a"));
        assert!(!store.toggle("a"));
        assert!(store.set().is_empty());
    }
}
