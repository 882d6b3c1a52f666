use crate::a11y::set_status;
use crate::app::state::AppState;
use crate::catalog::{ArcadeSession, Category, FavoritesStore, KeyValueStore};
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

fn announce_results(session: &ArcadeSession) {
    set_status(&i18n::count_label("status.results", session.visible().len()));
}

fn with_query(session: &ArcadeSession, query: String) -> ArcadeSession {
    let mut next = session.clone();
    next.set_query(query);
    next
}

/// `None` when `category` is already selected.
fn with_category(session: &ArcadeSession, category: Category) -> Option<ArcadeSession> {
    if session.category() == category {
        return None;
    }
    let mut next = session.clone();
    next.set_category(category);
    Some(next)
}

fn with_filters_reset(session: &ArcadeSession) -> ArcadeSession {
    let mut next = session.clone();
    next.reset_filters();
    next
}

/// Toggle through the store, so storage is rewritten before the session
/// sees the new set. Returns whether `id` is now a favorite.
fn with_favorite_toggled<S: KeyValueStore>(
    session: &ArcadeSession,
    store: &mut FavoritesStore<S>,
    id: &str,
) -> (ArcadeSession, bool) {
    let now_favorite = store.toggle(id);
    let mut next = session.clone();
    next.set_favorites(store.set().clone());
    (next, now_favorite)
}

pub fn build_search_change(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    Callback::from(move |query: String| {
        let next = with_query(&session, query);
        announce_results(&next);
        session.set(next);
    })
}

pub fn build_category_select(state: &AppState) -> Callback<Category> {
    let session = state.session.clone();
    Callback::from(move |category: Category| {
        if let Some(next) = with_category(&session, category) {
            announce_results(&next);
            session.set(next);
        }
    })
}

pub fn build_reset_filters(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let next = with_filters_reset(&session);
        announce_results(&next);
        session.set(next);
    })
}

pub fn build_toggle_favorite(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    let favorites = state.favorites.clone();
    Callback::from(move |id: String| {
        let (next, now_favorite) =
            with_favorite_toggled(&session, &mut *favorites.borrow_mut(), &id);

        let title = next
            .catalog()
            .find(&id)
            .map_or_else(|| id.clone(), |game| game.title.clone());
        let mut args = BTreeMap::new();
        args.insert("title", title.as_str());
        let key = if now_favorite {
            "status.favorite_added"
        } else {
            "status.favorite_removed"
        };
        set_status(&i18n::tr(key, Some(&args)));
        session.set(next);
    })
}
