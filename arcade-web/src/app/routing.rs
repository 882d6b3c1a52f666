//! Keeps the browser location and the session's screen in step.
//!
//! Screen changes push the matching route. Route changes (back button, deep
//! links) are replayed through the view controller once the catalog has
//! settled, and anything the controller refuses is rewritten to the route of
//! the screen that actually resulted.

#[cfg(any(target_arch = "wasm32", test))]
use crate::catalog::{ArcadeSession, NavTarget, ViewState};
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::app::state::{ViewerAction, ViewerModel};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Route to push after a screen change, if the location is out of date.
#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_session(session: &ArcadeSession, current: Option<&Route>) -> Option<Route> {
    if session.load_state().is_loading() {
        return None;
    }
    let wanted = Route::for_session(session);
    (Some(&wanted) != current).then_some(wanted)
}

/// Replay `route` through the session's transitions.
///
/// Returns the updated session, or `None` when nothing changes.
#[cfg(any(target_arch = "wasm32", test))]
fn session_for_route(session: &ArcadeSession, route: &Route) -> Option<ArcadeSession> {
    if session.load_state().is_loading() || Route::for_session(session) == *route {
        return None;
    }
    let mut next = session.clone();
    let closed = match next.view() {
        ViewState::ViewingDetail => next.close(),
        ViewState::Browsing | ViewState::FavoritesOnly => Ok(()),
    };
    let applied = closed.and_then(|()| match route {
        Route::Home | Route::NotFound => next.navigate(NavTarget::Browsing),
        Route::Favorites => next.navigate(NavTarget::FavoritesOnly),
        Route::Play { id } => next.select_by_id(id).map(|found| {
            if !found {
                log::info!("Deep link to unknown game '{id}', showing the catalog");
            }
        }),
    });
    if let Err(err) = applied {
        log::debug!("Route {route:?} left the screen as it was: {err}");
    }
    (next != *session).then_some(next)
}

/// Whether a route replay opened, closed or swapped the player.
#[cfg(any(target_arch = "wasm32", test))]
fn player_changed(before: &ArcadeSession, after: &ArcadeSession) -> bool {
    before.active().map(|g| &g.id) != after.active().map(|g| &g.id)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_session(
    session: &UseStateHandle<ArcadeSession>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let session = session.clone();
    let deps = (
        session.view(),
        session.active().map(|game| game.id.clone()),
    );
    use_effect_with(deps, move |_| {
        if let (Some(nav), Some(route)) = (
            navigator.as_ref(),
            next_route_for_session(&session, active_route.as_ref()),
        ) {
            nav.push(&route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_session_with_route(
    session: &UseStateHandle<ArcadeSession>,
    viewer: &UseReducerHandle<ViewerModel>,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let session = session.clone();
    let viewer = viewer.clone();
    let deps = (route, session.load_state());
    use_effect_with(deps, move |(route, _)| {
        let Some(route) = route.as_ref() else {
            return;
        };
        let settled = match session_for_route(&session, route) {
            Some(next) => {
                let settled = Route::for_session(&next);
                if player_changed(&session, &next) {
                    viewer.dispatch(ViewerAction::ClearTransient);
                }
                session.set(next);
                settled
            }
            None if session.load_state().is_loading() => return,
            None => Route::for_session(&session),
        };
        if settled != *route
            && let Some(nav) = navigator.as_ref()
        {
            nav.replace(&settled);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogError, FavoritesSet};

    const CATALOG: &str = r#"[
        {"id":"a","title":"Alpha","description":"","category":"Puzzle","thumbnail":"","iframeUrl":"https://example.test/a","featured":true},
        {"id":"b","title":"Beta","description":"","category":"Action","thumbnail":"","iframeUrl":"https://example.test/b"}
    ]"#;

    fn ready() -> ArcadeSession {
        ArcadeSession::with_catalog(Catalog::from_json(CATALOG).unwrap(), FavoritesSet::new())
    }

    #[test]
    fn no_route_changes_while_loading() {
        let loading = ArcadeSession::default();
        assert!(next_route_for_session(&loading, None).is_none());
        let deep_link = Route::Play { id: "a".into() };
        assert!(session_for_route(&loading, &deep_link).is_none());
    }

    #[test]
    fn next_route_skips_when_unchanged() {
        let session = ready();
        assert!(next_route_for_session(&session, Some(&Route::Home)).is_none());
        assert_eq!(
            next_route_for_session(&session, Some(&Route::Favorites)),
            Some(Route::Home)
        );
    }

    #[test]
    fn deep_link_opens_the_player() {
        let session = ready();
        let next = session_for_route(&session, &Route::Play { id: "b".into() }).unwrap();
        assert_eq!(next.view(), ViewState::ViewingDetail);
        assert_eq!(next.active().map(|g| g.id.as_str()), Some("b"));
    }

    #[test]
    fn back_button_closes_the_player() {
        let mut session = ready();
        session.select_by_id("a").unwrap();
        let next = session_for_route(&session, &Route::Home).unwrap();
        assert_eq!(next.view(), ViewState::Browsing);
        assert!(next.active().is_none());

        let to_favorites = session_for_route(&session, &Route::Favorites).unwrap();
        assert_eq!(to_favorites.view(), ViewState::FavoritesOnly);
    }

    #[test]
    fn switching_games_by_route_replaces_active() {
        let mut session = ready();
        session.select_by_id("a").unwrap();
        let next = session_for_route(&session, &Route::Play { id: "b".into() }).unwrap();
        assert_eq!(next.active().map(|g| g.id.as_str()), Some("b"));
    }

    #[test]
    fn unknown_game_falls_back_to_browsing() {
        let session = ready();
        assert!(session_for_route(&session, &Route::Play { id: "zz".into() }).is_none());
        assert_eq!(Route::for_session(&session), Route::Home);

        let mut failed = ArcadeSession::default();
        failed.finish_load(Err(CatalogError::Status(404)));
        assert!(session_for_route(&failed, &Route::Play { id: "a".into() }).is_none());
    }

    #[test]
    fn not_found_lands_on_browsing() {
        let mut session = ready();
        session.navigate(NavTarget::FavoritesOnly).unwrap();
        let next = session_for_route(&session, &Route::NotFound).unwrap();
        assert_eq!(next.view(), ViewState::Browsing);
    }

    #[test]
    fn player_change_tracks_the_active_game() {
        let session = ready();
        let playing = session_for_route(&session, &Route::Play { id: "a".into() }).unwrap();
        assert!(player_changed(&session, &playing));

        let swapped = session_for_route(&playing, &Route::Play { id: "b".into() }).unwrap();
        assert!(player_changed(&playing, &swapped));

        let closed = session_for_route(&playing, &Route::Home).unwrap();
        assert!(player_changed(&playing, &closed));

        let favorites = session_for_route(&session, &Route::Favorites).unwrap();
        assert!(!player_changed(&session, &favorites));
    }
}
