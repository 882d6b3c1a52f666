use crate::app::fullscreen;
use crate::app::state::{AppState, ViewerAction};
use crate::catalog::{ArcadeSession, NavTarget};
use yew::prelude::*;

/// Session after a navbar move, or `None` when the move is refused.
fn navigated(session: &ArcadeSession, target: NavTarget) -> Option<ArcadeSession> {
    let mut next = session.clone();
    match next.navigate(target) {
        Ok(()) => Some(next),
        Err(err) => {
            log::debug!("Ignoring navigation: {err}");
            None
        }
    }
}

/// Session with the game `id` open. Unknown ids and a busy player yield `None`.
fn selected(session: &ArcadeSession, id: &str) -> Option<ArcadeSession> {
    let mut next = session.clone();
    match next.select_by_id(id) {
        Ok(true) => Some(next),
        Ok(false) => None,
        Err(err) => {
            log::debug!("Ignoring selection of '{id}': {err}");
            None
        }
    }
}

fn closed(session: &ArcadeSession) -> Option<ArcadeSession> {
    let mut next = session.clone();
    next.close().ok().map(|()| next)
}

pub fn build_navigate(state: &AppState) -> Callback<NavTarget> {
    let session = state.session.clone();
    Callback::from(move |target: NavTarget| {
        if let Some(next) = navigated(&session, target) {
            session.set(next);
        }
    })
}

pub fn build_select_game(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    let viewer = state.viewer.clone();
    Callback::from(move |id: String| {
        if let Some(next) = selected(&session, &id) {
            viewer.dispatch(ViewerAction::ClearTransient);
            session.set(next);
        }
    })
}

pub fn build_close_player(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    let viewer = state.viewer.clone();
    Callback::from(move |()| {
        if let Some(next) = closed(&session) {
            fullscreen::exit_if_active();
            viewer.dispatch(ViewerAction::ClearTransient);
            session.set(next);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FavoritesSet, ViewState};

    const CATALOG: &str = r#"[
        {"id":"a","title":"Alpha","description":"","category":"Puzzle","thumbnail":"","iframeUrl":"https://example.test/a"},
        {"id":"b","title":"Beta","description":"","category":"Action","thumbnail":"","iframeUrl":"https://example.test/b"}
    ]"#;

    fn ready() -> ArcadeSession {
        ArcadeSession::with_catalog(Catalog::from_json(CATALOG).unwrap(), FavoritesSet::new())
    }

    fn active_id(session: &ArcadeSession) -> Option<&str> {
        session.active().map(|g| g.id.as_str())
    }

    #[test]
    fn navigate_switches_between_browse_screens() {
        let favorites = navigated(&ready(), NavTarget::FavoritesOnly).unwrap();
        assert_eq!(favorites.view(), ViewState::FavoritesOnly);
        let back = navigated(&favorites, NavTarget::Browsing).unwrap();
        assert_eq!(back.view(), ViewState::Browsing);
    }

    #[test]
    fn navigate_is_refused_while_playing() {
        let playing = selected(&ready(), "a").unwrap();
        assert!(navigated(&playing, NavTarget::FavoritesOnly).is_none());
    }

    #[test]
    fn select_opens_known_games_only() {
        let session = ready();
        let playing = selected(&session, "b").unwrap();
        assert_eq!(playing.view(), ViewState::ViewingDetail);
        assert_eq!(active_id(&playing), Some("b"));
        assert!(selected(&session, "missing").is_none());
        assert!(selected(&playing, "a").is_none(), "one game at a time");
    }

    #[test]
    fn close_then_select_moves_to_the_new_game() {
        let playing = selected(&ready(), "a").unwrap();
        let browsing = closed(&playing).unwrap();
        assert_eq!(browsing.view(), ViewState::Browsing);
        assert_eq!(active_id(&browsing), None);
        assert!(closed(&browsing).is_none());

        let next = selected(&browsing, "b").unwrap();
        assert_eq!(active_id(&next), Some("b"));
    }
}
