use arcade_catalog::{ArcadeSession, ViewState};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/favorites")]
    Favorites,
    #[at("/play/:id")]
    Play { id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The route that mirrors the session's current screen.
    #[must_use]
    pub fn for_session(session: &ArcadeSession) -> Self {
        match (session.view(), session.active()) {
            (ViewState::ViewingDetail, Some(game)) => Self::Play {
                id: game.id.clone(),
            },
            (ViewState::FavoritesOnly, _) => Self::Favorites,
            _ => Self::Home,
        }
    }

    /// Screen requested by this route. Unknown paths land on browsing.
    #[must_use]
    pub const fn view(&self) -> ViewState {
        match self {
            Self::Home | Self::NotFound => ViewState::Browsing,
            Self::Favorites => ViewState::FavoritesOnly,
            Self::Play { .. } => ViewState::ViewingDetail,
        }
    }
}
