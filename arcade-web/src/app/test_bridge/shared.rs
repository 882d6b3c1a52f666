use crate::catalog::{ArcadeSession, NavTarget, SessionSnapshot, ViewerState};
use serde::Serialize;

/// What `__arcadeTest.state()` hands to browser automation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BridgeState {
    #[serde(flatten)]
    pub session: SessionSnapshot,
    pub fullscreen: bool,
    pub notice: Option<String>,
}

pub(super) fn bridge_state(session: &ArcadeSession, viewer: &ViewerState) -> BridgeState {
    BridgeState {
        session: session.snapshot(),
        fullscreen: viewer.is_fullscreen(),
        notice: viewer.notice().map(|n| n.reason.clone()),
    }
}

pub(super) fn parse_screen(name: &str) -> Option<NavTarget> {
    match name.trim().to_ascii_lowercase().as_str() {
        "browsing" | "home" | "explore" => Some(NavTarget::Browsing),
        "favorites" | "favorites-only" | "my-games" => Some(NavTarget::FavoritesOnly),
        _ => None,
    }
}
