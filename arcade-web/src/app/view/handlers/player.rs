use crate::app::fullscreen::{self, Dispatch};
use crate::app::state::{AppState, ViewerAction};
use crate::catalog::{FullscreenRequest, ViewerState};
use yew::prelude::*;

/// Reducer actions for one toggle press, in order. Empty while an earlier
/// request is still unresolved.
fn toggle_actions(
    viewer: &ViewerState,
    dispatch: impl FnOnce(FullscreenRequest) -> Result<Dispatch, String>,
) -> Vec<ViewerAction> {
    let Some(request) = viewer.clone().request_toggle() else {
        return Vec::new();
    };
    let outcome = match dispatch(request) {
        Ok(Dispatch::Pending) => None,
        Ok(Dispatch::Settled(active)) => Some(ViewerAction::PlatformChange(active)),
        Err(reason) => Some(ViewerAction::RequestFailed(reason)),
    };
    std::iter::once(ViewerAction::Request).chain(outcome).collect()
}

/// Best-effort fullscreen toggle. The flag itself only moves when the
/// platform reports back.
pub fn build_toggle_fullscreen(state: &AppState) -> Callback<()> {
    let viewer = state.viewer.clone();
    Callback::from(move |()| {
        for action in toggle_actions(&viewer.0, fullscreen::dispatch) {
            viewer.dispatch(action);
        }
    })
}

pub fn build_dismiss_notice(state: &AppState) -> Callback<()> {
    let viewer = state.viewer.clone();
    Callback::from(move |()| viewer.dispatch(ViewerAction::DismissNotice))
}
