use crate::catalog::{ArcadeSession, FavoritesStore, LocalStore, ViewerState};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Viewer model wrapped for `use_reducer`, so document-level fullscreen
/// listeners always act on the latest state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerModel(pub ViewerState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    Request,
    PlatformChange(bool),
    RequestFailed(String),
    DismissNotice,
    /// A player opened or closed.
    ClearTransient,
}

impl Reducible for ViewerModel {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            ViewerAction::Request => {
                next.request_toggle();
            }
            ViewerAction::PlatformChange(fullscreen) => next.on_platform_change(fullscreen),
            ViewerAction::RequestFailed(reason) => next.on_request_failed(reason),
            ViewerAction::DismissNotice => next.dismiss_notice(),
            ViewerAction::ClearTransient => next.clear_transient(),
        }
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

pub type SharedFavorites = Rc<RefCell<FavoritesStore<LocalStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<ArcadeSession>,
    pub viewer: UseReducerHandle<ViewerModel>,
    pub favorites: SharedFavorites,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let favorites = use_mut_ref(crate::catalog::hydrated_favorites);
    let initial = favorites.borrow().set().clone();
    AppState {
        session: use_state(move || ArcadeSession::new(initial)),
        viewer: use_reducer(ViewerModel::default),
        favorites,
        current_language: use_state(crate::i18n::current_lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FullscreenRequest;

    fn reduce(model: ViewerModel, action: ViewerAction) -> ViewerModel {
        (*Rc::new(model).reduce(action)).clone()
    }

    #[test]
    fn reducer_routes_actions_to_viewer_state() {
        let model = reduce(ViewerModel::default(), ViewerAction::Request);
        assert_eq!(model.0.pending(), Some(FullscreenRequest::Enter));
        let model = reduce(model, ViewerAction::PlatformChange(true));
        assert!(model.0.is_fullscreen());
        let model = reduce(model, ViewerAction::Request);
        let model = reduce(model, ViewerAction::RequestFailed("denied".into()));
        assert!(model.0.notice().is_some());
        assert!(model.0.is_fullscreen());
        let model = reduce(model, ViewerAction::DismissNotice);
        assert!(model.0.notice().is_none());
    }

    #[test]
    fn clear_transient_drops_a_failed_request_notice() {
        let model = reduce(ViewerModel::default(), ViewerAction::Request);
        let model = reduce(model, ViewerAction::RequestFailed("denied".into()));
        assert!(model.0.notice().is_some());
        let model = reduce(model, ViewerAction::ClearTransient);
        assert!(model.0.notice().is_none());
        assert!(model.0.pending().is_none());
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let first = Rc::new(ViewerModel::default());
        let second = Rc::clone(&first).reduce(ViewerAction::DismissNotice);
        assert!(Rc::ptr_eq(&first, &second));
    }
}
