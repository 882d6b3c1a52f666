mod interactions;
mod view;

use crate::catalog::GameRecord;
use yew::prelude::*;

pub use interactions::closes_on_key;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: GameRecord,
    pub fullscreen: bool,
    #[prop_or_default]
    pub pending: bool,
    #[prop_or_default]
    pub notice: Option<AttrValue>,
    pub on_close: Callback<()>,
    pub on_toggle_fullscreen: Callback<()>,
    pub on_dismiss_notice: Callback<()>,
}

/// Full-viewport player overlay for the active game.
#[function_component(GamePlayer)]
pub fn game_player(p: &Props) -> Html {
    let overlay_ref = use_node_ref();
    interactions::use_focus_on_open(&overlay_ref, &p.game.id);
    let callbacks = interactions::PlayerCallbacks::new(p);
    view::render(p, &overlay_ref, &callbacks)
}
