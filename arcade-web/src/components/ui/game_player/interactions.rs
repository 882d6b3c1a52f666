use super::Props;
use yew::prelude::*;

/// Escape leaves the player, unless the browser is fullscreen and will use
/// the key to exit that first.
#[must_use]
pub fn closes_on_key(key: &str, fullscreen: bool) -> bool {
    key == "Escape" && !fullscreen
}

pub(super) struct PlayerCallbacks {
    pub close: Callback<MouseEvent>,
    pub toggle_fullscreen: Callback<MouseEvent>,
    pub dismiss_notice: Callback<MouseEvent>,
    pub keydown: Callback<KeyboardEvent>,
}

impl PlayerCallbacks {
    pub(super) fn new(p: &Props) -> Self {
        let close = {
            let cb = p.on_close.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        let toggle_fullscreen = {
            let cb = p.on_toggle_fullscreen.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        let dismiss_notice = {
            let cb = p.on_dismiss_notice.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        let keydown = {
            let cb = p.on_close.clone();
            let fullscreen = p.fullscreen;
            Callback::from(move |e: KeyboardEvent| {
                if closes_on_key(&e.key(), fullscreen) {
                    e.prevent_default();
                    cb.emit(());
                }
            })
        };
        Self {
            close,
            toggle_fullscreen,
            dismiss_notice,
            keydown,
        }
    }
}

/// Move focus into the overlay whenever a game opens so Escape reaches it.
#[hook]
pub(super) fn use_focus_on_open(overlay_ref: &NodeRef, game_id: &str) {
    let overlay_ref = overlay_ref.clone();
    use_effect_with(game_id.to_string(), move |_| {
        if let Some(el) = overlay_ref.cast::<web_sys::HtmlElement>() {
            let _ = el.focus();
        }
        || {}
    });
}
