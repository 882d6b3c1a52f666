//! Browser side of the fullscreen toggle.
//!
//! Requests go out from the click handler (browsers require a user gesture);
//! results come back only through `fullscreenchange` and `fullscreenerror`.

use crate::catalog::FullscreenRequest;
#[cfg(target_arch = "wasm32")]
use crate::app::state::{ViewerAction, ViewerModel};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Reason shown when the browser rejects a request without detail.
pub const REFUSED_REASON: &str = "the browser refused the request";

/// How a dispatched request resolved synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Wait for a platform notification.
    Pending,
    /// The platform is already in this state; no event will follow.
    Settled(bool),
}

/// Ask the browser to enter or leave fullscreen on the viewer container.
///
/// # Errors
/// Returns a human-readable reason when the request cannot be made.
#[cfg(target_arch = "wasm32")]
pub fn dispatch(request: FullscreenRequest) -> Result<Dispatch, String> {
    use arcade_catalog::constants::VIEWER_CONTAINER_ID;

    let doc = crate::dom::document().ok_or_else(|| String::from("no document"))?;
    let active = doc.fullscreen_element().is_some();
    match request {
        FullscreenRequest::Enter if active => Ok(Dispatch::Settled(true)),
        FullscreenRequest::Enter => {
            if !doc.fullscreen_enabled() {
                return Err(String::from("fullscreen is disabled on this page"));
            }
            let container = doc
                .get_element_by_id(VIEWER_CONTAINER_ID)
                .ok_or_else(|| String::from("viewer is not mounted"))?;
            container
                .request_fullscreen()
                .map(|()| Dispatch::Pending)
                .map_err(|err| crate::dom::js_error_message(&err))
        }
        FullscreenRequest::Exit if !active => Ok(Dispatch::Settled(false)),
        FullscreenRequest::Exit => {
            doc.exit_fullscreen();
            Ok(Dispatch::Pending)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch(request: FullscreenRequest) -> Result<Dispatch, String> {
    let _ = request;
    Err(String::from("fullscreen needs a browser"))
}

/// Leave fullscreen if the document is in it, e.g. when the player closes.
pub fn exit_if_active() {
    #[cfg(target_arch = "wasm32")]
    if let Some(doc) = crate::dom::document()
        && doc.fullscreen_element().is_some()
    {
        doc.exit_fullscreen();
    }
}

/// Mirror the document's fullscreen notifications into the viewer model.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_fullscreen_events(viewer: &UseReducerHandle<ViewerModel>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let viewer = viewer.clone();
    use_effect_with((), move |()| {
        let on_change = {
            let viewer = viewer.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                let active = crate::dom::document()
                    .and_then(|doc| doc.fullscreen_element())
                    .is_some();
                viewer.dispatch(ViewerAction::PlatformChange(active));
            })
        };
        let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            viewer.dispatch(ViewerAction::RequestFailed(String::from(REFUSED_REASON)));
        });

        let doc = crate::dom::document();
        if let Some(doc) = doc.as_ref() {
            let _ = doc
                .add_event_listener_with_callback("fullscreenchange", on_change.as_ref().unchecked_ref());
            let _ = doc
                .add_event_listener_with_callback("fullscreenerror", on_error.as_ref().unchecked_ref());
        }

        move || {
            if let Some(doc) = doc {
                let _ = doc.remove_event_listener_with_callback(
                    "fullscreenchange",
                    on_change.as_ref().unchecked_ref(),
                );
                let _ = doc.remove_event_listener_with_callback(
                    "fullscreenerror",
                    on_error.as_ref().unchecked_ref(),
                );
            }
        }
    });
}
