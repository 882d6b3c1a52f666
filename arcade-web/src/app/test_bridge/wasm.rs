use super::shared::{bridge_state, parse_screen};
use crate::app::state::AppState;
use crate::app::view::AppHandlers;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const BRIDGE_NAME: &str = "__arcadeTest";

type Latest = Rc<RefCell<AppState>>;

struct BridgeBindings {
    state: Closure<dyn FnMut() -> JsValue>,
    search: Closure<dyn FnMut(JsValue)>,
    select: Closure<dyn FnMut(JsValue)>,
    favorite: Closure<dyn FnMut(JsValue)>,
    screen: Closure<dyn FnMut(JsValue)>,
}

fn string_action(latest: &Latest, act: fn(&AppHandlers, String)) -> Closure<dyn FnMut(JsValue)> {
    let latest = Rc::clone(latest);
    Closure::wrap(Box::new(move |value: JsValue| {
        if let Some(text) = value.as_string() {
            let app = latest.borrow().clone();
            act(&AppHandlers::new(&app), text);
        }
    }) as Box<dyn FnMut(JsValue)>)
}

fn build_bridge(latest: &Latest) -> BridgeBindings {
    let state = {
        let latest = Rc::clone(latest);
        Closure::wrap(Box::new(move || {
            let app = latest.borrow();
            serde_wasm_bindgen::to_value(&bridge_state(&app.session, &app.viewer.0))
                .unwrap_or(JsValue::NULL)
        }) as Box<dyn FnMut() -> JsValue>)
    };
    let screen = string_action(latest, |handlers, name| match parse_screen(&name) {
        Some(target) => handlers.navigate.emit(target),
        None => log::warn!("Test bridge: unknown screen '{name}'"),
    });

    BridgeBindings {
        state,
        search: string_action(latest, |handlers, query| handlers.search_change.emit(query)),
        select: string_action(latest, |handlers, id| handlers.select_game.emit(id)),
        favorite: string_action(latest, |handlers, id| handlers.toggle_favorite.emit(id)),
        screen,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let entries: [(&str, &JsValue); 5] = [
        ("state", bindings.state.as_ref()),
        ("search", bindings.search.as_ref()),
        ("select", bindings.select.as_ref()),
        ("favorite", bindings.favorite.as_ref()),
        ("screen", bindings.screen.as_ref()),
    ];
    for (name, func) in entries {
        let _ = js_sys::Reflect::set(&bridge, &JsValue::from_str(name), func);
    }
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_NAME), &bridge);
    log::info!("Test bridge installed as window.{BRIDGE_NAME}");
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let latest = use_mut_ref(|| app_state.clone());
    *latest.borrow_mut() = app_state.clone();
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);

    use_effect_with((), move |()| {
        if bridge_handle.borrow().is_none() && dom::test_mode_enabled() {
            let bindings = build_bridge(&latest);
            attach_bridge(&bindings);
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        || {}
    });
}
