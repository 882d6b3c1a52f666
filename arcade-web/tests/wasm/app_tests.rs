#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlSelectElement};
use yew::Renderer;

use arcade_web::app::App;
use arcade_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    arcade_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = JsFuture::from(promise).await;
}

/// The catalog fetch settles either way; wait until the shell replaces the
/// loading screen.
async fn wait_for_shell() -> web_sys::Document {
    let doc = dom::document().expect("document");
    for _ in 0..50 {
        if doc.get_element_by_id("main").is_some() {
            return doc;
        }
        sleep_ms(20).await;
    }
    panic!("catalog never settled");
}

#[wasm_bindgen_test]
fn loading_screen_shows_first() {
    render_app();
    let doc = dom::document().expect("document");
    assert!(
        doc.query_selector("[data-testid='loading']")
            .expect("query loading")
            .is_some()
    );
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = wait_for_shell().await;
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    assert!(doc.get_element_by_id("arcade-status").is_some());
}

#[wasm_bindgen_test]
async fn language_select_updates_html_lang() {
    render_app();
    let doc = wait_for_shell().await;
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("es");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");

    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("es".into()));

    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
}
