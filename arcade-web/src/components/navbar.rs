use crate::catalog::{NavTarget, ViewState};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: ViewState,
    pub query: AttrValue,
    pub on_search: Callback<String>,
    pub on_navigate: Callback<NavTarget>,
}

fn nav_button(label: String, target: NavTarget, current: bool, on_navigate: &Callback<NavTarget>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };
    let class = classes!("nav-link", current.then_some("is-active"));
    html! {
        <button
            type="button"
            {class}
            aria-current={current.then_some("page")}
            {onclick}
        >
            { label }
        </button>
    }
}

#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let go_home = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(NavTarget::Browsing))
    };

    html! {
        <header role="banner" class="navbar">
            <button type="button" class="navbar-logo" aria-label={t("nav.home")} onclick={go_home}>
                <span class="logo-nova">{"NOVA"}</span>
                <span class="logo-arcade">{"ARCADE"}</span>
            </button>
            <div class="navbar-search" role="search">
                <label for="search-input" class="sr-only">{ t("nav.search_label") }</label>
                <input
                    id="search-input"
                    type="search"
                    autocomplete="off"
                    placeholder={t("nav.search_placeholder")}
                    value={p.query.clone()}
                    oninput={on_input}
                />
            </div>
            <nav aria-label={t("nav.primary")} class="navbar-links">
                { nav_button(t("nav.explore"), NavTarget::Browsing, p.view == ViewState::Browsing, &p.on_navigate) }
                { nav_button(t("nav.my_games"), NavTarget::FavoritesOnly, p.view == ViewState::FavoritesOnly, &p.on_navigate) }
            </nav>
        </header>
    }
}
