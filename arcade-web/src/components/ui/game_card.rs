use crate::catalog::GameRecord;
use crate::i18n::{self, t};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: GameRecord,
    pub favorite: bool,
    pub on_open: Callback<String>,
    pub on_toggle_favorite: Callback<String>,
    #[prop_or_default]
    pub featured: bool,
}

fn titled(key: &str, title: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("title", title);
    i18n::tr(key, Some(&args))
}

/// Catalog tile. The favorite toggle sits beside the open button rather than
/// inside it, so toggling never opens the player.
#[function_component(GameCard)]
pub fn game_card(p: &Props) -> Html {
    let game = &p.game;
    let open = {
        let cb = p.on_open.clone();
        let id = game.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let toggle = {
        let cb = p.on_toggle_favorite.clone();
        let id = game.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let favorite_label = if p.favorite {
        titled("card.favorite_remove", &game.title)
    } else {
        titled("card.favorite_add", &game.title)
    };

    html! {
        <article
            class={classes!("game-card", p.featured.then_some("is-featured"))}
            data-game-id={game.id.clone()}
        >
            <button
                type="button"
                class="card-open"
                aria-label={titled("card.open", &game.title)}
                onclick={open}
            >
                <img src={game.thumbnail.clone()} alt="" loading="lazy" />
                if p.featured {
                    <span class="badge badge-featured">{ t("featured.badge") }</span>
                }
                <span class="badge badge-category">{ t(game.category.i18n_key()) }</span>
                <h3 class="card-title">{ &game.title }</h3>
                <p class="card-description">{ &game.description }</p>
                <span class="card-play" aria-hidden="true">{ t("card.play") }</span>
            </button>
            <button
                type="button"
                class={classes!("card-favorite", p.favorite.then_some("is-favorite"))}
                aria-pressed={if p.favorite { "true" } else { "false" }}
                aria-label={favorite_label}
                onclick={toggle}
            >
                { if p.favorite { "\u{2665}" } else { "\u{2661}" } }
            </button>
        </article>
    }
}
