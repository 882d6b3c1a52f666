use super::GameCard;
use crate::catalog::{FavoritesSet, GameRecord};
use crate::i18n::{count_label, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub games: Vec<GameRecord>,
    pub favorites: FavoritesSet,
    pub show_reset: bool,
    pub on_open: Callback<String>,
    pub on_toggle_favorite: Callback<String>,
    pub on_reset: Callback<()>,
}

#[function_component(GameGrid)]
pub fn game_grid(p: &Props) -> Html {
    let body = if p.games.is_empty() {
        let reset = {
            let cb = p.on_reset.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        html! {
            <div class="empty-state" data-testid="empty-state">
                <h3>{ t("empty.title") }</h3>
                <p>{ t("empty.hint") }</p>
                if p.show_reset {
                    <button type="button" class="empty-reset" onclick={reset}>{ t("empty.reset") }</button>
                }
            </div>
        }
    } else {
        html! {
            <ul class="game-grid" role="list">
                { for p.games.iter().map(|game| html! {
                    <li key={game.id.clone()}>
                        <GameCard
                            game={game.clone()}
                            favorite={p.favorites.contains(&game.id)}
                            on_open={p.on_open.clone()}
                            on_toggle_favorite={p.on_toggle_favorite.clone()}
                        />
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <section class="catalog" aria-labelledby="grid-title">
            <div class="grid-header">
                <h2 id="grid-title">{ p.title.clone() }</h2>
                <span class="grid-count">{ count_label("grid.results", p.games.len()) }</span>
            </div>
            { body }
        </section>
    }
}
