use super::GameCard;
use crate::catalog::{FavoritesSet, GameRecord};
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub games: Vec<GameRecord>,
    pub favorites: FavoritesSet,
    pub on_open: Callback<String>,
    pub on_toggle_favorite: Callback<String>,
}

#[function_component(FeaturedSection)]
pub fn featured_section(p: &Props) -> Html {
    html! {
        <section class="featured" aria-labelledby="featured-title">
            <h2 id="featured-title">{ t("featured.title") }</h2>
            <div class="featured-list">
                { for p.games.iter().map(|game| html! {
                    <GameCard
                        key={game.id.clone()}
                        game={game.clone()}
                        favorite={p.favorites.contains(&game.id)}
                        on_open={p.on_open.clone()}
                        on_toggle_favorite={p.on_toggle_favorite.clone()}
                        featured=true
                    />
                }) }
            </div>
        </section>
    }
}
