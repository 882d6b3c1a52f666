use arcade_web::catalog::{Catalog, Category, FavoritesSet, GameRecord};
use arcade_web::components::ui::{category_bar, featured_section, game_grid};
use arcade_web::components::ui::{CategoryBar, FeaturedSection, GameGrid};
use arcade_web::i18n;
use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;

const BUNDLED: &str = include_str!("../static/data/games.json");

fn bundled_games() -> Vec<GameRecord> {
    Catalog::from_json(BUNDLED)
        .expect("bundled catalog parses")
        .games()
        .to_vec()
}

fn favorites(ids: &[&str]) -> FavoritesSet {
    let mut set = FavoritesSet::new();
    for id in ids {
        set.toggle(id);
    }
    set
}

#[test]
fn grid_renders_one_card_per_game() {
    i18n::set_lang("en");
    let games = bundled_games();
    let count = games.len();
    let props = game_grid::Props {
        title: AttrValue::from("All Games"),
        games,
        favorites: favorites(&["neon-drift"]),
        show_reset: false,
        on_open: Callback::noop(),
        on_toggle_favorite: Callback::noop(),
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GameGrid>::with_props(props).render());
    assert_eq!(html.matches("data-game-id=").count(), count, "{html}");
    assert!(html.contains(&format!("{count} Results")), "{html}");
    assert_eq!(html.matches("is-favorite").count(), 1, "{html}");
}

#[test]
fn empty_grid_shows_reset_only_when_asked() {
    i18n::set_lang("en");
    let props = |show_reset| game_grid::Props {
        title: AttrValue::from("Sports Games"),
        games: Vec::new(),
        favorites: FavoritesSet::new(),
        show_reset,
        on_open: Callback::noop(),
        on_toggle_favorite: Callback::noop(),
        on_reset: Callback::noop(),
    };
    let with_reset = block_on(LocalServerRenderer::<GameGrid>::with_props(props(true)).render());
    assert!(with_reset.contains("No games found"), "{with_reset}");
    assert!(with_reset.contains("Show All Games"), "{with_reset}");
    assert!(with_reset.contains("0 Results"), "{with_reset}");

    let without = block_on(LocalServerRenderer::<GameGrid>::with_props(props(false)).render());
    assert!(!without.contains("Show All Games"), "{without}");
}

#[test]
fn featured_section_lists_only_featured_games() {
    i18n::set_lang("en");
    let featured: Vec<GameRecord> = bundled_games().into_iter().filter(|g| g.featured).collect();
    assert!(!featured.is_empty());
    let expected = featured.len();
    let props = featured_section::Props {
        games: featured,
        favorites: FavoritesSet::new(),
        on_open: Callback::noop(),
        on_toggle_favorite: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FeaturedSection>::with_props(props).render());
    assert!(html.contains("Featured Hits"), "{html}");
    assert_eq!(html.matches("badge-featured").count(), expected, "{html}");
}

#[test]
fn category_bar_translates_labels() {
    i18n::set_lang("es");
    let props = category_bar::Props {
        selected: Category::All,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CategoryBar>::with_props(props).render());
    assert!(html.contains("data-category=\"Sports\""), "{html}");
    assert!(!html.contains("category.sports"), "untranslated key: {html}");
    i18n::set_lang("en");
}
