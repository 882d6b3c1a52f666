mod handlers;

pub use handlers::AppHandlers;

use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::app::state::AppState;
use crate::catalog::{LoadState, SessionSnapshot, ViewState};
use crate::components::footer::Footer;
use crate::components::loading::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::components::ui::{CategoryBar, FeaturedSection, GameGrid, GamePlayer};
use crate::i18n::{self, t};
use std::collections::BTreeMap;
use yew::prelude::*;

fn grid_title(snapshot: &SessionSnapshot) -> String {
    if snapshot.view == ViewState::FavoritesOnly {
        return t("grid.favorites_title");
    }
    let category = t(snapshot.category.i18n_key());
    let mut args = BTreeMap::new();
    args.insert("category", category.as_str());
    i18n::tr("grid.title", Some(&args))
}

fn render_player(state: &AppState, snapshot: &SessionSnapshot, handlers: &AppHandlers) -> Html {
    let Some(game) = snapshot.active.clone() else {
        return Html::default();
    };
    let viewer = &state.viewer.0;
    let notice = viewer.notice().map(|notice| {
        let mut args = BTreeMap::new();
        args.insert("reason", notice.reason.as_str());
        AttrValue::from(i18n::tr("player.fullscreen_failed", Some(&args)))
    });
    html! {
        <GamePlayer
            {game}
            fullscreen={viewer.is_fullscreen()}
            pending={viewer.pending().is_some()}
            {notice}
            on_close={handlers.close_player.clone()}
            on_toggle_fullscreen={handlers.toggle_fullscreen.clone()}
            on_dismiss_notice={handlers.dismiss_notice.clone()}
        />
    }
}

/// Render the whole shell from one snapshot of the session.
pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let snapshot = state.session.snapshot();
    if snapshot.loading {
        return html! { <LoadingScreen /> };
    }

    let failed = (snapshot.load_state == LoadState::Failed).then(|| {
        html! { <p class="load-failed" role="alert">{ t("app.load_failed") }</p> }
    });
    let featured = snapshot.show_featured.then(|| {
        html! {
            <FeaturedSection
                games={snapshot.featured.clone()}
                favorites={snapshot.favorites.clone()}
                on_open={handlers.select_game.clone()}
                on_toggle_favorite={handlers.toggle_favorite.clone()}
            />
        }
    });

    html! {
        <div class="arcade" data-view={snapshot.view.label()}>
            <style>{ visible_focus_css() }</style>
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <Navbar
                view={snapshot.view}
                query={AttrValue::from(snapshot.query.clone())}
                on_search={handlers.search_change.clone()}
                on_navigate={handlers.navigate.clone()}
            />
            <main id="main" role="main">
                { for failed }
                { for featured }
                <CategoryBar selected={snapshot.category} on_select={handlers.category_select.clone()} />
                <GameGrid
                    title={AttrValue::from(grid_title(&snapshot))}
                    games={snapshot.visible.clone()}
                    favorites={snapshot.favorites.clone()}
                    show_reset={snapshot.show_reset}
                    on_open={handlers.select_game.clone()}
                    on_toggle_favorite={handlers.toggle_favorite.clone()}
                    on_reset={handlers.reset_filters.clone()}
                />
            </main>
            <Footer
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
            />
            <p id={STATUS_REGION_ID} class="sr-only" aria-live="polite"></p>
            { render_player(state, &snapshot, handlers) }
        </div>
    }
}
