use super::Props;
use super::interactions::PlayerCallbacks;
use crate::catalog::ContentSource;
use crate::catalog::constants::{VIEWER_CONTAINER_ID, VIEWER_FRAME_ALLOW};
use crate::i18n::t;
use yew::prelude::*;

fn content(p: &Props) -> Html {
    match ContentSource::for_record(&p.game) {
        ContentSource::Ready(url) => html! {
            <iframe
                class="game-frame"
                src={url.to_string()}
                title={p.game.title.clone()}
                allow={VIEWER_FRAME_ALLOW}
                allowfullscreen=true
            />
        },
        ContentSource::Missing => html! {
            <div class="game-missing" role="alert" data-testid="game-missing">
                <p class="game-missing-title">{ t("player.missing_title") }</p>
                <p>{ t("player.missing_hint") }</p>
            </div>
        },
    }
}

pub(super) fn render(p: &Props, overlay_ref: &NodeRef, cb: &PlayerCallbacks) -> Html {
    let fullscreen_label = if p.fullscreen {
        t("player.exit_fullscreen")
    } else {
        t("player.fullscreen")
    };
    let notice = p.notice.as_ref().map(|message| {
        html! {
            <div class="player-notice" role="alert">
                <span>{ message.clone() }</span>
                <button type="button" class="notice-dismiss" onclick={cb.dismiss_notice.clone()}>
                    { t("player.dismiss") }
                </button>
            </div>
        }
    });

    html! {
        <div
            ref={overlay_ref.clone()}
            class="player-overlay"
            role="dialog"
            aria-modal="true"
            aria-labelledby="player-title"
            tabindex="-1"
            data-game-id={p.game.id.clone()}
            onkeydown={cb.keydown.clone()}
        >
            <div class="player-bar">
                <button type="button" class="player-back" aria-label={t("player.back")} onclick={cb.close.clone()}>
                    { "\u{2190}" }
                </button>
                <div class="player-heading">
                    <h2 id="player-title">{ &p.game.title }</h2>
                    <span class="badge badge-category">{ t(p.game.category.i18n_key()) }</span>
                </div>
                <button
                    type="button"
                    class="player-fullscreen"
                    aria-pressed={if p.fullscreen { "true" } else { "false" }}
                    aria-busy={p.pending.then_some("true")}
                    onclick={cb.toggle_fullscreen.clone()}
                >
                    { fullscreen_label }
                </button>
                <button type="button" class="player-close" aria-label={t("player.close")} onclick={cb.close.clone()}>
                    { "\u{2715}" }
                </button>
            </div>
            { for notice }
            <div id={VIEWER_CONTAINER_ID} class="game-container">
                { content(p) }
            </div>
        </div>
    }
}
