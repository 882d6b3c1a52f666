use crate::i18n::t;
use yew::prelude::*;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen" role="status" aria-live="polite" data-testid="loading">
            <span class="loading-spinner" aria-hidden="true"></span>
            <p class="loading-label">{ t("app.loading") }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn loading_screen_announces_itself() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<LoadingScreen>::new().render());
        assert!(html.contains("role=\"status\""), "{html}");
        assert!(html.contains("Initialising NovaArcade"), "{html}");
    }
}
