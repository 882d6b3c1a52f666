use crate::i18n::{self, t};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    #[prop_or_else(current_year)]
    pub year: i32,
}

/// Calendar year for the copyright line.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Mean Gregorian year; only drifts within hours of New Year.
        const SECS_PER_YEAR: u64 = 31_556_952;
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        1970 + i32::try_from(secs / SECS_PER_YEAR).unwrap_or(0)
    }
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    let year = p.year.to_string();
    let mut args = BTreeMap::new();
    args.insert("year", year.as_str());
    let copyright = i18n::tr("footer.copyright", Some(&args));

    html! {
        <footer role="contentinfo" class="site-footer">
            <div class="footer-brand">
                <span class="logo-nova">{"NOVA"}</span>
                <span class="logo-arcade">{"ARCADE"}</span>
                <p>{ t("footer.tagline") }</p>
            </div>
            <nav class="footer-links" aria-label={t("footer.platform")}>
                <h3>{ t("footer.platform") }</h3>
                <ul>
                    <li><a href="#">{ t("footer.request") }</a></li>
                    <li><a href="#">{ t("footer.privacy") }</a></li>
                    <li><a href="#">{ t("footer.terms") }</a></li>
                </ul>
            </nav>
            <div class="footer-links">
                <h3>{ t("footer.community") }</h3>
                <ul>
                    <li><a href="https://discord.com" rel="noopener noreferrer" target="_blank">{"Discord"}</a></li>
                    <li><a href="https://x.com" rel="noopener noreferrer" target="_blank">{"X"}</a></li>
                </ul>
            </div>
            <div class="footer-lang">
                <label for="lang-select">{ t("nav.language") }</label>
                <select id="lang-select" onchange={on_change}>
                    { for i18n::locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                    }) }
                </select>
            </div>
            <p class="footer-copyright">{ copyright }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn footer_lists_locales_and_year() {
        crate::i18n::set_lang("en");
        let props = Props {
            current_lang: "es".into(),
            on_lang_change: Callback::noop(),
            year: 2031,
        };
        let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
        assert!(html.contains("© 2031 NovaArcade"), "{html}");
        assert!(html.contains("Español"), "{html}");
        assert!(html.contains("English"), "{html}");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
