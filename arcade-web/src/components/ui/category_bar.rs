use crate::catalog::Category;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub selected: Category,
    pub on_select: Callback<Category>,
}

#[function_component(CategoryBar)]
pub fn category_bar(p: &Props) -> Html {
    html! {
        <div class="category-bar" role="group" aria-label={t("category.bar")}>
            { for Category::OPTIONS.iter().map(|&category| {
                let active = category == p.selected;
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(category))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("category-chip", active.then_some("is-active"))}
                        data-category={category.as_str()}
                        aria-pressed={if active { "true" } else { "false" }}
                        {onclick}
                    >
                        { t(category.i18n_key()) }
                    </button>
                }
            }) }
        </div>
    }
}
