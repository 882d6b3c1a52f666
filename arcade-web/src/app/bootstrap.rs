#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::catalog::{ArcadeSession, Catalog, CatalogError, FavoritesSet};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Settle the startup fetch. Nothing else can touch the session while the
/// loading screen is up, so it is rebuilt from the hydrated favorites.
#[cfg(any(target_arch = "wasm32", test))]
fn settled_session(
    favorites: &FavoritesSet,
    result: Result<Catalog, CatalogError>,
) -> ArcadeSession {
    let mut next = ArcadeSession::new(favorites.clone());
    next.finish_load(result);
    next
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let session = app_state.session.clone();
    let favorites = app_state.favorites.clone();

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let url = crate::paths::catalog_url();
            log::debug!("Fetching catalog from {url}");
            let result = crate::catalog::load_catalog(&url).await;
            let next = settled_session(favorites.borrow().set(), result);
            session.set(next);
        });
        || {}
    });
}
