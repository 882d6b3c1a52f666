//! Browser adapters for the catalog engine
//!
//! Provides the one-shot catalog fetch and the `localStorage`-backed
//! favorites store, and re-exports the core catalog types.

pub use arcade_catalog::*;

use thiserror::Error;

/// Favorites storage backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage access failed: {0}")]
    Access(String),
}

#[cfg(target_arch = "wasm32")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    crate::dom::local_storage()
        .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))
}

impl KeyValueStore for LocalStore {
    type Error = StorageError;

    #[cfg(target_arch = "wasm32")]
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        browser_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Access(crate::dom::js_error_message(&err)))
    }

    #[cfg(target_arch = "wasm32")]
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        browser_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Access(crate::dom::js_error_message(&err)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_item(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Err(StorageError::Unavailable(String::from("no browser window")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_item(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Err(StorageError::Unavailable(String::from("no browser window")))
    }
}

/// Favorites store bound to `localStorage`, already hydrated.
#[must_use]
pub fn hydrated_favorites() -> FavoritesStore<LocalStore> {
    let mut store = FavoritesStore::new(LocalStore);
    store.hydrate();
    store
}

/// Fetch and parse the catalog. Called once per page load.
///
/// # Errors
/// Returns [`CatalogError::Network`] when the request fails,
/// [`CatalogError::Status`] for non-2xx responses and
/// [`CatalogError::Json`] for malformed payloads.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_catalog(url: &str) -> Result<Catalog, CatalogError> {
    use wasm_bindgen_futures::JsFuture;

    let network = |err: wasm_bindgen::JsValue| CatalogError::Network(crate::dom::js_error_message(&err));
    let response = crate::dom::fetch_response(url).await.map_err(network)?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| CatalogError::Network(String::from("response body is not text")))?;
    Catalog::from_json(&body)
}
