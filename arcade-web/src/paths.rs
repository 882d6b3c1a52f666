//! URL helpers that respect the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/arcade` for a GitHub Pages
//! project site). Without it, paths are anchored at the site root.

use arcade_catalog::constants::CATALOG_ASSET_PATH;

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

/// Absolute URL for a static asset.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(PUBLIC_URL.unwrap_or(""), relative)
}

/// Where the one catalog fetch goes.
#[must_use]
pub fn catalog_url() -> String {
    asset_path(CATALOG_ASSET_PATH)
}

/// Basename for the router, or `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(PUBLIC_URL.unwrap_or(""))
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match normalize_base(base) {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
