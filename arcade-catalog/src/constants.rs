//! Fixed names shared by the browser front end and the QA harness.
//!
//! The catalog location and the favorites key are part of the deployed
//! contract with existing browsers, so they only change through code review.

// Storage keys -------------------------------------------------------------
pub const FAVORITES_STORAGE_KEY: &str = "nova_favorites";
pub const LOCALE_STORAGE_KEY: &str = "nova.locale";

// Assets -------------------------------------------------------------------
pub const CATALOG_ASSET_PATH: &str = "data/games.json";

// Viewer -------------------------------------------------------------------
pub const VIEWER_FRAME_ALLOW: &str = "autoplay; fullscreen; pointer-lock";
pub const VIEWER_CONTAINER_ID: &str = "game-container";
