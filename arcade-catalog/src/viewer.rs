//! Embedded viewer model.
//!
//! The browser owns the real fullscreen state; [`ViewerState`] mirrors it
//! from platform notifications and remembers the last failed request so the
//! UI can show a notice without closing the viewer.

use crate::data::GameRecord;
use serde::Serialize;

/// What the viewer frame should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource<'a> {
    Ready(&'a str),
    Missing,
}

impl<'a> ContentSource<'a> {
    /// Empty or whitespace-only references render the missing-content panel.
    #[must_use]
    pub fn for_record(game: &'a GameRecord) -> Self {
        let url = game.iframe_url.trim();
        if url.is_empty() {
            Self::Missing
        } else {
            Self::Ready(url)
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Direction of a pending fullscreen request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// Transient, dismissible notice shown when fullscreen is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullscreenNotice {
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewerState {
    fullscreen: bool,
    pending: Option<FullscreenRequest>,
    notice: Option<FullscreenNotice>,
}

impl ViewerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub const fn pending(&self) -> Option<FullscreenRequest> {
        self.pending
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&FullscreenNotice> {
        self.notice.as_ref()
    }

    /// Record a toggle request and return which platform call to make.
    ///
    /// Returns `None` while an earlier request is still unresolved.
    pub fn request_toggle(&mut self) -> Option<FullscreenRequest> {
        if self.pending.is_some() {
            return None;
        }
        let request = if self.fullscreen {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        };
        self.pending = Some(request);
        self.notice = None;
        Some(request)
    }

    /// Apply a platform fullscreen-change notification.
    pub fn on_platform_change(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        self.pending = None;
    }

    /// The platform refused the request. The viewer stays open.
    pub fn on_request_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("Fullscreen request failed: {reason}");
        self.pending = None;
        self.notice = Some(FullscreenNotice { reason });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Drop per-game leftovers when a player opens or closes. The
    /// fullscreen flag is left to the platform.
    pub fn clear_transient(&mut self) {
        self.pending = None;
        self.notice = None;
    }
}
