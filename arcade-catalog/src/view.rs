use crate::data::GameRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    Browsing,
    ViewingDetail,
    FavoritesOnly,
}

impl ViewState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::ViewingDetail => "viewing-detail",
            Self::FavoritesOnly => "favorites-only",
        }
    }
}

/// Screens reachable through `navigate`. The detail screen is only
/// reachable through `select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    Browsing,
    FavoritesOnly,
}

impl From<NavTarget> for ViewState {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Browsing => Self::Browsing,
            NavTarget::FavoritesOnly => Self::FavoritesOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        action: &'static str,
        from: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Browsing,
    FavoritesOnly,
    Detail(GameRecord),
}

/// Screen state machine. The active game lives inside the detail screen,
/// so it is present exactly when the state is `ViewingDetail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    screen: Screen,
}

impl Default for ViewController {
    fn default() -> Self {
        Self {
            screen: Screen::Browsing,
        }
    }
}

impl ViewController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ViewState {
        match self.screen {
            Screen::Browsing => ViewState::Browsing,
            Screen::FavoritesOnly => ViewState::FavoritesOnly,
            Screen::Detail(_) => ViewState::ViewingDetail,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Option<&GameRecord> {
        match &self.screen {
            Screen::Detail(game) => Some(game),
            Screen::Browsing | Screen::FavoritesOnly => None,
        }
    }

    /// Open `game` in the viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is already open.
    pub fn select(&mut self, game: GameRecord) -> Result<(), ViewError> {
        if matches!(self.screen, Screen::Detail(_)) {
            return Err(self.invalid("select"));
        }
        log::debug!("view: {} -> viewing-detail ({})", self.state().label(), game.id);
        self.screen = Screen::Detail(game);
        Ok(())
    }

    /// Close the viewer and return to browsing.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is open.
    pub fn close(&mut self) -> Result<(), ViewError> {
        if !matches!(self.screen, Screen::Detail(_)) {
            return Err(self.invalid("close"));
        }
        log::debug!("view: viewing-detail -> browsing");
        self.screen = Screen::Browsing;
        Ok(())
    }

    /// Switch between the browse and favorites screens.
    ///
    /// # Errors
    ///
    /// Returns an error while a game is open.
    pub fn navigate(&mut self, target: NavTarget) -> Result<(), ViewError> {
        if matches!(self.screen, Screen::Detail(_)) {
            return Err(self.invalid("navigate"));
        }
        self.screen = match target {
            NavTarget::Browsing => Screen::Browsing,
            NavTarget::FavoritesOnly => Screen::FavoritesOnly,
        };
        Ok(())
    }

    const fn invalid(&self, action: &'static str) -> ViewError {
        ViewError::InvalidTransition {
            action,
            from: self.state().label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    fn game(id: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            category: Category::Arcade,
            thumbnail: String::new(),
            iframe_url: format!("https://example.test/{id}"),
            featured: false,
        }
    }

    fn assert_active_invariant(vc: &ViewController) {
        assert_eq!(
            vc.active().is_some(),
            vc.state() == ViewState::ViewingDetail,
            "active game must be present exactly in viewing-detail"
        );
    }

    #[test]
    fn starts_browsing_without_active_game() {
        let vc = ViewController::new();
        assert_eq!(vc.state(), ViewState::Browsing);
        assert_active_invariant(&vc);
    }

    #[test]
    fn select_and_close_round_trip() {
        let mut vc = ViewController::new();
        vc.select(game("a")).unwrap();
        assert_eq!(vc.state(), ViewState::ViewingDetail);
        assert_eq!(vc.active().map(|g| g.id.as_str()), Some("a"));
        assert_active_invariant(&vc);

        vc.close().unwrap();
        assert_eq!(vc.state(), ViewState::Browsing);
        assert!(vc.active().is_none());
    }

    #[test]
    fn select_from_favorites_then_close_lands_on_browsing() {
        let mut vc = ViewController::new();
        vc.navigate(NavTarget::FavoritesOnly).unwrap();
        vc.select(game("b")).unwrap();
        vc.close().unwrap();
        assert_eq!(vc.state(), ViewState::Browsing);
    }

    #[test]
    fn invalid_transitions_leave_state_untouched() {
        let mut vc = ViewController::new();
        assert_eq!(
            vc.close(),
            Err(ViewError::InvalidTransition {
                action: "close",
                from: "browsing"
            })
        );
        vc.select(game("a")).unwrap();
        let before = vc.clone();
        assert!(vc.select(game("b")).is_err());
        assert!(vc.navigate(NavTarget::FavoritesOnly).is_err());
        assert_eq!(vc, before);
        assert_active_invariant(&vc);
    }

    #[test]
    fn navigate_switches_between_list_screens() {
        let mut vc = ViewController::new();
        vc.navigate(NavTarget::FavoritesOnly).unwrap();
        assert_eq!(vc.state(), ViewState::FavoritesOnly);
        vc.navigate(NavTarget::Browsing).unwrap();
        assert_eq!(vc.state(), ViewState::Browsing);
        assert_eq!(ViewState::from(NavTarget::FavoritesOnly), ViewState::FavoritesOnly);
    }
}
