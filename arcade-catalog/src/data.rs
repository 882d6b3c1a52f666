use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Game categories as they appear in the catalog file.
///
/// `All` is the filter sentinel used by the category bar. Catalog records
/// are expected to carry one of the concrete categories.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    All,
    Action,
    Puzzle,
    Arcade,
    Strategy,
    Sports,
}

impl Category {
    /// Every option offered by the category bar, sentinel first.
    pub const OPTIONS: [Self; 6] = [
        Self::All,
        Self::Action,
        Self::Puzzle,
        Self::Arcade,
        Self::Strategy,
        Self::Sports,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Action => "Action",
            Self::Puzzle => "Puzzle",
            Self::Arcade => "Arcade",
            Self::Strategy => "Strategy",
            Self::Sports => "Sports",
        }
    }

    /// Translation key for the category label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::All => "category.all",
            Self::Action => "category.action",
            Self::Puzzle => "category.puzzle",
            Self::Arcade => "category.arcade",
            Self::Strategy => "category.strategy",
            Self::Sports => "category.sports",
        }
    }

    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::All)
    }

    /// True when a record of category `other` passes this selection.
    #[must_use]
    pub fn admits(self, other: Self) -> bool {
        self.is_sentinel() || self == other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single playable entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub thumbnail: String,
    #[serde(default)]
    pub iframe_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl GameRecord {
    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problems the QA harness reports about a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateId(String),
    SentinelCategory(String),
    MissingContent(String),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate id '{id}'"),
            Self::SentinelCategory(id) => write!(f, "'{id}' uses the All sentinel as its category"),
            Self::MissingContent(id) => write!(f, "'{id}' has no playable content reference"),
        }
    }
}

/// Ordered, read-only list of games loaded once per session.
///
/// Cloning is cheap; the records are shared.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Rc<[GameRecord]>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.games, &other.games) || self.games == other.games
    }
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        Self {
            games: games.into(),
        }
    }

    /// Parse the catalog payload: a JSON array of game records.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an array of well-formed records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<GameRecord> = serde_json::from_str(json)?;
        Ok(Self::from_games(games))
    }

    #[must_use]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Shape problems worth flagging in QA. The app itself never rejects these.
    #[must_use]
    pub fn lint(&self) -> Vec<CatalogIssue> {
        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        for game in self.games.iter() {
            if !seen.insert(game.id.as_str()) {
                issues.push(CatalogIssue::DuplicateId(game.id.clone()));
            }
            if game.category.is_sentinel() {
                issues.push(CatalogIssue::SentinelCategory(game.id.clone()));
            }
            if game.iframe_url.trim().is_empty() {
                issues.push(CatalogIssue::MissingContent(game.id.clone()));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "neon-drift",
            "title": "Neon Drift",
            "description": "Race through a glowing city.",
            "category": "Action",
            "thumbnail": "https://example.test/neon.jpg",
            "iframeUrl": "https://example.test/neon/",
            "featured": true
        },
        {
            "id": "tile-logic",
            "title": "Tile Logic",
            "description": "Slide tiles into place.",
            "category": "Puzzle",
            "thumbnail": "https://example.test/tile.jpg",
            "iframeUrl": ""
        }
    ]"#;

    #[test]
    fn catalog_parses_records_in_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.games()[0].id, "neon-drift");
        assert!(catalog.games()[0].featured);
        assert_eq!(catalog.games()[1].category, Category::Puzzle);
        assert!(!catalog.games()[1].featured, "absent flag defaults to false");
    }

    #[test]
    fn catalog_rejects_malformed_payloads() {
        assert!(matches!(
            Catalog::from_json("{\"games\": []}"),
            Err(CatalogError::Json(_))
        ));
        assert!(Catalog::from_json("not json").is_err());
        let bad_category = r#"[{"id":"x","title":"X","description":"","category":"Racing","thumbnail":"","iframeUrl":""}]"#;
        assert!(Catalog::from_json(bad_category).is_err());
    }

    #[test]
    fn find_looks_up_by_id() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(
            catalog.find("tile-logic").map(|g| g.title.as_str()),
            Some("Tile Logic")
        );
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn lint_flags_duplicates_sentinels_and_missing_content() {
        let mut games = Catalog::from_json(SAMPLE).unwrap().games().to_vec();
        let mut dup = games[0].clone();
        dup.category = Category::All;
        games.push(dup);
        let issues = Catalog::from_games(games).lint();
        assert!(issues.contains(&CatalogIssue::MissingContent("tile-logic".into())));
        assert!(issues.contains(&CatalogIssue::DuplicateId("neon-drift".into())));
        assert!(issues.contains(&CatalogIssue::SentinelCategory("neon-drift".into())));
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn category_admits_matches_and_sentinel() {
        assert!(Category::All.admits(Category::Sports));
        assert!(Category::Puzzle.admits(Category::Puzzle));
        assert!(!Category::Puzzle.admits(Category::Action));
        assert_eq!(Category::OPTIONS.len(), 6);
        assert_eq!(Category::Strategy.to_string(), "Strategy");
    }

    #[test]
    fn record_match_is_case_insensitive_on_title_or_description() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let neon = &catalog.games()[0];
        assert!(neon.matches_lowercase("neon"));
        assert!(neon.matches_lowercase("glowing"));
        assert!(neon.matches_lowercase(""));
        assert!(!neon.matches_lowercase("tiles"));
    }
}
