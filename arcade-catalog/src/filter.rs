//! Visible-result computation.
//!
//! Everything here is a pure function of the catalog and the current
//! selection, so the result can be recomputed on every render.

use crate::data::{Category, GameRecord};
use crate::favorites::FavoritesSet;
use crate::view::ViewState;

/// The inputs that decide which records are shown.
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria<'a> {
    pub query: &'a str,
    pub category: Category,
    pub view: ViewState,
    pub favorites: &'a FavoritesSet,
}

impl FilterCriteria<'_> {
    fn admits(&self, game: &GameRecord, needle: &str) -> bool {
        let view_gate =
            self.view != ViewState::FavoritesOnly || self.favorites.contains(&game.id);
        game.matches_lowercase(needle) && self.category.admits(game.category) && view_gate
    }
}

/// Records passing the text, category and view gates, in catalog order.
#[must_use]
pub fn compute_visible<'c>(
    catalog: &'c [GameRecord],
    criteria: &FilterCriteria<'_>,
) -> Vec<&'c GameRecord> {
    let needle = criteria.query.to_lowercase();
    catalog
        .iter()
        .filter(|game| criteria.admits(game, &needle))
        .collect()
}

/// Records flagged as featured, in catalog order. Ignores every filter.
#[must_use]
pub fn featured(catalog: &[GameRecord]) -> Vec<&GameRecord> {
    catalog.iter().filter(|game| game.featured).collect()
}

/// The featured section only shows on the unfiltered landing state.
#[must_use]
pub fn featured_section_visible(view: ViewState, query: &str, category: Category) -> bool {
    view == ViewState::Browsing && query.is_empty() && category.is_sentinel()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(
        id: &str,
        title: &str,
        description: &str,
        category: Category,
        featured: bool,
    ) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            thumbnail: String::new(),
            iframe_url: String::new(),
            featured,
        }
    }

    fn catalog() -> Vec<GameRecord> {
        vec![
            game("a", "Block Party", "Stack falling blocks", Category::Puzzle, true),
            game("b", "Street Brawl", "Fight your way up", Category::Action, false),
            game("c", "Goal Rush", "Arcade football with BLOCKS of fun", Category::Sports, true),
        ]
    }

    fn ids(list: &[&GameRecord]) -> Vec<String> {
        list.iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn unfiltered_browse_returns_whole_catalog() {
        let games = catalog();
        let favorites = FavoritesSet::new();
        let criteria = FilterCriteria {
            query: "",
            category: Category::All,
            view: ViewState::Browsing,
            favorites: &favorites,
        };
        assert_eq!(ids(&compute_visible(&games, &criteria)), ["a", "b", "c"]);
    }

    #[test]
    fn query_matches_title_or_description_case_insensitively() {
        let games = catalog();
        let favorites = FavoritesSet::new();
        let criteria = FilterCriteria {
            query: "bLoCk",
            category: Category::All,
            view: ViewState::Browsing,
            favorites: &favorites,
        };
        assert_eq!(ids(&compute_visible(&games, &criteria)), ["a", "c"]);
    }

    #[test]
    fn category_and_query_gates_combine() {
        let games = catalog();
        let favorites = FavoritesSet::new();
        let criteria = FilterCriteria {
            query: "block",
            category: Category::Sports,
            view: ViewState::Browsing,
            favorites: &favorites,
        };
        assert_eq!(ids(&compute_visible(&games, &criteria)), ["c"]);
    }

    #[test]
    fn favorites_view_requires_membership() {
        let games = catalog();
        let favorites: FavoritesSet = ["c", "zz-unknown"].into_iter().collect();
        let criteria = FilterCriteria {
            query: "",
            category: Category::All,
            view: ViewState::FavoritesOnly,
            favorites: &favorites,
        };
        assert_eq!(ids(&compute_visible(&games, &criteria)), ["c"]);

        let detail = FilterCriteria {
            view: ViewState::ViewingDetail,
            ..criteria
        };
        assert_eq!(
            compute_visible(&games, &detail).len(),
            3,
            "only favorites-only gates on membership"
        );
    }

    #[test]
    fn featured_ignores_filters() {
        let games = catalog();
        assert_eq!(ids(&featured(&games)), ["a", "c"]);
        assert!(featured(&[]).is_empty());
    }

    #[test]
    fn featured_section_only_on_landing_state() {
        assert!(featured_section_visible(ViewState::Browsing, "", Category::All));
        assert!(!featured_section_visible(ViewState::Browsing, "a", Category::All));
        assert!(!featured_section_visible(ViewState::Browsing, " ", Category::All));
        assert!(!featured_section_visible(ViewState::Browsing, "", Category::Arcade));
        assert!(!featured_section_visible(ViewState::FavoritesOnly, "", Category::All));
        assert!(!featured_section_visible(ViewState::ViewingDetail, "", Category::All));
    }
}
