use arcade_catalog::{
    Catalog, Category, FavoritesSet, FilterCriteria, GameRecord, ViewState, compute_visible,
    featured_section_visible,
};

fn catalog() -> Catalog {
    let specs = [
        ("p1", "Puzzle Path", "Connect the dots", Category::Puzzle),
        ("a1", "Laser Run", "Dodge lasers at speed", Category::Action),
        ("r1", "Pixel Invaders", "Classic arcade shooter", Category::Arcade),
        ("s1", "Kingdom Lines", "Plan your PATH to victory", Category::Strategy),
        ("sp1", "Slam Dunk", "Arcade basketball", Category::Sports),
        ("p2", "Mirror Maze", "Reflect light through a maze", Category::Puzzle),
    ];
    Catalog::from_games(
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (id, title, description, category))| GameRecord {
                id: id.into(),
                title: title.into(),
                description: description.into(),
                category,
                thumbnail: String::new(),
                iframe_url: format!("https://example.test/{id}"),
                featured: i % 2 == 0,
            })
            .collect(),
    )
}

fn is_subsequence(visible: &[&GameRecord], all: &[GameRecord]) -> bool {
    let mut rest = all.iter();
    visible
        .iter()
        .all(|wanted| rest.by_ref().any(|game| game.id == wanted.id))
}

/// Membership written out record by record, independent of the filter code.
fn expected_ids<'c>(
    all: &'c [GameRecord],
    query: &str,
    category: Category,
    view: ViewState,
    favorites: &FavoritesSet,
) -> Vec<&'c str> {
    let needle = query.to_lowercase();
    all.iter()
        .filter(|g| {
            query.is_empty()
                || g.title.to_lowercase().contains(&needle)
                || g.description.to_lowercase().contains(&needle)
        })
        .filter(|g| category == Category::All || g.category == category)
        .filter(|g| view != ViewState::FavoritesOnly || favorites.contains(&g.id))
        .map(|g| g.id.as_str())
        .collect()
}

#[test]
fn output_is_ordered_subsequence_for_every_combination() {
    let catalog = catalog();
    let favorites: FavoritesSet = ["p2", "a1", "ghost"].into_iter().collect();
    let views = [
        ViewState::Browsing,
        ViewState::FavoritesOnly,
        ViewState::ViewingDetail,
    ];
    for view in views {
        for category in Category::OPTIONS {
            for query in ["", "path", "ARCADE", "zz", " "] {
                let criteria = FilterCriteria {
                    query,
                    category,
                    view,
                    favorites: &favorites,
                };
                let visible = compute_visible(catalog.games(), &criteria);
                assert!(is_subsequence(&visible, catalog.games()));
                if view == ViewState::FavoritesOnly {
                    assert!(visible.iter().all(|g| favorites.contains(&g.id)));
                }
                let ids: Vec<&str> = visible.iter().map(|g| g.id.as_str()).collect();
                assert_eq!(
                    ids,
                    expected_ids(catalog.games(), query, category, view, &favorites),
                    "view {view:?}, category {category}, query '{query}'"
                );
            }
        }
    }
}

#[test]
fn matching_records_are_never_dropped() {
    let catalog = catalog();
    let favorites = FavoritesSet::new();
    let criteria = FilterCriteria {
        query: "path",
        category: Category::All,
        view: ViewState::Browsing,
        favorites: &favorites,
    };
    let ids: Vec<&str> = compute_visible(catalog.games(), &criteria)
        .into_iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(ids, ["p1", "s1"], "title hit and description hit both stay");
}

#[test]
fn unfiltered_browse_is_identity() {
    let catalog = catalog();
    let favorites = FavoritesSet::new();
    let criteria = FilterCriteria {
        query: "",
        category: Category::All,
        view: ViewState::Browsing,
        favorites: &favorites,
    };
    let visible = compute_visible(catalog.games(), &criteria);
    let expected: Vec<&GameRecord> = catalog.games().iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn query_is_used_literally() {
    let catalog = catalog();
    let favorites = FavoritesSet::new();
    let criteria = FilterCriteria {
        query: "path ",
        category: Category::All,
        view: ViewState::Browsing,
        favorites: &favorites,
    };
    let ids: Vec<&str> = compute_visible(catalog.games(), &criteria)
        .into_iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(ids, ["s1"], "trailing space only matches 'PATH to'");
}

#[test]
fn featured_visibility_truth_table() {
    let views = [
        ViewState::Browsing,
        ViewState::FavoritesOnly,
        ViewState::ViewingDetail,
    ];
    for view in views {
        for category in Category::OPTIONS {
            for query in ["", "x"] {
                let expected =
                    view == ViewState::Browsing && query.is_empty() && category == Category::All;
                assert_eq!(featured_section_visible(view, query, category), expected);
            }
        }
    }
}
