use super::{TestScenario, browsing, property};

const SCENARIOS: &[TestScenario] = &[
    TestScenario::new(
        "smoke",
        "Catalog loads and the landing grid shows every game",
        browsing::smoke,
    ),
    TestScenario::new(
        "featured-landing",
        "Featured section lists flagged games and hides once filtered",
        browsing::featured_landing,
    ),
    TestScenario::new(
        "search-miss",
        "A query with no matches empties the grid and reset restores it",
        browsing::search_miss,
    ),
    TestScenario::new(
        "favorites-view",
        "My Games shows exactly the favorited games",
        browsing::favorites_view,
    ),
    TestScenario::new(
        "player-lifecycle",
        "Opening and closing the player moves through the view states",
        browsing::player_lifecycle,
    ),
    TestScenario::new(
        "favorites-persistence",
        "Favorites survive into a new session through storage",
        browsing::favorites_persistence,
    ),
    TestScenario::new(
        "load-failure",
        "A broken catalog leaves an empty, usable session",
        browsing::load_failure,
    ),
    TestScenario::new(
        "catalog-lint",
        "Catalog ids are unique and categories are concrete",
        browsing::catalog_lint,
    ),
    TestScenario::new(
        "property-sweep",
        "Seeded random filters respect the filter engine invariants",
        property::property_sweep,
    ),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let wanted = name.trim().to_ascii_lowercase();
    SCENARIOS.iter().copied().find(|s| s.key == wanted)
}

/// Expand `all` into every registered scenario, keeping explicit names.
pub fn expand_scenarios(names: &[String]) -> Vec<String> {
    if names.iter().any(|n| n == "all") {
        return SCENARIOS.iter().map(|s| s.key.to_string()).collect();
    }
    names.to_vec()
}
