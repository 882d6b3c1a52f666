use anyhow::{Context, Result, bail, ensure};
use arcade_catalog::{
    ArcadeEngine, ArcadeSession, Catalog, CatalogIssue, Category, ContentSource,
    FullscreenRequest, JsonSource, LoadState, MemoryStore, NavTarget, ViewState, ViewerState,
};

use super::ScenarioCtx;

/// Query that no reasonable catalog entry contains.
const MISS_QUERY: &str = "\u{1f47e}\u{1f47e}no-such-game\u{1f47e}";

fn ready_session(ctx: &ScenarioCtx<'_>) -> Result<ArcadeSession> {
    let mut engine = ArcadeEngine::new(JsonSource::new(ctx.catalog_json), MemoryStore::new());
    let session = engine.start_session();
    ensure!(
        session.load_state() == LoadState::Ready,
        "catalog did not load (state {:?})",
        session.load_state()
    );
    Ok(session)
}

fn ids(session: &ArcadeSession) -> Vec<String> {
    session.visible().iter().map(|g| g.id.clone()).collect()
}

fn catalog_ids(session: &ArcadeSession) -> Vec<String> {
    session.catalog().games().iter().map(|g| g.id.clone()).collect()
}

/// Index into a non-empty catalog chosen by seed.
fn pick(session: &ArcadeSession, seed: u64) -> Result<String> {
    let games = session.catalog().games();
    ensure!(!games.is_empty(), "catalog is empty");
    let index = usize::try_from(seed % games.len() as u64).unwrap_or(0);
    Ok(games[index].id.clone())
}

pub fn smoke(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let session = ready_session(ctx)?;
    let snapshot = session.snapshot();
    ensure!(!snapshot.loading, "loading flag still set");
    ensure!(snapshot.view == ViewState::Browsing, "landing view is {:?}", snapshot.view);
    ensure!(
        ids(&session) == catalog_ids(&session),
        "landing grid differs from the catalog"
    );
    ensure!(snapshot.result_count == session.catalog().len(), "result count mismatch");
    if ctx.verbose {
        log::info!("smoke: {} games loaded", snapshot.result_count);
    }
    Ok(())
}

pub fn featured_landing(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ready_session(ctx)?;
    let snapshot = session.snapshot();
    ensure!(snapshot.show_featured, "featured section hidden on landing");
    let expected: Vec<&str> = session
        .catalog()
        .games()
        .iter()
        .filter(|g| g.featured)
        .map(|g| g.id.as_str())
        .collect();
    ensure!(
        snapshot.featured_ids() == expected,
        "featured list {:?} != {:?}",
        snapshot.featured_ids(),
        expected
    );

    session.set_category(Category::Action);
    ensure!(!session.snapshot().show_featured, "featured shown with a category");
    session.set_category(Category::All);
    session.set_query("a");
    ensure!(!session.snapshot().show_featured, "featured shown with a query");
    session.set_query("");
    session
        .navigate(NavTarget::FavoritesOnly)
        .context("navigate to favorites")?;
    ensure!(!session.snapshot().show_featured, "featured shown on My Games");
    Ok(())
}

pub fn search_miss(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ready_session(ctx)?;
    session.set_query(MISS_QUERY);
    session.set_category(Category::Sports);
    let snapshot = session.snapshot();
    ensure!(snapshot.visible.is_empty(), "miss query still shows {:?}", snapshot.visible_ids());
    ensure!(snapshot.show_reset, "reset affordance missing");

    session.reset_filters();
    let snapshot = session.snapshot();
    ensure!(snapshot.query.is_empty(), "query survived reset");
    ensure!(snapshot.category == Category::All, "category survived reset");
    ensure!(snapshot.view == ViewState::Browsing, "reset left view {:?}", snapshot.view);
    ensure!(ids(&session) == catalog_ids(&session), "reset did not restore the grid");
    Ok(())
}

pub fn favorites_view(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ready_session(ctx)?;
    let id = pick(&session, ctx.seed)?;
    let before = session.favorites().clone();

    ensure!(session.toggle_favorite(&id), "first toggle should add '{id}'");
    session
        .navigate(NavTarget::FavoritesOnly)
        .context("navigate to favorites")?;
    ensure!(ids(&session) == vec![id.clone()], "My Games shows {:?}", ids(&session));

    ensure!(!session.toggle_favorite(&id), "second toggle should remove '{id}'");
    ensure!(*session.favorites() == before, "double toggle changed favorites");
    ensure!(session.visible().is_empty(), "My Games not empty after removal");
    ensure!(
        session.view() == ViewState::FavoritesOnly,
        "toggling changed the view"
    );
    Ok(())
}

pub fn player_lifecycle(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut session = ready_session(ctx)?;
    let id = pick(&session, ctx.seed)?;

    ensure!(session.select_by_id(&id).context("select")?, "'{id}' not found");
    ensure!(session.view() == ViewState::ViewingDetail, "player did not open");
    ensure!(
        session.active().map(|g| g.id.as_str()) == Some(id.as_str()),
        "active game mismatch"
    );
    if session.navigate(NavTarget::FavoritesOnly).is_ok() {
        bail!("navigation allowed while the player is open");
    }

    if let Some(game) = session.active() {
        let source = ContentSource::for_record(game);
        ensure!(
            source.is_missing() == game.iframe_url.trim().is_empty(),
            "content source disagrees with the record"
        );
    }

    let mut viewer = ViewerState::new();
    ensure!(viewer.request_toggle() == Some(FullscreenRequest::Enter), "enter not requested");
    viewer.on_request_failed("denied");
    ensure!(!viewer.is_fullscreen() && viewer.notice().is_some(), "failure not surfaced");
    ensure!(session.view() == ViewState::ViewingDetail, "fullscreen failure closed the player");

    session.close().context("close")?;
    ensure!(session.view() == ViewState::Browsing, "close did not return to browsing");
    ensure!(session.active().is_none(), "active game kept after close");
    ensure!(session.close().is_err(), "close accepted twice");
    Ok(())
}

pub fn favorites_persistence(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let storage = MemoryStore::new();
    let mut engine = ArcadeEngine::new(JsonSource::new(ctx.catalog_json), storage.clone());
    let mut session = engine.start_session();
    let id = pick(&session, ctx.seed)?;
    ensure!(engine.toggle_favorite(&mut session, &id), "toggle did not add '{id}'");

    let mut reopened = ArcadeEngine::new(JsonSource::new(ctx.catalog_json), storage);
    let next = reopened.start_session();
    ensure!(next.favorites().contains(&id), "'{id}' lost across sessions");
    ensure!(next.favorites().len() == 1, "unexpected favorites {:?}", next.favorites());
    Ok(())
}

pub fn load_failure(_ctx: &ScenarioCtx<'_>) -> Result<()> {
    let mut engine = ArcadeEngine::new(JsonSource::new("<html>404</html>"), MemoryStore::new());
    let mut session = engine.start_session();
    ensure!(session.load_state() == LoadState::Failed, "broken catalog not reported");
    ensure!(session.catalog().is_empty(), "catalog not empty after failure");
    for category in Category::OPTIONS {
        session.set_category(category);
        for target in [NavTarget::Browsing, NavTarget::FavoritesOnly] {
            session.navigate(target).context("navigate")?;
            let snapshot = session.snapshot();
            ensure!(!snapshot.loading, "still loading");
            ensure!(snapshot.visible.is_empty(), "games visible after failure");
        }
    }
    Ok(())
}

pub fn catalog_lint(ctx: &ScenarioCtx<'_>) -> Result<()> {
    let catalog = Catalog::from_json(ctx.catalog_json).context("parsing catalog")?;
    let mut errors = Vec::new();
    for issue in catalog.lint() {
        match issue {
            CatalogIssue::MissingContent(_) => log::warn!("catalog: {issue}"),
            CatalogIssue::DuplicateId(_) | CatalogIssue::SentinelCategory(_) => {
                errors.push(issue.to_string());
            }
        }
    }
    ensure!(errors.is_empty(), "catalog problems: {}", errors.join("; "));
    Ok(())
}
