//! End-to-end navigation over a file-backed store, including reloads.

use guide_engine::{
    Address, FileStore, KeyValueStore, LinkOutcome, MemoryStore, NavigationEvent, Router,
    ViewRegistry, ViewSpec, DEFAULT_STORAGE_KEY,
};
use tempfile::TempDir;

fn views() -> ViewRegistry {
    ViewRegistry::new(vec![
        ViewSpec::new("home", "Home", ""),
        ViewSpec::new("examples", "Examples", ""),
        ViewSpec::new("feedback", "Feedback", ""),
        ViewSpec::new("notfound", "Not Found", ""),
    ])
    .unwrap()
}

fn open(dir: &TempDir) -> Router<FileStore> {
    let store = FileStore::open(dir.path()).unwrap();
    Router::new(views(), store, Address::parse("index.html"))
}

fn stored(dir: &TempDir) -> Option<String> {
    FileStore::open(dir.path())
        .unwrap()
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
}

#[test]
fn scenario_across_reloads() {
    let dir = TempDir::new().unwrap();

    let mut router = open(&dir);
    router.load(Address::parse("index.html"));
    let activation = router.activate("examples", true);
    assert_eq!(activation.resolved.as_str(), "examples");
    assert_eq!(stored(&dir).as_deref(), Some("examples"));
    drop(router);

    // Fresh load with no fragment resolves from the store
    let mut router = open(&dir);
    let activation = router.load(Address::parse("index.html"));
    assert_eq!(activation.resolved.as_str(), "examples");
    assert_eq!(router.address().to_string(), "index.html#examples");
    assert_eq!(router.history().len(), 1);

    let activation = router.activate("missing-page", true);
    assert_eq!(activation.resolved.as_str(), "notfound");
    assert_eq!(stored(&dir).as_deref(), Some("notfound"));

    // Back/forward event carrying "home" does not touch the store
    router.click("#home");
    router.click("#examples");
    router.activate("missing-page", true);
    let activation = router.back().unwrap();
    assert_eq!(activation.resolved.as_str(), "home");
    assert_eq!(router.current().as_str(), "home");
    assert_eq!(stored(&dir).as_deref(), Some("notfound"));

    let outcome = router.click("#feedback");
    assert!(matches!(outcome, LinkOutcome::Intercepted(_)));
    assert_eq!(router.current().as_str(), "feedback");
    assert_eq!(router.address().fragment.as_deref(), Some("feedback"));
    assert_eq!(router.history().index(), router.history().len() - 1);
}

#[test]
fn fragment_in_address_wins_over_store() {
    let dir = TempDir::new().unwrap();
    {
        let mut router = open(&dir);
        router.activate("examples", true);
    }

    let mut router = open(&dir);
    router.load(Address::parse("index.html#feedback"));
    assert_eq!(router.current().as_str(), "feedback");
    assert_eq!(stored(&dir).as_deref(), Some("feedback"));
}

#[test]
fn every_view_round_trips_through_reload() {
    for id in ["home", "examples", "feedback", "notfound"] {
        let dir = TempDir::new().unwrap();
        open(&dir).activate(id, true);

        let mut router = open(&dir);
        router.load(Address::parse("index.html"));
        assert_eq!(router.current().as_str(), id);
        assert_eq!(router.views().active().count(), 1);
    }
}

#[test]
fn history_replay_never_writes() {
    let mut router = Router::new(views(), MemoryStore::new(), Address::parse("index.html"));
    router.dispatch(NavigationEvent::Load(Address::parse("index.html")));
    for href in ["#examples", "#feedback", "#nope", "#home"] {
        router.dispatch(NavigationEvent::LinkClick(href.into()));
    }
    let saved = router.stored_selection();
    assert_eq!(saved.as_deref(), Some("home"));

    while router.history().can_go_back() {
        router.dispatch(NavigationEvent::Back);
        assert_eq!(router.stored_selection(), saved);
    }
    while router.history().can_go_forward() {
        router.dispatch(NavigationEvent::Forward);
        assert_eq!(router.stored_selection(), saved);
    }
    assert_eq!(router.current().as_str(), "home");
}

#[test]
fn durable_activation_after_storage_recovers() {
    let dir = TempDir::new().unwrap();
    let mut router = open(&dir);
    router.load(Address::parse("index.html#home"));

    let blocker = dir.path().join(guide_engine::STORE_FILE);
    std::fs::remove_file(&blocker).unwrap();
    std::fs::create_dir_all(blocker.join("inner")).unwrap();
    assert!(!router.activate("examples", true).persisted);

    std::fs::remove_dir_all(&blocker).unwrap();
    assert!(router.activate("examples", true).persisted);

    let mut reloaded = open(&dir);
    reloaded.load(Address::parse("index.html"));
    assert_eq!(reloaded.current().as_str(), "examples");
}

#[test]
fn corrupt_store_still_resolves_views() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(guide_engine::STORE_FILE), "{ corrupt").unwrap();

    let store = guide_engine::open_or_memory(dir.path());
    let mut router = Router::new(views(), store, Address::parse("index.html"));
    let activation = router.load(Address::parse("index.html#examples"));
    assert_eq!(activation.resolved.as_str(), "examples");
    assert!(activation.persisted);

    // Later selections are kept in memory
    router.click("#feedback");
    assert_eq!(router.stored_selection().as_deref(), Some("feedback"));
}
