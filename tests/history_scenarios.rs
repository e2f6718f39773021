use std::fs;
use std::sync::Arc;

use design_vault::storage::types::{DESIGN_HISTORY_KEY, USER_KEY};
use design_vault::{
    DesignHistoryManager, DesignRecord, FileStorage, IdentityRecord, ManagerState, NewDesign,
    RecordStore, SessionManager, Storage,
};
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> RecordStore {
    RecordStore::new(Arc::new(FileStorage::new(dir.path()).unwrap()))
}

#[test]
fn three_designs_then_remove_the_middle_one() {
    let dir = TempDir::new().unwrap();
    let mut history = DesignHistoryManager::open(file_store(&dir));

    history.add(NewDesign::new("modern", "living room", "Modern Living Room", "living.png"));
    let bedroom = history.add(NewDesign::new("vintage", "bedroom", "Vintage Bedroom", "bed.png"));
    history.add(NewDesign::new("minimalist", "office", "Minimalist Office", "office.png"));

    assert_eq!(history.len(), 3);
    assert_eq!(history.designs()[0].name, "Minimalist Office");

    history.remove(&bedroom.id);
    let names: Vec<&str> = history.designs().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Minimalist Office", "Modern Living Room"]);

    let reopened = DesignHistoryManager::open(file_store(&dir));
    assert_eq!(reopened.designs(), history.designs());
}

#[test]
fn fresh_directory_is_ready_and_empty() {
    let dir = TempDir::new().unwrap();
    let history = DesignHistoryManager::open(file_store(&dir));
    assert_eq!(history.state(), ManagerState::Ready);
    assert!(history.designs().is_empty());

    let session = SessionManager::open(file_store(&dir));
    assert_eq!(session.state(), ManagerState::Ready);
    assert!(!session.is_authenticated());
}

#[test]
fn corrupted_history_file_is_dropped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("designHistory.json"), "this is not json").unwrap();

    let store = file_store(&dir);
    assert!(store.load::<Vec<DesignRecord>>(DESIGN_HISTORY_KEY).is_none());
    assert!(!dir.path().join("designHistory.json").exists());
    assert!(store.load::<Vec<DesignRecord>>(DESIGN_HISTORY_KEY).is_none());
}

#[test]
fn corrupted_user_file_means_logged_out() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("user.json"), "{\"email\": 42}").unwrap();
    let session = SessionManager::open(file_store(&dir));
    assert!(session.current_user().is_none());
    assert!(!dir.path().join("user.json").exists());
}

#[test]
fn clear_leaves_an_empty_array_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut history = DesignHistoryManager::open(file_store(&dir));
    history.add(NewDesign::new("boho", "patio", "Boho Patio", "patio.png"));
    history.clear();

    let raw = fs::read_to_string(dir.path().join("designHistory.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn both_slots_live_side_by_side() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FileStorage::new(dir.path()).unwrap());
    let store = RecordStore::new(backend.clone());

    let mut session = SessionManager::open(store.clone());
    let mut history = DesignHistoryManager::open(store);
    session.login("a@b.co", "First");
    session.login("c@d.co", "Second");
    history.add(NewDesign::new("modern", "office", "Office", "o.png"));

    assert_eq!(backend.keys().unwrap(), vec![DESIGN_HISTORY_KEY, USER_KEY]);

    let reopened = SessionManager::open(file_store(&dir));
    assert_eq!(
        reopened.current_user(),
        Some(&IdentityRecord::new("c@d.co", "Second"))
    );

    session.logout();
    assert_eq!(backend.keys().unwrap(), vec![DESIGN_HISTORY_KEY]);
}
