//! Local store slot behavior: round-trips, damage handling, mutations.

use tempfile::TempDir;

use crewlist_core::{Email, LocalUserId, Role, UserFormInput};
use crewlist_web::models::LocalUser;
use crewlist_web::store::{LocalStore, StoreNotice, StoreSlot};

fn form(name: &str, email: &str, age: &str, role: &str) -> crewlist_core::UserFormData {
    UserFormInput {
        name: name.to_owned(),
        email: email.to_owned(),
        age: age.to_owned(),
        role: role.to_owned(),
    }
    .validate()
    .expect("valid form")
}

fn slot_in(dir: &TempDir) -> StoreSlot {
    StoreSlot::new(dir.path().join("added_users.json"))
}

#[tokio::test]
async fn missing_slot_loads_empty_without_notice() {
    let dir = TempDir::new().expect("tempdir");
    let outcome = slot_in(&dir).load().await;

    assert!(outcome.users.is_empty());
    assert_eq!(outcome.notice, None);
}

#[tokio::test]
async fn saved_collection_round_trips() {
    let dir = TempDir::new().expect("tempdir");
    let slot = slot_in(&dir);

    let users = vec![
        LocalUser::from_form(form("Ada Lovelace", "ada@calc.org", "36", "Editor")),
        LocalUser::from_form(form("Grace Hopper", "grace@mil.example", "45", "Admin")),
    ];

    slot.save(&users).await.expect("save succeeds");
    let outcome = slot.load().await;

    assert_eq!(outcome.users, users);
    assert_eq!(outcome.notice, None);
}

#[tokio::test]
async fn unparseable_slot_is_discarded_and_reported() {
    let dir = TempDir::new().expect("tempdir");
    let slot = slot_in(&dir);
    std::fs::write(slot.path(), "{ definitely not an array").expect("write garbage");

    let outcome = slot.load().await;

    assert!(outcome.users.is_empty());
    assert_eq!(outcome.notice, Some(StoreNotice::Corrupted));
}

#[tokio::test]
async fn non_array_slot_counts_as_corruption() {
    let dir = TempDir::new().expect("tempdir");
    let slot = slot_in(&dir);
    std::fs::write(slot.path(), r#"{"id": "1"}"#).expect("write object");

    let outcome = slot.load().await;

    assert!(outcome.users.is_empty());
    assert_eq!(outcome.notice, Some(StoreNotice::Corrupted));
}

#[tokio::test]
async fn malformed_elements_are_filtered_not_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let slot = slot_in(&dir);

    // One valid record, one missing its email, one with a wrong field type.
    std::fs::write(
        slot.path(),
        r#"[
            {"id": "a1", "name": "Ada", "email": "ada@calc.org", "age": 36, "role": "Editor"},
            {"id": "a2", "name": "No Email", "age": 30, "role": "Viewer"},
            {"id": "a3", "name": "Bad Age", "email": "bad@age.example", "age": "thirty", "role": "Viewer"}
        ]"#,
    )
    .expect("write slot");

    let outcome = slot.load().await;

    assert_eq!(outcome.users.len(), 1);
    assert_eq!(
        outcome.users.first().map(|u| u.name.as_str()),
        Some("Ada")
    );
    assert_eq!(outcome.notice, Some(StoreNotice::PartialLoss { dropped: 2 }));
}

#[tokio::test]
async fn create_then_remove_restores_the_original_collection() {
    let dir = TempDir::new().expect("tempdir");
    let store = LocalStore::open(slot_in(&dir)).await;

    let (first, saved) = store
        .create(form("Ada Lovelace", "ada@calc.org", "36", "Editor"))
        .await;
    saved.expect("save succeeds");

    let (second, saved) = store
        .create(form("Grace Hopper", "grace@mil.example", "45", "Admin"))
        .await;
    saved.expect("save succeeds");

    assert_eq!(store.all().len(), 2);

    store
        .remove(second.id.as_str())
        .await
        .expect("save succeeds");
    assert_eq!(store.all(), vec![first.clone()]);

    // Reopening from disk sees the same surviving record.
    let reopened = LocalStore::open(slot_in(&dir)).await;
    assert_eq!(reopened.all(), vec![first]);
}

#[tokio::test]
async fn removing_an_unknown_id_is_a_silent_no_op() {
    let dir = TempDir::new().expect("tempdir");
    let store = LocalStore::open(slot_in(&dir)).await;

    let (user, saved) = store
        .create(form("Ada Lovelace", "ada@calc.org", "36", "Editor"))
        .await;
    saved.expect("save succeeds");

    store.remove("does-not-exist").await.expect("no-op is ok");
    assert_eq!(store.all(), vec![user]);
}

#[tokio::test]
async fn subscribers_observe_mutations() {
    let dir = TempDir::new().expect("tempdir");
    let store = LocalStore::open(slot_in(&dir)).await;
    let mut changes = store.subscribe();

    let (user, _) = store
        .create(form("Ada Lovelace", "ada@calc.org", "36", "Editor"))
        .await;

    changes.changed().await.expect("sender alive");
    assert_eq!(changes.borrow().as_slice(), &[user.clone()]);

    store.remove(user.id.as_str()).await.expect("save succeeds");
    changes.changed().await.expect("sender alive");
    assert!(changes.borrow().is_empty());
}

#[tokio::test]
async fn rejected_save_keeps_memory_state_and_raises_a_notice() {
    let dir = TempDir::new().expect("tempdir");

    // Block the slot's parent path with a regular file so the write fails.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").expect("write blocker");
    let store = LocalStore::open(StoreSlot::new(blocker.join("slot.json"))).await;

    let (user, saved) = store
        .create(form("Ada Lovelace", "ada@calc.org", "36", "Editor"))
        .await;

    assert!(saved.is_err());
    // The in-memory state is not rolled back.
    assert_eq!(store.all(), vec![user]);
    assert_eq!(store.take_notice(), Some(StoreNotice::SaveFailed));
    // Notices are consumed once.
    assert_eq!(store.take_notice(), None);
}

#[tokio::test]
async fn open_surfaces_load_damage_as_a_notice() {
    let dir = TempDir::new().expect("tempdir");
    let slot = slot_in(&dir);
    std::fs::write(slot.path(), "garbage").expect("write garbage");

    let store = LocalStore::open(slot).await;

    assert!(store.all().is_empty());
    assert_eq!(store.take_notice(), Some(StoreNotice::Corrupted));
}

#[tokio::test]
async fn find_matches_by_string_identifier() {
    let dir = TempDir::new().expect("tempdir");
    let slot = slot_in(&dir);
    let user = LocalUser {
        id: LocalUserId::from_string("known-id".to_owned()),
        name: "Ada".to_owned(),
        email: Email::parse("ada@calc.org").expect("valid email"),
        age: 36,
        role: Role::Editor,
    };
    slot.save(std::slice::from_ref(&user)).await.expect("save succeeds");

    let store = LocalStore::open(slot).await;
    assert_eq!(store.find("known-id"), Some(user));
    assert_eq!(store.find("unknown-id"), None);
}
