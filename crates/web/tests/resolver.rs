//! Profile resolution against a mock remote directory API.

use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crewlist_web::remote::DirectoryApiClient;
use crewlist_web::resolver::{self, ResolveError, ResolvedUser};
use crewlist_web::store::{LocalStore, StoreSlot};

fn client_for(server: &MockServer) -> DirectoryApiClient {
    DirectoryApiClient::new(&Url::parse(&server.uri()).expect("valid mock url"))
}

async fn empty_store(dir: &TempDir) -> LocalStore {
    LocalStore::open(StoreSlot::new(dir.path().join("added_users.json"))).await
}

fn remote_user_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("user{id}@remote.example"),
    })
}

#[tokio::test]
async fn local_match_short_circuits_the_remote_call() {
    let dir = TempDir::new().expect("tempdir");
    let slot = StoreSlot::new(dir.path().join("added_users.json"));

    // A record whose id also exists remotely; the local one must win
    // without the remote API ever being consulted.
    std::fs::write(
        slot.path(),
        r#"[{"id": "3", "name": "Local Winner", "email": "local@win.example", "age": 28, "role": "Viewer"}]"#,
    )
    .expect("write slot");
    let store = LocalStore::open(slot).await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_user_json(3, "Remote")))
        .expect(0)
        .mount(&server)
        .await;

    let resolved = resolver::resolve(&store, &client_for(&server), "3")
        .await
        .expect("resolves locally");

    match resolved {
        ResolvedUser::Local(user) => assert_eq!(user.name, "Local Winner"),
        ResolvedUser::Remote(_) => panic!("expected the local record"),
    }
}

#[tokio::test]
async fn unknown_local_id_falls_back_to_the_remote_api() {
    let dir = TempDir::new().expect("tempdir");
    let store = empty_store(&dir).await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(remote_user_json(3, "Clementine Bauch")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resolved = resolver::resolve(&store, &client_for(&server), "3")
        .await
        .expect("resolves remotely");

    match resolved {
        ResolvedUser::Remote(user) => assert_eq!(user.name, "Clementine Bauch"),
        ResolvedUser::Local(_) => panic!("expected the remote record"),
    }
}

#[tokio::test]
async fn remote_404_resolves_to_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let store = empty_store(&dir).await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = resolver::resolve(&store, &client_for(&server), "99")
        .await
        .expect_err("nothing to resolve");
    assert!(matches!(err, ResolveError::NotFound(id) if id == "99"));
}

#[tokio::test]
async fn non_numeric_id_without_local_match_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let store = empty_store(&dir).await;

    // No mock mounted: a remote call would fail the test via a transport
    // error rather than NotFound.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = resolver::resolve(&store, &client_for(&server), "not-a-number")
        .await
        .expect_err("nothing to resolve");
    assert!(matches!(err, ResolveError::NotFound(_)));
}

#[tokio::test]
async fn remote_server_error_surfaces_as_fetch_failed() {
    let dir = TempDir::new().expect("tempdir");
    let store = empty_store(&dir).await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = resolver::resolve(&store, &client_for(&server), "5")
        .await
        .expect_err("remote is broken");
    assert!(matches!(err, ResolveError::FetchFailed(_)));
}

#[tokio::test]
async fn corrupted_store_degrades_to_no_local_match() {
    let dir = TempDir::new().expect("tempdir");
    let slot = StoreSlot::new(dir.path().join("added_users.json"));
    std::fs::write(slot.path(), "not json at all").expect("write garbage");
    let store = LocalStore::open(slot).await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_user_json(3, "Remote")))
        .expect(1)
        .mount(&server)
        .await;

    let resolved = resolver::resolve(&store, &client_for(&server), "3")
        .await
        .expect("falls through to remote");
    assert!(matches!(resolved, ResolvedUser::Remote(_)));
}
