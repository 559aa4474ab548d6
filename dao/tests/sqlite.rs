use std::time::Duration;

use dv_dao::{
    admin_credential::AdminCredentialDao,
    page_view::PageViewDao,
    project::{ProjectCategory, ProjectDao},
    project_request::{ProjectRequestDao, RequestType},
    Db,
};
use dv_db_sqlite::db::SqliteDb;
use tempfile::TempDir;

async fn sqlite_db() -> (TempDir, Db) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("devora.db");
    let db = SqliteDb::new(path.to_str().unwrap(), &2).await.unwrap();
    (dir, Db::SqliteDb(db))
}

fn sample_project(title: &str, category: &ProjectCategory) -> ProjectDao {
    ProjectDao::new(
        title,
        "A short description",
        category,
        &None,
        &["Rust".to_owned(), "Postgres".to_owned()],
        &["Login".to_owned()],
        &Some("https://demo.example.com".to_owned()),
    )
}

// Keeps created_at strictly increasing between inserts.
async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

#[tokio::test]
async fn only_one_admin_credential_is_ever_stored() {
    let (_dir, db) = sqlite_db().await;

    assert!(AdminCredentialDao::db_select(&db).await.unwrap().is_none());

    let first = AdminCredentialDao::new("hash-one");
    assert!(first.db_insert_if_absent(&db).await.unwrap());
    assert!(!AdminCredentialDao::new("hash-two")
        .db_insert_if_absent(&db)
        .await
        .unwrap());

    let stored = AdminCredentialDao::db_select(&db).await.unwrap().unwrap();
    assert_eq!(stored.id(), first.id());
    assert_eq!(stored.password_hash(), "hash-one");
}

#[tokio::test]
async fn projects_round_trip_and_list_newest_first() {
    let (_dir, db) = sqlite_db().await;

    let older = sample_project("Older", &ProjectCategory::Student);
    older.db_insert(&db).await.unwrap();
    tick().await;
    let newer = sample_project("Newer", &ProjectCategory::Business);
    newer.db_insert(&db).await.unwrap();

    let all = ProjectDao::db_select_many(&db, &None).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|p| p.title()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);

    let students = ProjectDao::db_select_many(&db, &Some(ProjectCategory::Student))
        .await
        .unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id(), older.id());
    assert_eq!(
        students[0].technologies(),
        &vec!["Rust".to_owned(), "Postgres".to_owned()]
    );
    assert_eq!(students[0].features(), &vec!["Login".to_owned()]);
}

#[tokio::test]
async fn project_update_reports_missing_rows() {
    let (_dir, db) = sqlite_db().await;

    let mut project = sample_project("Before", &ProjectCategory::Student);
    assert!(!project.db_update(&db).await.unwrap());

    project.db_insert(&db).await.unwrap();
    project.set_title("After");
    project.set_image_url(&Some("/storage/v1/object/public/b/projects/x.png".to_owned()));
    assert!(project.db_update(&db).await.unwrap());

    let stored = ProjectDao::db_select(&db, project.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title(), "After");
    assert_eq!(stored.created_at(), project.created_at());
    assert_eq!(
        stored.image_url().as_deref(),
        Some("/storage/v1/object/public/b/projects/x.png")
    );

    ProjectDao::db_delete(&db, project.id()).await.unwrap();
    ProjectDao::db_delete(&db, project.id()).await.unwrap();
    assert!(ProjectDao::db_select(&db, project.id())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn requests_join_their_project_when_it_exists() {
    let (_dir, db) = sqlite_db().await;

    let project = sample_project("Clinic app", &ProjectCategory::Business);
    project.db_insert(&db).await.unwrap();

    let linked = ProjectRequestDao::new(
        &RequestType::Trial,
        "Sara",
        &Some("sara@example.com".to_owned()),
        &None,
        &Some(*project.id()),
        "I want a demo",
        &Some("Acme".to_owned()),
    );
    linked.db_insert(&db).await.unwrap();
    tick().await;
    let dangling = ProjectRequestDao::new(
        &RequestType::Graduation,
        "Ali",
        &None,
        &Some("0770000000".to_owned()),
        &Some(uuid::Uuid::now_v7()),
        "Need a thesis app",
        &None,
    );
    dangling.db_insert(&db).await.unwrap();

    let requests = ProjectRequestDao::db_select_many_with_project(&db, &None, &None)
        .await
        .unwrap();
    assert_eq!(requests.len(), 2);

    let (first, first_project) = &requests[0];
    assert_eq!(first.id(), dangling.id());
    assert_eq!(first.request_type(), &RequestType::Graduation);
    assert!(first.email().is_none());
    assert!(first_project.is_none());

    let (second, second_project) = &requests[1];
    assert_eq!(second.id(), linked.id());
    let second_project = second_project.as_ref().unwrap();
    assert_eq!(second_project.title(), "Clinic app");
    assert_eq!(second_project.category(), &ProjectCategory::Business);

    let page = ProjectRequestDao::db_select_many_with_project(&db, &Some(1), &Some(1))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].0.id(), linked.id());
    assert_eq!(ProjectRequestDao::db_count(&db).await.unwrap(), 2);
}

#[tokio::test]
async fn mark_read_and_delete_are_idempotent() {
    let (_dir, db) = sqlite_db().await;

    let request = ProjectRequestDao::new(
        &RequestType::Trial,
        "Sara",
        &Some("sara@example.com".to_owned()),
        &None,
        &None,
        "Details",
        &None,
    );
    request.db_insert(&db).await.unwrap();
    assert!(!request.is_read());

    ProjectRequestDao::db_mark_read(&db, request.id()).await.unwrap();
    ProjectRequestDao::db_mark_read(&db, request.id()).await.unwrap();

    let requests = ProjectRequestDao::db_select_many_with_project(&db, &None, &None)
        .await
        .unwrap();
    assert!(*requests[0].0.is_read());

    ProjectRequestDao::db_delete(&db, request.id()).await.unwrap();
    ProjectRequestDao::db_delete(&db, request.id()).await.unwrap();
    assert_eq!(ProjectRequestDao::db_count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn page_views_are_counted() {
    let (_dir, db) = sqlite_db().await;

    assert_eq!(PageViewDao::db_count(&db).await.unwrap(), 0);
    PageViewDao::new("/").db_insert(&db).await.unwrap();
    PageViewDao::new("/portfolio").db_insert(&db).await.unwrap();
    assert_eq!(PageViewDao::db_count(&db).await.unwrap(), 2);
}
