//! Integration tests for `ImageRepo`: counting, ordering, the global
//! listing, and foreign-key enforcement.

use sqlx::SqlitePool;

use folio_db::models::project::CreateProject;
use folio_db::repositories::{ImageRepo, ProjectRepo};

async fn make_project(pool: &SqlitePool) -> i64 {
    let input = CreateProject {
        title: "T".to_string(),
        description: "D".to_string(),
        owner_name: "O".to_string(),
        location: "L".to_string(),
        completion_date: None,
    };
    ProjectRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test]
async fn count_and_list_follow_insertion_order(pool: SqlitePool) {
    let project_id = make_project(&pool).await;

    assert_eq!(
        ImageRepo::count_by_project(&pool, project_id).await.unwrap(),
        0
    );
    assert!(ImageRepo::list_urls(&pool, project_id)
        .await
        .unwrap()
        .is_empty());

    for n in 0..3 {
        ImageRepo::insert(&pool, project_id, &format!("https://img.test/{n}.jpg"))
            .await
            .unwrap();
    }

    assert_eq!(
        ImageRepo::count_by_project(&pool, project_id).await.unwrap(),
        3
    );
    let urls = ImageRepo::list_urls(&pool, project_id).await.unwrap();
    assert_eq!(
        urls,
        vec![
            "https://img.test/0.jpg",
            "https://img.test/1.jpg",
            "https://img.test/2.jpg",
        ]
    );
}

#[sqlx::test]
async fn insert_for_missing_project_violates_foreign_key(pool: SqlitePool) {
    let err = ImageRepo::insert(&pool, 123456, "https://img.test/x.jpg")
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert!(db_err.message().to_lowercase().contains("foreign key"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn list_all_returns_newest_first_across_projects(pool: SqlitePool) {
    let first = make_project(&pool).await;
    let second = make_project(&pool).await;

    ImageRepo::insert(&pool, first, "https://img.test/a.jpg")
        .await
        .unwrap();
    ImageRepo::insert(&pool, second, "https://img.test/b.jpg")
        .await
        .unwrap();

    let all = ImageRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].image_url, "https://img.test/b.jpg");
    assert_eq!(all[1].image_url, "https://img.test/a.jpg");
}

#[sqlx::test]
async fn delete_all_for_project_is_idempotent(pool: SqlitePool) {
    let project_id = make_project(&pool).await;
    ImageRepo::insert(&pool, project_id, "https://img.test/a.jpg")
        .await
        .unwrap();

    assert_eq!(
        ImageRepo::delete_all_for_project(&pool, project_id)
            .await
            .unwrap(),
        1
    );
    // Second pass removes nothing but does not error.
    assert_eq!(
        ImageRepo::delete_all_for_project(&pool, project_id)
            .await
            .unwrap(),
        0
    );
}
