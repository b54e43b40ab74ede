use chrono::Utc;
use molar_core::model::{Badge, ProcedureId, ProgressRecord};
use molar_core::time::fixed_now;
use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_full_record() {
    let repo = connect("memdb_roundtrip").await;

    let mut record = ProgressRecord::new();
    record.mark_completed(ProcedureId::Cleaning);
    record.mark_completed(ProcedureId::Checkup);
    record.add_badge(Badge::new(
        "completed-cleaning",
        "Cleaning Champ",
        "🪥",
        fixed_now(),
    ));
    record.toggle_sound();
    record.record_visit();
    record.record_visit();

    repo.save(&record).await.unwrap();
    let loaded = repo.load().await.unwrap().expect("record persisted");
    assert_eq!(loaded, record);
    assert_eq!(loaded.completion_percent(), 50);
}

#[tokio::test]
async fn sqlite_empty_slot_reports_absent() {
    let repo = connect("memdb_empty").await;
    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_corrupt_slot_reads_as_absent() {
    let repo = connect("memdb_corrupt").await;

    sqlx::query("INSERT INTO progress (id, record, updated_at) VALUES (1, ?1, ?2)")
        .bind("{not json at all")
        .bind(Utc::now().to_rfc3339())
        .execute(repo.pool())
        .await
        .unwrap();

    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_unknown_procedure_in_slot_reads_as_absent() {
    let repo = connect("memdb_unknown_proc").await;

    // Parsable JSON, but the completed set names a procedure outside the
    // closed enum. The whole slot counts as corrupt.
    sqlx::query("INSERT INTO progress (id, record, updated_at) VALUES (1, ?1, ?2)")
        .bind(r#"{"completedProcedures":["root-canal"],"badges":[],"soundEnabled":true,"visitCount":3}"#)
        .bind(Utc::now().to_rfc3339())
        .execute(repo.pool())
        .await
        .unwrap();

    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_save_overwrites_prior_record() {
    let repo = connect("memdb_overwrite").await;

    let mut first = ProgressRecord::new();
    first.mark_completed(ProcedureId::Filling);
    repo.save(&first).await.unwrap();

    let mut second = ProgressRecord::new();
    second.record_visit();
    repo.save(&second).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded, second);
    assert!(loaded.completed_procedures().is_empty());
}
