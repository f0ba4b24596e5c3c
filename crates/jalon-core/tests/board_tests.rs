use std::path::PathBuf;

use jalon_core::{
    default_deadline, initial_project, BoardBuilder, BoardError, Link, StageId, StagePatch,
    Status, SubTaskPatch,
};
use jiff::civil::date;
use tempfile::TempDir;

/// Helper to create a temporary directory and store file path.
fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("projet.json");
    (temp_dir, store_path)
}

async fn open_board(store_path: &PathBuf) -> jalon_core::Board {
    BoardBuilder::new()
        .with_store_path(Some(store_path))
        .build()
        .await
        .expect("Failed to open board")
}

#[tokio::test]
async fn opening_a_fresh_board_does_not_write_the_store() {
    let (_temp_dir, store_path) = create_test_environment();

    let board = open_board(&store_path).await;
    assert_eq!(board.project().stages.len(), StageId::ALL.len());

    // The first load must not persist: opening an empty slot leaves it empty.
    assert!(!store_path.exists());
}

#[tokio::test]
async fn mutations_persist_across_reopen() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    board
        .patch_stage(
            StageId::Organisation,
            StagePatch {
                owner: Some("Nadia".to_string()),
                status: Some(Status::InProgress),
                notes: Some("Premier point d'équipe fait.".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to patch stage");
    assert!(store_path.exists());

    let reopened = open_board(&store_path).await;
    let stage = reopened.stage(StageId::Organisation).unwrap();
    assert_eq!(stage.owner, "Nadia");
    assert_eq!(stage.status, Status::InProgress);
    assert_eq!(stage.notes, "Premier point d'équipe fait.");
}

#[tokio::test]
async fn sub_task_patch_targets_the_named_pair() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    let task = board
        .patch_sub_task(
            StageId::Fondations,
            "f2",
            SubTaskPatch {
                status: Some(Status::Done),
                accomplished: Some("Cadre juridique validé".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to patch sub-task");

    assert_eq!(task.status, Status::Done);
    assert_eq!(task.accomplished.as_deref(), Some("Cadre juridique validé"));

    // Siblings are untouched.
    let board_task = board.sub_task(StageId::Fondations, "f1").unwrap();
    assert_eq!(board_task.status, Status::ToDo);

    // Unknown identifiers surface as distinguishable errors.
    let missing = board
        .patch_sub_task(StageId::Fondations, "f9", SubTaskPatch::default())
        .await;
    assert!(matches!(
        missing,
        Err(BoardError::SubTaskNotFound { .. })
    ));
}

#[tokio::test]
async fn reset_stage_scrubs_all_prior_mutation() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    board
        .patch_stage(
            StageId::Fondations,
            StagePatch {
                owner: Some("Nadia".to_string()),
                status: Some(Status::InProgress),
                notes: Some("Notes de travail".to_string()),
                links: Some(vec![Link {
                    label: "Brief".to_string(),
                    url: "https://example.com/brief".to_string(),
                }]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    board
        .patch_sub_task(
            StageId::Fondations,
            "f1",
            SubTaskPatch {
                status: Some(Status::Done),
                objective: Some("Formaliser la vision".to_string()),
                owner: Some("Samir".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stage = board.reset_stage(StageId::Fondations).await.unwrap();

    assert_eq!(stage.status, Status::ToDo);
    assert!(stage.owner.is_empty());
    assert!(stage.notes.is_empty());
    assert!(stage.links.is_empty());
    assert!(!stage.deadline_manually_edited);
    for task in &stage.sub_tasks {
        assert_eq!(task.status, Status::ToDo);
        assert!(task.objective.is_none());
        assert!(task.owner.is_none());
        assert!(task.links.is_none());
    }
}

#[tokio::test]
async fn reset_stage_uses_the_current_launch_date() {
    let (_temp_dir, store_path) = create_test_environment();
    let launch = date(2025, 3, 1);

    let mut board = open_board(&store_path).await;
    board.set_launch_date(Some(launch)).await.unwrap();
    board
        .set_stage_deadline(StageId::Organisation, date(2025, 6, 30), true)
        .await
        .unwrap();

    let stage = board.reset_stage(StageId::Organisation).await.unwrap();
    assert_eq!(stage.deadline, default_deadline(StageId::Organisation, launch));
}

#[tokio::test]
async fn revert_to_auto_follows_the_launch_date() {
    let (_temp_dir, store_path) = create_test_environment();
    let launch = date(2025, 3, 1);

    let mut board = open_board(&store_path).await;
    board.set_launch_date(Some(launch)).await.unwrap();

    // A manual deadline sets the flag...
    let manual = board
        .set_stage_deadline(StageId::Fondations, date(2025, 7, 14), true)
        .await
        .unwrap();
    assert!(manual.deadline_manually_edited);

    // ...and setting the launch date alone does not recompute anything.
    assert_eq!(
        board.stage(StageId::Fondations).unwrap().deadline,
        date(2025, 7, 14)
    );

    let reverted = board.revert_stage_to_auto(StageId::Fondations).await.unwrap();
    assert_eq!(
        reverted.deadline,
        default_deadline(StageId::Fondations, launch)
    );
    assert!(!reverted.deadline_manually_edited);
}

#[tokio::test]
async fn mark_done_leaves_the_deadline_and_suppresses_reminders() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    // Put the stage well into overdue territory.
    board
        .set_stage_deadline(StageId::Fondations, date(2000, 1, 1), true)
        .await
        .unwrap();
    assert!(board
        .reminders()
        .iter()
        .any(|r| r.stage_id == StageId::Fondations));

    let stage = board.mark_stage_done(StageId::Fondations).await.unwrap();
    assert_eq!(stage.status, Status::Done);
    assert_eq!(stage.deadline, date(2000, 1, 1));
    assert!(!board
        .reminders()
        .iter()
        .any(|r| r.stage_id == StageId::Fondations));
}

#[tokio::test]
async fn reset_project_ignores_the_previous_launch_date() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    board.set_launch_date(Some(date(1999, 1, 1))).await.unwrap();
    board.reset_project().await.unwrap();

    let launch = board.project().launch_date.expect("launch date set");
    assert_ne!(launch, date(1999, 1, 1));
    assert_eq!(
        board.stage(StageId::Fondations).unwrap().deadline,
        default_deadline(StageId::Fondations, launch)
    );
}

#[tokio::test]
async fn replace_project_rejects_an_empty_stage_list() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    board
        .patch_stage(
            StageId::International,
            StagePatch {
                owner: Some("Leïla".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let mut empty = initial_project(Some(date(2024, 6, 9)));
    empty.stages.clear();

    let result = board.replace_project(empty).await;
    assert!(matches!(result, Err(BoardError::InvalidImport { .. })));

    // The rejected import left the in-memory project unchanged.
    assert_eq!(board.stage(StageId::International).unwrap().owner, "Leïla");
}

#[tokio::test]
async fn replace_project_substitutes_wholesale() {
    let (_temp_dir, store_path) = create_test_environment();

    let mut board = open_board(&store_path).await;
    let mut incoming = initial_project(Some(date(2024, 6, 9)));
    incoming.name = "Projet importé".to_string();
    incoming.stages[0].owner = "Karim".to_string();

    board.replace_project(incoming).await.unwrap();
    assert_eq!(board.project().name, "Projet importé");
    assert_eq!(board.stage(StageId::Fondations).unwrap().owner, "Karim");

    let reopened = open_board(&store_path).await;
    assert_eq!(reopened.project().name, "Projet importé");
}

#[tokio::test]
async fn load_falls_back_to_the_template_on_corrupt_data() {
    let (_temp_dir, store_path) = create_test_environment();
    std::fs::write(&store_path, "ceci n'est pas du JSON").unwrap();

    let board = open_board(&store_path).await;
    assert_eq!(board.project().name, jalon_core::PROJECT_NAME);
    assert_eq!(board.project().stages.len(), StageId::ALL.len());
}
