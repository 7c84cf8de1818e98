use crate::{LoginOutcome, TaskDraft, Workspace, UNCATEGORIZED_GROUP};
use worklane_storage::{
    backend::{fs::FsStoreConfig, in_memory::InMemoryStoreConfig},
    BackendConfig, StoreAdapter,
};
use worklane_storage_core::{DocKind, TaskPatch};

async fn seeded_workspace() -> Workspace {
    let kv = InMemoryStoreConfig::default().to_backend().unwrap();
    Workspace::from_store(StoreAdapter::local_only(kv), None)
        .await
        .unwrap()
}

async fn signed_in_workspace() -> Workspace {
    let mut workspace = seeded_workspace().await;
    let outcome = workspace.login("admin", "123").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));
    workspace
}

#[tokio::test]
async fn startup_lands_on_the_first_task_table_with_done_hidden() {
    let workspace = seeded_workspace().await;
    assert_eq!(workspace.active_table_id.as_deref(), Some("t1"));
    assert!(workspace.filter.hide_done);
}

#[tokio::test]
async fn login_is_case_insensitive_and_rejects_bad_credentials() {
    let mut workspace = seeded_workspace().await;
    assert!(workspace.login("ADMIN", "wrong").await.is_err());
    let outcome = workspace.login("Admin", "123").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));
    assert!(workspace.session_user.is_some());
}

#[tokio::test]
async fn first_login_forces_a_password_change_before_any_session() {
    let mut workspace = seeded_workspace().await;
    let outcome = workspace.login("ilya", "123").await.unwrap();
    assert_eq!(outcome, LoginOutcome::PasswordChangeRequired);
    assert!(workspace.session_user.is_none());

    // The change itself re-checks the current credentials.
    assert!(workspace
        .complete_password_change("ilya", "wrong", "new-secret")
        .await
        .is_err());
    assert!(workspace.session_user.is_none());

    let user = workspace
        .complete_password_change("ilya", "123", "new-secret")
        .await
        .unwrap();
    assert!(!user.must_change_password);
    assert!(workspace.session_user.is_some());

    let outcome = workspace.login("ilya", "new-secret").await.unwrap();
    assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));
}

#[tokio::test]
async fn created_task_defaults_to_the_first_status_and_priority() {
    let mut workspace = signed_in_workspace().await;
    let task = workspace.create_task(TaskDraft::default()).await.unwrap();
    assert_eq!(task.title, "New task");
    assert_eq!(task.status, workspace.statuses[0].id);
    assert_eq!(task.priority, workspace.priorities[0].id);
    assert_eq!(task.table_id, "t1");
}

#[tokio::test]
async fn archived_tasks_never_pass_the_filter_and_restore_round_trips() {
    let mut workspace = signed_in_workspace().await;
    let task = workspace.create_task(TaskDraft::default()).await.unwrap();

    workspace.archive_task(&task.id).await.unwrap();
    assert!(workspace.filtered_tasks().iter().all(|t| t.id != task.id));

    workspace.restore_task(&task.id).await.unwrap();
    let restored = workspace.task_by_id(&task.id).unwrap();
    assert_eq!(restored, &task);
    assert!(workspace.filtered_tasks().iter().any(|t| t.id == task.id));
}

#[tokio::test]
async fn done_status_filter_combined_with_hide_done_yields_nothing() {
    let mut workspace = signed_in_workspace().await;
    let done_status = workspace
        .statuses
        .iter()
        .find(|s| s.is_done)
        .unwrap()
        .id
        .clone();
    workspace
        .create_task(TaskDraft {
            status: Some(done_status.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    workspace.filter.status = done_status;
    workspace.filter.hide_done = true;
    assert!(workspace.filtered_tasks().is_empty());

    workspace.filter.hide_done = false;
    assert_eq!(workspace.filtered_tasks().len(), 1);
}

#[tokio::test]
async fn only_tasks_of_the_active_table_pass_the_filter() {
    let mut workspace = signed_in_workspace().await;
    workspace
        .create_task(TaskDraft {
            table_id: Some("t1".into()),
            title: Some("in bugs".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    workspace
        .create_task(TaskDraft {
            table_id: Some("t2".into()),
            title: Some("in tasks".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    workspace.select_table("t1");
    let titles: Vec<_> = workspace.filtered_tasks().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["in bugs"]);
}

#[tokio::test]
async fn status_change_is_logged_to_the_activity_feed() {
    let mut workspace = signed_in_workspace().await;
    let task = workspace.create_task(TaskDraft::default()).await.unwrap();
    workspace
        .update_task(&task.id, TaskPatch::status("s2"))
        .await
        .unwrap();
    assert!(workspace.activity[0].action == "changed status");
    assert!(workspace.activity[0].details.contains("In progress"));
}

#[tokio::test]
async fn deleting_a_project_orphans_tasks_but_keeps_them_editable() {
    let mut workspace = signed_in_workspace().await;
    let task = workspace
        .create_task(TaskDraft {
            project_id: Some("p1".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    workspace.delete_project("p1").await.unwrap();
    let orphan = workspace.task_by_id(&task.id).unwrap();
    assert_eq!(orphan.project_id.as_deref(), Some("p1"));
    assert!(workspace.project_by_id("p1").is_none());

    let updated = workspace
        .update_task(&task.id, TaskPatch {
            title: Some("still editable".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.title, "still editable");
}

#[tokio::test]
async fn the_last_status_and_priority_options_cannot_be_deleted() {
    let mut workspace = signed_in_workspace().await;
    for id in ["s1", "s2", "s3"] {
        workspace.delete_status_option(id).await.unwrap();
    }
    assert!(workspace.delete_status_option("s4").await.is_err());
    assert_eq!(workspace.statuses.len(), 1);

    for id in ["p1", "p2"] {
        workspace.delete_priority_option(id).await.unwrap();
    }
    assert!(workspace.delete_priority_option("p3").await.is_err());
    assert_eq!(workspace.priorities.len(), 1);
}

#[tokio::test]
async fn deleting_the_active_table_clears_the_selection() {
    let mut workspace = signed_in_workspace().await;
    let table = workspace
        .create_table("Sprint 12", worklane_storage_core::TableKind::Tasks, "zap")
        .await
        .unwrap();
    assert!(!table.is_system);

    workspace.select_table(&table.id);
    assert!(workspace.filter.hide_done);

    let renamed = workspace
        .update_table(&table.id, worklane_storage_core::TablePatch {
            name: Some("Sprint 13".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Sprint 13");

    workspace.delete_table(&table.id).await.unwrap();
    assert_eq!(workspace.active_table_id, None);
    assert!(!workspace.filter.hide_done);
}

#[tokio::test]
async fn created_projects_are_assignable() {
    let mut workspace = signed_in_workspace().await;
    let project = workspace.create_project("Billing", "credit-card").await.unwrap();
    let task = workspace
        .create_task(TaskDraft {
            project_id: Some(project.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(task.project_id.as_deref(), Some(project.id.as_str()));
}

#[tokio::test]
async fn docs_without_a_folder_group_under_the_general_bucket() {
    let mut workspace = signed_in_workspace().await;
    let folder = workspace.create_folder("t4", "Specs").await.unwrap();
    workspace
        .create_doc("t4", "Inside", DocKind::Internal, None, Some(folder.id.clone()))
        .await
        .unwrap();
    workspace
        .create_doc("t4", "Loose", DocKind::Internal, None, None)
        .await
        .unwrap();

    let groups = workspace.docs_by_folder("t4");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Specs");
    assert_eq!(groups[1].name, UNCATEGORIZED_GROUP);
    assert_eq!(groups[1].docs[0].title, "Loose");
}

#[tokio::test]
async fn deleting_a_folder_moves_its_docs_to_the_general_bucket() {
    let mut workspace = signed_in_workspace().await;
    let folder = workspace.create_folder("t4", "Specs").await.unwrap();
    workspace
        .create_doc("t4", "Inside", DocKind::Internal, None, Some(folder.id.clone()))
        .await
        .unwrap();
    workspace.delete_folder(&folder.id).await.unwrap();

    let groups = workspace.docs_by_folder("t4");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, UNCATEGORIZED_GROUP);
}

#[tokio::test]
async fn link_attachments_mirror_a_tagged_doc() {
    let mut workspace = signed_in_workspace().await;
    let task = workspace.create_task(TaskDraft::default()).await.unwrap();
    let attachment = workspace
        .add_attachment(&task.id, crate::AttachmentDraft {
            kind: worklane_storage_core::AttachmentKind::Link,
            name: "roadmap".into(),
            url: Some("https://example.net/roadmap".into()),
            doc_id: None,
        })
        .await
        .unwrap();

    let doc_id = attachment.doc_id.expect("link attachment should carry a doc id");
    let doc = workspace.docs.iter().find(|d| d.id == doc_id).unwrap();
    assert_eq!(doc.tags, vec!["from-tasks"]);
    assert_eq!(doc.url.as_deref(), Some("https://example.net/roadmap"));
}

#[tokio::test]
async fn take_to_work_moves_a_backlog_task_into_the_first_task_table() {
    let mut workspace = signed_in_workspace().await;
    let task = workspace
        .create_task(TaskDraft {
            table_id: Some("t6".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(workspace.backlog_tasks().iter().any(|t| t.id == task.id));

    let moved = workspace.take_to_work(&task.id).await.unwrap();
    assert_eq!(moved.table_id, "t1");
    assert_eq!(moved.status, "s2");
    assert!(workspace.backlog_tasks().is_empty());
}

#[tokio::test]
async fn backlog_honors_the_shared_filters_but_never_hides_done() {
    let mut workspace = signed_in_workspace().await;
    workspace
        .create_task(TaskDraft {
            table_id: Some("t6".into()),
            title: Some("research spike".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    workspace
        .create_task(TaskDraft {
            table_id: Some("t6".into()),
            title: Some("fix typo".into()),
            status: Some("s4".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    workspace.filter.search = "research".into();
    let titles: Vec<_> = workspace.backlog_tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["research spike"]);

    // The backlog is not a task table; done tasks stay visible there.
    workspace.filter.search.clear();
    workspace.filter.hide_done = true;
    assert_eq!(workspace.backlog_tasks().len(), 2);
}

#[tokio::test]
async fn kanban_columns_follow_the_status_option_order() {
    let mut workspace = signed_in_workspace().await;
    workspace
        .create_task(TaskDraft {
            status: Some("s2".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let columns = workspace.kanban_columns();
    let ids: Vec<_> = columns.iter().map(|c| c.status.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s4"]);
    assert!(columns[0].tasks.is_empty());
    assert_eq!(columns[1].tasks.len(), 1);
}

#[tokio::test]
async fn gantt_rows_are_positioned_from_the_earliest_start() {
    let mut workspace = signed_in_workspace().await;
    workspace
        .create_task(TaskDraft {
            title: Some("first".into()),
            start_date: Some("2026-03-02".into()),
            end_date: Some("2026-03-04".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    workspace
        .create_task(TaskDraft {
            title: Some("second".into()),
            start_date: Some("2026-03-05".into()),
            end_date: Some("2026-03-05".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let chart = workspace.gantt_chart().unwrap();
    assert_eq!(chart.total_days, 4);
    let first = chart.rows.iter().find(|r| r.task.title == "first").unwrap();
    assert_eq!((first.offset_days, first.span_days), (0, 3));
    let second = chart.rows.iter().find(|r| r.task.title == "second").unwrap();
    assert_eq!((second.offset_days, second.span_days), (3, 1));
}

#[tokio::test]
async fn month_calendar_is_monday_first() {
    let mut workspace = signed_in_workspace().await;
    workspace
        .create_meeting("t5", "standup", "2026-02-02", "10:00", vec![], Default::default())
        .await
        .unwrap();

    // February 2026 starts on a Sunday.
    let calendar = workspace.month_calendar("t5", 2026, 2).unwrap();
    assert_eq!(calendar.start_offset, 6);
    assert_eq!(calendar.days_in_month, 28);
    assert_eq!(calendar.meetings_by_day[1].len(), 1);
}

#[tokio::test]
async fn home_dashboard_lists_only_my_open_tasks() {
    let mut workspace = signed_in_workspace().await;
    let me = workspace.session_user.as_ref().unwrap().id.clone();
    workspace
        .create_task(TaskDraft {
            title: Some("mine".into()),
            assignee_id: Some(me.clone()),
            ..Default::default()
        })
        .await
        .unwrap();
    workspace
        .create_task(TaskDraft {
            title: Some("mine but done".into()),
            assignee_id: Some(me),
            status: Some("s4".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    workspace
        .create_task(TaskDraft {
            title: Some("someone else's".into()),
            assignee_id: Some("u3".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let dashboard = workspace.home_dashboard_at(9);
    assert_eq!(dashboard.greeting, "Good morning");
    let titles: Vec<_> = dashboard.my_tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["mine"]);
}

#[tokio::test]
async fn activity_is_skipped_when_signed_out_and_marked_read_in_bulk() {
    let mut workspace = seeded_workspace().await;
    workspace.log_activity("created task", "ghost").await.unwrap();
    assert!(workspace.activity.is_empty());

    workspace.login("admin", "123").await.unwrap();
    workspace.log_activity("created task", "real").await.unwrap();
    assert_eq!(workspace.unread_count(), 1);
    workspace.mark_all_read().await.unwrap();
    assert_eq!(workspace.unread_count(), 0);
}

#[tokio::test]
async fn session_survives_a_reload_through_the_same_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let open = || {
        FsStoreConfig {
            data_dir: dir.path().to_path_buf(),
        }
        .to_backend()
        .unwrap()
    };

    let mut workspace = Workspace::from_store(StoreAdapter::local_only(open()), None)
        .await
        .unwrap();
    workspace.login("admin", "123").await.unwrap();

    let reloaded = Workspace::from_store(StoreAdapter::local_only(open()), None)
        .await
        .unwrap();
    assert_eq!(
        reloaded.session_user.as_ref().map(|u| u.login.as_str()),
        Some("admin")
    );
}
