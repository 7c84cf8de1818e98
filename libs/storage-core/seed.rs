//! Seed values used whenever a collection is missing or unreadable.

use crate::{
    options::{PriorityOption, StatusOption},
    project::Project,
    table::{Table, TableKind, ViewConfig},
    user::{Role, User},
};

pub fn default_statuses() -> Vec<StatusOption> {
    let opt = |id: &str, name: &str, color: &str, is_done| StatusOption {
        id: id.into(),
        name: name.into(),
        color: color.into(),
        is_done,
    };
    vec![
        opt("s1", "Not started", "gray", false),
        opt("s2", "In progress", "blue", false),
        opt("s3", "In review", "yellow", false),
        opt("s4", "Done", "green", true),
    ]
}

pub fn default_priorities() -> Vec<PriorityOption> {
    let opt = |id: &str, name: &str, color: &str| PriorityOption {
        id: id.into(),
        name: name.into(),
        color: color.into(),
    };
    vec![
        opt("p1", "Low", "green"),
        opt("p2", "Medium", "orange"),
        opt("p3", "High", "red"),
    ]
}

pub fn default_users() -> Vec<User> {
    let user = |id: &str, name: &str, login: &str, role, must_change| User {
        id: id.into(),
        name: name.into(),
        login: login.into(),
        role,
        avatar: None,
        email: Some(format!("{login}@worklane.local")),
        phone: None,
        telegram: None,
        password: Some("123".into()),
        must_change_password: must_change,
    };
    vec![
        user("u1", "Alexander", "admin", Role::Admin, false),
        user("u2", "Ruslan", "ruslan", Role::Employee, true),
        user("u3", "Anastasiya", "ana", Role::Employee, true),
        user("u4", "Ilya", "ilya", Role::Employee, true),
    ]
}

pub fn default_projects() -> Vec<Project> {
    let project = |id: &str, name: &str, icon: &str, color: &str| Project {
        id: id.into(),
        name: name.into(),
        icon: Some(icon.into()),
        color: Some(color.into()),
    };
    vec![
        project("p1", "Warehouse", "briefcase", "blue"),
        project("p2", "Documents flow", "file-text", "green"),
        project("p3", "Landing page", "home", "purple"),
        project("p4", "Login & signup", "key", "orange"),
    ]
}

pub fn default_tables() -> Vec<Table> {
    let table = |id: &str, name: &str, kind, icon: &str, color: &str, cfg| Table {
        id: id.into(),
        name: name.into(),
        kind,
        icon: icon.into(),
        color: Some(color.into()),
        is_system: true,
        view_config: cfg,
    };
    let all = Some(ViewConfig::default());
    let table_only = Some(ViewConfig {
        show_table: true,
        show_kanban: false,
        show_gantt: false,
    });
    vec![
        table("t1", "Bugs", TableKind::Tasks, "bug", "red", all),
        table("t2", "Tasks", TableKind::Tasks, "check-square", "blue", all),
        table("t3", "Features", TableKind::Tasks, "target", "green", all),
        table("t6", "Backlog", TableKind::Backlog, "layout", "gray", table_only),
        table("t4", "Documentation", TableKind::Docs, "file-text", "yellow", None),
        table("t5", "Meetings", TableKind::Meetings, "users", "purple", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_status_is_last_and_flagged() {
        let statuses = default_statuses();
        assert!(statuses.last().map(|s| s.is_done).unwrap_or(false));
        assert_eq!(statuses.iter().filter(|s| s.is_done).count(), 1);
    }

    #[test]
    fn exactly_one_backlog_table_seeded() {
        let backlogs = default_tables()
            .into_iter()
            .filter(|t| t.kind == TableKind::Backlog)
            .count();
        assert_eq!(backlogs, 1);
    }
}
