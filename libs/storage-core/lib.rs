pub mod activity;
pub mod collection;
pub mod doc;
pub mod meeting;
pub mod options;
pub mod project;
pub mod seed;
pub mod table;
pub mod task;
pub mod user;

pub use activity::ActivityEntry;
pub use collection::{Collection, ScalarKey};
pub use doc::{Doc, DocKind, DocPatch, Folder};
pub use meeting::{Meeting, MeetingPatch, Recurrence};
pub use options::{PriorityOption, StatusOption};
pub use project::Project;
pub use table::{Table, TableKind, TablePatch, ViewConfig};
pub use task::{Attachment, AttachmentKind, Comment, Task, TaskId, TaskPatch};
pub use user::{Role, User, UserPatch};
