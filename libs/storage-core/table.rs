use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TableKind {
    Tasks,
    Docs,
    Meetings,
    Backlog,
}

/// Which task renderings a table exposes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub show_table: bool,
    pub show_kanban: bool,
    pub show_gantt: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            show_table: true,
            show_kanban: true,
            show_gantt: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TableKind,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub is_system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_config: Option<ViewConfig>,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct TablePatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub view_config: Option<ViewConfig>,
}

impl TablePatch {
    pub fn apply(self, table: &Table) -> Table {
        Table {
            id: table.id.clone(),
            name: self.name.unwrap_or_else(|| table.name.clone()),
            kind: table.kind,
            icon: self.icon.unwrap_or_else(|| table.icon.clone()),
            color: self.color.or_else(|| table.color.clone()),
            is_system: table.is_system,
            view_config: self.view_config.or(table.view_config),
        }
    }
}
