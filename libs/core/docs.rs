use crate::{util, Workspace};
use worklane_storage_core::{Doc, DocKind, DocPatch, Folder};

/// One group of the docs view. Docs without a folder land in an implicit
/// uncategorized group rather than under any named folder.
#[derive(Debug, Clone)]
pub struct DocGroup<'a> {
    /// `None` for the uncategorized bucket.
    pub folder: Option<&'a Folder>,
    pub name: &'a str,
    pub docs: Vec<&'a Doc>,
}

pub const UNCATEGORIZED_GROUP: &str = "General";

impl Workspace {
    pub async fn create_folder(&mut self, table_id: &str, name: &str) -> eyre::Result<Folder> {
        let folder = Folder {
            id: util::new_id("fld"),
            table_id: table_id.to_string(),
            name: name.to_string(),
        };
        self.folders.push(folder.clone());
        self.store.set_folders(&self.folders).await?;
        Ok(folder)
    }

    /// Docs inside the folder fall back to the uncategorized group.
    pub async fn delete_folder(&mut self, folder_id: &str) -> eyre::Result<()> {
        if !self.folders.iter().any(|f| f.id == folder_id) {
            return Err(eyre::eyre!("Folder '{folder_id}' not found"));
        }
        self.folders.retain(|f| f.id != folder_id);
        self.store.set_folders(&self.folders).await?;
        for doc in self.docs.iter_mut() {
            if doc.folder_id.as_deref() == Some(folder_id) {
                doc.folder_id = None;
            }
        }
        self.store.set_docs(&self.docs).await
    }

    pub async fn create_doc(
        &mut self,
        table_id: &str,
        title: &str,
        kind: DocKind,
        url: Option<String>,
        folder_id: Option<String>,
    ) -> eyre::Result<Doc> {
        let doc = Doc {
            id: util::new_id("doc"),
            table_id: table_id.to_string(),
            folder_id,
            title: title.to_string(),
            kind,
            url,
            content: String::new(),
            tags: vec![],
        };
        self.docs.push(doc.clone());
        self.store.set_docs(&self.docs).await?;
        self.log_activity("created doc", title).await?;
        Ok(doc)
    }

    pub async fn update_doc(&mut self, doc_id: &str, patch: DocPatch) -> eyre::Result<Doc> {
        let current = self
            .docs
            .iter()
            .find(|d| d.id == doc_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Doc '{doc_id}' not found"))?;
        let updated = patch.apply(&current);
        for doc in self.docs.iter_mut() {
            if doc.id == doc_id {
                *doc = updated.clone();
            }
        }
        self.store.set_docs(&self.docs).await?;
        Ok(updated)
    }

    pub async fn save_doc_content(
        &mut self,
        doc_id: &str,
        title: &str,
        content: &str,
    ) -> eyre::Result<Doc> {
        let patch = DocPatch {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        };
        self.update_doc(doc_id, patch).await
    }

    pub async fn delete_doc(&mut self, doc_id: &str) -> eyre::Result<()> {
        let doc = self
            .docs
            .iter()
            .find(|d| d.id == doc_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Doc '{doc_id}' not found"))?;
        self.docs.retain(|d| d.id != doc_id);
        self.store.set_docs(&self.docs).await?;
        self.log_activity("deleted doc", &doc.title).await
    }

    /// Docs of one table grouped by folder, named folders first in their
    /// stored order, then the uncategorized bucket when it is non-empty.
    pub fn docs_by_folder(&self, table_id: &str) -> Vec<DocGroup<'_>> {
        let mut groups: Vec<DocGroup<'_>> = self
            .folders
            .iter()
            .filter(|f| f.table_id == table_id)
            .map(|folder| DocGroup {
                folder: Some(folder),
                name: folder.name.as_str(),
                docs: self
                    .docs
                    .iter()
                    .filter(|d| {
                        d.table_id == table_id && d.folder_id.as_deref() == Some(folder.id.as_str())
                    })
                    .collect(),
            })
            .collect();

        let folder_ids: Vec<&str> = self
            .folders
            .iter()
            .filter(|f| f.table_id == table_id)
            .map(|f| f.id.as_str())
            .collect();
        let uncategorized: Vec<&Doc> = self
            .docs
            .iter()
            .filter(|d| {
                d.table_id == table_id
                    && match d.folder_id.as_deref() {
                        // A dangling folder id is indistinguishable from none.
                        Some(fid) => !folder_ids.contains(&fid),
                        None => true,
                    }
            })
            .collect();
        if !uncategorized.is_empty() {
            groups.push(DocGroup {
                folder: None,
                name: UNCATEGORIZED_GROUP,
                docs: uncategorized,
            });
        }
        groups
    }
}
