use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::{Project, ProjectId};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key holding the serialized project list.
pub const PROJECTS_KEY: &str = "omnistudio_projects";

/// In-memory mirror of the persisted project list.
///
/// The whole list lives under [`PROJECTS_KEY`] as one JSON array, and every
/// mutation rewrites that array in full. There are no change notifications;
/// anyone else writing the key must call [`ProjectStore::reload`].
#[derive(Debug)]
pub struct ProjectStore<S, D = serde_json::Value> {
    storage: S,
    projects: Vec<Project<D>>,
}

impl<S, D> ProjectStore<S, D>
where
    S: KeyValueStore,
    D: Serialize + DeserializeOwned + Default,
{
    /// Read the persisted list. Never fails: an absent key, an unreadable
    /// medium and a value that does not parse all yield an empty list. The
    /// raw value is left where it is.
    pub fn load(storage: S) -> Self {
        let projects = read_projects(&storage);
        Self { storage, projects }
    }

    /// Discard the in-memory list and read it again.
    pub fn reload(&mut self) {
        self.projects = read_projects(&self.storage);
    }

    /// Remove the project with `id` and persist what remains.
    ///
    /// Unknown ids are a no-op, though the list is still written back. An
    /// error means only the write failed; the in-memory removal stands.
    pub fn delete(&mut self, id: &ProjectId) -> Result<()> {
        let before = self.projects.len();
        self.projects.retain(|p| &p.id != id);
        tracing::debug!(
            "delete project {}: removed {}",
            id,
            before - self.projects.len()
        );
        self.persist()
    }

    /// Replace the project with the same id in place, or append it.
    pub fn upsert(&mut self, project: Project<D>) -> Result<()> {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.projects)?;
        self.storage.set(PROJECTS_KEY, &json)
    }
}

impl<S, D> ProjectStore<S, D> {
    /// Projects newest first. Equal timestamps keep their stored order.
    pub fn sorted_view(&self) -> Vec<&Project<D>> {
        let mut view: Vec<&Project<D>> = self.projects.iter().collect();
        // sort_by is stable
        view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        view
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project<D>> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Projects in stored order.
    pub fn projects(&self) -> &[Project<D>] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_projects<S, D>(storage: &S) -> Vec<Project<D>>
where
    S: KeyValueStore,
    D: DeserializeOwned + Default,
{
    let raw = match storage.get(PROJECTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read {}: {}", PROJECTS_KEY, e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(projects) => projects,
        Err(e) => {
            tracing::warn!("ignoring malformed {}: {}", PROJECTS_KEY, e);
            Vec::new()
        }
    }
}
