use async_trait::async_trait;
use serde::Deserialize;

use super::ProjectStore;
use crate::error::{Failure, RemoteError};
use crate::state::data::{builtin_projects, Project};

/// Project store reached over HTTP
///
/// `GET endpoint` lists projects, `POST endpoint` upserts one.
#[derive(Debug, Clone)]
pub struct HttpProjectStore {
    client: reqwest::Client,
    endpoint: String,
}

/// What the store answers to a save
#[derive(Deserialize, Debug)]
struct SaveReceipt {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    success: Option<bool>,
}

impl HttpProjectStore {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProjectStore for HttpProjectStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, RemoteError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let response = check_status(response).await?;
        let projects: Vec<Project> = response.json().await?;
        tracing::debug!("Fetched {} projects", projects.len());
        Ok(projects)
    }

    async fn save(&self, project: &Project) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(project)
            .send()
            .await?;
        let response = check_status(response).await?;

        // Older deployments answer with an empty body; only the status counts
        let body = response.text().await?;
        if let Ok(receipt) = serde_json::from_str::<SaveReceipt>(&body) {
            if receipt.success == Some(false) {
                tracing::warn!("Store reported success=false for '{}'", project.id);
            }
            if let Some(id) = receipt.id.filter(|id| id != &project.id) {
                tracing::warn!("Store saved '{}' under id '{}'", project.id, id);
            }
        }
        Ok(())
    }
}

/// Non-2xx becomes `RemoteError::Status` with whatever body came along
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Result of loading the project collection
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub projects: Vec<Project>,
    /// The store was empty and the built-in projects were written to it
    pub seeded: bool,
    /// Set when the built-in list is shown because the store failed
    pub failure: Option<Failure>,
}

/// Load projects, seeding an empty store with the built-in list
///
/// - store has projects: use them as-is
/// - store is empty: save every built-in project, then fetch once more
/// - anything fails: fall back to the built-in list and report it
pub async fn load_projects(store: &dyn ProjectStore) -> LoadOutcome {
    let fallback = |failure: Failure| {
        tracing::warn!("{}; showing built-in projects", failure);
        LoadOutcome {
            projects: builtin_projects(),
            seeded: false,
            failure: Some(failure),
        }
    };

    let projects = match store.fetch_all().await {
        Ok(projects) => projects,
        Err(e) => return fallback(Failure::load(e)),
    };

    if !projects.is_empty() {
        tracing::info!("Loaded {} projects from store", projects.len());
        return LoadOutcome {
            projects,
            seeded: false,
            failure: None,
        };
    }

    tracing::info!("Project store is empty, seeding built-in projects");
    for project in builtin_projects() {
        if let Err(e) = store.save(&project).await {
            return fallback(Failure::Load(format!(
                "seeding '{}' failed: {}",
                project.id, e
            )));
        }
    }

    match store.fetch_all().await {
        Ok(projects) => {
            tracing::info!("Seeded store, now holding {} projects", projects.len());
            LoadOutcome {
                projects,
                seeded: true,
                failure: None,
            }
        }
        Err(e) => fallback(Failure::load(e)),
    }
}
