/// Remote services module
///
/// The project store and the image upload endpoint are opaque HTTP services.
/// Both sit behind a trait so the view model can be driven against fakes:
/// - `store.rs` - fetch all projects, upsert one project, seeding on load
/// - `upload.rs` - send a normalized image, get back its durable URL

pub mod store;
pub mod upload;

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Failure, RemoteError};
use crate::media::normalize::{self, NormalizeOptions, NormalizedImage};
use crate::state::data::Project;

pub use store::{load_projects, HttpProjectStore, LoadOutcome};
pub use upload::HttpImageUploader;

/// Where projects live
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, in the order the store keeps them
    async fn fetch_all(&self) -> Result<Vec<Project>, RemoteError>;

    /// Upsert by `id`, overwriting the whole record
    async fn save(&self, project: &Project) -> Result<(), RemoteError>;
}

/// Where images live
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Store the image and return a URL that stays valid
    async fn upload(&self, image: &NormalizedImage) -> Result<String, RemoteError>;
}

/// Everything a mutating portfolio operation talks to
///
/// Cheap to clone, so it can be moved into background tasks.
#[derive(Clone)]
pub struct Backend {
    pub store: Arc<dyn ProjectStore>,
    pub uploader: Arc<dyn ImageUploader>,
    pub normalize: NormalizeOptions,
}

impl Backend {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        uploader: Arc<dyn ImageUploader>,
        normalize: NormalizeOptions,
    ) -> Self {
        Self {
            store,
            uploader,
            normalize,
        }
    }

    /// Build the HTTP-backed services described by `config`
    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            store: Arc::new(HttpProjectStore::new(
                client.clone(),
                config.projects_endpoint.clone(),
            )),
            uploader: Arc::new(HttpImageUploader::new(
                client,
                config.upload_endpoint.clone(),
            )),
            normalize: config.normalize_options(),
        })
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("normalize", &self.normalize)
            .finish_non_exhaustive()
    }
}

/// Turn a picked file into a stored image URL
///
/// Normalize, then upload. Touches no project state, so a failure here
/// leaves the portfolio exactly as it was.
pub async fn intake(backend: Backend, file: PathBuf) -> Result<String, Failure> {
    let image = normalize::normalize_file(file, backend.normalize).await?;
    let url = backend
        .uploader
        .upload(&image)
        .await
        .map_err(Failure::upload)?;
    tracing::info!("Uploaded {}x{} image to {}", image.width, image.height, url);
    Ok(url)
}

/// Persist one project, mapping errors to the user-visible taxonomy
pub async fn persist(store: &dyn ProjectStore, project: Project) -> Result<(), Failure> {
    store.save(&project).await.map_err(Failure::save)?;
    tracing::info!("Saved project '{}'", project.id);
    Ok(())
}
