//! In-memory stand-ins for the remote services

#![allow(dead_code)]

use async_trait::async_trait;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use portfolio_editor::media::normalize::NormalizeOptions;
use portfolio_editor::{Backend, ImageUploader, NormalizedImage, Project, ProjectStore, RemoteError};

/// Project store kept in a Vec, upserting by id
#[derive(Default)]
pub struct MemoryStore {
    pub projects: Mutex<Vec<Project>>,
    pub saves: AtomicUsize,
    pub fail_fetch: AtomicBool,
    pub fail_save: AtomicBool,
}

impl MemoryStore {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<Project> {
        self.snapshot().into_iter().find(|p| p.id == id)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, RemoteError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(RemoteError::Status {
                status: 503,
                body: "store offline".into(),
            });
        }
        Ok(self.snapshot())
    }

    async fn save(&self, project: &Project) -> Result<(), RemoteError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(RemoteError::Status {
                status: 500,
                body: "disk full".into(),
            });
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        Ok(())
    }
}

/// Upload endpoint handing out sequential URLs
#[derive(Default)]
pub struct MemoryUploader {
    pub uploads: Mutex<Vec<NormalizedImage>>,
    pub fail: AtomicBool,
    /// Hand out this URL for every upload instead
    pub fixed_url: Option<String>,
}

impl MemoryUploader {
    pub fn always(url: &str) -> Self {
        Self {
            fixed_url: Some(url.to_string()),
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageUploader for MemoryUploader {
    async fn upload(&self, image: &NormalizedImage) -> Result<String, RemoteError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RemoteError::Status {
                status: 500,
                body: "internal error".into(),
            });
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(image.clone());
        if let Some(url) = &self.fixed_url {
            return Ok(url.clone());
        }
        Ok(format!("https://storage.example/portfolio/{}.jpg", uploads.len()))
    }
}

pub fn backend(store: &Arc<MemoryStore>, uploader: &Arc<MemoryUploader>) -> Backend {
    Backend::new(store.clone(), uploader.clone(), NormalizeOptions::default())
}

/// Write a solid-colour PNG and return its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([120, 80, 200]))
        .save(&path)
        .unwrap();
    path
}
