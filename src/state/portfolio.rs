use std::path::PathBuf;

use super::data::Project;
use super::edit::{Edit, Operation, Target};
use super::gallery::Gallery;
use super::notice::{Notice, Notices};
use crate::error::Failure;
use crate::remote::{self, Backend, LoadOutcome, ProjectStore};

/// The portfolio view model
///
/// Owns the project collection. Nothing outside can change it except through
/// the operations below; readers get `projects()` / `project()` snapshots.
///
/// Every mutation follows the same shape: change the in-memory project first,
/// then send the whole record to the store. A failed save is reported but the
/// local change stays (the store and the screen may disagree until the next
/// load). Concurrent saves to one project are last-write-wins.
#[derive(Debug, Default)]
pub struct Portfolio {
    projects: Vec<Project>,
    /// Operations started and not yet settled
    in_flight: usize,
    gallery: Option<Gallery>,
    notices: Notices,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }

    // ========== Loading ==========

    /// Fetch (and if needed seed) the collection, replacing what we hold
    pub async fn load(&mut self, store: &dyn ProjectStore) -> Option<Failure> {
        let outcome = remote::load_projects(store).await;
        let failure = outcome.failure.clone();
        self.replace_all(outcome);
        failure
    }

    /// Take over a loaded collection
    pub fn replace_all(&mut self, outcome: LoadOutcome) {
        if let Some(id) = super::data::find_duplicate_id(&outcome.projects) {
            tracing::warn!("Store returned project id '{}' more than once", id);
        }
        self.projects = outcome.projects;
        if let Some(failure) = outcome.failure {
            self.report(failure);
        }
        if let Some(gallery) = self.gallery.take() {
            self.gallery = self.project(gallery.project_id()).map(move |project| {
                let mut gallery = gallery;
                gallery.refresh(project);
                gallery
            });
        }
    }

    // ========== Upload activity ==========

    /// Mark an operation as started; the upload flag is on until it settles
    pub fn begin_operation(&mut self) {
        self.in_flight += 1;
    }

    /// Mark an operation as settled, successfully or not
    pub fn finish_operation(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // ========== Steps ==========

    /// Apply an edit to the in-memory project
    ///
    /// Returns the updated record, ready to persist, or None when no project
    /// has this id.
    pub fn apply(&mut self, project_id: &str, edit: &Edit) -> Option<Project> {
        self.apply_edit(project_id, edit).map(|(project, _)| project)
    }

    fn apply_edit(&mut self, project_id: &str, edit: &Edit) -> Option<(Project, bool)> {
        let project = self.projects.iter_mut().find(|p| p.id == project_id)?;
        let changed = edit.apply(project);
        if !changed {
            tracing::debug!("{:?} left '{}' unchanged", edit, project_id);
        }
        let updated = project.clone();

        if let Some(gallery) = self.gallery.as_mut() {
            if gallery.project_id() == project_id {
                gallery.refresh(&updated);
            }
        }
        Some((updated, changed))
    }

    pub fn report(&mut self, failure: Failure) {
        tracing::warn!("{}", failure);
        self.notices.push(Notice::from(&failure));
    }

    pub fn confirm(&mut self, message: impl Into<String>) {
        self.notices.push(Notice::success(message));
    }

    /// Check an operation target before any network work starts
    pub fn require(&self, project_id: &str) -> Result<(), Failure> {
        match self.project(project_id) {
            Some(_) => Ok(()),
            None => Err(Failure::UnknownProject(project_id.to_string())),
        }
    }

    /// Start an operation on `project_id`
    ///
    /// An unknown id is reported and nothing starts. Otherwise the upload
    /// flag stays on until the operation settles in `on_uploaded` or
    /// `on_saved`.
    pub fn begin(&mut self, project_id: &str) -> Result<(), Failure> {
        if let Err(failure) = self.require(project_id) {
            self.report(failure.clone());
            return Err(failure);
        }
        self.begin_operation();
        Ok(())
    }

    /// An upload started with `begin` has finished
    ///
    /// `Ok(Some(project))` is the record to persist; pass the save result to
    /// `on_saved`. `Ok(None)` means the URL was already in place, so the
    /// operation settles here without a save. Errors settle the operation and
    /// are reported.
    pub fn on_uploaded(
        &mut self,
        project_id: &str,
        target: Target,
        result: Result<String, Failure>,
    ) -> Result<Option<Project>, Failure> {
        // Nothing is touched until the upload has a URL
        let applied = result.and_then(|url| {
            self.apply_edit(project_id, &target.edit(url))
                .ok_or_else(|| Failure::UnknownProject(project_id.to_string()))
        });

        match applied {
            Ok((project, true)) => Ok(Some(project)),
            Ok((_, false)) => {
                self.finish_operation();
                self.confirm(match target {
                    Target::Cover => "Cover already uses this image",
                    Target::Gallery => "Image is already in the gallery",
                });
                Ok(None)
            }
            Err(failure) => Err(self.abandon(failure)),
        }
    }

    /// Drop the gallery image at `index` in memory and start the operation
    ///
    /// Returns the record to persist. An index past the end changes nothing,
    /// but the project is still returned for saving.
    pub fn begin_removal(&mut self, project_id: &str, index: usize) -> Result<Project, Failure> {
        self.begin(project_id)?;
        match self.apply_edit(project_id, &Edit::RemoveImage(index)) {
            Some((project, _)) => Ok(project),
            None => Err(self.abandon(Failure::UnknownProject(project_id.to_string()))),
        }
    }

    /// A save of `project_id` has finished; settles the operation
    ///
    /// A failed save keeps the in-memory change.
    pub fn on_saved(
        &mut self,
        project_id: &str,
        operation: Operation,
        result: Result<(), Failure>,
    ) -> Result<(), Failure> {
        self.finish_operation();
        match &result {
            Ok(()) => {
                tracing::info!("{:?} saved for '{}'", operation, project_id);
                self.confirm(operation.done_message());
            }
            Err(failure) => self.report(failure.clone()),
        }
        result
    }

    fn abandon(&mut self, failure: Failure) -> Failure {
        self.finish_operation();
        self.report(failure.clone());
        failure
    }

    // ========== Operations ==========

    /// Normalize and upload `file`, then make it the project's cover
    pub async fn replace_cover(
        &mut self,
        backend: &Backend,
        project_id: &str,
        file: impl Into<PathBuf>,
    ) -> Result<(), Failure> {
        self.upload_and_apply(backend, project_id, file.into(), Target::Cover)
            .await
    }

    /// Normalize and upload `file`, then append it to the project's gallery
    ///
    /// An uploaded URL the gallery already holds is not appended or saved.
    pub async fn add_gallery_image(
        &mut self,
        backend: &Backend,
        project_id: &str,
        file: impl Into<PathBuf>,
    ) -> Result<(), Failure> {
        self.upload_and_apply(backend, project_id, file.into(), Target::Gallery)
            .await
    }

    /// Drop the gallery image at `index` and persist the project
    ///
    /// An index past the end changes nothing, but the project is still saved.
    pub async fn remove_gallery_image(
        &mut self,
        store: &dyn ProjectStore,
        project_id: &str,
        index: usize,
    ) -> Result<(), Failure> {
        let project = self.begin_removal(project_id, index)?;
        let saved = remote::persist(store, project).await;
        self.on_saved(project_id, Operation::RemoveGalleryImage, saved)
    }

    async fn upload_and_apply(
        &mut self,
        backend: &Backend,
        project_id: &str,
        file: PathBuf,
        target: Target,
    ) -> Result<(), Failure> {
        self.begin(project_id)?;
        let uploaded = remote::intake(backend.clone(), file).await;

        match self.on_uploaded(project_id, target, uploaded)? {
            Some(project) => {
                let saved = remote::persist(backend.store.as_ref(), project).await;
                self.on_saved(project_id, target.into(), saved)
            }
            None => Ok(()),
        }
    }

    // ========== Gallery ==========

    /// Open the full-screen gallery for a project, cursor on the first image
    pub fn open_gallery(&mut self, project_id: &str) -> Option<&Gallery> {
        let gallery = Gallery::open(self.project(project_id)?);
        self.gallery = Some(gallery);
        self.gallery.as_ref()
    }

    pub fn close_gallery(&mut self) {
        self.gallery = None;
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    pub fn next_image(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.next();
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.prev();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::builtin_projects;

    #[test]
    fn test_upload_flag_counts_operations() {
        let mut portfolio = Portfolio::new(builtin_projects());
        assert!(!portfolio.is_uploading());

        portfolio.begin_operation();
        portfolio.begin_operation();
        portfolio.finish_operation();
        // the second operation is still pending
        assert!(portfolio.is_uploading());

        portfolio.finish_operation();
        assert!(!portfolio.is_uploading());

        portfolio.finish_operation();
        assert_eq!(portfolio.in_flight(), 0);
    }

    #[test]
    fn test_apply_unknown_project() {
        let mut portfolio = Portfolio::new(builtin_projects());
        assert!(portfolio.apply("missing", &Edit::SetCover("x".into())).is_none());
        assert!(portfolio.require("missing").is_err());
    }

    #[test]
    fn test_apply_refreshes_open_gallery() {
        let mut portfolio = Portfolio::new(builtin_projects());
        portfolio.open_gallery("king").unwrap();
        assert!(portfolio.gallery().unwrap().is_empty());

        portfolio.apply("king", &Edit::AppendImage("new.jpg".into()));
        assert_eq!(portfolio.gallery().unwrap().current(), Some("new.jpg"));
    }

    #[test]
    fn test_gallery_navigation() {
        let mut portfolio = Portfolio::new(builtin_projects());
        portfolio.apply("aesop", &Edit::AppendImage("1.jpg".into()));
        portfolio.apply("aesop", &Edit::AppendImage("2.jpg".into()));

        portfolio.open_gallery("aesop");
        portfolio.prev_image();
        assert_eq!(portfolio.gallery().unwrap().index(), 0);

        portfolio.next_image();
        portfolio.next_image();
        assert_eq!(portfolio.gallery().unwrap().index(), 1);

        portfolio.close_gallery();
        assert!(portfolio.gallery().is_none());
        // no gallery, nothing to move
        portfolio.next_image();
    }

    #[test]
    fn test_open_gallery_unknown_project() {
        let mut portfolio = Portfolio::new(builtin_projects());
        assert!(portfolio.open_gallery("missing").is_none());
        assert!(portfolio.gallery().is_none());
    }

    #[test]
    fn test_replace_all_reports_fallback() {
        let mut portfolio = Portfolio::default();
        portfolio.replace_all(LoadOutcome {
            projects: builtin_projects(),
            seeded: false,
            failure: Some(Failure::Load("offline".into())),
        });
        assert_eq!(portfolio.projects().len(), 6);
        assert_eq!(
            portfolio.notices().latest().unwrap().kind,
            crate::state::notice::NoticeKind::LoadFailure
        );
    }
}
