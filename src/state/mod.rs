/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures and the built-in projects (data.rs)
/// - Edits applied to a project before it is persisted (edit.rs)
/// - The portfolio view model (portfolio.rs)
/// - The gallery cursor (gallery.rs)
/// - User-facing notices (notice.rs)
/// - Page navigation (view.rs)

pub mod data;
pub mod edit;
pub mod gallery;
pub mod notice;
pub mod portfolio;
pub mod view;
