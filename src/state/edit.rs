/// Project edits
///
/// Each mutating portfolio operation boils down to one of these, applied
/// to the in-memory project before the whole record is persisted.

use super::data::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the cover with an uploaded image
    SetCover(String),
    /// Append an uploaded image to the end of the gallery
    AppendImage(String),
    /// Drop the gallery image at this index
    RemoveImage(usize),
}

impl Edit {
    /// Apply to a project. Returns whether anything changed.
    ///
    /// - appending a URL the gallery already has is ignored, so `images`
    ///   never holds duplicates
    /// - removing past the end is a no-op
    pub fn apply(&self, project: &mut Project) -> bool {
        match self {
            Edit::SetCover(url) => {
                let changed = project.cover.as_deref() != Some(url.as_str());
                project.cover = Some(url.clone());
                changed
            }
            Edit::AppendImage(url) => {
                if project.images.contains(url) {
                    return false;
                }
                project.images.push(url.clone());
                true
            }
            Edit::RemoveImage(index) => {
                if *index >= project.images.len() {
                    return false;
                }
                project.images.remove(*index);
                true
            }
        }
    }
}

/// Which part of a project an upload is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Cover,
    Gallery,
}

impl Target {
    /// The edit that places an uploaded URL
    pub fn edit(self, url: String) -> Edit {
        match self {
            Target::Cover => Edit::SetCover(url),
            Target::Gallery => Edit::AppendImage(url),
        }
    }
}

/// A mutating portfolio operation, as reported once its save settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReplaceCover,
    AddGalleryImage,
    RemoveGalleryImage,
}

impl Operation {
    pub fn done_message(self) -> &'static str {
        match self {
            Operation::ReplaceCover => "Cover updated",
            Operation::AddGalleryImage => "Image added",
            Operation::RemoveGalleryImage => "Image removed",
        }
    }
}

impl From<Target> for Operation {
    fn from(target: Target) -> Self {
        match target {
            Target::Cover => Operation::ReplaceCover,
            Target::Gallery => Operation::AddGalleryImage,
        }
    }
}
