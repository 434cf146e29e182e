use super::data::Project;

/// Full-screen gallery cursor for one project
///
/// Holds a copy of the project's images taken when the gallery opened.
/// The cursor is clamped: stepping past either end does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    project_id: String,
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    pub fn open(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            images: project.images.clone(),
            index: 0,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image under the cursor, None for an empty gallery
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.images.len()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.index -= 1;
        }
    }

    /// Pick up a changed image list for the same project
    pub(crate) fn refresh(&mut self, project: &Project) {
        self.images = project.images.clone();
        self.index = self.index.min(self.images.len().saturating_sub(1));
    }
}
