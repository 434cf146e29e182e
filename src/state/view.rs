/// Page navigation state
///
/// Which section the nav bar highlights, which project card is expanded,
/// and whether the owner has switched editing on.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Portfolio,
    Bio,
    About,
    Contacts,
}

impl Section {
    /// Nav bar order
    pub const ALL: [Section; 4] = [
        Section::Portfolio,
        Section::Bio,
        Section::About,
        Section::Contacts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Portfolio => "Портфолио",
            Section::Bio => "Биография",
            Section::About => "О работе",
            Section::Contacts => "Контакты",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub section: Section,
    /// Project whose description is shown under its card
    pub expanded: Option<String>,
    pub edit_mode: bool,
}

impl PageState {
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Clicking an expanded card collapses it, any other card takes over
    pub fn toggle_project(&mut self, project_id: &str) {
        if self.expanded.as_deref() == Some(project_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(project_id.to_string());
        }
    }

    pub fn is_expanded(&self, project_id: &str) -> bool {
        self.expanded.as_deref() == Some(project_id)
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }
}
