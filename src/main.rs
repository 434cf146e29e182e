use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing_subscriber::EnvFilter;

use portfolio_editor::remote::{self, Backend, LoadOutcome};
use portfolio_editor::state::edit::{Operation, Target};
use portfolio_editor::state::view::{PageState, Section};
use portfolio_editor::{Config, Failure, Portfolio, Project};

mod ui;

/// Main application state
struct PortfolioEditor {
    /// Projects, gallery cursor, upload activity and notices
    portfolio: Portfolio,
    /// Nav bar, expanded card, edit mode
    page: PageState,
    /// Store, uploader and intake limits
    backend: Backend,
    /// True until the first load settles
    loading: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Project list arrived (possibly the built-in fallback)
    Loaded(LoadOutcome),
    SelectSection(Section),
    ToggleProject(String),
    ToggleEditMode,
    OpenGallery(String),
    NextImage,
    PrevImage,
    CloseGallery,
    /// Owner wants a new cover for this project
    PickCover(String),
    /// Owner wants to add a gallery image to this project
    PickGalleryImage(String),
    /// Normalize + upload finished
    Uploaded {
        project_id: String,
        target: Target,
        result: Result<String, Failure>,
    },
    RemoveImage(String, usize),
    /// Whole-record save finished
    Saved {
        project_id: String,
        operation: Operation,
        result: Result<(), Failure>,
    },
    DismissNotices,
}

impl PortfolioEditor {
    /// Create a new instance of the application and start loading projects
    fn new(backend: Backend) -> (Self, Task<Message>) {
        let store = backend.store.clone();
        let load = Task::perform(
            async move { remote::load_projects(store.as_ref()).await },
            Message::Loaded,
        );

        (
            PortfolioEditor {
                portfolio: Portfolio::default(),
                page: PageState::default(),
                backend,
                loading: true,
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(outcome) => {
                self.loading = false;
                if outcome.seeded {
                    self.portfolio.confirm("Store seeded with built-in projects");
                }
                self.portfolio.replace_all(outcome);
                Task::none()
            }
            Message::SelectSection(section) => {
                self.page.select_section(section);
                Task::none()
            }
            Message::ToggleProject(project_id) => {
                self.page.toggle_project(&project_id);
                Task::none()
            }
            Message::ToggleEditMode => {
                self.page.toggle_edit_mode();
                Task::none()
            }
            Message::OpenGallery(project_id) => {
                self.portfolio.open_gallery(&project_id);
                Task::none()
            }
            Message::NextImage => {
                self.portfolio.next_image();
                Task::none()
            }
            Message::PrevImage => {
                self.portfolio.prev_image();
                Task::none()
            }
            Message::CloseGallery => {
                self.portfolio.close_gallery();
                Task::none()
            }
            Message::PickCover(project_id) => self.start_upload(project_id, Target::Cover),
            Message::PickGalleryImage(project_id) => {
                self.start_upload(project_id, Target::Gallery)
            }
            Message::Uploaded {
                project_id,
                target,
                result,
            } => match self.portfolio.on_uploaded(&project_id, target, result) {
                Ok(Some(project)) => self.save(project_id, target.into(), project),
                _ => Task::none(),
            },
            Message::RemoveImage(project_id, index) => {
                match self.portfolio.begin_removal(&project_id, index) {
                    Ok(project) => self.save(project_id, Operation::RemoveGalleryImage, project),
                    Err(_) => Task::none(),
                }
            }
            Message::Saved {
                project_id,
                operation,
                result,
            } => {
                let _ = self.portfolio.on_saved(&project_id, operation, result);
                Task::none()
            }
            Message::DismissNotices => {
                self.portfolio.dismiss_notices();
                Task::none()
            }
        }
    }

    /// Show the file picker and kick off normalize + upload in the background
    fn start_upload(&mut self, project_id: String, target: Target) -> Task<Message> {
        if let Err(failure) = self.portfolio.require(&project_id) {
            self.portfolio.report(failure);
            return Task::none();
        }

        let title = match target {
            Target::Cover => "Select Cover Image",
            Target::Gallery => "Select Gallery Image",
        };
        let Some(file) = FileDialog::new().set_title(title).pick_file() else {
            return Task::none();
        };
        if self.portfolio.begin(&project_id).is_err() {
            return Task::none();
        }
        tracing::info!("Uploading {} for '{}'", file.display(), project_id);

        Task::perform(
            remote::intake(self.backend.clone(), file),
            move |result| Message::Uploaded {
                project_id: project_id.clone(),
                target,
                result,
            },
        )
    }

    /// Persist the whole project; `Saved` settles the operation
    fn save(&self, project_id: String, operation: Operation, project: Project) -> Task<Message> {
        let store = self.backend.store.clone();
        Task::perform(
            async move { remote::persist(store.as_ref(), project).await },
            move |result| Message::Saved {
                project_id: project_id.clone(),
                operation,
                result,
            },
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if let Some(gallery) = self.portfolio.gallery() {
            return ui::viewer::view(gallery, self.page.edit_mode);
        }

        let body = match self.page.section {
            Section::Portfolio => ui::grid::view(
                self.portfolio.projects(),
                &self.page,
                self.loading,
            ),
            section => ui::nav::placeholder(section),
        };

        let content = column![
            ui::nav::view(&self.page, self.portfolio.is_uploading()),
            ui::nav::notices(self.portfolio.notices()),
            scrollable(body).height(Length::Fill),
        ]
        .spacing(20)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("{}; using default config", e);
        Config::default()
    });
    tracing::info!(
        "Project store at {}, uploads to {}",
        config.projects_endpoint,
        config.upload_endpoint
    );
    let backend = Backend::from_config(&config)?;

    iced::application("Portfolio Editor", PortfolioEditor::update, PortfolioEditor::view)
        .theme(PortfolioEditor::theme)
        .centered()
        .run_with(move || PortfolioEditor::new(backend))?;

    Ok(())
}
