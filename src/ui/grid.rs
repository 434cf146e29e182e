/// Project grid: three cards per row
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length};

use portfolio_editor::state::view::PageState;
use portfolio_editor::Project;

use crate::Message;

const COLUMNS: usize = 3;

pub fn view<'a>(projects: &'a [Project], page: &PageState, loading: bool) -> Element<'a, Message> {
    if loading {
        return text("Загрузка проектов...").size(16).into();
    }

    let rows = projects.chunks(COLUMNS).map(|chunk| {
        Row::with_children(chunk.iter().map(|project| card(project, page)))
            .spacing(32)
            .into()
    });

    column![
        text("Проекты").size(56),
        Column::with_children(rows).spacing(32),
    ]
    .spacing(32)
    .into()
}

fn card<'a>(project: &'a Project, page: &PageState) -> Element<'a, Message> {
    let cover = text(project.thumbnail().unwrap_or("нет изображения")).size(12);

    let title = button(text(project.title.as_str()).size(22))
        .style(button::text)
        .padding(0)
        .on_press(Message::ToggleProject(project.id.clone()));

    let description = page
        .is_expanded(&project.id)
        .then(|| text(project.description.as_str()).size(14));

    let mut actions = row![button(text(format!("Галерея ({})", project.images.len())).size(13))
        .style(button::secondary)
        .on_press(Message::OpenGallery(project.id.clone()))]
    .spacing(8);

    if page.edit_mode {
        actions = actions
            .push(
                button(text("Обложка").size(13))
                    .on_press(Message::PickCover(project.id.clone())),
            )
            .push(
                button(text("Добавить фото").size(13))
                    .on_press(Message::PickGalleryImage(project.id.clone())),
            );
    }

    let content = Column::new()
        .push(cover)
        .push(title)
        .push(text(project.year.as_str()).size(14))
        .push_maybe(description)
        .push(actions)
        .spacing(8);

    container(content)
        .style(container::rounded_box)
        .padding(16)
        .width(Length::FillPortion(1))
        .into()
}
