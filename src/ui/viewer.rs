/// Full-screen gallery viewer
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use portfolio_editor::state::gallery::Gallery;

use crate::Message;

pub fn view(gallery: &Gallery, edit_mode: bool) -> Element<'_, Message> {
    let position = if gallery.is_empty() {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", gallery.index() + 1, gallery.len())
    };

    let header = row![
        text(position).size(14),
        horizontal_space(),
        button(text("Закрыть")).on_press(Message::CloseGallery),
    ]
    .align_y(Alignment::Center);

    let image = container(text(gallery.current().unwrap_or("Нет изображений")).size(16))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let mut controls = row![
        button(text("←")).on_press_maybe(gallery.has_prev().then_some(Message::PrevImage)),
        horizontal_space(),
        button(text("→")).on_press_maybe(gallery.has_next().then_some(Message::NextImage)),
    ]
    .spacing(16);

    if edit_mode && !gallery.is_empty() {
        controls = controls.push(
            button(text("Удалить"))
                .style(button::danger)
                .on_press(Message::RemoveImage(
                    gallery.project_id().to_string(),
                    gallery.index(),
                )),
        );
    }

    container(column![header, image, controls].spacing(20).padding(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
