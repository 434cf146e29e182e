/// Nav bar, notice strip and the static sections
use iced::widget::{button, container, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use portfolio_editor::state::notice::Notices;
use portfolio_editor::state::view::{PageState, Section};

use crate::Message;

/// Artist name shown on the left of the nav bar
const ARTIST: &str = "Алиса Меликова";

pub fn view(page: &PageState, uploading: bool) -> Element<'static, Message> {
    let sections = Row::with_children(Section::ALL.iter().map(|&section| {
        let style = if page.section == section {
            button::primary
        } else {
            button::text
        };
        button(text(section.label()).size(14))
            .style(style)
            .on_press(Message::SelectSection(section))
            .into()
    }))
    .spacing(8);

    let edit_label = if page.edit_mode { "Готово" } else { "Редактировать" };
    let status = if uploading { "Загрузка..." } else { "" };

    row![
        text(ARTIST).size(28),
        horizontal_space(),
        text(status).size(14),
        sections,
        button(text(edit_label).size(14))
            .style(button::secondary)
            .on_press(Message::ToggleEditMode),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

/// The most recent notice, if any, with a dismiss button
pub fn notices(notices: &Notices) -> Element<'_, Message> {
    let Some(latest) = notices.latest() else {
        return Column::new().into();
    };

    let style = if latest.is_failure() {
        button::danger
    } else {
        button::success
    };

    row![
        text(format!("{}  {}", latest.at.format("%H:%M:%S"), latest.message)).size(14),
        horizontal_space(),
        button(text("×")).style(style).on_press(Message::DismissNotices),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

/// Bio, about and contacts carry static text only
pub fn placeholder(section: Section) -> Element<'static, Message> {
    container(text(section.label()).size(48))
        .width(Length::Fill)
        .padding(40)
        .into()
}
