use crate::messages::Message;
use crate::state::Screen;
use crate::{styles, App, MUTED};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Font, Length};

impl App {
    pub(crate) fn view_wallet(&self) -> Element<'_, Message> {
        let Some(account) = &self.active_account else {
            // Refresh settled without an account; back to the form.
            return self.view_import();
        };

        let title = text("Wallet").size(24);

        let protection = if account.encrypted {
            text("Protected with a password").size(13).color(styles::ACCENT)
        } else {
            text("Not password-protected").size(13).color(styles::WARNING)
        };

        let detail = column![
            text("Address").size(12).color(MUTED),
            text(account.address.clone()).size(14).font(Font::MONOSPACE),
            Space::new().height(8),
            protection,
        ]
        .spacing(4);

        let card = container(detail)
            .padding(24)
            .width(Length::Fixed(480.0))
            .style(styles::card);

        let import_more = button(text("Import another key").size(14))
            .padding([10, 20])
            .style(styles::btn_secondary)
            .on_press(Message::GoTo(Screen::Import));

        column![
            title,
            Space::new().height(10),
            card,
            Space::new().height(10),
            row![import_more].spacing(10),
        ]
        .spacing(5)
        .into()
    }
}
