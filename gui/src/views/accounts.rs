use crate::messages::Message;
use crate::state::Screen;
use crate::views::short_address;
use crate::{styles, App, MUTED};
use iced::widget::{button, column, row, text, Space};
use iced::{Element, Fill, Font};

impl App {
    pub(crate) fn view_account_select(&self) -> Element<'_, Message> {
        let title = text("Choose an Account").size(24);

        let mut col = column![title, Space::new().height(10)]
            .spacing(6)
            .max_width(480);

        if self.address_list.is_empty() {
            col = col.push(text("No accounts on this node yet.").size(14).color(MUTED));
        }

        for (i, entry) in self.address_list.iter().enumerate() {
            let protection = if entry.encrypted {
                text("protected").size(12).color(styles::ACCENT)
            } else {
                text("unprotected").size(12).color(MUTED)
            };
            let label = row![
                text(short_address(&entry.address))
                    .size(14)
                    .font(Font::MONOSPACE),
                Space::new().width(Fill),
                protection,
            ]
            .align_y(iced::Alignment::Center);

            col = col.push(
                button(label)
                    .padding([12, 16])
                    .width(Fill)
                    .style(styles::list_row)
                    .on_press(Message::AccountChosen(i)),
            );
        }

        col = col.push(Space::new().height(10));
        col = col.push(
            button(text("Import another key").size(14))
                .padding([10, 20])
                .style(styles::btn_secondary)
                .on_press(Message::GoTo(Screen::Import)),
        );

        col.into()
    }
}
