use crate::messages::Message;
use crate::{styles, App, MUTED};
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Element, Length};
use zeroize::Zeroizing;

impl App {
    pub(crate) fn view_import(&self) -> Element<'_, Message> {
        let title = text("Import Private Key").size(24);
        let hint = text("Paste the private key of an existing account. The node stores it; an optional password asks the node to encrypt it.")
            .size(13)
            .color(MUTED);

        let key = text_input("Private key", &self.pri_key_input)
            .on_input(|s| Message::PriKeyChanged(Zeroizing::new(s)))
            .on_submit(Message::SubmitKey)
            .secure(true);

        let mut import = button(text("Import").size(14))
            .padding([10, 20])
            .style(styles::btn_primary);
        if !self.import_loading {
            import = import.on_press(Message::SubmitKey);
        }

        let mut col = column![title, Space::new().height(4), hint, Space::new().height(8), key]
            .spacing(5)
            .max_width(440);

        if let Some(err) = &self.key_error {
            col = col.push(text(err.clone()).size(12).color(styles::DANGER));
        }

        col = col.push(Space::new().height(8));
        col = col.push(import);

        if self.import_loading {
            col = col.push(text("Importing account...").size(13).color(MUTED));
        }
        if let Some(msg) = &self.success_message {
            col = col.push(text(msg.clone()).size(13).color(styles::ACCENT));
        }
        if let Some(err) = &self.error_message {
            col = col.push(text(err.clone()).size(13).color(styles::WARNING));
        }

        col.into()
    }

    /// The password-capture dialog, shown as a modal over the form.
    pub(crate) fn view_password_modal(&self) -> Option<Element<'_, Message>> {
        if !self.password_visible {
            return None;
        }

        let mut detail = column![].spacing(8);

        detail = detail.push(text("Protect This Key").size(18).font(styles::BOLD));
        detail = detail.push(
            text("Set a password to have the node encrypt the key, or skip to store it unprotected.")
                .size(12)
                .color(MUTED),
        );
        detail = detail.push(Space::new().height(4));

        detail = detail.push(
            text_input("Password", &self.pass)
                .on_input(|s| Message::PassChanged(Zeroizing::new(s)))
                .secure(true),
        );
        if let Some(err) = &self.pass_error {
            detail = detail.push(text(err.clone()).size(12).color(styles::DANGER));
        }

        detail = detail.push(
            text_input("Confirm password", &self.check_pass)
                .on_input(|s| Message::CheckPassChanged(Zeroizing::new(s)))
                .on_submit(Message::PassphraseConfirmed)
                .secure(true),
        );
        if let Some(err) = &self.check_pass_error {
            detail = detail.push(text(err.clone()).size(12).color(styles::DANGER));
        }

        detail = detail.push(Space::new().height(8));

        let skip = button(text("Skip").size(14))
            .padding([10, 24])
            .style(styles::btn_ghost)
            .on_press(Message::PassphraseSkipped);
        let confirm = button(text("Confirm").size(14))
            .padding([10, 24])
            .style(styles::btn_primary)
            .on_press(Message::PassphraseConfirmed);

        detail = detail.push(
            row![skip, Space::new().width(Length::Fill), confirm]
                .spacing(12)
                .align_y(iced::Alignment::Center),
        );

        let card = container(detail)
            .padding(24)
            .width(Length::Fixed(420.0))
            .style(styles::card);

        Some(card.into())
    }
}
