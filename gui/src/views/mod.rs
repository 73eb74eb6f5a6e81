mod accounts;
mod import;
mod wallet;

use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

use crate::messages::Message;
use crate::styles;

/// Overlay `dialog` on top of `base` with a dimmed backdrop. Clicking
/// outside the dialog sends `on_blur`.
pub(crate) fn modal<'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    let overlay = opaque(
        mouse_area(center(opaque(dialog)).style(styles::backdrop)).on_press(on_blur),
    );
    stack([base, overlay]).into()
}

/// `0x1234...abcd` shortening for addresses in list rows and headers.
pub(crate) fn short_address(address: &str) -> String {
    if address.len() > 20 {
        format!(
            "{}...{}",
            &address[..10],
            &address[address.len() - 8..]
        )
    } else {
        address.to_string()
    }
}
