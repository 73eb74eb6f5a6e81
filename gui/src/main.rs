mod messages;
mod state;
mod styles;
mod update;
mod views;

use iced::theme::Palette;
use iced::widget::container;
use iced::{Color, Element, Fill, Task, Theme};

use std::sync::Arc;

use zeroize::Zeroizing;

use keyport_core::{AccountEntry, ImportFlow, ImportService, NodeClient, DEFAULT_NODE_URL};

use messages::Message;
use state::Screen;

// Dark palette
const BG:      Color = Color::from_rgb(0.051, 0.067, 0.090); // #0d1117
const SURFACE: Color = Color::from_rgb(0.114, 0.157, 0.227); // #1d283a
const BORDER:  Color = Color::from_rgb(0.204, 0.259, 0.337); // #344256
const ACTIVE:  Color = Color::from_rgb(0.086, 0.137, 0.251); // #162340
const MUTED:   Color = Color::from_rgb(0.396, 0.459, 0.545); // #65758b
const PRIMARY: Color = Color::from_rgb(0.145, 0.349, 0.961); // #2559f5

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("Keyport Wallet")
        .theme(App::theme)
        .run()
}

// -- App state --

struct App {
    screen: Screen,
    service: Option<Arc<ImportService>>,
    flow: ImportFlow,

    // Key-entry form
    pri_key_input: Zeroizing<String>,
    key_error: Option<String>,
    import_loading: bool,

    // Password dialog
    password_visible: bool,
    pass: Zeroizing<String>,
    check_pass: Zeroizing<String>,
    pass_error: Option<String>,
    check_pass_error: Option<String>,

    // Account data
    address_list: Vec<AccountEntry>,
    active_account: Option<AccountEntry>,

    // UI state
    error_message: Option<String>,
    success_message: Option<String>,

    // Cached theme (avoids re-allocating every frame)
    theme: Theme,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (service, error_message) = match Self::node_client_from_args() {
            Ok(client) => (
                Some(Arc::new(ImportService::new(Arc::new(client)))),
                None,
            ),
            Err(e) => (None, Some(e.to_string())),
        };

        let app = Self {
            screen: Screen::Import,
            service,
            flow: ImportFlow::new(),
            pri_key_input: Zeroizing::new(String::new()),
            key_error: None,
            import_loading: false,
            password_visible: false,
            pass: Zeroizing::new(String::new()),
            check_pass: Zeroizing::new(String::new()),
            pass_error: None,
            check_pass_error: None,
            address_list: Vec::new(),
            active_account: None,
            error_message,
            success_message: None,
            theme: Theme::custom(
                "Keyport".to_string(),
                Palette {
                    background: BG,
                    text: Color::from_rgb(0.988, 0.988, 0.988),
                    primary: PRIMARY,
                    success: Color::from_rgb(0.059, 0.757, 0.718),
                    warning: Color::from_rgb(1.0, 0.757, 0.027),
                    danger: Color::from_rgb(0.906, 0.192, 0.192),
                },
            ),
        };
        (app, Task::none())
    }

    /// `--node <url>` overrides the local default; `--insecure` allows
    /// plain HTTP for non-loopback hosts.
    fn node_client_from_args() -> keyport_core::error::Result<NodeClient> {
        let args: Vec<String> = std::env::args().collect();
        let node_url = args
            .iter()
            .position(|a| a == "--node")
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
            .unwrap_or(DEFAULT_NODE_URL);
        let allow_insecure = args.iter().any(|a| a == "--insecure");
        NodeClient::new(node_url, allow_insecure)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    // -- Views --

    fn view(&self) -> Element<'_, Message> {
        let content: Element<Message> = match self.screen {
            Screen::Import => self.view_import(),
            Screen::AccountSelect => self.view_account_select(),
            Screen::Wallet => self.view_wallet(),
        };
        let base = container(content).center_x(Fill).center_y(Fill).padding(20);

        match self.view_password_modal() {
            Some(dialog) => views::modal(base.into(), dialog, Message::PassphraseCancelled),
            None => base.into(),
        }
    }
}
