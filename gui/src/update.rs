use iced::Task;

use zeroize::{Zeroize, Zeroizing};

use crate::messages::Message;
use crate::state::Screen;
use crate::App;
use keyport_core::{
    validate_confirmation, validate_passphrase, ImportOutcome, Navigation, PassphraseOutcome,
    SessionStore,
};

impl App {
    // -- Update --

    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoTo(screen) => {
                self.clear_form();
                if screen == Screen::Import {
                    self.flow.reset();
                    self.active_account = None;
                }
                self.screen = screen;
                Task::none()
            }

            // -- Key-entry form --
            Message::PriKeyChanged(v) => {
                self.pri_key_input = v;
                self.key_error = None;
                Task::none()
            }

            Message::SubmitKey => {
                if self.import_loading {
                    return Task::none();
                }
                match self.flow.begin(&self.pri_key_input) {
                    Ok(()) => {
                        // Open the password dialog with a clean slate.
                        self.key_error = None;
                        self.reset_dialog_fields();
                        self.password_visible = true;
                    }
                    Err(e) => {
                        self.key_error = Some(e.to_string());
                    }
                }
                Task::none()
            }

            // -- Password dialog --
            Message::PassChanged(v) => {
                self.pass = v;
                self.pass_error = validate_passphrase(&self.pass).err().map(|e| e.to_string());
                // A non-empty confirmation is checked again on every
                // change of the main field.
                if !self.check_pass.is_empty() {
                    self.check_pass_error = validate_confirmation(&self.pass, &self.check_pass)
                        .err()
                        .map(|e| e.to_string());
                }
                Task::none()
            }

            Message::CheckPassChanged(v) => {
                self.check_pass = v;
                self.check_pass_error = if self.check_pass.is_empty() {
                    None
                } else {
                    validate_confirmation(&self.pass, &self.check_pass)
                        .err()
                        .map(|e| e.to_string())
                };
                Task::none()
            }

            Message::PassphraseConfirmed => {
                let pass_err = validate_passphrase(&self.pass).err();
                let check_err = validate_confirmation(&self.pass, &self.check_pass).err();
                if pass_err.is_some() || check_err.is_some() {
                    // Invalid form: nothing is emitted, the dialog stays.
                    self.pass_error = pass_err.map(|e| e.to_string());
                    self.check_pass_error = check_err.map(|e| e.to_string());
                    return Task::none();
                }
                let outcome =
                    PassphraseOutcome::Protected(Zeroizing::new(self.check_pass.to_string()));
                self.start_submission(outcome)
            }

            Message::PassphraseSkipped => self.start_submission(PassphraseOutcome::Skipped),

            Message::PassphraseCancelled => {
                self.reset_dialog_fields();
                self.password_visible = false;
                self.flow.reset();
                Task::none()
            }

            // -- Async results --
            Message::ImportFinished(outcome) => {
                self.import_loading = false;
                self.flow.reset();
                match outcome {
                    ImportOutcome::Imported { address, encrypted } => {
                        if let Err(e) = persist_import(&address, encrypted) {
                            eprintln!("Failed to persist session state: {e}");
                        }
                        self.success_message = Some("Account imported.".into());
                        self.refresh_accounts()
                    }
                    ImportOutcome::Rejected { message } => {
                        self.error_message = Some(format!("Import failed: {message}"));
                        Task::none()
                    }
                    // The request never settled. The original client
                    // showed success and refreshed anyway; kept as-is.
                    ImportOutcome::TransportLost => {
                        self.success_message = Some("Account imported.".into());
                        self.refresh_accounts()
                    }
                }
            }

            Message::AccountsLoaded(result) => {
                match result {
                    Ok(Navigation::Wallet(entry)) => {
                        if let Err(e) = persist_active(&entry) {
                            eprintln!("Failed to persist session state: {e}");
                        }
                        self.active_account = Some(entry);
                        self.screen = Screen::Wallet;
                    }
                    Ok(Navigation::AccountSelect(list)) => {
                        self.address_list = list;
                        self.screen = Screen::AccountSelect;
                    }
                    Err(e) => {
                        // Silent path: the user stays where they are.
                        eprintln!("Account list refresh failed: {e}");
                    }
                }
                Task::none()
            }

            // -- Account selection --
            Message::AccountChosen(index) => {
                let Some(entry) = self.address_list.get(index).cloned() else {
                    return Task::none();
                };
                if let Err(e) = persist_active(&entry) {
                    eprintln!("Failed to persist session state: {e}");
                }
                self.active_account = Some(entry);
                self.screen = Screen::Wallet;
                Task::none()
            }
        }
    }

    /// Resolve the flow with the dialog outcome and fire the import.
    fn start_submission(&mut self, outcome: PassphraseOutcome) -> Task<Message> {
        let request = match self.flow.resolve(&outcome) {
            Ok(request) => request,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return Task::none();
            }
        };

        // The dialog is done with its secrets either way.
        self.reset_dialog_fields();
        self.password_visible = false;
        self.import_loading = true;
        self.error_message = None;
        self.success_message = None;

        let Some(service) = self.service.clone() else {
            self.import_loading = false;
            self.flow.reset();
            self.error_message = Some("No node connection configured.".into());
            return Task::none();
        };

        Task::perform(
            async move { service.submit_import(&request).await },
            Message::ImportFinished,
        )
    }

    fn refresh_accounts(&mut self) -> Task<Message> {
        let Some(service) = self.service.clone() else {
            return Task::none();
        };
        Task::perform(async move { service.refresh_accounts().await }, |r| {
            Message::AccountsLoaded(r.map_err(|e| e.to_string()))
        })
    }

    // -- Helpers --

    fn reset_dialog_fields(&mut self) {
        self.pass.zeroize();
        self.check_pass.zeroize();
        self.pass_error = None;
        self.check_pass_error = None;
    }

    fn clear_form(&mut self) {
        self.pri_key_input.zeroize();
        self.key_error = None;
        self.reset_dialog_fields();
        self.password_visible = false;
        self.error_message = None;
        self.success_message = None;
    }
}

fn persist_import(address: &str, encrypted: bool) -> keyport_core::error::Result<()> {
    let mut store = SessionStore::open()?;
    store.record_import(address, encrypted)
}

fn persist_active(entry: &keyport_core::AccountEntry) -> keyport_core::error::Result<()> {
    let mut store = SessionStore::open()?;
    store.record_active_account(entry)
}
