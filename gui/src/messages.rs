use crate::state::Screen;
use keyport_core::{ImportOutcome, Navigation};
use zeroize::Zeroizing;

// -- Messages --

#[derive(Clone)]
pub(crate) enum Message {
    // Navigation
    GoTo(Screen),

    // Key-entry form
    PriKeyChanged(Zeroizing<String>),
    SubmitKey,

    // Password dialog
    PassChanged(Zeroizing<String>),
    CheckPassChanged(Zeroizing<String>),
    PassphraseConfirmed,
    PassphraseSkipped,
    PassphraseCancelled,

    // Async results
    ImportFinished(ImportOutcome),
    AccountsLoaded(Result<Navigation, String>),

    // Account selection
    AccountChosen(usize),
}
