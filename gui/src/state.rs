// -- Screens --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Key-entry form (the password dialog overlays this screen).
    Import,
    /// Pick one of several accounts returned by the node.
    AccountSelect,
    /// Active account view.
    Wallet,
}
