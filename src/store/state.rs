use crate::domain::{
    Account, RecentMessage, RecentMessages, ThemeMode, UserIdentity, WalletIdentity,
};
use tracing::info;

/// Shared client state. The chrome only ever reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobalState {
    pub wallet: Option<WalletIdentity>,
    pub account: Option<Account>,
    pub recent_messages: RecentMessages,
    pub theme: ThemeMode,
}

impl GlobalState {
    /// The signed-in user as an avatar: the color follows the wallet, the
    /// account emoji replaces the initials. `None` until the account loads.
    pub fn account_user(&self) -> Option<UserIdentity> {
        let wallet = self.wallet.as_ref()?;
        let account = self.account.as_ref()?;
        Some(UserIdentity::new(wallet.address.as_str()).with_emoji(account.emoji.as_str()))
    }
}

/// Update requests accepted by the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SetWallet(Option<WalletIdentity>),
    SetTheme(ThemeMode),
    ReceiveMessage(RecentMessage),
}

pub trait Dispatcher {
    fn dispatch(&mut self, intent: Intent);
}

/// Owner and single writer of [`GlobalState`].
#[derive(Debug, Default)]
pub struct Store {
    state: GlobalState,
}

impl Store {
    pub fn new(state: GlobalState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    fn reduce(&mut self, intent: Intent) {
        match intent {
            Intent::SetWallet(wallet) => self.state.wallet = wallet,
            Intent::SetTheme(theme) => self.state.theme = theme,
            Intent::ReceiveMessage(message) => self.state.recent_messages.record(message),
        }
    }
}

impl Dispatcher for Store {
    fn dispatch(&mut self, intent: Intent) {
        info!(?intent, "dispatch");
        self.reduce(intent);
    }
}

/// Collects intents emitted during a frame so they are applied once the UI is done reading.
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain_into(&mut self, target: &mut impl Dispatcher) {
        for intent in self.pending.drain(..) {
            target.dispatch(intent);
        }
    }

    #[cfg(test)]
    pub fn pending(&self) -> &[Intent] {
        &self.pending
    }
}

impl Dispatcher for IntentQueue {
    fn dispatch(&mut self, intent: Intent) {
        self.pending.push(intent);
    }
}
