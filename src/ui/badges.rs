use serde::Deserialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Mail,
    Notifications,
}

/// What happens to a seen channel when more items show up later in the session.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnreadPolicy {
    /// Once seen, the channel stays quiet for the rest of the session.
    #[default]
    Sticky,
    /// The badge comes back as soon as the count grows past what was seen.
    ResetOnGrowth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ChannelState {
    unread: bool,
    seen_count: usize,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            unread: true,
            seen_count: 0,
        }
    }
}

/// Unread flags of the mail and notification badges.
#[derive(Debug, Default)]
pub struct NotificationBadges {
    policy: UnreadPolicy,
    mail: ChannelState,
    notifications: ChannelState,
}

impl NotificationBadges {
    pub fn new(policy: UnreadPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    fn channel(&self, channel: Channel) -> &ChannelState {
        match channel {
            Channel::Mail => &self.mail,
            Channel::Notifications => &self.notifications,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut ChannelState {
        match channel {
            Channel::Mail => &mut self.mail,
            Channel::Notifications => &mut self.notifications,
        }
    }

    /// Marks `channel` as seen with `count` items currently in it.
    pub fn mark_seen(&mut self, channel: Channel, count: usize) {
        let state = self.channel_mut(channel);
        if state.unread {
            debug!(?channel, count, "badge seen");
        }
        state.unread = false;
        state.seen_count = count;
    }

    /// Re-evaluates `channel` against its current count. Only matters under
    /// [`UnreadPolicy::ResetOnGrowth`].
    pub fn observe(&mut self, channel: Channel, count: usize) {
        if self.policy != UnreadPolicy::ResetOnGrowth {
            return;
        }
        let state = self.channel_mut(channel);
        if !state.unread && count > state.seen_count {
            debug!(?channel, count, "badge unread again");
            state.unread = true;
        }
    }

    pub fn is_unread(&self, channel: Channel) -> bool {
        self.channel(channel).unread
    }

    /// Badge content: the count while unread, no badge once seen.
    pub fn badge(&self, channel: Channel, count: usize) -> Option<usize> {
        self.is_unread(channel).then_some(count)
    }
}
