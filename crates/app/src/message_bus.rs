//! In-process message bus between the presenter and the poller.
//!
//! Two bounded tokio [`mpsc`] channels carry discrete messages in opposite
//! directions. No state is shared between the actors.
//!
//! | Direction | Message |
//! |-----------|---------|
//! | presenter → poller | [`PollerCommand::Init`], [`PollerCommand::RequestUpdate`] |
//! | poller → presenter | [`Notification::UpdateData`], [`Notification::PrinterOffline`] |

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use printmon_domain::config::MonitorConfig;
use printmon_domain::snapshot::PrinterSnapshot;

/// Default capacity of both channels.
pub const DEFAULT_CAPACITY: usize = 16;

/// Messages the presenter sends to the poller.
#[derive(Debug, Clone)]
pub enum PollerCommand {
    /// Start polling with this configuration. Sent once at startup.
    Init(MonitorConfig),
    /// Poll now, outside the regular schedule.
    RequestUpdate,
}

/// Messages the poller sends to the presenter.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A poll cycle succeeded.
    UpdateData(PrinterSnapshot),
    /// The controller is unreachable, or just reported the printer offline.
    PrinterOffline,
}

/// Presenter side of the command channel.
#[derive(Debug, Clone)]
pub struct CommandSender {
    sender: mpsc::Sender<PollerCommand>,
}

impl CommandSender {
    /// Deliver the configuration to the poller.
    ///
    /// Waits for channel capacity; a closed poller is logged and ignored.
    pub async fn init(&self, config: MonitorConfig) {
        if self.sender.send(PollerCommand::Init(config)).await.is_err() {
            tracing::warn!("poller stopped before receiving its configuration");
        }
    }

    /// Ask the poller for an immediate refresh.
    ///
    /// Never waits: when the poller is still busy with earlier requests the
    /// request is dropped and `false` is returned.
    pub fn request_update(&self) -> bool {
        match self.sender.try_send(PollerCommand::RequestUpdate) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::debug!("poller busy, refresh request dropped");
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!("poller stopped, refresh request dropped");
                false
            }
        }
    }
}

/// Poller side of the notification channel.
#[derive(Debug, Clone)]
pub struct NotificationSender {
    sender: mpsc::Sender<Notification>,
}

impl NotificationSender {
    /// Deliver a notification to the presenter.
    ///
    /// Publishing succeeds even when the presenter is gone (the message is
    /// simply dropped).
    pub async fn notify(&self, notification: Notification) {
        if self.sender.send(notification).await.is_err() {
            tracing::debug!("presenter stopped, notification dropped");
        }
    }
}

/// Create the presenter → poller channel.
#[must_use]
pub fn command_channel(capacity: usize) -> (CommandSender, mpsc::Receiver<PollerCommand>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (CommandSender { sender }, receiver)
}

/// Create the poller → presenter channel.
#[must_use]
pub fn notification_channel(
    capacity: usize,
) -> (NotificationSender, mpsc::Receiver<Notification>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (NotificationSender { sender }, receiver)
}
