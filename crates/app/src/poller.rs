//! Poller — fetches controller state on a fixed schedule.
//!
//! The poller waits for [`PollerCommand::Init`], polls once immediately and
//! then on every timer tick or [`PollerCommand::RequestUpdate`]. Each cycle
//! fetches both status documents concurrently and either fails or succeeds
//! as a unit:
//!
//! - failure: log, mark the printer offline, send
//!   [`Notification::PrinterOffline`], no [`Notification::UpdateData`];
//! - success: send [`Notification::UpdateData`], plus
//!   [`Notification::PrinterOffline`] when the reported state just became
//!   `Offline`.
//!
//! Cycles run inside the poller task one after another, so a slow cycle
//! delays the next tick instead of overlapping with it.

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, Interval, MissedTickBehavior};

use printmon_domain::config::MonitorConfig;
use printmon_domain::online::{OnlineTracker, Transition};
use printmon_domain::snapshot::PrinterSnapshot;
use printmon_domain::time::now;

use crate::message_bus::{Notification, NotificationSender, PollerCommand};
use crate::ports::PrinterController;

/// What a single poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No usable configuration; no request was made.
    Skipped,
    /// Both documents were fetched and a snapshot was sent.
    Updated(Option<Transition>),
    /// A request failed; the printer was reported offline.
    Failed,
}

/// Owns the controller connection and produces snapshots.
pub struct Poller<C> {
    controller: C,
    notifications: NotificationSender,
    config: Option<MonitorConfig>,
    online: OnlineTracker,
}

impl<C: PrinterController> Poller<C> {
    /// Create a poller that reports to `notifications`.
    pub fn new(controller: C, notifications: NotificationSender) -> Self {
        Self {
            controller,
            notifications,
            config: None,
            online: OnlineTracker::default(),
        }
    }

    /// Store the configuration, deriving the stream URL if needed.
    pub fn init(&mut self, config: MonitorConfig) {
        let config = config.with_derived_stream_url();
        if config.debug_mode {
            tracing::debug!(?config, "poller configuration received");
        }
        self.config = Some(config);
    }

    /// Run one poll cycle.
    pub async fn poll(&mut self) -> PollOutcome {
        let Some(config) = self.config.as_ref() else {
            tracing::error!("missing configuration for the controller API");
            return PollOutcome::Skipped;
        };
        if let Err(err) = config.validate_connection() {
            tracing::error!(error = %err, "missing configuration for the controller API");
            return PollOutcome::Skipped;
        }

        let fetched = tokio::try_join!(
            self.controller.fetch_printer(config),
            self.controller.fetch_job(config),
        );

        match fetched {
            Ok((printer, job)) => {
                let snapshot =
                    PrinterSnapshot::from_status(&printer, &job, config.base_url(), now());
                if config.debug_mode {
                    tracing::debug!(?snapshot, "printer data fetched");
                }

                let transition = self.online.observe(&snapshot.printer_state);
                let state = snapshot.printer_state.clone();
                self.notifications
                    .notify(Notification::UpdateData(snapshot))
                    .await;

                match transition {
                    Some(Transition::WentOffline) => {
                        tracing::info!(%state, "printer went offline");
                        self.notifications.notify(Notification::PrinterOffline).await;
                    }
                    Some(Transition::CameOnline) => {
                        tracing::info!(%state, "printer is online");
                    }
                    None => {}
                }
                PollOutcome::Updated(transition)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    source = ?std::error::Error::source(&err),
                    "failed to fetch data from the controller API"
                );
                self.online.mark_unreachable();
                self.notifications.notify(Notification::PrinterOffline).await;
                PollOutcome::Failed
            }
        }
    }

    /// Serve commands and timer ticks until shutdown.
    ///
    /// Returns when `shutdown` flips (or its sender is dropped) or when the
    /// command channel closes.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<PollerCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker: Option<Interval> = None;

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                command = commands.recv() => match command {
                    Some(PollerCommand::Init(config)) => {
                        let period = config.update_interval();
                        self.init(config);
                        self.poll().await;
                        ticker = Some(schedule(period));
                    }
                    Some(PollerCommand::RequestUpdate) => {
                        self.poll().await;
                    }
                    None => break,
                },
                () = next_tick(&mut ticker) => {
                    self.poll().await;
                }
            }
        }

        tracing::debug!("poller stopped");
    }
}

fn schedule(period: std::time::Duration) -> Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Wait for the next tick, or forever when polling has not started yet.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
