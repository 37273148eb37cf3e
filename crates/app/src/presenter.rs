//! Presenter — keeps the last snapshot and camera reachability, re-renders
//! the widget and publishes it as a [`Frame`].
//!
//! The presenter owns its state exclusively. Readers (the HTTP adapter) get
//! frames through a [`watch`] channel and never touch the presenter itself.
//! Every handler that changes what is displayed re-renders as its last step.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio::time::{Instant, MissedTickBehavior};

use printmon_domain::config::MonitorConfig;
use printmon_domain::snapshot::PrinterSnapshot;
use printmon_domain::widget::{Widget, render};

use crate::message_bus::{CommandSender, Notification};
use crate::ports::StreamProbe;

/// What readers see: the rendered widget plus the state it was rendered from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// `false` while hidden because the printer is offline.
    pub visible: bool,
    pub camera_available: bool,
    pub snapshot: Option<PrinterSnapshot>,
    pub widget: Widget,
}

impl Frame {
    /// The frame shown before any data arrived.
    #[must_use]
    pub fn initial(config: &MonitorConfig) -> Self {
        Self {
            visible: true,
            camera_available: true,
            snapshot: None,
            widget: render(None, true, config),
        }
    }
}

/// Maintains display state and regenerates the widget on demand.
pub struct Presenter<P> {
    config: MonitorConfig,
    probe: Arc<P>,
    commands: CommandSender,
    frames: watch::Sender<Frame>,
    printer_data: Option<PrinterSnapshot>,
    camera_available: bool,
    visible: bool,
}

impl<P: StreamProbe + 'static> Presenter<P> {
    /// Create a presenter. The stream URL is derived from the controller URL
    /// when not configured.
    pub fn new(
        config: MonitorConfig,
        probe: Arc<P>,
        commands: CommandSender,
        frames: watch::Sender<Frame>,
    ) -> Self {
        let config = config.with_derived_stream_url();
        if config.debug_mode {
            tracing::debug!(?config, "starting presenter");
        }
        Self {
            config,
            probe,
            commands,
            frames,
            printer_data: None,
            camera_available: true,
            visible: true,
        }
    }

    /// The last snapshot received, even while hidden.
    #[must_use]
    pub fn printer_data(&self) -> Option<&PrinterSnapshot> {
        self.printer_data.as_ref()
    }

    #[must_use]
    pub fn camera_available(&self) -> bool {
        self.camera_available
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Dispatch a notification from the poller.
    pub fn on_notification(&mut self, notification: Notification) {
        match notification {
            Notification::UpdateData(snapshot) => self.on_snapshot(snapshot),
            Notification::PrinterOffline => self.on_offline(),
        }
    }

    /// Store a new snapshot; receiving data means the printer is online.
    pub fn on_snapshot(&mut self, snapshot: PrinterSnapshot) {
        if self.config.debug_mode {
            tracing::debug!(?snapshot, "received printer data");
        }
        self.printer_data = Some(snapshot);
        if self.config.hide_module_when_offline {
            self.visible = true;
        }
        self.render();
    }

    /// Hide the widget when configured to; the stored snapshot is kept.
    pub fn on_offline(&mut self) {
        if self.config.debug_mode {
            tracing::debug!("printer is offline");
        }
        if self.config.hide_module_when_offline {
            self.visible = false;
            self.frames.send_modify(|frame| frame.visible = false);
        }
    }

    /// Record the outcome of a camera probe.
    pub fn set_camera_available(&mut self, available: bool) {
        if available != self.camera_available {
            tracing::info!(available, "camera reachability changed");
        }
        self.camera_available = available;
        self.render();
    }

    /// Rebuild the widget from the current state and publish it.
    pub fn render(&self) {
        let frame = Frame {
            visible: self.visible,
            camera_available: self.camera_available,
            snapshot: self.printer_data.clone(),
            widget: render(self.printer_data.as_ref(), self.camera_available, &self.config),
        };
        self.frames.send_replace(frame);
    }

    /// Probe the configured stream URL. No URL means unreachable.
    fn spawn_probe(&self, probes: &mut JoinSet<bool>) {
        let probe = Arc::clone(&self.probe);
        let stream_url = self.config.stream_url().map(str::to_string);
        probes.spawn(async move {
            match stream_url {
                Some(url) => probe.is_reachable(&url).await,
                None => false,
            }
        });
    }

    /// Send `INIT` to the poller, then serve timer ticks, probe results and
    /// notifications until shutdown.
    pub async fn run(
        mut self,
        mut notifications: mpsc::Receiver<Notification>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        self.commands.init(self.config.clone()).await;
        self.render();

        let period = self.config.update_interval();
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut probes = JoinSet::new();

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    if probes.is_empty() {
                        self.spawn_probe(&mut probes);
                    } else {
                        tracing::debug!("camera probe still in flight, skipping");
                    }
                    self.commands.request_update();
                }
                Some(joined) = probes.join_next(), if !probes.is_empty() => {
                    let available = joined.unwrap_or_else(|err| {
                        tracing::warn!(error = %err, "camera probe task failed");
                        false
                    });
                    self.set_camera_available(available);
                }
                notification = notifications.recv() => match notification {
                    Some(notification) => self.on_notification(notification),
                    None => break,
                },
            }
        }

        probes.abort_all();
        tracing::debug!("presenter stopped");
    }
}
