//! Monitor — wires the poller and the presenter together and owns their tasks.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use printmon_domain::config::MonitorConfig;

use crate::message_bus::{DEFAULT_CAPACITY, command_channel, notification_channel};
use crate::poller::Poller;
use crate::ports::{PrinterController, StreamProbe};
use crate::presenter::{Frame, Presenter};

/// Handle on the running actors.
pub struct Monitor {
    shutdown: watch::Sender<bool>,
    poller: JoinHandle<()>,
    presenter: JoinHandle<()>,
    frames: watch::Receiver<Frame>,
}

impl Monitor {
    /// Spawn the poller and the presenter on the current runtime.
    ///
    /// The presenter sends the configuration to the poller as its first
    /// message, so polling starts right away.
    pub fn spawn<C, P>(config: MonitorConfig, controller: C, probe: Arc<P>) -> Self
    where
        C: PrinterController + 'static,
        P: StreamProbe + 'static,
    {
        let config = config.with_derived_stream_url();
        let (shutdown, shutdown_rx) = watch::channel(false);
        let (frames_tx, frames) = watch::channel(Frame::initial(&config));
        let (commands, commands_rx) = command_channel(DEFAULT_CAPACITY);
        let (notifications, notifications_rx) = notification_channel(DEFAULT_CAPACITY);

        let poller = Poller::new(controller, notifications);
        let poller = tokio::spawn(poller.run(commands_rx, shutdown_rx.clone()));

        let presenter = Presenter::new(config, probe, commands, frames_tx);
        let presenter = tokio::spawn(presenter.run(notifications_rx, shutdown_rx));

        tracing::info!("monitor started");
        Self {
            shutdown,
            poller,
            presenter,
            frames,
        }
    }

    /// A receiver of the frames published by the presenter.
    #[must_use]
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    /// Stop both actors and wait for them to finish.
    pub async fn shutdown(self) {
        // Both actors may already be gone; nothing to report then.
        let _ = self.shutdown.send(true);
        if let Err(err) = self.presenter.await {
            tracing::warn!(error = %err, "presenter task failed");
        }
        if let Err(err) = self.poller.await {
            tracing::warn!(error = %err, "poller task failed");
        }
        tracing::info!("monitor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printmon_domain::error::PrintMonError;
    use printmon_domain::status::{JobStatus, PrinterStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticController {
        printer: serde_json::Value,
        calls: AtomicUsize,
    }

    impl PrinterController for StaticController {
        async fn fetch_printer(
            &self,
            _config: &MonitorConfig,
        ) -> Result<PrinterStatus, PrintMonError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::from_value(self.printer.clone()).unwrap())
        }

        async fn fetch_job(&self, _config: &MonitorConfig) -> Result<JobStatus, PrintMonError> {
            Ok(serde_json::from_value(serde_json::json!({
                "job": { "file": { "name": null, "path": null } },
                "progress": { "completion": 0, "printTimeLeft": null }
            }))
            .unwrap())
        }
    }

    struct Unreachable;

    impl StreamProbe for Unreachable {
        async fn is_reachable(&self, _stream_url: &str) -> bool {
            false
        }
    }

    fn config() -> MonitorConfig {
        MonitorConfig {
            url: "http://printer.local".to_string(),
            api_key: "X".to_string(),
            update_interval: 1000,
            ..MonitorConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_publish_first_snapshot_after_spawn() {
        let controller = Arc::new(StaticController {
            printer: serde_json::json!({ "state": { "text": "Operational" } }),
            calls: AtomicUsize::new(0),
        });
        let monitor = Monitor::spawn(config(), Arc::clone(&controller), Arc::new(Unreachable));
        let mut frames = monitor.frames();

        let frame = frames
            .wait_for(|frame| frame.snapshot.is_some())
            .await
            .unwrap()
            .clone();

        assert!(frame.visible);
        assert_eq!(frame.widget.printer_state, "Operational");
        assert_eq!(frame.widget.progress, "N/A");
        assert_eq!(frame.widget.remaining_time, "N/A");
        assert_eq!(frame.widget.file_name, "No file");
        assert!(controller.calls.load(Ordering::SeqCst) >= 1);

        monitor.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_hide_widget_when_printer_reports_offline() {
        let controller = StaticController {
            printer: serde_json::json!({ "state": { "text": "Offline" } }),
            calls: AtomicUsize::new(0),
        };
        let config = MonitorConfig {
            hide_module_when_offline: true,
            ..config()
        };
        let monitor = Monitor::spawn(config, controller, Arc::new(Unreachable));
        let mut frames = monitor.frames();

        let frame = frames
            .wait_for(|frame| frame.snapshot.is_some() && !frame.visible)
            .await
            .unwrap()
            .clone();

        assert_eq!(frame.widget.printer_state, "Offline");
        monitor.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_both_actors_on_shutdown() {
        let controller = StaticController {
            printer: serde_json::json!({}),
            calls: AtomicUsize::new(0),
        };
        let monitor = Monitor::spawn(config(), controller, Arc::new(Unreachable));
        let frames = monitor.frames();

        monitor.shutdown().await;

        assert!(frames.has_changed().is_err());
    }
}
