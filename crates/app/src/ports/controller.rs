//! Printer controller port — read access to the controller's status API.

use std::future::Future;

use printmon_domain::config::MonitorConfig;
use printmon_domain::error::PrintMonError;
use printmon_domain::status::{JobStatus, PrinterStatus};

/// Read-only access to an OctoPrint-compatible controller.
///
/// The configuration is passed on every call because the poller only learns
/// it when the presenter sends `INIT`.
pub trait PrinterController: Send + Sync {
    /// Fetch the printer document (state text and temperatures).
    fn fetch_printer(
        &self,
        config: &MonitorConfig,
    ) -> impl Future<Output = Result<PrinterStatus, PrintMonError>> + Send;

    /// Fetch the job document (file and progress).
    fn fetch_job(
        &self,
        config: &MonitorConfig,
    ) -> impl Future<Output = Result<JobStatus, PrintMonError>> + Send;
}

impl<T: PrinterController> PrinterController for std::sync::Arc<T> {
    fn fetch_printer(
        &self,
        config: &MonitorConfig,
    ) -> impl Future<Output = Result<PrinterStatus, PrintMonError>> + Send {
        (**self).fetch_printer(config)
    }

    fn fetch_job(
        &self,
        config: &MonitorConfig,
    ) -> impl Future<Output = Result<JobStatus, PrintMonError>> + Send {
        (**self).fetch_job(config)
    }
}
