//! Progress reporting for ground-truth runs. The batch runner emits
//! done/total; the console layer consumes via a sink.

use std::sync::Arc;
use std::time::Duration;

/// One progress update.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent {
    pub done: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl ProgressEvent {
    pub fn percent(&self) -> f64 {
        crate::model::percentage(self.done, self.total)
    }
}

/// Sink for progress events.
pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// `Progress: 20.0% (10/50) - 1.3s elapsed`
#[must_use]
pub fn format_progress_line(ev: &ProgressEvent) -> String {
    format!(
        "Progress: {:.1}% ({}/{}) - {:.1}s elapsed",
        ev.percent(),
        ev.done,
        ev.total,
        ev.elapsed.as_secs_f64()
    )
}
