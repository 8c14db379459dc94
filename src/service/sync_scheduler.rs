use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

/// Start the periodic CMS sync trigger. Returns `None` when disabled.
///
/// Each tick currently only records that a run happened; the first tick,
/// which fires immediately, is skipped.
pub fn spawn(period: Duration) -> Option<JoinHandle<()>> {
    if period.is_zero() {
        info!("scheduled WordPress sync disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            run_scheduled_sync();
        }
    }))
}

pub fn run_scheduled_sync() {
    info!("Running scheduled WordPress sync");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_period_disables_trigger() {
        assert!(spawn(Duration::ZERO).is_none());
    }

    #[tokio::test]
    async fn nonzero_period_starts_task() {
        let handle = spawn(Duration::from_secs(3600)).expect("scheduler task");
        assert!(!handle.is_finished());
        handle.abort();
    }
}
