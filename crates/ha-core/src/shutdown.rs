//! Shutdown stage timeouts
//!
//! Stopping Home Assistant runs through several stages, each bounded by its own
//! timeout. Supervisors wrapping the core (for example the s6 overlay in the
//! container image) must wait at least as long as all stages combined.
//! All values are in seconds.

/// Time allowed for the `stopping` stage
pub const STOPPING_STAGE_SHUTDOWN_TIMEOUT: u64 = 20;

/// Time allowed for the `stop` stage
pub const STOP_STAGE_SHUTDOWN_TIMEOUT: u64 = 100;

/// Time allowed for the final write stage (flushing storage)
pub const FINAL_WRITE_STAGE_SHUTDOWN_TIMEOUT: u64 = 60;

/// Time allowed for the `close` stage
pub const CLOSE_STAGE_SHUTDOWN_TIMEOUT: u64 = 30;

/// Time allowed for the executor to drain its jobs
pub const EXECUTOR_SHUTDOWN_TIMEOUT: u64 = 10;

/// Time allowed for remaining non-daemon threads to finish
pub const THREADING_SHUTDOWN_TIMEOUT: u64 = 10;

/// Sum of every stage timeout
pub const fn total_stage_timeout() -> u64 {
    STOPPING_STAGE_SHUTDOWN_TIMEOUT
        + STOP_STAGE_SHUTDOWN_TIMEOUT
        + FINAL_WRITE_STAGE_SHUTDOWN_TIMEOUT
        + CLOSE_STAGE_SHUTDOWN_TIMEOUT
        + EXECUTOR_SHUTDOWN_TIMEOUT
        + THREADING_SHUTDOWN_TIMEOUT
}
