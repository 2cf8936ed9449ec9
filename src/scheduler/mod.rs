//! Job scheduling interface
//!
//! Scheduling has no implementation yet. [`UnimplementedScheduler`] accepts
//! calls but reports [`SchedulerError::NotImplemented`] for every one of
//! them, so a caller can never read inaction as success.

use thiserror::Error;
use tracing::warn;

/// Errors produced by a [`Scheduler`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The operation exists in the interface but does no work
    #[error("scheduler operation `{operation}` is not implemented")]
    NotImplemented {
        /// Name of the operation that was called
        operation: &'static str,
    },
}

/// Unit of work handed to a scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Human-readable job name
    pub name: String,
}

impl Job {
    /// Create a job with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Process-wide lifecycle hook for queued work
pub trait Scheduler {
    /// Queue a job for later execution
    fn schedule(&mut self, job: Job) -> Result<(), SchedulerError>;

    /// Begin executing queued jobs
    fn start(&mut self) -> Result<(), SchedulerError>;
}

/// Placeholder scheduler that refuses every operation
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedScheduler;

impl UnimplementedScheduler {
    /// Create the placeholder
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for UnimplementedScheduler {
    fn schedule(&mut self, job: Job) -> Result<(), SchedulerError> {
        warn!(job = %job.name, "schedule called on unimplemented scheduler");
        Err(SchedulerError::NotImplemented {
            operation: "schedule",
        })
    }

    fn start(&mut self) -> Result<(), SchedulerError> {
        warn!("start called on unimplemented scheduler");
        Err(SchedulerError::NotImplemented { operation: "start" })
    }
}
