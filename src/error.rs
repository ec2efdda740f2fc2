//! Recoverable error taxonomy for the dashboard core.
//!
//! None of these errors ends a session. Each one is absorbed by
//! [`Dashboard::apply`](crate::dashboard::Dashboard::apply), which logs it and
//! leaves the dashboard in a stable state.

use crate::operations::OperationKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A bulk action was requested with nothing selected
    #[error("no records selected")]
    EmptySelection,

    /// `start` was called while the same operation kind was still running
    #[error("{0} is already running")]
    DuplicateOperation(OperationKind),

    /// The external data source could not be reached or returned garbage
    #[error("sync source unavailable: {0}")]
    SyncUnavailable(String),
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
