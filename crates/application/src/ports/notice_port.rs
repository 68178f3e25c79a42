//! Notice port
//!
//! Notices are produced by the application layer and handed to a
//! presentation surface for display.

#[cfg(test)]
use mockall::automock;

use crate::services::Notice;

/// Port for presenting user-facing notices
#[cfg_attr(test, automock)]
pub trait NoticePort: Send + Sync {
    /// Present a notice to the user
    fn publish(&self, notice: Notice);
}
