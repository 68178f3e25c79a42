//! Map rendering port

#[cfg(test)]
use mockall::automock;

use crate::services::MapSnapshot;

/// Port for a surface that draws the current map state
///
/// Called after every state transition with a fresh snapshot. Implementations
/// redraw from the snapshot alone.
#[cfg_attr(test, automock)]
pub trait MapRendererPort: Send + Sync {
    /// Draw the snapshot
    fn render(&self, snapshot: &MapSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn MapRendererPort>();
    }
}
