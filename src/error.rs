//! Errors surfaced to the caller.
//!
//! Malformed declarative input never errors: it degrades to safe defaults so
//! the layout stays renderable. Host-surface refusals are best-effort and
//! swallowed. The only reported failure is an unusable mount target, which is
//! a programmer error at integration time.

/// Errors reported by [`SplitLayout::build`](crate::layout::SplitLayout::build).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The anchor passed to `build` is not a live container on the host.
    #[error("mount target is not a usable container")]
    InvalidMountTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(
            LayoutError::InvalidMountTarget.to_string(),
            "mount target is not a usable container"
        );
    }
}
