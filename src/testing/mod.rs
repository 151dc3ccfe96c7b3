//! Headless testing framework: FakeHost, Pilot, snapshot helpers.
//!
//! Use the [`FakeHost`] as an instrumented [`HostSurface`](crate::host::HostSurface)
//! that records every style assignment and counts subscriptions. Use the
//! [`Pilot`] to drive a built layout with simulated drags and content changes.
//! Use [`layout_to_string`] to capture the realized tree as plain text for
//! snapshot-style assertions.

pub mod fake_host;
pub mod pilot;
pub mod snapshot;

pub use fake_host::FakeHost;
pub use pilot::Pilot;
pub use snapshot::layout_to_string;
