//! Host surface contract: the narrow seam between the engine and its
//! environment.
//!
//! The engine never assumes a concrete visual tree API. It only asks the host
//! to create container nodes, apply layout properties, report sizes, and hand
//! out subscription handles for size/children/pointer notifications.

pub mod pointer;
pub mod style;
pub mod surface;

pub use pointer::{pointer_from_mouse, PointerEvent, PointerPhase};
pub use style::{Dimension, LayoutStyle};
pub use surface::{HostSurface, SubscriptionId, SurfaceId};
