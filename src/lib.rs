//! # splitgrid
//!
//! A recursive panel-splitting layout engine with draggable gutters and
//! content auto-fit.
//!
//! splitgrid turns a declarative tree of rows, columns, and tagged leaves
//! into live panel groups on any host that implements the narrow
//! [`HostSurface`](host::HostSurface) contract. Pane sizes are declared with
//! a small expression grammar (`"1fr 2fr"`, `"30 70"`, `"equal"`), gutters
//! between adjacent panes are draggable, and unit-quantized rows can track
//! the natural height of their mounted content.
//!
//! ## Core Systems
//!
//! - **[`expr`]** — Size-expression grammar: tokenizer and total parser
//! - **[`tree`]** — Declarative split tree and its normalization
//! - **[`layout`]** — The engine: recursive build, drag-resize, auto-fit
//! - **[`host`]** — Host surface contract, layout styles, pointer events
//! - **[`plugin`]** — Integration entry points for a host UI framework
//! - **[`testing`]** — FakeHost, Pilot, and snapshot helpers
//! - **[`geometry`]** — Axis, Point, Size primitives
//!
//! ## Quick start
//!
//! ```
//! use splitgrid::testing::FakeHost;
//! use splitgrid::{LayoutConfig, SplitLayout, SplitNode};
//!
//! let mut host = FakeHost::new();
//! let anchor = host.add_root(200.0, 200.0);
//! let tree = SplitNode::row([
//!     SplitNode::leaf("sidebar"),
//!     SplitNode::leaf("main"),
//! ]);
//! let layout = SplitLayout::build(host, anchor, &tree, LayoutConfig::default())?;
//! assert_eq!(layout.categories(), ["sidebar", "main"]);
//! # Ok::<(), splitgrid::LayoutError>(())
//! ```

// Foundation
pub mod geometry;

// Core systems
pub mod expr;
pub mod tree;

// The engine
pub mod host;
pub mod layout;

// Integration
pub mod plugin;

// Configuration and errors
pub mod config;
pub mod error;

// Test support
pub mod testing;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::{LeafSlot, SplitLayout};
pub use tree::{Direction, SplitNode, SplitParams};
