//! histogram-selection: interactive selection overlay for histogram charts.
//!
//! The crate maps draggable band handles between pixel positions and data
//! values, resolves per-bar paint under hover and disabled states, and
//! animates handles when the histogram is swapped for a zoomed dataset.
//! Drawing, input capture and data loading stay with the host.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SelectionRenderer, SelectionRendererConfig};
pub use error::{SelectionError, SelectionResult};
