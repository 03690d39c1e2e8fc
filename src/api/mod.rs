//! Host-side glue: auto-ranged plots and aligned multi-panel drawing.

mod aligned;
mod plot;

pub use aligned::draw_aligned;
pub use plot::Plot;
