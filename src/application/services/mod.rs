//! Application services
//!
//! Services orchestrate domain logic with I/O through injected traits.

pub mod charts;

pub use charts::ChartService;
