//! CLI command implementations.

mod check;
mod coverage;
mod render;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use render::{RenderArgs, run_render};
