//! Shell widgets layered on top of the gauge widgets from `curing-common`.

mod header;
mod switch;

pub use header::draw_header;
pub use switch::{SWITCH_SIZE, draw_switch_row};
