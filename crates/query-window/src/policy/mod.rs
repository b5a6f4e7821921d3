pub mod floor;
pub mod guard;
pub mod ingester_window;
pub mod lookback;

pub use floor::{SAFETY_MARGIN, safety_floor};
pub use ingester_window::resolve_ingester_window_bound;
pub use lookback::resolve_lookback_bound;
