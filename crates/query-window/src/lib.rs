pub mod config;
pub mod domain;
pub mod error;
pub mod policy;
pub mod resolver;

pub use config::QueryWindowConfig;
pub use domain::types::{
    IngesterWindowBound, IngesterWindowRequest, LookbackBound, LookbackRequest, ObjectKind,
};
pub use error::{Error, Result};
pub use policy::{
    SAFETY_MARGIN, resolve_ingester_window_bound, resolve_lookback_bound, safety_floor,
};
pub use resolver::{QueryWindowResolver, ResolvedQueryWindow};
