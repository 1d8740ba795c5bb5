pub mod domain;
pub mod errors;
pub mod metrics;

pub use domain::*;
pub use errors::*;
pub use metrics::*;
