//! Decision support for a learning platform: success prediction, resource recommendation and
//! quiz selection over fixed reference catalogs.

pub mod analytics;
pub mod config;
pub mod error;
pub mod telemetry;
