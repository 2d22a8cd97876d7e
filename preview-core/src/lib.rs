//! Prize preview generation: rewrites per-state animation blocks into
//! single-state preview blocks with shifted frame origins.

pub mod config;
pub mod document;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod rules;
pub mod transform;
pub mod writer;

pub use config::PreviewConfig;
pub use error::PreviewError;
pub use pipeline::{run, RunSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
