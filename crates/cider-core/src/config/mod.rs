//! Configuration system for cider.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod api_config;
pub mod cache_config;
pub mod cider_config;
pub mod defaults;
pub mod model_config;
pub mod poll_config;
pub mod report_config;

pub use api_config::ApiConfig;
pub use cache_config::CacheConfig;
pub use cider_config::{CiderConfig, CliOverrides};
pub use model_config::ModelConfig;
pub use poll_config::PollConfig;
pub use report_config::ReportConfig;
