/// Cider system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header sent with every API request.
pub const USER_AGENT: &str = concat!("cider/", env!("CARGO_PKG_VERSION"));
