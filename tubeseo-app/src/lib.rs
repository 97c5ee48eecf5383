pub mod domain;

#[cfg(feature = "ssr")]
pub mod application;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod infrastructure;

#[cfg(feature = "ssr")]
mod app_context;

#[cfg(feature = "ssr")]
pub use app_context::AppContext;

#[cfg(feature = "ssr")]
pub use config::AppConfig;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
