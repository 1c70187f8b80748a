//! Configuration loading, types, and validation
//!
//! Configuration comes either from a TOML file or is assembled by the CLI
//! from command-line flags; both paths go through the same validation.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, FetcherConfig, FilterConfig};
pub use validation::validate;
