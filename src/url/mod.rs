//! URL handling for Mailsift
//!
//! Href resolution, host extraction and comparison, and the crawlability
//! filter applied to every discovered link.

mod domain;
mod filter;
mod normalize;

pub use domain::{extract_host, is_same_domain, site_key};
pub use filter::LinkFilter;
pub use normalize::resolve_href;
