//! Content extraction: email addresses and outbound links
//!
//! Emails are matched against raw page text with a two-stage regex pipeline;
//! links come from parsed HTML and are resolved through the URL module.

mod emails;
mod links;

pub use emails::extract_emails;
pub use links::extract_links;
