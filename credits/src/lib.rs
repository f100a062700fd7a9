//! Contributor roster for a static site.
//!
//! # Overview
//!
//! The crate collects the distinct human contributors of an organization's
//! repositories and turns them into the marked region of a static HTML page.
//! [`api`] defines the hosting-API abstraction implemented by client crates,
//! [`roster`] discovers repositories and aggregates contributor logins,
//! [`render`] produces the HTML fragment, and [`document`] splices it into
//! the target file.
//!
//! Bot accounts never make it into the roster, every qualifying login
//! appears at most once no matter how many repositories it shows up in, and
//! the final ordering folds case for comparison while preserving the
//! original casing.

#[cfg(feature = "api")]
pub mod api;
pub mod document;
pub mod render;
#[cfg(feature = "roster")]
pub mod roster;
