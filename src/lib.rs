//! Content core for a prompt, news, blog and tool CMS.
//!
//! The domain layer owns the two pieces with real rules in them: slug
//! assignment ([`domain::content::slug_assignment`]) and write-access rules
//! ([`domain::access`]). The application layer wires them into commands and
//! queries over repository ports; infrastructure supplies an in-memory store
//! and the presentation layer adapts requests and errors for axum.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
