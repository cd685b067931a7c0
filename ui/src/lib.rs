//! StudyHub UI Library
//!
//! This crate provides the StudyHub user interface - a student project
//! tracker where students submit projects and read faculty feedback.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`api`]: Backend boundary (narrow client trait + HTTP implementation)
//! - [`auth`]: Current-user context backed by the backend session
//! - [`components`]: UI components (dashboard, feedback list, dialogs)
//! - [`notify`]: Toast notifications
//! - [`projects`]: Fetch and submission lifecycle logic
//! - [`time`]: Relative timestamp formatting

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod notify;
pub mod projects;
pub mod time;

pub use app::App;
