//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `dashboard`: project list page and empty-state card
//! - `layout`: application shell
//! - `projects`: feedback list and project creation dialog

pub mod dashboard;
pub mod layout;
pub mod projects;
