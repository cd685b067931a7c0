//! Project feature components

mod feedback_list;
mod new_project_dialog;

pub use feedback_list::FeedbackList;
pub use new_project_dialog::NewProjectDialog;
