//! UI components

pub mod chat_panel;
pub mod score_viewer;
pub mod sidebar;
pub mod upload_panel;
