//! Backend HTTP client

pub mod chat;
pub mod upload;
