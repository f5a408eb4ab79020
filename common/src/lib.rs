//! Clef Common Library
//!
//! Types and state containers shared between the Web (WASM) front end
//! and host-side tests

pub mod chat;
pub mod config;
pub mod error;
pub mod upload;

pub use chat::{ChatLog, Message, Role};
pub use config::BackendConfig;
pub use error::{Error, Result};
pub use upload::{StatusKind, UploadState, UploadStatus};
