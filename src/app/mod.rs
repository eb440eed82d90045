//! Application Layer
//!
//! Contains app initialization, window management, global entities, block
//! navigation and the workspace.

pub mod application;
pub mod entities;
pub mod navigation;
pub mod workspace;
