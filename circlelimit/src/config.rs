//! Configuration
pub mod cmdline;
pub mod scene;
