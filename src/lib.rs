//! tasklist library - task records, the flat-file task store and the CLI shell

pub mod cli;
pub mod config;
pub mod task;
