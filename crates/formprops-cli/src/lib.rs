//! Library pieces of the `formprops` command-line tool.

pub mod config;
pub mod input;
pub mod inspect;
pub mod logging;
