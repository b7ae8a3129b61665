//! I/O helpers: configuration files and edit profiles.

pub mod conf_file;
pub mod profile;
