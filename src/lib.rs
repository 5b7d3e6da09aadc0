//! Converts VS Code terminal color themes into Monaco editor themes, and
//! updates GitHub deployment statuses for the site that hosts them.

pub mod colors;
pub mod config;
pub mod convert;
pub mod rules;
pub mod theme;

#[cfg(feature = "runtime")]
pub mod deployment;
#[cfg(feature = "runtime")]
pub mod logging;
