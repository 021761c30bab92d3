#![forbid(unsafe_code)]

//! BLOATKILL: a reference dashboard for Windows storage folders that grow
//! without bound (the component store and the installer cache) and the
//! commands used to clean them.
//!
//! The content is a static [`catalog::CATALOG`]; commands are displayed and
//! copied, never executed. The interactive part is
//! [`gui::DashboardState`] (which folder is shown, which method is open) and
//! the per-button copy feedback in [`gui::CopyFeedback`].

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod gui;
pub mod listing;
pub mod logging;
pub mod models;
