//! Core logic for `verd`, a styled single-directory listing tool.
//!
//! One invocation runs a four-stage pipeline: collect and classify the
//! children of the target directory ([`services::fs::listing`]), order
//! them ([`services::fs::entries`]), and format the styled columnar
//! report ([`ui::report`]). Presentation is a pure role-to-style
//! mapping in [`ui::theme`].

pub mod cli;
pub mod core;
pub mod models;
pub mod services;
pub mod ui;
