//! Folio Studio - GUI Library
//!
//! The portfolio and research lab as an Iced desktop application: biography,
//! tech stack, project showcase with detail overlay, and the research lab
//! page with its carousels.
//!
//! Built with Iced 0.14.0 using the Elm architecture. The behavior behind the
//! widgets (navigation, scroll-spy, carousels, reveal latches) lives in
//! `folio_core`; this crate maps Iced events onto it and renders the result.

pub mod app;
pub mod cli;
pub mod component;
pub mod constants;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
