//! Apology generator: a terminal front-end that turns a short description
//! into a sincere apology via a hosted language model.

pub mod clipboard;
pub mod config;
pub mod flow;
pub mod logging;
pub mod mvi;
pub mod pages;
pub mod provider;
pub mod ui;
