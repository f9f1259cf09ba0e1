// websan/src/lib.rs
//! # WebSan CLI Application
//!
//! This crate provides the command-line interface for the WebSan filtering
//! engine: a `sanitize` command that neutralizes HTML/JavaScript injection
//! in text from stdin or a file, and a `check-email` command that validates
//! email-address syntax.

pub mod cli;
pub mod commands;
pub mod logger;
