//! TCARDS - Terminal Flashcards Library
//!
//! A terminal-based flashcard study application, built in Rust.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
