//! Core types and definitions for the Graveshot shooting gallery.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the enemy component, commands, state snapshots, events, and constants.
//! It has no dependency on Tauri or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
