//! # Donezo
//!
//! Donezo is a **UI-agnostic task-list library** with a CLI client on top.
//! All task semantics live in the library; the binary only parses arguments
//! and formats output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - TaskStore: ID allocation, mutation, persist-after-write  │
//! │  - Abstract Backend trait                                   │
//! │  - FileBackend (production), InMemoryBackend (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in the Library
//!
//! From [`store`] inward, code takes regular Rust arguments, returns
//! `Result`, and never touches stdout, stderr, or `std::process::exit`.
//! The same core could serve a TUI, a web frontend, or a bot.
//!
//! ## Module Overview
//!
//! - [`store`]: The task store — the entry point for all operations
//! - [`model`]: Core data types (`Task`, `Stats`)
//! - [`chart`]: Read-only progress chart rendering
//! - [`config`]: Database path resolution
//! - [`error`]: Error types

pub mod chart;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
