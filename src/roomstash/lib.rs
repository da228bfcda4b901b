//! # Roomstash Architecture
//!
//! Roomstash records which items sit in which storage location of which room.
//! The library holds all of the behavior; the binary is a menu loop on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, screen clearing, colored output      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, passes configured separators along       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, find, stats, clear                                  │
//! │  - Load, mutate, save; report through `CmdResult` messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait with a self-healing load                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read-Modify-Write
//!
//! Nothing is cached between operations. Each command loads the whole
//! inventory from the store, works on it, and writes all of it back if it
//! changed anything.
//!
//! ## Failures Stay Inside Commands
//!
//! Validation problems, duplicate items, corrupt files and write errors all
//! come back as messages on the `CmdResult`. A command only returns `Err`
//! when the data file cannot be created in the first place.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every front end talks to
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Inventory`, `Room`, search hits and counts
//! - [`config`]: Optional JSON settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
