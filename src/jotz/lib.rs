//! # Jotz Architecture
//!
//! Jotz is a **UI-agnostic note-keeping library**. This is not a CLI application that happens
//! to have some library code; it's a library that happens to have a CLI client.
//!
//! ## The Four-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - Owns the loaded notes, the search text, the selection,   │
//! │    and the edit state                                       │
//! │  - Persists the whole collection after every mutation       │
//! │  - Never writes to stdout/stderr, never assumes a terminal  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view.rs)                                       │
//! │  - Pure function from (notes, search, selection) to the     │
//! │    filtered list and effective selection                    │
//! │  - No state of its own                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SlotStore trait over one persisted slot         │
//! │  - FileSlot (production), MemorySlot (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward (session, view, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve the interactive browser, the one-shot
//! subcommands, or any other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Session** (`session.rs`): Thorough unit tests of the operations against
//!    `MemorySlot`. This is where the lion's share of testing lives.
//!
//! 2. **View** (`view.rs`): Table-style tests of the filter and reselect rules.
//!
//! 3. **CLI** (`tests/`): End-to-end runs of the binary against a temp slot.
//!
//! ## Module Overview
//!
//! - [`session`]: The session facade, entry point for all operations
//! - [`view`]: Derived view state (filter + selection rules)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `Draft`)
//! - [`editor`]: External editor integration
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing, and the interactive browse loop for the binary (not part of the lib API)

pub mod editor;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod view;
