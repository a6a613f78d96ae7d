//! # Habitz Architecture
//!
//! Habitz is a **UI-agnostic habit-tracking library**. The CLI binary is a
//! thin client over it; nothing below the CLI layer knows about terminals,
//! stdout or exit codes.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, prompts, exit codes    │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings → id or title)       │
//! │  - Evaluates "today" once per operation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns structured CmdResult        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract HabitStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Series Invariant
//!
//! A habit's series holds exactly one result per calendar day, starting at
//! its start date, and may never run past today. All series mutation goes
//! through [`model::Habit::mark_today`] and
//! [`model::Habit::mark_missing_days`], which enforce gap-free, exact-count
//! recording. The series field is private for that reason.
//!
//! "Today" is never cached: the API facade evaluates the local wall-clock
//! date at every operation and passes it down, which also makes the date
//! logic deterministic under test.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`record`]: The on-disk record format (encode/decode)
//! - [`model`]: Core data types (`Habit`, `Outcome`, `Standing`)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types
//! - [`init`]: Data-directory resolution and context construction

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod model;
pub mod record;
pub mod store;
