//! Wordle Sessions
//!
//! A session-based Wordle game engine: duplicate-aware guess evaluation,
//! keyboard status tracking, a per-session state machine and a concurrent
//! session store, driven through one [`game::GameService`] façade.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use wordle_sessions::config::GameConfig;
//! use wordle_sessions::game::{GameService, SessionStore};
//! use wordle_sessions::wordlists::Catalog;
//!
//! let service = GameService::new(
//!     Arc::new(SessionStore::new(Duration::from_secs(1800))),
//!     Arc::new(Catalog::embedded()),
//!     &GameConfig::default(),
//! );
//!
//! let game = service.start("en-us-5", None).unwrap();
//! assert_eq!(game.word_length, 5);
//!
//! let reply = service.submit(game.id, "CRANE").unwrap();
//! assert_eq!(reply.result.unwrap().len(), 5);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Sessions, store and service
pub mod game;

// JSON request/response contract
pub mod protocol;

// Runtime settings
pub mod config;

// Tracing setup
pub mod logging;

// Self-play players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
