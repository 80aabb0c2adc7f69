//! # vibe-wasm: Portable Pricing Module
//!
//! Compiles [`vibe_core::compute_total`] into a WebAssembly module with a C
//! ABI, and provides the host-side helpers that feed it.
//!
//! ## Exports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Symbol          Signature                               Module         │
//! │  ──────────────  ──────────────────────────────────────  ─────────────  │
//! │  compute_total   (*const f64, *const i32, i32) -> f64    abi.rs         │
//! │  abi_version     () -> u32                               abi.rs         │
//! │  vibe_alloc      (usize) -> *mut u8                      memory.rs      │
//! │  vibe_dealloc    (*mut u8, usize)                        memory.rs      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`abi`] - Unmangled exports; never allocate, never log
//! - [`memory`] - Module memory for host buffers
//! - [`host`] - Line normalization and JSON entry point
//! - [`config`] - Environment-backed bridge configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Bridge and host-facing errors

pub mod abi;
pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod telemetry;

pub use config::{BridgeConfig, ConfigError};
pub use error::{BridgeError, ErrorCode, HostError};
pub use host::{total_from_json, LineInput, TotalRequest, TotalResponse};
