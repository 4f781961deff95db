//! # twister_engine: Deterministic Generation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! twister_engine is the bottom layer of the workspace, providing:
//! - The MT19937 word generator (`mt19937`)
//! - [`RandomEngine`]: seeded uniform, biased, Gaussian, weighted and dice
//!   primitives with explicit stream-position control (`engine`)
//! - [`UniformSource`]: the two-primitive surface higher layers depend on (`source`)
//! - [`StreamState`]: the persistable `(seed, draw_count)` pair (`state`)
//! - One-shot entropy-seeded helpers (`oneshot`)
//! - Luck scores for rolled values (`evaluate`)
//! - Configuration and error types (`config`, `error`)
//!
//! ## Reproducibility Contract
//!
//! For a fixed seed, output is a pure function of the draw count. Every
//! elementary primitive consumes exactly one 32-bit word, so two engines
//! with equal seed and equal count stay bit-identical forever.
//!
//! ## Usage Examples
//!
//! ```rust
//! use twister_engine::RandomEngine;
//!
//! let mut engine = RandomEngine::new(42);
//! assert_eq!(engine.uniform_int(0, 1000), 374);
//!
//! let roll = engine.roll_dice(3, 6);
//! assert!((3..=18).contains(&roll));
//!
//! // Jump back to just after the first draw and replay.
//! engine.jump_to_count(1);
//! assert_eq!(engine.roll_dice(3, 6), roll);
//! ```
//!
//! ## Thread Safety
//!
//! Engines carry no locks: keep one per thread or guard externally.
//! The `oneshot` helpers build private engines and are safe to call
//! concurrently.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod mt19937;
pub mod oneshot;
pub mod source;
pub mod state;

pub use config::{EngineConfig, LogLevel};
pub use engine::{inverse_normal_cdf, new_seed, RandomEngine, TRUNCATION_RETRIES};
pub use error::{ConfigError, StateError};
pub use mt19937::Mt19937;
pub use source::UniformSource;
pub use state::StreamState;
