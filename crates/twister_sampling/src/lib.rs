//! # twister_sampling: Geometric Sampling Layer
//!
//! ## Layer 2 Role
//!
//! Builds uniformly distributed geometric values from the two-primitive
//! [`UniformSource`](twister_engine::UniformSource) surface of Layer 1:
//! - Directions and points on/in spheres and circles
//! - Haar-uniform quaternions (Shoemake) and plain Euler rotators
//!
//! Vectors and quaternions are `glam`'s `f64` types, re-exported here.
//! - Box vectors, colours, slice selection and Fisher-Yates shuffles
//!
//! Every operation issues a fixed number of draws, so a seeded engine
//! replays geometric output exactly.
//!
//! ## Usage Examples
//!
//! ```rust
//! use twister_engine::RandomEngine;
//! use twister_sampling::GeometricSampler;
//!
//! let mut engine = RandomEngine::new(7);
//! let mut sampler = GeometricSampler::new(&mut engine);
//!
//! let p = sampler.point_in_sphere(10.0);
//! assert!(p.length() <= 10.0 + 1e-9);
//!
//! let q = sampler.quat();
//! assert!((q.length() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialise/deserialise the value types (enables `glam/serde`)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod sampler;
pub mod sequence;
pub mod types;

pub use sampler::GeometricSampler;
pub use glam::{DQuat, DVec2, DVec3};
pub use types::{Color, Rotator};
