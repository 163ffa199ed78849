//! # ProtParam Core Library
//!
//! A library for computing physicochemical properties of a protein from its
//! amino-acid sequence: molecular weight, amino-acid composition, acidic/basic
//! residue content, UV extinction coefficient at 280 nm, and the theoretical
//! isoelectric point (pI).
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep the
//! numerical core separate from data modeling and from the user-facing API.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   ([`core::models::sequence::Sequence`], [`core::models::composition::Composition`]),
//!   the immutable parameter tables (residue masses, extinction coefficients,
//!   pKa models), and the closed-form property math ([`core::properties`]).
//!
//! - **[`engine`]: The Logic Core.** Implements the isoelectric-point solver:
//!   the Henderson–Hasselbalch-style net-charge model and the bisection search
//!   for the pH of zero net charge.
//!
//! - **[`workflows`]: The Public API.** Ties the `core` and `engine` together
//!   into a single entry point, [`workflows::analyze::run`], which takes raw
//!   sequence text and returns every derived property in one immutable result.

pub mod core;
pub mod engine;
pub mod workflows;
