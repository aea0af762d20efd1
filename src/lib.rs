#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared numerical helpers.
pub mod math;
/// Circuit math and the component registry.
pub mod circuits;
/// Parsing of raw form text into numbers.
pub mod input;
/// Headless controller that turns form text into displayable results.
pub mod calculator;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
