//! Host-facing interfaces for the Lumen indicator expression engine.
//!
//! The host (a game, a simulator, a test) owns parts and their modules. It
//! exposes them to Lumen through the [`Part`] and [`Module`] traits, and
//! Lumen hands back expression trees that implement [`Toggle`], [`Scalar`]
//! and [`ColorSource`].

mod capability;
mod color;
mod field;
mod part;
mod resolve;

pub use capability::{Capability, ColorSource, Module, Scalar, Toggle};
pub use color::Color;
pub use field::{Field, FieldExposure, FieldTable};
pub use part::Part;
pub use resolve::{find_all, find_first, find_module};
