//! rh-core: stable foundation for rodheat.
//!
//! Contains:
//! - units (uom SI types + constructors for material properties)
//! - numeric (Real + tolerances + float helpers)
//! - material (fixed rod material constants)
//! - error (shared error types)

pub mod error;
pub mod material;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RhError, RhResult};
pub use material::Material;
pub use numeric::*;
pub use units::*;
