//! # Photometric conversions
//!
//! Magnitudes to physical fluxes, distance moduli, and decoding of catalog quality flags.
//!
//! ## Structure
//!
//! ```text
//! photometry
//! ├── flux          (magnitude ⇄ Jy, νF(ν), F(λ), distance modulus, zero points)
//! └── object_flags  (Pan-STARRS objInfoFlag decoding)
//! ```
//!
//! All flux conversions share a single magnitude → Jansky core; the physical units are derived
//! from it by a unit multiplier only.

pub mod flux;
pub mod object_flags;

pub use flux::{
    calculate_absolute_magnitude, calculate_distance_from_magnitudes,
    convert_janskys_to_magnitude, convert_magnitude_to_flux, convert_magnitude_to_flux_density,
    convert_magnitude_to_janskys, ZeroPoint, ZERO_POINTS,
};
pub use object_flags::{get_panstarrs_object_info_flags, PANSTARRS_OBJECT_INFO_FLAGS};
