//! Literature constants for the supported celestial bodies.

/// Total number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Offset between Julian Date and Modified Julian Date (days).
/// The MJD epoch is 1858-11-17T00:00:00 UTC.
pub const MJD_OFFSET: f64 = 2400000.5;

/// Earth equatorial radius (m) - WGS-84
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6378137.0;

/// Earth flattening factor - WGS-84
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257223563;

/// Earth second zonal harmonic coefficient
pub const EARTH_J2: f64 = 0.001082627;

/// Earth gravitational constant (m³.s⁻²)
pub const EARTH_GRAVITATION_MU_M3_S2: f64 = 3.986004418E14;

/// Earth sidereal rotation rate (rad.s⁻¹)
pub const EARTH_ROTATION_RATE_RAD_S: f64 = 7.292115E-5;

/// Earth total mass (kg)
pub const EARTH_MASS_KG: f64 = 5.972168E24;

/// Moon equatorial radius (m) - NASA fact sheet
pub const MOON_EQUATORIAL_RADIUS_M: f64 = 1738100.0;

/// Moon flattening factor
pub const MOON_FLATTENING: f64 = 0.0012;

/// Moon second zonal harmonic coefficient
pub const MOON_J2: f64 = 2.027E-4;

/// Moon gravitational constant (m³.s⁻²)
pub const MOON_GRAVITATION_MU_M3_S2: f64 = 4.9048695E12;

/// Moon sidereal rotation rate (rad.s⁻¹), 27.322 day period
pub const MOON_ROTATION_RATE_RAD_S: f64 = 2.6617E-6;

/// Moon total mass (kg)
pub const MOON_MASS_KG: f64 = 7.34767309E22;

/// Mars equatorial radius (m) - NASA fact sheet
pub const MARS_EQUATORIAL_RADIUS_M: f64 = 3396200.0;

/// Mars flattening factor
pub const MARS_FLATTENING: f64 = 0.00589;

/// Mars second zonal harmonic coefficient
pub const MARS_J2: f64 = 1.960E-3;

/// Mars gravitational constant (m³.s⁻²)
pub const MARS_GRAVITATION_MU_M3_S2: f64 = 4.282837E13;

/// Mars sidereal rotation rate (rad.s⁻¹), 24.623 hour period
pub const MARS_ROTATION_RATE_RAD_S: f64 = 7.088218E-5;

/// Mars total mass (kg)
pub const MARS_MASS_KG: f64 = 6.4171E23;
