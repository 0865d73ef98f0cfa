//! Celestial body model with first order (J2) oblateness.
use crate::{
    constants::{
        EARTH_EQUATORIAL_RADIUS_M, EARTH_FLATTENING, EARTH_GRAVITATION_MU_M3_S2, EARTH_J2,
        EARTH_MASS_KG, EARTH_ROTATION_RATE_RAD_S, MARS_EQUATORIAL_RADIUS_M, MARS_FLATTENING,
        MARS_GRAVITATION_MU_M3_S2, MARS_J2, MARS_MASS_KG, MARS_ROTATION_RATE_RAD_S,
        MOON_EQUATORIAL_RADIUS_M, MOON_FLATTENING, MOON_GRAVITATION_MU_M3_S2, MOON_J2,
        MOON_MASS_KG, MOON_ROTATION_RATE_RAD_S,
    },
    errors::{DomainError, ParsingError},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Body] describes one celestial body by its physical constants and
/// provides the gravity evaluation. [Body::earth], [Body::moon] and
/// [Body::mars] build the supported bodies from literature values;
/// [Body::new] accepts custom constants as is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// Name of this body.
    pub name: String,

    /// Total mass in kilograms. Informational only: the gravity
    /// evaluation relies on [Self::mu_m3_s2], not on the mass.
    pub mass_kg: f64,

    /// Second zonal harmonic coefficient (dimensionless),
    /// dominant term of the equatorial bulge in the gravity field.
    pub j2: f64,

    /// Flattening factor f = (a - b) / a (dimensionless).
    pub flattening: f64,

    /// (equatorial, polar) radii in meters, with polar = equatorial * (1 - f).
    pub radii_m: (f64, f64),

    /// Sidereal rotation rate in rad.s⁻¹ (unused by the gravity
    /// evaluation, stored for future use).
    pub rotation_rate_rad_s: f64,

    /// Standard gravitational parameter GM in m³.s⁻².
    pub mu_m3_s2: f64,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Body {
    /// Builds a new [Body] from custom physical constants.
    /// Values are stored as is: no physical plausibility check is
    /// performed, out of range inputs produce nonsensical (not
    /// erroring) gravity results.
    pub fn new(
        name: &str,
        mass_kg: f64,
        j2: f64,
        flattening: f64,
        radii_m: (f64, f64),
        rotation_rate_rad_s: f64,
        mu_m3_s2: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            mass_kg,
            j2,
            flattening,
            radii_m,
            rotation_rate_rad_s,
            mu_m3_s2,
        }
    }

    /// Builds Earth from the WGS-84 parameters.
    pub fn earth() -> Self {
        let equatorial_radius_m = EARTH_EQUATORIAL_RADIUS_M;
        let polar_radius_m = equatorial_radius_m * (1.0 - EARTH_FLATTENING);

        Self::new(
            "Earth",
            EARTH_MASS_KG,
            EARTH_J2,
            EARTH_FLATTENING,
            (equatorial_radius_m, polar_radius_m),
            EARTH_ROTATION_RATE_RAD_S,
            EARTH_GRAVITATION_MU_M3_S2,
        )
    }

    /// Builds the Moon from the NASA fact sheet parameters.
    pub fn moon() -> Self {
        let equatorial_radius_m = MOON_EQUATORIAL_RADIUS_M;
        let polar_radius_m = equatorial_radius_m * (1.0 - MOON_FLATTENING);

        Self::new(
            "Moon",
            MOON_MASS_KG,
            MOON_J2,
            MOON_FLATTENING,
            (equatorial_radius_m, polar_radius_m),
            MOON_ROTATION_RATE_RAD_S,
            MOON_GRAVITATION_MU_M3_S2,
        )
    }

    /// Builds Mars from the NASA fact sheet parameters.
    pub fn mars() -> Self {
        let equatorial_radius_m = MARS_EQUATORIAL_RADIUS_M;
        let polar_radius_m = equatorial_radius_m * (1.0 - MARS_FLATTENING);

        Self::new(
            "Mars",
            MARS_MASS_KG,
            MARS_J2,
            MARS_FLATTENING,
            (equatorial_radius_m, polar_radius_m),
            MARS_ROTATION_RATE_RAD_S,
            MARS_GRAVITATION_MU_M3_S2,
        )
    }

    /// Returns the equatorial radius in meters.
    pub fn equatorial_radius_m(&self) -> f64 {
        self.radii_m.0
    }

    /// Returns the polar radius in meters.
    pub fn polar_radius_m(&self) -> f64 {
        self.radii_m.1
    }

    /// Evaluates the gravitational acceleration at provided altitude
    /// and latitude, including the J2 perturbation due to this body's
    /// oblateness:
    ///
    /// g = μ/r² · [1 + J2·(Rₑ/r)²·(3/2·sin²φ − 1/2)]
    ///
    /// The radial distance is r = Rₑ + altitude at all latitudes:
    /// altitude is measured from the equatorial radius, not from a
    /// latitude dependent geocentric radius. Centrifugal effects,
    /// atmospheric effects and higher zonal harmonics (J3, J4, ...)
    /// are not modeled.
    ///
    /// ## Input
    /// - altitude_m: altitude above the equatorial radius, in meters
    /// - latitude_rad: planetocentric latitude, in radians
    ///
    /// ## Output
    /// - gravitational acceleration in m.s⁻², or
    /// [DomainError::DegenerateRadius] when altitude <= -Rₑ.
    pub fn gravity_m_s2(&self, altitude_m: f64, latitude_rad: f64) -> Result<f64, DomainError> {
        let equatorial_radius_m = self.equatorial_radius_m();
        let radius_m = equatorial_radius_m + altitude_m;

        if radius_m <= 0.0 {
            return Err(DomainError::DegenerateRadius { radius_m });
        }

        let sin_lat = latitude_rad.sin();

        // point mass inverse square law
        let g0 = self.mu_m3_s2 / (radius_m * radius_m);

        // J2 perturbation term
        let j2_term = self.j2
            * (equatorial_radius_m / radius_m).powi(2)
            * (1.5 * sin_lat * sin_lat - 0.5);

        Ok(g0 * (1.0 + j2_term))
    }

    /// Evaluates the gravitational acceleration at provided altitude,
    /// at the equator. See [Self::gravity_m_s2].
    pub fn equatorial_gravity_m_s2(&self, altitude_m: f64) -> Result<f64, DomainError> {
        self.gravity_m_s2(altitude_m, 0.0)
    }
}

/// [BodyKind] identifies one of the supported celestial bodies.
/// The set is closed: preliminary mission analysis targets these
/// three bodies only.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyKind {
    #[default]
    Earth,
    Moon,
    Mars,
}

impl BodyKind {
    /// Builds the [Body] this [BodyKind] identifies.
    pub fn body(&self) -> Body {
        match self {
            Self::Earth => Body::earth(),
            Self::Moon => Body::moon(),
            Self::Mars => Body::mars(),
        }
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Earth => f.write_str("Earth"),
            Self::Moon => f.write_str("Moon"),
            Self::Mars => f.write_str("Mars"),
        }
    }
}

impl std::str::FromStr for BodyKind {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("Earth") {
            Ok(Self::Earth)
        } else if trimmed.eq_ignore_ascii_case("Moon") {
            Ok(Self::Moon)
        } else if trimmed.eq_ignore_ascii_case("Mars") {
            Ok(Self::Mars)
        } else {
            Err(ParsingError::UnknownBody(s.to_string()))
        }
    }
}
