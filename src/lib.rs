//! Celestial body and absolute time models for mission analysis.
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
mod tests;

mod body;
mod constants;
mod errors;
mod time;

pub mod prelude {
    pub use crate::{
        body::{Body, BodyKind},
        constants::{MJD_OFFSET, SECONDS_PER_DAY},
        errors::{DomainError, Error, ParsingError},
        time::AbsoluteTime,
    };

    // Pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
}
