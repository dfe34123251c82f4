//! Geolocation-to-jurisdiction resolution.
//!
//! A collaborator of the UI layer, not of the calculation engine: it supplies
//! the `jurisdiction` input field by matching device coordinates against the
//! representative coordinates carried in the prefecture table. Position
//! acquisition itself (and its failures) belongs to the embedding
//! application, which maps platform errors onto [`GeolocationError`] for its
//! own feedback loop. None of this ever reaches the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Prefecture;

/// The closed set of position-acquisition failures an embedding application
/// reports. Calculation correctness is independent of all of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeolocationError {
    /// The user denied the position request.
    #[error("permission denied")]
    PermissionDenied,
    /// No position could be determined.
    #[error("position unavailable")]
    PositionUnavailable,
    /// The position request timed out.
    #[error("position request timed out")]
    Timeout,
    /// The platform offers no geolocation capability.
    #[error("geolocation not supported")]
    NotSupported,
}

/// Finds the index of the prefecture nearest to a coordinate.
///
/// Squared Euclidean distance over raw latitude/longitude, which is enough at
/// prefecture granularity within Japan's latitude range. Returns 0 for an
/// empty table.
///
/// # Example
///
/// ```no_run
/// use tedori_engine::config::ConfigLoader;
/// use tedori_engine::geolocation::find_nearest_prefecture;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/reiwa7").unwrap();
/// let shinjuku = (Decimal::from_str("35.69").unwrap(), Decimal::from_str("139.70").unwrap());
/// let index = find_nearest_prefecture(&loader.tables().prefectures, shinjuku.0, shinjuku.1);
/// assert_eq!(loader.tables().prefectures[index].name, "Tokyo");
/// ```
pub fn find_nearest_prefecture(prefectures: &[Prefecture], lat: Decimal, lng: Decimal) -> usize {
    let mut nearest = 0;
    let mut min_distance: Option<Decimal> = None;

    for (index, prefecture) in prefectures.iter().enumerate() {
        let d_lat = lat - prefecture.lat;
        let d_lng = lng - prefecture.lng;
        let distance = d_lat * d_lat + d_lng * d_lng;

        if min_distance.is_none_or(|min| distance < min) {
            min_distance = Some(distance);
            nearest = index;
        }
    }

    nearest
}
