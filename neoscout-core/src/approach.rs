//! Close approaches: dated passes of a near-Earth object by Earth.
//!
//! Raw records carry only the designation of the object involved; the
//! database resolves it to the owning [`NearEarthObject`](crate::NearEarthObject)
//! during its linking pass. Approach times use a fixed minute-resolution
//! calendar format and round-trip exactly through [`TIME_FORMAT`].

use chrono::NaiveDateTime;
use thiserror::Error;

/// Calendar format for approach times, both parsed and rendered:
/// `YYYY-MM-DD HH:MM`, no seconds.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single close approach of a near-Earth object to Earth.
///
/// # Examples
/// ```
/// use neoscout_core::CloseApproach;
///
/// # fn main() -> Result<(), neoscout_core::CloseApproachError> {
/// let approach = CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2")?;
/// assert_eq!(approach.time_str(), "1900-12-27 01:30");
/// assert_eq!(approach.distance, 0.0114);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Designation of the object involved. A foreign key into the NEO
    /// catalog; never empty, but not guaranteed to match a loaded NEO.
    pub designation: String,
    /// Moment of closest approach.
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units.
    pub distance: f64,
    /// Relative approach velocity in kilometres per second.
    pub velocity: f64,
    /// Index of the owning NEO within the database's collection. `None`
    /// before linking, and permanently `None` for orphan records.
    pub(crate) neo: Option<usize>,
}

/// Errors returned when constructing a [`CloseApproach`].
#[derive(Debug, Error)]
pub enum CloseApproachError {
    /// The designation was missing or empty.
    #[error("close approach designation must not be empty")]
    EmptyDesignation,
    /// The approach time did not match `YYYY-MM-DD HH:MM`.
    #[error("invalid approach time {value:?}")]
    InvalidTime {
        /// The raw value that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// The approach distance was not a number.
    #[error("invalid approach distance {value:?}")]
    InvalidDistance {
        /// The raw value that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
    /// The approach velocity was not a number.
    #[error("invalid approach velocity {value:?}")]
    InvalidVelocity {
        /// The raw value that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
}

impl CloseApproach {
    /// Validates and constructs a [`CloseApproach`] from typed fields.
    ///
    /// # Errors
    /// Returns [`CloseApproachError::EmptyDesignation`] when `designation`
    /// is empty.
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Result<Self, CloseApproachError> {
        let designation = designation.into();
        if designation.is_empty() {
            return Err(CloseApproachError::EmptyDesignation);
        }
        Ok(Self {
            designation,
            time,
            distance,
            velocity,
            neo: None,
        })
    }

    /// Constructs a [`CloseApproach`] from raw loader fields.
    ///
    /// Every field is required here: unlike the NEO catalog's optional
    /// columns, a close-approach record with an unreadable time, distance,
    /// or velocity cannot be represented and fails construction with an
    /// error naming the offending value.
    ///
    /// # Errors
    /// Returns a [`CloseApproachError`] when `designation` is empty or when
    /// `time`, `distance`, or `velocity` cannot be parsed.
    pub fn from_raw(
        designation: &str,
        time: &str,
        distance: &str,
        velocity: &str,
    ) -> Result<Self, CloseApproachError> {
        let time =
            NaiveDateTime::parse_from_str(time, TIME_FORMAT).map_err(|source| {
                CloseApproachError::InvalidTime {
                    value: time.to_owned(),
                    source,
                }
            })?;
        let distance =
            distance
                .trim()
                .parse::<f64>()
                .map_err(|source| CloseApproachError::InvalidDistance {
                    value: distance.to_owned(),
                    source,
                })?;
        let velocity =
            velocity
                .trim()
                .parse::<f64>()
                .map_err(|source| CloseApproachError::InvalidVelocity {
                    value: velocity.to_owned(),
                    source,
                })?;
        Self::new(designation, time, distance, velocity)
    }

    /// The approach time rendered in the canonical `YYYY-MM-DD HH:MM`
    /// format. Re-parsing the result yields the stored time exactly.
    #[must_use]
    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// Index of the owning NEO within the database's collection, once
    /// linked. Resolve it with
    /// [`NeoDatabase::neo_for`](crate::NeoDatabase::neo_for).
    #[must_use]
    pub fn neo_index(&self) -> Option<usize> {
        self.neo
    }
}

impl std::fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "On {}, {} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn time_round_trips_through_the_canonical_format() {
        let approach =
            CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2").expect("valid");
        let rendered = approach.time_str();
        assert_eq!(rendered, "1900-12-27 01:30");
        let reparsed = NaiveDateTime::parse_from_str(&rendered, TIME_FORMAT).expect("round trip");
        assert_eq!(reparsed, approach.time);
    }

    #[rstest]
    #[case("1900-12-27")]
    #[case("1900-12-27 01:30:00")]
    #[case("27/12/1900 01:30")]
    #[case("")]
    fn malformed_times_are_rejected(#[case] raw: &str) {
        let result = CloseApproach::from_raw("433", raw, "0.0114", "14.2");
        assert!(matches!(
            result,
            Err(CloseApproachError::InvalidTime { .. })
        ));
    }

    #[test]
    fn malformed_distance_is_rejected_with_the_offending_value() {
        let result = CloseApproach::from_raw("433", "1900-12-27 01:30", "close", "14.2");
        match result {
            Err(CloseApproachError::InvalidDistance { value, .. }) => assert_eq!(value, "close"),
            other => panic!("expected InvalidDistance, found {other:?}"),
        }
    }

    #[test]
    fn malformed_velocity_is_rejected() {
        let result = CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "fast");
        assert!(matches!(
            result,
            Err(CloseApproachError::InvalidVelocity { .. })
        ));
    }

    #[test]
    fn empty_designation_is_rejected() {
        let result = CloseApproach::from_raw("", "1900-12-27 01:30", "0.0114", "14.2");
        assert!(matches!(result, Err(CloseApproachError::EmptyDesignation)));
    }

    #[test]
    fn new_records_start_unlinked() {
        let approach =
            CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2").expect("valid");
        assert!(approach.neo_index().is_none());
    }

    #[test]
    fn display_reads_naturally() {
        let approach =
            CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2").expect("valid");
        assert_eq!(
            approach.to_string(),
            "On 1900-12-27 01:30, 433 approaches Earth at a distance of 0.01 au \
             and a velocity of 14.20 km/s"
        );
    }
}
