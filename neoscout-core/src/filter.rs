//! Predicate-based filtering over close approaches.
//!
//! Each [`Criterion`] is an independent, side-effect-free predicate over a
//! close approach and its linked NEO. [`Filters`] strings criteria together
//! as a logical AND; an empty set matches everything. Criteria touching the
//! linked NEO (diameter bounds, the hazard flag) fail when no NEO is linked:
//! an unknown object cannot be known to satisfy the bound.

use chrono::NaiveDate;

use crate::{CloseApproach, NearEarthObject};

/// A single filter criterion over a close approach.
///
/// All bounds are inclusive. Date criteria compare only the calendar-date
/// component of the approach time.
///
/// # Examples
/// ```
/// use neoscout_core::{CloseApproach, Criterion};
///
/// # fn main() -> Result<(), neoscout_core::CloseApproachError> {
/// let approach = CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2")?;
/// assert!(Criterion::DistanceMax(0.025).matches(&approach, None));
/// assert!(!Criterion::DistanceMin(0.025).matches(&approach, None));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    /// The approach happened on exactly this day.
    Date(NaiveDate),
    /// The approach happened on or after this day.
    StartDate(NaiveDate),
    /// The approach happened on or before this day.
    EndDate(NaiveDate),
    /// Approach distance of at least this many astronomical units.
    DistanceMin(f64),
    /// Approach distance of at most this many astronomical units.
    DistanceMax(f64),
    /// Approach velocity of at least this many km/s.
    VelocityMin(f64),
    /// Approach velocity of at most this many km/s.
    VelocityMax(f64),
    /// Linked NEO diameter of at least this many kilometres.
    DiameterMin(f64),
    /// Linked NEO diameter of at most this many kilometres.
    DiameterMax(f64),
    /// Linked NEO hazard flag equals this value.
    Hazardous(bool),
}

impl Criterion {
    /// Evaluates this criterion against an approach and its linked NEO.
    ///
    /// An unknown (NaN) diameter fails both diameter bounds: the comparison
    /// itself is false for NaN, which is exactly the contract.
    #[must_use]
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        match *self {
            Self::Date(date) => approach.time.date() == date,
            Self::StartDate(date) => approach.time.date() >= date,
            Self::EndDate(date) => approach.time.date() <= date,
            Self::DistanceMin(min) => approach.distance >= min,
            Self::DistanceMax(max) => approach.distance <= max,
            Self::VelocityMin(min) => approach.velocity >= min,
            Self::VelocityMax(max) => approach.velocity <= max,
            Self::DiameterMin(min) => neo.is_some_and(|neo| neo.diameter >= min),
            Self::DiameterMax(max) => neo.is_some_and(|neo| neo.diameter <= max),
            Self::Hazardous(flag) => neo.is_some_and(|neo| neo.hazardous == flag),
        }
    }
}

/// An ordered conjunction of filter criteria.
///
/// Build one with the chainable `with_*` methods; each optional query
/// attribute has exactly one. Evaluation short-circuits on the first
/// failing criterion.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use neoscout_core::{CloseApproach, Filters};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let filters = Filters::new()
///     .with_start_date(NaiveDate::from_ymd_opt(1900, 1, 1).ok_or("bad date")?)
///     .with_max_distance(0.025);
/// let approach = CloseApproach::from_raw("433", "1900-12-27 01:30", "0.0114", "14.2")?;
/// assert!(filters.matches(&approach, None));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    criteria: Vec<Criterion>,
}

impl Filters {
    /// Constructs an empty filter set, which matches every approach.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary criterion while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Requires the approach to happen on exactly this day.
    #[must_use]
    pub fn with_date(self, date: NaiveDate) -> Self {
        self.with(Criterion::Date(date))
    }

    /// Requires the approach to happen on or after this day.
    #[must_use]
    pub fn with_start_date(self, date: NaiveDate) -> Self {
        self.with(Criterion::StartDate(date))
    }

    /// Requires the approach to happen on or before this day.
    #[must_use]
    pub fn with_end_date(self, date: NaiveDate) -> Self {
        self.with(Criterion::EndDate(date))
    }

    /// Requires an approach distance of at least `au` astronomical units.
    #[must_use]
    pub fn with_min_distance(self, au: f64) -> Self {
        self.with(Criterion::DistanceMin(au))
    }

    /// Requires an approach distance of at most `au` astronomical units.
    #[must_use]
    pub fn with_max_distance(self, au: f64) -> Self {
        self.with(Criterion::DistanceMax(au))
    }

    /// Requires an approach velocity of at least `km_s` km/s.
    #[must_use]
    pub fn with_min_velocity(self, km_s: f64) -> Self {
        self.with(Criterion::VelocityMin(km_s))
    }

    /// Requires an approach velocity of at most `km_s` km/s.
    #[must_use]
    pub fn with_max_velocity(self, km_s: f64) -> Self {
        self.with(Criterion::VelocityMax(km_s))
    }

    /// Requires a linked NEO diameter of at least `km` kilometres.
    #[must_use]
    pub fn with_min_diameter(self, km: f64) -> Self {
        self.with(Criterion::DiameterMin(km))
    }

    /// Requires a linked NEO diameter of at most `km` kilometres.
    #[must_use]
    pub fn with_max_diameter(self, km: f64) -> Self {
        self.with(Criterion::DiameterMax(km))
    }

    /// Requires the linked NEO's hazard flag to equal `hazardous`.
    #[must_use]
    pub fn with_hazardous(self, hazardous: bool) -> Self {
        self.with(Criterion::Hazardous(hazardous))
    }

    /// The criteria in insertion order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Whether no criteria have been supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Evaluates the conjunction: the approach passes only if every
    /// criterion passes.
    #[must_use]
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        self.criteria
            .iter()
            .all(|criterion| criterion.matches(approach, neo))
    }
}
