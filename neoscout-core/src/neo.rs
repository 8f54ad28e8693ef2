//! Near-Earth objects: the primary catalog entity.
//!
//! Optional source fields normalise to sentinels at construction time so
//! callers never have to guess: a blank name becomes `None` and a blank or
//! unparseable diameter becomes `f64::NAN`. Identity is the designation
//! alone; two records with the same designation compare equal regardless of
//! their other fields.

use std::hash::{Hash, Hasher};

use thiserror::Error;

/// A near-Earth object from the NEO catalog.
///
/// # Examples
/// ```
/// use neoscout_core::NearEarthObject;
///
/// # fn main() -> Result<(), neoscout_core::NearEarthObjectError> {
/// let eros = NearEarthObject::from_raw("433", "Eros", "16.84", "N")?;
/// assert_eq!(eros.fullname(), "433 (Eros)");
/// assert!(!eros.hazardous);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    /// Primary identifier, unique across the catalog. Never empty.
    pub designation: String,
    /// IAU name, when one has been assigned. `None` means "no name".
    pub name: Option<String>,
    /// Diameter in kilometres. `f64::NAN` means the diameter is unknown.
    pub diameter: f64,
    /// Whether the object is potentially hazardous.
    pub hazardous: bool,
    /// Indices into the database's close-approach collection, in load order.
    /// Empty until the database performs its linking pass.
    pub(crate) approaches: Vec<usize>,
}

/// Errors returned when constructing a [`NearEarthObject`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NearEarthObjectError {
    /// The designation was missing or empty.
    #[error("near-Earth object designation must not be empty")]
    EmptyDesignation,
}

impl NearEarthObject {
    /// Validates and constructs a [`NearEarthObject`] from typed fields.
    ///
    /// An empty `name` normalises to `None`. Only a missing designation is
    /// an error.
    ///
    /// # Errors
    /// Returns [`NearEarthObjectError::EmptyDesignation`] when `designation`
    /// is empty.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Result<Self, NearEarthObjectError> {
        let designation = designation.into();
        if designation.is_empty() {
            return Err(NearEarthObjectError::EmptyDesignation);
        }
        let name = name.filter(|n| !n.is_empty());
        Ok(Self {
            designation,
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        })
    }

    /// Constructs a [`NearEarthObject`] from raw loader fields.
    ///
    /// `name` and `diameter` may be blank; a blank or unparseable diameter
    /// normalises to `f64::NAN`. The hazard flag is the catalog's
    /// single-character code: exactly `"Y"` means hazardous, anything else
    /// does not.
    ///
    /// # Examples
    /// ```
    /// use neoscout_core::NearEarthObject;
    ///
    /// # fn main() -> Result<(), neoscout_core::NearEarthObjectError> {
    /// let neo = NearEarthObject::from_raw("2010 PK9", "", "", "Y")?;
    /// assert!(neo.name.is_none());
    /// assert!(neo.diameter.is_nan());
    /// assert!(neo.hazardous);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns [`NearEarthObjectError::EmptyDesignation`] when `designation`
    /// is empty.
    pub fn from_raw(
        designation: &str,
        name: &str,
        diameter: &str,
        hazardous: &str,
    ) -> Result<Self, NearEarthObjectError> {
        let diameter = diameter.trim().parse::<f64>().unwrap_or(f64::NAN);
        let name = (!name.is_empty()).then(|| name.to_owned());
        Self::new(designation, name, diameter, hazardous == "Y")
    }

    /// Human-readable identifier: `"433 (Eros)"` for named objects,
    /// `"433"` otherwise.
    ///
    /// # Examples
    /// ```
    /// use neoscout_core::NearEarthObject;
    ///
    /// # fn main() -> Result<(), neoscout_core::NearEarthObjectError> {
    /// let unnamed = NearEarthObject::from_raw("2010 PK9", "", "", "N")?;
    /// assert_eq!(unnamed.fullname(), "2010 PK9");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({name})", self.designation),
            None => self.designation.clone(),
        }
    }

    /// Whether the catalog recorded a diameter for this object.
    #[must_use]
    pub fn diameter_known(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Indices of this object's close approaches within the database's
    /// collection, in load order. Empty before linking.
    #[must_use]
    pub fn approach_indices(&self) -> &[usize] {
        &self.approaches
    }
}

// Identity is the designation alone; the derived implementations would
// compare every field and treat NaN diameters as unequal to themselves.
impl PartialEq for NearEarthObject {
    fn eq(&self, other: &Self) -> bool {
        self.designation == other.designation
    }
}

impl Eq for NearEarthObject {}

impl Hash for NearEarthObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.designation.hash(state);
    }
}

impl std::fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        if self.diameter_known() {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {hazard} potentially hazardous",
                self.fullname(),
                self.diameter
            )
        } else {
            write!(
                f,
                "NEO {} has an unknown diameter and {hazard} potentially hazardous",
                self.fullname()
            )
        }
    }
}
