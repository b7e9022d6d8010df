//! Tolerant record construction for source rows.
//!
//! The NASA source files carry heterogeneous, partially-missing fields.
//! A record captures the raw text of the fields this model recognizes
//! (unknown source columns are dropped by serde at this boundary), and
//! `build` normalizes it into an entity. Blank cells and absent columns
//! are equivalent everywhere: the dataset uses empty strings for
//! legitimately missing values, so they default silently rather than
//! erroring. A field that is present but not parseable is an error.

use serde::Deserialize;
use thiserror::Error;

use crate::api::{CloseApproach, NearEarthObject};
use crate::models::time::parse_approach_time;

/// Result type for record construction.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors raised while normalizing a source record into an entity.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A numeric field was present but not parseable as a float.
    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A calendar string was present but not in the source format.
    #[error("invalid approach timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::format::ParseError,
    },
}

/// Raw fields of one object row from the source NEO catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoRecord {
    /// Primary designation, e.g. `433` or `2000 AB`.
    #[serde(default)]
    pub designation: Option<String>,
    /// IAU name, e.g. `Eros`.
    #[serde(default)]
    pub name: Option<String>,
    /// Diameter in kilometers.
    #[serde(default)]
    pub diameter: Option<String>,
    /// Potentially-hazardous flag, `Y` or `N`.
    #[serde(default)]
    pub hazardous: Option<String>,
}

impl NeoRecord {
    /// Normalize this record into a [`NearEarthObject`].
    ///
    /// The designation defaults to an empty string, the name to `None`,
    /// and the diameter to NaN. The hazardous flag is true only for the
    /// exact string `Y`. The approach collection starts empty; it is
    /// populated later by the linking pass.
    pub fn build(self) -> ModelResult<NearEarthObject> {
        Ok(NearEarthObject {
            designation: present(self.designation).unwrap_or_default(),
            name: present(self.name),
            diameter: parse_diameter(self.diameter)?,
            hazardous: self.hazardous.as_deref() == Some("Y"),
            approaches: Vec::new(),
        })
    }
}

/// Raw fields of one row from the source close-approach table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApproachRecord {
    /// Designation of the approaching object (the unresolved link key).
    #[serde(default)]
    pub designation: Option<String>,
    /// Calendar time of closest approach, e.g. `2020-Jan-01 12:00`.
    #[serde(default)]
    pub time: Option<String>,
    /// Nominal approach distance in astronomical units.
    #[serde(default)]
    pub distance: Option<String>,
    /// Relative approach velocity in kilometers per second.
    #[serde(default)]
    pub velocity: Option<String>,
}

impl ApproachRecord {
    /// Normalize this record into an unlinked [`CloseApproach`].
    ///
    /// The time is `None` when absent; distance and velocity default to
    /// `0.0`, a distinct policy from the diameter's NaN. The `neo` link
    /// starts unset and is resolved by the linking pass.
    pub fn build(self) -> ModelResult<CloseApproach> {
        let time = match present(self.time) {
            Some(raw) => Some(parse_approach_time(&raw).map_err(|source| {
                ModelError::InvalidTimestamp { value: raw, source }
            })?),
            None => None,
        };
        Ok(CloseApproach {
            designation: present(self.designation).unwrap_or_default(),
            time,
            distance: parse_quantity("distance", self.distance)?,
            velocity: parse_quantity("velocity", self.velocity)?,
            neo: None,
        })
    }
}

/// Collapse blank source cells to `None`.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a diameter cell into positive finite kilometers, or NaN for
/// unknown.
///
/// The catalog leaves unknown diameters blank; parsed zero, negative,
/// and non-finite values also record as unknown, so a stored diameter is
/// always either a positive finite number or NaN.
fn parse_diameter(value: Option<String>) -> ModelResult<f64> {
    match present(value) {
        Some(raw) => {
            let parsed = parse_float("diameter", &raw)?;
            if parsed.is_finite() && parsed > 0.0 {
                Ok(parsed)
            } else {
                Ok(f64::NAN)
            }
        }
        None => Ok(f64::NAN),
    }
}

/// Parse a distance/velocity cell, defaulting blanks to zero.
fn parse_quantity(field: &'static str, value: Option<String>) -> ModelResult<f64> {
    match present(value) {
        Some(raw) => parse_float(field, &raw),
        None => Ok(0.0),
    }
}

fn parse_float(field: &'static str, raw: &str) -> ModelResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ModelError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_defaults() {
        let neo = NeoRecord::default().build().unwrap();
        assert_eq!(neo.designation, "");
        assert_eq!(neo.name, None);
        assert!(neo.diameter.is_nan());
        assert!(!neo.hazardous);
        assert!(neo.approaches.is_empty());
    }

    #[test]
    fn test_blank_fields_behave_like_absent() {
        let neo = NeoRecord {
            designation: Some(String::new()),
            name: Some(String::new()),
            diameter: Some(String::new()),
            hazardous: Some(String::new()),
        }
        .build()
        .unwrap();
        assert_eq!(neo.designation, "");
        assert_eq!(neo.name, None);
        assert!(neo.diameter.is_nan());
        assert!(!neo.hazardous);
    }

    #[test]
    fn test_name_kept_verbatim() {
        let neo = NeoRecord {
            designation: Some("433".to_string()),
            name: Some("Eros".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(neo.name.as_deref(), Some("Eros"));
        assert_eq!(neo.fullname(), "433 (Eros)");
    }

    #[test]
    fn test_diameter_parsed() {
        let neo = NeoRecord {
            diameter: Some("16.840".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(neo.diameter, 16.84);
    }

    #[test]
    fn test_diameter_zero_records_as_unknown() {
        for raw in ["0", "0.0", "-1.5", "inf"] {
            let neo = NeoRecord {
                diameter: Some(raw.to_string()),
                ..Default::default()
            }
            .build()
            .unwrap();
            assert!(neo.diameter.is_nan(), "diameter {:?} should be unknown", raw);
        }
    }

    #[test]
    fn test_diameter_garbage_is_an_error() {
        let err = NeoRecord {
            diameter: Some("big".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidNumber { field: "diameter", .. }
        ));
    }

    #[test]
    fn test_hazardous_exact_match_only() {
        for (raw, expected) in [("Y", true), ("N", false), ("y", false), ("YES", false)] {
            let neo = NeoRecord {
                hazardous: Some(raw.to_string()),
                ..Default::default()
            }
            .build()
            .unwrap();
            assert_eq!(neo.hazardous, expected, "flag {:?}", raw);
        }
    }

    #[test]
    fn test_approach_empty_record_defaults() {
        let ca = ApproachRecord::default().build().unwrap();
        assert_eq!(ca.designation(), "");
        assert_eq!(ca.time, None);
        assert_eq!(ca.distance, 0.0);
        assert_eq!(ca.velocity, 0.0);
        assert_eq!(ca.neo, None);
    }

    #[test]
    fn test_approach_fields_parsed() {
        let ca = ApproachRecord {
            designation: Some("2000 AB".to_string()),
            time: Some("2020-Jan-01 12:00".to_string()),
            distance: Some("0.5".to_string()),
            velocity: Some("12.3".to_string()),
        }
        .build()
        .unwrap();
        assert_eq!(ca.designation(), "2000 AB");
        assert_eq!(ca.time_str(), "2020-01-01 12:00");
        assert_eq!(ca.distance, 0.5);
        assert_eq!(ca.velocity, 12.3);
        assert_eq!(ca.neo, None);
    }

    #[test]
    fn test_approach_bad_time_is_an_error() {
        let err = ApproachRecord {
            time: Some("soon".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, ModelError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_approach_bad_velocity_is_an_error() {
        let err = ApproachRecord {
            velocity: Some("fast".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidNumber { field: "velocity", .. }
        ));
    }

    #[test]
    fn test_records_deserialize_from_partial_json() {
        let record: NeoRecord =
            serde_json::from_str(r#"{"designation": "433", "pha": "N", "moid": 0.15}"#).unwrap();
        assert_eq!(record.designation.as_deref(), Some("433"));
        assert_eq!(record.name, None);
        assert_eq!(record.diameter, None);
    }

    #[test]
    fn test_approach_record_deserializes_ignoring_unknown_columns() {
        let record: ApproachRecord = serde_json::from_str(
            r#"{"designation": "170903", "time": "2020-Jan-01 00:54", "orbit_id": 46}"#,
        )
        .unwrap();
        let ca = record.build().unwrap();
        assert_eq!(ca.designation(), "170903");
        assert_eq!(ca.time_str(), "2020-01-01 00:54");
    }
}
