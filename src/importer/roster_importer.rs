// ==========================================
// Sales Payroll - Roster Importer
// ==========================================
// Input: JSON document listing zones and representatives
// Output: representatives wired to shared zone handles
// ==========================================

use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::domain::{GeographicZone, Representative, ZoneHandle};
use crate::importer::error::{ImportError, ImportResult};

// ==========================================
// Raw document
// ==========================================

#[derive(Debug, Clone, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
    #[serde(default)]
    pub representatives: Vec<RepresentativeRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneRecord {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub meal_allowance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativeRecord {
    pub number: i32,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub fixed_salary: Option<f64>,
    pub zone_id: i32,
    #[serde(default)]
    pub monthly_revenue: Option<Vec<f64>>,
}

// ==========================================
// Roster - import result
// ==========================================

#[derive(Debug, Clone)]
pub struct Roster {
    pub zones: Vec<ZoneHandle>,
    pub representatives: Vec<Representative>,
}

impl Roster {
    pub fn zone(&self, id: i32) -> Option<&ZoneHandle> {
        self.zones.iter().find(|z| z.id() == id)
    }

    pub fn representative(&self, number: i32) -> Option<&Representative> {
        self.representatives.iter().find(|r| r.number() == number)
    }
}

// ==========================================
// RosterImporter
// ==========================================
pub struct RosterImporter;

impl RosterImporter {
    /// Import a roster file
    pub fn from_file(path: &Path) -> ImportResult<Roster> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ImportResult<Roster> {
        let document: RosterDocument = serde_json::from_str(raw)?;
        Self::build(document)
    }

    /// Build the domain objects
    ///
    /// Representatives naming the same `zone_id` share one handle.
    pub fn build(document: RosterDocument) -> ImportResult<Roster> {
        let mut by_id: HashMap<i32, ZoneHandle> = HashMap::new();
        let mut zones = Vec::with_capacity(document.zones.len());

        for record in document.zones {
            let mut zone = GeographicZone::new(record.id, record.name);
            zone.set_meal_allowance(record.meal_allowance);

            match by_id.entry(record.id) {
                Entry::Occupied(_) => return Err(ImportError::DuplicateZone(record.id)),
                Entry::Vacant(slot) => {
                    let handle = ZoneHandle::new(zone);
                    slot.insert(handle.clone());
                    zones.push(handle);
                }
            }
        }

        let mut seen = HashSet::new();
        let mut representatives = Vec::with_capacity(document.representatives.len());

        for record in document.representatives {
            if !seen.insert(record.number) {
                return Err(ImportError::DuplicateRepresentative(record.number));
            }

            let zone = by_id
                .get(&record.zone_id)
                .cloned()
                .ok_or(ImportError::UnknownZone {
                    number: record.number,
                    zone_id: record.zone_id,
                })?;

            let mut rep =
                Representative::new(record.number, record.last_name, record.first_name, zone);
            if let Some(address) = record.address {
                rep.set_address(address);
            }
            if let Some(salary) = record.fixed_salary {
                rep.set_fixed_salary(salary);
            }
            if let Some(revenue) = record.monthly_revenue {
                rep.set_monthly_revenue(&revenue)
                    .map_err(|source| ImportError::InvalidRepresentative {
                        number: record.number,
                        source,
                    })?;
            }

            representatives.push(rep);
        }

        tracing::info!(
            zones = zones.len(),
            representatives = representatives.len(),
            "roster imported"
        );

        Ok(Roster {
            zones,
            representatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_zone_rejected() {
        let err = RosterImporter::from_json_str(
            r#"{"zones": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ImportError::DuplicateZone(1)));
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let err = RosterImporter::from_json_str(
            r#"{
                "zones": [{"id": 1, "name": "A"}],
                "representatives": [
                    {"number": 5, "last_name": "Doe", "first_name": "Jo", "zone_id": 9}
                ]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ImportError::UnknownZone {
                number: 5,
                zone_id: 9
            }
        ));
    }

    #[test]
    fn test_short_revenue_sequence_rejected() {
        let err = RosterImporter::from_json_str(
            r#"{
                "zones": [{"id": 1, "name": "A"}],
                "representatives": [
                    {"number": 5, "last_name": "Doe", "first_name": "Jo", "zone_id": 1,
                     "monthly_revenue": [1.0, 2.0]}
                ]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidRepresentative { number: 5, .. }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = RosterImporter::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ImportError::JsonParseError(_)));
    }
}
