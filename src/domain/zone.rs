// ==========================================
// Sales Payroll - Geographic Zone
// ==========================================
// A zone only carries the flat meal allowance paid to the
// representatives assigned to it.
// ==========================================

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ==========================================
// GeographicZone
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicZone {
    id: i32,              // zone code, fixed at creation
    name: String,         // label
    meal_allowance: f64,  // flat allowance added to every monthly salary
}

impl GeographicZone {
    /// Create a zone with a zero meal allowance
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            meal_allowance: 0.0,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn meal_allowance(&self) -> f64 {
        self.meal_allowance
    }

    /// Set the meal allowance
    ///
    /// No range check: the caller owns allowance validation.
    pub fn set_meal_allowance(&mut self, amount: f64) {
        self.meal_allowance = amount;
    }
}

impl fmt::Display for GeographicZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone{{id={}, nom={}}}", self.id, self.name)
    }
}

// ==========================================
// ZoneHandle - shared, non-owning reference
// ==========================================
// Several representatives point at the same zone; an allowance change made
// through any clone is seen by all of them.
#[derive(Debug, Clone)]
pub struct ZoneHandle {
    inner: Arc<RwLock<GeographicZone>>,
}

impl ZoneHandle {
    pub fn new(zone: GeographicZone) -> Self {
        Self {
            inner: Arc::new(RwLock::new(zone)),
        }
    }

    pub fn id(&self) -> i32 {
        self.inner.read().id()
    }

    pub fn name(&self) -> String {
        self.inner.read().name().to_string()
    }

    pub fn meal_allowance(&self) -> f64 {
        self.inner.read().meal_allowance()
    }

    pub fn set_meal_allowance(&self, amount: f64) {
        self.inner.write().set_meal_allowance(amount);
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.write().set_name(name);
    }

    /// Owned copy of the zone as it is now
    pub fn snapshot(&self) -> GeographicZone {
        self.inner.read().clone()
    }

    /// `true` when both handles point at the same zone
    pub fn ptr_eq(&self, other: &ZoneHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<GeographicZone> for ZoneHandle {
    fn from(zone: GeographicZone) -> Self {
        Self::new(zone)
    }
}

impl fmt::Display for ZoneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.read(), f)
    }
}
