//! Department catalog.
//!
//! A read-only snapshot of the department definitions a scheduling run
//! works against. Catalog order is significant: it is the deterministic
//! tie-break order for specialty deduplication and month selection, so
//! identical inputs always yield identical schedules.

use serde::{Deserialize, Serialize};

use super::{Department, HalfMonths};

/// An ordered, read-only collection of departments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    departments: Vec<Department>,
}

impl Catalog {
    /// Creates a catalog from an ordered department list.
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    /// All departments in catalog order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Looks up a department by name.
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Departments of one specialty, catalog order preserved.
    pub fn departments_in_specialty<'a>(
        &'a self,
        specialty: &'a str,
    ) -> impl Iterator<Item = &'a Department> + 'a {
        self.departments
            .iter()
            .filter(move |d| d.specialty == specialty)
    }

    /// Whether any department covers the given specialty.
    pub fn contains_specialty(&self, specialty: &str) -> bool {
        self.departments.iter().any(|d| d.specialty == specialty)
    }

    /// Distinct specialties in first-appearance order.
    pub fn specialties(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for dept in &self.departments {
            if !seen.contains(&dept.specialty.as_str()) {
                seen.push(dept.specialty.as_str());
            }
        }
        seen
    }

    /// Number of departments.
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Curriculum duration per trainee, counting one department per specialty.
    ///
    /// Sibling departments of a specialty are alternatives, not additive
    /// requirements; the first in catalog order stands in for its group.
    /// Used for horizon sizing, not for assignment.
    pub fn base_curriculum_duration(&self) -> HalfMonths {
        let mut seen: Vec<&str> = Vec::new();
        let mut total = HalfMonths::ZERO;
        for dept in &self.departments {
            if !seen.contains(&dept.specialty.as_str()) {
                seen.push(&dept.specialty);
                total = total.saturating_add(dept.total_duration());
            }
        }
        total
    }
}
