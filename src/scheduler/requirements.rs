//! Per-trainee requirement derivation.
//!
//! Turns the department catalog into the ordered list of rotation
//! requirements one trainee must complete:
//!
//! 1. One curriculum requirement per department occurrence, catalog order.
//! 2. Specialty deduplication — sibling departments of one specialty are
//!    alternatives; only the least-loaded sibling (lifetime count, ties by
//!    catalog order) keeps its requirements for this trainee.
//! 3. A deferred home-specialty bonus against the selected department.
//! 4. For external-track trainees, one short bonus per distinct
//!    self-selected specialty against its least-loaded department.
//! 5. A lifetime-slot reservation per retained requirement, so the next
//!    trainee's deduplication sees updated load.
//!
//! A specialty with no backing department is a configuration gap: the
//! requirement is skipped with a warning, never an error.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::SchedulerConfig;
use crate::models::{Catalog, MandatoryReason, RotationRequirement, Trainee};
use crate::scheduler::LoadTracker;

/// Derives requirement lists from the catalog for one trainee at a time.
#[derive(Debug, Clone)]
pub struct RequirementBuilder {
    config: SchedulerConfig,
}

impl RequirementBuilder {
    /// Creates a builder with the given policy.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Builds the ordered requirement list for one trainee.
    ///
    /// Reads lifetime counts from the tracker for least-loaded selection
    /// and reserves one lifetime slot per retained requirement.
    pub fn build_for(
        &self,
        trainee: &Trainee,
        catalog: &Catalog,
        tracker: &mut LoadTracker,
    ) -> Vec<RotationRequirement> {
        // One department stands in for each specialty for this trainee.
        let selected = self.select_departments(catalog, tracker);

        let mut requirements = Vec::new();

        // Curriculum occurrences, catalog order, filtered to the selected
        // sibling of each specialty.
        for dept in catalog.departments() {
            if selected.get(dept.specialty.as_str()) != Some(&dept.name.as_str()) {
                continue;
            }
            for (i, &duration) in dept.occurrence_durations.iter().enumerate() {
                requirements.push(
                    RotationRequirement::new(
                        &dept.name,
                        &dept.specialty,
                        duration,
                        i + 1,
                        MandatoryReason::Curriculum,
                    )
                    .with_deferral(dept.deferred),
                );
            }
        }

        // Home-specialty bonus, always deferred past the first year.
        match selected.get(trainee.specialty.as_str()) {
            Some(&dept_name) => {
                requirements.push(
                    RotationRequirement::new(
                        dept_name,
                        &trainee.specialty,
                        self.config.home_bonus,
                        1,
                        MandatoryReason::HomeSpecialtyBonus,
                    )
                    .with_deferral(true),
                );
            }
            None => {
                warn!(
                    trainee = %trainee.name,
                    specialty = %trainee.specialty,
                    "home specialty has no backing department; bonus skipped"
                );
            }
        }

        // Self-selected bonuses for the external track.
        if trainee.is_external() {
            for specialty in trainee.distinct_self_selected() {
                match selected.get(specialty) {
                    Some(&dept_name) => {
                        requirements.push(RotationRequirement::new(
                            dept_name,
                            specialty,
                            self.config.self_selected_bonus,
                            1,
                            MandatoryReason::SelfSelectedBonus,
                        ));
                    }
                    None => {
                        warn!(
                            trainee = %trainee.name,
                            specialty,
                            "self-selected specialty has no backing department; bonus skipped"
                        );
                    }
                }
            }
        }

        // Reserve a lifetime slot per retained requirement.
        for req in &requirements {
            tracker.reserve(&req.department);
        }

        debug!(
            trainee = %trainee.name,
            requirements = requirements.len(),
            "requirement list built"
        );
        requirements
    }

    /// Picks, per specialty, the sibling department with the lowest
    /// lifetime count; ties fall to catalog order.
    fn select_departments<'a>(
        &self,
        catalog: &'a Catalog,
        tracker: &LoadTracker,
    ) -> HashMap<&'a str, &'a str> {
        let mut selected: HashMap<&str, &str> = HashMap::new();
        for specialty in catalog.specialties() {
            // Strict `<` keeps the first sibling in catalog order on ties.
            let mut least_loaded: Option<(&str, u32)> = None;
            for dept in catalog.departments_in_specialty(specialty) {
                let count = tracker.lifetime_count(&dept.name);
                if least_loaded.map_or(true, |(_, best)| count < best) {
                    least_loaded = Some((&dept.name, count));
                }
            }
            if let Some((name, _)) = least_loaded {
                selected.insert(specialty, name);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, HalfMonths, Track};

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Department::new("Cardiology I", "Cardiology")
                .with_occurrence_months(2.0)
                .with_occurrence_months(1.5),
            Department::new("Cardiology II", "Cardiology")
                .with_occurrence_months(2.0)
                .with_occurrence_months(1.5),
            Department::new("EKG Lab", "EKG").with_occurrence_months(0.5),
            Department::new("Hepatology", "Hepatology")
                .with_occurrence_months(2.0)
                .with_deferral(),
        ])
    }

    fn builder() -> RequirementBuilder {
        RequirementBuilder::new(SchedulerConfig::default())
    }

    #[test]
    fn test_curriculum_occurrences_in_catalog_order() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "Cardiology");

        let reqs = builder().build_for(&trainee, &catalog, &mut tracker);

        // Cardiology I (2 occurrences), EKG, Hepatology, then the bonus.
        let names: Vec<(&str, usize)> = reqs
            .iter()
            .map(|r| (r.department.as_str(), r.occurrence_index))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Cardiology I", 1),
                ("Cardiology I", 2),
                ("EKG Lab", 1),
                ("Hepatology", 1),
                ("Cardiology I", 1),
            ]
        );
        assert_eq!(reqs[0].total.as_months(), 2.0);
        assert_eq!(reqs[1].total.as_months(), 1.5);
    }

    #[test]
    fn test_specialty_deduplication_drops_sibling() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "EKG");

        let reqs = builder().build_for(&trainee, &catalog, &mut tracker);
        assert!(reqs.iter().all(|r| r.department != "Cardiology II"));
    }

    #[test]
    fn test_deduplication_alternates_with_load() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();

        // First trainee gets Cardiology I and reserves its slots.
        let first = builder().build_for(&Trainee::new("T1", "EKG"), &catalog, &mut tracker);
        assert!(first.iter().any(|r| r.department == "Cardiology I"));
        // Second trainee sees Cardiology I loaded and gets the sibling.
        let second = builder().build_for(&Trainee::new("T2", "EKG"), &catalog, &mut tracker);
        assert!(second.iter().any(|r| r.department == "Cardiology II"));
        assert!(second.iter().all(|r| r.department != "Cardiology I"));
    }

    #[test]
    fn test_home_bonus_is_deferred() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "Cardiology");

        let reqs = builder().build_for(&trainee, &catalog, &mut tracker);
        let bonus = reqs
            .iter()
            .find(|r| r.reason == MandatoryReason::HomeSpecialtyBonus)
            .unwrap();
        assert!(bonus.deferred);
        assert_eq!(bonus.total, HalfMonths::from_whole(2));
        assert_eq!(bonus.department, "Cardiology I");
    }

    #[test]
    fn test_missing_home_specialty_skipped_silently() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "Radiology");

        let reqs = builder().build_for(&trainee, &catalog, &mut tracker);
        assert!(reqs
            .iter()
            .all(|r| r.reason != MandatoryReason::HomeSpecialtyBonus));
    }

    #[test]
    fn test_external_track_bonuses() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "Cardiology")
            .with_track(Track::External)
            .with_self_selected("EKG")
            .with_self_selected("Hepatology")
            .with_self_selected("Cardiology"); // home: no duplicate bonus

        let reqs = builder().build_for(&trainee, &catalog, &mut tracker);
        let self_selected: Vec<&str> = reqs
            .iter()
            .filter(|r| r.reason == MandatoryReason::SelfSelectedBonus)
            .map(|r| r.specialty.as_str())
            .collect();
        assert_eq!(self_selected, vec!["EKG", "Hepatology"]);

        let ekg_bonus = reqs
            .iter()
            .find(|r| r.reason == MandatoryReason::SelfSelectedBonus && r.specialty == "EKG")
            .unwrap();
        assert!(!ekg_bonus.deferred);
        assert_eq!(ekg_bonus.total, HalfMonths::from_whole(1));
    }

    #[test]
    fn test_deferred_department_flag_propagates() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "EKG");

        let reqs = builder().build_for(&trainee, &catalog, &mut tracker);
        let hep = reqs.iter().find(|r| r.department == "Hepatology").unwrap();
        assert!(hep.deferred);
    }

    #[test]
    fn test_reservation_per_retained_requirement() {
        let catalog = sample_catalog();
        let mut tracker = LoadTracker::new();
        let trainee = Trainee::new("T1", "Cardiology");

        builder().build_for(&trainee, &catalog, &mut tracker);
        // Two curriculum occurrences + home bonus.
        assert_eq!(tracker.lifetime_count("Cardiology I"), 3);
        assert_eq!(tracker.lifetime_count("EKG Lab"), 1);
        assert_eq!(tracker.lifetime_count("Cardiology II"), 0);
    }
}
