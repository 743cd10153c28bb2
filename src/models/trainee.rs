//! Trainee model.

use serde::{Deserialize, Serialize};

/// Training track a trainee follows.
///
/// External-track trainees choose extra specialties themselves and receive
/// a short bonus rotation in each; standard-track trainees follow the
/// curriculum plus the home-specialty bonus only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Curriculum-only training.
    #[default]
    Standard,
    /// Externally funded training with self-selected specialties.
    External,
}

/// A trainee to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainee {
    /// Unique trainee name.
    pub name: String,
    /// Home specialty; earns a bonus rotation in its department.
    pub specialty: String,
    /// Cohort key (entry year); trainees are scheduled per cohort.
    pub cohort: String,
    /// Role description (resident, graduate student, ...).
    pub role: String,
    /// Training track.
    pub track: Track,
    /// Self-selected specialties; non-empty only on the external track.
    #[serde(default)]
    pub self_selected_specialties: Vec<String>,
}

impl Trainee {
    /// Creates a standard-track trainee.
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            cohort: String::new(),
            role: String::new(),
            track: Track::Standard,
            self_selected_specialties: Vec::new(),
        }
    }

    /// Sets the cohort key.
    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = cohort.into();
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Switches to the external track.
    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    /// Adds a self-selected specialty.
    pub fn with_self_selected(mut self, specialty: impl Into<String>) -> Self {
        self.self_selected_specialties.push(specialty.into());
        self
    }

    /// Whether this trainee follows the external track.
    pub fn is_external(&self) -> bool {
        self.track == Track::External
    }

    /// Distinct self-selected specialties, skipping the home specialty.
    ///
    /// A self-selection equal to the home specialty earns no duplicate
    /// bonus; duplicates within the list count once.
    pub fn distinct_self_selected(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for s in &self.self_selected_specialties {
            if s != &self.specialty && !out.contains(&s.as_str()) {
                out.push(s);
            }
        }
        out
    }
}
