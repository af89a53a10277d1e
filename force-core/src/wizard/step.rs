use std::fmt;

use serde::{Deserialize, Serialize};

/// The steps of the onboarding wizard, in order.
///
/// Progresses linearly: Company → Contact → Integration → Plan. Back moves
/// one step at a time; there is no skipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Company,
    Contact,
    Integration,
    Plan,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [Self::Company, Self::Contact, Self::Integration, Self::Plan];

    /// One-based position, as shown on the step indicator.
    pub fn index(&self) -> u8 {
        match self {
            Self::Company => 1,
            Self::Contact => 2,
            Self::Integration => 3,
            Self::Plan => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.index() == index)
    }

    /// The step after this one; `None` on the last step.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The step before this one; `None` on the first step.
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Only moves to an adjacent step are valid.
    pub fn can_transition_to(
        &self,
        target: WizardStep,
    ) -> bool {
        self.next() == Some(target) || self.previous() == Some(target)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Company => "Company Details",
            Self::Contact => "Primary Contact",
            Self::Integration => "Salesforce Instance Details",
            Self::Plan => "Select Your Plan",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Contact => "contact",
            Self::Integration => "integration",
            Self::Plan => "plan",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a step appears on the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMarker {
    pub step: WizardStep,
    pub status: StepStatus,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use WizardStep::*;

    #[test]
    fn indices_are_one_based_and_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
        assert_eq!(Company.index(), 1);
        assert_eq!(Plan.index(), 4);
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(5), None);
    }

    #[test]
    fn next_walks_all_steps() {
        let mut current = Company;
        for expected in [Contact, Integration, Plan] {
            let next = current.next().unwrap();
            assert_eq!(next, expected);
            current = next;
        }
        assert!(current.is_last());
        assert_eq!(current.next(), None);
    }

    #[test]
    fn previous_stops_at_first_step() {
        assert_eq!(Plan.previous(), Some(Integration));
        assert_eq!(Contact.previous(), Some(Company));
        assert_eq!(Company.previous(), None);
    }

    #[test]
    fn only_adjacent_transitions_are_valid() {
        assert!(Company.can_transition_to(Contact));
        assert!(Contact.can_transition_to(Company));
        assert!(!Company.can_transition_to(Integration));
        assert!(!Plan.can_transition_to(Company));
        assert!(!Contact.can_transition_to(Contact));
    }

    #[test]
    fn display_matches_serde() {
        for step in WizardStep::ALL {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{step}\""));
        }
    }
}
