//! Control logic for the assessment wizard, kept free of any DOM concerns.
//!
//! The visible section sequence is derived exactly once at initialization:
//! a fresh handoff record drops the contact section, anything else keeps the
//! full six-section run. All navigation and progress arithmetic indexes into
//! that sequence, so there are no conditional offsets anywhere else.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::AssessmentRecord;
use crate::lead::{validate, ContactDraft, ContactErrors, ContactField, LeadRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Contact,
    Business,
    Operations,
    TimeWasters,
    Technology,
    Goals,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Contact,
        SectionId::Business,
        SectionId::Operations,
        SectionId::TimeWasters,
        SectionId::Technology,
        SectionId::Goals,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Contact => "Your Information",
            SectionId::Business => "About Your Business",
            SectionId::Operations => "Daily Operations",
            SectionId::TimeWasters => "Time Wasters",
            SectionId::Technology => "Technology & Tools",
            SectionId::Goals => "Goals & Growth",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SectionId::Contact => "Let's start with your basic information",
            SectionId::Business => "Tell us about your business basics",
            SectionId::Operations => "Your day-to-day work and routines",
            SectionId::TimeWasters => "Identify what slows you down",
            SectionId::Technology => "Your current tools and automation readiness",
            SectionId::Goals => "Where you want to take your business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitting,
    Submitted,
}

/// Result of the submission boundary. The simulated flow only ever produces
/// `Success`, but the recovery edge exists so a real backend can slot in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success,
    Failure(String),
}

/// The payload assembled on submit. Goes nowhere but the console for now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAssessment {
    pub lead_record: Option<LeadRecord>,
    pub assessment_data: AssessmentRecord,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    sections: Vec<SectionId>,
    position: usize,
    pub lead: Option<LeadRecord>,
    pub has_lead_record: bool,
    pub contact: ContactDraft,
    pub contact_errors: ContactErrors,
    pub answers: AssessmentRecord,
    pub submission: SubmissionState,
    pub submit_error: Option<String>,
}

impl Wizard {
    /// Entry transition. The caller resolves the handoff record (including
    /// discarding stale or corrupt data) before constructing the wizard;
    /// `Some` here always means a fresh record.
    pub fn init(handoff: Option<LeadRecord>) -> Self {
        let (sections, lead, has_lead_record) = match handoff {
            Some(record) => (SectionId::ALL[1..].to_vec(), Some(record), true),
            None => (SectionId::ALL.to_vec(), None, false),
        };
        Wizard {
            sections,
            position: 0,
            lead,
            has_lead_record,
            contact: ContactDraft::default(),
            contact_errors: ContactErrors::default(),
            answers: AssessmentRecord::default(),
            submission: SubmissionState::Editing,
            submit_error: None,
        }
    }

    pub fn current_section(&self) -> SectionId {
        self.sections[self.position]
    }

    /// 1-based step for the "Step N of M" display.
    pub fn step_number(&self) -> usize {
        self.position + 1
    }

    pub fn total_steps(&self) -> usize {
        self.sections.len()
    }

    pub fn is_first_step(&self) -> bool {
        self.position == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.position + 1 == self.sections.len()
    }

    /// Share of the visible sequence behind the user: 0 on the first visible
    /// step, 100 on the goals step, in both entry modes. Clamped to [0, 100].
    pub fn progress(&self) -> f64 {
        let span = self.sections.len().saturating_sub(1).max(1) as f64;
        (self.position as f64 / span * 100.0).clamp(0.0, 100.0)
    }

    /// Rough completion-time hint shown under the navigation buttons.
    pub fn minutes_remaining(&self) -> usize {
        (self.total_steps() - self.step_number()).max(1)
    }

    pub fn update_contact(&mut self, field: ContactField, value: String) {
        self.contact.update_field(field, value);
        self.contact_errors.clear(field);
    }

    pub fn can_navigate(&self) -> bool {
        self.submission == SubmissionState::Editing
    }

    /// Forward transition. On the contact section validation gates the
    /// advance, and a passing draft becomes the lead record with a fresh
    /// timestamp. Everywhere else every question is skippable, so the step
    /// just advances, clamped at the goals section. Returns whether the
    /// position moved, so the caller knows to reset the viewport.
    pub fn next(&mut self, now: DateTime<Utc>) -> bool {
        if !self.can_navigate() {
            return false;
        }
        if self.current_section() == SectionId::Contact {
            let errors = validate(&self.contact);
            if !errors.is_empty() {
                self.contact_errors = errors;
                return false;
            }
            self.lead = Some(self.contact.clone().into_record(now));
            self.has_lead_record = true;
            self.contact_errors = ContactErrors::default();
        }
        if self.position + 1 < self.sections.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Backward transition, clamped at the first visible section. Runs no
    /// validation and clears nothing; whatever was entered stays put.
    pub fn previous(&mut self) -> bool {
        if !self.can_navigate() || self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Only invocable from the goals section while editing. Flips to
    /// `Submitting` (freezing navigation) and hands back the assembled
    /// payload for the simulated send.
    pub fn begin_submission(&mut self, now: DateTime<Utc>) -> Option<CompletedAssessment> {
        if !self.can_navigate() || !self.is_last_step() {
            return None;
        }
        self.submission = SubmissionState::Submitting;
        self.submit_error = None;
        Some(CompletedAssessment {
            lead_record: self.lead.clone(),
            assessment_data: self.answers.clone(),
            completed_at: now,
        })
    }

    /// Second half of the submission: success is terminal, failure drops
    /// back to editing with the reason recorded for a retry.
    pub fn complete_submission(&mut self, outcome: SubmitOutcome) {
        if self.submission != SubmissionState::Submitting {
            return;
        }
        match outcome {
            SubmitOutcome::Success => self.submission = SubmissionState::Submitted,
            SubmitOutcome::Failure(reason) => {
                self.submission = SubmissionState::Editing;
                self.submit_error = Some(reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::FieldError;

    fn fresh_lead() -> LeadRecord {
        LeadRecord {
            name: "Jane Doe".into(),
            email: "jane@doeplumbing.com".into(),
            company: "Doe Plumbing".into(),
            message: "chasing invoices".into(),
            timestamp: Utc::now(),
        }
    }

    fn fill_contact(wizard: &mut Wizard) {
        wizard.update_contact(ContactField::Name, "Jane Doe".into());
        wizard.update_contact(ContactField::Email, "a@b.co".into());
        wizard.update_contact(ContactField::Company, "Doe Plumbing".into());
    }

    fn advance_to_goals(wizard: &mut Wizard) {
        while !wizard.is_last_step() {
            assert!(wizard.next(Utc::now()));
        }
    }

    #[test]
    fn fresh_handoff_skips_the_contact_section() {
        let wizard = Wizard::init(Some(fresh_lead()));
        assert!(wizard.has_lead_record);
        assert_eq!(wizard.current_section(), SectionId::Business);
        assert_eq!(wizard.total_steps(), 5);
        assert_eq!(wizard.step_number(), 1);
    }

    #[test]
    fn no_handoff_starts_at_contact_with_all_six_sections() {
        let wizard = Wizard::init(None);
        assert!(!wizard.has_lead_record);
        assert_eq!(wizard.current_section(), SectionId::Contact);
        assert_eq!(wizard.total_steps(), 6);
    }

    #[test]
    fn progress_is_zero_on_the_first_visible_step_in_both_modes() {
        assert_eq!(Wizard::init(Some(fresh_lead())).progress(), 0.0);
        assert_eq!(Wizard::init(None).progress(), 0.0);
    }

    #[test]
    fn progress_reaches_one_hundred_on_goals_in_both_modes() {
        let mut with_lead = Wizard::init(Some(fresh_lead()));
        advance_to_goals(&mut with_lead);
        assert_eq!(with_lead.current_section(), SectionId::Goals);
        assert_eq!(with_lead.progress(), 100.0);

        let mut without_lead = Wizard::init(None);
        fill_contact(&mut without_lead);
        advance_to_goals(&mut without_lead);
        assert_eq!(without_lead.current_section(), SectionId::Goals);
        assert_eq!(without_lead.progress(), 100.0);
    }

    #[test]
    fn next_from_contact_with_empty_name_stays_and_errors() {
        let mut wizard = Wizard::init(None);
        wizard.update_contact(ContactField::Email, "a@b.co".into());
        wizard.update_contact(ContactField::Company, "Doe Plumbing".into());

        assert!(!wizard.next(Utc::now()));
        assert_eq!(wizard.current_section(), SectionId::Contact);
        assert_eq!(wizard.contact_errors.name, Some(FieldError::Required));
        assert!(!wizard.has_lead_record);
    }

    #[test]
    fn valid_contact_advances_and_synthesizes_the_lead() {
        let mut wizard = Wizard::init(None);
        fill_contact(&mut wizard);
        let before = Utc::now();

        assert!(wizard.next(before));
        assert_eq!(wizard.current_section(), SectionId::Business);
        assert!(wizard.has_lead_record);
        let lead = wizard.lead.as_ref().unwrap();
        assert_eq!(lead.email, "a@b.co");
        assert_eq!(lead.timestamp, before);
        // The sequence was fixed at init; the run stays six steps long.
        assert_eq!(wizard.total_steps(), 6);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut wizard = Wizard::init(None);
        assert!(!wizard.next(Utc::now()));
        assert_eq!(wizard.contact_errors.name, Some(FieldError::Required));

        wizard.update_contact(ContactField::Name, "J".into());
        assert!(wizard.contact_errors.name.is_none());
        assert_eq!(wizard.contact_errors.email, Some(FieldError::Required));
    }

    #[test]
    fn next_clamps_at_goals() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        advance_to_goals(&mut wizard);
        assert!(!wizard.next(Utc::now()));
        assert_eq!(wizard.current_section(), SectionId::Goals);
    }

    #[test]
    fn previous_clamps_at_the_first_visible_section() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        assert!(!wizard.previous());
        assert_eq!(wizard.current_section(), SectionId::Business);

        assert!(wizard.next(Utc::now()));
        assert!(wizard.previous());
        assert_eq!(wizard.current_section(), SectionId::Business);
    }

    #[test]
    fn going_back_retains_entered_answers() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        wizard.answers.industry = "Construction".into();
        assert!(wizard.next(Utc::now()));
        assert!(wizard.previous());
        assert_eq!(wizard.answers.industry, "Construction");
    }

    #[test]
    fn submission_only_starts_from_goals() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        assert!(wizard.begin_submission(Utc::now()).is_none());
        assert_eq!(wizard.submission, SubmissionState::Editing);

        advance_to_goals(&mut wizard);
        let payload = wizard.begin_submission(Utc::now()).unwrap();
        assert_eq!(wizard.submission, SubmissionState::Submitting);
        assert_eq!(payload.lead_record.unwrap().name, "Jane Doe");
    }

    #[test]
    fn navigation_is_frozen_while_submitting_and_after() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        advance_to_goals(&mut wizard);
        wizard.begin_submission(Utc::now()).unwrap();
        assert!(!wizard.previous());
        assert!(!wizard.next(Utc::now()));
        // No duplicate submission while one is outstanding.
        assert!(wizard.begin_submission(Utc::now()).is_none());

        wizard.complete_submission(SubmitOutcome::Success);
        assert_eq!(wizard.submission, SubmissionState::Submitted);
        assert!(!wizard.previous());
    }

    #[test]
    fn failure_outcome_returns_to_editing_with_the_reason() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        advance_to_goals(&mut wizard);
        wizard.begin_submission(Utc::now()).unwrap();
        wizard.complete_submission(SubmitOutcome::Failure("connection reset".into()));

        assert_eq!(wizard.submission, SubmissionState::Editing);
        assert_eq!(wizard.submit_error.as_deref(), Some("connection reset"));
        // A retry is possible from here.
        assert!(wizard.begin_submission(Utc::now()).is_some());
    }

    #[test]
    fn submit_flow_stores_the_submitted_state() {
        // Replays the page wiring around the simulated delay: the value that
        // began the submission is the one completed and stored afterwards.
        // Completing a clone taken before `begin_submission` would hit the
        // not-submitting guard and the stored state would stay `Editing`.
        let mut stored = Wizard::init(Some(fresh_lead()));
        advance_to_goals(&mut stored);

        let mut in_flight = stored.clone();
        assert!(in_flight.begin_submission(Utc::now()).is_some());
        stored = in_flight.clone();
        assert_eq!(stored.submission, SubmissionState::Submitting);

        in_flight.complete_submission(SubmitOutcome::Success);
        stored = in_flight;
        assert_eq!(stored.submission, SubmissionState::Submitted);
    }

    #[test]
    fn completing_while_not_submitting_is_a_no_op() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        wizard.complete_submission(SubmitOutcome::Success);
        assert_eq!(wizard.submission, SubmissionState::Editing);
    }

    #[test]
    fn payload_serializes_the_full_shape() {
        let mut wizard = Wizard::init(Some(fresh_lead()));
        wizard.answers.industry = "Retail".into();
        advance_to_goals(&mut wizard);
        let payload = wizard.begin_submission(Utc::now()).unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"leadRecord\""));
        assert!(json.contains("\"assessmentData\""));
        assert!(json.contains("\"completedAt\""));
        assert!(json.contains("\"industry\":\"Retail\""));
    }
}
