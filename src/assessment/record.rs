//! Answer record for the assessment wizard. Every question is skippable, so
//! everything here is optional or empty by default; only the contact step
//! (see `crate::lead`) carries hard requirements.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSize {
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6-20")]
    SixToTwenty,
    #[serde(rename = "21-50")]
    TwentyOneToFifty,
    #[serde(rename = "51+")]
    FiftyOnePlus,
}

impl TeamSize {
    pub const ALL: [TeamSize; 4] = [
        TeamSize::OneToFive,
        TeamSize::SixToTwenty,
        TeamSize::TwentyOneToFifty,
        TeamSize::FiftyOnePlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TeamSize::OneToFive => "1-5",
            TeamSize::SixToTwenty => "6-20",
            TeamSize::TwentyOneToFifty => "21-50",
            TeamSize::FiftyOnePlus => "51+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessAge {
    #[serde(rename = "less-than-1")]
    LessThanOne,
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "more-than-10")]
    MoreThanTen,
}

impl BusinessAge {
    pub const ALL: [BusinessAge; 4] = [
        BusinessAge::LessThanOne,
        BusinessAge::OneToFive,
        BusinessAge::SixToTen,
        BusinessAge::MoreThanTen,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BusinessAge::LessThanOne => "Less than 1 year",
            BusinessAge::OneToFive => "1\u{2013}5 years",
            BusinessAge::SixToTen => "6\u{2013}10 years",
            BusinessAge::MoreThanTen => "More than 10 years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskTracking {
    #[serde(rename = "paper")]
    Paper,
    #[serde(rename = "spreadsheets")]
    Spreadsheets,
    #[serde(rename = "digital-tools")]
    DigitalTools,
    #[serde(rename = "memory")]
    Memory,
}

impl TaskTracking {
    pub const ALL: [TaskTracking; 4] = [
        TaskTracking::Paper,
        TaskTracking::Spreadsheets,
        TaskTracking::DigitalTools,
        TaskTracking::Memory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskTracking::Paper => "Paper to-do lists or notebooks",
            TaskTracking::Spreadsheets => "Spreadsheets (e.g. Excel, Google Sheets)",
            TaskTracking::DigitalTools => "A digital tool or app (e.g. Trello, Asana, calendar)",
            TaskTracking::Memory => "Mental notes / memory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminHours {
    #[serde(rename = "less-than-5")]
    LessThanFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10-20")]
    TenToTwenty,
    #[serde(rename = "more-than-20")]
    MoreThanTwenty,
}

impl AdminHours {
    pub const ALL: [AdminHours; 4] = [
        AdminHours::LessThanFive,
        AdminHours::FiveToTen,
        AdminHours::TenToTwenty,
        AdminHours::MoreThanTwenty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminHours::LessThanFive => "Less than 5 hours",
            AdminHours::FiveToTen => "5\u{2013}10 hours",
            AdminHours::TenToTwenty => "10\u{2013}20 hours",
            AdminHours::MoreThanTwenty => "More than 20 hours",
        }
    }
}

pub const TIME_CONSUMING_TASKS: [&str; 7] = [
    "Managing inventory or orders",
    "Invoicing and billing",
    "Scheduling appointments or calendar management",
    "Responding to customer emails or messages",
    "Marketing tasks (social posts, email campaigns)",
    "Data entry or record-keeping (spreadsheets, reports)",
    "Payroll or team management (timesheets, pay)",
];

pub const TIME_WASTER_SITUATIONS: [&str; 6] = [
    "Forgetting to follow up with customers or leads on time",
    "Entering the same information into multiple systems (and sometimes making errors)",
    "Spending hours manually creating reports, invoices, or summaries",
    "Missing or double-booking appointments (scheduling headaches)",
    "Chasing down late payments or billing reminders",
    "None of the above \u{2013} we handle these smoothly",
];

pub const CURRENT_TOOLS: [&str; 8] = [
    "Email/calendar (Gmail, Outlook, etc.)",
    "Spreadsheets (Excel, Google Sheets)",
    "Accounting software (QuickBooks, Xero, etc.)",
    "Customer database or CRM (Salesforce, HubSpot, etc.)",
    "Project or task app (Trello, Asana, etc.)",
    "Scheduling/booking app (Calendly, etc.)",
    "Marketing tools (email marketing, social schedulers)",
    "None of the above (mostly manual)",
];

pub const CURRENT_AUTOMATION: [&str; 6] = [
    "Automatic email reminders or autoresponders",
    "Online booking/scheduling links (clients book their own appointments)",
    "Email or marketing automation (newsletters, follow-ups)",
    "Automatic payment or billing reminders",
    "No, we mostly do things manually",
    "Not sure / I need to check",
];

pub const BUSINESS_GOALS: [&str; 5] = [
    "Increase sales or revenue",
    "Improve customer service",
    "Grow our team or staff",
    "Reduce operating costs",
    "Spend more time on strategy (not busywork)",
];

/// Everything the wizard collects. Serialized field names mirror the payload
/// a future backend would receive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub industry: String,
    pub team_size: Option<TeamSize>,
    pub business_age: Option<BusinessAge>,
    pub time_consuming_tasks: Vec<String>,
    pub other_time_consuming_task: String,
    pub biggest_bottleneck: String,
    pub task_tracking: Option<TaskTracking>,
    /// 1 = not at all, 5 = very well.
    pub process_consistency: Option<u8>,
    pub time_waster_situations: Vec<String>,
    pub admin_hours: Option<AdminHours>,
    pub current_tools: Vec<String>,
    pub current_automation: Vec<String>,
    /// 1 = not comfortable, 5 = very comfortable.
    pub tech_comfort: Option<u8>,
    /// 1 = very hesitant, 5 = very excited.
    pub automation_openness: Option<u8>,
    pub business_goals: Vec<String>,
    pub other_business_goal: String,
    pub extra_time_use: String,
    /// 1 = not a priority, 5 = top priority.
    pub time_importance: Option<u8>,
}

/// Toggle membership of `label` in a check-all-that-apply set: appends on
/// insert, removes on a second select, and preserves the order of the
/// remaining entries. Duplicates are impossible by construction.
pub fn toggle(set: &mut Vec<String>, label: &str) {
    if let Some(pos) = set.iter().position(|entry| entry == label) {
        set.remove(pos);
    } else {
        set.push(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let mut set: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let original = set.clone();
        toggle(&mut set, TIME_CONSUMING_TASKS[1]);
        assert_eq!(set.len(), 4);
        toggle(&mut set, TIME_CONSUMING_TASKS[1]);
        assert_eq!(set, original);
    }

    #[test]
    fn removing_a_middle_entry_preserves_order() {
        let mut set: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        toggle(&mut set, "b");
        assert_eq!(set, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn toggle_never_duplicates() {
        let mut set = Vec::new();
        toggle(&mut set, "x");
        toggle(&mut set, "y");
        toggle(&mut set, "x");
        toggle(&mut set, "x");
        assert_eq!(set, vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn enum_wire_values_match_the_form_values() {
        assert_eq!(
            serde_json::to_string(&TeamSize::FiftyOnePlus).unwrap(),
            "\"51+\""
        );
        assert_eq!(
            serde_json::to_string(&BusinessAge::LessThanOne).unwrap(),
            "\"less-than-1\""
        );
        assert_eq!(
            serde_json::to_string(&TaskTracking::DigitalTools).unwrap(),
            "\"digital-tools\""
        );
        assert_eq!(
            serde_json::to_string(&AdminHours::MoreThanTwenty).unwrap(),
            "\"more-than-20\""
        );
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let mut record = AssessmentRecord::default();
        record.team_size = Some(TeamSize::OneToFive);
        record.time_importance = Some(5);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"teamSize\":\"1-5\""));
        assert!(json.contains("\"timeImportance\":5"));
        assert!(json.contains("\"biggestBottleneck\":\"\""));
    }
}
