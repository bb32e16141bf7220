//! Per-module navigation tables.

#[cfg(test)]
#[path = "nav_tables_test.rs"]
mod nav_tables_test;

use session::{ModuleProfile, NavItem};

const ACADEMIC: &[NavItem] = &[
    NavItem::public("Overview", "/academic"),
    NavItem::restricted("Courses", "/academic/courses", &["teacher", "coordinator", "admin"]),
    NavItem::restricted("Grades", "/academic/grades", &["teacher", "admin"]),
    NavItem::restricted("My enrollment", "/academic/enrollment", &["student"]),
];

const ADMINISTRATIVE: &[NavItem] = &[
    NavItem::public("Overview", "/administrative"),
    NavItem::restricted("Payments", "/administrative/payments", &["admin", "accountant"]),
    NavItem::restricted("Staff", "/administrative/staff", &["admin"]),
];

const TECHNOLOGY: &[NavItem] = &[
    NavItem::public("Overview", "/technology"),
    NavItem::restricted("Assets", "/technology/assets", &["admin", "technician"]),
    NavItem::restricted("Tickets", "/technology/tickets", &["admin", "technician"]),
];

const EVALUATION: &[NavItem] = &[
    NavItem::public("Overview", "/evaluation"),
    NavItem::restricted("Surveys", "/evaluation/surveys", &["admin", "evaluator"]),
    NavItem::restricted("My evaluations", "/evaluation/mine", &["student", "teacher"]),
];

const MARKETING: &[NavItem] = &[
    NavItem::public("Overview", "/marketing"),
    NavItem::restricted("Campaigns", "/marketing/campaigns", &["admin", "marketing"]),
    NavItem::restricted("Leads", "/marketing/leads", &["admin", "marketing"]),
];

const STRATEGIC: &[NavItem] = &[
    NavItem::public("Overview", "/strategic"),
    NavItem::restricted("Objectives", "/strategic/objectives", &["admin", "director"]),
    NavItem::restricted("Indicators", "/strategic/indicators", &["admin", "director", "coordinator"]),
];

const SUPPORT: &[NavItem] = &[
    NavItem::public("Overview", "/support"),
    NavItem::public("New request", "/support/new"),
    NavItem::restricted("Queue", "/support/queue", &["admin", "agent"]),
];

pub fn nav_table(module: ModuleProfile) -> &'static [NavItem] {
    match module {
        ModuleProfile::Academic => ACADEMIC,
        ModuleProfile::Administrative => ADMINISTRATIVE,
        ModuleProfile::Technology => TECHNOLOGY,
        ModuleProfile::Evaluation => EVALUATION,
        ModuleProfile::Marketing => MARKETING,
        ModuleProfile::Strategic => STRATEGIC,
        ModuleProfile::Support => SUPPORT,
    }
}
