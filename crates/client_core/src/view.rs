//! Presentation model derived from directory state.
//!
//! Front ends render a `DirectoryView`; they never inspect the raw loading
//! and error flags themselves.

use shared::domain::Employee;

use crate::{
    avatar::{avatar_gradient, initials, AvatarGradient},
    directory::{DirectoryPhase, DirectoryState},
    search::is_blank_query,
};

pub const APP_TITLE: &str = "Team Directory";
pub const SEARCH_PLACEHOLDER: &str = "Search by name or role...";
pub const LOADING_MESSAGE: &str = "Loading employees...";
pub const ERROR_TITLE: &str = "Failed to Load Employees";
pub const RETRY_LABEL: &str = "Retry";
pub const EMPTY_TITLE: &str = "No Employees Found";
pub const EMPTY_DIRECTORY_MESSAGE: &str = "The employee directory is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    Error,
    EmptyResults,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeCard {
    pub initials: String,
    pub display_name: String,
    pub role: String,
    pub id_label: String,
    pub avatar: AvatarGradient,
}

impl EmployeeCard {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            initials: initials(&employee.first_name, &employee.last_name),
            display_name: employee.display_name(),
            role: employee.role.clone(),
            id_label: format!("ID: {}", employee.id),
            avatar: avatar_gradient(employee.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryView {
    Loading,
    Error { message: String },
    EmptyResults { message: String },
    Populated {
        summary: String,
        cards: Vec<EmployeeCard>,
    },
}

impl DirectoryView {
    pub fn from_state(state: &DirectoryState) -> Self {
        match state.phase() {
            DirectoryPhase::Loading => Self::Loading,
            DirectoryPhase::Failed => Self::Error {
                message: state.error().unwrap_or_default().to_string(),
            },
            DirectoryPhase::Ready => {
                let shown = state.filtered_employees();
                if shown.is_empty() {
                    Self::EmptyResults {
                        message: empty_results_message(state.search_query()),
                    }
                } else {
                    Self::Populated {
                        summary: results_summary(
                            shown.len(),
                            state.employees().len(),
                            state.search_query(),
                        ),
                        cards: shown.iter().map(EmployeeCard::from_employee).collect(),
                    }
                }
            }
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Loading => ViewKind::Loading,
            Self::Error { .. } => ViewKind::Error,
            Self::EmptyResults { .. } => ViewKind::EmptyResults,
            Self::Populated { .. } => ViewKind::Populated,
        }
    }

    /// The search bar is hidden while loading and on error.
    pub fn shows_search_bar(&self) -> bool {
        matches!(self, Self::EmptyResults { .. } | Self::Populated { .. })
    }

    pub fn shows_retry(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

pub fn results_summary(shown: usize, total: usize, query: &str) -> String {
    let mut summary = format!("Showing {shown} of {total} employees");
    if !is_blank_query(query) {
        summary.push_str(&format!(" matching \"{query}\""));
    }
    summary
}

pub fn empty_results_message(query: &str) -> String {
    if is_blank_query(query) {
        EMPTY_DIRECTORY_MESSAGE.to_string()
    } else {
        format!("No results found for \"{query}\". Try a different search term.")
    }
}
