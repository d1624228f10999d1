//! UI/backend events and error modeling for the desktop directory.

use client_core::{FetchFailure, LoadTicket};
use shared::domain::Employee;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    EmployeesLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Employee>, FetchFailure>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

/// Failure of the desktop plumbing itself, as opposed to a failed fetch.
#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text shown in place of the directory when a load can no longer
    /// complete.
    pub fn user_message(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => format!(
                "Backend worker startup failure; restart the application. ({})",
                self.message
            ),
            UiErrorContext::CommandQueue => self.message.clone(),
        }
    }
}
