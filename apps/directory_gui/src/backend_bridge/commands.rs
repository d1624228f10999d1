//! Backend commands queued from UI to backend worker.

use client_core::LoadTicket;

#[derive(Debug)]
pub enum BackendCommand {
    ListEmployees { ticket: LoadTicket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ListEmployees { .. } => "list_employees",
        }
    }
}
