//! Bridge between the UI thread and the backend worker that talks to the employee API.

pub mod commands;
pub mod runtime;
