//! Backend worker: owns the employee source and answers UI commands on a
//! dedicated tokio runtime.

use std::{sync::Arc, thread};

use client_core::EmployeeSource;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    source: Arc<dyn EmployeeSource>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("failed to build backend runtime: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            // Each load is its own task; the reducer drops stale completions.
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend received command");
                match cmd {
                    BackendCommand::ListEmployees { ticket } => {
                        let source = Arc::clone(&source);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let result = source.list_employees().await;
                            if ui_tx
                                .send(UiEvent::EmployeesLoaded { ticket, result })
                                .is_err()
                            {
                                tracing::debug!(
                                    ticket = ticket.value(),
                                    "ui closed before employee load finished"
                                );
                            }
                        });
                    }
                }
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    });
}
