use std::time::{Duration, Instant};

use client_core::{
    view::{
        APP_TITLE, EMPTY_TITLE, ERROR_TITLE, LOADING_MESSAGE, RETRY_LABEL, SEARCH_PLACEHOLDER,
    },
    DirectoryView, LoadTicket,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::DirectoryScreen;
use crate::ui::widgets::employee_card;

const IDLE_REPAINT: Duration = Duration::from_millis(250);
const BUSY_REPAINT: Duration = Duration::from_millis(50);

pub struct DirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    screen: DirectoryScreen,
}

impl DirectoryApp {
    /// Builds the window state and queues the initial load.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        debounce: Duration,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            screen: DirectoryScreen::new(debounce),
        };
        let ticket = app.screen.mount();
        app.request_load(ticket);
        app
    }

    fn request_load(&mut self, ticket: LoadTicket) {
        let cmd = BackendCommand::ListEmployees { ticket };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.screen.fail_in_flight(&err);
        }
    }

    fn retry(&mut self) {
        if let Some(ticket) = self.screen.retry() {
            self.request_load(ticket);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.screen.apply_event(event);
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("directory_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(APP_TITLE).strong());
            });
            ui.add_space(8.0);
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("directory_status").show(ctx, |ui| {
            ui.label(egui::RichText::new(self.screen.status()).small().weak());
        });
    }

    fn show_search_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut term = self.screen.search_term().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut term)
                    .id_salt("employee_search")
                    .hint_text(SEARCH_PLACEHOLDER)
                    .desired_width(420.0),
            );
            if response.changed() {
                self.screen.on_search_input(term, Instant::now());
            }

            if !self.screen.search_term().is_empty()
                && ui.button("✕").on_hover_text("Clear search").clicked()
            {
                self.screen.on_clear(Instant::now());
            }
        });
        ui.add_space(12.0);
    }

    fn show_centered_state(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
        ui.add_space(48.0);
        ui.vertical_centered(add);
    }

    fn show_directory(&mut self, ui: &mut egui::Ui) {
        let view = self.screen.view();
        if view.shows_search_bar() {
            self.show_search_bar(ui);
        }

        match view {
            DirectoryView::Loading => Self::show_centered_state(ui, |ui| {
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label(LOADING_MESSAGE);
            }),
            DirectoryView::Error { message } => {
                let mut retry_clicked = false;
                Self::show_centered_state(ui, |ui| {
                    ui.label(
                        egui::RichText::new(ERROR_TITLE)
                            .strong()
                            .size(18.0)
                            .color(ui.visuals().error_fg_color),
                    );
                    ui.add_space(6.0);
                    ui.label(&message);
                    ui.add_space(12.0);
                    retry_clicked = ui.button(RETRY_LABEL).clicked();
                });
                if retry_clicked {
                    self.retry();
                }
            }
            DirectoryView::EmptyResults { message } => Self::show_centered_state(ui, |ui| {
                ui.label(egui::RichText::new(EMPTY_TITLE).strong().size(18.0));
                ui.add_space(6.0);
                ui.label(&message);
            }),
            DirectoryView::Populated { summary, cards } => {
                ui.label(summary);
                ui.add_space(8.0);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                            for card in &cards {
                                employee_card(ui, card);
                            }
                        });
                    });
            }
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        let now = Instant::now();
        let mut next = if self.screen.is_busy() {
            BUSY_REPAINT
        } else {
            IDLE_REPAINT
        };
        if let Some(settle) = self.screen.next_wakeup(now) {
            next = next.min(settle);
        }
        ctx.request_repaint_after(next);
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.screen.tick(Instant::now());

        self.show_header(ctx);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_directory(ui);
        });

        self.schedule_repaint(ctx);
    }
}

impl Drop for DirectoryApp {
    fn drop(&mut self) {
        self.screen.teardown();
    }
}
