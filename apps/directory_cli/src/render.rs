//! Plain-text rendering of directory views.

use std::fmt::Write as _;

use client_core::{
    view::{APP_TITLE, EMPTY_TITLE, LOADING_MESSAGE},
    DirectoryView, EmployeeCard,
};
use shared::domain::Employee;

pub fn render_view(view: &DirectoryView) -> String {
    let mut out = format!("{APP_TITLE}\n\n");
    match view {
        DirectoryView::Loading => {
            let _ = writeln!(out, "{LOADING_MESSAGE}");
        }
        DirectoryView::Error { message } => {
            let _ = writeln!(out, "{message}");
        }
        DirectoryView::EmptyResults { message } => {
            let _ = writeln!(out, "{EMPTY_TITLE}\n{message}");
        }
        DirectoryView::Populated { summary, cards } => {
            let _ = writeln!(out, "{summary}\n");
            for card in cards {
                out.push_str(&render_card(card));
            }
        }
    }
    out
}

pub fn render_employee(employee: &Employee) -> String {
    render_card(&EmployeeCard::from_employee(employee))
}

fn render_card(card: &EmployeeCard) -> String {
    let badge = format!("[{}]", card.initials);
    let indent = " ".repeat(badge.chars().count() + 1);
    format!(
        "{badge} {name}\n{indent}{role}\n{indent}{id} ({start} -> {end})\n\n",
        name = card.display_name,
        role = card.role,
        id = card.id_label,
        start = card.avatar.start.to_hex(),
        end = card.avatar.end.to_hex(),
    )
}
