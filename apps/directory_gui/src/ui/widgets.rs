use client_core::{
    avatar::{AvatarGradient, Rgb},
    EmployeeCard,
};
use eframe::egui;

pub const CARD_WIDTH: f32 = 260.0;
const AVATAR_SIZE: f32 = 44.0;

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

fn blend(a: Rgb, b: Rgb) -> egui::Color32 {
    let mid = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    egui::Color32::from_rgb(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b))
}

/// Square avatar with a top-left to bottom-right gradient and the initials
/// centered on top.
pub fn avatar(ui: &mut egui::Ui, gradient: AvatarGradient, initials: &str) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let middle = blend(gradient.start, gradient.end);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), color(gradient.start));
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), color(gradient.end));
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    let painter = ui.painter();
    painter.add(egui::Shape::mesh(mesh));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(17.0),
        egui::Color32::WHITE,
    );
}

pub fn employee_card(ui: &mut egui::Ui, card: &EmployeeCard) {
    let visuals = ui.visuals().clone();
    egui::Frame::NONE
        .fill(visuals.faint_bg_color)
        .stroke(visuals.widgets.noninteractive.bg_stroke)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.horizontal(|ui| {
                avatar(ui, card.avatar, &card.initials);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&card.display_name).strong().size(16.0));
                    ui.label(egui::RichText::new(&card.role).color(visuals.weak_text_color()));
                });
            });
            ui.separator();
            ui.label(
                egui::RichText::new(&card.id_label)
                    .small()
                    .monospace()
                    .color(visuals.weak_text_color()),
            );
        });
}
