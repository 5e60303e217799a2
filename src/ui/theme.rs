//! Theme configuration for egui.
//!
//! A flat light theme (default) and a dark variant.

use egui::{Color32, Stroke, Style, Visuals};

use crate::config::ThemeChoice;

/// Apply the configured theme to the egui context.
pub fn apply_theme(ctx: &egui::Context, theme: ThemeChoice) {
    let mut style = (*ctx.style()).clone();
    match theme {
        ThemeChoice::Light => light_visuals(&mut style),
        ThemeChoice::Dark => dark_visuals(&mut style),
    }
    shared_style(&mut style);
    ctx.set_style(style);
}

fn light_visuals(style: &mut Style) {
    let bg_color = Color32::from_rgb(255, 255, 255);
    let widget_color = Color32::from_rgb(236, 240, 241);
    let text_color = Color32::from_rgb(33, 37, 41);
    let accent = accent_color(ThemeChoice::Light);

    style.visuals = Visuals::light();

    style.visuals.panel_fill = bg_color;
    style.visuals.window_fill = bg_color;
    style.visuals.extreme_bg_color = Color32::from_rgb(248, 249, 250);

    style.visuals.widgets.inactive.bg_fill = widget_color;
    style.visuals.widgets.inactive.weak_bg_fill = widget_color;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(214, 219, 223);
    style.visuals.widgets.active.bg_fill = accent;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    style.visuals.selection.bg_fill = accent.gamma_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, accent);
    style.visuals.hyperlink_color = accent;
}

fn dark_visuals(style: &mut Style) {
    // Charcoal surfaces with the same teal/green family as the light theme
    let surface = Color32::from_rgb(34, 34, 34);
    let raised = Color32::from_rgb(48, 48, 48);
    let control = Color32::from_rgb(68, 68, 68);
    let text_color = Color32::from_rgb(235, 235, 235);
    let accent = accent_color(ThemeChoice::Dark);

    style.visuals = Visuals::dark();

    style.visuals.panel_fill = surface;
    style.visuals.window_fill = raised;
    style.visuals.extreme_bg_color = Color32::from_rgb(24, 24, 24);
    style.visuals.faint_bg_color = raised;

    style.visuals.widgets.inactive.bg_fill = control;
    style.visuals.widgets.inactive.weak_bg_fill = control;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 90, 127);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(55, 90, 127);
    style.visuals.widgets.active.bg_fill = accent;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, surface);

    style.visuals.selection.bg_fill = accent.gamma_multiply(0.5);
    style.visuals.selection.stroke = Stroke::new(1.0, text_color);
    style.visuals.hyperlink_color = accent;
}

fn shared_style(style: &mut Style) {
    // Rounding
    style.visuals.window_rounding = 8.0.into();
    style.visuals.widgets.noninteractive.rounding = 4.0.into();
    style.visuals.widgets.inactive.rounding = 4.0.into();
    style.visuals.widgets.hovered.rounding = 4.0.into();
    style.visuals.widgets.active.rounding = 4.0.into();

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = 12.0.into();
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.slider_width = 220.0;
}

/// Accent color for headings and highlights.
pub fn accent_color(theme: ThemeChoice) -> Color32 {
    match theme {
        ThemeChoice::Light => Color32::from_rgb(44, 62, 80),
        ThemeChoice::Dark => Color32::from_rgb(0, 188, 140),
    }
}

/// Color of the primary "Find Recipes" action.
pub fn success_color() -> Color32 {
    Color32::from_rgb(24, 188, 156)
}

/// Color for failure feedback.
pub fn error_color() -> Color32 {
    Color32::from_rgb(231, 76, 60)
}

pub fn warning_color() -> Color32 {
    Color32::from_rgb(243, 156, 18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_theme_switches_mode() {
        let ctx = egui::Context::default();
        apply_theme(&ctx, ThemeChoice::Dark);
        assert!(ctx.style().visuals.dark_mode);
        apply_theme(&ctx, ThemeChoice::Light);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_dark_theme_uses_charcoal_panels() {
        let ctx = egui::Context::default();
        apply_theme(&ctx, ThemeChoice::Dark);
        let visuals = &ctx.style().visuals;
        assert_eq!(visuals.panel_fill, Color32::from_rgb(34, 34, 34));
        assert_eq!(visuals.hyperlink_color, accent_color(ThemeChoice::Dark));
    }
}
