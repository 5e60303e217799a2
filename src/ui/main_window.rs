//! Main application window.
//!
//! Single form: ingredient pages, cuisine drop-down, healthiness range,
//! search button and the results area.

use crate::config::{Config, ConfigManager, ThemeChoice};
use crate::core::catalog::BUILTIN_CATALOG;
use crate::core::health::{HEALTH_MAX, HEALTH_MIN};
use crate::core::search::{RecipeSearch, SearchError};
use crate::core::selection::SelectionState;
use crate::ui::theme;
use crate::utils::clipboard::{self, ClipboardError};
use egui::{Color32, RichText, TextEdit, Ui};
use tracing::{debug, warn};

const SECTION_SIZE: f32 = 18.0;

/// Main window state.
pub struct MainWindow {
    // Config
    config_manager: ConfigManager,
    config: Config,

    // Search
    search: RecipeSearch<'static>,
    state: SelectionState,
    results_text: String,
    notice: Option<SearchError>,

    // Status bar
    status_message: String,
    status_is_error: bool,

    theme_applied: bool,
}

impl MainWindow {
    pub fn new(config_manager: ConfigManager, config: Config) -> Self {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let state = SelectionState::new(search.catalog().vocabulary().to_vec(), config.range_clamp);

        Self {
            config_manager,
            config,

            search,
            state,
            results_text: String::new(),
            notice: None,

            status_message: "Ready".to_string(),
            status_is_error: false,

            theme_applied: false,
        }
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once (again after a toggle)
        if !self.theme_applied {
            theme::apply_theme(ctx, self.config.theme);
            self.theme_applied = true;
        }

        let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if self.notice.is_some() {
            if enter_pressed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.notice = None;
            }
        } else if enter_pressed {
            self.find_recipes();
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        let form_enabled = self.notice.is_none();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(form_enabled, |ui| {
                egui::ScrollArea::vertical().id_salt("form").show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        self.render_ingredients(ui);
                        ui.add_space(10.0);
                        self.render_cuisine(ui);
                        ui.add_space(10.0);
                        self.render_health_range(ui);
                        ui.add_space(15.0);
                        self.render_actions(ui);
                        ui.add_space(10.0);
                        self.render_results(ui);
                    });
                });
            });
        });

        if let Some(notice) = self.notice {
            self.render_notice(ctx, notice);
        }
    }

    fn section_heading(&self, ui: &mut Ui, text: &str) {
        ui.label(
            RichText::new(text)
                .size(SECTION_SIZE)
                .strong()
                .color(theme::accent_color(self.config.theme)),
        );
    }

    fn render_ingredients(&mut self, ui: &mut Ui) {
        self.section_heading(ui, "Select Ingredients:");

        // Copy out the page so checkbox changes can borrow the pager mutably
        let items = self.state.pager.current_items().to_vec();
        egui::Grid::new("ingredient_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .min_col_width(140.0)
            .show(ui, |ui| {
                for (i, ingredient) in items.iter().enumerate() {
                    let mut checked = self.state.pager.is_checked(ingredient);
                    if ui.checkbox(&mut checked, ingredient.as_str()).changed() {
                        self.state.pager.set_checked(ingredient, checked);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.state.pager.has_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                self.previous_page();
            }
            if ui
                .add_enabled(self.state.pager.has_next(), egui::Button::new("Next"))
                .clicked()
            {
                self.next_page();
            }
            ui.label(
                RichText::new(format!(
                    "Page {} of {}",
                    self.state.pager.current_page() + 1,
                    self.state.pager.page_count().max(1)
                ))
                .color(Color32::GRAY),
            );
        });

        let checked = self.state.pager.checked_in_order();
        let summary = if checked.is_empty() {
            "Selected: none".to_string()
        } else {
            format!("Selected: {}", checked.join(", "))
        };
        ui.label(RichText::new(summary).italics());
    }

    fn render_cuisine(&mut self, ui: &mut Ui) {
        self.section_heading(ui, "Select Cuisine:");

        let mut choice = self.state.cuisine().map(str::to_string);
        let selected_text = choice.clone().unwrap_or_default();
        egui::ComboBox::from_id_salt("cuisine")
            .selected_text(selected_text)
            .width(180.0)
            .show_ui(ui, |ui| {
                for cuisine in self.search.catalog().cuisines() {
                    ui.selectable_value(&mut choice, Some(cuisine.clone()), cuisine.as_str());
                }
            });

        if choice.as_deref() != self.state.cuisine() {
            debug!(cuisine = ?choice, "cuisine changed");
            self.state.set_cuisine(choice);
        }
    }

    fn render_health_range(&mut self, ui: &mut Ui) {
        self.section_heading(ui, "Select Healthiness Range:");

        ui.horizontal(|ui| {
            let mut min = self.state.health.min();
            if ui.add(egui::Slider::new(&mut min, HEALTH_MIN..=HEALTH_MAX)).changed() {
                self.state.health.set_min(min);
            }

            ui.label("to");

            let mut max = self.state.health.max();
            if ui.add(egui::Slider::new(&mut max, HEALTH_MIN..=HEALTH_MAX)).changed() {
                self.state.health.set_max(max);
            }
        });
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let find = egui::Button::new(RichText::new("Find Recipes").strong().color(Color32::WHITE))
                .fill(theme::success_color());
            if ui.add(find).clicked() {
                self.find_recipes();
            }

            if ui.button("Reset").on_hover_text("Clear all selections").clicked() {
                self.reset_selection();
            }
        });
    }

    fn render_results(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.section_heading(ui, "Matching Recipes:");
            if ui.small_button("📋 Copy").on_hover_text("Copy results to clipboard").clicked() {
                self.copy_results();
            }
        });

        egui::ScrollArea::vertical()
            .id_salt("results")
            .max_height(220.0)
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(&mut self.results_text.as_str())
                        .desired_width(f32::INFINITY)
                        .desired_rows(10),
                );
            });
    }

    fn render_status_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let color = if self.status_is_error {
                theme::error_color()
            } else {
                theme::success_color()
            };
            ui.label(RichText::new(&self.status_message).color(color));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(Color32::GRAY),
                );
                let label = match self.config.theme {
                    ThemeChoice::Light => "🌙 Dark",
                    ThemeChoice::Dark => "☀ Light",
                };
                if ui.small_button(label).clicked() {
                    self.toggle_theme();
                }
            });
        });
    }

    fn render_notice(&mut self, ctx: &egui::Context, notice: SearchError) {
        let mut dismissed = false;
        egui::Window::new(notice.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(notice.to_string()).color(theme::warning_color()));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.notice = None;
        }
    }

    // Actions

    fn next_page(&mut self) {
        if self.state.pager.next_page() {
            debug!(page = self.state.pager.current_page(), "next ingredient page");
        }
    }

    fn previous_page(&mut self) {
        if self.state.pager.previous_page() {
            debug!(page = self.state.pager.current_page(), "previous ingredient page");
        }
    }

    /// Run the search. Rejected searches open a notice and keep the previous
    /// results on screen.
    fn find_recipes(&mut self) {
        match self.search.search(&self.state) {
            Ok(result) => {
                let msg = if result.found() {
                    format!("Found {} matching recipe(s)", result.matches.len())
                } else {
                    "No matching recipes found".to_string()
                };
                self.results_text = result.rendered;
                self.set_status(&msg, false);
            }
            Err(e) => {
                self.notice = Some(e);
            }
        }
    }

    fn reset_selection(&mut self) {
        self.state.clear();
        self.set_status("Selections cleared", false);
    }

    fn copy_results(&mut self) {
        match clipboard::copy_to_clipboard(&self.results_text) {
            Ok(()) => self.set_status("Copied results to clipboard", false),
            Err(ClipboardError::Empty) => self.set_status("No results to copy", true),
            Err(e) => self.set_status(&format!("Copy failed: {}", e), true),
        }
    }

    fn toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        };
        self.theme_applied = false;

        if let Err(e) = self.config_manager.save(&self.config) {
            warn!("{}", e);
            self.set_status(&format!("Failed to save settings: {}", e), true);
        }
    }

    fn set_status(&mut self, msg: &str, is_error: bool) {
        self.status_message = msg.to_string();
        self.status_is_error = is_error;
    }
}
