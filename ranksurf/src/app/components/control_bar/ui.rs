use egui::{text::LayoutJob, Color32, FontId, TextFormat};
use ranks_db::{decade_year, NameMatch, MAX_RANK, NUM_DECADES};

use crate::app::events::{ClearRequested, EventQueue, GraphRequested};
use crate::EguiApp;

impl super::ControlBar {
    pub fn render(
        &mut self,
        event_queue: &mut EventQueue<EguiApp>,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
    ) {
        ui.horizontal(|ui| {
            let label = ui.label("Name");
            let name_input = ui
                .add(egui::TextEdit::singleline(&mut self.name_input).desired_width(240.0))
                .labelled_by(label.id);

            let graph_clicked = ui.button("Graph").clicked();
            let clear_clicked = ui.button("Clear").clicked();

            // Enter in the text field behaves like the Graph button.
            let enter_pressed =
                name_input.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter));

            if graph_clicked || enter_pressed {
                event_queue.queue_event(Box::new(GraphRequested::new(&self.name_input)));
            }
            if clear_clicked {
                event_queue.queue_event(Box::new(ClearRequested::new()));
            }

            if name_input.changed() {
                self.query_suggestions();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.database_info_label(ui);
            });
        });

        self.suggestions_ui(event_queue, ui);
    }

    fn database_info_label(&mut self, ui: &mut egui::Ui) {
        if !self.db_info.is_up_to_date() {
            ui.spinner();
            ui.label("loading database…");
            return;
        }
        match self.db_info.value() {
            Ok(count) => {
                ui.label(format!("{} names ({})", count, self.database_path.display()));
            }
            Err(error) => {
                ui.colored_label(Color32::RED, error.as_str());
            }
        }
    }

    /// Render the matched name list below the bar.
    fn suggestions_ui(&mut self, event_queue: &mut EventQueue<EguiApp>, ui: &mut egui::Ui) {
        if self.name_input.trim().is_empty() {
            return;
        }

        let mut accepted: Option<String> = None;
        ui.add_enabled_ui(self.suggestions.is_up_to_date(), |ui| {
            for suggestion in self.suggestions.value().iter() {
                let label = egui::Label::new(suggestion_label(suggestion))
                    .sense(egui::Sense::click());
                let resp = ui
                    .add(label)
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_ui(|ui| suggestion_hover_ui(ui, suggestion));
                if resp.clicked() {
                    accepted = Some(suggestion.record.name().to_owned());
                }
            }
        });

        if let Some(name) = accepted {
            self.name_input = name;
            event_queue.queue_event(Box::new(GraphRequested::new(&self.name_input)));
            self.query_suggestions();
        }
    }
}

/// Suggestion entry with the characters matching the query in red.
fn suggestion_label(suggestion: &NameMatch) -> LayoutJob {
    let style_red = TextFormat::simple(FontId::default(), Color32::RED);
    let style_plain = TextFormat::default();

    let mut label = LayoutJob::default();
    for (i, chr) in suggestion.record.name().char_indices() {
        let format = if suggestion.matched_indices.contains(&i) {
            style_red.to_owned()
        } else {
            style_plain.to_owned()
        };
        let mut buf = [0u8; 4];
        label.append(chr.encode_utf8(&mut buf), 0.0, format);
    }
    label
}

fn suggestion_hover_ui(ui: &mut egui::Ui, suggestion: &NameMatch) {
    ui.set_min_width(300.0);
    ui.label("click to graph this name");
    ui.separator();
    ui.label("preview:");
    // Flip the axis so rank 1 reads as the top of the preview;
    // unranked decades drop to the bottom.
    let points: Vec<[f64; 2]> = (0..NUM_DECADES)
        .map(|i| {
            let rank = suggestion.record.rank(i);
            let y = if rank == 0 {
                0.0
            } else {
                f64::from(MAX_RANK - rank + 1)
            };
            [f64::from(decade_year(i)), y]
        })
        .collect();
    egui_plot::Plot::new("suggestion_preview")
        .view_aspect(4.0 / 3.0)
        .show_axes(false)
        .show(ui, |plot_ui| {
            plot_ui.line(egui_plot::Line::new(points));
        });
}
