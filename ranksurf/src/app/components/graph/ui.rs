use egui::{Align2, Color32, FontId, Sense, Stroke, TextStyle, Vec2};
use ranks_db::{decade_year, NUM_DECADES};

use crate::app::config::Config;

use super::logic::{series_color, trend_label, ChartFrame, LABEL_PADDING};

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const RULE_COLOR: Color32 = Color32::GRAY;
const DECADE_LABEL_COLOR: Color32 = Color32::BLACK;

impl super::Graph {
    /// Redraw the whole chart from the current entry list. Geometry is
    /// derived from the allocated rect, so window resizes are handled
    /// implicitly.
    pub fn render(&mut self, config: &Config, ui: &mut egui::Ui) {
        let size = ui.available_size_before_wrap();
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);

        let font = TextStyle::Body.resolve(ui.style());
        let label_height = ui.text_style_height(&TextStyle::Body);
        let frame = ChartFrame::new(rect, label_height);

        if config.draw_grid {
            draw_background(&painter, &frame, &font);
        }
        self.draw_entries(config, &painter, &frame, &font);
    }

    /// One polyline plus a label per decade for every displayed entry,
    /// stroke color cycled through the palette by insertion order.
    fn draw_entries(
        &self,
        config: &Config,
        painter: &egui::Painter,
        frame: &ChartFrame,
        font: &FontId,
    ) {
        for (series, entry) in self.entries.iter().enumerate() {
            let color = series_color(series);
            let stroke = Stroke::new(1.5, color);

            for index in 0..NUM_DECADES - 1 {
                painter.line_segment(
                    [
                        frame.point(index, entry.rank(index)),
                        frame.point(index + 1, entry.rank(index + 1)),
                    ],
                    stroke,
                );
            }

            if !config.label_trends {
                continue;
            }
            for index in 0..NUM_DECADES {
                let rank = entry.rank(index);
                let point = frame.point(index, rank);
                painter.text(
                    point + Vec2::new(LABEL_PADDING, -LABEL_PADDING),
                    Align2::LEFT_BOTTOM,
                    trend_label(entry.name(), rank),
                    font.clone(),
                    color,
                );
            }
        }
    }
}

/// Decade grid: one vertical rule per column boundary, the ceiling and
/// baseline rules, and the year labels along the bottom.
fn draw_background(painter: &egui::Painter, frame: &ChartFrame, font: &FontId) {
    let rect = frame.rect();
    let stroke = Stroke::new(1.0, RULE_COLOR);

    for index in 0..=NUM_DECADES {
        let x = frame.decade_x(index);
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        );
    }
    painter.line_segment(
        [
            egui::pos2(rect.left(), frame.ceiling()),
            egui::pos2(rect.right(), frame.ceiling()),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.left(), frame.baseline()),
            egui::pos2(rect.right(), frame.baseline()),
        ],
        stroke,
    );

    for index in 0..NUM_DECADES {
        painter.text(
            egui::pos2(
                frame.decade_x(index) + LABEL_PADDING,
                rect.bottom() - LABEL_PADDING,
            ),
            Align2::LEFT_BOTTOM,
            decade_year(index),
            font.clone(),
            DECADE_LABEL_COLOR,
        );
    }
}
