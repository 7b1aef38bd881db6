use egui::{Color32, Pos2, Rect};
use ranks_db::{MAX_RANK, NUM_DECADES};

/// Offset between a data point and its label, and between the chart
/// rules and the canvas edge.
pub const LABEL_PADDING: f32 = 4.0;

// Stroke colors for trend lines: black, red, blue, magenta, green.
const PALETTE: [Color32; 5] = [
    Color32::BLACK,
    Color32::RED,
    Color32::BLUE,
    Color32::from_rgb(255, 0, 255),
    Color32::GREEN,
];

/// Fixed chart geometry for one frame, derived from the canvas rect.
///
/// The vertical span between the ceiling and the baseline rule maps
/// ranks linearly, rank 1 at the top. Rank 0 ("unranked") is pinned to
/// the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    rect: Rect,
    column_width: f32,
    ceiling: f32,
    baseline: f32,
}

impl ChartFrame {
    pub fn new(rect: Rect, label_height: f32) -> Self {
        let margin = LABEL_PADDING + label_height;
        Self {
            rect,
            column_width: rect.width() / NUM_DECADES as f32,
            ceiling: rect.top() + margin,
            baseline: rect.bottom() - margin,
        }
    }

    /// x pixel position of the rule starting decade column `index`.
    pub fn decade_x(&self, index: usize) -> f32 {
        self.rect.left() + index as f32 * self.column_width
    }

    /// y pixel position of `rank`. 0 (unranked) sits on the baseline.
    pub fn rank_y(&self, rank: u16) -> f32 {
        if rank == 0 {
            return self.baseline;
        }
        let span_per_rank = (self.baseline - self.ceiling) / f32::from(MAX_RANK);
        self.ceiling + f32::from(rank) * span_per_rank
    }

    /// Position of the data point for `rank` in decade `index`.
    pub fn point(&self, index: usize, rank: u16) -> Pos2 {
        Pos2::new(self.decade_x(index), self.rank_y(rank))
    }

    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Stroke color for the `index`-th displayed entry.
pub fn series_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Label drawn next to a data point: `"emma 42"`, or `"emma *"` for a
/// decade in which the name was unranked.
pub fn trend_label(name: &str, rank: u16) -> String {
    if rank == 0 {
        format!("{name} *")
    } else {
        format!("{name} {rank}")
    }
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use super::*;

    fn frame() -> ChartFrame {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1100.0, 620.0));
        ChartFrame::new(rect, 16.0)
    }

    #[test]
    fn columns_split_the_canvas_evenly() {
        let frame = frame();
        assert_eq!(frame.decade_x(0), 0.0);
        assert_eq!(frame.decade_x(1), 100.0);
        assert_eq!(frame.decade_x(NUM_DECADES), 1100.0);
    }

    #[test]
    fn margins_are_symmetric() {
        let frame = frame();
        assert_eq!(frame.ceiling(), 20.0);
        assert_eq!(frame.baseline(), 600.0);
    }

    #[test]
    fn unranked_and_worst_rank_sit_on_the_baseline() {
        let frame = frame();
        assert_eq!(frame.rank_y(0), frame.baseline());
        assert_eq!(frame.rank_y(MAX_RANK), frame.baseline());
    }

    #[test]
    fn better_ranks_plot_higher() {
        let frame = frame();
        assert!(frame.rank_y(1) < frame.rank_y(500));
        assert!(frame.rank_y(500) < frame.rank_y(999));
        // Rank 1 hugs the ceiling.
        assert!(frame.rank_y(1) - frame.ceiling() <= 1.0);
    }

    #[test]
    fn palette_cycles_in_insertion_order() {
        assert_eq!(series_color(0), Color32::BLACK);
        assert_eq!(series_color(1), Color32::RED);
        assert_eq!(series_color(5), Color32::BLACK);
        assert_eq!(series_color(7), series_color(2));
    }

    #[test]
    fn labels_mark_unranked_decades_with_an_asterisk() {
        assert_eq!(trend_label("emma", 42), "emma 42");
        assert_eq!(trend_label("emma", 0), "emma *");
    }
}
