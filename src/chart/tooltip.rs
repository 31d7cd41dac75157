use eframe::egui::{Pos2, Vec2};

use crate::data::model::VarianceRecord;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        record: VarianceRecord,
        /// Pointer position in canvas coordinates.
        pointer: Pos2,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipEvent {
    Enter { record: VarianceRecord, pointer: Pos2 },
    Leave,
}

impl TooltipEvent {
    /// The event for one frame of hover sampling: entering whatever cell is
    /// under the pointer, or leaving when nothing is and the tooltip shows.
    pub fn from_hover(
        state: &TooltipState,
        hovered: Option<VarianceRecord>,
        pointer: Option<Pos2>,
    ) -> Option<TooltipEvent> {
        match (hovered, pointer) {
            (Some(record), Some(pointer)) => Some(TooltipEvent::Enter { record, pointer }),
            _ if matches!(state, TooltipState::Visible { .. }) => Some(TooltipEvent::Leave),
            _ => None,
        }
    }
}

/// Enter always wins, even over an already visible tooltip.
pub fn transition(_state: TooltipState, event: TooltipEvent) -> TooltipState {
    match event {
        TooltipEvent::Enter { record, pointer } => TooltipState::Visible { record, pointer },
        TooltipEvent::Leave => TooltipState::Hidden,
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Inline position styles; exactly one of each pair is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl Placement {
    /// Anchor the tooltip next to `pointer`, flipping to the opposite edge
    /// on any axis where it would spill out of `container`.
    pub fn compute(pointer: Pos2, size: Vec2, offset: f32, container: Vec2) -> Self {
        let left = pointer.x + offset;
        let top = pointer.y + offset;
        let right = container.x - pointer.x + offset;
        let bottom = container.y - pointer.y + offset;
        let overflow_x = left + size.x > container.x;
        let overflow_y = top + size.y > container.y;
        Placement {
            left: (!overflow_x).then_some(left),
            top: (!overflow_y).then_some(top),
            right: overflow_x.then_some(right),
            bottom: overflow_y.then_some(bottom),
        }
    }

    /// Top-left corner of a tooltip of `size`, in container coordinates.
    pub fn min_corner(&self, size: Vec2, container: Vec2) -> Pos2 {
        let x = match (self.left, self.right) {
            (Some(left), _) => left,
            (None, Some(right)) => container.x - right - size.x,
            (None, None) => 0.0,
        };
        let y = match (self.top, self.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => container.y - bottom - size.y,
            (None, None) => 0.0,
        };
        Pos2::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub data_year: i32,
    pub lines: [String; 3],
}

impl TooltipContent {
    pub fn new(record: &VarianceRecord, base_temperature: f64) -> Self {
        let month = MONTH_ABBREVIATIONS[record.month_index().min(11)];
        TooltipContent {
            data_year: record.year,
            lines: [
                format!("{month} {}", record.year),
                format!("temp: {:.3}°C", base_temperature + record.variance),
                format!("var: {}°C", record.variance),
            ],
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn record(year: i32, month: u32, variance: f64) -> VarianceRecord {
        VarianceRecord {
            year,
            month,
            variance,
        }
    }

    const SIZE: Vec2 = Vec2 { x: 100.0, y: 50.0 };
    const CONTAINER: Vec2 = Vec2 { x: 1200.0, y: 776.0 };

    #[test]
    fn test_enter_shows_and_leave_hides() {
        let rec = record(1900, 1, -0.8);
        let state = transition(
            TooltipState::Hidden,
            TooltipEvent::Enter { record: rec, pointer: pos2(10.0, 10.0) },
        );
        assert_eq!(state, TooltipState::Visible { record: rec, pointer: pos2(10.0, 10.0) });
        assert_eq!(transition(state, TooltipEvent::Leave), TooltipState::Hidden);
    }

    #[test]
    fn test_enter_replaces_visible_record() {
        let first = record(1900, 1, -0.8);
        let second = record(1901, 2, 0.3);
        let state = TooltipState::Visible { record: first, pointer: pos2(1.0, 1.0) };
        let next = transition(state, TooltipEvent::Enter { record: second, pointer: pos2(2.0, 2.0) });
        assert_eq!(next, TooltipState::Visible { record: second, pointer: pos2(2.0, 2.0) });
    }

    #[test]
    fn test_hover_sampling() {
        let rec = record(1900, 1, -0.8);
        let hidden = TooltipState::Hidden;
        assert_eq!(TooltipEvent::from_hover(&hidden, None, Some(pos2(1.0, 1.0))), None);
        assert_eq!(
            TooltipEvent::from_hover(&hidden, Some(rec), Some(pos2(1.0, 1.0))),
            Some(TooltipEvent::Enter { record: rec, pointer: pos2(1.0, 1.0) })
        );
        let visible = TooltipState::Visible { record: rec, pointer: pos2(1.0, 1.0) };
        assert_eq!(TooltipEvent::from_hover(&visible, None, None), Some(TooltipEvent::Leave));
    }

    #[test]
    fn test_placement_without_overflow() {
        let p = Placement::compute(pos2(100.0, 100.0), SIZE, 20.0, CONTAINER);
        assert_eq!(p.left, Some(120.0));
        assert_eq!(p.top, Some(120.0));
        assert_eq!(p.right, None);
        assert_eq!(p.bottom, None);
        assert_eq!(p.min_corner(SIZE, CONTAINER), pos2(120.0, 120.0));
    }

    #[test]
    fn test_placement_flips_on_right_edge() {
        let p = Placement::compute(pos2(1150.0, 100.0), SIZE, 20.0, CONTAINER);
        assert_eq!(p.left, None);
        assert_eq!(p.right, Some(70.0));
        assert_eq!(p.top, Some(120.0));
        assert_eq!(p.bottom, None);
        // Right edge sits `offset` left of the pointer.
        assert_eq!(p.min_corner(SIZE, CONTAINER), pos2(1030.0, 120.0));
    }

    #[test]
    fn test_placement_flips_on_bottom_edge() {
        let p = Placement::compute(pos2(100.0, 750.0), SIZE, 20.0, CONTAINER);
        assert_eq!(p.top, None);
        assert_eq!(p.bottom, Some(46.0));
        assert_eq!(p.left, Some(120.0));
        assert_eq!(p.right, None);
    }

    #[test]
    fn test_placement_pairs_are_exclusive() {
        for x in (0..1200).step_by(37) {
            for y in (0..776).step_by(29) {
                let p = Placement::compute(pos2(x as f32, y as f32), SIZE, 20.0, CONTAINER);
                assert!(p.left.is_some() ^ p.right.is_some());
                assert!(p.top.is_some() ^ p.bottom.is_some());
            }
        }
    }

    #[test]
    fn test_content_formatting() {
        let content = TooltipContent::new(&record(1900, 1, -0.8), 8.66);
        assert_eq!(content.data_year, 1900);
        assert_eq!(content.lines[0], "JAN 1900");
        assert_eq!(content.lines[1], "temp: 7.860°C");
        assert_eq!(content.lines[2], "var: -0.8°C");
        assert_eq!(content.text(), "JAN 1900\ntemp: 7.860°C\nvar: -0.8°C");
    }

    #[test]
    fn test_content_three_decimals() {
        let content = TooltipContent::new(&record(2015, 12, 1.0), 8.66);
        assert_eq!(content.lines[0], "DEC 2015");
        assert_eq!(content.lines[1], "temp: 9.660°C");
        assert_eq!(content.lines[2], "var: 1°C");
    }
}
