use raylib::prelude::*;

use crate::constants::*;
use crate::state::Navigation;

const DOT_HIT_SLOP: f32 = 4.0; // Extra click tolerance around a dot (pixels)
const VIEWPORT_TOP: f32 = 16.0;

/// Screen geometry of the slider for one window size.
///
/// Recomputed whenever the window is resized; the dot row always has one
/// entry per slide, in slide order.
#[derive(Debug, Clone)]
pub struct Layout {
    pub viewport: Rectangle,
    pub previous_button: Vector2,
    pub next_button: Vector2,
    pub dots: Vec<Vector2>,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, slide_count: usize) -> Layout {
        let margin = screen_width * VIEWPORT_MARGIN;
        let viewport = Rectangle::new(
            margin,
            VIEWPORT_TOP,
            (screen_width - 2.0 * margin).max(1.0),
            (screen_height - VIEWPORT_TOP - DOT_AREA_HEIGHT).max(1.0),
        );

        let center_y = viewport.y + viewport.height * 0.5;
        let previous_button = Vector2::new(viewport.x, center_y);
        let next_button = Vector2::new(viewport.x + viewport.width, center_y);

        // Dot row centered under the viewport
        let dots_y = viewport.y + viewport.height + DOT_AREA_HEIGHT * 0.5;
        let center_x = viewport.x + viewport.width * 0.5;
        let first_x = center_x - (slide_count.saturating_sub(1) as f32) * DOT_SPACING * 0.5;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + i as f32 * DOT_SPACING, dots_y))
            .collect();

        Layout {
            viewport,
            previous_button,
            next_button,
            dots,
        }
    }

    /// Maps a click to the control under it. Clicks elsewhere are ignored.
    pub fn hit_test(&self, point: Vector2) -> Option<Navigation> {
        if within(point, self.previous_button, BUTTON_RADIUS) {
            return Some(Navigation::Previous);
        }
        if within(point, self.next_button, BUTTON_RADIUS) {
            return Some(Navigation::Next);
        }
        self.dots
            .iter()
            .position(|dot| within(point, *dot, DOT_RADIUS + DOT_HIT_SLOP))
            .map(Navigation::JumpTo)
    }
}

fn within(point: Vector2, center: Vector2, radius: f32) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}
