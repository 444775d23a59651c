use raylib::prelude::*;

use crate::constants::*;
use crate::controller::IndicatorRenderer;
use crate::layout::Layout;

/// Row of indicator dots under the slides.
#[derive(Debug, Default)]
pub struct DotBar {
    active: Vec<bool>,
}

impl DotBar {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg(test)]
    pub fn is_active(&self, position: usize) -> bool {
        self.active.get(position).copied().unwrap_or(false)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, layout: &Layout) {
        for (center, active) in layout.dots.iter().zip(self.active.iter()) {
            if *active {
                d.draw_circle_v(*center, DOT_RADIUS, Color::RAYWHITE);
            } else {
                d.draw_circle_v(*center, DOT_RADIUS, Color::new(255, 255, 255, 60));
                d.draw_circle_lines(center.x as i32, center.y as i32, DOT_RADIUS, Color::LIGHTGRAY);
            }
        }
    }
}

impl IndicatorRenderer for DotBar {
    fn build(&mut self, count: usize) {
        self.active = vec![false; count];
    }

    fn set_active(&mut self, position: usize, active: bool) {
        if let Some(flag) = self.active.get_mut(position) {
            *flag = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_replaces_previous_dots() {
        let mut dots = DotBar::new();
        dots.build(3);
        dots.set_active(1, true);
        dots.build(2);
        assert_eq!(dots.len(), 2);
        assert!(!dots.is_active(0));
        assert!(!dots.is_active(1));
    }

    #[test]
    fn test_set_active_outside_row_is_ignored() {
        let mut dots = DotBar::new();
        dots.build(2);
        dots.set_active(5, true);
        assert_eq!(dots.len(), 2);
        assert!(!dots.is_active(5));
    }

    #[test]
    fn test_set_active_twice_is_idempotent() {
        let mut dots = DotBar::new();
        dots.build(3);
        dots.set_active(2, true);
        dots.set_active(2, true);
        assert!(dots.is_active(2));
        assert!(!dots.is_active(0));
    }
}
