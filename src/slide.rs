use raylib::prelude::*;

use crate::constants::*;
use crate::controller::SlidePositioner;

/// Eases a slide's horizontal offset (percent of the viewport width) toward
/// the last offset it was placed at.
#[derive(Default)]
pub struct SlideMotion {
    offset: f32,
    target: Option<f32>,
    tween: Option<ease::Tween>,
    animation_timer: f32,
    duration: f32,
}

impl SlideMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first placement snaps; later ones animate from wherever the slide
    /// currently is. Placing the same target again keeps the running animation.
    pub fn move_to(&mut self, target: f32, duration: f32) {
        if self.target == Some(target) {
            return;
        }
        let first_placement = self.target.is_none();
        self.target = Some(target);

        if first_placement || duration <= 0.0 {
            self.offset = target;
            self.tween = None;
            return;
        }

        self.tween = Some(ease::Tween::new(ease::cubic_out, self.offset, target, duration));
        self.animation_timer = 0.0;
        self.duration = duration;
    }

    pub fn update(&mut self, dt: f32) {
        let (Some(tween), Some(target)) = (self.tween.as_mut(), self.target) else {
            return;
        };

        self.animation_timer += dt;
        if self.animation_timer >= self.duration {
            self.offset = target;
            self.tween = None;
        } else {
            self.offset = tween.apply(dt);
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

pub struct Slide {
    image: Texture2D,
    caption: Option<String>,
    motion: SlideMotion,
}

impl Slide {
    pub fn new(image: Texture2D, caption: Option<String>) -> Self {
        Self {
            image,
            caption,
            motion: SlideMotion::new(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.motion.update(dt);
    }

    /// Draws the slide fitted into `viewport`, shifted by its current offset.
    /// Callers clip to the viewport.
    pub fn draw(&self, d: &mut impl RaylibDraw, viewport: Rectangle) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return;
        }

        let scale = (viewport.width / tex_width).min(viewport.height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let center_x = viewport.x + viewport.width * (0.5 + self.motion.offset() / 100.0);
        let center_y = viewport.y + viewport.height * 0.5;

        // Entirely outside the viewport
        if center_x + scaled_width * 0.5 < viewport.x
            || center_x - scaled_width * 0.5 > viewport.x + viewport.width
        {
            return;
        }

        let dest = Rectangle::new(
            center_x - scaled_width * 0.5,
            center_y - scaled_height * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        if let Some(caption) = &self.caption {
            let text_width = measure_text(caption, CAPTION_FONT_SIZE);
            let x = (dest.x + 12.0) as i32;
            let y = (dest.y + dest.height) as i32 - CAPTION_FONT_SIZE - 16;
            d.draw_rectangle(x - 6, y - 4, text_width + 12, CAPTION_FONT_SIZE + 8, Color::new(0, 0, 0, 160));
            d.draw_text(caption, x, y, CAPTION_FONT_SIZE, Color::WHITE);
        }
    }
}

/// Positions slides by animating them to their new offset.
pub struct TweenPositioner {
    duration: f32, // seconds
}

impl TweenPositioner {
    pub fn new(duration: f32) -> Self {
        Self { duration }
    }
}

impl SlidePositioner<Slide> for TweenPositioner {
    fn place(&mut self, slide: &mut Slide, offset_percent: i32) {
        slide.motion.move_to(offset_percent as f32, self.duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_placement_snaps() {
        let mut motion = SlideMotion::new();
        motion.move_to(200.0, 1.0);
        assert_eq!(motion.offset(), 200.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn test_move_animates_then_settles() {
        let mut motion = SlideMotion::new();
        motion.move_to(0.0, 1.0);
        motion.move_to(-100.0, 1.0);
        assert!(motion.is_animating());

        motion.update(0.25);
        assert!(motion.offset() < 0.0 && motion.offset() > -100.0);

        motion.update(0.5);
        motion.update(0.5);
        assert_eq!(motion.offset(), -100.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut motion = SlideMotion::new();
        motion.move_to(100.0, 1.0);
        motion.move_to(0.0, 1.0);
        motion.update(0.5);
        let halfway = motion.offset();

        motion.move_to(0.0, 1.0);
        assert_eq!(motion.offset(), halfway);
        motion.update(0.5);
        assert_eq!(motion.offset(), 0.0);
    }

    #[test]
    fn test_retarget_starts_from_current_offset() {
        let mut motion = SlideMotion::new();
        motion.move_to(0.0, 1.0);
        motion.move_to(100.0, 1.0);
        motion.update(0.5);
        let halfway = motion.offset();

        motion.move_to(0.0, 1.0);
        assert_eq!(motion.offset(), halfway);
        assert_eq!(motion.target(), Some(0.0));
        motion.update(1.0);
        assert_eq!(motion.offset(), 0.0);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut motion = SlideMotion::new();
        motion.move_to(0.0, 0.0);
        motion.move_to(300.0, 0.0);
        assert_eq!(motion.offset(), 300.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn test_default_motion_is_unplaced() {
        let motion = SlideMotion::default();
        assert_eq!(motion.offset(), 0.0);
        assert_eq!(motion.target(), None);
        assert!(!motion.is_animating());
    }

    #[test]
    fn test_update_without_animation_is_noop() {
        let mut motion = SlideMotion::new();
        motion.update(1.0);
        assert_eq!(motion.offset(), 0.0);
        assert_eq!(motion.target(), None);
    }
}
