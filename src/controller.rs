use tracing::debug;

use crate::error::{Error, Result};
use crate::state::Navigation;

/// Places a slide horizontally, in percent of the viewport width.
pub trait SlidePositioner<S> {
    fn place(&mut self, slide: &mut S, offset_percent: i32);
}

/// Shows one marker per slide, exactly one of them active.
pub trait IndicatorRenderer {
    /// (Re)creates `count` inactive indicators.
    fn build(&mut self, count: usize);
    fn set_active(&mut self, position: usize, active: bool);
}

/// Horizontal offset of slide `index` while slide `current` is shown.
pub fn offset_percent(index: usize, current: usize) -> i32 {
    100 * (index as i32 - current as i32)
}

/// Owns the slide set and the index of the visible slide.
///
/// Navigation methods are the only mutators of the index. Each accepted
/// transition repositions every slide and refreshes every indicator, so
/// calling the side effects twice for the same index changes nothing.
pub struct SlideController<S, P, R> {
    slides: Vec<S>,
    current: usize,
    positioner: P,
    indicators: R,
}

impl<S, P, R> SlideController<S, P, R>
where
    P: SlidePositioner<S>,
    R: IndicatorRenderer,
{
    pub fn new(slides: Vec<S>, positioner: P, indicators: R) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptySlideSet);
        }
        Ok(Self {
            slides,
            current: 0,
            positioner,
            indicators,
        })
    }

    pub fn initialize(&mut self) {
        self.indicators.build(self.slides.len());
        self.current = 0;
        self.apply();
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        self.apply();
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
        self.apply();
    }

    /// Returns false, and leaves everything untouched, for an unknown slide.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            debug!("Ignoring jump to slide {} of {}", index, self.slides.len());
            return false;
        }
        self.current = index;
        self.apply();
        true
    }

    pub fn dispatch(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Next => self.next(),
            Navigation::Previous => self.previous(),
            Navigation::JumpTo(index) => {
                self.jump_to(index);
            }
        }
        debug!("{:?} -> slide {}/{}", navigation, self.current + 1, self.slides.len());
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects an empty slide set.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn indicators(&self) -> &R {
        &self.indicators
    }

    fn apply(&mut self) {
        let current = self.current;
        for (i, slide) in self.slides.iter_mut().enumerate() {
            self.positioner.place(slide, offset_percent(i, current));
        }
        for i in 0..self.slides.len() {
            self.indicators.set_active(i, i == current);
        }
    }
}
