/// A request to move the slider, produced by the input adapter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Next,          // Advance, wrapping from the last slide to the first
    Previous,      // Retreat, wrapping from the first slide to the last
    JumpTo(usize), // Go straight to a slide, from its indicator dot
}
