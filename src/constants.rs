pub const WINDOW_WIDTH: i32 = 960;            // Default window width
pub const WINDOW_HEIGHT: i32 = 540;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_MS: u64 = 1000;          // Slide animation duration (milliseconds)
pub const DEMO_SLIDES: usize = 3;             // Generated slides when no directory is given

pub const VIEWPORT_MARGIN: f32 = 0.08;        // Horizontal margin around the slides (fraction of width)
pub const DOT_AREA_HEIGHT: f32 = 48.0;        // Space reserved below the slides for the dots (pixels)
pub const DOT_RADIUS: f32 = 7.0;              // Radius of an indicator dot (pixels)
pub const DOT_SPACING: f32 = 26.0;            // Distance between dot centers (pixels)
pub const BUTTON_RADIUS: f32 = 24.0;          // Radius of the arrow buttons (pixels)

pub const CAPTION_FONT_SIZE: i32 = 24;
