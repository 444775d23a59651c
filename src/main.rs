use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod constants;
mod controller;
mod dots;
mod error;
mod input;
mod layout;
mod slide;
mod state;
mod texture_loader;

use crate::constants::*;
use crate::controller::SlideController;
use crate::dots::DotBar;
use crate::layout::Layout;
use crate::slide::{Slide, TweenPositioner};
use crate::texture_loader::{SlideSource, load_slides};

#[derive(Parser)]
#[command(name = "slider")]
#[command(author, version, about = "Browse a set of images as a sliding carousel")]
struct Cli {
    /// Directory of images to show, sorted by file name
    directory: Option<PathBuf>,

    /// Number of generated slides when no directory is given
    #[arg(long, default_value_t = DEMO_SLIDES as u16, value_parser = clap::value_parser!(u16).range(1..))]
    demo: u16,

    /// Show the slides in random order
    #[arg(long)]
    shuffle: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Slide animation duration in milliseconds (0 disables animation)
    #[arg(long, default_value_t = TRANSITION_MS)]
    transition_ms: u64,
}

impl Cli {
    fn source(&self) -> SlideSource {
        match &self.directory {
            Some(dir) => SlideSource::Directory(dir.clone()),
            None => SlideSource::Demo(self.demo as usize),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let source = cli.source();
    info!("Slide source: {:?}", source);

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides = load_slides(&mut rl, &thread, &source)
        .with_context(|| format!("Failed to load slides from {:?}", source))?;
    if cli.shuffle {
        slides.shuffle(&mut rand::rng());
    }

    let positioner = TweenPositioner::new(cli.transition_ms as f32 / 1000.0);
    let mut slider = SlideController::new(slides, positioner, DotBar::new())?;
    slider.initialize();

    let mut screen = (rl.get_screen_width(), rl.get_screen_height());
    let mut layout = Layout::new(screen.0 as f32, screen.1 as f32, slider.len());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let size = (rl.get_screen_width(), rl.get_screen_height());
        if size != screen {
            screen = size;
            layout = Layout::new(screen.0 as f32, screen.1 as f32, slider.len());
        }

        for navigation in input::poll(&mut rl, &layout) {
            slider.dispatch(navigation);
        }

        for slide in slider.slides_mut() {
            slide.update(dt);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_slides(&mut d, slider.slides(), &layout);
        draw_button(&mut d, layout.previous_button, "<");
        draw_button(&mut d, layout.next_button, ">");
        slider.indicators().draw(&mut d, &layout);
    }

    info!("Closed on slide {}/{}", slider.current() + 1, slider.len());
    Ok(())
}

fn draw_slides(d: &mut RaylibDrawHandle, slides: &[Slide], layout: &Layout) {
    let viewport = layout.viewport;
    let mut clipped = d.begin_scissor_mode(
        viewport.x as i32,
        viewport.y as i32,
        viewport.width as i32,
        viewport.height as i32,
    );
    for slide in slides {
        slide.draw(&mut clipped, viewport);
    }
}

fn draw_button(d: &mut RaylibDrawHandle, center: Vector2, label: &str) {
    d.draw_circle_v(center, BUTTON_RADIUS, Color::new(255, 255, 255, 200));
    let font_size = (BUTTON_RADIUS * 1.2) as i32;
    let text_width = measure_text(label, font_size);
    d.draw_text(
        label,
        center.x as i32 - text_width / 2,
        center.y as i32 - font_size / 2,
        font_size,
        Color::DARKGRAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["slider"]).unwrap();
        assert_eq!(cli.width, WINDOW_WIDTH);
        assert_eq!(cli.height, WINDOW_HEIGHT);
        assert_eq!(cli.source(), SlideSource::Demo(DEMO_SLIDES));
    }

    #[test]
    fn test_directory_source() {
        let cli = Cli::try_parse_from(["slider", "photos"]).unwrap();
        assert_eq!(cli.source(), SlideSource::Directory(PathBuf::from("photos")));
    }

    #[test]
    fn test_window_size_must_be_positive() {
        for args in [
            ["slider", "--width", "0"],
            ["slider", "--width", "-5"],
            ["slider", "--height", "0"],
            ["slider", "--height", "-1"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{:?} accepted", args);
        }
        let cli = Cli::try_parse_from(["slider", "--width", "640", "--height", "1"]).unwrap();
        assert_eq!((cli.width, cli.height), (640, 1));
    }

    #[test]
    fn test_demo_needs_a_slide() {
        assert!(Cli::try_parse_from(["slider", "--demo", "0"]).is_err());
    }
}
