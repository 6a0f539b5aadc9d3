use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

use onboarding::args::Args;
use onboarding::engine::OnboardingEngine;
use onboarding::geometry::Rect;
use onboarding::logging::init_tracing;

fn screen_bounds(rl: &RaylibHandle) -> Rect {
    Rect::new(0.0, 0.0, rl.get_screen_width() as f32, rl.get_screen_height() as f32)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    // --- Load Deck ---
    let deck = args
        .load_deck()
        .with_context(|| format!("failed to load onboarding content from {}", args.source.display()))?;
    info!(source = %args.source.display(), items = deck.len(), "starting onboarding");

    let background = deck.window.background;
    let background = Color::new(background.r, background.g, background.b, background.a);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&deck.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = OnboardingEngine::new(deck, screen_bounds(&rl), !args.instant, args.autoplay);
    engine.initialize(&mut rl, &thread);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            engine.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            engine.previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
            engine.first();
        }
        if rl.is_window_resized() {
            engine.set_bounds(screen_bounds(&rl));
        }

        engine.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(background);
        engine.draw(&mut d);
    }

    Ok(())
}
