use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use skyflap::build_info;
use skyflap::clock::{Clock, FrameLimiter, SystemClock};
use skyflap::config::{AppConfig, Cli};
use skyflap::game::{run_frame, FrameOutcome, GameState};
use skyflap::input::drain_events;
use skyflap::logging;
use skyflap::ui::{render_game, Theme};
use std::io;

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse());
    logging::init(&config)?;
    log::info!(
        "skyflap {} starting (seed {:?})",
        build_info::BUILD_VERSION,
        config.seed
    );

    // Fatal only when both the user theme and the built-in fail
    let theme = Theme::resolve(config.theme_path.as_deref()).context("loading theme")?;
    log::info!("theme '{}'", theme.name);

    let mut rng = config.rng();
    let clock = SystemClock::new();
    let mut state = GameState::new(clock.now_ms(), &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut state, &theme, &clock, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    log::info!(
        "exiting after {} runs, best score {}",
        state.runs_started,
        state.high_score
    );
    println!("Best score this session: {}", state.high_score);

    Ok(())
}

/// Poll, step, draw, at the target frame rate until the player quits.
fn run_game_loop<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    state: &mut GameState,
    theme: &Theme,
    clock: &impl Clock,
    rng: &mut R,
) -> Result<()> {
    let mut limiter = FrameLimiter::target();
    loop {
        limiter.wait();
        let inputs = drain_events().context("reading terminal events")?;
        let now = clock.now_ms();
        let outcome = run_frame(state, &inputs, now, rng);
        terminal.draw(|frame| render_game(frame, state, theme, now))?;

        if outcome == FrameOutcome::Quit {
            return Ok(());
        }
    }
}
