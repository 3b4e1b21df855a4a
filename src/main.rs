//! Focus First - Entry Point
//!
//! Initializes the terminal, mounts the Today tab, and runs the main loop.

use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use focusfirst::config::load_config;
use focusfirst::tracker::Router;
use focusfirst::ui::App;

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    // Log to a file so output does not interfere with the TUI
    match OpenOptions::new().create(true).write(true).truncate(true).open("focusfirst.log") {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Focus First v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config();
    let frame_time = Duration::from_millis(config.tick_rate_ms.max(1));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let mut router = Router::new(config);

    let result = run_loop(&mut terminal, &mut app, &mut router, frame_time);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Focus First shut down cleanly");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    router: &mut Router,
    frame_time: Duration,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        if event::poll(Duration::from_millis(0))? {
            match event::read()? {
                // Only handle key press events, not releases
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match app.handle_input(key, router) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
                Event::Paste(text) => app.handle_paste(&text, router),
                _ => {}
            }
        }

        app.update(delta, router);

        terminal.draw(|frame| app.render(frame, router))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}
