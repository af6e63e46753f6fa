//! Coupon Hunt - Terminal Coupon Generator
//!
//! A terminal-based client for hunting retailer coupon codes. Pick a
//! retailer from the catalog or type one in, let the remote service
//! produce a code, and copy the result straight to the clipboard.

use std::io;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use infrastructure::CouponService;
use presentation::{render_ui, InputHandler};

/// How often the event loop wakes to advance the acknowledgment timer.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Entry point for the Coupon Hunt terminal application.
///
/// Sets up the terminal interface, initializes the application state and
/// the generation service client, and runs the main event loop until the
/// user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let service = CouponService::from_env();
    let res = run_app(&mut terminal, &mut app, &service);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering, keyboard input, and generation dispatch.
/// A generation request runs right after its pending state has been
/// drawn, so the spinner is on screen while the call blocks, and exactly
/// one outcome is applied before the loop continues. Continues running
/// until the user presses 'q' in normal mode.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
/// * `service` - Client for the remote generation endpoint
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: &CouponService,
) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q')
                            if matches!(app.mode, application::AppMode::Normal) =>
                        {
                            return Ok(())
                        }
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }

        if let Some(request) = app.outstanding_request() {
            terminal.draw(|f| render_ui(f, app))?;
            let outcome = service.generate(&request);
            app.set_generation_result(outcome);
        }
    }
}
