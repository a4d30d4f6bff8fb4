//! `MindEase` - TUI mental wellness companion.
//!
//! Entry point for the application.

use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use mindease::app::App;
use mindease::cli::Args;
use mindease::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    // Run the application
    let result = run_app(&mut terminal, &args);

    // Restore the terminal
    ratatui::restore();

    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, args: &Args) -> std::io::Result<()> {
    // Enable terminal event modes (mouse capture, bracketed paste).
    // The guard ensures cleanup even if the application panics.
    //
    // IMPORTANT: This must be initialized inside run_app (after ratatui::init
    // sets up the terminal) because ratatui's terminal initialization can
    // reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    let mut app = App::new(&args.server).map_err(std::io::Error::other)?;

    // Main event loop
    loop {
        // Render the UI
        // IMPORTANT: Layout calculation must happen inside the draw closure
        // to ensure it uses the exact same area as rendering
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        // Poll for events with a short timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                // Bracketed paste goes to whichever input has focus
                Event::Paste(text) => {
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        // Apply any remote-call outcomes that arrived since the last frame
        app.process_events();

        // Advance notification lifecycles and scroll following
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
