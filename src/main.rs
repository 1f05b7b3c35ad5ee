use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use urlq::app::{App, OutputMode};
use urlq::config::load_config;
use urlq::logging;
use urlq::metadata::{Manifest, ManifestSource, spawn_worker};

#[derive(Parser, Debug)]
#[command(name = "urlq")]
#[command(about = "Compose a request URL interactively and print it to stdout")]
#[command(version)]
struct Args {
    /// Path to a JSON manifest describing the API's paths and parameters
    manifest: PathBuf,

    /// Seed the input field with this URL instead of the manifest's base_url
    #[arg(short, long)]
    url: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    // A bad manifest should fail before the terminal is touched
    let manifest = Manifest::load(&args.manifest)?;
    let config = load_config();

    let seed_url = args
        .url
        .or_else(|| manifest.base_url.clone())
        .unwrap_or_default();

    let mut app = App::new(&seed_url, &config);

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(
        Box::new(ManifestSource::new(manifest)),
        request_rx,
        response_tx,
    );
    app.metadata.set_channels(request_tx, response_rx);

    // The UI draws on stderr so that stdout carries nothing but the
    // composed URL: `curl "$(urlq api.json)"` stays clean.
    enable_raw_mode()?;
    let mut stderr = std::io::stderr();
    execute!(
        stderr,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr))?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal before surfacing any run error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    result?;

    match app.output_mode() {
        Some(OutputMode::Url) => println!("{}", app.url()),
        Some(OutputMode::Query) => println!("{}", app.path_and_query()),
        None => {}
    }

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stderr>>, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, with a timeout so worker responses are picked up
        // even when no key arrives
        if event::poll(Duration::from_millis(50))? {
            app.handle_event(event::read()?);
        }
        app.poll_metadata();

        if app.should_quit() {
            return Ok(());
        }
    }
}
