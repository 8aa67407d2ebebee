use std::io::stdout;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use suggest_domain::app::{App, run_session};
use suggest_domain::cli::Cli;
use suggest_domain::config::{load_config, load_config_or_default};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();
    let loaded = match &cli.config {
        Some(path) => load_config_or_default(path),
        None => load_config(),
    };
    let options = cli.options_input(&loaded.config)?;

    let mut app = App::new(options, &cli.data, &cli.value);
    app.warning = loaded.warning;

    if cli.list_domains {
        if let Some(warning) = &app.warning {
            eprintln!("warning: {}", warning);
        }
        for domain in app.domains() {
            println!("{}", domain);
        }
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Restore terminal (automatic cleanup), even when the loop failed
    run_session(
        || execute!(stdout(), EnableMouseCapture),
        || run(terminal, &mut app),
        || execute!(stdout(), DisableMouseCapture),
        ratatui::restore,
    )?;

    if let Some(value) = app.submitted_value() {
        println!("{}", value);
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file so the terminal UI stays clean
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("suggest-domain.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::new().filter_or("SUGGEST_DOMAIN_LOG", "debug"),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    })
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init();
}
