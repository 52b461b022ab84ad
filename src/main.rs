use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

mod api;
mod app;
mod calendar;
mod config;
mod export;
mod models;
mod stats;
mod ui;

use api::RestClient;
use app::App;
use models::CustomerFields;

/// Terminal admin console for a personal-training REST service.
#[derive(Debug, Parser)]
#[command(name = "trainerdesk", version)]
struct Cli {
    /// API root, e.g. http://localhost:8080/api
    #[arg(long)]
    base_url: Option<String>,

    /// Export the customer list to CSV and exit. Writes
    /// customers_<date>.csv in the working directory unless a path is given.
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    export: Option<PathBuf>,

    /// Reset the demo database and exit. Destructive; requires --yes.
    #[arg(long)]
    reset_db: bool,

    /// Confirm the reset without prompting.
    #[arg(long)]
    yes: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let base_url = config::resolve_base_url(cli.base_url.as_deref());
    let client = RestClient::new(base_url);

    if let Some(target) = cli.export {
        return export_and_exit(&client, target);
    }
    if cli.reset_db {
        return reset_and_exit(&client, cli.yes);
    }

    run_tui(client)
}

fn export_and_exit(client: &RestClient, target: PathBuf) -> Result<(), Box<dyn Error>> {
    let customers = client
        .list_customers()
        .map_err(|err| err.message())?;
    let fields: Vec<CustomerFields> = customers
        .into_iter()
        .map(|customer| customer.data)
        .collect();
    let target = if target.as_os_str().is_empty() {
        None
    } else {
        Some(target)
    };
    let path = export::write_csv_export(&fields, target.as_deref())?;
    println!("Exported {} customers to {}", fields.len(), path.display());
    Ok(())
}

fn reset_and_exit(client: &RestClient, confirmed: bool) -> Result<(), Box<dyn Error>> {
    if !confirmed {
        eprintln!(
            "Refusing to reset {} without --yes (this replaces all data).",
            client.base_url()
        );
        std::process::exit(1);
    }
    client.reset_database().map_err(|err| err.message())?;
    println!("{}", api::RESET_CONFIRMATION);
    Ok(())
}

fn run_tui(client: RestClient) -> Result<(), Box<dyn Error>> {
    let mut stdout = std::io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(client);

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if app.needs_refresh {
            app.refresh_data();
        }

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(120))? {
            let event = event::read()?;
            if let Event::Key(key) = event {
                app.handle_key_event(key);
            }
        }
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    std::io::stdout().flush()?;

    Ok(())
}
