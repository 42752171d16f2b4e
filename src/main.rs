//! Hotel Explorer - Main entry point
//!
//! Launches the TUI dashboard, or runs one of the headless commands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use hotel_explorer::cli::{Cli, Commands};
use hotel_explorer::error::ExplorerError;
use hotel_explorer::{
    chart, App, AuthClient, Catalog, CityCode, ComparisonSet, ExplorerConfig,
    HotelResultProvider, LocalSession, SessionController, ToggleOutcome,
};

/// Longest a headless search may take
const HEADLESS_TIMEOUT: Duration = Duration::from_secs(30);

/// Initialize the logger with appropriate settings
///
/// `RUST_LOG` overrides the default level.
fn init_logger(
    log_file: Option<&Path>,
    default_level: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // The TUI owns the terminal, so its logs always go to a file
    match (&cli.command, &cli.log_file) {
        (None, Some(path)) => init_logger(Some(path.as_path()), "info")?,
        (None, None) => {
            let path = std::env::temp_dir().join("hotel-explorer.log");
            init_logger(Some(path.as_path()), "info")?;
        }
        (Some(_), path) => init_logger(path.as_deref(), "warn")?,
    }
    info!("Hotel Explorer starting up");

    let config = load_config(&cli)?;
    debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Some(Commands::Search { city }) => run_search(&config, &city)?,
        Some(Commands::Compare { city, hotel_ids }) => run_compare(&config, &city, &hotel_ids)?,
        Some(Commands::Validate { catalog }) => run_validate(&catalog),
        None => {
            info!("No command specified, launching TUI");
            run_tui(&config)?;
        }
    }

    Ok(())
}

/// Load the config file if given, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<ExplorerConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration file: {:?}", path);
            ExplorerConfig::load_from_file(path)?
        }
        None => ExplorerConfig::default(),
    };

    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Load the configured catalog, or the built-in one
fn load_catalog(config: &ExplorerConfig) -> anyhow::Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::demo()?,
    };
    catalog.validate()?;
    info!(
        "Catalog ready: {} cities, {} hotels",
        catalog.city_count(),
        catalog.hotel_count()
    );
    Ok(catalog)
}

/// Parse a city code, exiting with the validation message if it is malformed
fn parse_city_or_exit(raw: &str) -> CityCode {
    match CityCode::parse(raw) {
        Ok(city) => city,
        Err(e) => {
            eprintln!("✗ {}", e.user_message());
            std::process::exit(1);
        }
    }
}

/// Run a search to completion without the TUI
fn headless_search(
    config: &ExplorerConfig,
    city: CityCode,
) -> Result<HotelResultProvider, Box<dyn std::error::Error>> {
    let catalog = load_catalog(config)?;
    let mut provider = HotelResultProvider::new(Arc::new(catalog));
    provider.perform_search(city);

    if !provider.wait(HEADLESS_TIMEOUT) {
        return Err(ExplorerError::provider("Timed out waiting for hotel results").into());
    }
    if let Some(e) = provider.last_error() {
        error!("Search failed: {}", e);
        eprintln!("✗ Search failed: {}", e);
        std::process::exit(1);
    }
    Ok(provider)
}

fn run_search(config: &ExplorerConfig, raw_city: &str) -> Result<(), Box<dyn std::error::Error>> {
    let city = parse_city_or_exit(raw_city);
    let provider = headless_search(config, city.clone())?;

    if provider.hotels().is_empty() {
        println!("No hotels found for {}", city);
        return Ok(());
    }

    println!("Hotels in {} ({}):", city, provider.hotels().len());
    for hotel in provider.hotels() {
        println!(
            "  {:<12} {:<36} {}",
            hotel.hotel_id,
            hotel.name,
            hotel.location(city.as_str())
        );
    }
    Ok(())
}

fn run_compare(
    config: &ExplorerConfig,
    raw_city: &str,
    hotel_ids: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let city = parse_city_or_exit(raw_city);
    let provider = headless_search(config, city.clone())?;

    let mut comparison = ComparisonSet::new();
    for id in hotel_ids {
        let Some(hotel) = provider.hotels().iter().find(|h| &h.hotel_id == id) else {
            warn!("Hotel {} not found in {}", id, city);
            eprintln!("⚠ No hotel with id {} in {}", id, city);
            continue;
        };
        if comparison.toggle(hotel) == ToggleOutcome::Ignored {
            debug!("Comparison full, skipping {}", id);
        }
    }

    if comparison.is_empty() {
        println!("Nothing to compare");
        return Ok(());
    }

    println!("{:<12} {:>6} {:>6}", "Hotel", "Price", "Rating");
    for record in chart::project_random(&comparison) {
        println!("{:<12} {:>6} {:>6}", record.name, record.price, record.rating);
    }
    Ok(())
}

fn run_validate(catalog: &Path) {
    info!("Validating catalog file: {:?}", catalog);
    match Catalog::load_from_file(catalog).and_then(|c| c.validate().map(|_| c)) {
        Ok(c) => {
            println!(
                "✓ Catalog is valid: {} cities, {} hotels",
                c.city_count(),
                c.hotel_count()
            );
        }
        Err(e) => {
            error!("Catalog validation failed: {:#}", e);
            eprintln!("✗ Catalog validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the TUI dashboard
fn run_tui(config: &ExplorerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = hotel_explorer::shutdown::init_signal_handlers()?;
    debug!("Signal handlers initialized");

    let catalog = load_catalog(config)?.with_delay(config.search_delay());
    let provider = HotelResultProvider::new(Arc::new(catalog));

    let mut session = LocalSession::new(&config.session_path, config.user.clone());
    if session.current_user().is_none() {
        session.sign_in()?;
    }
    let controller = SessionController::new(Box::new(session), config.login_route);

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| ExplorerError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        ExplorerError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| ExplorerError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(provider, controller).with_shutdown_flag(shutdown);
            app.run(&mut terminal)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
