mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use swatchbook::app::App;
use swatchbook::catalog::{self, FileCatalog};
use swatchbook::clipboard::SystemClipboard;
use swatchbook::config::{self, AppConfig};
use swatchbook::events::{self, AppEvent};
use swatchbook::favorites::FileStore;
use swatchbook::listing;
use swatchbook::palette::CopyFormat;
use swatchbook::state::PaletteState;
use swatchbook::toast::ToastQueue;

#[derive(Parser, Debug)]
#[command(name = "swatchbook", version, about = "Browse color palettes and copy their values")]
struct Cli {
    /// Palette catalog JSON file (default: ./palettes.json).
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Key-value store file holding the favorites.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial copy format: hex, rgb, rgb_plain or hsl.
    #[arg(short, long)]
    format: Option<String>,

    /// Start with this tag filter selected.
    #[arg(short, long)]
    tag: Option<String>,

    /// Start in favorites-only view.
    #[arg(long)]
    favorites_only: bool,

    /// Print the visible palettes to stdout instead of launching the TUI.
    #[arg(long)]
    list: bool,

    /// Write TUI logs here instead of the platform data dir.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(config::default_config_path);
    let (config, config_error) = match config_path.as_deref().map(AppConfig::from_file) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (AppConfig::default(), Some(e)),
        None => (AppConfig::default(), None),
    };

    let log_file = cli.log_file.clone().or_else(|| config.log_file.clone());
    let _guard = init_logging(cli.list, log_file.as_deref())?;
    tracing::info!("starting swatchbook v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring config file, using defaults");
    }

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .unwrap_or_else(|| PathBuf::from(catalog::DEFAULT_CATALOG_PATH));
    let store_path = cli
        .store
        .clone()
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(config::default_store_path);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start async runtime")?;
    let palettes = runtime.block_on(catalog::load(&FileCatalog::new(&catalog_path)));

    let mut state = PaletteState::new(palettes, Box::new(FileStore::new(&store_path)));
    state.toasts = ToastQueue::new(config.toast_duration());
    state.set_copy_format(match cli.format.as_deref() {
        Some(name) => CopyFormat::from_str_or_default(name),
        None => config.default_copy_format,
    });
    state.set_show_favorites_only(cli.favorites_only);
    state.select_tag(cli.tag.clone());

    if cli.list {
        print!("{}", listing::render(&state));
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state, Box::new(SystemClipboard::new()));
    let result = run_tui(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_tui(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    events::spawn_input_reader(tx.clone());
    events::spawn_tick_timer(tx, Duration::from_millis(250));

    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            Ok(AppEvent::Resize(width, height)) => app.resize(Rect::new(0, 0, width, height)),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// TUI mode logs to a file so output doesn't tear the screen; list mode logs to stderr.
fn init_logging(list_mode: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = if list_mode { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if list_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    }

    let path = match log_file
        .map(Path::to_path_buf)
        .or_else(|| config::log_dir().map(|d| d.join("swatchbook.log")))
    {
        Some(path) => path,
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
            return Ok(None);
        }
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("Failed to create log directory: {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "swatchbook.log".into());

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
