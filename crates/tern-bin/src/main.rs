//! tern entrypoint: terminal host around the editing engine.
use anyhow::Result;
use clap::Parser;
use core_actions::{Editor, FsStorage};
use core_config::{Config, Palette, load_from};
use core_events::KeyEvent;
use core_render::{FrameTimings, cull};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalCapabilities, TerminalGuard};
use core_text::Document;
use crossterm::event::{Event as CEvent, read};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod input;
mod paint;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tern", version, about = "tern modal text editor")]
struct Args {
    /// Optional path to open at startup. A missing file starts an empty buffer
    /// that is created on the first save.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `tern.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("tern.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "tern.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn load_editor(args: &Args, config: &Config) -> Editor {
        let effective = config.effective();
        let mut editor = Editor::with_history_limit(Document::new(), effective.history_limit);
        if let Some(path) = args.path.as_ref() {
            if let Err(e) = editor.open(path.clone(), &FsStorage) {
                error!(target: "io", path = %path.display(), error = %e, "file_open_error");
                editor.set_notification(e.to_string());
            }
        }
        editor
    }
}

struct EditorRuntime {
    editor: Editor,
    palette: Palette,
    tab_width: u16,
    capabilities: TerminalCapabilities,
    timings: FrameTimings,
}

impl EditorRuntime {
    fn run(&mut self, terminal: &TerminalGuard<'_>) -> Result<()> {
        let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter_loop = loop_span.enter();

        loop {
            let (cols, rows) = terminal.size()?;
            self.redraw(cols, rows)?;
            match read()? {
                CEvent::Key(event) => {
                    let Some(key) = input::map_key_event(&event) else {
                        continue;
                    };
                    if self.handle_key(key, cols, rows) {
                        info!(target: "runtime.shutdown", reason = "quit_key", "shutdown");
                        return Ok(());
                    }
                }
                CEvent::Resize(cols, rows) => {
                    debug!(target: "runtime", cols, rows, "resize");
                }
                _ => {}
            }
        }
    }

    /// Process one key plus any side effects it requested. Returns true on quit.
    fn handle_key(&mut self, key: KeyEvent, cols: u16, rows: u16) -> bool {
        let start = Instant::now();
        let mut quit = self.editor.process(key, cols, rows);
        if let Some(release) = input::synthesized_release(
            self.capabilities.reports_key_release,
            &key,
            self.editor.mode(),
        ) {
            quit |= self.editor.process(release, cols, rows);
        }
        if let Some(request) = self.editor.take_io_request() {
            self.editor.perform_io(request, &FsStorage);
        }
        self.timings.process = start.elapsed();
        quit
    }

    fn redraw(&mut self, cols: u16, rows: u16) -> Result<()> {
        let status = self.editor.status_line(self.timings);

        let cull_start = Instant::now();
        let glyphs = cull(&self.editor.cull_request(&status, cols, rows, self.tab_width));
        self.timings.cull = cull_start.elapsed();

        let redraw_start = Instant::now();
        paint::paint(&mut stdout().lock(), &glyphs, &self.palette)?;
        self.timings.redraw = redraw_start.elapsed();
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let config = load_from(args.config.clone())?;
    let editor = AppStartup::load_editor(&args, &config);
    info!(
        target: "runtime.startup",
        path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
        config_override = args.config.is_some(),
        size_bytes = editor.text().len(),
        "bootstrap_complete"
    );

    startup.backend.set_title("tern")?;
    let guard = startup.backend.enter_guard()?;
    let mut runtime = EditorRuntime {
        editor,
        palette: config.palette(),
        tab_width: config.effective().tab_width,
        capabilities: guard.capabilities(),
        timings: FrameTimings::default(),
    };
    info!(
        target: "runtime.startup",
        reports_key_release = runtime.capabilities.reports_key_release,
        "terminal_ready"
    );
    let result = runtime.run(&guard);
    drop(guard);
    if let Err(e) = &result {
        error!(target: "runtime", error = %e, "event_loop_failed");
    }
    result
}
