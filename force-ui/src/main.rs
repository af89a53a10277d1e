use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use force_core::{Route, ServiceRegistry};
use tracing::{error, info};

use force_ui::components::WindowPreferences;
use force_ui::config::{AppConfig, Overrides};
use force_ui::services::Services;
use force_ui::{logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Force Analytics desktop client.
///
/// Shows the marketing pages, account sign-up and the onboarding wizard
/// against the configured account service backend.
#[derive(Debug, Parser)]
#[command(name = "ForceAnalytics", version)]
struct Cli {
    /// TOML configuration file. A missing file means defaults.
    #[arg(long, default_value = "force-analytics.toml")]
    config: PathBuf,

    /// Log level or `EnvFilter` directive, e.g. `debug` or `force_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Account service backend.
    #[arg(long)]
    backend: Option<String>,

    /// Simulated service delay in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Make every sign-up fail, to exercise the error path.
    #[arg(long)]
    fail_signups: bool,

    /// Page to open first, by path (e.g. `/signup`).
    #[arg(long, default_value = "/", value_parser = parse_route)]
    start: Route,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            log_level: self.log_level.clone(),
            backend: self.backend.clone(),
            latency_ms: self.latency_ms,
            fail_signups: self.fail_signups,
        }
    }
}

fn parse_route(path: &str) -> Result<Route, String> {
    Route::from_path(path).ok_or_else(|| {
        let known: Vec<&str> = Route::ALL.iter().map(Route::path).collect();
        format!("unknown page '{path}', expected one of: {}", known.join(", "))
    })
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    config.apply_overrides(&cli.overrides());
    logging::init_logging(&config.logging)?;

    // Service futures run here; gpui owns the main thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("force-services")
        .build()
        .context("failed to start service runtime")?;

    let registry = ServiceRegistry::with_builtin_backends();
    let account = runtime
        .block_on(registry.create(&config.services))
        .context("failed to create account service")?;
    info!(
        backend = %config.services.backend,
        latency_ms = config.services.latency_ms,
        "account service ready"
    );

    let services = Services::new(runtime.handle().clone(), Arc::from(account));
    let prefs = WindowPreferences::from(&config.window);
    let start = cli.start;

    gpui::Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(cx);
            cx.set_global(services);

            if let Err(e) = open_main_window(prefs, start, cx) {
                error!(error = ?e, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
