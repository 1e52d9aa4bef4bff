//! Entry point for the portfolio site.
//!
//! Renders the single-page portfolio as a Dioxus desktop application. All
//! page content is compiled in; the only runtime configuration is the color
//! theme and the contact-form timing knobs.

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_app::components::{App, SenderHandle};
use folio_app::theme::{CURRENT_THEME, Theme};
use folio_core::contact::ContactTiming;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the parsed configuration.
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Personal portfolio single-page site")]
struct Args {
    /// Color theme (midnight or light)
    #[arg(long, default_value = "midnight")]
    theme: String,

    /// Simulated send duration for the contact form, in milliseconds
    #[arg(long, default_value = "1500")]
    submit_delay_ms: u64,

    /// How long the success banner stays visible, in milliseconds
    #[arg(long, default_value = "5000")]
    banner_ms: u64,
}

/// Runtime configuration derived from the CLI.
#[derive(Debug, Clone, Copy, Default)]
struct AppConfig {
    theme: Theme,
    timing: ContactTiming,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = AppConfig {
        theme: Theme::from_name(&args.theme),
        timing: ContactTiming {
            submit_delay: Duration::from_millis(args.submit_delay_ms),
            banner_duration: Duration::from_millis(args.banner_ms),
        },
    };
    APP_CONFIG.set(config).ok();

    tracing::info!("Starting folio");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Ashray Chowdhry - Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 900)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Poppins:wght@500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component: installs configuration into context, then renders the page.
#[component]
fn RootApp() -> Element {
    let config = APP_CONFIG.get().copied().unwrap_or_default();

    use_context_provider(|| config.timing);
    use_context_provider(|| SenderHandle::simulated(config.timing));
    use_hook(|| *CURRENT_THEME.write() = config.theme);

    rsx! {
        App {}
    }
}
