use clap::Parser;
use crossbeam_channel::bounded;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::EmailReplyApp;

const DEFAULT_SERVER_URL: &str = "http://localhost:9090";

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the generation service.
    #[arg(long)]
    server_url: Option<String>,
}

fn resolve_server_url(args: &Args) -> String {
    if let Some(url) = &args.server_url {
        return url.clone();
    }
    if let Ok(url) = std::env::var("REPLY_SERVER_URL") {
        return url;
    }
    DEFAULT_SERVER_URL.to_string()
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let server_url = resolve_server_url(&args);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, server_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Email Reply Generator")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Email Reply Generator",
        options,
        Box::new(|_cc| Ok(Box::new(EmailReplyApp::new(cmd_tx, ui_rx)))),
    )
}
