use eframe::egui;

use workforce_dash::app::WorkforceDashApp;
use workforce_dash::data::fetch::{FileFetcher, HttpFetcher, SourceCache};
use workforce_dash::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // An optional first argument points at a local directory holding the
    // four CSVs (see the `generate_sample` binary), replacing the HTTP
    // source for offline use.
    let state = match std::env::args().nth(1) {
        Some(dir) => AppState::load(&mut SourceCache::new(FileFetcher::new(dir))),
        None => match HttpFetcher::new() {
            Ok(fetcher) => AppState::load(&mut SourceCache::new(fetcher)),
            Err(err) => {
                log::error!("HTTP client setup failed: {err:#}");
                AppState::failed(err)
            }
        },
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cooks in the U.S. Workforce",
        options,
        Box::new(|_cc| Ok(Box::new(WorkforceDashApp::new(state)))),
    )
}
