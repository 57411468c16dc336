use anyhow::Context as _;
use gpui::*;
use heartrate::app::RatingCard;
use heartrate::constants::WINDOW_SIZE;
use heartrate::settings::Settings;
use heartrate::sink::{DecisionSink, HttpDecisionSink, RecordingSink};
use heartrate::types::RatingSubject;
use std::sync::Arc;
use std::sync::mpsc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("heartrate=info")),
        )
        .init();

    let settings = Settings::load();
    let thresholds = settings
        .thresholds
        .validated()
        .context("invalid gesture thresholds")?;

    let (next_tx, next_rx) = mpsc::channel::<RatingSubject>();
    let (sink, first_subject): (Arc<dyn DecisionSink>, Option<RatingSubject>) =
        match HttpDecisionSink::new(&settings.api_base_url, settings.api_token.clone()) {
            Ok(http) => {
                let first = match http.fetch_next() {
                    Ok(subject) => subject,
                    Err(e) => {
                        tracing::error!("Failed to fetch first item: {}", e);
                        None
                    }
                };
                (Arc::new(http.with_next_items(next_tx)), first)
            }
            Err(e) => {
                tracing::warn!("HTTP client unavailable, decisions stay local: {}", e);
                (Arc::new(RecordingSink::new()), None)
            }
        };

    tracing::info!(api = %settings.api_base_url, "Starting HeartRate");

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(WINDOW_SIZE.0), px(WINDOW_SIZE.1)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            move |_window, cx| {
                cx.new(move |cx| {
                    let card = RatingCard::new(thresholds, sink)
                        .with_subject(first_subject)
                        .with_next_items(next_rx);
                    card.watch_next_items(cx);
                    card
                })
            },
        );
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
