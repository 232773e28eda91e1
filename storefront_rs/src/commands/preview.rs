use std::time::Duration;

use anyhow::{Result, bail};
use storefront_core::{AutoRotatingSlider, StoreContent, TokioTimer};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Drive the hero slider on the tokio timer for `ticks` slide changes.
pub async fn preview(content: &StoreContent, ticks: u32, interval_ms: Option<u64>) -> Result<()> {
    let interval = match interval_ms {
        Some(0) => bail!("--interval-ms must be greater than zero"),
        Some(ms) => Duration::from_millis(ms),
        None => content.hero.interval(),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut slider: AutoRotatingSlider<TokioTimer> =
        AutoRotatingSlider::with_interval(content.hero.slides.clone(), interval).on_advance(
            move |index| {
                let _ = tx.send(index);
            },
        );

    let Some(first) = slider.current() else {
        println!("No slides to preview");
        return Ok(());
    };
    println!("[0] {} ({})", first.alt_text, first.source);

    slider.activate();
    info!(
        slides = slider.images().len(),
        interval_ms = interval.as_millis() as u64,
        ticks,
        "slider preview started"
    );

    for tick in 1..=ticks {
        let index = tokio::select! {
            index = rx.recv() => index,
            _ = tokio::signal::ctrl_c() => {
                warn!(tick, "preview interrupted");
                break;
            }
        };
        let Some(index) = index else { break };
        if let Some(slide) = slider.images().get(index) {
            info!(tick, index, "slide changed");
            println!("tick {tick}: [{index}] {} ({})", slide.alt_text, slide.source);
        }
    }

    slider.deactivate();
    info!("slider preview stopped");
    Ok(())
}
