//! Hero image slider - the only component with runtime behavior.
//!
//! Rendered statically the slider shows the first slide. In the browser an
//! effect owns a [`Rotation`] driven by a [`BrowserInterval`]; the effect
//! re-runs when the slide list or the interval changes, and the rotation is
//! dropped (cancelling its interval) when the component is unmounted.

use std::time::Duration;

use leptos::prelude::*;
use storefront_core::rotation::{RepeatingTimer, Rotation, TickFn};
use storefront_core::{indicators, SlideImage, TimerError, DEFAULT_SLIDE_INTERVAL};

/// `window.setInterval` handle. Dropping it clears the interval.
#[derive(Debug)]
pub struct BrowserInterval(IntervalHandle);

impl RepeatingTimer for BrowserInterval {
    fn start(period: Duration, tick: TickFn) -> Result<Self, TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        set_interval_with_handle(move || tick(), period)
            .map(BrowserInterval)
            .map_err(|e| TimerError::Backend(format!("{e:?}")))
    }
}

impl Drop for BrowserInterval {
    fn drop(&mut self) {
        self.0.clear();
    }
}

/// Bring `slot` in line with the current slide count and interval: the first
/// call creates and starts the rotation, later calls reconfigure it in place.
/// Returns the index to display.
fn sync_rotation<T: RepeatingTimer>(
    slot: &mut Option<Rotation<T>>,
    len: usize,
    period: Duration,
    on_advance: impl Fn(usize) + Send + Sync + 'static,
) -> usize {
    match slot {
        Some(live) => live.reconfigure(len, period),
        None => {
            let mut fresh = Rotation::new(len, period).on_advance(on_advance);
            fresh.activate();
            let current = fresh.current_index();
            *slot = Some(fresh);
            current
        }
    }
}

/// Auto-rotating slider with one indicator dot per slide.
///
/// Renders nothing for an empty slide list.
#[component]
pub fn ProductImageSlider(
    /// Slides in display order
    #[prop(into)]
    images: Signal<Vec<SlideImage>>,
    /// Time between two slides
    #[prop(into, default = Signal::stored(DEFAULT_SLIDE_INTERVAL))]
    interval: Signal<Duration>,
) -> impl IntoView {
    let index = RwSignal::new(0usize);
    let rotation = StoredValue::new(None::<Rotation<BrowserInterval>>);

    Effect::new(move || {
        let len = images.with(Vec::len);
        let period = interval.get();
        rotation.update_value(|slot| {
            index.set(sync_rotation(slot, len, period, move |i| index.set(i)));
        });
    });

    on_cleanup(move || {
        rotation.update_value(|slot| {
            slot.take();
        });
    });

    let current = move || {
        images.with(|slides| {
            slides
                .get(index.get())
                .or_else(|| slides.first())
                .cloned()
        })
    };

    view! {
        <Show when=move || images.with(|slides| !slides.is_empty())>
            <div class="slider">
                {move || current().map(|slide| view! {
                    <img class="slider-image" src=slide.source alt=slide.alt_text />
                })}
                <div class="slider-shade"></div>
                <div class="slider-dots">
                    {move || {
                        indicators(images.with(Vec::len), index.get())
                            .into_iter()
                            .map(|dot| {
                                let class = if dot.active { "slider-dot active" } else { "slider-dot" };
                                view! { <span class=class data-slide=dot.index.to_string()></span> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </Show>
    }
}
