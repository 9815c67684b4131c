//! Per-frame callbacks scoped to a component.
//!
//! [`use_frame_ticks`] subscribes on first render and unsubscribes when the
//! component is dropped: the loop is a task owned by the component's scope and
//! is cancelled explicitly in `use_drop`, so unmounting the scene always stops it.

use dioxus::prelude::*;

/// Monotonic clock started at subscription time.
struct Clock {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Clock {
    fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {
                start_ms: now_ms(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                start: std::time::Instant::now(),
            }
        }
    }

    fn elapsed_secs(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            (now_ms() - self.start_ms) / 1000.0
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Resolves on the next display refresh.
#[cfg(target_arch = "wasm32")]
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(&resolve);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn next_frame() {
    tokio::time::sleep(std::time::Duration::from_millis(16)).await;
}

/// Call `on_tick` with the seconds elapsed since mount, once per frame, until
/// the calling component is torn down.
pub fn use_frame_ticks(mut on_tick: impl FnMut(f64) + 'static) {
    let task = use_hook(move || {
        tracing::debug!("Frame subscription acquired");
        spawn(async move {
            let clock = Clock::start();
            loop {
                next_frame().await;
                on_tick(clock.elapsed_secs());
            }
        })
    });

    use_drop(move || {
        tracing::debug!("Frame subscription released");
        task.cancel();
    });
}
