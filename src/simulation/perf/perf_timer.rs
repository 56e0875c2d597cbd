#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

/// Stopwatch for perf metrics. Uses the JS clock on wasm32, where `Instant` panics.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            now() - self.started
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}
