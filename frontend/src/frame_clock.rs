use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_render::request_animation_frame;
use web_sys::window;
use wheel_shared::FrameClock;

/// Frames paced by the browser's `requestAnimationFrame`.
#[derive(Debug, Default)]
pub struct AnimationFrameClock;

impl AnimationFrameClock {
    pub fn new() -> Self {
        Self
    }
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

impl FrameClock for AnimationFrameClock {
    fn now(&self) -> f64 {
        performance_now()
    }

    fn next_frame(&mut self) -> LocalBoxFuture<'_, f64> {
        let (sender, receiver) = oneshot::channel::<f64>();
        // Dropping the handle cancels the frame, so it lives until the frame fires
        let handle = request_animation_frame(move |timestamp| {
            let _ = sender.send(timestamp);
        });
        async move {
            let timestamp = receiver.await;
            drop(handle);
            timestamp.unwrap_or_else(|_| performance_now())
        }
        .boxed_local()
    }
}
