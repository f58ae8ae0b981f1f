use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// A pending `requestAnimationFrame` callback. Dropping the handle cancels
/// the frame if it has not fired yet.
pub struct AnimationFrame {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

/// Schedules `callback` for the next display frame. The argument is the
/// frame timestamp in milliseconds. Returns `None` outside a browser window.
pub fn request_animation_frame<F>(callback: F) -> Option<AnimationFrame>
where
    F: FnOnce(f64) + 'static,
{
    let window = window()?;
    let closure = Closure::once(callback);
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(AnimationFrame {
            id,
            _closure: closure,
        }),
        Err(err) => {
            log::error!("requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}
