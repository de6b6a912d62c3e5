use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::PageError;

/// A window event listener that unregisters itself when dropped, so an
/// effect's teardown is just dropping the guard.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach(event: &'static str, callback: Closure<dyn FnMut()>) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

pub fn viewport_height() -> Result<f64, PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let height = window.inner_height()?;
    height
        .as_f64()
        .ok_or_else(|| PageError::Js("innerHeight is not a number".to_string()))
}
