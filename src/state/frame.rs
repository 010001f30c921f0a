// Per-frame callback scheduling (requestAnimationFrame in the browser)
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Something that can run one callback on the next display refresh.
pub trait FrameScheduler {
    /// Requests a single frame. `None` if the request could not be made.
    fn request(&mut self) -> Option<i32>;
    fn cancel(&mut self, handle: i32);
}

/// `requestAnimationFrame` driver. The callback is installed once on mount and
/// dropped on unmount; clones share it.
#[derive(Clone)]
pub struct RafScheduler {
    window: Option<web_sys::Window>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn install(&self, f: impl FnMut() + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut()>));
    }

    /// Must not be called from inside the installed callback.
    pub fn uninstall(&self) {
        self.callback.borrow_mut().take();
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> Option<i32> {
        let window = self.window.as_ref()?;
        let callback = self.callback.borrow();
        let closure = callback.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>())
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = &self.window {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}
