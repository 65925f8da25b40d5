//! Timers and per-frame tasks
//!
//! Every wait is an enqueued callback on the page's event loop. Loops that
//! would otherwise run forever return a handle that can cancel them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom::window;
use crate::error::Result;

/// Run `f` once after `ms` milliseconds
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once_into_js(f);
    let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    )?;
    Ok(handle)
}

/// Run `f` once on the next animation frame
pub fn next_frame(f: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once_into_js(f);
    Ok(window()?.request_animation_frame(callback.unchecked_ref())?)
}

/// A periodic timer. Stops when its tick returns false, when cleared, or
/// when dropped.
pub struct Interval {
    handle: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, mut tick: impl FnMut() -> bool + 'static) -> Result<Self> {
        let handle = Rc::new(Cell::new(None));
        let own = handle.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if !tick() {
                clear_interval(&own);
            }
        });
        let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )?;
        handle.set(Some(id));
        Ok(Self {
            handle,
            _callback: callback,
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    pub fn clear(&self) {
        clear_interval(&self.handle);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.clear();
    }
}

fn clear_interval(handle: &Cell<Option<i32>>) {
    if let (Some(id), Some(window)) = (handle.take(), web_sys::window()) {
        window.clear_interval_with_handle(id);
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A cancellable `requestAnimationFrame` loop.
///
/// The frame callback receives the frame timestamp (ms) and returns whether
/// to keep running. Dropping the handle does not stop the loop; call
/// [`FrameTask::cancel`].
#[derive(Clone)]
pub struct FrameTask {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    slot: FrameSlot,
}

impl FrameTask {
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Result<Self> {
        let cancelled = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let next = slot.clone();
        let stop = cancelled.clone();
        let queued = pending.clone();
        let callback = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            queued.set(None);
            if stop.get() || !frame(time) {
                stop.set(true);
                // Break the self-reference so the closure can be freed
                next.borrow_mut().take();
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(callback) = next.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    queued.set(Some(id));
                }
            }
        });

        let id = window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(callback);

        Ok(Self {
            cancelled,
            pending,
            slot,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled.get()
    }

    /// Stop the loop. The queued frame, if any, is withdrawn.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}
