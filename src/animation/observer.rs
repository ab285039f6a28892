use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Keeps an observation alive. Dropping it stops the observation.
pub struct ObserverHandle(Option<Box<dyn FnOnce()>>);

impl ObserverHandle {
    pub fn new(disconnect: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(disconnect)))
    }

    pub fn noop() -> Self {
        Self(None)
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        if let Some(disconnect) = self.0.take() {
            disconnect();
        }
    }
}

/// Reports whether a region intersects the viewport.
///
/// `on_change` receives `true` when at least `threshold` of the region is
/// visible and `false` when it drops below again.
pub trait ViewportObserver {
    fn observe(&self, target: &NodeRef, threshold: f64, on_change: Callback<bool>) -> ObserverHandle;
}

/// `IntersectionObserver` backed implementation.
pub struct BrowserObserver;

impl ViewportObserver for BrowserObserver {
    fn observe(&self, target: &NodeRef, threshold: f64, on_change: Callback<bool>) -> ObserverHandle {
        let Some(element) = target.cast::<Element>() else {
            return ObserverHandle::noop();
        };

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change.emit(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                error!("Failed to create IntersectionObserver: {:?}", e);
                return ObserverHandle::noop();
            }
        };
        observer.observe(&element);

        ObserverHandle::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }
}

/// Lets a parent swap the observer used by every `Reveal` below it.
#[derive(Clone)]
pub struct ObserverContext(pub Rc<dyn ViewportObserver>);

impl PartialEq for ObserverContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_viewport_observer() -> Rc<dyn ViewportObserver> {
    use_context::<ObserverContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Rc::new(BrowserObserver))
}
