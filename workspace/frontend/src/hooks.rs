use std::cell::RefCell;
use std::rc::Rc;

use content::{ObserveOptions, VisibilityLatch};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live IntersectionObserver registration. Dropping it disconnects the
/// observer before the callback closure is released.
struct ViewportSubscription {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        log::trace!("Disconnecting viewport observer");
        self.observer.disconnect();
    }
}

/// Returns `false` on the first render and `true` once `delay_ms` has passed
/// after mount, giving the browser a painted frame to transition from.
/// The pending timer is cancelled if the component unmounts first.
#[hook]
pub fn use_shown_after_mount(delay_ms: u32) -> bool {
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_effect_with(delay_ms, move |delay_ms| {
            let timeout = Timeout::new(*delay_ms, move || shown.set(true));
            move || drop(timeout)
        });
    }

    *shown
}

/// Returns `true` once the referenced element has scrolled into view, and
/// keeps returning `true` afterwards.
#[hook]
pub fn use_in_view(node: NodeRef, options: ObserveOptions) -> bool {
    let latch = use_mut_ref(VisibilityLatch::new);
    let visible = use_state_eq(|| false);

    {
        let latch = latch.clone();
        let visible = visible.clone();
        use_effect_with((node, options), move |(node, options)| {
            let subscription = subscribe(node, options, latch, visible);
            move || drop(subscription)
        });
    }

    *visible
}

fn subscribe(
    node: &NodeRef,
    options: &ObserveOptions,
    latch: Rc<RefCell<VisibilityLatch>>,
    visible: UseStateHandle<bool>,
) -> Option<ViewportSubscription> {
    if latch.borrow().is_visible() {
        return None;
    }

    let Some(element) = node.cast::<Element>() else {
        log::warn!("Viewport observer has no element to observe");
        return None;
    };

    let trigger_once = options.trigger_once;
    let callback: ObserverCallback = {
        let visible = visible.clone();
        let latch = latch.clone();
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });

            if latch.borrow_mut().observe(intersecting) {
                log::debug!("Section entered viewport");
                visible.set(true);
                if trigger_once {
                    observer.disconnect();
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            log::trace!(
                "Observing element with root margin {} and threshold {}",
                options.root_margin,
                options.threshold
            );
            Some(ViewportSubscription {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
            *latch.borrow_mut() = VisibilityLatch::visible();
            visible.set(true);
            None
        }
    }
}
