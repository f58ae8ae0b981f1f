use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::engine::visibility::{Observation, VisibilityTracker};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer bound to one element. Dropping it stops the observation.
struct Subscription {
    observer: IntersectionObserver,
    element: Element,
    _callback: ObserverCallback,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.unobserve(&self.element);
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Reports whether the element behind `node` is in the viewport.
///
/// With `trigger_once` the result latches to `true` the first time at least
/// `threshold` of the element is visible and the observer is released.
/// Without it the value follows the element in and out of view. Browsers
/// without `IntersectionObserver` always get `true`.
#[hook]
pub fn use_on_screen(node: NodeRef, trigger_once: bool, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    let tracker = use_mut_ref(|| VisibilityTracker::new(trigger_once));
    let subscription: Rc<RefCell<Option<Subscription>>> = use_mut_ref(|| None);

    {
        let visible = visible.clone();
        let tracker = tracker.clone();
        let subscription = subscription.clone();
        // Runs after every render so a swapped element is picked up.
        use_effect(move || {
            let element = node.cast::<Element>();
            let current = subscription.borrow().as_ref().map(|s| s.element.clone());

            if current != element {
                if subscription.borrow_mut().take().is_some() {
                    tracker.borrow_mut().detach();
                }
                if let Some(element) = element {
                    subscribe(element, threshold, &tracker, &subscription, visible);
                }
            }
            || ()
        });
    }

    {
        let tracker = tracker.clone();
        let subscription = subscription.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    subscription.borrow_mut().take();
                    tracker.borrow_mut().detach();
                }
            },
            (),
        );
    }

    *visible
}

fn subscribe(
    element: Element,
    threshold: f64,
    tracker: &Rc<RefCell<VisibilityTracker>>,
    slot: &Rc<RefCell<Option<Subscription>>>,
    visible: UseStateHandle<bool>,
) {
    if !tracker.borrow_mut().attach() {
        return;
    }

    if !intersection_observer_supported() {
        tracker.borrow_mut().degrade_to_visible();
        visible.set(true);
        return;
    }

    let callback: ObserverCallback = {
        let tracker = tracker.clone();
        let element = element.clone();
        let visible = visible.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let on_screen = {
                let mut tracker = tracker.borrow_mut();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if tracker.on_intersection(entry.is_intersecting()) == Observation::Detach {
                        observer.unobserve(&element);
                        observer.disconnect();
                        break;
                    }
                }
                tracker.is_on_screen()
            };
            visible.set(on_screen);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            *slot.borrow_mut() = Some(Subscription {
                observer,
                element,
                _callback: callback,
            });
        }
        Err(err) => {
            log::warn!("IntersectionObserver could not be created: {:?}", err);
            tracker.borrow_mut().degrade_to_visible();
            visible.set(true);
        }
    }
}
