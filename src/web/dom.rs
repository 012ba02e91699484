use crate::lifecycle::{LiveCounter, Scope};
use crate::morph::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static LIVE_LISTENERS: LiveCounter = LiveCounter::default();
    static LIVE_FRAMES: LiveCounter = LiveCounter::default();
}

/// Listeners attached through [`listen`] and not yet removed.
pub fn live_listeners() -> usize {
    LIVE_LISTENERS.with(|c| c.get())
}

/// Frame loops started through [`start_frame_loop`] and not yet cancelled.
pub fn live_frame_loops() -> usize {
    LIVE_FRAMES.with(|c| c.get())
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    by_id(document, id).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn set_style(el: &web::Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(prop, value);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = by_id(document, id) {
        el.set_text_content(Some(text));
    }
}

pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Attach `handler` for `event` on `target`; the matching removal is
/// registered in `scope`.
pub fn listen<E, F>(scope: &mut Scope, target: &web::EventTarget, event: &'static str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[dom] could not attach {event} listener");
        return;
    }
    LIVE_LISTENERS.with(|c| c.track(scope));
    let target = target.clone();
    scope.defer(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    });
}

/// Passive variant for high-frequency scroll/touch events.
pub fn listen_passive<E, F>(
    scope: &mut Scope,
    target: &web::EventTarget,
    event: &'static str,
    handler: F,
) where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .is_err()
    {
        log::warn!("[dom] could not attach passive {event} listener");
        return;
    }
    LIVE_LISTENERS.with(|c| c.track(scope));
    let target = target.clone();
    scope.defer(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    });
}

pub fn on_click(
    scope: &mut Scope,
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(scope, &el, "click", move |ev: web::MouseEvent| handler(ev));
    }
}

/// Run `tick` on every animation frame until `scope` is disposed. The frame
/// timestamp (ms) is passed through.
pub fn start_frame_loop(scope: &mut Scope, mut tick: impl FnMut(f64) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let slot_inner = slot.clone();
    let handle_inner = handle.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        tick(ts);
        if handle_inner.borrow().is_none() {
            // cancelled from inside `tick`
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), slot_inner.borrow().as_ref()) {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                *handle_inner.borrow_mut() = Some(id);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = slot
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
    match first {
        Some(Ok(id)) => *handle.borrow_mut() = Some(id),
        _ => {
            log::warn!("[frame] requestAnimationFrame unavailable");
            return;
        }
    }

    LIVE_FRAMES.with(|c| c.track(scope));
    scope.defer(move || {
        if let Some(id) = handle.borrow_mut().take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // break the closure's self-reference so it can be freed
        slot.borrow_mut().take();
    });
}
