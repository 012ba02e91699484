use super::dom;
use crate::config::ScrollParams;
use crate::lifecycle::Scope;
use crate::scroll::ScrollState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pin the content container and translate it toward the native scroll
/// offset every frame. The body keeps the content's height so the native
/// scrollbar still works.
pub fn mount(scope: &mut Scope, document: &web::Document, params: ScrollParams) {
    let Some(window) = web::window() else {
        return;
    };
    let (Some(container), Some(body)) = (dom::html_by_id(document, "smooth-scroll"), document.body())
    else {
        log::warn!("[scroll] #smooth-scroll missing, using native scrolling");
        return;
    };

    let style = container.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("top", "0");
    _ = style.set_property("left", "0");
    _ = style.set_property("width", "100%");
    _ = style.set_property("will-change", "transform");
    {
        let container = container.clone();
        let body = body.clone();
        scope.defer(move || {
            let style = container.style();
            for prop in ["position", "top", "left", "width", "will-change", "transform"] {
                _ = style.remove_property(prop);
            }
            _ = body.style().remove_property("height");
        });
    }

    let sync_height = {
        let container = container.clone();
        let body = body.clone();
        move || {
            let h = container.get_bounding_client_rect().height();
            _ = body.style().set_property("height", &format!("{h}px"));
        }
    };
    sync_height();
    {
        let sync_height = sync_height.clone();
        dom::listen_passive(scope, &window, "resize", move |_: web::Event| sync_height());
    }

    let observer_cb = Closure::wrap(Box::new(move |_: js_sys::Array, _: web::ResizeObserver| {
        sync_height();
    }) as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
    match web::ResizeObserver::new(observer_cb.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&container);
            scope.defer(move || observer.disconnect());
            scope.hold(observer_cb);
        }
        Err(e) => log::warn!("[scroll] ResizeObserver unavailable: {e:?}"),
    }

    let state = Rc::new(RefCell::new(ScrollState::new(params)));
    state.borrow_mut().snap_to(dom::scroll_y());
    _ = style.set_property("transform", &state.borrow().transform_css());

    {
        let state = state.clone();
        dom::listen_passive(scope, &window, "scroll", move |_: web::Event| {
            state.borrow_mut().set_target(dom::scroll_y());
        });
    }

    dom::start_frame_loop(scope, move |_| {
        let mut s = state.borrow_mut();
        if s.is_settled() {
            return;
        }
        s.tick();
        _ = container.style().set_property("transform", &s.transform_css());
    });
    log::info!("[scroll] smooth scrolling on");
}
