use super::dom;
use crate::header::{anchor_offset, HeaderVisibility};
use crate::lifecycle::Scope;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HIDDEN_CLASS: &str = "site-header--hidden";

fn header_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .query_selector(".site-header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Hide the header while scrolling down. Scroll events only mark the offset
/// dirty; the visibility is recomputed at most once per frame.
pub fn mount_visibility(
    scope: &mut Scope,
    document: &web::Document,
    visibility: Rc<RefCell<HeaderVisibility>>,
) {
    let (Some(window), Some(header)) = (web::window(), header_element(document)) else {
        return;
    };
    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = dirty.clone();
        dom::listen_passive(scope, &window, "scroll", move |_: web::Event| dirty.set(true));
    }
    {
        let dirty = dirty.clone();
        dom::listen_passive(scope, &window, "resize", move |_: web::Event| dirty.set(true));
    }
    let mut shown = true;
    dom::start_frame_loop(scope, move |_| {
        if !dirty.replace(false) {
            return;
        }
        let visible = visibility.borrow_mut().observe(dom::scroll_y());
        if visible != shown {
            let classes = header.class_list();
            _ = if visible {
                classes.remove_1(HIDDEN_CLASS)
            } else {
                classes.add_1(HIDDEN_CLASS)
            };
            shown = visible;
        }
    });
    {
        let header = header_element(document);
        scope.defer(move || {
            if let Some(h) = header {
                _ = h.class_list().remove_1(HIDDEN_CLASS);
            }
        });
    }
}

fn scroll_to(top: f64) {
    if let Some(window) = web::window() {
        // the smooth-scroll driver eases toward the new offset by itself
        window.scroll_to_with_x_and_y(0.0, top);
    }
}

/// In-page navigation that lands each section just below the header.
pub fn mount_nav(scope: &mut Scope, document: &web::Document) {
    for link in dom::query_all(document, "a[data-nav]") {
        let Some(selector) = link.get_attribute("data-nav") else {
            continue;
        };
        let doc = document.clone();
        dom::listen(scope, &link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(target) = doc.query_selector(&selector).ok().flatten() else {
                log::warn!("[nav] no element for {selector}");
                return;
            };
            let header_height = header_element(&doc).map(|h| h.offset_height() as f64);
            let top = target.get_bounding_client_rect().top();
            scroll_to(anchor_offset(top, dom::scroll_y(), header_height));
        });
    }
    for logo in dom::query_all(document, ".site-header .logo") {
        dom::listen(scope, &logo, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            scroll_to(0.0);
        });
    }
}
