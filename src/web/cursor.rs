use super::dom;
use crate::config::CursorParams;
use crate::cursor::CursorState;
use crate::lifecycle::Scope;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Custom two-ring cursor. Desktop only.
pub fn mount(scope: &mut Scope, document: &web::Document, params: CursorParams) {
    let (Some(outer), Some(inner)) = (
        dom::html_by_id(document, "cursor-outer"),
        dom::html_by_id(document, "cursor-inner"),
    ) else {
        return;
    };
    _ = outer.style().set_property("display", "");
    _ = inner.style().set_property("display", "");
    {
        let (outer, inner) = (outer.clone(), inner.clone());
        scope.defer(move || {
            _ = outer.style().set_property("display", "none");
            _ = inner.style().set_property("display", "none");
        });
    }

    let state = Rc::new(RefCell::new(CursorState::new(params)));
    {
        let state = state.clone();
        dom::listen(scope, document, "mousemove", move |ev: web::MouseEvent| {
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            state.borrow_mut().on_move(at, dom::now_ms());
        });
    }
    for el in dom::query_all(document, "a, button, input") {
        let enter = state.clone();
        dom::listen(scope, &el, "mouseenter", move |_: web::MouseEvent| {
            enter.borrow_mut().on_hover_interactive(true, dom::now_ms());
        });
        let leave = state.clone();
        dom::listen(scope, &el, "mouseleave", move |_: web::MouseEvent| {
            leave.borrow_mut().on_hover_interactive(false, dom::now_ms());
        });
    }

    dom::start_frame_loop(scope, move |_| {
        let f = state.borrow().frame(dom::now_ms());
        let size = format!("{:.1}px", f.outer_size_px);
        let o = outer.style();
        _ = o.set_property("transform", &format!("translate3d({}px, {}px, 0)", f.outer.x, f.outer.y));
        _ = o.set_property("width", &size);
        _ = o.set_property("height", &size);
        _ = inner
            .style()
            .set_property("transform", &format!("translate3d({}px, {}px, 0)", f.inner.x, f.inner.y));
    });
}
