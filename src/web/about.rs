use super::dom;
use crate::drag::ShapeBoard;
use crate::lifecycle::Scope;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn place(shape: &web::Element, board: &ShapeBoard, index: usize) {
    let (top, left) = board.shapes[index].css();
    dom::set_style(shape, "top", &top);
    dom::set_style(shape, "left", &left);
}

/// Draggable shapes in the about section.
pub fn mount(scope: &mut Scope, document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(container) = document.query_selector(".about-visuals").ok().flatten() else {
        return;
    };
    let shapes = dom::query_all(document, ".about-visuals .shape");
    let board = Rc::new(RefCell::new(ShapeBoard::default()));
    for (i, shape) in shapes.iter().enumerate().take(board.borrow().shapes.len()) {
        place(shape, &board.borrow(), i);
    }

    for (i, shape) in shapes.iter().enumerate() {
        let board = board.clone();
        let el = shape.clone();
        let body = document.body();
        dom::listen(scope, shape, "mousedown", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let origin = dom::rect_of(&el).origin;
            if board.borrow_mut().grab(i, pointer, origin) {
                _ = el.class_list().add_1("dragging");
                if let Some(b) = body.as_ref() {
                    _ = b.class_list().add_1("is-dragging");
                }
            }
        });
    }
    {
        let board = board.clone();
        let shapes = shapes.clone();
        let container = container.clone();
        dom::listen(scope, &window, "mousemove", move |ev: web::MouseEvent| {
            if !board.borrow().is_dragging() {
                return;
            }
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let origin = dom::rect_of(&container).origin;
            let mut b = board.borrow_mut();
            if let Some((index, _)) = b.drag_to(pointer, origin) {
                if let Some(shape) = shapes.get(index) {
                    place(shape, &b, index);
                }
            }
        });
    }
    {
        let shapes = shapes.clone();
        let body = document.body();
        scope.defer(move || {
            for shape in &shapes {
                _ = shape.class_list().remove_1("dragging");
            }
            if let Some(b) = body {
                _ = b.class_list().remove_1("is-dragging");
            }
        });
    }
    {
        let body = document.body();
        dom::listen(scope, &window, "mouseup", move |_: web::MouseEvent| {
            if let Some(index) = board.borrow_mut().release() {
                if let Some(shape) = shapes.get(index) {
                    _ = shape.class_list().remove_1("dragging");
                }
                if let Some(b) = body.as_ref() {
                    _ = b.class_list().remove_1("is-dragging");
                }
            }
        });
    }
}
