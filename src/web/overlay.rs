use super::{dom, services};
use crate::config::RevealParams;
use crate::constants::{MORPH_DURATION_MS, OVERLAY_FADE_MS};
use crate::i18n::{Language, SERVICES};
use crate::lifecycle::Scope;
use crate::morph::{FlipTransform, MorphView, OverlayController, Rect, SharedPart};
use crate::reveal::{RevealProp, RevealView};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

const OVERLAY_ID: &str = "service-overlay";

struct OverlayDom {
    document: web::Document,
    language: Rc<Cell<Language>>,
    showing: bool,
}

impl OverlayDom {
    fn part(&self, id: &str, part: SharedPart) -> Option<web::Element> {
        let el = match part {
            SharedPart::Title => services::title_id(id),
            SharedPart::Image => services::image_id(id),
        };
        dom::by_id(&self.document, &el)
    }

    fn slot(&self, id: &str, part: SharedPart, in_overlay: bool) -> Option<web::Element> {
        let el = match (part, in_overlay) {
            (SharedPart::Title, true) => "overlay-title-slot".to_string(),
            (SharedPart::Image, true) => "overlay-image-slot".to_string(),
            (SharedPart::Title, false) => services::title_slot_id(id),
            (SharedPart::Image, false) => services::image_slot_id(id),
        };
        dom::by_id(&self.document, &el)
    }
}

impl RevealView<String> for OverlayDom {
    fn contains(&self, id: &String) -> bool {
        dom::by_id(&self.document, OVERLAY_ID).is_some()
            && self.part(id, SharedPart::Title).is_some()
    }

    fn content_height(&self, _id: &String) -> f64 {
        0.0
    }

    fn apply(&mut self, _id: &String, prop: RevealProp, value: f64) {
        if prop != RevealProp::Opacity {
            return;
        }
        let Some(overlay) = dom::by_id(&self.document, OVERLAY_ID) else {
            return;
        };
        dom::set_style(&overlay, "opacity", &format!("{value:.3}"));
        if value <= 0.0 && !self.showing {
            dom::set_style(&overlay, "display", "none");
        }
    }

    fn set_expanded(&mut self, id: &String, expanded: bool) {
        let Some(overlay) = dom::by_id(&self.document, OVERLAY_ID) else {
            return;
        };
        self.showing = expanded;
        _ = overlay.set_attribute("aria-hidden", if expanded { "false" } else { "true" });
        if let Some(button) = dom::by_id(&self.document, &services::more_id(id)) {
            _ = button.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        }
        if expanded {
            // laid out (still transparent) so the morph can measure its target
            dom::set_style(&overlay, "display", "");
            let lang = self.language.get();
            if let Some(service) = SERVICES.iter().find(|s| s.id == id.as_str()) {
                dom::set_text(&self.document, "overlay-description", service.description.get(lang));
            }
        }
    }
}

impl MorphView<String> for OverlayDom {
    fn measure(&self, id: &String, part: SharedPart) -> Option<Rect> {
        self.part(id, part).map(|el| dom::rect_of(&el))
    }

    fn reparent(&mut self, id: &String, part: SharedPart, into_overlay: bool) {
        if let (Some(el), Some(slot)) = (self.part(id, part), self.slot(id, part, into_overlay)) {
            if el.parent_element().as_ref() != Some(&slot) {
                _ = slot.append_child(&el);
            }
        }
    }

    fn set_transform(&mut self, id: &String, part: SharedPart, transform: Option<FlipTransform>) {
        let Some(el) = self.part(id, part) else {
            return;
        };
        match transform {
            Some(t) => {
                dom::set_style(&el, "transform-origin", "0 0");
                dom::set_style(&el, "transform", &t.to_css());
            }
            None => {
                dom::set_style(&el, "transform", "");
                dom::set_style(&el, "transform-origin", "");
            }
        }
    }
}

pub type Closer = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

/// "Learn more" overlay with the title and image morphing out of the card.
/// Returns a closer for the global Escape handler.
pub fn mount(
    scope: &mut Scope,
    document: &web::Document,
    params: RevealParams,
    language: Rc<Cell<Language>>,
) -> Closer {
    let closer: Closer = Rc::new(RefCell::new(None));
    if dom::by_id(document, OVERLAY_ID).is_none() {
        log::warn!("[overlay] #{OVERLAY_ID} missing");
        return closer;
    }
    let view = OverlayDom {
        document: document.clone(),
        language,
        showing: false,
    };
    let params = RevealParams {
        duration_ms: OVERLAY_FADE_MS,
        ..params
    };
    let controller = OverlayController::new(params, MORPH_DURATION_MS, services::ids());
    let shared = Rc::new(RefCell::new((controller, view)));

    for sid in services::ids() {
        let shared = shared.clone();
        let id = sid.clone();
        dom::on_click(scope, document, &services::more_id(&sid), move |ev| {
            ev.stop_propagation();
            let (controller, view) = &mut *shared.borrow_mut();
            controller.toggle(&id, view, dom::now_ms());
        });
    }
    {
        let shared = shared.clone();
        dom::on_click(scope, document, "overlay-close", move |_| {
            let (controller, view) = &mut *shared.borrow_mut();
            controller.close(view, dom::now_ms());
        });
    }
    {
        let shared = shared.clone();
        *closer.borrow_mut() = Some(Box::new(move || {
            let (controller, view) = &mut *shared.borrow_mut();
            controller.close(view, dom::now_ms());
        }));
    }
    {
        let closer = closer.clone();
        scope.defer(move || {
            closer.borrow_mut().take();
        });
    }

    {
        let shared = shared.clone();
        dom::start_frame_loop(scope, move |_| {
            let (controller, view) = &mut *shared.borrow_mut();
            controller.step(view, dom::now_ms());
        });
    }

    scope.defer(move || {
        let (controller, view) = &mut *shared.borrow_mut();
        controller.teardown(view, dom::now_ms());
    });
    closer
}
