use super::{dom, services};
use crate::config::RevealParams;
use crate::lifecycle::Scope;
use crate::reveal::{RevealController, RevealProp, RevealStyle, RevealView};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct AccordionDom {
    document: web::Document,
}

impl RevealView<String> for AccordionDom {
    fn contains(&self, id: &String) -> bool {
        [services::toggle_id(id), services::content_id(id), services::icon_id(id)]
            .iter()
            .all(|el| dom::by_id(&self.document, el).is_some())
    }

    fn content_height(&self, id: &String) -> f64 {
        dom::by_id(&self.document, &services::inner_id(id))
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn apply(&mut self, id: &String, prop: RevealProp, value: f64) {
        match prop {
            RevealProp::Indicator => {
                if let Some(icon) = dom::by_id(&self.document, &services::icon_id(id)) {
                    _ = icon.set_attribute("transform", &format!("rotate({value:.2} 12 12)"));
                }
            }
            RevealProp::Content => {
                if let Some(content) = dom::by_id(&self.document, &services::content_id(id)) {
                    dom::set_style(&content, "max-height", &format!("{value:.1}px"));
                }
            }
            RevealProp::Opacity => {}
        }
    }

    fn set_expanded(&mut self, id: &String, expanded: bool) {
        if let Some(button) = dom::by_id(&self.document, &services::toggle_id(id)) {
            _ = button.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        }
    }
}

/// Services accordion: one row open at a time, the first open on load.
pub fn mount(scope: &mut Scope, document: &web::Document, params: RevealParams) {
    let mut view = AccordionDom {
        document: document.clone(),
    };
    let mut controller = RevealController::new(params, RevealStyle::Accordion, services::ids());
    if let Some(first) = services::ids().next() {
        controller.open_immediately(&first, &mut view);
    }
    let shared = Rc::new(RefCell::new((controller, view)));

    for sid in services::ids() {
        let shared = shared.clone();
        let id = sid.clone();
        dom::on_click(scope, document, &services::toggle_id(&sid), move |_| {
            let (controller, view) = &mut *shared.borrow_mut();
            if !controller.toggle(&id, view, dom::now_ms()) {
                log::debug!("[accordion] ignored toggle for {id}");
            }
        });
    }

    {
        let shared = shared.clone();
        dom::start_frame_loop(scope, move |_| {
            let (controller, view) = &mut *shared.borrow_mut();
            if controller.active_tweens() > 0 {
                controller.step(view, dom::now_ms());
            }
        });
    }

    scope.defer(move || {
        let (controller, _) = &mut *shared.borrow_mut();
        let cancelled = controller.teardown(dom::now_ms());
        log::debug!("[accordion] cancelled {cancelled} tweens");
    });
}
