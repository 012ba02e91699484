use super::dom;
use crate::config::SiteConfig;
use crate::i18n::{coded_word, tagline_options, Language};
use crate::lifecycle::Scope;
use crate::particles::{ParticleEmitter, ParticleSurface};
use crate::pointer::{HotRegion, PointerState};
use crate::text_fx::{coded_color, ScrambleLoop, TaglineCycle};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Circles inside the hero's SVG mask group. Newer circles are prepended.
struct MaskSurface {
    document: web::Document,
    group: web::Element,
}

impl ParticleSurface for MaskSurface {
    type Handle = Option<web::Element>;

    fn create(&mut self, position: Vec2) -> Self::Handle {
        let circle = self.document.create_element_ns(Some(SVG_NS), "circle").ok()?;
        _ = circle.set_attribute("cx", &position.x.to_string());
        _ = circle.set_attribute("cy", &position.y.to_string());
        _ = circle.set_attribute("r", "0");
        _ = circle.set_attribute("fill", "#fff");
        _ = self.group.prepend_with_node_1(&circle);
        Some(circle)
    }

    fn set_radius(&mut self, handle: &Self::Handle, radius: f32) {
        if let Some(circle) = handle {
            _ = circle.set_attribute("r", &radius.to_string());
        }
    }

    fn destroy(&mut self, handle: Self::Handle) {
        if let Some(circle) = handle {
            circle.remove();
        }
    }
}

struct HeroState {
    pointer: PointerState,
    hot: HotRegion,
    emitter: ParticleEmitter<MaskSurface>,
    surface: Option<MaskSurface>,
}

fn touch_point(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    let touch = ev.touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}

/// Pointer sampler, particle emitter and the hero's looping text effects.
pub fn mount(
    scope: &mut Scope,
    document: &web::Document,
    config: &SiteConfig,
    language: Rc<Cell<Language>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(hero) = dom::by_id(document, "hero") else {
        log::warn!("[hero] #hero missing, particles disabled");
        return;
    };
    let surface = dom::by_id(document, "particle-group").map(|group| MaskSurface {
        document: document.clone(),
        group,
    });
    let state = Rc::new(RefCell::new(HeroState {
        pointer: PointerState::default(),
        hot: HotRegion::default(),
        emitter: ParticleEmitter::new(config.particles),
        surface,
    }));

    {
        let state = state.clone();
        dom::listen_passive(scope, &window, "mousemove", move |ev: web::MouseEvent| {
            state
                .borrow_mut()
                .pointer
                .set_raw(ev.client_x() as f32, ev.client_y() as f32);
        });
    }
    {
        let state = state.clone();
        dom::listen_passive(scope, &window, "touchmove", move |ev: web::TouchEvent| {
            if let Some((x, y)) = touch_point(&ev) {
                state.borrow_mut().pointer.set_raw(x, y);
            }
        });
    }
    {
        let state = state.clone();
        dom::listen(scope, &hero, "mouseenter", move |_: web::MouseEvent| {
            state.borrow_mut().hot.enter();
        });
    }
    {
        let state = state.clone();
        dom::listen(scope, &hero, "mouseleave", move |_: web::MouseEvent| {
            state.borrow_mut().hot.leave();
        });
    }
    {
        let state = state.clone();
        dom::listen_passive(scope, &hero, "touchstart", move |ev: web::TouchEvent| {
            let mut s = state.borrow_mut();
            if let Some((x, y)) = touch_point(&ev) {
                // avoid a burst from the stale position of the previous touch
                s.pointer.set_raw(x, y);
                s.pointer.smooth = s.pointer.raw;
            }
            s.hot.enter();
        });
    }
    {
        let state = state.clone();
        dom::listen_passive(scope, &window, "touchend", move |_: web::TouchEvent| {
            state.borrow_mut().hot.leave();
        });
    }

    let pointer_params = config.pointer;
    {
        let state = state.clone();
        dom::start_frame_loop(scope, move |_| {
            let now = dom::now_ms();
            let mut s = state.borrow_mut();
            let HeroState {
                pointer,
                hot,
                emitter,
                surface,
            } = &mut *s;
            pointer.tick(&pointer_params);
            emitter.frame(pointer, hot.is_inside(), surface.as_mut(), now);
        });
    }

    scope.defer(move || {
        let mut s = state.borrow_mut();
        let HeroState { emitter, surface, .. } = &mut *s;
        if let Some(surface) = surface.as_mut() {
            emitter.clear(surface);
        }
        log::debug!("[hero] particles cleared");
    });

    mount_text_effects(scope, document, language);
}

fn mount_text_effects(scope: &mut Scope, document: &web::Document, language: Rc<Cell<Language>>) {
    let tagline = dom::html_by_id(document, "hero-tagline");
    let coded = dom::html_by_id(document, "coded-word");
    if tagline.is_none() && coded.is_none() {
        return;
    }
    let started = dom::now_ms();
    let mut shown_lang = None;
    let mut scramble = ScrambleLoop::coded(coded_word(Language::En));
    let mut last_tagline = (usize::MAX, f64::NAN);
    dom::start_frame_loop(scope, move |_| {
        let lang = language.get();
        let elapsed = dom::now_ms() - started;
        if shown_lang != Some(lang) {
            scramble = ScrambleLoop::coded(coded_word(lang));
            shown_lang = Some(lang);
            last_tagline = (usize::MAX, f64::NAN);
        }
        if let Some(el) = tagline.as_ref() {
            let options = tagline_options(lang);
            let (index, opacity) = TaglineCycle::new(options.len()).sample(elapsed);
            if last_tagline.0 != index {
                el.set_text_content(Some(options[index]));
            }
            if last_tagline.1 != opacity {
                _ = el.style().set_property("opacity", &format!("{opacity:.3}"));
            }
            last_tagline = (index, opacity);
        }
        if let Some(el) = coded.as_ref() {
            let text = scramble.sample(elapsed);
            if el.text_content().as_deref() != Some(text.as_str()) {
                el.set_text_content(Some(&text));
            }
            _ = el.style().set_property("color", coded_color(elapsed));
        }
    });
}
