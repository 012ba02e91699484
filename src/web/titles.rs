use super::dom;
use crate::i18n::{text, Language};
use crate::lifecycle::Scope;
use crate::text_fx::ScrambleLoop;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Section titles marked `data-scramble` periodically glitch into glyphs.
pub fn mount(scope: &mut Scope, document: &web::Document, language: Rc<Cell<Language>>) {
    let titles: Vec<(web::Element, String)> = dom::query_all(document, "[data-scramble][data-i18n]")
        .into_iter()
        .filter_map(|el| {
            let key = el.get_attribute("data-i18n")?;
            Some((el, key))
        })
        .collect();
    if titles.is_empty() {
        return;
    }
    let started = dom::now_ms();
    let mut shown_lang = None;
    let mut loops: Vec<ScrambleLoop> = Vec::new();
    dom::start_frame_loop(scope, move |_| {
        let lang = language.get();
        if shown_lang != Some(lang) {
            loops = titles
                .iter()
                .enumerate()
                .map(|(i, (_, key))| ScrambleLoop::title(text(key, lang).unwrap_or_default(), i))
                .collect();
            shown_lang = Some(lang);
        }
        let elapsed = dom::now_ms() - started;
        for ((el, _), fx) in titles.iter().zip(&loops) {
            let word = fx.sample(elapsed);
            if el.text_content().as_deref() != Some(word.as_str()) {
                el.set_text_content(Some(&word));
            }
        }
    });
}
