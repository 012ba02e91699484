use super::dom;
use crate::i18n::{service_number, Language, SERVICES};
use web_sys as web;

pub fn toggle_id(sid: &str) -> String {
    format!("service-toggle-{sid}")
}
pub fn icon_id(sid: &str) -> String {
    format!("service-icon-{sid}")
}
pub fn content_id(sid: &str) -> String {
    format!("service-content-{sid}")
}
pub fn inner_id(sid: &str) -> String {
    format!("service-inner-{sid}")
}
pub fn title_id(sid: &str) -> String {
    format!("service-title-{sid}")
}
pub fn title_slot_id(sid: &str) -> String {
    format!("service-title-slot-{sid}")
}
pub fn image_id(sid: &str) -> String {
    format!("service-image-{sid}")
}
pub fn image_slot_id(sid: &str) -> String {
    format!("service-image-slot-{sid}")
}
pub fn more_id(sid: &str) -> String {
    format!("service-more-{sid}")
}

fn row_markup(index: usize, sid: &str) -> String {
    let tags: String = (0..3)
        .map(|t| format!(r#"<span class="service-tag" id="service-tag-{sid}-{t}"></span>"#))
        .collect();
    format!(
        r#"<div class="service-item" id="service-{sid}">
  <h3 class="service-item-heading" id="service-header-{sid}">
    <button class="service-item-header" id="{toggle}" type="button" aria-expanded="false" aria-controls="{content}">
      <span class="service-number">{number}</span>
      <span class="service-title-slot" id="{title_slot}"><span class="service-item-title" id="{title}"></span></span>
      <svg class="service-toggle-icon" width="24" height="24" viewBox="0 0 24 24" fill="none" aria-hidden="true">
        <line x1="5" y1="12" x2="19" y2="12" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        <line id="{icon}" x1="12" y1="5" x2="12" y2="19" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
      </svg>
    </button>
  </h3>
  <div id="{content}" role="region" aria-labelledby="service-header-{sid}" class="service-item-content-wrapper" style="max-height:0;overflow:hidden">
    <div class="service-item-content" id="{inner}">
      <div class="service-content-inner">
        <div class="service-image-slot" id="{image_slot}"><div class="service-image service-image--{sid}" id="{image}"></div></div>
        <p class="service-description" id="service-desc-{sid}"></p>
        <div class="service-tags">{tags}</div>
        <button class="service-learn-more" id="{more}" type="button"></button>
      </div>
    </div>
  </div>
</div>"#,
        toggle = toggle_id(sid),
        content = content_id(sid),
        number = service_number(index),
        title_slot = title_slot_id(sid),
        title = title_id(sid),
        icon = icon_id(sid),
        inner = inner_id(sid),
        image_slot = image_slot_id(sid),
        image = image_id(sid),
        more = more_id(sid),
    )
}

/// Build the accordion rows. Copy is filled in by [`apply_language`].
pub fn render(document: &web::Document) -> bool {
    let Some(list) = dom::by_id(document, "services-accordion") else {
        log::warn!("[services] #services-accordion missing");
        return false;
    };
    let html: String = SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| row_markup(i, s.id))
        .collect();
    list.set_inner_html(&html);
    true
}

pub fn apply_language(document: &web::Document, lang: Language) {
    let learn_more = crate::i18n::text("learnMore", lang).unwrap_or("Learn More");
    for service in SERVICES.iter() {
        let sid = service.id;
        dom::set_text(document, &title_id(sid), service.title.get(lang));
        dom::set_text(document, &format!("service-desc-{sid}"), service.description.get(lang));
        for (t, tag) in service.tags.iter().enumerate() {
            dom::set_text(document, &format!("service-tag-{sid}-{t}"), tag.get(lang));
        }
        dom::set_text(document, &more_id(sid), learn_more);
    }
}

pub fn ids() -> impl Iterator<Item = String> {
    SERVICES.iter().map(|s| s.id.to_string())
}
