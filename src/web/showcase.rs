use super::dom;
use crate::carousel::Deck;
use crate::config::DeckParams;
use crate::i18n::{Language, CLIENTS};
use crate::lifecycle::Scope;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn card_id(i: usize) -> String {
    format!("testimonial-{i}")
}

/// Build the testimonial cards. Copy is filled in by [`apply_language`].
pub fn render(document: &web::Document) -> bool {
    let Some(deck) = dom::by_id(document, "showcase-deck") else {
        return false;
    };
    let html: String = CLIENTS
        .iter()
        .enumerate()
        .map(|(i, client)| {
            format!(
                r#"<div class="testimonial-card" id="{card}"><div class="client-logo" role="img">{logo}</div><p class="testimonial-quote" id="{card}-quote"></p><div class="testimonial-author"><strong id="{card}-name"></strong>, <span id="{card}-role"></span></div></div>"#,
                card = card_id(i),
                logo = client.logo,
            )
        })
        .collect();
    deck.set_inner_html(&html);
    true
}

pub fn apply_language(document: &web::Document, lang: Language) {
    for (i, client) in CLIENTS.iter().enumerate() {
        let card = card_id(i);
        dom::set_text(document, &format!("{card}-quote"), &format!("\"{}\"", client.quote.get(lang)));
        dom::set_text(document, &format!("{card}-name"), client.name);
        dom::set_text(document, &format!("{card}-role"), client.role.get(lang));
    }
}

fn paint(document: &web::Document, deck: &Deck) {
    for i in 0..deck.len() {
        let Some(card) = dom::by_id(document, &card_id(i)) else {
            continue;
        };
        let pose = deck.pose(i);
        dom::set_style(&card, "transform", &pose.transform_css());
        dom::set_style(&card, "opacity", &pose.opacity.to_string());
        dom::set_style(&card, "z-index", &pose.z_index.to_string());
        dom::set_style(&card, "pointer-events", if pose.interactive { "auto" } else { "none" });
    }
}

/// Testimonial deck with autoplay that pauses while hovered.
pub fn mount(scope: &mut Scope, document: &web::Document, params: DeckParams) {
    let Some(deck_el) = dom::by_id(document, "showcase-deck") else {
        log::warn!("[showcase] #showcase-deck missing");
        return;
    };
    let deck = Rc::new(RefCell::new(Deck::new(params, CLIENTS.len(), dom::now_ms())));
    paint(document, &deck.borrow());

    {
        let deck = deck.clone();
        dom::listen(scope, &deck_el, "mouseenter", move |_: web::MouseEvent| {
            deck.borrow_mut().set_hovered(true, dom::now_ms());
        });
    }
    {
        let deck = deck.clone();
        dom::listen(scope, &deck_el, "mouseleave", move |_: web::MouseEvent| {
            deck.borrow_mut().set_hovered(false, dom::now_ms());
        });
    }
    {
        let deck = deck.clone();
        let doc = document.clone();
        dom::on_click(scope, document, "showcase-prev", move |_| {
            let mut d = deck.borrow_mut();
            d.prev(dom::now_ms());
            paint(&doc, &d);
        });
    }
    {
        let deck = deck.clone();
        let doc = document.clone();
        dom::on_click(scope, document, "showcase-next", move |_| {
            let mut d = deck.borrow_mut();
            d.next(dom::now_ms());
            paint(&doc, &d);
        });
    }

    let doc = document.clone();
    dom::start_frame_loop(scope, move |_| {
        let mut d = deck.borrow_mut();
        if d.tick(dom::now_ms()) {
            paint(&doc, &d);
        }
    });
}
