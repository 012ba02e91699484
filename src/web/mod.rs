use crate::config::{data_attribute_name, SiteConfig, OVERRIDE_KEYS};
use crate::header::HeaderVisibility;
use crate::i18n::{text, Language};
use crate::lifecycle::Scope;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod about;
mod accordion;
mod cursor;
mod dom;
mod header;
mod hero;
mod idea_form;
mod overlay;
mod services;
mod showcase;
mod smooth_scroll;
mod titles;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

struct App {
    document: web::Document,
    config: SiteConfig,
    header: Rc<RefCell<HeaderVisibility>>,
    narrow: bool,
    /// Desktop-only effects (smooth scroll, hiding header, cursor), remounted
    /// when the viewport crosses the breakpoint.
    desktop: Option<Scope>,
    _page: Scope,
}

impl App {
    fn set_narrow(&mut self, narrow: bool) {
        if narrow == self.narrow && (narrow || self.desktop.is_some()) {
            return;
        }
        self.narrow = narrow;
        self.header.borrow_mut().set_narrow(narrow);
        // dispose before remounting so the body/container styles start clean
        self.desktop = None;
        if !narrow {
            self.desktop = Some(mount_desktop(&self.document, &self.config, &self.header));
        }
        log::info!("[app] layout {}", if narrow { "narrow" } else { "desktop" });
    }
}

fn read_config(document: &web::Document) -> SiteConfig {
    let mut config = SiteConfig::default();
    let Some(root) = document.get_element_by_id("root") else {
        return config;
    };
    for key in OVERRIDE_KEYS {
        let Some(raw) = root.get_attribute(&data_attribute_name(key)) else {
            continue;
        };
        if let Err(e) = config.apply_override(key, &raw) {
            log::warn!("[config] ignoring override: {e}");
        }
    }
    config
}

fn mount_desktop(
    document: &web::Document,
    config: &SiteConfig,
    header_state: &Rc<RefCell<HeaderVisibility>>,
) -> Scope {
    let mut scope = Scope::new("desktop");
    header::mount_visibility(&mut scope, document, header_state.clone());
    smooth_scroll::mount(&mut scope, document, config.scroll);
    cursor::mount(&mut scope, document, config.cursor);
    scope
}

fn apply_language(document: &web::Document, lang: Language) {
    if let Some(html) = document.document_element() {
        _ = html.set_attribute("lang", lang.code());
    }
    for el in dom::query_all(document, "[data-i18n]") {
        if let Some(s) = el.get_attribute("data-i18n").and_then(|k| text(&k, lang)) {
            el.set_text_content(Some(s));
        }
    }
    for el in dom::query_all(document, "[data-i18n-placeholder]") {
        if let Some(s) = el.get_attribute("data-i18n-placeholder").and_then(|k| text(&k, lang)) {
            _ = el.set_attribute("placeholder", s);
        }
    }
    for el in dom::query_all(document, "[data-i18n-aria]") {
        if let Some(s) = el.get_attribute("data-i18n-aria").and_then(|k| text(&k, lang)) {
            _ = el.set_attribute("aria-label", s);
        }
    }
    dom::set_text(document, "language-switcher", lang.switch_label());
    services::apply_language(document, lang);
    showcase::apply_language(document, lang);
}

fn wire_toggles(scope: &mut Scope, document: &web::Document, language: Rc<Cell<Language>>) {
    {
        let doc = document.clone();
        dom::on_click(scope, document, "language-switcher", move |_| {
            let next = language.get().toggled();
            language.set(next);
            apply_language(&doc, next);
            log::info!("[i18n] language {}", next.code());
        });
    }
    let doc = document.clone();
    dom::on_click(scope, document, "theme-switcher", move |_| {
        let Some(html) = doc.document_element() else {
            return;
        };
        let dark = html.get_attribute("data-theme").as_deref() == Some("dark");
        let next = if dark { "light" } else { "dark" };
        _ = html.set_attribute("data-theme", next);
        if let Some(button) = dom::by_id(&doc, "theme-switcher") {
            let label = if dark { "Switch to dark mode" } else { "Switch to light mode" };
            _ = button.set_attribute("aria-label", label);
        }
    });
}

fn wire_global_keydown(scope: &mut Scope, document: &web::Document, close_overlay: overlay::Closer) {
    dom::listen(scope, document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            if let Some(close) = close_overlay.borrow_mut().as_mut() {
                close();
            }
        }
    });
}

fn wire_resize(scope: &mut Scope) {
    let Some(window) = web::window() else {
        return;
    };
    dom::listen_passive(scope, &window, "resize", move |_: web::Event| {
        let width = dom::viewport_width();
        APP.with(|app| {
            if let Some(app) = app.borrow_mut().as_mut() {
                let narrow = app.config.is_narrow(width);
                app.set_narrow(narrow);
            }
        });
    });
}

fn wire_pagehide(scope: &mut Scope) {
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(scope, &window, "pagehide", move |_: web::Event| {
        // defer: the listener is owned by the scope being torn down
        spawn_local(async {
            teardown();
        });
    });
}

/// Tear down every effect: listeners removed, frame loops cancelled,
/// particles and moved overlay elements cleaned up.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if app.is_none() {
        return;
    }
    drop(app);
    log::info!(
        "[app] torn down; listeners={} frame_loops={}",
        dom::live_listeners(),
        dom::live_frame_loops()
    );
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = read_config(&document);
    let narrow = config.is_narrow(dom::viewport_width());
    let language = Rc::new(Cell::new(
        document
            .document_element()
            .and_then(|html| html.get_attribute("lang"))
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default(),
    ));

    services::render(&document);
    showcase::render(&document);
    apply_language(&document, language.get());

    let mut page = Scope::new("page");
    let header_state = Rc::new(RefCell::new(HeaderVisibility::new(config.header, narrow)));
    header::mount_nav(&mut page, &document);
    wire_toggles(&mut page, &document, language.clone());
    hero::mount(&mut page, &document, &config, language.clone());
    titles::mount(&mut page, &document, language.clone());
    accordion::mount(&mut page, &document, config.reveal);
    let close_overlay = overlay::mount(&mut page, &document, config.reveal, language.clone());
    wire_global_keydown(&mut page, &document, close_overlay);
    about::mount(&mut page, &document);
    showcase::mount(&mut page, &document, config.deck);
    idea_form::mount(&mut page, &document, language);
    wire_resize(&mut page);
    wire_pagehide(&mut page);

    let desktop = (!narrow).then(|| mount_desktop(&document, &config, &header_state));
    log::info!(
        "[app] mounted; narrow={narrow} listeners={} frame_loops={}",
        dom::live_listeners(),
        dom::live_frame_loops()
    );
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            document,
            config,
            header: header_state,
            narrow,
            desktop,
            _page: page,
        });
    });
    Ok(())
}
