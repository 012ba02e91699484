use super::dom;
use crate::error::IdeaError;
use crate::gemini::{build_time_api_key, GeminiClient};
use crate::i18n::{text, Language};
use crate::idea::{IdeaAdapter, IdeaRequest};
use crate::lifecycle::Scope;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct FormDom {
    document: web::Document,
}

impl FormDom {
    fn input_value(&self, id: &str) -> String {
        dom::by_id(&self.document, id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_loading(&self, loading: bool, lang: Language) {
        if let Some(button) = dom::by_id(&self.document, "idea-submit") {
            let key = if loading { "ideaLoading" } else { "ideaButton" };
            button.set_text_content(text(key, lang));
            if loading {
                _ = button.set_attribute("disabled", "");
            } else {
                _ = button.remove_attribute("disabled");
            }
        }
    }

    fn show_error(&self, message: Option<&str>) {
        if let Some(el) = dom::html_by_id(&self.document, "idea-error") {
            el.set_text_content(message);
            el.set_hidden(message.is_none());
        }
    }

    fn show_ideas(&self, ideas: &[String]) {
        let (Some(results), Some(list)) = (
            dom::html_by_id(&self.document, "idea-results"),
            dom::by_id(&self.document, "idea-list"),
        ) else {
            return;
        };
        list.set_text_content(None);
        for idea in ideas {
            if let Ok(li) = self.document.create_element("li") {
                li.set_text_content(Some(idea));
                _ = list.append_child(&li);
            }
        }
        results.set_hidden(ideas.is_empty());
    }
}

fn error_message(err: &IdeaError, lang: Language) -> String {
    let key = match err {
        IdeaError::Validation => "ideaValidationError",
        IdeaError::Service => "ideaServiceError",
    };
    text(key, lang).map(str::to_string).unwrap_or_else(|| err.to_string())
}

/// Idea form: validate, call Gemini, render the parsed list.
pub fn mount(scope: &mut Scope, document: &web::Document, language: Rc<Cell<Language>>) {
    let Some(form) = dom::by_id(document, "idea-form") else {
        return;
    };
    let api_key = build_time_api_key().unwrap_or_else(|| {
        log::warn!("[idea] GEMINI_API_KEY was not set at build time, requests will fail");
        ""
    });
    mount_with(scope, form, document, language, IdeaAdapter::new(GeminiClient::new(api_key)));
}

fn mount_with(
    scope: &mut Scope,
    form: web::Element,
    document: &web::Document,
    language: Rc<Cell<Language>>,
    adapter: IdeaAdapter<GeminiClient>,
) {
    let adapter = Rc::new(adapter);
    let view = Rc::new(FormDom {
        document: document.clone(),
    });
    let in_flight = Rc::new(Cell::new(false));
    // results that land after teardown are dropped
    let alive = Rc::new(Cell::new(true));
    {
        let alive = alive.clone();
        scope.defer(move || alive.set(false));
    }

    dom::listen(scope, &form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if in_flight.get() {
            return;
        }
        let lang = language.get();
        let business_type = view.input_value("idea-business-type");
        let goal = view.input_value("idea-goal");
        view.show_ideas(&[]);
        if let Err(e) = IdeaRequest::new(&business_type, &goal, lang) {
            view.show_error(Some(&error_message(&e, lang)));
            return;
        }
        view.show_error(None);
        view.set_loading(true, lang);
        in_flight.set(true);

        let (adapter, view, in_flight, alive) =
            (adapter.clone(), view.clone(), in_flight.clone(), alive.clone());
        spawn_local(async move {
            let result = adapter.generate(&business_type, &goal, lang).await;
            in_flight.set(false);
            if !alive.get() {
                return;
            }
            view.set_loading(false, lang);
            match result {
                Ok(ideas) => view.show_ideas(&ideas),
                Err(e) => view.show_error(Some(&error_message(&e, lang))),
            }
        });
    });
}
