use crate::constants::*;
use crate::dom;
use crate::relay::EmailJsRelay;
use crate::reveal;
use site_core::timeline::SUCCESS_PANEL;
use site_core::{
    validate_field, ContactForm, ContactPayload, FormField, FormView, RelayTemplates, SubmitError,
};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct DomFormView {
    form: web::HtmlFormElement,
    success: Option<web::HtmlElement>,
    submit: Option<web::HtmlButtonElement>,
    idle_label: String,
}

impl DomFormView {
    pub fn new(document: &web::Document, form: web::HtmlFormElement) -> Self {
        let submit = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        let idle_label = submit.as_ref().map(|b| b.inner_html()).unwrap_or_default();
        Self {
            success: dom::by_id(document, FORM_SUCCESS_ID),
            form,
            submit,
            idle_label,
        }
    }

    fn input(&self, field: FormField) -> Option<web::Element> {
        self.form
            .query_selector(&format!("[name=\"{}\"]", field.name()))
            .ok()
            .flatten()
    }

    /// Current field values as the relay payload. File entries and names
    /// outside the contact fields are skipped.
    pub fn read_payload(&self) -> ContactPayload {
        let Ok(data) = web::FormData::new_with_form(&self.form) else {
            log::warn!("[form] FormData unavailable; sending empty payload");
            return ContactPayload::default();
        };
        let entries = js_sys::try_iter(&data).ok().flatten().into_iter().flatten();
        ContactPayload::from_pairs(entries.filter_map(|entry| {
            let pair = entry.ok()?.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        }))
    }
}

impl FormView for DomFormView {
    fn mark_invalid(&self, field: FormField, invalid: bool) {
        if let Some(input) = self.input(field) {
            dom::set_class(&input, CLASS_INVALID, invalid);
        }
    }

    fn set_submitting(&self, submitting: bool) {
        if let Some(button) = &self.submit {
            if submitting {
                button.set_inner_html(SUBMIT_SENDING_HTML);
            } else {
                button.set_inner_html(&self.idle_label);
            }
            button.set_disabled(submitting);
        }
    }

    fn show_success(&self) {
        dom::set_display(&self.form, "none");
        if let Some(panel) = &self.success {
            dom::set_display(panel, "block");
            reveal::play(panel, &SUCCESS_PANEL);
        }
    }

    fn show_form(&self) {
        dom::set_display(&self.form, "block");
        if let Some(panel) = &self.success {
            dom::set_display(panel, "none");
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web::window() {
            _ = w.alert_with_message(message);
        }
    }
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form_el) = dom::by_id::<web::HtmlFormElement>(document, CONTACT_FORM_ID) else {
        log::debug!("[form] no #{}; contact form disabled", CONTACT_FORM_ID);
        return;
    };
    let contact = Rc::new(ContactForm::new(
        EmailJsRelay::from_document(document),
        DomFormView::new(document, form_el.clone()),
        RelayTemplates::default(),
    ));

    dom::add_listener(&form_el, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let contact = contact.clone();
        let payload = contact.view().read_payload();
        spawn_local(async move {
            match contact.submit(payload).await {
                Ok(delay) => {
                    let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    let contact = contact.clone();
                    dom::after(ms, move || contact.revert());
                }
                // flagged inline or already in flight
                Err(SubmitError::Invalid(_)) | Err(SubmitError::Busy) => {}
                Err(e) => log::debug!("[form] submission ended with {:?}", e.failed_step()),
            }
        });
    });

    wire_inline_feedback(&form_el);
}

fn input_value(el: &web::Element) -> String {
    js_sys::Reflect::get(el, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Per-input check on blur for the named contact fields.
fn wire_inline_feedback(form: &web::HtmlFormElement) {
    for field in FormField::ALL {
        let Ok(Some(input)) = form.query_selector(&format!("[name=\"{}\"]", field.name())) else {
            continue;
        };
        let target = input.clone();
        dom::add_listener(&input, "blur", move |_: web::Event| {
            let required = target.has_attribute("required") || field.is_required();
            let ok = validate_field(field, &input_value(&target), required);
            dom::set_class(&target, CLASS_INVALID, !ok);
        });
    }
}

/// Parent of each `.form-control` carries `focused` while focused or filled.
pub fn wire_focus_styling(document: &web::Document) {
    for input in dom::query_all(document, FORM_CONTROL_SELECTOR) {
        let Some(parent) = input.parent_element() else {
            continue;
        };
        let parent_focus = parent.clone();
        dom::add_listener(&input, "focus", move |_: web::Event| {
            dom::set_class(&parent_focus, CLASS_FOCUSED, true);
        });
        let target = input.clone();
        dom::add_listener(&input, "blur", move |_: web::Event| {
            if input_value(&target).is_empty() {
                dom::set_class(&parent, CLASS_FOCUSED, false);
            }
        });
    }
}
