use crate::constants::{CONTACT_ENDPOINT, ID_CONTACT_FORM, SEL_SUBMIT_BUTTON, SENDING_LABEL};
use crate::core::contact::{interpret_response, BannerKind, RelayResponse, StatusBanner, SubmitError};
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> SubmitError {
    SubmitError::Network(format!("{:?}", e))
}

/// POST the form fields url-encoded and interpret the relay's JSON reply.
async fn post_form(form: &web::HtmlFormElement) -> Result<RelayResponse, SubmitError> {
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let data = web::FormData::new_with_form(form).map_err(js_err)?;
    let body = web::UrlSearchParams::new_with_str_sequence_sequence(&data).map_err(js_err)?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body);

    let resp = JsFuture::from(window.fetch_with_str_and_init(CONTACT_ENDPOINT, &init))
        .await
        .map_err(js_err)?
        .dyn_into::<web::Response>()
        .map_err(js_err)?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| SubmitError::Parse("response body is not text".into()))?;
    interpret_response(&text)
}

/// Intercept `#contact-form` submissions. No-op when the form is missing.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(ID_CONTACT_FORM)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let banner = Rc::new(RefCell::new(StatusBanner::default()));
    let doc = document.clone();
    let form_submit = form.clone();

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form_submit.clone();
        let doc = doc.clone();
        let banner = banner.clone();
        let button = form
            .query_selector(SEL_SUBMIT_BUTTON)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        let original_label = button.as_ref().and_then(|b| b.text_content());
        if let Some(b) = &button {
            b.set_disabled(true);
            b.set_text_content(Some(SENDING_LABEL));
        }

        spawn_local(async move {
            let outcome = post_form(&form).await;
            if let Err(e) = &outcome {
                log::warn!("[contact] submission failed: {}", e);
            } else {
                log::info!("[contact] submission accepted");
            }
            let kind = BannerKind::for_outcome(&outcome);
            if kind.resets_form() {
                form.reset();
            }
            overlay::show_status(&doc, kind);
            let timer = banner.borrow_mut().show(kind);
            dom::set_timeout(timer.delay_ms, move || {
                if let Some(kind) = banner.borrow_mut().expire(timer) {
                    log::debug!("[contact] {:?} banner hidden", kind);
                    overlay::hide_status(&doc);
                }
            });

            if let Some(b) = &button {
                b.set_disabled(false);
                b.set_text_content(original_label.as_deref());
            }
        });
    });
}
