use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Event, FocusEvent, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    InputEvent, SubmitEvent,
};
use yew::prelude::*;

use crate::components::notification::Severity;
use crate::config;

/// Snapshot of the form at submit time, trimmed. This is the shape a real
/// delivery endpoint would receive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub inquiry_type: String,
    pub message: String,
}

/// Aggregated validation outcome: the user-facing messages in field order
/// plus the per-field flags that drive error styling.
pub struct FieldChecks {
    pub errors: Vec<String>,
    pub name_ok: bool,
    pub email_ok: bool,
    pub message_ok: bool,
}

pub fn validate(form: &InquiryForm) -> FieldChecks {
    let mut errors = Vec::new();

    let name_ok = !form.name.is_empty();
    if !name_ok {
        errors.push("El nombre es obligatorio".to_string());
    }

    let email_ok = if form.email.is_empty() {
        errors.push("El email es obligatorio".to_string());
        false
    } else if !is_valid_email(&form.email) {
        errors.push("Por favor ingrese un email válido".to_string());
        false
    } else {
        true
    };

    let message_ok = !form.message.is_empty();
    if !message_ok {
        errors.push("El mensaje es obligatorio".to_string());
    }

    FieldChecks { errors, name_ok, email_ok, message_ok }
}

/// Same accept/reject boundary as the classic `^[^\s@]+@[^\s@]+\.[^\s@]+$`
/// check: no whitespace anywhere, a single `@` with a non-empty local
/// part, and a dot inside the domain with at least one character on each
/// side. Deliberately permissive (consecutive dots pass); real vetting is
/// the delivery endpoint's job.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Debug)]
pub struct DeliveryError;

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no se pudo entregar la consulta")
    }
}

/// Simulated round trip standing in for the delivery endpoint. The
/// serialized payload is logged so the wire shape stays visible.
async fn deliver_inquiry(inquiry: &InquiryForm) -> Result<(), DeliveryError> {
    let payload = serde_json::to_string(inquiry).map_err(|_| DeliveryError)?;
    log!("delivering inquiry:", payload);
    TimeoutFuture::new(config::INQUIRY_ROUND_TRIP_MS).await;
    Ok(())
}

fn focused_field(event: &FocusEvent) -> Option<HtmlElement> {
    event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok())
}

fn field_value(field: &HtmlElement) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(String, Severity)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(|| String::new());
    let email = use_state(|| String::new());
    let company = use_state(|| String::new());
    let phone = use_state(|| String::new());
    let inquiry_type = use_state(|| String::new());
    let message = use_state(|| String::new());

    let name_invalid = use_state_eq(|| false);
    let email_invalid = use_state_eq(|| false);
    let message_invalid = use_state_eq(|| false);
    let is_submitting = use_state(|| false);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let oninput_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let onchange_type = {
        let inquiry_type = inquiry_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            inquiry_type.set(select.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    // Floating label effect: the group keeps its raised label while the
    // control is focused or holds a value.
    let on_field_focus = Callback::from(|e: FocusEvent| {
        if let Some(group) = focused_field(&e).and_then(|f| f.parent_element()) {
            let _ = group.class_list().add_1("focused");
        }
    });
    let on_field_blur = Callback::from(|e: FocusEvent| {
        if let Some(field) = focused_field(&e) {
            if field_value(&field).is_empty() {
                if let Some(group) = field.parent_element() {
                    let _ = group.class_list().remove_1("focused");
                }
            }
        }
    });

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let phone = phone.clone();
        let inquiry_type = inquiry_type.clone();
        let message = message.clone();
        let name_invalid = name_invalid.clone();
        let email_invalid = email_invalid.clone();
        let message_invalid = message_invalid.clone();
        let is_submitting = is_submitting.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let inquiry = InquiryForm {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                company: company.trim().to_string(),
                phone: phone.trim().to_string(),
                inquiry_type: (*inquiry_type).clone(),
                message: message.trim().to_string(),
            };

            let checks = validate(&inquiry);
            name_invalid.set(!checks.name_ok);
            email_invalid.set(!checks.email_ok);
            message_invalid.set(!checks.message_ok);
            if !checks.errors.is_empty() {
                on_notify.emit((checks.errors.join("\n"), Severity::Error));
                return;
            }

            is_submitting.set(true);
            let name = name.clone();
            let email = email.clone();
            let company = company.clone();
            let phone = phone.clone();
            let inquiry_type = inquiry_type.clone();
            let message = message.clone();
            let name_invalid = name_invalid.clone();
            let email_invalid = email_invalid.clone();
            let message_invalid = message_invalid.clone();
            let is_submitting = is_submitting.clone();
            let on_notify = on_notify.clone();

            spawn_local(async move {
                match deliver_inquiry(&inquiry).await {
                    Ok(()) => {
                        on_notify.emit((
                            "¡Gracias por su consulta! Nos pondremos en contacto con usted pronto."
                                .to_string(),
                            Severity::Success,
                        ));
                        name.set(String::new());
                        email.set(String::new());
                        company.set(String::new());
                        phone.set(String::new());
                        inquiry_type.set(String::new());
                        message.set(String::new());
                        name_invalid.set(false);
                        email_invalid.set(false);
                        message_invalid.set(false);
                    }
                    Err(_) => {
                        on_notify.emit((
                            "Hubo un error al enviar su consulta. Por favor intente nuevamente."
                                .to_string(),
                            Severity::Error,
                        ));
                    }
                }
                // The submit control recovers on both outcomes.
                is_submitting.set(false);
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-name">{ "Nombre *" }</label>
                    <input
                        id="contact-name"
                        type="text"
                        class={classes!("form-input", (*name_invalid).then(|| "error"))}
                        placeholder="Su nombre"
                        value={(*name).clone()}
                        oninput={oninput_name}
                        onfocus={on_field_focus.clone()}
                        onblur={on_field_blur.clone()}
                    />
                </div>
                <div class="form-group">
                    <label for="contact-email">{ "Email *" }</label>
                    <input
                        id="contact-email"
                        type="email"
                        class={classes!("form-input", (*email_invalid).then(|| "error"))}
                        placeholder="su@email.com"
                        value={(*email).clone()}
                        oninput={oninput_email}
                        onfocus={on_field_focus.clone()}
                        onblur={on_field_blur.clone()}
                    />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-company">{ "Empresa" }</label>
                    <input
                        id="contact-company"
                        type="text"
                        class="form-input"
                        placeholder="Nombre de su empresa"
                        value={(*company).clone()}
                        oninput={oninput_company}
                        onfocus={on_field_focus.clone()}
                        onblur={on_field_blur.clone()}
                    />
                </div>
                <div class="form-group">
                    <label for="contact-phone">{ "Teléfono" }</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        class="form-input"
                        placeholder="+34 600 000 000"
                        value={(*phone).clone()}
                        oninput={oninput_phone}
                        onfocus={on_field_focus.clone()}
                        onblur={on_field_blur.clone()}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="contact-type">{ "Tipo de consulta" }</label>
                <select
                    id="contact-type"
                    class="form-select"
                    value={(*inquiry_type).clone()}
                    onchange={onchange_type}
                    onfocus={on_field_focus.clone()}
                    onblur={on_field_blur.clone()}
                >
                    <option value="" selected={inquiry_type.is_empty()}>{ "Seleccione una opción" }</option>
                    <option value="asesoria" selected={*inquiry_type == "asesoria"}>{ "Asesoría estratégica" }</option>
                    <option value="consultoria" selected={*inquiry_type == "consultoria"}>{ "Consultoría de procesos" }</option>
                    <option value="auditoria" selected={*inquiry_type == "auditoria"}>{ "Auditoría" }</option>
                    <option value="otro" selected={*inquiry_type == "otro"}>{ "Otro" }</option>
                </select>
            </div>
            <div class="form-group">
                <label for="contact-message">{ "Mensaje *" }</label>
                <textarea
                    id="contact-message"
                    class={classes!("form-textarea", (*message_invalid).then(|| "error"))}
                    rows="5"
                    placeholder="Cuéntenos sobre su proyecto"
                    value={(*message).clone()}
                    oninput={oninput_message}
                    onfocus={on_field_focus}
                    onblur={on_field_blur}
                />
            </div>
            <button type="submit" class="btn-submit" disabled={*is_submitting}>
                if *is_submitting {
                    <i class="fas fa-spinner fa-spin"></i>
                    <span>{ "Enviando..." }</span>
                } else {
                    <span>{ "Enviar Consulta" }</span>
                }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> InquiryForm {
        InquiryForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..InquiryForm::default()
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@empresa.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("nombre.apellido@sub.dominio.es"));
    }

    #[test]
    fn keeps_the_permissive_boundary() {
        // The historical pattern lets consecutive dots through.
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("no-arroba.com"));
        assert!(!is_valid_email("@dominio.com"));
        assert!(!is_valid_email("ana@dominio"));
        assert!(!is_valid_email("ana@dominio."));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana maria@dominio.com"));
        assert!(!is_valid_email("ana@dos@dominio.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn missing_name_aborts_with_a_single_error() {
        let checks = validate(&form("", "a@b.com", "hola"));
        assert_eq!(checks.errors, vec!["El nombre es obligatorio".to_string()]);
        assert!(!checks.name_ok);
        assert!(checks.email_ok);
        assert!(checks.message_ok);
    }

    #[test]
    fn malformed_email_flags_only_the_email_field() {
        let checks = validate(&form("Ana", "not-an-email", "hola"));
        assert_eq!(checks.errors, vec!["Por favor ingrese un email válido".to_string()]);
        assert!(checks.name_ok);
        assert!(!checks.email_ok);
        assert!(checks.message_ok);
    }

    #[test]
    fn empty_form_collects_errors_in_field_order() {
        let checks = validate(&form("", "", ""));
        assert_eq!(
            checks.errors,
            vec![
                "El nombre es obligatorio".to_string(),
                "El email es obligatorio".to_string(),
                "El mensaje es obligatorio".to_string(),
            ]
        );
    }

    #[test]
    fn complete_form_passes() {
        let checks = validate(&form("Ana", "ana@empresa.com", "hola"));
        assert!(checks.errors.is_empty());
        assert!(checks.name_ok && checks.email_ok && checks.message_ok);
    }

    #[test]
    fn payload_uses_the_wire_field_names() {
        let mut inquiry = form("Ana", "ana@empresa.com", "hola");
        inquiry.inquiry_type = "asesoria".to_string();
        let payload = serde_json::to_string(&inquiry).unwrap();
        assert!(payload.contains("\"type\":\"asesoria\""));
        assert!(!payload.contains("inquiry_type"));
    }
}
