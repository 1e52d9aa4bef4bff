//! Contact section: detail cards plus the (simulated) message form.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::contact::{
    ContactForm, ContactTiming, FixedDelaySender, MessageSender, SubmitStatus,
};
use folio_core::content::CONTACT_DETAILS;
use folio_core::reveal::SectionReveal;

use super::section::{SectionHeader, report_visibility, slot_style};

/// Message-send capability handed to the form via context. The shipped
/// implementation is the fixed-delay fake; a real transport slots in here
/// without touching the form component.
#[derive(Clone)]
pub struct SenderHandle(pub Arc<dyn MessageSender>);

impl SenderHandle {
    pub fn simulated(timing: ContactTiming) -> Self {
        Self(Arc::new(FixedDelaySender::new(timing.submit_delay)))
    }
}

#[component]
pub fn Contact() -> Element {
    let reveal = use_signal(SectionReveal::new);
    let state = reveal.read().state();

    let mut form = use_signal(ContactForm::new);
    let timing = use_context::<ContactTiming>();
    let sender = use_context::<SenderHandle>();

    let status = form.read().status().clone();
    let submitting = status == SubmitStatus::Submitting;

    let submit = move |_| {
        let payload = match form.write().begin_submit() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!("contact submit rejected: {err}");
                return;
            }
        };
        tracing::info!("sending contact message from {}", payload.email);

        let sender = sender.clone();
        // The task is scoped to this component, so view teardown cancels the
        // banner timer along with it.
        spawn(async move {
            let outcome = sender.0.send(payload).await;
            form.write().complete_submit(outcome);

            tokio::time::sleep(timing.banner_duration).await;
            form.write().dismiss_banner();
        });
    };

    rsx! {
        section {
            id: "contact",
            class: "page-section",
            onvisible: move |evt| report_visibility(reveal, "contact", &evt.data()),

            div { class: "section-backdrop backdrop-secondary" }
            div { class: "blur-circle circle-primary at-top-right" }
            div { class: "blur-circle circle-secondary at-bottom-left" }

            div {
                class: "section-body",

                SectionHeader {
                    title: "Get In Touch",
                    subtitle: "Have a project in mind or just want to say hello? I'd love to hear from you.",
                    state,
                }

                div {
                    class: "contact-grid",

                    div {
                        class: "contact-details slot",
                        style: slot_style(2, state),
                        for detail in CONTACT_DETAILS {
                            a {
                                class: "glass contact-detail",
                                href: "{detail.link}",
                                span { class: "contact-glyph", "{detail.glyph}" }
                                div {
                                    h3 { class: "contact-detail-title", "{detail.title}" }
                                    p { class: "contact-detail-text", "{detail.detail}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "glass form-card slot",
                        style: slot_style(3, state),

                        if status == SubmitStatus::Succeeded {
                            div {
                                class: "form-banner banner-success",
                                "Your message has been sent successfully. I'll get back to you soon!"
                            }
                        }
                        if let SubmitStatus::Failed(reason) = &status {
                            div { class: "form-banner banner-error", "{reason}" }
                        }

                        div {
                            class: "form-grid",
                            div {
                                class: "form-field",
                                label { r#for: "name", "Your Name" }
                                input {
                                    id: "name",
                                    r#type: "text",
                                    placeholder: "John Doe",
                                    value: "{form.read().name}",
                                    oninput: move |evt| form.write().set_name(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "email", "Your Email" }
                                input {
                                    id: "email",
                                    r#type: "email",
                                    placeholder: "john@example.com",
                                    value: "{form.read().email}",
                                    oninput: move |evt| form.write().set_email(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "message", "Your Message" }
                            textarea {
                                id: "message",
                                rows: "5",
                                placeholder: "Hello, I'd like to talk about...",
                                value: "{form.read().message}",
                                oninput: move |evt| form.write().set_message(evt.value()),
                            }
                        }

                        button {
                            class: "btn btn-primary form-submit",
                            disabled: submitting,
                            onclick: submit,
                            if submitting { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }
        }
    }
}
