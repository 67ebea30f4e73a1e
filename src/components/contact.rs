use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use wasm_bindgen_futures::spawn_local;

use crate::components::notification::{Notice, NoticeKind};
use crate::content;
use crate::lead::{submit_lead, Lead, LeadServiceHandle, SubmitError, SubmitState};
use crate::submissions::SubmissionsCache;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub service: LeadServiceHandle,
    pub cache: SubmissionsCache,
    /// Set when a category card is clicked; prefills the requirement field.
    #[prop_or_default]
    pub prefill: Option<AttrValue>,
}

fn notice_for(state: &SubmitState) -> Option<(NoticeKind, &'static str)> {
    match state {
        SubmitState::Idle | SubmitState::Submitting => None,
        SubmitState::Succeeded => Some((
            NoticeKind::Success,
            "Your enquiry has been submitted! We'll reach out soon.",
        )),
        SubmitState::Failed(SubmitError::Validation) => {
            Some((NoticeKind::Error, "Please fill in all fields."))
        }
        SubmitState::Failed(_) => Some((
            NoticeKind::Error,
            "Something went wrong. Please call us directly at +91 99347 56863.",
        )),
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let book_requirement = use_state(String::new);
    let submit_state = use_state(|| SubmitState::Idle);

    // Apply a category prefill whenever it changes.
    {
        let book_requirement = book_requirement.clone();
        use_effect_with_deps(
            move |prefill: &Option<AttrValue>| {
                if let Some(prefill) = prefill {
                    book_requirement.set(format!("I'm looking for: {}", prefill));
                }
                || ()
            },
            props.prefill.clone(),
        );
    }

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let oninput_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let oninput_requirement = {
        let book_requirement = book_requirement.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            book_requirement.set(input.value());
        })
    };

    let onclick_submit = {
        let name = name.clone();
        let phone = phone.clone();
        let book_requirement = book_requirement.clone();
        let submit_state = submit_state.clone();
        let service = props.service.clone();
        let cache = props.cache.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // The button is disabled while submitting, but the state flag is
            // what actually guarantees a single in-flight call.
            if submit_state.is_submitting() {
                return;
            }

            let lead = Lead::new(
                (*name).clone(),
                (*phone).clone(),
                (*book_requirement).clone(),
            );
            if !lead.is_complete() {
                submit_state.set(SubmitState::Failed(SubmitError::Validation));
                return;
            }

            submit_state.set(SubmitState::Submitting);
            let name = name.clone();
            let phone = phone.clone();
            let book_requirement = book_requirement.clone();
            let submit_state = submit_state.clone();
            let service = service.clone();
            let cache = cache.clone();
            spawn_local(async move {
                match submit_lead(&service, &lead).await {
                    Ok(()) => {
                        name.set(String::new());
                        phone.set(String::new());
                        book_requirement.set(String::new());
                        cache.invalidate();
                        submit_state.set(SubmitState::Succeeded);
                    }
                    Err(err) => {
                        gloo_console::log!("Lead submission failed:", err.to_string());
                        // Fields keep their values so the user can retry.
                        submit_state.set(SubmitState::Failed(err));
                    }
                }
            });
        })
    };

    let dismiss_notice = {
        let submit_state = submit_state.clone();
        Callback::from(move |_| {
            submit_state.set(SubmitState::Idle);
        })
    };

    let is_submitting = submit_state.is_submitting();

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1rem;
                    background: #eef4fb;
                }
                .contact-inner {
                    max-width: 640px;
                    margin: 0 auto;
                }
                .contact-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .contact-header h2 {
                    font-size: 2.2rem;
                    color: #102a52;
                    margin: 0.5rem 0;
                }
                .contact-header p {
                    color: #6b7687;
                }
                .contact-pills {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2rem;
                    flex-wrap: wrap;
                }
                .contact-pill {
                    flex: 1;
                    min-width: 220px;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #ffffff;
                    border: 1px solid #e5e9f0;
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                    text-decoration: none;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }
                .contact-pill:hover {
                    border-color: rgba(16, 42, 82, 0.3);
                    box-shadow: 0 6px 18px rgba(16, 42, 82, 0.12);
                }
                .contact-pill .pill-label {
                    font-size: 0.75rem;
                    color: #6b7687;
                }
                .contact-pill .pill-value {
                    font-weight: 700;
                    color: #102a52;
                    font-size: 0.9rem;
                }
                .contact-form-card {
                    background: #ffffff;
                    border: 1px solid #e5e9f0;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 8px 28px rgba(16, 42, 82, 0.08);
                }
                .form-field {
                    margin-bottom: 1.25rem;
                }
                .form-field label {
                    display: block;
                    font-weight: 600;
                    font-size: 0.85rem;
                    color: #243b5e;
                    margin-bottom: 0.4rem;
                }
                .form-field label .required {
                    color: #c43030;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid #d6dce5;
                    border-radius: 10px;
                    padding: 0.8rem 1rem;
                    font-size: 0.95rem;
                    font-family: inherit;
                    resize: none;
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #3a6fb8;
                    box-shadow: 0 0 0 3px rgba(58, 111, 184, 0.15);
                }
                .submit-button {
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 10px;
                    background: #d9a514;
                    color: #1c1708;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.15s ease;
                }
                .submit-button:hover:not(:disabled) {
                    background: #c29310;
                    transform: translateY(-1px);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .submit-spinner {
                    display: inline-block;
                    width: 14px;
                    height: 14px;
                    margin-right: 0.5rem;
                    border: 2px solid rgba(28, 23, 8, 0.3);
                    border-top-color: #1c1708;
                    border-radius: 50%;
                    animation: contact-spin 0.8s linear infinite;
                    vertical-align: -2px;
                }
                @keyframes contact-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
            <div class="contact-inner">
                <div class="contact-header">
                    <span class="section-label">{"Contact Us"}</span>
                    <h2>{"Get in Touch"}</h2>
                    <p>{"Tell us what you need and we'll get back to you quickly."}</p>
                </div>

                <div class="contact-pills">
                    <a href={content::PHONE_HREF} class="contact-pill">
                        <span>{"📞"}</span>
                        <span>
                            <div class="pill-label">{"Call us directly"}</div>
                            <div class="pill-value">{ content::PHONE }</div>
                        </span>
                    </a>
                    <a href={content::WHATSAPP_HREF} target="_blank" rel="noopener noreferrer" class="contact-pill">
                        <span>{"💬"}</span>
                        <span>
                            <div class="pill-label">{"WhatsApp us"}</div>
                            <div class="pill-value">{ content::PHONE }</div>
                        </span>
                    </a>
                </div>

                <div class="contact-form-card">
                    {
                        if let Some((kind, message)) = notice_for(&submit_state) {
                            html! { <Notice {kind} {message} on_dismiss={dismiss_notice.clone()} /> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="form-field">
                        <label for="name">
                            {"Your Name "}<span class="required">{"*"}</span>
                        </label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Enter your full name"
                            value={(*name).clone()}
                            oninput={oninput_name}
                        />
                    </div>
                    <div class="form-field">
                        <label for="phone">
                            {"Phone Number "}<span class="required">{"*"}</span>
                        </label>
                        <input
                            id="phone"
                            type="tel"
                            placeholder="+91 XXXXX XXXXX"
                            value={(*phone).clone()}
                            oninput={oninput_phone}
                        />
                    </div>
                    <div class="form-field">
                        <label for="book-requirement">
                            {"Book Requirement "}<span class="required">{"*"}</span>
                        </label>
                        <textarea
                            id="book-requirement"
                            rows="4"
                            placeholder="E.g., NCERT Class 10 Science, UPSC preparation books..."
                            value={(*book_requirement).clone()}
                            oninput={oninput_requirement}
                        />
                    </div>
                    <button
                        class="submit-button"
                        disabled={is_submitting}
                        onclick={onclick_submit}
                    >
                        {
                            if is_submitting {
                                html! { <><span class="submit-spinner"></span>{"Submitting..."}</> }
                            } else {
                                html! { {"Send Enquiry"} }
                            }
                        }
                    </button>
                </div>
            </div>
        </section>
    }
}
