use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::handoff;
use crate::lead::{validate, ContactDraft, ContactErrors, ContactField};
use crate::Route;

/// Lead capture form in the hero section. A valid submission becomes the
/// handoff record the assessment wizard picks up.
#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator().unwrap();
    let draft = use_state(ContactDraft::default);
    let errors = use_state(ContactErrors::default);
    let is_submitting = use_state(|| false);

    let on_field_input = |field: ContactField| {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.update_field(field, input.value());
            draft.set(next);
            // Clear the field's error as soon as the user starts typing.
            let mut next_errors = (*errors).clone();
            next_errors.clear(field);
            errors.set(next_errors);
        })
    };

    let on_message_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.update_field(ContactField::Message, textarea.value());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let validation = validate(&draft);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }

            is_submitting.set(true);
            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Models the eventual real network call.
                TimeoutFuture::new(1_000).await;

                let record = (*draft).clone().into_record(Utc::now());
                handoff::store(&record);
                info!("lead captured for {}", record.company);

                is_submitting.set(false);
                navigator.push(&Route::Assessment);
            });
        })
    };

    let field_error = |field: ContactField| -> Html {
        match errors.message_for(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    html! {
        <section id="home" class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        padding: 7rem 1.5rem 4rem;
                        background: linear-gradient(135deg, #e7ece9 0%, #cfe1d4 55%, #b6cdbd 100%);
                    }
                    html.dark .hero-section {
                        background: linear-gradient(135deg, #121a17 0%, #17201d 55%, #1d2a26 100%);
                    }
                    .hero-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                        min-height: 80vh;
                    }
                    @media (min-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid rgba(90, 143, 104, 0.5);
                        background: rgba(132, 169, 140, 0.25);
                        border-radius: 999px;
                        padding: 0.45rem 1rem;
                        font-size: 0.8rem;
                        font-weight: 600;
                        letter-spacing: 0.03em;
                        color: #2f5c3c;
                    }
                    html.dark .hero-badge { color: #a8c8b2; }
                    .hero-title {
                        font-size: clamp(2.1rem, 5vw, 3.6rem);
                        font-weight: 700;
                        line-height: 1.12;
                        color: #17201d;
                        margin: 1.2rem 0 1rem;
                    }
                    html.dark .hero-title { color: #f2f5f3; }
                    .hero-title span {
                        display: block;
                        color: #4c7a58;
                    }
                    html.dark .hero-title span { color: #8fb89b; }
                    .hero-pitch {
                        font-size: 1.1rem;
                        line-height: 1.6;
                        color: #31403a;
                        max-width: 36rem;
                    }
                    html.dark .hero-pitch { color: #c4d4cb; }
                    .hero-pitch strong { color: #2f5c3c; }
                    html.dark .hero-pitch strong { color: #a8c8b2; }
                    .hero-form-card {
                        background: rgba(255, 255, 255, 0.95);
                        border: 1px solid rgba(132, 169, 140, 0.35);
                        border-radius: 1.5rem;
                        box-shadow: 0 24px 48px rgba(16, 24, 22, 0.18);
                        padding: 2rem;
                        max-width: 32rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    html.dark .hero-form-card {
                        background: rgba(29, 42, 38, 0.92);
                        border-color: rgba(132, 169, 140, 0.25);
                    }
                    .hero-form-card h2 {
                        font-size: 1.45rem;
                        text-align: center;
                        color: #17201d;
                        margin: 0 0 0.3rem;
                    }
                    html.dark .hero-form-card h2 { color: #f2f5f3; }
                    .hero-form-sub {
                        text-align: center;
                        font-size: 0.9rem;
                        color: #5d6f68;
                        margin-bottom: 1.4rem;
                    }
                    html.dark .hero-form-sub { color: #9db3a8; }
                    .form-field { margin-bottom: 1.1rem; }
                    .form-field label {
                        display: block;
                        font-size: 0.88rem;
                        font-weight: 500;
                        margin-bottom: 0.4rem;
                        color: #2e3d37;
                    }
                    html.dark .form-field label { color: #c4d4cb; }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.6rem;
                        border: 1px solid #b6c4bd;
                        background: #fff;
                        color: #17201d;
                        font-size: 0.95rem;
                        font-family: inherit;
                    }
                    html.dark .form-field input,
                    html.dark .form-field textarea {
                        background: #24322d;
                        border-color: #3c4f47;
                        color: #e7ece9;
                    }
                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #5a8f68;
                        box-shadow: 0 0 0 3px rgba(90, 143, 104, 0.2);
                    }
                    .field-error {
                        margin: 0.35rem 0 0;
                        font-size: 0.82rem;
                        color: #b3402e;
                    }
                    html.dark .field-error { color: #e08070; }
                    .hero-submit {
                        width: 100%;
                        background: #5a8f68;
                        color: #fff;
                        border: none;
                        border-radius: 0.75rem;
                        padding: 0.95rem 1.5rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .hero-submit:hover:not(:disabled) {
                        background: #4c7a58;
                        transform: scale(1.02);
                    }
                    .hero-submit:disabled { opacity: 0.65; cursor: not-allowed; }
                    .trust-note {
                        text-align: center;
                        font-size: 0.76rem;
                        color: #5d6f68;
                        margin-top: 0.9rem;
                    }
                    html.dark .trust-note { color: #9db3a8; }
                "#}
            </style>
            <div class="hero-grid">
                <div>
                    <div class="hero-badge">{"\u{26A1} Stop Doing Busy Work"}</div>
                    <h1 class="hero-title">
                        {"Get Back to "}
                        <span>{"Running Your Business"}</span>
                    </h1>
                    <p class="hero-pitch">
                        {"Stop wrestling with software that doesn't fit your business. \
                          I bring enterprise-level automation to small businesses at \
                          prices that actually make sense. "}
                        <strong>{"Save 10+ hours per week"}</strong>
                        {" on repetitive tasks."}
                    </p>
                </div>

                <div class="hero-form-card">
                    <h2>{"Start Your Free Business Assessment"}</h2>
                    <p class="hero-form-sub">
                        {"See how much time you could save with automation"}
                    </p>
                    <form onsubmit={on_submit}>
                        <div class="form-field">
                            <label for="hero-name">{"Your Name"}</label>
                            <input
                                type="text"
                                id="hero-name"
                                placeholder="John Smith"
                                value={draft.name.clone()}
                                oninput={on_field_input(ContactField::Name)}
                            />
                            { field_error(ContactField::Name) }
                        </div>
                        <div class="form-field">
                            <label for="hero-email">{"Your Email"}</label>
                            <input
                                type="email"
                                id="hero-email"
                                placeholder="john@company.com"
                                value={draft.email.clone()}
                                oninput={on_field_input(ContactField::Email)}
                            />
                            { field_error(ContactField::Email) }
                        </div>
                        <div class="form-field">
                            <label for="hero-company">{"Company Name"}</label>
                            <input
                                type="text"
                                id="hero-company"
                                placeholder="Your Company Inc."
                                value={draft.company.clone()}
                                oninput={on_field_input(ContactField::Company)}
                            />
                            { field_error(ContactField::Company) }
                        </div>
                        <div class="form-field">
                            <label for="hero-message">
                                {"What's your biggest time-waster? (Optional)"}
                            </label>
                            <textarea
                                id="hero-message"
                                rows="3"
                                placeholder="Manual data entry, customer support, social media automation..."
                                value={draft.message.clone()}
                                oninput={on_message_input}
                            />
                        </div>
                        <button type="submit" class="hero-submit" disabled={*is_submitting}>
                            {
                                if *is_submitting {
                                    "Processing..."
                                } else {
                                    "Start My Free Assessment"
                                }
                            }
                        </button>
                        <p class="trust-note">
                            {"\u{2713} Takes 5 minutes \u{2022} \u{2713} Personalized results \u{2022} \u{2713} No spam, ever"}
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}
