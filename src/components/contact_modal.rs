use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const SERVICES: [&str; 7] = [
    "Workflow Automation",
    "AI Customer Support",
    "Smart Reporting",
    "Custom Business Tools",
    "Professional Websites",
    "System Integration",
    "Other / Not Sure",
];

const BUDGET_RANGES: [&str; 5] = [
    "Under $5,000",
    "$5,000 - $15,000",
    "$15,000 - $30,000",
    "$30,000+",
    "Let's Discuss",
];

#[derive(Clone, Default, PartialEq)]
struct RequestDraft {
    name: String,
    email: String,
    company: String,
    phone: String,
    service: String,
    budget: String,
    message: String,
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Consultation request modal. Fully independent of the lead handoff record:
/// it simulates its own submission and resets itself after showing a
/// confirmation.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let draft = use_state(RequestDraft::default);
    let is_submitting = use_state(|| false);
    let is_submitted = use_state(|| false);

    // Scroll lock while open; the cleanup releases it unconditionally on
    // close or teardown.
    use_effect_with_deps(
        move |open| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let Some(body) = &body {
                if *open {
                    let _ = body.style().set_property("overflow", "hidden");
                }
            }
            move || {
                if let Some(body) = body {
                    let _ = body.style().remove_property("overflow");
                }
            }
        },
        props.open,
    );

    let handle_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let text_input = |apply: fn(&mut RequestDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let select_input = |apply: fn(&mut RequestDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, select.value());
            draft.set(next);
        })
    };

    let on_message_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = textarea.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let is_submitted = is_submitted.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let is_submitted = is_submitted.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                // Models the eventual real network call.
                TimeoutFuture::new(2_000).await;
                log!("contact request submitted");
                is_submitting.set(false);
                is_submitted.set(true);

                // Show the confirmation briefly, then reset and close.
                let timeout = Timeout::new(3_000, move || {
                    draft.set(RequestDraft::default());
                    is_submitted.set(false);
                    on_close.emit(());
                });
                timeout.forget();
            });
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        overflow-y: auto;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(16, 24, 22, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .modal-card {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        background: rgba(255, 255, 255, 0.97);
                        border: 1px solid rgba(132, 169, 140, 0.3);
                        border-radius: 1.5rem;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.35);
                        padding: 2rem;
                    }
                    html.dark .modal-card {
                        background: rgba(29, 42, 38, 0.97);
                        border-color: rgba(132, 169, 140, 0.25);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.2rem;
                        cursor: pointer;
                        color: #5d6f68;
                        padding: 0.4rem;
                        border-radius: 0.5rem;
                    }
                    .modal-close:hover { background: rgba(132, 169, 140, 0.15); }
                    .modal-heading { text-align: center; margin-bottom: 1.6rem; }
                    .modal-heading h2 {
                        color: #17201d;
                        margin: 0.6rem 0 0.4rem;
                        font-size: 1.7rem;
                    }
                    html.dark .modal-heading h2 { color: #f2f5f3; }
                    .modal-heading p { color: #5d6f68; margin: 0; }
                    html.dark .modal-heading p { color: #9db3a8; }
                    .modal-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.4rem;
                        border: 1px solid rgba(90, 143, 104, 0.4);
                        background: rgba(132, 169, 140, 0.2);
                        border-radius: 999px;
                        padding: 0.4rem 1rem;
                        font-size: 0.8rem;
                        font-weight: 600;
                        color: #2f5c3c;
                    }
                    html.dark .modal-badge { color: #a8c8b2; }
                    .modal-row {
                        display: grid;
                        gap: 1rem;
                        grid-template-columns: 1fr;
                        margin-bottom: 1rem;
                    }
                    @media (min-width: 640px) {
                        .modal-row { grid-template-columns: 1fr 1fr; }
                    }
                    .modal-field label {
                        display: block;
                        font-size: 0.85rem;
                        font-weight: 500;
                        margin-bottom: 0.35rem;
                        color: #2e3d37;
                    }
                    html.dark .modal-field label { color: #c4d4cb; }
                    .modal-field input,
                    .modal-field select,
                    .modal-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.7rem 0.9rem;
                        border-radius: 0.7rem;
                        border: 1px solid #b6c4bd;
                        background: #fff;
                        color: #17201d;
                        font-size: 0.92rem;
                        font-family: inherit;
                    }
                    html.dark .modal-field input,
                    html.dark .modal-field select,
                    html.dark .modal-field textarea {
                        background: #24322d;
                        border-color: #3c4f47;
                        color: #e7ece9;
                    }
                    .modal-submit {
                        width: 100%;
                        background: linear-gradient(90deg, #5a8f68, #84a98c);
                        color: #fff;
                        border: none;
                        border-radius: 0.75rem;
                        padding: 0.95rem 1.5rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        margin-top: 0.4rem;
                    }
                    .modal-submit:disabled { opacity: 0.6; cursor: not-allowed; }
                    .modal-trust {
                        text-align: center;
                        font-size: 0.76rem;
                        color: #5d6f68;
                        margin-top: 1rem;
                    }
                    html.dark .modal-trust { color: #9db3a8; }
                    .modal-success { text-align: center; padding: 2.5rem 0; }
                    .modal-success-mark {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.4rem;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #5a8f68, #84a98c);
                        color: #fff;
                        font-size: 1.8rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .modal-success h3 { color: #17201d; margin: 0 0 0.8rem; }
                    html.dark .modal-success h3 { color: #f2f5f3; }
                    .modal-success p { color: #5d6f68; }
                    html.dark .modal-success p { color: #9db3a8; }
                "#}
            </style>
            <div class="modal-backdrop" onclick={handle_close.clone()}></div>
            <div class="modal-card">
                <button class="modal-close" onclick={handle_close} aria-label="Close">
                    {"\u{2715}"}
                </button>
                {
                    if !*is_submitted {
                        html! {
                            <>
                                <div class="modal-heading">
                                    <div class="modal-badge">{"\u{1F4C5} Free Consultation"}</div>
                                    <h2>{"Let's Transform Your Business"}</h2>
                                    <p>
                                        {"Tell me about your challenges and I'll show you how \
                                          automation can save you time and money."}
                                    </p>
                                </div>
                                <form onsubmit={on_submit}>
                                    <div class="modal-row">
                                        <div class="modal-field">
                                            <label for="cm-name">{"Your Name *"}</label>
                                            <input
                                                type="text"
                                                id="cm-name"
                                                placeholder="John Smith"
                                                required={true}
                                                value={draft.name.clone()}
                                                oninput={text_input(|d, v| d.name = v)}
                                            />
                                        </div>
                                        <div class="modal-field">
                                            <label for="cm-email">{"Email Address *"}</label>
                                            <input
                                                type="email"
                                                id="cm-email"
                                                placeholder="john@company.com"
                                                required={true}
                                                value={draft.email.clone()}
                                                oninput={text_input(|d, v| d.email = v)}
                                            />
                                        </div>
                                    </div>
                                    <div class="modal-row">
                                        <div class="modal-field">
                                            <label for="cm-company">{"Company Name"}</label>
                                            <input
                                                type="text"
                                                id="cm-company"
                                                placeholder="Your Company Inc."
                                                value={draft.company.clone()}
                                                oninput={text_input(|d, v| d.company = v)}
                                            />
                                        </div>
                                        <div class="modal-field">
                                            <label for="cm-phone">{"Phone Number"}</label>
                                            <input
                                                type="tel"
                                                id="cm-phone"
                                                placeholder="(555) 123-4567"
                                                value={draft.phone.clone()}
                                                oninput={text_input(|d, v| d.phone = v)}
                                            />
                                        </div>
                                    </div>
                                    <div class="modal-row">
                                        <div class="modal-field">
                                            <label for="cm-service">{"Service Needed"}</label>
                                            <select
                                                id="cm-service"
                                                onchange={select_input(|d, v| d.service = v)}
                                            >
                                                <option value="" selected={draft.service.is_empty()}>
                                                    {"Select a service"}
                                                </option>
                                                {
                                                    SERVICES.iter().map(|service| html! {
                                                        <option
                                                            key={*service}
                                                            value={*service}
                                                            selected={draft.service == *service}
                                                        >
                                                            {service}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                        <div class="modal-field">
                                            <label for="cm-budget">{"Project Budget"}</label>
                                            <select
                                                id="cm-budget"
                                                onchange={select_input(|d, v| d.budget = v)}
                                            >
                                                <option value="" selected={draft.budget.is_empty()}>
                                                    {"Select budget range"}
                                                </option>
                                                {
                                                    BUDGET_RANGES.iter().map(|range| html! {
                                                        <option
                                                            key={*range}
                                                            value={*range}
                                                            selected={draft.budget == *range}
                                                        >
                                                            {range}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                    </div>
                                    <div class="modal-field">
                                        <label for="cm-message">
                                            {"Tell me about your biggest time-waster *"}
                                        </label>
                                        <textarea
                                            id="cm-message"
                                            rows="4"
                                            required={true}
                                            placeholder="Manual data entry, customer support, social media management, inventory tracking..."
                                            value={draft.message.clone()}
                                            oninput={on_message_input}
                                        />
                                    </div>
                                    <button
                                        type="submit"
                                        class="modal-submit"
                                        disabled={*is_submitting}
                                    >
                                        {
                                            if *is_submitting {
                                                "Sending..."
                                            } else {
                                                "Get My Free Assessment"
                                            }
                                        }
                                    </button>
                                    <p class="modal-trust">
                                        {"\u{2713} Free consultation \u{2022} \u{2713} No spam, ever \u{2022} \u{2713} Response within 24 hours"}
                                    </p>
                                </form>
                            </>
                        }
                    } else {
                        html! {
                            <div class="modal-success">
                                <div class="modal-success-mark">{"\u{2713}"}</div>
                                <h3>{"Thanks! I'll be in touch soon."}</h3>
                                <p>
                                    {"I've received your request and will get back to you \
                                      within 24 hours with a personalized plan to save you \
                                      time and money."}
                                </p>
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}
