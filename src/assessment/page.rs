use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::engine::{SectionId, SubmissionState, SubmitOutcome, Wizard};
use super::sections;
use crate::components::contact_modal::ContactModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::{handoff, Route};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn section_icon(section: SectionId) -> &'static str {
    match section {
        SectionId::Contact => "\u{1F44B}",
        SectionId::Business => "\u{1F3E2}",
        SectionId::Operations => "\u{2699}\u{FE0F}",
        SectionId::TimeWasters => "\u{23F0}",
        SectionId::Technology => "\u{1F4BB}",
        SectionId::Goals => "\u{1F3AF}",
    }
}

#[derive(Properties, PartialEq)]
pub struct AssessmentProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Assessment)]
pub fn assessment(props: &AssessmentProps) -> Html {
    let wizard = use_state(|| Wizard::init(handoff::take_fresh(Utc::now())));
    let modal_open = use_state(|| false);
    let navigator = use_navigator();

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(true))
    };
    let open_modal_click = {
        let open_modal = open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.emit(()))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let on_previous = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            if next.previous() {
                scroll_to_top();
            }
            wizard.set(next);
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            if next.next(Utc::now()) {
                scroll_to_top();
            }
            wizard.set(next);
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            let payload = match next.begin_submission(Utc::now()) {
                Some(payload) => payload,
                None => return,
            };
            wizard.set(next.clone());

            // The handle's deref stays pinned to the render-time snapshot,
            // so the in-flight value is carried into the task and completed
            // there; only the setter touches the handle after the await.
            let wizard = wizard.clone();
            spawn_local(async move {
                TimeoutFuture::new(2_000).await;
                match serde_json::to_string(&payload) {
                    Ok(json) => {
                        info!("assessment submitted: {}", json);
                        handoff::clear();
                        next.complete_submission(SubmitOutcome::Success);
                        scroll_to_top();
                    }
                    Err(err) => {
                        warn!("failed to serialize assessment: {}", err);
                        next.complete_submission(SubmitOutcome::Failure(
                            "Something went wrong submitting your assessment. Please try again."
                                .to_string(),
                        ));
                    }
                }
                wizard.set(next);
            });
        })
    };

    let on_back_home = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            handoff::clear();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let section = wizard.current_section();
    let is_submitting = wizard.submission == SubmissionState::Submitting;
    let is_submitted = wizard.submission == SubmissionState::Submitted;

    let body = if is_submitted {
        let (name, company, email) = match &wizard.lead {
            Some(lead) => (lead.name.clone(), lead.company.clone(), lead.email.clone()),
            None => (String::new(), String::new(), String::new()),
        };
        html! {
            <div class="thanks-card">
                <div class="thanks-icon">{"\u{2705}"}</div>
                <h1>{format!("Thank You, {}!", name)}</h1>
                <p class="thanks-lede">
                    {format!(
                        "We've received your automation assessment for {}. Our team \
                         will review your answers and prepare personalized \
                         recommendations.",
                        company
                    )}
                </p>
                <p class="thanks-note">
                    {format!("A summary will be sent to {} within 24 hours.", email)}
                </p>
                <div class="thanks-actions">
                    <button class="btn-primary" onclick={open_modal_click}>
                        {"Schedule Free Consultation"}
                    </button>
                    <button class="btn-secondary" onclick={on_back_home}>
                        {"Back to Home"}
                    </button>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="wizard">
                <div class="wizard-heading">
                    <h1>{"Business Automation Assessment"}</h1>
                    <p>
                        {format!(
                            "About {} minute{} remaining",
                            wizard.minutes_remaining(),
                            if wizard.minutes_remaining() == 1 { "" } else { "s" }
                        )}
                    </p>
                </div>
                <div class="wizard-progress">
                    <div class="progress-labels">
                        <span>
                            {format!("Step {} of {}", wizard.step_number(), wizard.total_steps())}
                        </span>
                        <span>{format!("{}% complete", wizard.progress().round() as u32)}</span>
                    </div>
                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style={format!("width: {}%;", wizard.progress())}
                        />
                    </div>
                </div>
                {
                    if let Some(error) = &wizard.submit_error {
                        html! { <div class="submit-error">{error.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="section-card">
                    <div class="section-head">
                        <span class="section-icon">{section_icon(section)}</span>
                        <div>
                            <h2>{section.title()}</h2>
                            <p>{section.description()}</p>
                        </div>
                    </div>
                    {
                        match section {
                            SectionId::Contact => sections::render_contact(&wizard),
                            SectionId::Business => sections::render_business(&wizard),
                            SectionId::Operations => sections::render_operations(&wizard),
                            SectionId::TimeWasters => sections::render_time_wasters(&wizard),
                            SectionId::Technology => sections::render_technology(&wizard),
                            SectionId::Goals => sections::render_goals(&wizard),
                        }
                    }
                </div>
                <div class="wizard-nav">
                    <button
                        class="btn-secondary"
                        onclick={on_previous}
                        disabled={wizard.is_first_step() || !wizard.can_navigate()}
                    >
                        {"\u{2190} Previous"}
                    </button>
                    {
                        if wizard.is_last_step() {
                            html! {
                                <button
                                    class="btn-primary"
                                    onclick={on_submit}
                                    disabled={!wizard.can_navigate()}
                                >
                                    { if is_submitting { "Submitting..." } else { "Submit Assessment" } }
                                </button>
                            }
                        } else {
                            html! {
                                <button
                                    class="btn-primary"
                                    onclick={on_next}
                                    disabled={!wizard.can_navigate()}
                                >
                                    {"Next \u{2192}"}
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        }
    };

    html! {
        <div class="assessment-page">
            <Header
                dark_mode={props.dark_mode}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_contact_click={open_modal}
            />
            <main class="assessment-main">
                { body }
            </main>
            <Footer />
            <ContactModal open={*modal_open} on_close={close_modal} />
            <style>
                {r#"
                .assessment-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    color: #1e293b;
                }
                html.dark .assessment-page {
                    background: #0f172a;
                    color: #e2e8f0;
                }
                .assessment-main {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                }
                .wizard-heading h1 {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin: 0 0 0.25rem;
                }
                .wizard-heading p {
                    color: #64748b;
                    margin: 0 0 1.5rem;
                }
                html.dark .wizard-heading p {
                    color: #94a3b8;
                }
                .wizard-progress {
                    margin-bottom: 1.5rem;
                }
                .progress-labels {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.85rem;
                    color: #64748b;
                    margin-bottom: 0.4rem;
                }
                html.dark .progress-labels {
                    color: #94a3b8;
                }
                .progress-track {
                    height: 8px;
                    border-radius: 9999px;
                    background: #e2e8f0;
                    overflow: hidden;
                }
                html.dark .progress-track {
                    background: #1e293b;
                }
                .progress-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    transition: width 0.3s ease;
                }
                .submit-error {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #b91c1c;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1.5rem;
                }
                html.dark .submit-error {
                    background: rgba(185, 28, 28, 0.15);
                    border-color: rgba(248, 113, 113, 0.4);
                    color: #fca5a5;
                }
                .section-card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                }
                html.dark .section-card {
                    background: #1e293b;
                    border-color: #334155;
                    box-shadow: none;
                }
                .section-head {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .section-icon {
                    font-size: 2rem;
                    line-height: 1;
                }
                .section-head h2 {
                    margin: 0 0 0.25rem;
                    font-size: 1.3rem;
                }
                .section-head p {
                    margin: 0;
                    color: #64748b;
                    font-size: 0.95rem;
                }
                html.dark .section-head p {
                    color: #94a3b8;
                }
                .section-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .info-card {
                    background: #eff6ff;
                    border: 1px solid #bfdbfe;
                    border-radius: 0.75rem;
                    padding: 1rem 1.25rem;
                }
                html.dark .info-card {
                    background: rgba(37, 99, 235, 0.12);
                    border-color: rgba(96, 165, 250, 0.35);
                }
                .info-card h4 {
                    margin: 0 0 0.4rem;
                }
                .info-card p {
                    margin: 0;
                    font-size: 0.95rem;
                }
                .greeting-card {
                    background: linear-gradient(135deg, rgba(37, 99, 235, 0.08), rgba(124, 58, 237, 0.08));
                    border: 1px solid #c7d2fe;
                    border-radius: 0.75rem;
                    padding: 1.25rem;
                }
                html.dark .greeting-card {
                    border-color: rgba(129, 140, 248, 0.35);
                }
                .greeting-card h4 {
                    margin: 0 0 0.5rem;
                }
                .greeting-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.9rem;
                    color: #64748b;
                }
                html.dark .greeting-meta {
                    color: #94a3b8;
                }
                .greeting-quote {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    font-style: italic;
                }
                .question {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .question-label {
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .question-hint {
                    margin: -0.25rem 0 0;
                    font-size: 0.85rem;
                    color: #64748b;
                }
                html.dark .question-hint {
                    color: #94a3b8;
                }
                .question input[type="text"],
                .question input[type="email"],
                .question textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.65rem 0.85rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 0.5rem;
                    font-size: 0.95rem;
                    background: #ffffff;
                    color: inherit;
                    font-family: inherit;
                }
                html.dark .question input[type="text"],
                html.dark .question input[type="email"],
                html.dark .question textarea {
                    background: #0f172a;
                    border-color: #334155;
                }
                .question input:focus,
                .question textarea:focus {
                    outline: none;
                    border-color: #2563eb;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin: 0;
                }
                html.dark .field-error {
                    color: #f87171;
                }
                .option-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 0.5rem;
                }
                .option-row {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    padding: 0.55rem 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    font-size: 0.95rem;
                }
                html.dark .option-row {
                    border-color: #334155;
                }
                .option-row:hover {
                    border-color: #93c5fd;
                }
                .other-row {
                    align-items: center;
                }
                .other-input {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    flex: 1;
                }
                .other-input input[type="text"] {
                    flex: 1;
                    padding: 0.45rem 0.65rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 0.4rem;
                    background: #ffffff;
                    color: inherit;
                }
                html.dark .other-input input[type="text"] {
                    background: #0f172a;
                    border-color: #334155;
                }
                .score-row {
                    display: flex;
                    gap: 0.5rem;
                }
                .score-cell {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.3rem;
                    padding: 0.6rem 0;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                html.dark .score-cell {
                    border-color: #334155;
                }
                .score-cell:hover {
                    border-color: #93c5fd;
                }
                .wizard-nav {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                }
                .wizard-nav .btn-primary,
                .thanks-actions .btn-primary {
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: #ffffff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.7rem 1.5rem;
                    font-size: 0.95rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .wizard-nav .btn-primary:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .wizard-nav .btn-secondary,
                .thanks-actions .btn-secondary {
                    background: transparent;
                    color: inherit;
                    border: 1px solid #cbd5e1;
                    border-radius: 0.5rem;
                    padding: 0.7rem 1.5rem;
                    font-size: 0.95rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                html.dark .wizard-nav .btn-secondary,
                html.dark .thanks-actions .btn-secondary {
                    border-color: #334155;
                }
                .wizard-nav .btn-secondary:disabled {
                    opacity: 0.4;
                    cursor: not-allowed;
                }
                .thanks-card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    padding: 3rem 2rem;
                    text-align: center;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.06);
                }
                html.dark .thanks-card {
                    background: #1e293b;
                    border-color: #334155;
                    box-shadow: none;
                }
                .thanks-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .thanks-card h1 {
                    margin: 0 0 0.75rem;
                    font-size: 1.75rem;
                }
                .thanks-lede {
                    max-width: 32rem;
                    margin: 0 auto 0.5rem;
                    color: #64748b;
                }
                html.dark .thanks-lede {
                    color: #94a3b8;
                }
                .thanks-note {
                    margin: 0 0 1.5rem;
                    font-size: 0.9rem;
                    color: #64748b;
                }
                html.dark .thanks-note {
                    color: #94a3b8;
                }
                .thanks-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                @media (max-width: 640px) {
                    .option-grid {
                        grid-template-columns: 1fr;
                    }
                    .assessment-main {
                        padding-top: 6rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
