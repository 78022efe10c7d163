//! Markup for the individual wizard sections. All state lives in the
//! [`Wizard`] handle owned by the page; these helpers only read it and emit
//! clone-update-set callbacks.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::engine::Wizard;
use super::record::{
    toggle, AdminHours, AssessmentRecord, BusinessAge, TaskTracking, TeamSize, BUSINESS_GOALS,
    CURRENT_AUTOMATION, CURRENT_TOOLS, TIME_CONSUMING_TASKS, TIME_WASTER_SITUATIONS,
};
use crate::lead::ContactField;

fn apply<F>(wizard: &UseStateHandle<Wizard>, f: F) -> Callback<Event>
where
    F: Fn(&mut Wizard) + 'static,
{
    let wizard = wizard.clone();
    Callback::from(move |_: Event| {
        let mut next = (*wizard).clone();
        f(&mut next);
        wizard.set(next);
    })
}

fn text_input(
    wizard: &UseStateHandle<Wizard>,
    set: fn(&mut AssessmentRecord, String),
) -> Callback<InputEvent> {
    let wizard = wizard.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*wizard).clone();
        set(&mut next.answers, input.value());
        wizard.set(next);
    })
}

fn textarea_input(
    wizard: &UseStateHandle<Wizard>,
    set: fn(&mut AssessmentRecord, String),
) -> Callback<InputEvent> {
    let wizard = wizard.clone();
    Callback::from(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*wizard).clone();
        set(&mut next.answers, textarea.value());
        wizard.set(next);
    })
}

fn checkbox_list(
    wizard: &UseStateHandle<Wizard>,
    options: &'static [&'static str],
    get: fn(&AssessmentRecord) -> &Vec<String>,
    get_mut: fn(&mut AssessmentRecord) -> &mut Vec<String>,
) -> Html {
    options
        .iter()
        .map(|option| {
            let checked = get(&wizard.answers).iter().any(|entry| entry == option);
            let onchange = {
                let option = *option;
                apply(wizard, move |w| toggle(get_mut(&mut w.answers), option))
            };
            html! {
                <label key={*option} class="option-row">
                    <input type="checkbox" checked={checked} onchange={onchange} />
                    <span>{option}</span>
                </label>
            }
        })
        .collect::<Html>()
}

fn score_row(
    wizard: &UseStateHandle<Wizard>,
    name: &'static str,
    selected: Option<u8>,
    set: fn(&mut AssessmentRecord, u8),
) -> Html {
    html! {
        <div class="score-row">
            {
                (1..=5u8).map(|score| {
                    let checked = selected == Some(score);
                    let onchange = apply(wizard, move |w| set(&mut w.answers, score));
                    html! {
                        <label key={score} class="score-cell">
                            <input
                                type="radio"
                                name={name}
                                checked={checked}
                                onchange={onchange}
                            />
                            <span>{score}</span>
                        </label>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

pub fn render_contact(wizard: &UseStateHandle<Wizard>) -> Html {
    let contact_input = |field: ContactField| {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*wizard).clone();
            next.update_contact(field, input.value());
            wizard.set(next);
        })
    };

    let message_input = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*wizard).clone();
            next.update_contact(ContactField::Message, textarea.value());
            wizard.set(next);
        })
    };

    let field_error = |field: ContactField| -> Html {
        match wizard.contact_errors.message_for(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    html! {
        <div class="section-body">
            <div class="info-card">
                <h4>{"Welcome to Your Business Automation Assessment"}</h4>
                <p>
                    {"Let's start by getting to know you and your business. This \
                      information helps us provide personalized recommendations."}
                </p>
            </div>
            <div class="question">
                <label class="question-label" for="aw-name">{"Your Name *"}</label>
                <input
                    type="text"
                    id="aw-name"
                    placeholder="John Smith"
                    value={wizard.contact.name.clone()}
                    oninput={contact_input(ContactField::Name)}
                />
                { field_error(ContactField::Name) }
            </div>
            <div class="question">
                <label class="question-label" for="aw-email">{"Your Email *"}</label>
                <input
                    type="email"
                    id="aw-email"
                    placeholder="john@company.com"
                    value={wizard.contact.email.clone()}
                    oninput={contact_input(ContactField::Email)}
                />
                { field_error(ContactField::Email) }
            </div>
            <div class="question">
                <label class="question-label" for="aw-company">{"Company Name *"}</label>
                <input
                    type="text"
                    id="aw-company"
                    placeholder="Your Company Inc."
                    value={wizard.contact.company.clone()}
                    oninput={contact_input(ContactField::Company)}
                />
                { field_error(ContactField::Company) }
            </div>
            <div class="question">
                <label class="question-label" for="aw-message">
                    {"What's your biggest time-waster? (Optional)"}
                </label>
                <textarea
                    id="aw-message"
                    rows="4"
                    placeholder="Manual data entry, customer support, social media automation..."
                    value={wizard.contact.message.clone()}
                    oninput={message_input}
                />
            </div>
        </div>
    }
}

pub fn render_business(wizard: &UseStateHandle<Wizard>) -> Html {
    let greeting = match &wizard.lead {
        Some(lead) => html! {
            <div class="greeting-card">
                <h4>
                    {format!(
                        "Hi {}! Let's dive deeper into {}'s automation needs.",
                        lead.name, lead.company
                    )}
                </h4>
                <div class="greeting-meta">
                    <span>{format!("\u{2709} {}", lead.email)}</span>
                    <span>{format!("\u{1F3E2} {}", lead.company)}</span>
                </div>
                {
                    if !lead.message.is_empty() {
                        html! {
                            <div class="greeting-quote">
                                <strong>{"Your biggest time-waster: "}</strong>
                                {format!("\"{}\"", lead.message)}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="section-body">
            { greeting }
            <div class="question">
                <label class="question-label" for="aw-industry">
                    {"What industry is your business in?"}
                </label>
                <input
                    type="text"
                    id="aw-industry"
                    placeholder="e.g., Construction, Retail, Professional Services, Healthcare..."
                    value={wizard.answers.industry.clone()}
                    oninput={text_input(wizard, |a, v| a.industry = v)}
                />
            </div>
            <div class="question">
                <span class="question-label">{"How many people work in your business?"}</span>
                <div class="option-grid">
                    {
                        TeamSize::ALL.iter().map(|size| {
                            let checked = wizard.answers.team_size == Some(*size);
                            let onchange = {
                                let size = *size;
                                apply(wizard, move |w| w.answers.team_size = Some(size))
                            };
                            html! {
                                <label key={size.label()} class="option-row">
                                    <input
                                        type="radio"
                                        name="team-size"
                                        checked={checked}
                                        onchange={onchange}
                                    />
                                    <span>{size.label()}</span>
                                </label>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="question">
                <span class="question-label">{"How long have you been in business?"}</span>
                {
                    BusinessAge::ALL.iter().map(|age| {
                        let checked = wizard.answers.business_age == Some(*age);
                        let onchange = {
                            let age = *age;
                            apply(wizard, move |w| w.answers.business_age = Some(age))
                        };
                        html! {
                            <label key={age.label()} class="option-row">
                                <input
                                    type="radio"
                                    name="business-age"
                                    checked={checked}
                                    onchange={onchange}
                                />
                                <span>{age.label()}</span>
                            </label>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

pub fn render_operations(wizard: &UseStateHandle<Wizard>) -> Html {
    let other_checked = !wizard.answers.other_time_consuming_task.is_empty();
    let other_uncheck = apply(wizard, |w| {
        if !w.answers.other_time_consuming_task.is_empty() {
            w.answers.other_time_consuming_task.clear();
        }
    });

    html! {
        <div class="section-body">
            <div class="info-card">
                <p>
                    {"We'll ask about your day-to-day work. Think about a typical \
                      week as you answer these questions."}
                </p>
            </div>
            <div class="question">
                <span class="question-label">
                    {"Which tasks take up most of your time each week? (Check all that apply)"}
                </span>
                {
                    checkbox_list(
                        wizard,
                        &TIME_CONSUMING_TASKS,
                        |a| &a.time_consuming_tasks,
                        |a| &mut a.time_consuming_tasks,
                    )
                }
                <div class="option-row other-row">
                    <input type="checkbox" checked={other_checked} onchange={other_uncheck} />
                    <div class="other-input">
                        <span>{"Other:"}</span>
                        <input
                            type="text"
                            placeholder="Specify other task..."
                            value={wizard.answers.other_time_consuming_task.clone()}
                            oninput={text_input(wizard, |a, v| a.other_time_consuming_task = v)}
                        />
                    </div>
                </div>
            </div>
            <div class="question">
                <label class="question-label" for="aw-bottleneck">
                    {"What is the biggest bottleneck or frustration in your daily workflow?"}
                </label>
                <textarea
                    id="aw-bottleneck"
                    rows="4"
                    placeholder="Describe your biggest workflow challenge..."
                    value={wizard.answers.biggest_bottleneck.clone()}
                    oninput={textarea_input(wizard, |a, v| a.biggest_bottleneck = v)}
                />
            </div>
            <div class="question">
                <span class="question-label">
                    {"How do you currently keep track of tasks and deadlines?"}
                </span>
                {
                    TaskTracking::ALL.iter().map(|method| {
                        let checked = wizard.answers.task_tracking == Some(*method);
                        let onchange = {
                            let method = *method;
                            apply(wizard, move |w| w.answers.task_tracking = Some(method))
                        };
                        html! {
                            <label key={method.label()} class="option-row">
                                <input
                                    type="radio"
                                    name="task-tracking"
                                    checked={checked}
                                    onchange={onchange}
                                />
                                <span>{method.label()}</span>
                            </label>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="question">
                <span class="question-label">
                    {"On a scale of 1\u{2013}5, how consistent and documented are your daily processes?"}
                </span>
                <p class="question-hint">{"(1 = not at all, 5 = very well)"}</p>
                {
                    score_row(
                        wizard,
                        "process-consistency",
                        wizard.answers.process_consistency,
                        |a, v| a.process_consistency = Some(v),
                    )
                }
            </div>
        </div>
    }
}

pub fn render_time_wasters(wizard: &UseStateHandle<Wizard>) -> Html {
    html! {
        <div class="section-body">
            <div class="info-card">
                <p>
                    {"Check any of these situations that sound familiar to your \
                      daily operations:"}
                </p>
            </div>
            <div class="question">
                <span class="question-label">
                    {"Which of these time-wasting situations do you experience? (Check all that apply)"}
                </span>
                {
                    checkbox_list(
                        wizard,
                        &TIME_WASTER_SITUATIONS,
                        |a| &a.time_waster_situations,
                        |a| &mut a.time_waster_situations,
                    )
                }
            </div>
            <div class="question">
                <span class="question-label">
                    {"About how many hours per week do you spend on repetitive administrative tasks?"}
                </span>
                <p class="question-hint">{"(emails, data entry, paperwork, etc.)"}</p>
                <div class="option-grid">
                    {
                        AdminHours::ALL.iter().map(|hours| {
                            let checked = wizard.answers.admin_hours == Some(*hours);
                            let onchange = {
                                let hours = *hours;
                                apply(wizard, move |w| w.answers.admin_hours = Some(hours))
                            };
                            html! {
                                <label key={hours.label()} class="option-row">
                                    <input
                                        type="radio"
                                        name="admin-hours"
                                        checked={checked}
                                        onchange={onchange}
                                    />
                                    <span>{hours.label()}</span>
                                </label>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

pub fn render_technology(wizard: &UseStateHandle<Wizard>) -> Html {
    html! {
        <div class="section-body">
            <div class="info-card">
                <p>
                    {"Tell us about the tools you and your team use. Automation \
                      works best when it fits with your existing systems."}
                </p>
            </div>
            <div class="question">
                <span class="question-label">
                    {"Which of these tools do you use regularly? (Check all that apply)"}
                </span>
                {
                    checkbox_list(
                        wizard,
                        &CURRENT_TOOLS,
                        |a| &a.current_tools,
                        |a| &mut a.current_tools,
                    )
                }
            </div>
            <div class="question">
                <span class="question-label">
                    {"Does your business currently use any automation features? (Check all that apply)"}
                </span>
                {
                    checkbox_list(
                        wizard,
                        &CURRENT_AUTOMATION,
                        |a| &a.current_automation,
                        |a| &mut a.current_automation,
                    )
                }
            </div>
            <div class="question">
                <span class="question-label">
                    {"On a scale of 1\u{2013}5, how comfortable are you and your team with adopting new technology or tools?"}
                </span>
                <p class="question-hint">{"(1 = not comfortable, 5 = very comfortable)"}</p>
                {
                    score_row(
                        wizard,
                        "tech-comfort",
                        wizard.answers.tech_comfort,
                        |a, v| a.tech_comfort = Some(v),
                    )
                }
            </div>
            <div class="question">
                <span class="question-label">
                    {"How open are you to letting software take over repetitive tasks?"}
                </span>
                <p class="question-hint">{"(1 = very hesitant, 5 = very excited)"}</p>
                {
                    score_row(
                        wizard,
                        "automation-openness",
                        wizard.answers.automation_openness,
                        |a, v| a.automation_openness = Some(v),
                    )
                }
            </div>
        </div>
    }
}

pub fn render_goals(wizard: &UseStateHandle<Wizard>) -> Html {
    let other_checked = !wizard.answers.other_business_goal.is_empty();
    let other_uncheck = apply(wizard, |w| {
        if !w.answers.other_business_goal.is_empty() {
            w.answers.other_business_goal.clear();
        }
    });

    html! {
        <div class="section-body">
            <div class="info-card">
                <p>
                    {"Finally, we want to align automation with your business goals. \
                      Even a small efficiency gain can be big \u{2013} for example, \
                      improving customer retention by 5% can boost profits by up to \
                      95%. Let us know where saving time would help you the most."}
                </p>
            </div>
            <div class="question">
                <span class="question-label">
                    {"What are your main goals for the next 1\u{2013}3 years? (Check all that apply)"}
                </span>
                {
                    checkbox_list(
                        wizard,
                        &BUSINESS_GOALS,
                        |a| &a.business_goals,
                        |a| &mut a.business_goals,
                    )
                }
                <div class="option-row other-row">
                    <input type="checkbox" checked={other_checked} onchange={other_uncheck} />
                    <div class="other-input">
                        <span>{"Other:"}</span>
                        <input
                            type="text"
                            placeholder="Specify other goal..."
                            value={wizard.answers.other_business_goal.clone()}
                            oninput={text_input(wizard, |a, v| a.other_business_goal = v)}
                        />
                    </div>
                </div>
            </div>
            <div class="question">
                <label class="question-label" for="aw-extra-time">
                    {"If automation could save you an extra 10 hours per week, what would you do with that time?"}
                </label>
                <textarea
                    id="aw-extra-time"
                    rows="4"
                    placeholder="Describe how you would use the extra time..."
                    value={wizard.answers.extra_time_use.clone()}
                    oninput={textarea_input(wizard, |a, v| a.extra_time_use = v)}
                />
            </div>
            <div class="question">
                <span class="question-label">
                    {"How important is it for you to free up time to focus on these goals instead of daily busywork?"}
                </span>
                <p class="question-hint">{"(1 = not a priority, 5 = top priority)"}</p>
                {
                    score_row(
                        wizard,
                        "time-importance",
                        wizard.answers.time_importance,
                        |a, v| a.time_importance = Some(v),
                    )
                }
            </div>
        </div>
    }
}
