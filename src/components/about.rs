use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Story,
    Approach,
    Results,
}

impl AboutTab {
    const ALL: [AboutTab; 3] = [AboutTab::Story, AboutTab::Approach, AboutTab::Results];

    fn label(self) -> &'static str {
        match self {
            AboutTab::Story => "My Story",
            AboutTab::Approach => "My Approach",
            AboutTab::Results => "Results",
        }
    }
}

const STATS: [(&str, &str); 4] = [
    ("150+", "Small Businesses Helped"),
    ("2,000+", "Hours Saved Monthly"),
    ("98%", "Client Satisfaction"),
    ("5+", "Years Experience"),
];

const VALUES: [(&str, &str, &str); 3] = [
    (
        "\u{2764}",
        "Human-First Approach",
        "Technology should work for people, not the other way around.",
    ),
    (
        "\u{1F4A1}",
        "Simple Solutions",
        "Complex problems don't always need complex solutions.",
    ),
    (
        "\u{1F4C8}",
        "Real Results",
        "Every solution is measured by the time and money it saves you.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let active_tab = use_state(|| AboutTab::Story);

    let tab_body = match *active_tab {
        AboutTab::Story => html! {
            <p>
                {"I spent years running operations for a small trades business, \
                  drowning in the same spreadsheets, double entry, and missed \
                  follow-ups you're dealing with now. The tools that fixed it \
                  were never the expensive enterprise suites. They were small, \
                  boring automations that quietly gave hours back every week. \
                  That's what I build for businesses like yours."}
            </p>
        },
        AboutTab::Approach => html! {
            <p>
                {"No jargon, no six-month projects. We start with the task that \
                  wastes the most of your time, automate it, measure the hours \
                  saved, and only then move to the next one. You stay in control \
                  of your process; the software adapts to you, never the other \
                  way around."}
            </p>
        },
        AboutTab::Results => html! {
            <p>
                {"Clients typically reclaim 10 or more hours a week within the \
                  first month. A bookkeeping firm cut invoice chasing from two \
                  days to twenty minutes. A trades company stopped double-booking \
                  jobs entirely. Small changes, compounding weekly."}
            </p>
        },
    };

    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                    .about-section {
                        padding: 4.5rem 1.5rem;
                        background: #f7faf8;
                    }
                    html.dark .about-section { background: #121a17; }
                    .about-inner { max-width: 80rem; margin: 0 auto; }
                    .about-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid rgba(90, 143, 104, 0.5);
                        background: rgba(132, 169, 140, 0.25);
                        border-radius: 999px;
                        padding: 0.45rem 1rem;
                        font-size: 0.8rem;
                        font-weight: 600;
                        color: #2f5c3c;
                    }
                    html.dark .about-badge { color: #a8c8b2; }
                    .about-title {
                        font-size: clamp(1.9rem, 4vw, 2.8rem);
                        color: #17201d;
                        margin: 1.1rem 0 1.5rem;
                    }
                    html.dark .about-title { color: #f2f5f3; }
                    .about-title span { display: block; color: #4c7a58; }
                    html.dark .about-title span { color: #8fb89b; }
                    .about-tabs {
                        display: flex;
                        gap: 1rem;
                        border-bottom: 1px solid rgba(132, 169, 140, 0.35);
                        margin-bottom: 1.25rem;
                        flex-wrap: wrap;
                    }
                    .about-tab {
                        background: none;
                        border: none;
                        border-bottom: 2px solid transparent;
                        padding: 0.5rem 0.25rem;
                        font-size: 0.95rem;
                        cursor: pointer;
                        color: #5d6f68;
                    }
                    html.dark .about-tab { color: #9db3a8; }
                    .about-tab.active {
                        color: #2f5c3c;
                        border-bottom-color: #5a8f68;
                        font-weight: 600;
                    }
                    html.dark .about-tab.active { color: #a8c8b2; }
                    .about-body p {
                        color: #31403a;
                        line-height: 1.65;
                        max-width: 44rem;
                    }
                    html.dark .about-body p { color: #c4d4cb; }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                        margin: 2.25rem 0;
                    }
                    @media (min-width: 768px) {
                        .stat-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .stat-card {
                        background: #fff;
                        border: 1px solid rgba(132, 169, 140, 0.3);
                        border-radius: 0.9rem;
                        padding: 1.1rem;
                        text-align: center;
                    }
                    html.dark .stat-card {
                        background: #1d2a26;
                        border-color: rgba(132, 169, 140, 0.2);
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #2f5c3c;
                    }
                    html.dark .stat-value { color: #a8c8b2; }
                    .stat-label {
                        font-size: 0.78rem;
                        color: #5d6f68;
                        margin-top: 0.25rem;
                    }
                    html.dark .stat-label { color: #9db3a8; }
                    .value-grid {
                        display: grid;
                        gap: 1rem;
                        grid-template-columns: 1fr;
                    }
                    @media (min-width: 768px) {
                        .value-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .value-card {
                        background: #fff;
                        border: 1px solid rgba(132, 169, 140, 0.3);
                        border-radius: 0.9rem;
                        padding: 1.25rem;
                    }
                    html.dark .value-card {
                        background: #1d2a26;
                        border-color: rgba(132, 169, 140, 0.2);
                    }
                    .value-card h4 {
                        margin: 0.5rem 0 0.35rem;
                        color: #17201d;
                    }
                    html.dark .value-card h4 { color: #f2f5f3; }
                    .value-card p {
                        margin: 0;
                        font-size: 0.88rem;
                        color: #4a5a53;
                    }
                    html.dark .value-card p { color: #b0c2b8; }
                "#}
            </style>
            <div class="about-inner">
                <div class="about-badge">{"\u{2615} Meet Kurtis Dunn"}</div>
                <h2 class="about-title">
                    {"I've Been "}
                    <span>{"Where You Are"}</span>
                </h2>

                <div class="about-tabs">
                    {
                        AboutTab::ALL.iter().map(|tab| {
                            let is_active = *active_tab == *tab;
                            let onclick = {
                                let active_tab = active_tab.clone();
                                let tab = *tab;
                                Callback::from(move |_| active_tab.set(tab))
                            };
                            html! {
                                <button
                                    key={tab.label()}
                                    class={classes!("about-tab", is_active.then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {tab.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="about-body">{tab_body}</div>

                <div class="stat-grid">
                    {
                        STATS.iter().map(|(value, label)| html! {
                            <div key={*label} class="stat-card">
                                <div class="stat-value">{value}</div>
                                <div class="stat-label">{label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="value-grid">
                    {
                        VALUES.iter().map(|(icon, title, description)| html! {
                            <div key={*title} class="value-card">
                                <div>{icon}</div>
                                <h4>{title}</h4>
                                <p>{description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
