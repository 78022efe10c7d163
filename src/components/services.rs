use yew::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    popular: bool,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "\u{26A1}",
        title: "Workflow Automation",
        description: "Stop copying data between spreadsheets and apps. I'll connect your tools so they talk to each other automatically.",
        features: ["Save 10+ hrs/week", "No more data entry", "Connect existing apps"],
        popular: true,
    },
    Service {
        icon: "\u{1F916}",
        title: "AI Customer Support",
        description: "Answer common customer questions 24/7 with a smart chatbot that sounds like your team.",
        features: ["24/7 availability", "Instant responses", "Reduce support load"],
        popular: false,
    },
    Service {
        icon: "\u{1F4CA}",
        title: "Smart Reporting",
        description: "Get the numbers you need without the headache. Automated reports that actually help you make decisions.",
        features: ["Weekly summaries", "Sales insights", "Easy to understand"],
        popular: false,
    },
    Service {
        icon: "\u{1F6E0}",
        title: "Custom Business Tools",
        description: "Why wrestle with software that doesn't fit? I'll build simple tools that work exactly how your business does.",
        features: ["Fits your process", "No monthly fees", "Easy to use"],
        popular: false,
    },
    Service {
        icon: "\u{1F310}",
        title: "Professional Websites",
        description: "A website that actually brings in customers. Fast, mobile-friendly, and built to convert visitors into sales.",
        features: ["Mobile-first design", "SEO optimized", "Lead capture"],
        popular: true,
    },
    Service {
        icon: "\u{1F517}",
        title: "System Integration",
        description: "Make your apps work together. No more manually moving data between your accounting, CRM, and other tools.",
        features: ["Connect any apps", "Real-time sync", "Reduce errors"],
        popular: false,
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 4.5rem 1.5rem;
                        background: linear-gradient(135deg, #f2f5f3, #dfe8e2);
                    }
                    html.dark .services-section {
                        background: linear-gradient(135deg, #17201d, #1d2a26);
                    }
                    .services-inner { max-width: 80rem; margin: 0 auto; }
                    .services-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .services-heading h2 {
                        font-size: clamp(1.8rem, 4vw, 2.6rem);
                        color: #17201d;
                        margin: 0 0 0.6rem;
                    }
                    html.dark .services-heading h2 { color: #f2f5f3; }
                    .services-heading p {
                        color: #5d6f68;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    html.dark .services-heading p { color: #9db3a8; }
                    .services-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: 1fr;
                    }
                    @media (min-width: 768px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .service-card {
                        position: relative;
                        background: #fff;
                        border: 1px solid rgba(132, 169, 140, 0.3);
                        border-radius: 1rem;
                        padding: 1.75rem;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    html.dark .service-card {
                        background: #24322d;
                        border-color: rgba(132, 169, 140, 0.2);
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 16px 32px rgba(16, 24, 22, 0.14);
                    }
                    .popular-badge {
                        position: absolute;
                        top: -0.7rem;
                        right: 1.25rem;
                        background: #5a8f68;
                        color: #fff;
                        border-radius: 999px;
                        font-size: 0.7rem;
                        font-weight: 600;
                        padding: 0.25rem 0.8rem;
                    }
                    .service-icon { font-size: 1.6rem; }
                    .service-card h3 {
                        margin: 0.8rem 0 0.5rem;
                        color: #17201d;
                        font-size: 1.15rem;
                    }
                    html.dark .service-card h3 { color: #f2f5f3; }
                    .service-card p {
                        color: #4a5a53;
                        font-size: 0.92rem;
                        line-height: 1.55;
                    }
                    html.dark .service-card p { color: #b0c2b8; }
                    .service-features {
                        list-style: none;
                        margin: 1rem 0 0;
                        padding: 0;
                    }
                    .service-features li {
                        font-size: 0.85rem;
                        color: #2f5c3c;
                        padding: 0.2rem 0;
                    }
                    html.dark .service-features li { color: #a8c8b2; }
                    .service-features li::before {
                        content: "\2713  ";
                        font-weight: 700;
                    }
                "#}
            </style>
            <div class="services-inner">
                <div class="services-heading">
                    <h2>{"Services That Pay for Themselves"}</h2>
                    <p>
                        {"Every solution is built around one question: how much time \
                          and money does it save your business?"}
                    </p>
                </div>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div key={service.title} class="service-card">
                                {
                                    if service.popular {
                                        html! { <div class="popular-badge">{"Popular"}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="service-features">
                                    {
                                        service.features.iter().map(|feature| html! {
                                            <li key={*feature}>{feature}</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
