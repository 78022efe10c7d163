use chrono::{Datelike, Utc};
use yew::prelude::*;

const SERVICES: [&str; 6] = [
    "Workflow Automation",
    "AI Customer Support",
    "Smart Reporting",
    "Custom Business Tools",
    "Professional Websites",
    "System Integration",
];

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Contact", "#contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: linear-gradient(135deg, #1d2a26, #17201d);
                        color: #9db3a8;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-inner { max-width: 80rem; margin: 0 auto; }
                    .footer-grid {
                        display: grid;
                        gap: 2.5rem;
                        grid-template-columns: 1fr;
                        padding-bottom: 2.5rem;
                        border-bottom: 1px solid rgba(132, 169, 140, 0.2);
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        margin-bottom: 1rem;
                    }
                    .footer-logo {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.6rem;
                        background: linear-gradient(90deg, #5a8f68, #84a98c);
                        color: #fff;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .footer-brand-name { color: #e7ece9; font-weight: 700; }
                    .footer-brand-tag { font-size: 0.75rem; margin-top: -0.2rem; }
                    .footer-blurb { font-size: 0.88rem; line-height: 1.6; }
                    .footer-col h4 {
                        color: #e7ece9;
                        font-size: 0.95rem;
                        margin: 0 0 0.9rem;
                    }
                    .footer-col ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-col li { padding: 0.25rem 0; font-size: 0.88rem; }
                    .footer-col a {
                        color: #9db3a8;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-col a:hover { color: #a8c8b2; }
                    .footer-bottom {
                        padding-top: 1.5rem;
                        font-size: 0.8rem;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="footer-logo">{"KD"}</div>
                            <div>
                                <div class="footer-brand-name">{"Kurtis Dunn"}</div>
                                <div class="footer-brand-tag">{"IT Consulting & Automation"}</div>
                            </div>
                        </div>
                        <p class="footer-blurb">
                            {"Helping small businesses save time and money through smart \
                              automation and custom solutions. No tech jargon, just \
                              results that matter."}
                        </p>
                    </div>
                    <div class="footer-col">
                        <h4>{"Services"}</h4>
                        <ul>
                            {
                                SERVICES.iter().map(|service| html! {
                                    <li key={*service}>{service}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="footer-col">
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            {
                                QUICK_LINKS.iter().map(|(name, href)| html! {
                                    <li key={*name}><a href={*href}>{name}</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="footer-col">
                        <h4>{"Get in Touch"}</h4>
                        <ul>
                            <li>
                                <a href="mailto:hello@kurtisdunn.com">{"hello@kurtisdunn.com"}</a>
                            </li>
                            <li>{"Remote & On-site"}</li>
                            <li>{"Mon-Fri 9AM-6PM EST"}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    {format!("\u{A9} {} Kurtis Dunn IT Consulting. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}
