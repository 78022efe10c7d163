use yew::prelude::*;
use yew_router::components::Link;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_contact_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 20.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let handle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_theme.emit(());
        })
    };

    let handle_contact = {
        let on_contact_click = props.on_contact_click.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_contact_click.emit(());
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let nav_items = [
        ("Home", "#home"),
        ("About", "#about"),
        ("Services", "#services"),
        ("Contact", "#contact"),
    ];

    let theme_icon = if props.dark_mode { "\u{2600}" } else { "\u{263E}" };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        transition: box-shadow 0.3s ease;
                    }
                    html.dark .site-header {
                        background: rgba(23, 32, 30, 0.92);
                    }
                    .site-header.scrolled {
                        box-shadow: 0 4px 16px rgba(16, 24, 22, 0.12);
                        border-bottom: 1px solid rgba(132, 169, 140, 0.2);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .logo-link {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        text-decoration: none;
                    }
                    .logo-mark {
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
                    .logo-name {
                        font-weight: 700;
                        font-size: 1.1rem;
                        color: #1d2a26;
                    }
                    html.dark .logo-name { color: #e7ece9; }
                    .logo-tagline {
                        font-size: 0.72rem;
                        color: #5d6f68;
                        margin-top: -0.2rem;
                    }
                    html.dark .logo-tagline { color: #9db3a8; }
                    .main-nav {
                        display: none;
                        gap: 2rem;
                    }
                    .main-nav a {
                        color: #2e3d37;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    html.dark .main-nav a { color: #c4d4cb; }
                    .main-nav a:hover { color: #5a8f68; }
                    .header-actions {
                        display: none;
                        align-items: center;
                        gap: 1rem;
                    }
                    .theme-toggle {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 1.2rem;
                        padding: 0.4rem 0.6rem;
                        border-radius: 0.5rem;
                        color: #2e3d37;
                    }
                    html.dark .theme-toggle { color: #c4d4cb; }
                    .theme-toggle:hover { background: rgba(132, 169, 140, 0.15); }
                    .cta-button {
                        background: #5a8f68;
                        color: #fff;
                        border: none;
                        border-radius: 0.75rem;
                        padding: 0.65rem 1.4rem;
                        font-weight: 600;
                        font-size: 0.9rem;
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .cta-button:hover {
                        background: #4c7a58;
                        transform: scale(1.04);
                    }
                    .burger {
                        background: none;
                        border: none;
                        cursor: pointer;
                        display: flex;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.5rem;
                    }
                    .burger span {
                        width: 22px;
                        height: 2px;
                        background: #2e3d37;
                    }
                    html.dark .burger span { background: #c4d4cb; }
                    .mobile-nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: rgba(255, 255, 255, 0.97);
                        border-bottom: 1px solid rgba(132, 169, 140, 0.2);
                        padding: 1.25rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    html.dark .mobile-nav { background: rgba(23, 32, 30, 0.97); }
                    .mobile-nav a {
                        color: #2e3d37;
                        text-decoration: none;
                        padding: 0.4rem 0;
                    }
                    html.dark .mobile-nav a { color: #c4d4cb; }
                    .mobile-theme-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.4rem 0;
                        color: #2e3d37;
                    }
                    html.dark .mobile-theme-row { color: #c4d4cb; }
                    @media (min-width: 1024px) {
                        .main-nav { display: flex; }
                        .header-actions { display: flex; }
                        .burger { display: none; }
                        .mobile-nav { display: none; }
                    }
                "#}
            </style>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="logo-link">
                    <div class="logo-mark">{"KD"}</div>
                    <div>
                        <div class="logo-name">{"Kurtis Dunn"}</div>
                        <div class="logo-tagline">{"IT Consulting & Automation"}</div>
                    </div>
                </Link<Route>>

                <nav class="main-nav">
                    {
                        nav_items.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href}>{name}</a>
                        }).collect::<Html>()
                    }
                </nav>

                <div class="header-actions">
                    <button
                        class="theme-toggle"
                        onclick={handle_theme.clone()}
                        aria-label="Toggle dark mode"
                    >
                        {theme_icon}
                    </button>
                    <button class="cta-button" onclick={handle_contact.clone()}>
                        {"Book Consultation"}
                    </button>
                </div>

                <button class="burger" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-nav">
                            {
                                nav_items.iter().map(|(name, href)| html! {
                                    <a key={*name} href={*href} onclick={close_menu.clone()}>
                                        {name}
                                    </a>
                                }).collect::<Html>()
                            }
                            <div class="mobile-theme-row">
                                <span>{"Dark Mode"}</span>
                                <button
                                    class="theme-toggle"
                                    onclick={handle_theme}
                                    aria-label="Toggle dark mode"
                                >
                                    {theme_icon}
                                </button>
                            </div>
                            <button class="cta-button" onclick={handle_contact}>
                                {"Book Free Consultation"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
