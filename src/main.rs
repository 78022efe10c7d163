use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod theme;
mod lead;
mod handoff;
mod assessment {
    pub mod engine;
    pub mod page;
    pub mod record;
    pub mod sections;
}
mod pages {
    pub mod home;
}
mod components {
    pub mod about;
    pub mod contact_modal;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod services;
}

use assessment::page::Assessment;
use pages::home::Home;
use theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/assessment")]
    Assessment,
}

#[function_component]
fn App() -> Html {
    // Resolve the theme before anything paints so there is no flash of the
    // wrong scheme.
    let current_theme: UseStateHandle<Theme> = use_state(|| {
        let resolved = theme::resolve();
        theme::apply(resolved);
        resolved
    });

    let on_toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_| {
            let next = current_theme.toggled();
            theme::apply(next);
            theme::persist(next);
            current_theme.set(next);
        })
    };

    let render = {
        let dark_mode = current_theme.is_dark();
        let on_toggle_theme = on_toggle_theme.clone();
        move |route: Route| -> Html {
            match route {
                Route::Home => {
                    info!("Rendering Home page");
                    html! {
                        <Home
                            dark_mode={dark_mode}
                            on_toggle_theme={on_toggle_theme.clone()}
                        />
                    }
                }
                Route::Assessment => {
                    info!("Rendering Assessment page");
                    html! {
                        <Assessment
                            dark_mode={dark_mode}
                            on_toggle_theme={on_toggle_theme.clone()}
                        />
                    }
                }
            }
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
