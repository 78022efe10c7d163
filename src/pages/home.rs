use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact_modal::ContactModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::services::Services;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div>
            <Header
                dark_mode={props.dark_mode}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_contact_click={open_modal}
            />
            <main>
                <Hero />
                <Services />
                <About />
            </main>
            <Footer />
            <ContactModal open={*modal_open} on_close={close_modal} />
        </div>
    }
}
