use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod lead;
mod submissions;

mod components {
    pub mod contact;
    pub mod nav;
    pub mod notification;
    pub mod star_rating;
}

mod pages {
    pub mod faq;
    pub mod home;
}

use components::nav::Nav;
use lead::{HttpLeadService, LeadServiceHandle};
use pages::home::Home;
use submissions::SubmissionsCache;

#[function_component]
fn App() -> Html {
    // Created once; the contact form receives these as explicit
    // dependencies so tests can substitute a fake service.
    let service = use_memo(|_| LeadServiceHandle::new(Rc::new(HttpLeadService)), ());
    let cache = use_memo(|_| SubmissionsCache::new(), ());

    html! {
        <>
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Poppins', -apple-system, BlinkMacSystemFont,
                        'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                    color: #243b5e;
                }
                "#}
            </style>
            <Nav />
            <Home service={(*service).clone()} cache={(*cache).clone()} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting ABC Book Center site");
    yew::Renderer::<App>::new().render();
}
