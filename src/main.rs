use yew::prelude::*;

mod components;
mod config;
mod pages;
mod utils;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    // The relay public key is baked in at build time; a missing key only
    // degrades the contact form, the rest of the page still works.
    if config::public_key().is_none() {
        log::warn!("email relay public key is not configured, check the build environment");
    }

    yew::Renderer::<App>::new().render();
    log::info!("landing page components initialized");
}
