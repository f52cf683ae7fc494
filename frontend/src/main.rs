use common::{ClientConfig, API_BASE_KEY};
use log::info;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

mod activity_list;
mod api;
mod logger;
mod login_modal;
mod message;
mod navbar;
mod signup_form;
mod state;
#[cfg(test)]
mod testing;

use activity_list::ActivityList;
use api::HttpBackend;
use login_modal::LoginModal;
use message::MessageArea;
use navbar::NavBar;
use signup_form::SignupForm;
use state::{AppState, BrowserTimer};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init() {
        gloo_console::error!(format!("logger already set: {}", e));
    }
    // Baked in at build time, e.g. `ACTIVITIES_API_BASE=http://localhost:8000 trunk build`.
    let config = ClientConfig::from_api_base(option_env!("ACTIVITIES_API_BASE"));
    info!("{} = {:?}", API_BASE_KEY, config.api_base);
    if config.is_cross_origin() {
        info!("API is cross-origin; requests include credentials");
    }
    sycamore::render(|cx| {
        let backend = create_ref(cx, HttpBackend::new(config.clone()));
        let timer = create_ref(cx, BrowserTimer);
        let app = AppState::new(cx, config, backend, timer);
        spawn_local_scoped(cx, app.initialize());
        view! {
            cx,
            div(){
                NavBar(app=app)
                main(class="container"){
                    section(id="activities-container"){
                        h3(){"Available Activities"}
                        ActivityList(app=app)
                    }
                    section(id="signup-container"){
                        h3(){"Sign Up for an Activity"}
                        SignupForm(app=app)
                        MessageArea(app=app)
                    }
                }
                LoginModal(app=app)
            }
        }
    })
}
