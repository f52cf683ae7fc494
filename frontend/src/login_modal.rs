use common::{login_outcome, Credentials, LoginOutcome};
use log::{error, info};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::state::AppState;

#[derive(Prop)]
pub struct LoginModalProps<'modal> {
    pub app: AppState<'modal>,
}

#[component]
pub fn LoginModal<'modal, G: Html>(cx: Scope<'modal>, props: LoginModalProps<'modal>) -> View<G> {
    let app = props.app;
    let username = create_signal(cx, String::new());
    let password = create_signal(cx, String::new());
    let in_flight = create_signal(cx, false);
    view! {
        cx,
        div(
            id="login-modal",
            class=(if *app.login_modal_open.get() { "modal" } else { "modal hidden" })
        ){
            // Only the close control dismisses the modal.
            div(class="modal-content"){
                span(class="close", on:click=move |_| app.login_modal_open.set(false)){"×"}
                h3(){"Admin Login"}
                form(
                    id="login-form",
                    on:submit=move |event: web_sys::Event| {
                        event.prevent_default();
                        spawn_local_scoped(cx, handle_login(app, username, password, in_flight));
                    }
                ){
                    div(class="form-group"){
                        label(){"Username:"}
                        input(id="username", type="text", required=true, bind:value=username)
                    }
                    div(class="form-group"){
                        label(){"Password:"}
                        input(id="password", type="password", required=true, bind:value=password)
                    }
                    button(type="submit", disabled=*in_flight.get()){"Login"}
                }
                p(
                    id="login-message",
                    class=(if app.login_error.get().is_some() { "error" } else { "error hidden" })
                ){
                    (app.login_error.get().as_deref().unwrap_or_default().to_string())
                }
            }
        }
    }
}

async fn handle_login<'modal>(
    app: AppState<'modal>,
    username: &'modal Signal<String>,
    password: &'modal Signal<String>,
    in_flight: &'modal Signal<bool>,
) {
    if *in_flight.get() {
        return;
    }
    in_flight.set(true);
    let credentials = Credentials {
        username: (*username.get()).clone(),
        password: (*password.get()).clone(),
    };
    let result = app.backend.login(&credentials).await;
    in_flight.set(false);

    match login_outcome(&result) {
        LoginOutcome::LoggedIn => {
            info!("Logged in");
            app.is_logged_in.set(true);
            app.login_modal_open.set(false);
            app.login_error.set(None);
            username.set(String::new());
            password.set(String::new());
            app.load_activities().await;
        }
        LoginOutcome::Rejected(text) => {
            if let Err(e) = &result {
                error!("Error logging in: {}", e);
            }
            app.login_error.set(Some(text));
        }
    }
}
