use log::error;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::state::AppState;

#[derive(Prop)]
pub struct NavBarProps<'navbar> {
    pub app: AppState<'navbar>,
}

#[component]
pub fn NavBar<'navbar, G: Html>(cx: Scope<'navbar>, props: NavBarProps<'navbar>) -> View<G> {
    let app = props.app;
    view! {
        cx,
        header(){
            h1(){"Mergington High School"}
            h2(){"Extracurricular Activities"}
            div(class="user-controls"){
                button(
                    id="user-icon",
                    title="Admin login",
                    on:click=move |_| {
                        // Only a logged-out visitor can open the login modal.
                        if !*app.is_logged_in.get() {
                            app.login_modal_open.set(true);
                        }
                    }
                ){
                    "👤"
                }
                button(
                    id="logout-btn",
                    class=(app.admin_class("logout-btn")),
                    on:click=move |_| spawn_local_scoped(cx, handle_logout(app))
                ){
                    "Logout"
                }
            }
        }
    }
}

/// Logout failures are only logged; the page shows nothing.
async fn handle_logout(app: AppState<'_>) {
    match app.backend.logout().await {
        Ok(()) => {
            app.is_logged_in.set(false);
            app.load_activities().await;
        }
        Err(e) => error!("Error logging out: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{activities, test_app, Call};
    use common::ClientError;
    use futures::executor::block_on;
    use sycamore::reactive::create_scope_immediate;

    #[test]
    fn logout_control_hidden_when_logged_out() {
        let html = sycamore::render_to_string(|cx| {
            let (app, _, _) = test_app(cx);
            view! {cx, NavBar(app=app)}
        });
        assert!(html.contains("class=\"logout-btn hidden\""));
    }

    #[test]
    fn successful_logout_clears_flag_and_reloads() {
        create_scope_immediate(|cx| {
            let (app, backend, _) = test_app(cx);
            app.is_logged_in.set(true);
            backend.set_ack(Ok(()));
            backend.push_activities(Ok(activities()));
            block_on(handle_logout(app));
            assert!(!*app.is_logged_in.get());
            assert_eq!(backend.calls(), vec![Call::Logout, Call::Activities]);
        });
    }

    #[test]
    fn failed_logout_changes_nothing_visible() {
        for failure in [
            ClientError::Server {
                status: 500,
                detail: Some("boom".into()),
            },
            ClientError::Network("offline".into()),
        ] {
            create_scope_immediate(|cx| {
                let (app, backend, timer) = test_app(cx);
                app.is_logged_in.set(true);
                backend.set_ack(Err(failure.clone()));
                block_on(handle_logout(app));
                assert!(*app.is_logged_in.get());
                assert!(app.notice.get().message().is_none());
                assert!(timer.waits().is_empty());
                assert_eq!(backend.calls(), vec![Call::Logout]);
            });
        }
    }
}
