use common::{mutation_outcome, Mutation};
use log::error;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::state::AppState;

#[derive(Prop)]
pub struct SignupFormProps<'form> {
    pub app: AppState<'form>,
}

#[component]
pub fn SignupForm<'form, G: Html>(cx: Scope<'form>, props: SignupFormProps<'form>) -> View<G> {
    let app = props.app;
    let email = create_signal(cx, String::new());
    let activity = create_signal(cx, String::new());
    let in_flight = create_signal(cx, false);
    let names = create_memo(cx, move || app.activities.get().names());
    view! {
        cx,
        form(
            id="signup-form",
            on:submit=move |event: web_sys::Event| {
                event.prevent_default();
                spawn_local_scoped(cx, handle_signup(app, email, activity, in_flight));
            }
        ){
            div(class="form-group"){
                label(){"Student Email:"}
                input(
                    id="email",
                    type="email",
                    required=true,
                    placeholder="your-email@mergington.edu",
                    bind:value=email
                )
            }
            div(class="form-group"){
                label(){"Select Activity:"}
                select(id="activity", required=true, bind:value=activity){
                    option(value=""){"-- Select an activity --"}
                    Indexed(
                        iterable=names,
                        view=|cx, name| {
                            let label = name.clone();
                            view! {cx, option(value=name.clone()){(label.clone())}}
                        }
                    )
                }
            }
            button(type="submit", disabled=*in_flight.get()){"Sign Up"}
        }
    }
}

async fn handle_signup<'form>(
    app: AppState<'form>,
    email: &'form Signal<String>,
    activity: &'form Signal<String>,
    in_flight: &'form Signal<bool>,
) {
    // A second submit while the first is pending would enroll twice.
    if *in_flight.get() {
        return;
    }
    in_flight.set(true);
    let result = app.backend.signup(&activity.get(), &email.get()).await;
    in_flight.set(false);

    if let Err(e) = &result {
        if e.is_transport() {
            error!("{}: {}", Mutation::Signup.log_label(), e);
        }
    }
    let outcome = mutation_outcome(Mutation::Signup, &result);
    if outcome.succeeded {
        email.set(String::new());
        activity.set(String::new());
    }
    app.flash(outcome.message, outcome.succeeded).await;
}
