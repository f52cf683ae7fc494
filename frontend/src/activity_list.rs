use common::{mutation_outcome, ActivityCard, Mutation, ParticipantRow};
use log::error;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::state::AppState;

#[derive(Prop)]
pub struct ActivityListProps<'list> {
    pub app: AppState<'list>,
}

#[component]
pub fn ActivityList<'list, G: Html>(cx: Scope<'list>, props: ActivityListProps<'list>) -> View<G> {
    let app = props.app;
    let cards = create_memo(cx, move || app.activities.get().cards());
    view! {
        cx,
        div(id="activities-list"){
            (match app.activities.get().placeholder() {
                Some(text) => view! {cx, p(){(text)}},
                None => View::empty(),
            })
            Indexed(
                iterable=cards,
                view=move |cx, card| activity_card(cx, app, card)
            )
        }
    }
}

fn activity_card<'list, G: Html>(
    cx: BoundedScope<'_, 'list>,
    app: AppState<'list>,
    card: ActivityCard,
) -> View<G> {
    let availability = card.availability_text();
    let ActivityCard {
        name,
        description,
        schedule,
        participants,
        ..
    } = card;
    let participants = if participants.is_empty() {
        view! {cx, p(){em(){"No participants yet"}}}
    } else {
        let rows = View::new_fragment(
            participants
                .into_iter()
                .map(|row| participant_row(cx, app, row))
                .collect(),
        );
        view! {
            cx,
            div(class="participants-section"){
                h5(){"Participants:"}
                ul(class="participants-list"){(rows.clone())}
            }
        }
    };
    view! {
        cx,
        div(class="activity-card"){
            h4(){(name.clone())}
            p(){(description.clone())}
            p(){strong(){"Schedule:"} " " (schedule.clone())}
            p(){strong(){"Availability:"} " " (availability.clone())}
            div(class="participants-container"){(participants.clone())}
        }
    }
}

/// One participant with its removal control. The control carries its own
/// activity name and email, and is visible only to a logged-in admin.
fn participant_row<'list, G: Html>(
    cx: BoundedScope<'_, 'list>,
    app: AppState<'list>,
    row: ParticipantRow,
) -> View<G> {
    let email = row.email.clone();
    view! {
        cx,
        li(){
            span(class="participant-email"){(email.clone())}
            button(
                class=(app.admin_class("delete-btn")),
                title="Unregister",
                on:click=move |_| {
                    // The refresh after a successful unregister disposes this
                    // card's scope, so the request runs on the page scope.
                    spawn_local_scoped(app.cx, handle_unregister(app, row.clone()))
                }
            ){
                "❌"
            }
        }
    }
}

async fn handle_unregister(app: AppState<'_>, row: ParticipantRow) {
    let result = app.backend.unregister(&row.activity, &row.email).await;
    if let Err(e) = &result {
        if e.is_transport() {
            error!("{}: {}", Mutation::Unregister.log_label(), e);
        }
    }
    let outcome = mutation_outcome(Mutation::Unregister, &result);
    app.flash(outcome.message, outcome.succeeded).await;
}
