use async_trait::async_trait;
use common::{build_cards, ActivityCard, ActivityMap, ClientConfig, DismissToken, Message, Notice};
use gloo_timers::future::TimeoutFuture;
use log::error;
use sycamore::prelude::*;

use crate::api::Backend;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub enum ActivitiesView {
    Loading,
    Loaded(ActivityMap),
    /// The last good snapshot, if any, still feeds the activity select.
    Failed(Option<ActivityMap>),
}

impl ActivitiesView {
    pub fn cards(&self) -> Vec<ActivityCard> {
        match self {
            ActivitiesView::Loaded(activities) => build_cards(activities),
            _ => Vec::new(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        match self {
            ActivitiesView::Loaded(activities) | ActivitiesView::Failed(Some(activities)) => {
                common::activity_names(activities)
            }
            _ => Vec::new(),
        }
    }

    /// Placeholder text shown in the list container instead of cards.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ActivitiesView::Loading => Some(LOADING_TEXT),
            ActivitiesView::Failed(_) => Some(LOAD_FAILED_TEXT),
            ActivitiesView::Loaded(_) => None,
        }
    }

    /// The view after a failed fetch.
    pub fn failed(&self) -> ActivitiesView {
        match self {
            ActivitiesView::Loaded(activities) => ActivitiesView::Failed(Some(activities.clone())),
            ActivitiesView::Failed(last) => ActivitiesView::Failed(last.clone()),
            ActivitiesView::Loading => ActivitiesView::Failed(None),
        }
    }
}

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, millis: u32);
}

pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// Everything the page controller owns. Copied into every component and
/// handler; the signals themselves live in the root scope.
#[derive(Clone, Copy)]
pub struct AppState<'a> {
    pub cx: Scope<'a>,
    pub config: &'a ClientConfig,
    pub backend: &'a dyn Backend,
    pub timer: &'a dyn Timer,
    pub is_logged_in: &'a Signal<bool>,
    pub activities: &'a Signal<ActivitiesView>,
    pub notice: &'a Signal<Notice>,
    pub login_modal_open: &'a Signal<bool>,
    pub login_error: &'a Signal<Option<String>>,
}

impl<'a> AppState<'a> {
    pub fn new(
        cx: Scope<'a>,
        config: ClientConfig,
        backend: &'a dyn Backend,
        timer: &'a dyn Timer,
    ) -> Self {
        AppState {
            cx,
            config: create_ref(cx, config),
            backend,
            timer,
            is_logged_in: create_signal(cx, false),
            activities: create_signal(cx, ActivitiesView::Loading),
            notice: create_signal(cx, Notice::default()),
            login_modal_open: create_signal(cx, false),
            login_error: create_signal(cx, None),
        }
    }

    /// Status check and first load run side by side; neither waits on the other.
    pub async fn initialize(self) {
        futures::join!(self.check_status(), self.load_activities());
    }

    pub async fn load_activities(self) {
        match self.backend.fetch_activities().await {
            Ok(activities) => self.activities.set(ActivitiesView::Loaded(activities)),
            Err(e) => {
                error!("Error fetching activities: {}", e);
                let failed = self.activities.get().failed();
                self.activities.set(failed);
            }
        }
    }

    /// Leaves the session flag untouched when the check fails.
    pub async fn check_status(self) {
        match self.backend.fetch_status().await {
            Ok(status) => self.is_logged_in.set(status.logged_in),
            Err(e) => error!("Error checking login status: {}", e),
        }
    }

    pub fn show_message(self, message: Message) -> DismissToken {
        let mut notice = (*self.notice.get()).clone();
        let token = notice.show(message);
        self.notice.set(notice);
        token
    }

    /// Hide the message after the configured delay, unless a newer one has
    /// replaced it meanwhile.
    pub async fn dismiss_after(self, token: DismissToken) {
        self.timer.sleep(self.config.message_timeout_ms).await;
        let mut notice = (*self.notice.get()).clone();
        if notice.dismiss(token) {
            self.notice.set(notice);
        }
    }

    /// Show a message and, alongside, refresh the list when `refresh` is set.
    /// The dismissal delay runs from the moment the message appears.
    pub async fn flash(self, message: Message, refresh: bool) {
        let token = self.show_message(message);
        futures::join!(self.dismiss_after(token), async {
            if refresh {
                self.load_activities().await;
            }
        });
    }

    /// Class for controls that only an authenticated admin sees.
    pub fn admin_class(self, base: &str) -> String {
        if *self.is_logged_in.get() {
            base.to_string()
        } else {
            format!("{} hidden", base)
        }
    }
}
