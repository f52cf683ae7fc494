use sycamore::prelude::*;

use crate::state::AppState;

#[derive(Prop)]
pub struct MessageAreaProps<'message> {
    pub app: AppState<'message>,
}

#[component]
pub fn MessageArea<'message, G: Html>(
    cx: Scope<'message>,
    props: MessageAreaProps<'message>,
) -> View<G> {
    let notice = props.app.notice;
    view! {
        cx,
        div(id="message", class=(notice.get().class())){
            (notice.get().message().map(|m| m.text.clone()).unwrap_or_default())
        }
    }
}
