use log::{info, Level};
use yew::prelude::*;

mod config;
mod timing;

mod components {
    pub mod contact_form;
    pub mod nav;
    pub mod notification;
    pub mod scroll_effects;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use components::notification::{Notice, NotificationHost, Severity};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // The single live notification. Replacing the slot evicts the previous
    // notice; the id lets a stale removal be told apart from a fresh one.
    let notice = use_state(|| None::<Notice>);
    let next_id = use_mut_ref(|| 0u32);

    let on_notify = {
        let notice = notice.clone();
        let next_id = next_id.clone();
        Callback::from(move |(message, severity): (String, Severity)| {
            let mut id = next_id.borrow_mut();
            *id += 1;
            notice.set(Some(Notice { id: *id, message, severity }));
        })
    };

    let on_notice_closed = {
        let notice = notice.clone();
        Callback::from(move |closed: u32| {
            if matches!(&*notice, Some(live) if live.id == closed) {
                notice.set(None);
            }
        })
    };

    html! {
        <>
            <Nav />
            <Landing on_notify={on_notify} />
            <NotificationHost notice={(*notice).clone()} on_closed={on_notice_closed} />
        </>
    }
}

fn main() {
    // Readable panics in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
