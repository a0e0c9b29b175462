use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod view_state {
    pub mod visibility;
    pub mod count_up;
    pub mod scroll;
    pub mod active_section;
    pub mod gallery;
}
mod effects {
    pub mod subscription;
    pub mod scroll_lock;
    pub mod observer;
    pub mod frame;
    pub mod hooks;
}
mod components {
    pub mod cards;
    pub mod reveal;
    pub mod count_up;
    pub mod header;
    pub mod lightbox;
    pub mod contact;
}
mod pages {
    pub mod home;
}

use config::PageVariant;
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/plain")]
    Plain,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            let variant = PageVariant::detect();
            info!("Rendering Home page ({:?})", variant);
            html! { <Home variant={variant} /> }
        },
        Route::Plain => {
            info!("Rendering Home page (plain)");
            html! { <Home variant={PageVariant::Plain} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home variant={PageVariant::detect()} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
