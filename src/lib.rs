use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod animation {
    pub mod count_up;
    pub mod observer;
    pub mod reveal;
}
pub mod api {
    pub mod about;
    pub mod models;
}
pub mod components {
    pub mod icons;
    pub mod stat_card;
    pub mod value_card;
    pub mod video;
}
pub mod pages {
    pub mod about;
    pub mod agent {
        pub mod appointment;
        pub mod details_dialog;
    }
}

use pages::{about::AboutSection, agent::appointment::AppointmentPreview};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    About,
    #[at("/agent/appointment")]
    Appointment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::About => {
            info!("Rendering About page");
            html! { <AboutSection /> }
        },
        Route::Appointment => {
            info!("Rendering Appointment preview");
            html! { <AppointmentPreview /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <Redirect<Route> to={Route::About} /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
