use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod storage;
mod king_card;
mod ballot;
mod leaderboard;

use crate::{
    ballot::Ballot,
    leaderboard::LeaderboardDisplay,
    styles::*,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Ballot,
    #[at("/display")] Display,
    #[at("/standings")] Standings,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class={BG_PAGE}>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Ballot => html! { <Ballot /> },
        Route::Display => html! { <LeaderboardDisplay show_eliminated={true} /> },
        Route::Standings => html! { <LeaderboardDisplay show_eliminated={false} /> },
        Route::NotFound => html! {
            <div class={CONTAINER_SM}>
                <div class={alert_style("error")}>{"Page not found"}</div>
                <Link<Route> to={Route::Ballot} classes={classes!(button_primary(false))}>
                    {"Back to voting"}
                </Link<Route>>
            </div>
        },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
