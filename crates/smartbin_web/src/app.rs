//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{AlertsPage, BinsPage, CollectionsPage, HomePage, TriCentersPage, ZonesPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bins")]
    Bins,
    #[at("/zones")]
    Zones,
    #[at("/collections")]
    Collections,
    #[at("/alerts")]
    Alerts,
    #[at("/tri-centers")]
    TriCenters,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Bins => html! { <BinsPage /> },
        Route::Zones => html! { <ZonesPage /> },
        Route::Collections => html! { <CollectionsPage /> },
        Route::Alerts => html! { <AlertsPage /> },
        Route::TriCenters => html! { <TriCentersPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page introuvable"}</h1>
                <p>{"La page demandée n'existe pas."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navigation />
            <main class="container">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

/// Top app bar with links to every page. No guards.
#[function_component(Navigation)]
fn navigation() -> Html {
    html! {
        <header class="app-bar">
            <Link<Route> to={Route::Home} classes="app-bar-brand">
                {"SmartBin"}
            </Link<Route>>
            <nav class="app-bar-links">
                <Link<Route> to={Route::Home}>{"Accueil"}</Link<Route>>
                <Link<Route> to={Route::Bins}>{"Poubelles"}</Link<Route>>
                <Link<Route> to={Route::Zones}>{"Zones"}</Link<Route>>
                <Link<Route> to={Route::Collections}>{"Collectes"}</Link<Route>>
                <Link<Route> to={Route::Alerts}>{"Alertes"}</Link<Route>>
                <Link<Route> to={Route::TriCenters}>{"Centres de tri"}</Link<Route>>
            </nav>
        </header>
    }
}
