//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{HomePage, SensorsPage, StatsPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/statistiques")]
    Stats,
    #[at("/capteurs")]
    Sensors,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Stats => html! { <StatsPage /> },
        Route::Sensors => html! { <SensorsPage /> },
        Route::NotFound => html! {
            <div class="panel">
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
            <Navbar />
            <main class="page-content">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

/// Navbar component.
#[function_component(Navbar)]
fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-container">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    {"SmartBin"}
                </Link<Route>>
                <ul class="nav-menu">
                    <li class="nav-item">
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Accueil"}
                        </Link<Route>>
                    </li>
                    <li class="nav-item">
                        <Link<Route> to={Route::Stats} classes="nav-link">
                            {"Statistiques"}
                        </Link<Route>>
                    </li>
                    <li class="nav-item">
                        <Link<Route> to={Route::Sensors} classes="nav-link">
                            {"Capteurs"}
                        </Link<Route>>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
