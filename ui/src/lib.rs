use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::ApiProvider;
use crate::pages::MoviesPage;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;

/// Default address of the public movie-listing API.
const DEFAULT_API_ADDRESS: &str = "https://yts.mx";

// App-level API client - configurable via environment at build time
pub fn default_api_client() -> APIClient {
    let address = option_env!("LISTING_API_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ApiProvider>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
            </ApiProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <MoviesPage />
            </main>
        },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center">
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                    <p class="text-gray-600 dark:text-gray-300">{"Page not found"}</p>
                </div>
            </main>
        },
    }
}
