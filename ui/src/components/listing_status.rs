use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Status field of the last successfully fetched listing
    #[prop_or_default]
    pub status: Option<String>,
    /// Whether a request is currently in flight
    pub is_loading: bool,
    /// Failure message from the last settled request
    #[prop_or_default]
    pub error: Option<String>,
    /// URL the listing was requested from
    #[prop_or_default]
    pub source_url: Option<String>,
    /// Callback when the refetch button is clicked
    pub on_refetch: Callback<()>,
}

#[function_component]
pub fn ListingStatus(props: &Props) -> Html {
    let onclick = {
        let on_refetch = props.on_refetch.clone();
        Callback::from(move |_: MouseEvent| {
            on_refetch.emit(());
        })
    };

    // Clicking mid-flight is allowed: the newest request supersedes any
    // outstanding one, so the button never needs disabling.
    let button_class = "px-4 py-2 border border-neutral-300 \
                        dark:border-neutral-600 rounded-md text-sm \
                        font-medium text-neutral-700 dark:text-neutral-300 \
                        bg-white dark:bg-neutral-700 hover:bg-neutral-50 \
                        dark:hover:bg-neutral-600 transition-colors \
                        duration-200";

    html! {
        <div class="space-y-4">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                {props.status.clone().unwrap_or_default()}
            </h1>
            <h2 class="text-xl text-gray-600 dark:text-gray-300">
                {if props.is_loading { "Loading" } else { "Load Complete" }}
            </h2>

            {if let Some(error) = &props.error {
                html! {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                                border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {format!("Error loading listing: {}", error)}
                        </p>
                    </div>
                }
            } else {
                html! {}
            }}

            {if let Some(url) = &props.source_url {
                html! {
                    <p class="text-xs text-neutral-500 dark:text-neutral-400">
                        {format!("Source: {}", url)}
                    </p>
                }
            } else {
                html! {}
            }}

            <button onclick={onclick} class={button_class}>
                {"Refetch"}
            </button>
        </div>
    }
}
