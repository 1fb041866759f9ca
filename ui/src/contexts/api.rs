use std::rc::Rc;

use payloads::APIClient;
use yew::prelude::*;

/// Shared handle to the injected API client.
///
/// Wraps the client in `Rc` with pointer-equality `PartialEq` so it can
/// travel through props and hook dependencies even though the client
/// itself is not comparable.
#[derive(Clone)]
pub struct ApiHandle {
    client: Rc<APIClient>,
}

impl ApiHandle {
    pub fn new(client: APIClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub fn client(&self) -> &APIClient {
        &self.client
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    /// Client to inject; when absent the app-level default is built once.
    #[prop_or_default]
    pub client: Option<ApiHandle>,
    pub children: Children,
}

#[function_component]
pub fn ApiProvider(props: &ApiProviderProps) -> Html {
    let fallback =
        use_memo((), |_| ApiHandle::new(crate::default_api_client()));
    let handle = props
        .client
        .clone()
        .unwrap_or_else(|| (*fallback).clone());

    html! {
        <ContextProvider<ApiHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ApiHandle>>
    }
}

/// Resolve the injected API client.
#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
        .expect("use_api must be used within an ApiProvider")
}
