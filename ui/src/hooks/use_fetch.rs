use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use super::{FetchAction, FetchState};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub state: FetchState<T>,
    pub refetch: Callback<()>,
}

/// Generic fetch hook composer.
///
/// Issues the request once on mount, again whenever `deps` change, and on
/// every `refetch` call. The fetch function captures its collaborators
/// from the closure; `deps` is used for dependency tracking in
/// use_callback and use_effect_with, and `url` is the resolved request
/// URL echoed into the returned state.
///
/// Requests are tagged with a per-hook sequence number and settlements
/// are applied through a reducer against the state current at settlement
/// time. Overlapping refetches are therefore safe: a settlement from a
/// superseded request is discarded instead of clobbering the newer one.
#[hook]
pub fn use_fetch<T, D, F, Fut>(
    deps: D,
    url: String,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + PartialEq + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_reducer_eq(FetchState::<T>::pending);
    let issued_seq = use_mut_ref(|| 0u64);
    let request = (deps, url);

    let refetch = {
        let state = state.clone();
        let issued_seq = issued_seq.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(
            request.clone(),
            move |_: (), (_, url): &(D, String)| {
                let state = state.clone();
                let fetch_fn = fetch_fn.clone();
                let url = url.clone();

                let seq = {
                    let mut counter = issued_seq.borrow_mut();
                    *counter += 1;
                    *counter
                };

                tracing::debug!(seq, %url, "issuing fetch");
                state.dispatch(FetchAction::Started { seq, url });

                yew::platform::spawn_local(async move {
                    match fetch_fn().await {
                        Ok(data) => {
                            state.dispatch(FetchAction::Resolved {
                                seq,
                                data,
                            });
                        }
                        Err(error) => {
                            tracing::error!(seq, %error, "fetch failed");
                            state.dispatch(FetchAction::Rejected {
                                seq,
                                error,
                            });
                        }
                    }
                });
            },
        )
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(request, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        state: (*state).clone(),
        refetch,
    }
}
