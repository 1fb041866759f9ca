use std::rc::Rc;

use yew::prelude::*;

/// Lifecycle of one remote read.
///
/// Every issued request carries a sequence number; settlements from
/// requests that have since been superseded are discarded, so the state
/// always reflects the most recently issued request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// True from the moment a request is issued until the most recently
    /// issued request settles.
    pub loading: bool,
    /// Body of the last request that settled successfully. Kept across
    /// refetches so stale content stays visible while a new request runs.
    pub data: Option<T>,
    /// Failure message of the last settled request, cleared by a
    /// subsequent success.
    pub error: Option<String>,
    /// Resolved URL of the most recently issued request.
    pub url: Option<String>,
    latest_seq: u64,
}

impl<T> FetchState<T> {
    /// Initial state: loading, nothing fetched yet.
    pub fn pending() -> Self {
        Self {
            loading: true,
            data: None,
            error: None,
            url: None,
            latest_seq: 0,
        }
    }
}

pub enum FetchAction<T> {
    /// A request tagged `seq` was issued.
    Started { seq: u64, url: String },
    /// The request tagged `seq` settled successfully.
    Resolved { seq: u64, data: T },
    /// The request tagged `seq` settled with a failure.
    Rejected { seq: u64, error: String },
}

impl<T: Clone> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Started { seq, url } => Rc::new(Self {
                loading: true,
                data: self.data.clone(),
                error: self.error.clone(),
                url: Some(url),
                latest_seq: seq,
            }),
            FetchAction::Resolved { seq, data } => {
                if seq != self.latest_seq {
                    tracing::debug!(
                        seq,
                        latest = self.latest_seq,
                        "discarding superseded fetch success"
                    );
                    return self;
                }
                Rc::new(Self {
                    loading: false,
                    data: Some(data),
                    error: None,
                    url: self.url.clone(),
                    latest_seq: seq,
                })
            }
            FetchAction::Rejected { seq, error } => {
                if seq != self.latest_seq {
                    tracing::debug!(
                        seq,
                        latest = self.latest_seq,
                        "discarding superseded fetch failure"
                    );
                    return self;
                }
                Rc::new(Self {
                    loading: false,
                    data: self.data.clone(),
                    error: Some(error),
                    url: self.url.clone(),
                    latest_seq: seq,
                })
            }
        }
    }
}
