//! The admin's pending-request listing, gathered across server pages.

use crate::api::{RequestPage, RequestSummary, ResourceStock};
use crate::error::FetchFailure;
use crate::notification::Notice;
use crate::view::{pending_rows, PendingRow};

/// The two fetches the listing is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPart {
    Requests,
    Resources,
}

impl ListingPart {
    fn failure_copy(self) -> &'static str {
        match self {
            ListingPart::Requests => "Error loading pending requests",
            ListingPart::Resources => "Error loading resource stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    Loading,
    Failed(ListingPart),
    Ready(Vec<PendingRow>),
}

#[derive(Debug, Default)]
pub struct PendingBoard {
    requests: Vec<RequestSummary>,
    requests_done: bool,
    resources: Option<Vec<ResourceStock>>,
    failed: Option<ListingPart>,
}

impl PendingBoard {
    /// Appends one page and returns the next page number while more remain.
    pub fn absorb_page(&mut self, page: RequestPage) -> Option<u64> {
        if self.failed.is_some() || self.requests_done {
            return None;
        }
        let empty = page.requests.is_empty();
        for request in page.requests {
            if !self.requests.iter().any(|known| known.id == request.id) {
                self.requests.push(request);
            }
        }
        // an empty page means the listing shrank while we were walking it
        if empty || page.current_page >= page.pages {
            self.requests_done = true;
            None
        } else {
            Some(page.current_page + 1)
        }
    }

    pub fn set_resources(&mut self, resources: Vec<ResourceStock>) {
        self.resources = Some(resources);
    }

    /// Marks the listing failed; the first failure wins the card.
    pub fn fail(&mut self, part: ListingPart, failure: &FetchFailure) -> Notice {
        self.failed.get_or_insert(part);
        Notice::danger(format!("{}: {}", part.failure_copy(), failure))
    }

    pub fn state(&self) -> BoardState {
        if let Some(part) = self.failed {
            return BoardState::Failed(part);
        }
        match &self.resources {
            Some(resources) if self.requests_done => {
                BoardState::Ready(pending_rows(&self.requests, resources))
            }
            _ => BoardState::Loading,
        }
    }
}
