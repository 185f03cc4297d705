//! Page navigation state

use crate::types::PaginationInfo;
use tracing::debug;

/// A page fetch issued by the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence number, strictly increasing per pager
    pub seq: u64,
    /// One-based page number
    pub page: u32,
}

/// Current page, known pagination and the in-flight request
#[derive(Debug, Clone)]
pub struct Pager {
    current_page: u32,
    pagination: Option<PaginationInfo>,
    last_seq: u64,
    pending: Option<PageRequest>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Pager on page 1 with no pagination known
    pub fn new() -> Self {
        Self {
            current_page: 1,
            pagination: None,
            last_seq: 0,
            pending: None,
        }
    }

    /// Page whose rows are currently loaded
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Last pagination metadata applied
    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Navigable page count, once known
    pub fn page_count(&self) -> Option<u32> {
        self.pagination.map(|p| p.page_count())
    }

    /// Total item count, zero until a page has loaded
    pub fn total_items(&self) -> u64 {
        self.pagination.map_or(0, |p| p.total)
    }

    /// The request still awaiting a response
    pub fn pending(&self) -> Option<PageRequest> {
        self.pending
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Page navigation is relative to: the in-flight page, else the current one
    pub fn target_page(&self) -> u32 {
        self.pending.map_or(self.current_page, |r| r.page)
    }

    /// Request page `page`
    ///
    /// Returns `None` when `page` is below 1 or past the known page count.
    pub fn go_to_page(&mut self, page: u32) -> Option<PageRequest> {
        if page < 1 {
            return None;
        }
        if let Some(count) = self.page_count() {
            if page > count {
                debug!("Ignoring request for page {page} of {count}");
                return None;
            }
        }

        self.last_seq += 1;
        let request = PageRequest {
            seq: self.last_seq,
            page,
        };
        self.pending = Some(request);
        Some(request)
    }

    /// Request the page after the target page
    pub fn next(&mut self) -> Option<PageRequest> {
        let target = self.target_page();
        self.go_to_page(target.saturating_add(1))
    }

    /// Request the page before the target page
    pub fn previous(&mut self) -> Option<PageRequest> {
        let target = self.target_page();
        self.go_to_page(target.saturating_sub(1))
    }

    /// Whether the previous button is enabled
    pub fn can_go_previous(&self) -> bool {
        self.target_page() > 1
    }

    /// Whether the next button is enabled
    pub fn can_go_next(&self) -> bool {
        self.page_count()
            .map_or(true, |count| self.target_page() < count)
    }

    /// Whether `seq` belongs to the newest in-flight request
    pub fn is_latest(&self, seq: u64) -> bool {
        self.pending.is_some_and(|r| r.seq == seq)
    }

    /// Apply a successful response
    ///
    /// Returns the page number now current, or `None` if the response
    /// belongs to a superseded request and was discarded.
    pub fn complete(&mut self, seq: u64, pagination: PaginationInfo) -> Option<u32> {
        let request = self.pending.filter(|r| r.seq == seq)?;
        self.pending = None;
        self.current_page = request.page;
        self.pagination = Some(pagination);
        Some(request.page)
    }

    /// Record a failed response; prior page and pagination are kept
    ///
    /// Returns whether the failure belonged to the newest request.
    pub fn fail(&mut self, seq: u64) -> bool {
        if self.is_latest(seq) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// "Page X of Y", with Y = 1 while pagination is unknown
    pub fn label(&self) -> String {
        let count = self.page_count().unwrap_or(1);
        format!("Page {} of {}", self.current_page, count)
    }
}
