//
//  freshdesk-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Rules for Freshdesk List and Search Endpoints
//!
//! Freshdesk paginates with `page`/`per_page` query parameters and two
//! endpoint families that disagree on the details. This module centralizes
//! the page sizes, the termination rule, and the search-query length guard.
//!
//! # Overview
//!
//! | Endpoint family | Page size | Extra rule |
//! |-----------------|-----------|------------|
//! | List (`tickets`, `contacts`, ...) | 100 (overridable) | walk until a short page |
//! | Search (`search/tickets`, ...) | 30 (fixed by the API) | hard cap at page 10 |
//!
//! A caller may pin a specific page, in which case exactly one request is
//! issued and its items are returned no matter how full the page is.
//!
//! # Notes
//!
//! - The walk advances until the first page shorter than the requested size;
//!   a result set that divides evenly ends with one trailing empty page
//! - The search cap exists because the remote search API refuses to serve
//!   anything past page 10

use super::{FreshdeskError, Result};

/// Default page size for list endpoints.
pub(crate) const LIST_PAGE_SIZE: u32 = 100;

/// Fixed page size the search endpoints answer with.
pub(crate) const SEARCH_PAGE_SIZE: u32 = 30;

/// Last page the search endpoints will serve.
pub(crate) const SEARCH_PAGE_CAP: u32 = 10;

/// Longest filter/search query the remote API accepts, in characters.
pub(crate) const QUERY_MAX_LEN: usize = 512;

/// State machine for walking a paginated endpoint.
///
/// A `PageWalk` starts on the first page to fetch and is advanced with the
/// item count of each received page; it decides whether another request is
/// due. All three termination conditions live here: short page, pinned
/// page, and the search page cap.
#[derive(Debug, Clone)]
pub(crate) struct PageWalk {
    page: u32,
    per_page: u32,
    pinned: bool,
    cap: Option<u32>,
}

impl PageWalk {
    /// Walk for a list endpoint: default size 100, no page cap.
    ///
    /// Passing `page` pins the walk to that single page.
    pub(crate) fn list(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1),
            per_page: per_page.unwrap_or(LIST_PAGE_SIZE),
            pinned: page.is_some(),
            cap: None,
        }
    }

    /// Walk for a search endpoint: fixed size 30, capped at page 10.
    pub(crate) fn search(page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1),
            per_page: SEARCH_PAGE_SIZE,
            pinned: page.is_some(),
            cap: Some(SEARCH_PAGE_CAP),
        }
    }

    /// The page number the next request should ask for.
    pub(crate) fn current(&self) -> u32 {
        self.page
    }

    /// The page size the next request should ask for.
    pub(crate) fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Records a received page and reports whether to fetch another.
    ///
    /// Returns `false` when the walk is pinned, when the page came back
    /// short, or when the page cap is reached; otherwise moves to the next
    /// page and returns `true`.
    pub(crate) fn advance(&mut self, received: usize) -> bool {
        if self.pinned {
            return false;
        }
        if received < self.per_page as usize {
            return false;
        }
        if self.cap.is_some_and(|cap| self.page >= cap) {
            return false;
        }
        self.page += 1;
        true
    }
}

/// Rejects filter/search queries the remote API would refuse for length.
///
/// The limit is 512 characters; checking locally saves the round trip. A
/// query of exactly 512 characters passes.
pub(crate) fn validate_search_query(query: &str) -> Result<()> {
    if query.chars().count() > QUERY_MAX_LEN {
        return Err(FreshdeskError::InvalidArgument(format!(
            "search query can have up to {} characters, got {}",
            QUERY_MAX_LEN,
            query.chars().count()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_walk_advances_on_full_pages() {
        let mut walk = PageWalk::list(None, Some(2));
        assert_eq!(walk.current(), 1);
        assert!(walk.advance(2));
        assert_eq!(walk.current(), 2);
        assert!(walk.advance(2));
        assert_eq!(walk.current(), 3);
    }

    #[test]
    fn test_list_walk_stops_on_short_page() {
        let mut walk = PageWalk::list(None, Some(100));
        assert!(!walk.advance(99));
    }

    #[test]
    fn test_list_walk_stops_on_empty_page() {
        let mut walk = PageWalk::list(None, None);
        assert!(!walk.advance(0));
    }

    #[test]
    fn test_pinned_page_fetches_exactly_once() {
        let mut walk = PageWalk::list(Some(4), Some(2));
        assert_eq!(walk.current(), 4);
        // A completely full page still ends a pinned walk.
        assert!(!walk.advance(2));
    }

    #[test]
    fn test_search_walk_caps_at_page_ten() {
        let mut walk = PageWalk::search(None);
        for expected in 1..SEARCH_PAGE_CAP {
            assert_eq!(walk.current(), expected);
            assert!(walk.advance(SEARCH_PAGE_SIZE as usize));
        }
        assert_eq!(walk.current(), SEARCH_PAGE_CAP);
        assert!(!walk.advance(SEARCH_PAGE_SIZE as usize));
    }

    #[test]
    fn test_search_walk_stops_on_short_page_before_cap() {
        let mut walk = PageWalk::search(None);
        assert!(!walk.advance(12));
    }

    #[test]
    fn test_query_length_guard() {
        let ok = "q".repeat(QUERY_MAX_LEN);
        assert!(validate_search_query(&ok).is_ok());

        let too_long = "q".repeat(QUERY_MAX_LEN + 1);
        let err = validate_search_query(&too_long).unwrap_err();
        assert!(matches!(err, FreshdeskError::InvalidArgument(_)));
    }
}
