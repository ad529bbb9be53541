//! # List Queries
//!
//! A list request carries an optional filter and an optional page. The two do not
//! compose: when a page is present the filter is ignored and the page is cut from the
//! full, insertion-ordered collection. Without a page, the filter (if any) selects
//! matching records in insertion order.

use crate::entity::ActorEntity;
use std::ops::Range;

/// A 1-indexed page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub size: u32,
}

impl Page {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Index range of this page within a collection of `len` records.
    ///
    /// Returns an empty range when the page starts past the end. Page 0 is read as page 1.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let size = self.size as usize;
        let from = (self.page.saturating_sub(1) as usize).saturating_mul(size);
        if from > len {
            return 0..0;
        }
        let to = from.saturating_add(size).min(len);
        from..to
    }
}

/// Parameters of a list request.
#[derive(Debug)]
pub struct ListQuery<F> {
    pub filter: Option<F>,
    pub page: Option<Page>,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            filter: None,
            page: None,
        }
    }
}

impl<F> ListQuery<F> {
    /// Every record, in creation order.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn filtered(filter: F) -> Self {
        Self {
            filter: Some(filter),
            page: None,
        }
    }

    pub fn paged(page: Page) -> Self {
        Self {
            filter: None,
            page: Some(page),
        }
    }

    /// Selects records from an insertion-ordered slice.
    pub fn apply<T>(&self, records: &[T]) -> Vec<T>
    where
        T: ActorEntity<Filter = F>,
    {
        if let Some(page) = &self.page {
            return records[page.bounds(records.len())].to_vec();
        }
        match &self.filter {
            Some(filter) => records
                .iter()
                .filter(|record| record.matches(filter))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}
