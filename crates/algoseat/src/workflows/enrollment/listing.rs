use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicationStatus};
use crate::config::MAX_PAGE_SIZE;

/// 1-based page selector for status-partitioned lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }.normalized()
    }

    /// Page 0 becomes page 1; `per_page` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T: Clone> Paginated<T> {
    pub fn from_slice(items: &[T], request: PageRequest) -> Self {
        let request = request.normalized();
        let total_items = items.len();
        let total_pages = total_items.div_ceil(request.per_page);
        let page_items = items
            .iter()
            .skip(request.offset())
            .take(request.per_page)
            .cloned()
            .collect();

        Self {
            items: page_items,
            meta: PaginationMeta {
                page: request.page,
                per_page: request.per_page,
                total_items,
                total_pages,
            },
        }
    }
}

/// One page of an application list, with the headings shown above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusListView {
    pub status: ApplicationStatus,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[serde(flatten)]
    pub page: Paginated<Applicant>,
}

/// Applicants holding `status`, in roster order.
pub fn applicants_with_status(
    applicants: &[Applicant],
    status: ApplicationStatus,
    request: PageRequest,
) -> StatusListView {
    let matching = applicants
        .iter()
        .filter(|applicant| applicant.status == status)
        .cloned()
        .collect::<Vec<_>>();

    StatusListView {
        status,
        title: status.list_title(),
        subtitle: status.list_subtitle(),
        page: Paginated::from_slice(&matching, request),
    }
}
