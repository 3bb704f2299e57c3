//! Listing engine: one paged store call with defaulted parameters

use crate::core::compare::{Comparator, Predicate};
use crate::core::error::{EquipmentsResult, ValidationError};
use crate::core::extension::Extension;
use crate::core::query::{DEFAULT_PAGE, DEFAULT_SIZE, ListResult};
use crate::core::store::ExtensionStore;

/// Resolved pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    /// Apply the defaults to missing values
    ///
    /// Pages are 1-based, so an explicit page 0 is rejected.
    pub fn resolve(page: Option<usize>, size: Option<usize>) -> EquipmentsResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(ValidationError::FieldError {
                field: "page".to_string(),
                message: "page numbers start at 1".to_string(),
            }
            .into());
        }
        Ok(Self {
            page,
            size: size.unwrap_or(DEFAULT_SIZE),
        })
    }
}

/// List one page of `E`
///
/// The store does the filtering, ordering and slicing in a single call. An
/// empty answer always comes back as a well-formed page carrying the requested
/// page and size with a total of zero.
pub async fn list_page<E: Extension>(
    store: &dyn ExtensionStore<E>,
    predicate: Predicate<E>,
    comparator: Option<Comparator<E>>,
    page: Option<usize>,
    size: Option<usize>,
) -> EquipmentsResult<ListResult<E>> {
    let request = PageRequest::resolve(page, size)?;
    let result = store
        .list_page(Some(predicate), comparator, request.page, request.size)
        .await?;

    tracing::debug!(
        kind = E::gvk().kind,
        page = request.page,
        size = request.size,
        total = result.total,
        "listed page"
    );

    if result.total == 0 && result.is_empty() {
        return Ok(ListResult::empty(request.page, request.size));
    }
    Ok(result)
}
