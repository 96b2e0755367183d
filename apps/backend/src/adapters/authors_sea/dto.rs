//! DTOs for authors_sea adapter.

use sea_orm::Order;

use crate::entities::authors;

/// Ordering applied to an author listing, outermost key first.
#[derive(Debug, Clone, Default)]
pub struct AuthorListQuery {
    pub order_by: Vec<(authors::Column, Order)>,
}

impl AuthorListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_by(mut self, column: authors::Column, order: Order) -> Self {
        self.order_by.push((column, order));
        self
    }
}
