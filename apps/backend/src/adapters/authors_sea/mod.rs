//! SeaORM adapter for the author repository.

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::authors;

pub mod dto;

pub use dto::AuthorListQuery;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    query: AuthorListQuery,
) -> Result<Vec<authors::Model>, sea_orm::DbErr> {
    let mut select = authors::Entity::find();
    for (column, order) in query.order_by {
        select = select.order_by(column, order);
    }
    select.all(conn).await
}
