//! Author repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, Order};
use time::Date;

use crate::adapters::authors_sea::{self as authors_adapter, AuthorListQuery};
use crate::entities::authors;
use crate::errors::domain::DomainError;

/// Author domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl Author {
    /// "Family, Given". A missing part is dropped along with the comma.
    pub fn name(&self) -> String {
        let family = self.family_name.trim();
        let first = self.first_name.trim();
        match (family.is_empty(), first.is_empty()) {
            (false, false) => format!("{family}, {first}"),
            (false, true) => family.to_string(),
            (true, false) => first.to_string(),
            (true, true) => String::new(),
        }
    }

    /// "birth - death" in years; an unknown side renders empty.
    pub fn lifespan(&self) -> String {
        if self.date_of_birth.is_none() && self.date_of_death.is_none() {
            return String::new();
        }
        let year = |d: Option<Date>| d.map(|d| d.year().to_string()).unwrap_or_default();
        format!("{} - {}", year(self.date_of_birth), year(self.date_of_death))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSortField {
    FamilyName,
    FirstName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Accepts the conventional `1` / `-1` direction values.
impl TryFrom<i32> for SortDirection {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SortDirection::Asc),
            -1 => Ok(SortDirection::Desc),
            other => Err(DomainError::validation(format!(
                "sort direction must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Sort options for listing authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorSort {
    pub field: AuthorSortField,
    pub direction: SortDirection,
}

impl AuthorSort {
    pub fn new(field: AuthorSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// `{family_name: 1}`
    pub fn by_family_name() -> Self {
        Self::new(AuthorSortField::FamilyName, SortDirection::Asc)
    }

    fn to_query(self) -> AuthorListQuery {
        let order = Order::from(self.direction);
        match self.field {
            // first_name breaks ties so equal family names come back in a stable order
            AuthorSortField::FamilyName => AuthorListQuery::new()
                .then_by(authors::Column::FamilyName, order)
                .then_by(authors::Column::FirstName, Order::Asc),
            AuthorSortField::FirstName => {
                AuthorListQuery::new().then_by(authors::Column::FirstName, order)
            }
        }
    }
}

/// List every author. With `sort`, ordering is done by the database;
/// without it rows come back in storage order.
pub async fn get_all_authors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sort: Option<AuthorSort>,
) -> Result<Vec<Author>, DomainError> {
    let query = sort.map(AuthorSort::to_query).unwrap_or_default();
    let rows = authors_adapter::find_all(conn, query).await?;
    Ok(rows.into_iter().map(Author::from).collect())
}

impl From<authors::Model> for Author {
    fn from(model: authors::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            family_name: model.family_name,
            date_of_birth: model.date_of_birth,
            date_of_death: model.date_of_death,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn author(first: &str, family: &str, born: Option<Date>, died: Option<Date>) -> Author {
        Author {
            id: 1,
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: born,
            date_of_death: died,
        }
    }

    #[test]
    fn name_is_family_comma_given() {
        let a = author("Sylvia", "Plath", None, None);
        assert_eq!(a.name(), "Plath, Sylvia");
    }

    #[test]
    fn name_drops_missing_parts() {
        assert_eq!(author("", "Homer", None, None).name(), "Homer");
        assert_eq!(author("Sappho", "  ", None, None).name(), "Sappho");
        assert_eq!(author("", "", None, None).name(), "");
    }

    #[test]
    fn lifespan_formats_years() {
        let a = author(
            "Sylvia",
            "Plath",
            Some(date!(1932 - 10 - 27)),
            Some(date!(1963 - 02 - 11)),
        );
        assert_eq!(a.lifespan(), "1932 - 1963");
    }

    #[test]
    fn lifespan_with_unknown_sides() {
        assert_eq!(
            author("Amitav", "Ghosh", Some(date!(1956 - 07 - 11)), None).lifespan(),
            "1956 - "
        );
        assert_eq!(
            author("Anon", "Ymous", None, Some(date!(1200 - 01 - 01))).lifespan(),
            " - 1200"
        );
        assert_eq!(author("Anon", "Ymous", None, None).lifespan(), "");
    }

    #[test]
    fn sort_direction_from_conventional_integers() {
        assert_eq!(SortDirection::try_from(1).unwrap(), SortDirection::Asc);
        assert_eq!(SortDirection::try_from(-1).unwrap(), SortDirection::Desc);
        assert!(matches!(
            SortDirection::try_from(0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn family_name_sort_orders_by_family_then_first() {
        let query = AuthorSort::by_family_name().to_query();
        let columns: Vec<_> = query
            .order_by
            .iter()
            .map(|(column, _)| format!("{column:?}"))
            .collect();
        assert_eq!(columns, vec!["FamilyName", "FirstName"]);
    }

    #[test]
    fn unsorted_listing_has_no_order_by() {
        let query = None::<AuthorSort>.map(AuthorSort::to_query).unwrap_or_default();
        assert!(query.order_by.is_empty());
    }
}
