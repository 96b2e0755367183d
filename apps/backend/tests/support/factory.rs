use library_backend::entities::authors;
use time::macros::date;
use time::Date;

pub fn author_row(
    id: i64,
    first_name: &str,
    family_name: &str,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
) -> authors::Model {
    authors::Model {
        id,
        first_name: first_name.to_string(),
        family_name: family_name.to_string(),
        date_of_birth,
        date_of_death,
    }
}

/// The four sample authors in insertion order (not sorted).
pub fn sample_authors() -> Vec<authors::Model> {
    vec![
        author_row(1, "Robi", "Tagore", Some(date!(1900 - 01 - 01)), Some(date!(2000 - 01 - 01))),
        author_row(2, "Jane", "Austen", Some(date!(1950 - 01 - 01)), Some(date!(2010 - 01 - 01))),
        author_row(3, "Amitav", "Ghosh", Some(date!(1980 - 01 - 01)), Some(date!(2020 - 01 - 01))),
        author_row(4, "Sylvia", "Plath", Some(date!(1927 - 10 - 27)), Some(date!(1964 - 02 - 11))),
    ]
}

/// The sample authors as the database returns them for `ORDER BY family_name`.
pub fn sample_authors_by_family_name() -> Vec<authors::Model> {
    let mut rows = sample_authors();
    rows.sort_by(|a, b| a.family_name.cmp(&b.family_name));
    rows
}
