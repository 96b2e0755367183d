pub mod authors;

pub use authors::Entity as Authors;
pub use authors::Model as AuthorRow;
