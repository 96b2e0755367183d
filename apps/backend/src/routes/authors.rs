use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::authors::{self, Author, AuthorSort};
use crate::state::app_state::AppState;

pub const NO_AUTHORS_MESSAGE: &str = "No authors found";

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub name: String,
    pub lifespan: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            name: author.name(),
            lifespan: author.lifespan(),
        }
    }
}

/// Every retrieval failure surfaces as a 5xx.
fn retrieval_failure(err: AppError) -> AppError {
    if err.status().is_server_error() {
        err
    } else {
        AppError::db(ErrorCode::DbError, "Failed to load authors")
    }
}

/// `GET /authors`: every author ordered by family name.
///
/// Ordering is left to the database; the list is returned as-is.
async fn list_authors(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let result = match require_db(&app_state) {
        Ok(db) => authors::get_all_authors(db, Some(AuthorSort::by_family_name()))
            .await
            .map_err(AppError::from),
        Err(e) => Err(e),
    };

    let authors = match result {
        Ok(authors) => authors,
        Err(err) => {
            let err = retrieval_failure(err);
            error!(error = %err, code = %err.code(), "authors.list_failed");
            return Err(err);
        }
    };

    if authors.is_empty() {
        return Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(NO_AUTHORS_MESSAGE));
    }

    let body: Vec<AuthorResponse> = authors.into_iter().map(AuthorResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_authors))
            .default_service(web::to(method_not_allowed)),
    );
}
