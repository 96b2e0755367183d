mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use library_backend::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use library_backend::{build_state, AppError};
use sea_orm::DbErr;
use support::create_test_app;

async fn fail_with(err: AppError) -> Result<HttpResponse, AppError> {
    Err(err)
}

async fn call_failing_route(
    err: impl Fn() -> AppError + Clone + Send + Sync + 'static,
) -> actix_web::dev::ServiceResponse {
    let state = build_state().build().await.expect("build state");
    let app = create_test_app(state)
        .with_routes(move |cfg| {
            let err = err.clone();
            cfg.route("/fail", web::get().to(move || fail_with(err())));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/fail").to_request();
    test::call_service(&app, req).await
}

#[actix_web::test]
async fn validation_maps_to_400() {
    let resp = call_failing_route(|| DomainError::validation("bad sort").into()).await;
    let problem =
        assert_problem_details_from_service_response(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST)
            .await;
    assert_eq!(problem.detail, "bad sort");
}

#[actix_web::test]
async fn not_found_maps_to_404() {
    let resp = call_failing_route(|| {
        DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found").into()
    })
    .await;
    assert_problem_details_from_service_response(resp, "NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn db_timeout_maps_to_500() {
    let resp = call_failing_route(|| {
        DomainError::infra(InfraErrorKind::Timeout, "Database timeout").into()
    })
    .await;
    assert_problem_details_from_service_response(
        resp,
        "DB_TIMEOUT",
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
}

#[actix_web::test]
async fn db_unavailable_maps_to_500() {
    let resp = call_failing_route(|| {
        DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable").into()
    })
    .await;
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
}

#[actix_web::test]
async fn raw_db_err_is_sanitized() {
    let resp = call_failing_route(|| {
        DbErr::Custom("relation \"authors\" does not exist".to_string()).into()
    })
    .await;
    let problem = assert_problem_details_from_service_response(
        resp,
        "DB_ERROR",
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert!(!problem.detail.contains("relation"));
    assert_eq!(problem.type_, "https://locallibrary.app/errors/DB_ERROR");
}
