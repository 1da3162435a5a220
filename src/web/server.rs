use crate::application::search::NUM_RESULTS;
use crate::domain::error::DomainError;
use crate::web::page::{error_page, PageView};
use crate::PhraseSearch;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

// --- Form structs ---

#[derive(Deserialize)]
struct AddForm {
    add_phrase: String,
}

#[derive(Deserialize)]
struct SearchForm {
    search_phrase: String,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(error_page())
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

// --- Handlers ---

async fn index_handler() -> HttpResponse {
    html(PageView::default().render())
}

async fn add_handler(
    app: web::Data<PhraseSearch>,
    form: web::Form<AddForm>,
) -> Result<HttpResponse, DomainError> {
    let phrase = app.add_phrase(&form.add_phrase).await?;
    Ok(html(PageView::added(&phrase.text).render()))
}

async fn search_handler(
    app: web::Data<PhraseSearch>,
    form: web::Form<SearchForm>,
) -> Result<HttpResponse, DomainError> {
    let outcome = app.search(&form.search_phrase, NUM_RESULTS).await?;
    tracing::debug!(query = %form.search_phrase, ?outcome, "search results");
    Ok(html(PageView::searched(&form.search_phrase, &outcome).render()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index_handler)))
        .service(web::resource("/add").route(web::post().to(add_handler)))
        .service(web::resource("/search").route(web::post().to(search_handler)));
}
