//! HTML form front end.
//!
//! - `GET /` renders the add and search forms
//! - `POST /add` embeds and stores `add_phrase`
//! - `POST /search` lists the phrases nearest to `search_phrase`
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpServer};
//! use phrase_search::config::Settings;
//! use phrase_search::PhraseSearch;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = web::Data::new(PhraseSearch::connect(&Settings::from_env()?).await?);
//!     HttpServer::new(move || App::new().app_data(app.clone()).configure(phrase_search::web::server::config))
//!         .bind("0.0.0.0:3000")?
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod page;
pub mod server;
