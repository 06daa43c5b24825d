//! NewsAPI.org integration
//!
//! Client for the NewsAPI.org `top-headlines` endpoint
//! (<https://newsapi.org/docs/endpoints/top-headlines>).

pub mod client;
mod error;
mod models;

pub use client::{NewsApiClient, NewsApiConfig, NewsClient, PAGE_SIZE};
pub use error::NewsError;
pub use models::{ApiArticle, ArticleSource, HeadlinesResponse};
