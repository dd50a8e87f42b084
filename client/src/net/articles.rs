//! Article persistence over the hosted backend's `articles` table.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with display-ready messages so pages
//! can surface failures inline without crashing the UI.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use super::session_api::Backend;
use super::types::ArticleRow;
#[cfg(feature = "csr")]
use super::types::NewArticle;

#[cfg(any(test, feature = "csr"))]
fn articles_request_failed_message(context: &str, status: u16) -> String {
    format!("{context} failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn user_articles_query(user_id: &str) -> String {
    format!("articles?user_id=eq.{user_id}&select=*&order=created_at.desc")
}

#[cfg(any(test, feature = "csr"))]
fn article_by_id_query(article_id: &str) -> String {
    format!("articles?id=eq.{article_id}")
}

/// Persist a generated article for a user.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn save_article(
    backend: &Backend,
    title: &str,
    content: &str,
    user_id: &str,
) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = backend.config.rest_endpoint("articles");
        let payload = NewArticle {
            title: title.to_owned(),
            content: content.to_owned(),
            user_id: user_id.to_owned(),
        };
        let response = gloo_net::http::Request::post(&url)
            .header("apikey", backend.config.anon_key())
            .header("Authorization", &format!("Bearer {}", backend.bearer()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.ok() {
            Ok(())
        } else {
            Err(articles_request_failed_message("saving article", response.status()))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (backend, title, content, user_id);
        Err("not available on this build".to_owned())
    }
}

/// Fetch a user's articles, newest first.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn fetch_user_articles(backend: &Backend, user_id: &str) -> Result<Vec<ArticleRow>, String> {
    #[cfg(feature = "csr")]
    {
        let url = backend.config.rest_endpoint(&user_articles_query(user_id));
        let response = gloo_net::http::Request::get(&url)
            .header("apikey", backend.config.anon_key())
            .header("Authorization", &format!("Bearer {}", backend.bearer()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(articles_request_failed_message("loading articles", response.status()));
        }
        response.json::<Vec<ArticleRow>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (backend, user_id);
        Ok(Vec::new())
    }
}

/// Delete an article by id.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn delete_article(backend: &Backend, article_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = backend.config.rest_endpoint(&article_by_id_query(article_id));
        let response = gloo_net::http::Request::delete(&url)
            .header("apikey", backend.config.anon_key())
            .header("Authorization", &format!("Bearer {}", backend.bearer()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.ok() {
            Ok(())
        } else {
            Err(articles_request_failed_message("deleting article", response.status()))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (backend, article_id);
        Err("not available on this build".to_owned())
    }
}
