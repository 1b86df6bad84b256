use reqwasm::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{CommentPayload, NewPost, Post, PostUpdate, SortOrder};

pub const POSTS_PER_PAGE: usize = 10;

fn api_root(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn posts_url(base: &str, page: usize, limit: usize, sort: &SortOrder) -> String {
    let mut url = format!("{}/posts?page={page}&limit={limit}", api_root(base));
    if let Some(field) = sort.field {
        url.push_str(&format!(
            "&sort={}&direction={}",
            field.query_value(),
            sort.direction.query_value()
        ));
    }
    url
}

pub fn post_url(base: &str, id: i64) -> String {
    format!("{}/posts/{id}", api_root(base))
}

pub fn comments_url(base: &str, id: i64) -> String {
    format!("{}/posts/{id}/comments", api_root(base))
}

/// Builds the search URL, omitting blank query fields. Returns `None` when
/// both fields are blank; callers fall back to a plain reload.
pub fn search_url(base: &str, title: &str, content: &str) -> Option<String> {
    let mut params = Vec::new();
    let title = title.trim();
    if !title.is_empty() {
        params.push(format!("title={}", urlencoding::encode(title)));
    }
    let content = content.trim();
    if !content.is_empty() {
        params.push(format!("content={}", urlencoding::encode(content)));
    }
    if params.is_empty() {
        return None;
    }
    Some(format!("{}/posts/search?{}", api_root(base), params.join("&")))
}

async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".into());
        return Err(format!("Error {status}: {text}"));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

fn json_request(request: Request, payload: &impl Serialize) -> Result<Request, String> {
    let body = serde_json::to_string(payload).map_err(|e| format!("Failed to encode body: {e}"))?;
    Ok(request
        .header("Content-Type", "application/json")
        .body(body))
}

pub async fn fetch_posts(
    base: &str,
    page: usize,
    limit: usize,
    sort: &SortOrder,
) -> Result<Vec<Post>, String> {
    fetch_post_list(&posts_url(base, page, limit, sort)).await
}

pub async fn fetch_post_list(url: &str) -> Result<Vec<Post>, String> {
    send_json(Request::get(url)).await
}

pub async fn create_post(base: &str, payload: &NewPost) -> Result<Post, String> {
    let request = json_request(
        Request::post(&format!("{}/posts", api_root(base))),
        payload,
    )?;
    send_json(request).await
}

pub async fn update_post(base: &str, id: i64, payload: &PostUpdate) -> Result<Post, String> {
    let request = json_request(Request::put(&post_url(base, id)), payload)?;
    send_json(request).await
}

pub async fn delete_post(base: &str, id: i64) -> Result<(), String> {
    let response = Request::delete(&post_url(base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".into());
        return Err(format!("Error {status}: {text}"));
    }
    Ok(())
}

pub async fn create_comment(base: &str, id: i64, payload: &CommentPayload) -> Result<Post, String> {
    let request = json_request(Request::post(&comments_url(base, id)), payload)?;
    send_json(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortDirection, SortField};

    #[test]
    fn posts_url_carries_page_and_limit() {
        let url = posts_url("http://localhost:5002/api", 1, 10, &SortOrder::default());
        assert_eq!(url, "http://localhost:5002/api/posts?page=1&limit=10");
    }

    #[test]
    fn posts_url_trims_trailing_slash() {
        let url = posts_url("http://localhost:5002/api/", 2, 10, &SortOrder::default());
        assert_eq!(url, "http://localhost:5002/api/posts?page=2&limit=10");
    }

    #[test]
    fn posts_url_appends_sort_only_when_set() {
        let sort = SortOrder {
            field: Some(SortField::Title),
            direction: SortDirection::Desc,
        };
        let url = posts_url("http://x", 1, 10, &sort);
        assert_eq!(url, "http://x/posts?page=1&limit=10&sort=title&direction=desc");
    }

    #[test]
    fn post_and_comment_urls_embed_the_id() {
        assert_eq!(post_url("http://x/", 42), "http://x/posts/42");
        assert_eq!(comments_url("http://x", 42), "http://x/posts/42/comments");
    }

    #[test]
    fn search_url_omits_blank_fields() {
        assert_eq!(
            search_url("http://x", "flask", ""),
            Some("http://x/posts/search?title=flask".to_string())
        );
        assert_eq!(
            search_url("http://x", "", "  rust  "),
            Some("http://x/posts/search?content=rust".to_string())
        );
        assert_eq!(search_url("http://x", "  ", ""), None);
    }

    #[test]
    fn search_url_encodes_query_terms() {
        assert_eq!(
            search_url("http://x", "a b", "c&d"),
            Some("http://x/posts/search?title=a%20b&content=c%26d".to_string())
        );
    }
}
