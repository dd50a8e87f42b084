use super::*;

#[test]
fn user_articles_query_filters_and_orders_newest_first() {
    assert_eq!(
        user_articles_query("u1"),
        "articles?user_id=eq.u1&select=*&order=created_at.desc"
    );
}

#[test]
fn article_by_id_query_filters_on_id() {
    assert_eq!(article_by_id_query("a9"), "articles?id=eq.a9");
}

#[test]
fn request_failed_message_formats_context_and_status() {
    assert_eq!(
        articles_request_failed_message("saving article", 403),
        "saving article failed: 403"
    );
}
