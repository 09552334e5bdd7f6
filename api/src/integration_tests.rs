//! Full integration tests for the RSS renderer
//!
//! Drive the real router (system clock, tracing error log) end to end:
//! JSON payload in, RSS or a 500 JSON body out.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::{router, AppState};

    fn test_config() -> Config {
        Config {
            port: 0,
            include_itunes_tags: true,
            elevate_categories: true,
            default_generator: "Feed delivered by Clay".to_string(),
            default_docs: "http://blogs.law.harvard.edu/tech/rss".to_string(),
        }
    }

    fn server() -> TestServer {
        TestServer::new(router(AppState::new(&test_config()))).unwrap()
    }

    fn meta() -> Value {
        json!({"title": "Show", "description": "D", "link": "http://x"})
    }

    #[tokio::test]
    async fn health_check() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn renders_feed_with_elevated_categories() {
        let response = server()
            .post("/rss")
            .json(&json!({
                "feed": [
                    [{"title": "Ep1"}, {"category": "News"}],
                    [{"title": "Ep2"}, {"category": "Tech"}]
                ],
                "meta": meta()
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "text/rss+xml");

        let xml = response.text();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<rss version=\"2.0\" xmlns:content="));
        assert!(xml.contains("\t\t<title>Show</title>\n\t\t<description>D</description>\n\t\t<link>http://x</link>"));
        assert!(xml.contains("\t\t<category>News,Tech</category>"));
        assert_eq!(xml.matches("<item>").count(), 2);
        assert!(xml.contains("\t\t\t<title>Ep2</title>\n\t\t\t<category>Tech</category>"));

        let channel_category = xml.find("<category>News,Tech</category>").unwrap();
        let first_item = xml.find("<item>").unwrap();
        assert!(channel_category < first_item);
    }

    #[tokio::test]
    async fn renders_channel_image_from_first_item() {
        let response = server()
            .post("/rss")
            .json(&json!({
                "feed": [
                    [{"title": "Ep1"}, {"image": {"url": "http://x/a.png"}}],
                    [{"title": "Ep2"}, {"image": {"url": "http://x/b.png"}}]
                ],
                "meta": meta()
            }))
            .await;

        response.assert_status_ok();
        let xml = response.text();
        assert!(xml.contains(
            "<image>\n\t\t\t<url>http://x/a.png</url>\n\t\t\t<link>http://x</link>\n\t\t\t<title>Show</title>\n\t\t</image>"
        ));
        assert!(!xml.contains("http://x/b.png"));
        assert_eq!(xml.matches("<image>").count(), 1);
    }

    #[tokio::test]
    async fn empty_feed_renders_metadata_only() {
        let response = server()
            .post("/rss")
            .json(&json!({"feed": [], "meta": meta()}))
            .await;

        response.assert_status_ok();
        let xml = response.text();
        assert!(!xml.contains("<item>"));
        assert!(!xml.contains("<category>"));
        assert!(xml.contains("<generator>Feed delivered by Clay</generator>"));
        assert!(xml.contains("<docs>http://blogs.law.harvard.edu/tech/rss</docs>"));
        assert!(xml.contains("<lastBuildDate>"));
    }

    #[tokio::test]
    async fn null_attribute_is_omitted_from_root() {
        let response = server()
            .post("/rss")
            .json(&json!({
                "feed": [],
                "meta": meta(),
                "attr": {"xmlns:custom": null, "xmlns:media": "", "xmlns:atom": "http://www.w3.org/2005/Atom"}
            }))
            .await;

        response.assert_status_ok();
        let xml = response.text();
        assert!(!xml.contains("xmlns:custom"));
        assert!(!xml.contains("xmlns:media"));
        assert!(xml.contains("xmlns:atom=\"http://www.w3.org/2005/Atom\""));
    }

    #[tokio::test]
    async fn itunes_block_declares_namespace() {
        let mut meta = meta();
        meta["itunes"] = json!({
            "author": "Host",
            "explicit": true,
            "categories": [{"text": "News"}]
        });

        let response = server()
            .post("/rss")
            .json(&json!({"feed": [], "meta": meta}))
            .await;

        response.assert_status_ok();
        let xml = response.text();
        assert!(xml.contains("xmlns:itunes=\"http://www.itunes.com/dtds/podcast-1.0.dtd\""));
        assert!(xml.contains("<itunes:author>Host</itunes:author>"));
        assert!(xml.contains("<itunes:explicit>true</itunes:explicit>"));
        assert!(xml.contains("<itunes:category text=\"News\"/>"));
    }

    #[tokio::test]
    async fn missing_link_responds_500_json() {
        let response = server()
            .post("/rss")
            .json(&json!({
                "feed": [[{"title": "Ep1"}]],
                "meta": {"title": "Show", "description": "D"}
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["status"], 500);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("are all required in the `meta` object for the RSS renderer"));
        assert!(!response.text().contains("<?xml"));
    }

    #[tokio::test]
    async fn malformed_item_responds_500_json() {
        let response = server()
            .post("/rss")
            .json(&json!({"feed": [{"title": "not wrapped"}], "meta": meta()}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["status"], 500);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Malformed feed data"));
    }

    fn assert_error_body(response: &axum_test::TestResponse, expected_prefix: &str) {
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["status"], 500);
        let message = body["message"].as_str().unwrap();
        assert!(
            message.starts_with(expected_prefix),
            "unexpected message: {}",
            message
        );
    }

    #[tokio::test]
    async fn malformed_opt_record_responds_500_json() {
        let mut meta = meta();
        meta["opt"] = json!([{"a": 1, "b": 2}]);

        let response = server()
            .post("/rss")
            .json(&json!({"feed": [], "meta": meta}))
            .await;

        assert_error_body(&response, "Malformed feed data");
    }

    #[tokio::test]
    async fn mistyped_generator_responds_500_json() {
        let mut meta = meta();
        meta["generator"] = json!(5);

        let response = server()
            .post("/rss")
            .json(&json!({"feed": [], "meta": meta}))
            .await;

        assert_error_body(&response, "Malformed feed data");
    }

    #[tokio::test]
    async fn null_payload_responds_500_json() {
        let response = server().post("/rss").json(&Value::Null).await;

        assert_error_body(&response, "No data sent to the XML renderer");
    }

    #[tokio::test]
    async fn absent_payload_responds_500_json() {
        let response = server().post("/rss").await;

        assert_error_body(&response, "No data sent to the XML renderer");
    }

    #[tokio::test]
    async fn invalid_json_responds_500_json() {
        let response = server().post("/rss").text("{\"feed\": [").await;

        assert_error_body(&response, "Malformed feed data: invalid JSON body");
    }
}
