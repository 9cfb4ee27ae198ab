// tests/sitemap_generation.rs
// =============================================================================
// End-to-end crawls of the real HTTP fetcher against a local mock server.
// =============================================================================

use std::time::Duration;

use mockito::Server;

use sitemapper::{FetchError, HttpFetcher, PageFetcher, SitemapGenerator};

fn page(hrefs: &[&str]) -> String {
    let mut body = String::from("<html><body>");
    for href in hrefs {
        body.push_str(&format!("<a href=\"{}\">{}</a>", href, href));
    }
    body.push_str("</body></html>");
    body
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_crawls_a_small_site_and_renders_its_sitemap() {
    let _ = env_logger::try_init();

    let mut server = Server::new_async().await;
    let base = server.url();

    // A five-page site. The home page links to itself, two sections, a
    // page that errors out, and a foreign host; the about page repeats
    // two of those links and adds one the home page does not know.
    let home = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page(&[
            "/",
            "/about",
            &format!("{}/contact", base),
            &format!("{}/something-else", base),
            "http://otherhost.test/somewhere-else",
        ]))
        .expect(1)
        .create_async()
        .await;
    let about = server
        .mock("GET", "/about/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page(&[
            "/",
            "/about",
            &format!("{}/contact", base),
            "/about/more-info",
        ]))
        .expect(1)
        .create_async()
        .await;
    let contact = server
        .mock("GET", "/contact/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page(&[]))
        .expect(1)
        .create_async()
        .await;
    // This page answers 500 with links in the body; it must show up in
    // the sitemap exactly once, but nothing behind it gets crawled.
    let something_else = server
        .mock("GET", "/something-else/")
        .with_status(500)
        .with_body(page(&["/hidden"]))
        .expect(1)
        .create_async()
        .await;
    let hidden = server
        .mock("GET", "/hidden/")
        .with_status(200)
        .with_body(page(&[]))
        .expect(0)
        .create_async()
        .await;
    let more_info = server
        .mock("GET", "/about/more-info/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(page(&[]))
        .expect(1)
        .create_async()
        .await;

    let generator = SitemapGenerator::new(&base, 5, fetcher()).unwrap();

    let sitemap = generator.generate().await;

    assert_eq!(
        sitemap,
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
             <url><loc>{0}/</loc></url>\
             <url><loc>{0}/about/</loc></url>\
             <url><loc>{0}/contact/</loc></url>\
             <url><loc>{0}/something-else/</loc></url>\
             <url><loc>{0}/about/more-info/</loc></url>\
             </urlset>",
            base
        )
    );

    // Every page was fetched exactly once, the one behind the broken
    // page not at all.
    home.assert_async().await;
    about.assert_async().await;
    contact.assert_async().await;
    something_else.assert_async().await;
    more_info.assert_async().await;
    hidden.assert_async().await;
}

#[tokio::test]
async fn test_depth_zero_fetches_nothing_beyond_the_seed() {
    let mut server = Server::new_async().await;
    let base = server.url();

    let home = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(page(&["/about"]))
        .expect(1)
        .create_async()
        .await;
    let about = server
        .mock("GET", "/about/")
        .with_status(200)
        .with_body(page(&[]))
        .expect(0)
        .create_async()
        .await;

    let generator = SitemapGenerator::new(&base, 0, fetcher()).unwrap();

    let sitemap = generator.generate().await;

    assert_eq!(
        sitemap,
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
             <url><loc>{}/</loc></url>\
             </urlset>",
            base
        )
    );

    home.assert_async().await;
    about.assert_async().await;
}

#[tokio::test]
async fn test_fetcher_reports_status_errors() {
    let mut server = Server::new_async().await;

    let gone = server
        .mock("GET", "/gone")
        .with_status(404)
        .create_async()
        .await;

    let err = fetcher()
        .fetch(&format!("{}/gone", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(404)));
    gone.assert_async().await;
}

#[tokio::test]
async fn test_fetcher_reports_connection_failures_as_transport_errors() {
    // Nothing listens on port 1.
    let err = fetcher().fetch("http://127.0.0.1:1/").await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
