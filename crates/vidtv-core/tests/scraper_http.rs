//! End-to-end scraping tests against a mock site.

use std::time::Duration;

use vidtv_core::{ClientConfig, ScrapeError, VideoScraper};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PAGE: &str = r#"
<html><body>
<ul id="videoCategory">
    <li class="pcVideoListItem" data-video-vkey="ph111">
        <div class="phimage"><a href="/view_video.php?viewkey=ph111">
            <img class="js-videoThumb" src="https://ci.example/111.jpg">
            <var class="duration">7:05</var>
        </a></div>
        <span class="title"><a href="/view_video.php?viewkey=ph111">First Clip</a></span>
        <span class="views"><var>2.5K</var> views</span>
    </li>
    <li class="pcVideoListItem">
        <span class="title"><a>No Key</a></span>
    </li>
    <li class="pcVideoListItem" data-video-vkey="ph222">
        <div class="phimage"><a><img class="js-videoThumb" data-image="https://ci.example/222.jpg"></a></div>
        <span class="title"><a title="Second Clip"></a></span>
    </li>
</ul>
</body></html>
"#;

const DETAIL_PAGE: &str = r#"
<html>
<head>
    <title>Detail Clip - Site | Site</title>
    <meta property="og:title" content="Detail Clip">
</head>
<body>
    <h1 class="title"><span class="inlineFree">Detail Clip</span></h1>
    <video class="mgp_videoElement">
        <source type="video/mp4" src="https://cdn.example/videos/480P_2000K/ph333.mp4?validfrom=1&amp;hash=abc">
    </video>
    <script>var media = "https://site.example/video/get_media?s=xyz";</script>
</body>
</html>
"#;

fn scraper_for(server: &MockServer) -> VideoScraper {
    let config = ClientConfig::with_base_urls(server.uri(), server.uri());
    VideoScraper::with_config(config).expect("client should build")
}

#[tokio::test]
async fn listing_page_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let videos = scraper_for(&server).get_videos(2).await;

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "ph111");
    assert_eq!(videos[0].title, "First Clip");
    assert_eq!(videos[0].duration, "7:05");
    assert_eq!(videos[0].view_count, "2.5");
    assert_eq!(videos[1].id, "ph222");
    assert_eq!(videos[1].title, "Second Clip");
    assert_eq!(videos[1].thumbnail_url, "https://ci.example/222.jpg");
    assert_eq!(videos[1].duration, "N/A");
}

#[tokio::test]
async fn listing_without_items_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>No more videos</body></html>"))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    assert!(scraper.get_videos(99).await.is_empty());
    assert!(scraper.try_get_videos(99).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_server_error_collapses_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    assert!(scraper.get_videos(1).await.is_empty());

    match scraper.try_get_videos(1).await {
        Err(ScrapeError::Status { code, .. }) => assert_eq!(code, 500),
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn listing_timeout_collapses_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LISTING_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout_secs: 1,
        ..ClientConfig::with_base_urls(server.uri(), server.uri())
    };
    let scraper = VideoScraper::with_config(config).unwrap();

    assert!(scraper.get_videos(1).await.is_empty());
}

#[tokio::test]
async fn detail_page_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view_video.php"))
        .and(query_param("viewkey", "ph333"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let detail = scraper_for(&server)
        .get_video_detail("ph333")
        .await
        .expect("detail should parse");

    assert_eq!(detail.id, "ph333");
    assert_eq!(detail.title, "Detail Clip");
    assert_eq!(
        detail.video_url,
        "https://cdn.example/videos/480P_2000K/ph333.mp4?validfrom=1&hash=abc"
    );
    assert_eq!(detail.qualities.len(), 1);
    assert_eq!(detail.qualities[0].label, "480P_2000K");
}

#[tokio::test]
async fn detail_page_url_resolves_to_its_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view_video.php"))
        .and(query_param("viewkey", "ph333"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let page_url = format!("{}/view_video.php?viewkey=ph333&t=12", server.uri());
    let detail = scraper_for(&server)
        .get_video_detail(&page_url)
        .await
        .expect("detail should parse");

    assert_eq!(detail.id, "ph333");
    assert_eq!(detail.title, "Detail Clip");
}

#[tokio::test]
async fn detail_without_video_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view_video.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Removed</title></head><body></body></html>"),
        )
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    assert!(scraper.get_video_detail("gone").await.is_none());
    assert!(scraper.try_get_video_detail("gone").await.unwrap().is_none());
}

#[tokio::test]
async fn detail_not_found_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view_video.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(scraper_for(&server).get_video_detail("ph404").await.is_none());
}

#[tokio::test]
async fn endpoint_probe_does_not_change_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view_video.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_PAGE))
        .mount(&server)
        .await;

    let probing = ClientConfig {
        probe_media_endpoints: true,
        ..ClientConfig::with_base_urls(server.uri(), server.uri())
    };
    let with_probe = VideoScraper::with_config(probing).unwrap();
    let without_probe = scraper_for(&server);

    assert_eq!(
        with_probe.get_video_detail("ph333").await,
        without_probe.get_video_detail("ph333").await
    );
}

#[tokio::test]
async fn endpoint_scan_fetches_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/view_video.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_PAGE))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let page_url = format!("{}/view_video.php?viewkey=ph333", server.uri());

    assert_eq!(
        scraper.find_media_endpoints(&page_url).await,
        ["https://site.example/video/get_media?s=xyz"]
    );
}

#[tokio::test]
async fn endpoint_scan_failure_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    assert!(scraper.find_media_endpoints(&server.uri()).await.is_empty());
}
