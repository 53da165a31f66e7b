//! Exercises the fallback discoverer directly against a local static
//! file server.

use api::discovery::discover_album_images;
use axum::Router;
use axum::http::header;
use axum::routing::get;
use common_albums::settings::DiscoverySettings;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower_http::services::ServeDir;

async fn serve_static(root: &Path) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().nest_service("/clientes", ServeDir::new(root.to_path_buf()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn options(base_url: String) -> DiscoverySettings {
    DiscoverySettings {
        base_url,
        max_number: 50,
        fail_limit: 5,
        request_timeout_s: 5,
    }
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[tokio::test]
async fn discovers_images_in_ascending_sequence_order() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "festa/IMG_0002.jpg");
    touch(dir.path(), "festa/IMG_0001.jpg");
    touch(dir.path(), "festa/RIK-0004.jpg");
    let base = serve_static(dir.path()).await;

    let http = reqwest::Client::new();
    let images = discover_album_images(&http, &options(base), "festa").await;

    let files: Vec<&str> = images.iter().map(|i| i.file.as_str()).collect();
    // Number 3 is a gap; the miss streak resets on the hit at 4.
    assert_eq!(files, vec!["IMG_0001.jpg", "IMG_0002.jpg", "RIK-0004.jpg"]);
    assert_eq!(images[0].name, "IMG_0001");
    assert!(images[0].src.ends_with("/clientes/festa/IMG_0001.jpg"));
}

#[tokio::test]
async fn first_candidate_pattern_wins_per_number() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "festa/IMG_0001.jpg");
    touch(dir.path(), "festa/0001.jpg");
    let base = serve_static(dir.path()).await;

    let http = reqwest::Client::new();
    let images = discover_album_images(&http, &options(base), "festa").await;

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].file, "IMG_0001.jpg");
}

#[tokio::test]
async fn empty_album_terminates_at_the_miss_limit() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("vazia")).unwrap();
    let base = serve_static(dir.path()).await;

    let http = reqwest::Client::new();
    let images = discover_album_images(&http, &options(base), "vazia").await;
    assert!(images.is_empty());
}

#[tokio::test]
async fn non_image_responses_do_not_count_as_found() {
    // A server that answers every probe with 200 text/plain.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route(
        "/clientes/{folder}/{file}",
        get(|| async { ([(header::CONTENT_TYPE, "text/plain")], "not an image") }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let http = reqwest::Client::new();
    let images = discover_album_images(&http, &options(format!("http://{addr}")), "festa").await;
    assert!(images.is_empty());
}

#[tokio::test]
async fn unreachable_server_yields_an_empty_result() {
    // Nothing listens on this port; every probe is a transport error.
    let http = reqwest::Client::new();
    let mut opts = options("http://127.0.0.1:9".into());
    opts.max_number = 3;
    opts.fail_limit = 2;
    let images = discover_album_images(&http, &opts, "festa").await;
    assert!(images.is_empty());
}
