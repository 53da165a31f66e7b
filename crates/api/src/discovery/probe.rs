use super::patterns::candidate_names;
use common_albums::ImageRef;
use common_albums::settings::DiscoverySettings;
use http::header::CONTENT_TYPE;
use tracing::{debug, info};

/// Approximates an album's image list by probing the static file
/// server with HEAD requests.
///
/// Sequence numbers are tried from 1 up to `max_number`; for each
/// number the candidate names are probed in order and the first hit is
/// recorded. A streak of `fail_limit` numbers without any hit aborts
/// the scan early (the album is assumed to have ended). Probes are
/// issued one at a time, so at most one request is in flight.
///
/// Individual probe failures are the normal case and are only traced;
/// a fully empty album comes back as an empty list, never an error.
pub async fn discover_album_images(
    http: &reqwest::Client,
    discovery: &DiscoverySettings,
    folder: &str,
) -> Vec<ImageRef> {
    let base = discovery.base_url.trim_end_matches('/');
    info!("Probing for images of album '{}' at {}", folder, base);

    let mut images = Vec::new();
    let mut consecutive_misses = 0u32;

    for i in 1..=discovery.max_number {
        let mut found = false;
        for name in candidate_names(i) {
            let url = format!("{base}/clientes/{folder}/{name}");
            if probe_exists(http, &url).await {
                let stem = name.strip_suffix(".jpg").unwrap_or(&name).to_string();
                images.push(ImageRef {
                    name: stem,
                    file: name,
                    src: url,
                });
                found = true;
                break;
            }
        }

        if found {
            consecutive_misses = 0;
        } else {
            consecutive_misses += 1;
            if consecutive_misses >= discovery.fail_limit {
                break;
            }
        }
    }

    info!("Probe for '{}' found {} images", folder, images.len());
    images
}

/// One existence check. A 2xx response with an `image/` content type
/// counts as found; anything else, including transport errors, counts
/// as absent.
async fn probe_exists(http: &reqwest::Client, url: &str) -> bool {
    match http.head(url).send().await {
        Ok(response) => {
            if !response.status().is_success() {
                return false;
            }
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|ct| ct.starts_with("image/"))
        }
        Err(e) => {
            debug!("Probe failed for {}: {}", url, e);
            false
        }
    }
}
