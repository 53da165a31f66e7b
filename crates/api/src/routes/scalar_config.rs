//! Custom HTML for the Scalar documentation page at `/docs`.

use serde_json::{json, to_string_pretty, to_value};
use utoipa::openapi::OpenApi;

const PAGE_TITLE: &str = "Portfolio API Reference";

/// Renders the Scalar UI page with the gallery's page options and the
/// `OpenApi` document baked into one configuration object.
///
/// # Panics
///
/// Panics if the `OpenApi` document cannot be serialized to JSON.
#[must_use]
pub fn get_custom_html(open_api: &OpenApi) -> String {
    let document = to_value(open_api).expect("OpenApi document should serialize");
    let config = to_string_pretty(&json!({
        "content": document,
        "layout": "classic",
        "theme": "kepler",
        "showSidebar": true,
        "hideModels": false,
        "withDefaultFonts": true,
    }))
    .expect("Scalar configuration should serialize");

    format!(
        r#"<!doctype html>
<html>
  <head>
    <title>{PAGE_TITLE}</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <div id="app"></div>
    <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
    <script>
      Scalar.createApiReference('#app', {config})
    </script>
  </body>
</html>
"#,
    )
}
