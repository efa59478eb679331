//! Static assets compiled into the binary

use axum::http::header;
use axum::response::IntoResponse;

const PUBLIC_JS: &str = r#"document.addEventListener('DOMContentLoaded', function () {
  var form = document.getElementById('register-form');
  if (!form) {
    return;
  }

  form.addEventListener('change', function () {
    var params = new URLSearchParams({
      action: 'front_action',
      name: form.elements['name'].value,
      password: form.elements['password'].value,
      email: form.elements['email'].value
    });

    fetch('/admin-ajax.php?' + params.toString())
      .then(function (response) { return response.json(); })
      .then(function (check) { console.log(check); })
      .catch(function (error) { console.log(error); });
  });
});
"#;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="50" viewBox="0 0 50 50"><rect width="50" height="50" fill="#d0d0d0"/><circle cx="25" cy="19" r="9" fill="#f5f5f5"/><rect x="11" y="31" width="28" height="14" rx="7" fill="#f5f5f5"/></svg>
"##;

/// GET /assets/public.js
pub async fn public_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        PUBLIC_JS,
    )
}

/// GET /assets/placeholder.svg
pub async fn placeholder_svg() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}
