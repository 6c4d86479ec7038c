use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::Path;

/// Serves a file from the `static/` directory. `name` is the path segment
/// after `/static/`; anything with a path separator or parent reference is
/// rejected before touching the filesystem.
pub fn static_response(name: &str) -> ResultResp {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ServerError::NotFound);
    }

    let path = Path::new("static").join(name);
    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(name).as_ref())
        .header("Cache-Control", "max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn content_type(name: &str) -> Mime {
    match name.rsplit('.').next() {
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
