use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Same as [`html_response`], with a `Set-Cookie` header attached. Used by
/// the detail page to persist the recently-viewed list.
pub fn html_response_with_cookie(markup: Markup, cookie: &str) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Set-Cookie", cookie)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
