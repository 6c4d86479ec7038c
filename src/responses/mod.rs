pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

// These two *are* in responses/errors.rs
pub use errors::{error_to_response, ResultResp};

pub use assets::static_response;
pub use html::{html_response, html_response_with_cookie};
pub use json::json_response;
