pub mod root;
pub mod wiki;

use crate::{error::Error, naming::PageName, templates};
use askama::Template;
use std::convert::Infallible;
use warp::{
    http::StatusCode,
    reject,
    reply::{self, Response},
    Rejection, Reply,
};

fn view_url(name: &PageName) -> String {
    format!("/view/{}", name)
}

fn found(location: String) -> impl Reply {
    reply::with_header(StatusCode::FOUND, "location", location)
}

fn text(status: StatusCode, body: String) -> Response {
    reply::with_status(body, status).into_response()
}

fn not_found() -> Response {
    match templates::Error::not_found().render() {
        Ok(html) => reply::with_status(reply::html(html), StatusCode::NOT_FOUND).into_response(),
        Err(e) => {
            tracing::error!("Can't render error page: {}", e);
            text(StatusCode::NOT_FOUND, "Not found".to_owned())
        }
    }
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    Ok(if err.is_not_found() {
        not_found()
    } else if let Some(error) = err.find::<Error>() {
        // raw error text, including server paths, goes to the client
        text(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        text(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_owned(),
        )
    } else if err.find::<reject::PayloadTooLarge>().is_some() {
        text(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large".to_owned())
    } else if err.find::<reject::LengthRequired>().is_some() {
        text(StatusCode::LENGTH_REQUIRED, "Length required".to_owned())
    } else if let Some(e) = err.find::<warp::body::BodyDeserializeError>() {
        text(StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<reject::UnsupportedMediaType>().is_some() {
        text(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported media type".to_owned(),
        )
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        text(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_owned(),
        )
    })
}
