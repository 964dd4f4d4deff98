use crate::body::BytesBody;
use crate::file::{self, ReadError};
use crate::mime;
use crate::resolve;
use hyper::header::{self, HeaderValue};
use hyper::{Request, Response, StatusCode};
use std::path::PathBuf;

pub struct State {
    pub root: PathBuf,
    pub index: String,
}

const NOT_FOUND_PAGE: &str =
    "<h1>404 - File Not Found</h1><p>The requested file could not be found.</p>";
const READ_ERROR_PAGE: &str = "<h1>500 - Internal Server Error</h1><p>Error reading file.</p>";

/// Answer one request with the file its path resolves to.
///
/// Every method is treated like a GET and the request body is never read,
/// which also keeps the handler total: any request gets exactly one of 200,
/// 404, or 500.
pub async fn respond_to_request<B>(req: Request<B>, state: &State) -> Response<BytesBody> {
    let (method, uri) = (req.method(), req.uri());

    let Some(path) = resolve::file_path(&state.root, uri.path(), &state.index) else {
        log::warn!("{} {} -> [path refused]", method, uri);
        return error_response(StatusCode::NOT_FOUND, NOT_FOUND_PAGE);
    };

    match file::read(&path).await {
        Ok(contents) => {
            log::info!("{} {} -> [found {} bytes]", method, uri, contents.len());
            file_response(contents, mime::content_type(&path))
        }
        Err(ReadError::NotFound) => {
            log::info!("{} {} -> [not found]", method, uri);
            error_response(StatusCode::NOT_FOUND, NOT_FOUND_PAGE)
        }
        Err(ReadError::Read(e)) => {
            log::warn!("{} {} -> [read error] {} : {}", method, uri, path.display(), e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, READ_ERROR_PAGE)
        }
    }
}

fn file_response(contents: Vec<u8>, content_type: &'static str) -> Response<BytesBody> {
    let mut resp = Response::new(BytesBody::from(contents));
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    resp
}

fn error_response(status: StatusCode, page: &'static str) -> Response<BytesBody> {
    let mut resp = Response::new(BytesBody::from(page));
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
    resp
}
