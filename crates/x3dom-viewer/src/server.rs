use std::path::Path;

use tiny_http::{Header, Response, Server};
use tracing::{debug, warn};

use crate::error::ViewerError;

/// Content type by file extension; `.x3d` is served with its XML model
/// media type so browsers and validators treat it correctly.
pub fn content_type(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if path.ends_with(".x3d") {
        "model/x3d+xml"
    } else if path.ends_with(".js") {
        "application/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else {
        "application/octet-stream"
    }
}

/// Serve `dir` over HTTP, blocking until externally terminated.
///
/// `/` maps to `index.html`; anything outside the directory listing is
/// a 404. When `open_browser` is set the default browser is pointed at
/// the served page first.
pub fn serve(dir: &Path, addr: &str, port: u16, open_browser: bool) -> Result<(), ViewerError> {
    let bind_addr = format!("{addr}:{port}");
    let server = Server::http(&bind_addr).map_err(|e| ViewerError::ServerBind {
        addr: bind_addr.clone(),
        reason: e.to_string(),
    })?;
    let url = format!("http://{bind_addr}/index.html");
    println!("## x3dom viewer serving {} at {url}", dir.display());

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "could not open browser");
        }
    }

    for request in server.incoming_requests() {
        let file_path = if request.url() == "/" {
            dir.join("index.html")
        } else {
            dir.join(request.url().trim_start_matches('/'))
        };
        debug!(url = request.url(), "request");

        let response = match std::fs::read(&file_path) {
            Ok(data) => {
                let ct = content_type(&file_path.to_string_lossy());
                let response = Response::from_data(data);
                let response = match Header::from_bytes("Content-Type", ct) {
                    Ok(header) => response.with_header(header),
                    Err(()) => response,
                };
                request.respond(response)
            }
            Err(_) => {
                request.respond(Response::from_string("404 Not Found").with_status_code(404))
            }
        };
        if let Err(e) = response {
            warn!(error = %e, "failed to send response");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("shpabc.x3d"), "model/x3d+xml");
        assert_eq!(content_type("x3dom.js"), "application/javascript");
        assert_eq!(content_type("x3dom.css"), "text/css");
        assert_eq!(content_type("data.bin"), "application/octet-stream");
    }
}
