use axum::body::Body;
use axum::http::{header, Request};

pub const BOUNDARY: &str = "tubely-test-boundary";

/// A single file part in a multipart/form-data body
pub struct FilePart<'a> {
    pub name: &'a str,
    pub file_name: &'a str,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> FilePart<'a> {
    pub fn thumbnail(content_type: &'a str, data: &'a [u8]) -> Self {
        Self {
            name: "thumbnail",
            file_name: "thumb.jpg",
            content_type: Some(content_type),
            data,
        }
    }
}

pub fn multipart_body(parts: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                BOUNDARY, part.name, part.file_name
            )
            .as_bytes(),
        );
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, token: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}
