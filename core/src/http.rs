//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core never touches the network. `ParcelClient` builds `HttpRequest`
//! values describing carrier API calls as plain data; the caller executes
//! them with whatever HTTP stack it already has and feeds the resulting
//! `HttpResponse` back to the matching `parse_*` method. All fields are
//! owned so the values can cross thread or process boundaries freely.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A carrier API request described as plain data.
///
/// The query string is already assembled and percent-encoded into `path`;
/// the caller only has to execute the request verbatim.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A carrier API response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then handed
/// to the matching `ParcelClient::parse_*` method.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
