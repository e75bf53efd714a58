//! HTTP status code meanings for response tables

/// Reason phrase and defining RFC section for well-known status codes
fn reason(status: &str) -> Option<(&'static str, &'static str)> {
    let entry = match status {
        "100" => ("Continue", "rfc7231#section-6.2.1"),
        "101" => ("Switching Protocols", "rfc7231#section-6.2.2"),
        "200" => ("OK", "rfc7231#section-6.3.1"),
        "201" => ("Created", "rfc7231#section-6.3.2"),
        "202" => ("Accepted", "rfc7231#section-6.3.3"),
        "203" => ("Non-Authoritative Information", "rfc7231#section-6.3.4"),
        "204" => ("No Content", "rfc7231#section-6.3.5"),
        "205" => ("Reset Content", "rfc7231#section-6.3.6"),
        "206" => ("Partial Content", "rfc7233#section-4.1"),
        "300" => ("Multiple Choices", "rfc7231#section-6.4.1"),
        "301" => ("Moved Permanently", "rfc7231#section-6.4.2"),
        "302" => ("Found", "rfc7231#section-6.4.3"),
        "303" => ("See Other", "rfc7231#section-6.4.4"),
        "304" => ("Not Modified", "rfc7232#section-4.1"),
        "307" => ("Temporary Redirect", "rfc7231#section-6.4.7"),
        "308" => ("Permanent Redirect", "rfc7538#section-3"),
        "400" => ("Bad Request", "rfc7231#section-6.5.1"),
        "401" => ("Unauthorized", "rfc7235#section-3.1"),
        "402" => ("Payment Required", "rfc7231#section-6.5.2"),
        "403" => ("Forbidden", "rfc7231#section-6.5.3"),
        "404" => ("Not Found", "rfc7231#section-6.5.4"),
        "405" => ("Method Not Allowed", "rfc7231#section-6.5.5"),
        "406" => ("Not Acceptable", "rfc7231#section-6.5.6"),
        "408" => ("Request Timeout", "rfc7231#section-6.5.7"),
        "409" => ("Conflict", "rfc7231#section-6.5.8"),
        "410" => ("Gone", "rfc7231#section-6.5.9"),
        "411" => ("Length Required", "rfc7231#section-6.5.10"),
        "412" => ("Precondition Failed", "rfc7232#section-4.2"),
        "413" => ("Payload Too Large", "rfc7231#section-6.5.11"),
        "414" => ("URI Too Long", "rfc7231#section-6.5.12"),
        "415" => ("Unsupported Media Type", "rfc7231#section-6.5.13"),
        "416" => ("Range Not Satisfiable", "rfc7233#section-4.4"),
        "417" => ("Expectation Failed", "rfc7231#section-6.5.14"),
        "422" => ("Unprocessable Entity", "rfc2518#section-10.3"),
        "426" => ("Upgrade Required", "rfc7231#section-6.5.15"),
        "428" => ("Precondition Required", "rfc6585#section-3"),
        "429" => ("Too Many Requests", "rfc6585#section-4"),
        "431" => ("Request Header Fields Too Large", "rfc6585#section-5"),
        "500" => ("Internal Server Error", "rfc7231#section-6.6.1"),
        "501" => ("Not Implemented", "rfc7231#section-6.6.2"),
        "502" => ("Bad Gateway", "rfc7231#section-6.6.3"),
        "503" => ("Service Unavailable", "rfc7231#section-6.6.4"),
        "504" => ("Gateway Time-out", "rfc7231#section-6.6.5"),
        "505" => ("HTTP Version Not Supported", "rfc7231#section-6.6.6"),
        "511" => ("Network Authentication Required", "rfc6585#section-6"),
        _ => return None,
    };
    Some(entry)
}

/// Meaning column text for a response status key
///
/// Known codes link their reason phrase to the RFC that defines them.
pub fn meaning(status: &str) -> String {
    if let Some((phrase, section)) = reason(status) {
        return format!("[{}](https://tools.ietf.org/html/{})", phrase, section);
    }
    match status {
        "default" => "Default".to_string(),
        _ if status.len() == 3 && status.ends_with("XX") => {
            format!("{}xx range", &status[..1])
        }
        _ => "Unknown".to_string(),
    }
}

/// Whether a status key denotes success (2xx)
pub fn is_success(status: &str) -> bool {
    status.starts_with('2')
}
