//! Request line parsing
//!
//! A request is one line shaped like an HTTP request line:
//! `GET /convert?from=g&to=lb&value=1000`. A trailing protocol token such as
//! `HTTP/1.1` is accepted and ignored. Query keys and values are
//! percent-decoded; sequences that do not decode to UTF-8 are kept as sent.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Request {
    pub method: String,
    pub resource: String,
    /// Query parameters in the order they appeared
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn parse(line: &str) -> Request {
        let mut parts = line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let target = parts.next().unwrap_or_default();

        let (resource, query) = match target.split_once('?') {
            Some((resource, query)) => (resource, parse_query(query)),
            None => (target, Vec::new()),
        };

        Request {
            method,
            resource: resource.to_string(),
            query,
        }
    }

    /// Value of a query parameter; the last occurrence wins
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let req = Request::parse("GET /convert?from=g&to=lb&value=1000");
        assert_eq!(req.method, "GET");
        assert_eq!(req.resource, "/convert");
        assert_eq!(req.param("from"), Some("g"));
        assert_eq!(req.param("to"), Some("lb"));
        assert_eq!(req.param("value"), Some("1000"));
    }

    #[test]
    fn test_protocol_token_ignored() {
        let req = Request::parse("GET /units HTTP/1.1");
        assert_eq!(req.resource, "/units");
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_last_param_wins() {
        let req = Request::parse("GET /convert?from=g&from=lb");
        assert_eq!(req.param("from"), Some("lb"));
    }

    #[test]
    fn test_param_without_value() {
        let req = Request::parse("GET /convert?value&&to=");
        assert_eq!(req.param("value"), Some(""));
        assert_eq!(req.param("to"), Some(""));
        assert_eq!(req.param("from"), None);
    }

    #[test]
    fn test_percent_decoded_values() {
        let req = Request::parse("GET /convert?from=g&to=lb&value=%2D5");
        assert_eq!(req.param("value"), Some("-5"));

        let req = Request::parse("GET /convert?%66rom=%6Cb");
        assert_eq!(req.param("from"), Some("lb"));
    }

    #[test]
    fn test_undecodable_value_kept() {
        let req = Request::parse("GET /convert?value=%FF");
        assert_eq!(req.param("value"), Some("%FF"));
    }

    #[test]
    fn test_empty_line() {
        let req = Request::parse("");
        assert_eq!(req, Request::default());
    }
}
