//! Request handling: route, convert, render

use measura_core::MeasuraError;
use measura_units::{catalog, Dispatcher, QuantityInfo};
use serde::Serialize;
use tracing::debug;

use crate::config::ServerConfig;
use crate::request::Request;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_IMPLEMENTED: u16 = 501;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Converted { result: String },
    Catalog { quantities: Vec<QuantityInfo> },
    Error(MeasuraError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Body,
}

impl Response {
    fn ok(body: Body) -> Self {
        Response { status: STATUS_OK, body }
    }

    fn error(err: MeasuraError) -> Self {
        Response { status: STATUS_NOT_IMPLEMENTED, body: Body::Error(err) }
    }

    /// `<status> <json body>`
    pub fn render(&self) -> Result<String, serde_json::Error> {
        Ok(format!("{} {}", self.status, serde_json::to_string(&self.body)?))
    }
}

pub fn handle(dispatcher: &Dispatcher, config: &ServerConfig, line: &str) -> Response {
    let request = Request::parse(line);

    if request.method != "GET" {
        return Response::error(MeasuraError::unknown_method());
    }

    match request.resource.as_str() {
        "/convert" => handle_convert(dispatcher, config, &request),
        "/units" => Response::ok(Body::Catalog { quantities: catalog() }),
        _ => Response::error(MeasuraError::unknown_method()),
    }
}

fn handle_convert(dispatcher: &Dispatcher, config: &ServerConfig, request: &Request) -> Response {
    let from = request.param("from").unwrap_or_default();
    let to = request.param("to").unwrap_or_default();
    let raw = request.param("value").unwrap_or_default();

    let value = match raw.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => return Response::error(MeasuraError::invalid_value(raw)),
    };

    match dispatcher.process(from, to, value) {
        Some(result) => {
            debug!(from, to, value, result, "conversion served");
            Response::ok(Body::Converted {
                result: format!("{:.*}", config.precision, result),
            })
        }
        None => Response::error(MeasuraError::unknown_conversion(from, to)),
    }
}
