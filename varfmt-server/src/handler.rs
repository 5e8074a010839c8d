//! Request handler for varfmt-server

use tracing::{debug, info};
use varfmt_core::{shorten_function_name, shorten_type, Formatter, Request, Response};

pub struct Handler {
    formatter: Formatter,
}

impl Handler {
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn handle(&self, request: &Request) -> Response {
        match request {
            Request::Format {
                variable,
                include_type,
                full_types,
            } => {
                debug!(
                    "Format request: kind={}, type={}",
                    variable.kind, variable.type_name
                );
                Response::formatted(
                    self.formatter
                        .single_line(variable, *include_type, *full_types),
                )
            }
            Request::FormatMultiline { variable, indent } => {
                debug!(
                    "Multi-line format request: kind={}, type={}",
                    variable.kind, variable.type_name
                );
                Response::formatted(self.formatter.multi_line(variable, indent))
            }
            Request::ShortenType { name } => Response::shortened(shorten_type(name)),
            Request::ShortenFunction { name } => Response::shortened(shorten_function_name(name)),
            Request::Shutdown => {
                info!("Shutdown requested");
                Response::success()
            }
        }
    }
}
