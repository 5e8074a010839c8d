//! varfmt Server
//!
//! JSON-RPC server that formats debugger variable snapshots for display.
//! Communicates via stdin/stdout for easy subprocess management.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, error, info, warn};
use varfmt_core::protocol::RpcMessage;
use varfmt_core::{FormatOptions, Formatter, Request, Response};

mod handler;

use handler::Handler;

/// Environment variable naming an optional TOML config file
const CONFIG_ENV: &str = "VARFMT_CONFIG";

fn load_options() -> FormatOptions {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return FormatOptions::default();
    };
    match FormatOptions::load(Path::new(&path)) {
        Ok(options) => {
            info!("Loaded format options from {}", Path::new(&path).display());
            options
        }
        Err(e) => {
            warn!("{}. Falling back to default format options.", e);
            FormatOptions::default()
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for JSON-RPC)
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    info!("varfmt-server starting...");

    let handler = Handler::new(Formatter::new(load_options()));
    serve(&handler, io::stdin().lock(), io::stdout())?;

    info!("varfmt-server shutting down");
    Ok(())
}

/// Answer one request line. The flag is set once a shutdown was handled.
fn respond(handler: &Handler, line: &str) -> (RpcMessage<Response>, bool) {
    match serde_json::from_str::<RpcMessage<Request>>(line) {
        Ok(msg) => {
            let shutdown = matches!(msg.content, Request::Shutdown);
            let result = handler.handle(&msg.content);
            (RpcMessage::new(msg.id.unwrap_or(0), result), shutdown)
        }
        Err(e) => (
            RpcMessage::new(0, Response::error(format!("Parse error: {}", e))),
            false,
        ),
    }
}

/// Read requests line by line until EOF or shutdown, one response line each.
fn serve<R: BufRead, W: Write>(handler: &Handler, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Failed to read line: {}", e);
                continue;
            }
        };

        if line.is_empty() {
            continue;
        }

        debug!("Received: {}", line);

        let (response, shutdown) = respond(handler, &line);

        let response_json = serde_json::to_string(&response)?;
        debug!("Sending: {}", response_json);
        writeln!(output, "{}", response_json)?;
        output.flush()?;

        if shutdown {
            break;
        }
    }
    Ok(())
}
