//! JSON request/response contract
//!
//! One request per line, tagged by `op`:
//!
//! ```text
//! {"op":"start","dictName":"en-us-5"}
//! {"op":"submit","id":"<uuid>","guess":"CRANE"}
//! ```
//!
//! Every request gets exactly one response object back. Failures of any
//! kind, including lines that do not parse, come back as `{"error": "..."}`.

use crate::error::GameError;
use crate::game::{GameService, OwnerId, SessionId, SessionView, StartResponse, SubmitResponse};
use crate::wordlists::DictionaryInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    Start {
        #[serde(default)]
        dict_name: String,
        #[serde(default)]
        owner_id: Option<OwnerId>,
    },
    Submit {
        id: String,
        guess: String,
    },
    SubmitRow {
        id: String,
    },
    AddLetter {
        id: String,
        letter: char,
    },
    DeleteLetter {
        id: String,
    },
    View {
        id: String,
    },
    Abandon {
        id: String,
    },
    Dictionaries,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Started(StartResponse),
    Submitted(SubmitResponse),
    Session(Box<SessionView>),
    Dictionaries { dictionaries: Vec<DictionaryInfo> },
    Done { ok: bool },
    Error { error: String },
}

impl Response {
    #[must_use]
    pub fn error(error: impl fmt::Display) -> Self {
        Self::Error {
            error: error.to_string(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        match self {
            Self::Error { .. } => true,
            Self::Submitted(response) => response.error.is_some(),
            _ => false,
        }
    }
}

impl From<Result<SessionView, GameError>> for Response {
    fn from(result: Result<SessionView, GameError>) -> Self {
        result.map_or_else(Self::error, |view| Self::Session(Box::new(view)))
    }
}

/// Run one request against the service
pub fn handle(service: &GameService, request: Request) -> Response {
    match request {
        Request::Start {
            dict_name,
            owner_id,
        } => service
            .start(&dict_name, owner_id)
            .map_or_else(Response::error, Response::Started),
        Request::Submit { id, guess } => Response::Submitted(
            parse_id(&id)
                .and_then(|id| service.submit(id, &guess))
                .unwrap_or_else(|e| SubmitResponse::error(&e)),
        ),
        Request::SubmitRow { id } => Response::Submitted(
            parse_id(&id)
                .and_then(|id| service.submit_row(id))
                .unwrap_or_else(|e| SubmitResponse::error(&e)),
        ),
        Request::AddLetter { id, letter } => parse_id(&id)
            .and_then(|id| service.add_letter(id, letter))
            .into(),
        Request::DeleteLetter { id } => parse_id(&id)
            .and_then(|id| service.delete_letter(id))
            .into(),
        Request::View { id } => parse_id(&id).and_then(|id| service.view(id)).into(),
        Request::Abandon { id } => parse_id(&id)
            .and_then(|id| service.abandon(id))
            .map_or_else(Response::error, |()| Response::Done { ok: true }),
        Request::Dictionaries => Response::Dictionaries {
            dictionaries: service.dictionaries(),
        },
    }
}

/// Parse one JSON line and run it
pub fn handle_line(service: &GameService, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(service, request),
        Err(e) => {
            debug!(error = %e, "malformed request");
            Response::error(format!("malformed request: {e}"))
        }
    }
}

fn parse_id(id: &str) -> Result<SessionId, GameError> {
    id.parse()
}
