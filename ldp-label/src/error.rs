//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};
use tracing::{warn, warn_span};

use crate::packet::error::DecodeError;
use crate::packet::messages::notification::StatusCode;

// LDP label subsystem errors.
#[derive(Debug, Deserialize, Serialize)]
pub enum Error {
    NbrPduDecodeError(Ipv4Addr, DecodeError),
    NbrRcvdError(Ipv4Addr, StatusCode),
    NbrSentError(Ipv4Addr, StatusCode),
}

// ===== impl Error =====

impl Error {
    pub(crate) fn log(&self) {
        match self {
            Error::NbrPduDecodeError(lsr_id, error) => {
                warn_span!("neighbor", %lsr_id).in_scope(|| {
                    warn!(error = %with_source(error), "{}", self);
                });
            }
            Error::NbrRcvdError(lsr_id, status)
            | Error::NbrSentError(lsr_id, status) => {
                warn_span!("neighbor", %lsr_id).in_scope(|| {
                    warn!(?status, "{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NbrPduDecodeError(..) => {
                write!(f, "failed to decode PDU")
            }
            Error::NbrRcvdError(..) => {
                write!(f, "received fatal notification message")
            }
            Error::NbrSentError(..) => {
                write!(f, "sent fatal notification message")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NbrPduDecodeError(_, error) => Some(error),
            _ => None,
        }
    }
}

// ===== global functions =====

fn with_source<E: std::error::Error>(error: E) -> String {
    if let Some(source) = error.source() {
        format!("{} ({})", error, with_source(source))
    } else {
        error.to_string()
    }
}
