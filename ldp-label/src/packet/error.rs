//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;

use bytes::{Bytes, TryGetError};
use serde::{Deserialize, Serialize};

use crate::packet::message::MessageDecodeInfo;
use crate::packet::tlv::{TlvDecodeInfo, TlvType};

// Type aliases.
pub type DecodeResult<T> = Result<T, DecodeError>;

// LDP decode errors.
#[derive(Debug, Deserialize, Serialize)]
pub enum DecodeError {
    ReadOutOfBounds,
    // PDU header
    IncompletePdu,
    InvalidPduLength(u16),
    InvalidVersion(u16),
    InvalidLsrId(Ipv4Addr),
    InvalidLabelSpace(u16),
    // Message (general errors)
    InvalidMessageLength(u16),
    UnknownMessage(MessageDecodeInfo, u16),
    MissingMsgParams(MessageDecodeInfo, TlvType),
    // TLV (general errors)
    InvalidTlvLength(u16),
    UnknownTlv(MessageDecodeInfo, u16, Bytes),
    InvalidTlvValue(TlvDecodeInfo),
    // Message-specific errors
    UnsupportedAf(TlvDecodeInfo, u16),
    UnknownFec(TlvDecodeInfo, u8),
    InvalidWildcardFec(MessageDecodeInfo, u8),
}

// ===== impl DecodeError =====

impl DecodeError {
    // Whether the error warrants tearing the session down once reported.
    //
    // A wildcard FEC element in a message type that doesn't allow it keeps
    // the advisory Unknown FEC status code on the wire but is session-fatal
    // (RFC 5036 - Section 3.4.1, RFC 5918 - Section 4). An unrecognized FEC
    // element type, in contrast, is advisory.
    pub(crate) fn is_fatal_error(&self) -> bool {
        use crate::packet::messages::notification::StatusCode;

        match self {
            DecodeError::InvalidWildcardFec(_, _) => true,
            _ => StatusCode::from(self).is_fatal_error(),
        }
    }

    // The offending message's decode information, when the error carries it.
    pub(crate) fn msg_info(&self) -> Option<&MessageDecodeInfo> {
        match self {
            DecodeError::UnknownMessage(msgi, _)
            | DecodeError::MissingMsgParams(msgi, _)
            | DecodeError::UnknownTlv(msgi, _, _)
            | DecodeError::InvalidWildcardFec(msgi, _) => Some(msgi),
            _ => None,
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::ReadOutOfBounds => {
                write!(f, "attempt to read out of bounds")
            }
            DecodeError::IncompletePdu => {
                write!(f, "Incomplete PDU")
            }
            DecodeError::InvalidPduLength(len) => {
                write!(f, "Invalid PDU length: {len}")
            }
            DecodeError::InvalidVersion(version) => {
                write!(f, "Invalid LDP version: {version}")
            }
            DecodeError::InvalidLsrId(lsr_id) => {
                write!(f, "Invalid LSR-ID: {lsr_id}")
            }
            DecodeError::InvalidLabelSpace(lspace) => {
                write!(f, "Invalid label space: {lspace}")
            }
            DecodeError::InvalidMessageLength(len) => {
                write!(f, "Invalid message length: {len}")
            }
            DecodeError::UnknownMessage(_msgi, msg_type) => {
                write!(f, "Unknown message: {msg_type}")
            }
            DecodeError::MissingMsgParams(_msgi, tlv_type) => {
                write!(f, "Missing message parameters: {tlv_type}")
            }
            DecodeError::InvalidTlvLength(len) => {
                write!(f, "Invalid TLV length: {len}")
            }
            DecodeError::UnknownTlv(_msgi, tlv_type, _raw_tlv) => {
                write!(f, "Unknown TLV: {tlv_type}")
            }
            DecodeError::InvalidTlvValue(_tlvi) => {
                write!(f, "Invalid TLV value")
            }
            DecodeError::UnsupportedAf(_tlvi, af) => {
                write!(f, "Unsupported address family: {af}")
            }
            DecodeError::UnknownFec(_tlvi, fec) => {
                write!(f, "Unknown FEC type: {fec}")
            }
            DecodeError::InvalidWildcardFec(_msgi, fec) => {
                write!(f, "Invalid use of wildcard FEC element: {fec}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<TryGetError> for DecodeError {
    fn from(_error: TryGetError) -> DecodeError {
        DecodeError::ReadOutOfBounds
    }
}
