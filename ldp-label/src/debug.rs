//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;

use tracing::{debug, debug_span};

use crate::fec::Mapping;
use crate::packet::{LabelMessageType, Message};

// LDP debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    NbrCreate(&'a Ipv4Addr),
    NbrDelete(&'a Ipv4Addr),
    NbrMsgRx(&'a Ipv4Addr, &'a Message),
    NbrMsgTx(&'a Ipv4Addr, &'a Message),
    NbrMappingEnqueue(&'a Ipv4Addr, &'a LabelMessageType, &'a Mapping),
}

// ===== impl Debug =====

impl Debug<'_> {
    // Log debug message using the tracing API.
    pub(crate) fn log(&self) {
        match self {
            Debug::NbrCreate(lsr_id) | Debug::NbrDelete(lsr_id) => {
                debug_span!("neighbor", %lsr_id).in_scope(|| {
                    debug!("{}", self);
                });
            }
            Debug::NbrMsgRx(lsr_id, msg) => {
                debug_span!("neighbor", %lsr_id).in_scope(|| {
                    debug_span!("input").in_scope(|| {
                        let data = serde_json::to_string(&msg).unwrap();
                        debug!(r#type = %msg.msg_type(), %data, "{}", self);
                    })
                });
            }
            Debug::NbrMsgTx(lsr_id, msg) => {
                debug_span!("neighbor", %lsr_id).in_scope(|| {
                    debug_span!("output").in_scope(|| {
                        let data = serde_json::to_string(&msg).unwrap();
                        debug!(r#type = %msg.msg_type(), %data, "{}", self);
                    })
                });
            }
            Debug::NbrMappingEnqueue(lsr_id, msg_type, mapping) => {
                debug_span!("neighbor", %lsr_id).in_scope(|| {
                    let data = serde_json::to_string(&mapping).unwrap();
                    debug!(?msg_type, %data, "{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::NbrCreate(..) => {
                write!(f, "neighbor created")
            }
            Debug::NbrDelete(..) => {
                write!(f, "neighbor deleted")
            }
            Debug::NbrMsgRx(..) | Debug::NbrMsgTx(..) => {
                write!(f, "message")
            }
            Debug::NbrMappingEnqueue(..) => {
                write!(f, "mapping record queued")
            }
        }
    }
}
