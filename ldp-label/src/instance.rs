//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{self, AtomicU32};

use ldp_utils::UnboundedSender;

use crate::tasks::messages::output::{
    LabelDistMsg, NbrTxPduMsg, SessionEventMsg,
};

// Instance state shared by all neighbors.
#[derive(Debug)]
pub struct InstanceState {
    // Global message ID.
    pub msg_id: Arc<AtomicU32>,
    // Router-ID in use.
    pub router_id: Ipv4Addr,
}

// Output channels to the subsystem's collaborators.
#[derive(Clone, Debug)]
pub struct InstanceTx {
    // Encoded PDUs bound for the transport layer.
    pub pdu: UnboundedSender<NbrTxPduMsg>,
    // Events bound for the session FSM.
    pub session: UnboundedSender<SessionEventMsg>,
    // Mapping records bound for the label distribution engine.
    pub label_dist: UnboundedSender<LabelDistMsg>,
}

// ===== impl InstanceState =====

impl InstanceState {
    pub fn new(router_id: Ipv4Addr) -> InstanceState {
        InstanceState {
            msg_id: Arc::new(AtomicU32::new(0)),
            router_id,
        }
    }

    pub(crate) fn get_next_msg_id(msg_id: &Arc<AtomicU32>) -> u32 {
        msg_id.fetch_add(1, atomic::Ordering::Relaxed)
    }
}
