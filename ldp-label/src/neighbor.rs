//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::VecDeque;
use std::net::{IpAddr, Ipv4Addr};

use bitflags::bitflags;
use chrono::{DateTime, Utc};
use ldp_utils::ip::AddressFamily;
use serde::{Deserialize, Serialize};

use crate::debug::Debug;
use crate::error::Error;
use crate::fec::Mapping;
use crate::instance::{InstanceState, InstanceTx};
use crate::packet::message::MessageType;
use crate::packet::messages::notification::{
    NotifMsg, StatusCode, TLV_STATUS_CODE_E_FLAG, TlvReturnedTlvs, TlvStatus,
};
use crate::packet::pdu::Pdu;
use crate::packet::{LabelMessageType, Message};
use crate::tasks::messages::output::{NbrTxPduMsg, SessionEventMsg};

// Neighbor ID, used to demultiplex messages received from child tasks.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct NeighborId(pub u32);

#[derive(Debug)]
pub struct Neighbor {
    pub id: NeighborId,
    pub lsr_id: Ipv4Addr,
    pub trans_addr: IpAddr,
    pub max_pdu_len: u16,
    pub queues: MappingQueues,
    pub statistics: Statistics,
    pub flags: NeighborFlags,
}

// Pending label mapping records, one FIFO per label message type.
#[derive(Debug, Default)]
pub struct MappingQueues {
    pub mappings: VecDeque<Mapping>,
    pub requests: VecDeque<Mapping>,
    pub withdraws: VecDeque<Mapping>,
    pub releases: VecDeque<Mapping>,
    pub aborts: VecDeque<Mapping>,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct NeighborFlags: u8 {
        const V4_ENABLED = 0x01;
        const V6_ENABLED = 0x02;
    }
}

// Neighbor statistics.
#[derive(Debug, Default)]
pub struct Statistics {
    pub discontinuity_time: Option<DateTime<Utc>>,
    pub msgs_rcvd: MessageStatistics,
    pub msgs_sent: MessageStatistics,
}

// Inbound and outbound statistic counters.
#[derive(Debug, Default)]
pub struct MessageStatistics {
    pub label_abort_request: u64,
    pub label_mapping: u64,
    pub label_release: u64,
    pub label_request: u64,
    pub label_withdraw: u64,
    pub notification: u64,
    pub total: u64,
}

// Session FSM events raised by the label subsystem.
pub mod fsm {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
    pub enum Event {
        PduSent,
        // Fatal error notifications.
        ErrorRcvd,
        ErrorSent,
    }
}

// ===== impl Neighbor =====

impl Neighbor {
    pub fn new(
        id: NeighborId,
        lsr_id: Ipv4Addr,
        trans_addr: IpAddr,
        flags: NeighborFlags,
    ) -> Neighbor {
        Debug::NbrCreate(&lsr_id).log();

        Neighbor {
            id,
            lsr_id,
            trans_addr,
            max_pdu_len: Pdu::DFLT_MAX_LEN,
            queues: Default::default(),
            statistics: Default::default(),
            flags,
        }
    }

    pub(crate) fn is_af_enabled(&self, af: AddressFamily) -> bool {
        match af {
            AddressFamily::Ipv4 => {
                self.flags.contains(NeighborFlags::V4_ENABLED)
            }
            AddressFamily::Ipv6 => {
                self.flags.contains(NeighborFlags::V6_ENABLED)
            }
        }
    }

    // Appends a mapping record to the pending queue of the given message
    // type. The record stays queued until the next batching run.
    pub fn enqueue_mapping(
        &mut self,
        msg_type: LabelMessageType,
        mapping: Mapping,
    ) {
        Debug::NbrMappingEnqueue(&self.lsr_id, &msg_type, &mapping).log();

        self.queues.get_mut(msg_type).push_back(mapping);
    }

    // Drains the pending queue of the given message type, packing as many
    // label messages as possible into each PDU. A PDU is handed to the
    // transport as soon as the next message would push it past the
    // neighbor's maximum PDU length.
    pub fn send_label_messages(
        &mut self,
        state: &InstanceState,
        tx: &InstanceTx,
        msg_type: LabelMessageType,
    ) {
        if self.queues.get_mut(msg_type).is_empty() {
            return;
        }

        let mut pdu = Pdu::new(state.router_id, 0);
        let mut size = Pdu::HDR_SIZE;

        while let Some(mapping) = self.queues.get_mut(msg_type).pop_front() {
            let msg_size = mapping.msg_size();

            // A message that doesn't fit even an empty PDU is a local fault.
            // Drop the whole queue and tear the session down.
            if Pdu::HDR_SIZE + msg_size > self.max_pdu_len {
                self.queues.get_mut(msg_type).clear();
                let status = StatusCode::InternalError;
                self.send_notification(state, tx, status, true, None, None);
                Error::NbrSentError(self.lsr_id, status).log();
                let _ = tx.session.send(SessionEventMsg {
                    nbr_id: self.id,
                    event: fsm::Event::ErrorSent,
                });
                return;
            }

            // Finalize the current PDU once the next message overflows it.
            if size + msg_size > self.max_pdu_len {
                self.flush_pdu(tx, pdu);
                pdu = Pdu::new(state.router_id, 0);
                size = Pdu::HDR_SIZE;
            }

            let msg = mapping
                .into_msg(msg_type, InstanceState::get_next_msg_id(&state.msg_id));
            let msg = Message::Label(msg);

            Debug::NbrMsgTx(&self.lsr_id, &msg).log();
            self.statistics.msgs_sent.update(&msg);
            self.statistics.discontinuity_time = Some(Utc::now());

            size += msg_size;
            pdu.messages.push_back(msg);
        }

        if !pdu.messages.is_empty() {
            self.flush_pdu(tx, pdu);
        }
        let _ = tx.session.send(SessionEventMsg {
            nbr_id: self.id,
            event: fsm::Event::PduSent,
        });
    }

    fn flush_pdu(&self, tx: &InstanceTx, pdu: Pdu) {
        // Ignore any possible error as the connection might have gone down
        // already.
        let _ = tx.pdu.send(NbrTxPduMsg {
            nbr_id: self.id,
            pdu,
        });
    }

    fn send_message<M: Into<Message>>(
        &mut self,
        state: &InstanceState,
        tx: &InstanceTx,
        msg: M,
    ) {
        let msg = msg.into();

        Debug::NbrMsgTx(&self.lsr_id, &msg).log();

        // Update statistics.
        self.statistics.msgs_sent.update(&msg);
        self.statistics.discontinuity_time = Some(Utc::now());

        let mut pdu = Pdu::new(state.router_id, 0);
        pdu.messages.push_back(msg);
        self.flush_pdu(tx, pdu);
    }

    // `peer_msg` carries the ID and type of the message the notification
    // refers to, when known. `fatal` forces the E-bit on for status codes
    // whose registry severity is advisory (e.g. Unknown FEC reporting
    // wildcard misuse).
    pub(crate) fn send_notification(
        &mut self,
        state: &InstanceState,
        tx: &InstanceTx,
        status_code: StatusCode,
        fatal: bool,
        peer_msg: Option<(u32, u16)>,
        returned_tlvs: Option<TlvReturnedTlvs>,
    ) {
        let (peer_msg_id, peer_msg_type) = peer_msg.unwrap_or((0, 0));

        let mut status_code = status_code.encode(false);
        if fatal {
            status_code |= TLV_STATUS_CODE_E_FLAG;
        }

        let msg = NotifMsg {
            msg_id: InstanceState::get_next_msg_id(&state.msg_id),
            status: TlvStatus {
                status_code,
                msg_id: peer_msg_id,
                msg_type: peer_msg_type,
            },
            returned_tlvs,
            fec: None,
        };
        self.send_message(state, tx, msg);
    }

    pub fn send_shutdown(
        &mut self,
        state: &InstanceState,
        tx: &InstanceTx,
        peer_msg: Option<(u32, u16)>,
    ) {
        self.send_notification(
            state,
            tx,
            StatusCode::Shutdown,
            true,
            peer_msg,
            None,
        );
    }
}

impl Drop for Neighbor {
    fn drop(&mut self) {
        Debug::NbrDelete(&self.lsr_id).log();
    }
}

// ===== impl MappingQueues =====

impl MappingQueues {
    pub fn get_mut(
        &mut self,
        msg_type: LabelMessageType,
    ) -> &mut VecDeque<Mapping> {
        match msg_type {
            LabelMessageType::LabelMapping => &mut self.mappings,
            LabelMessageType::LabelRequest => &mut self.requests,
            LabelMessageType::LabelWithdraw => &mut self.withdraws,
            LabelMessageType::LabelRelease => &mut self.releases,
            LabelMessageType::LabelAbortReq => &mut self.aborts,
        }
    }
}

// ===== impl MessageStatistics =====

impl MessageStatistics {
    pub(crate) fn update(&mut self, msg: &Message) {
        self.total += 1;
        match msg.msg_type() {
            MessageType::Notification => {
                self.notification += 1;
            }
            MessageType::LabelMapping => {
                self.label_mapping += 1;
            }
            MessageType::LabelRequest => {
                self.label_request += 1;
            }
            MessageType::LabelWithdraw => {
                self.label_withdraw += 1;
            }
            MessageType::LabelRelease => {
                self.label_release += 1;
            }
            MessageType::LabelAbortReq => {
                self.label_abort_request += 1;
            }
            _ => (),
        };
    }
}
