//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ldp_utils::mpls::Label;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::packet::LabelMessageType;
use crate::packet::message::Message;
use crate::packet::messages::label::{
    FecElem, LabelMsg, TlvFec, TlvLabel, TlvLabelRequestId, TlvPwStatus,
};
use crate::packet::messages::notification::TlvStatus;
use crate::packet::tlv;

// Label mapping record, the unit of work of the label distribution engine.
//
// A received label message yields one record per FEC element; on the send
// side, queued records are packed into label messages by the PDU batcher.
#[derive(Clone, Debug, Eq, PartialEq)]
#[skip_serializing_none]
#[derive(Deserialize, Serialize)]
pub struct Mapping {
    pub fec: FecElem,
    pub label: Option<Label>,
    pub request_id: Option<u32>,
    pub pw_status: Option<u32>,
    pub status: Option<TlvStatus>,
    pub msg_id: u32,
}

// ===== impl Mapping =====

impl Mapping {
    pub fn new(fec: FecElem) -> Mapping {
        Mapping {
            fec,
            label: None,
            request_id: None,
            pw_status: None,
            status: None,
            msg_id: 0,
        }
    }

    // Exact encoded size of the label message carrying this record.
    pub(crate) fn msg_size(&self) -> u16 {
        let mut size = Message::HDR_SIZE + tlv::TLV_HDR_SIZE;
        size += self.fec.wire_len();
        if self.label.is_some() {
            size += tlv::TLV_HDR_SIZE + 4;
        }
        if self.request_id.is_some() {
            size += tlv::TLV_HDR_SIZE + 4;
        }
        if self.pw_status.is_some() {
            size += tlv::TLV_HDR_SIZE + 4;
        }
        if self.status.is_some() {
            size += tlv::TLV_HDR_SIZE + 10;
        }
        size
    }

    pub(crate) fn into_msg(
        self,
        msg_type: LabelMessageType,
        msg_id: u32,
    ) -> LabelMsg {
        LabelMsg {
            msg_id,
            msg_type,
            fec: TlvFec(vec![self.fec]),
            label: self.label.map(TlvLabel),
            request_id: self.request_id.map(TlvLabelRequestId),
            pw_status: self.pw_status.map(TlvPwStatus),
            status: self.status,
            unknown_tlvs: Vec::new(),
        }
    }

    // Builds one record out of a received label message and one of its FEC
    // elements. The PW status is meaningful for pseudowire FECs only.
    pub(crate) fn from_msg_elem(msg: &LabelMsg, fec: FecElem) -> Mapping {
        let pw_status = match fec {
            FecElem::Pwid(_) => msg.pw_status.as_ref().map(|tlv| tlv.0),
            _ => None,
        };

        Mapping {
            fec,
            label: msg.get_label(),
            request_id: msg.request_id.as_ref().map(|tlv| tlv.0),
            pw_status,
            status: msg.status.clone(),
            msg_id: msg.msg_id,
        }
    }
}
