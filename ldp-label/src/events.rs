//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::VecDeque;

use chrono::Utc;
use ipnetwork::IpNetwork;
use ldp_utils::ip::AddressFamily;

use crate::debug::Debug;
use crate::error::Error;
use crate::fec::Mapping;
use crate::instance::{InstanceState, InstanceTx};
use crate::neighbor::{Neighbor, fsm};
use crate::packet::error::DecodeError;
use crate::packet::messages::label::FecElem;
use crate::packet::messages::notification::{StatusCode, TlvReturnedTlvs};
use crate::packet::{DecodeCxt, LabelMsg, Message, NotifMsg, PacketInfo, Pdu};
use crate::tasks::messages::output::{
    LabelDistEventKind, LabelDistMsg, SessionEventMsg,
};

// ===== neighbor PDU receipt =====

pub fn process_nbr_pdu(
    state: &InstanceState,
    tx: &InstanceTx,
    nbr: &mut Neighbor,
    data: &[u8],
) {
    // Decode context bound to this neighbor's session.
    let lsr_id = nbr.lsr_id;
    let cxt = DecodeCxt {
        pkt_info: PacketInfo {
            src_addr: nbr.trans_addr,
        },
        pdu_max_len: nbr.max_pdu_len,
        validate_pdu_hdr: Some(Box::new(move |pdu_lsr_id, lspace_id| {
            if pdu_lsr_id != lsr_id {
                return Err(DecodeError::InvalidLsrId(pdu_lsr_id));
            }
            if lspace_id != 0 {
                return Err(DecodeError::InvalidLabelSpace(lspace_id));
            }
            Ok(())
        })),
        validate_msg_hdr: None,
    };

    let pdu = Pdu::get_pdu_size(data, &cxt)
        .and_then(|pdu_size| Pdu::decode(&data[..pdu_size], &cxt));
    match pdu {
        Ok(pdu) => {
            process_nbr_msgs(state, tx, nbr, pdu.messages);
        }
        Err(error) => {
            process_nbr_pdu_decode_error(state, tx, nbr, error);
        }
    }
}

fn process_nbr_pdu_decode_error(
    state: &InstanceState,
    tx: &InstanceTx,
    nbr: &mut Neighbor,
    error: DecodeError,
) {
    // Map decode error to LDP status code and severity.
    let status = StatusCode::from(&error);
    let fatal = error.is_fatal_error();

    // Echo the offending message's ID and type when the error carries them.
    let peer_msg = error.msg_info().map(|msgi| (msgi.msg_id, msgi.msg_type));

    // Return the offending TLV to the peer when there is one.
    let returned_tlvs = match &error {
        DecodeError::UnknownTlv(_, _, raw_tlv) => {
            Some(TlvReturnedTlvs(raw_tlv.to_vec()))
        }
        _ => None,
    };

    // Log the error first.
    Error::NbrPduDecodeError(nbr.lsr_id, error).log();

    // Send notification and possibly torn down the session.
    nbr.send_notification(state, tx, status, fatal, peer_msg, returned_tlvs);
    if fatal {
        Error::NbrSentError(nbr.lsr_id, status).log();
        let _ = tx.session.send(SessionEventMsg {
            nbr_id: nbr.id,
            event: fsm::Event::ErrorSent,
        });
    }
}

fn process_nbr_msgs(
    state: &InstanceState,
    tx: &InstanceTx,
    nbr: &mut Neighbor,
    messages: VecDeque<Message>,
) {
    for msg in messages {
        if let Err(error) = process_nbr_msg(state, tx, nbr, msg) {
            // Log the error first.
            error.log();

            // Close the session.
            let event = match error {
                Error::NbrRcvdError(_, _) => fsm::Event::ErrorRcvd,
                Error::NbrSentError(_, _) => fsm::Event::ErrorSent,
                _ => unreachable!(),
            };
            let _ = tx.session.send(SessionEventMsg {
                nbr_id: nbr.id,
                event,
            });
            break;
        }
    }
}

fn process_nbr_msg(
    state: &InstanceState,
    tx: &InstanceTx,
    nbr: &mut Neighbor,
    msg: Message,
) -> Result<(), Error> {
    Debug::NbrMsgRx(&nbr.lsr_id, &msg).log();

    // Update statistics.
    nbr.statistics.msgs_rcvd.update(&msg);
    nbr.statistics.discontinuity_time = Some(Utc::now());

    match msg {
        Message::Notification(msg) => process_nbr_msg_notification(nbr, msg),
        Message::Label(msg) => process_nbr_msg_label(state, tx, nbr, msg),
    }
}

fn process_nbr_msg_notification(
    nbr: &Neighbor,
    msg: NotifMsg,
) -> Result<(), Error> {
    if msg.is_fatal_error() {
        let status_code = StatusCode::decode(msg.status.status_code)
            .unwrap_or(StatusCode::InternalError);
        return Err(Error::NbrRcvdError(nbr.lsr_id, status_code));
    }

    Ok(())
}

fn process_nbr_msg_label(
    state: &InstanceState,
    tx: &InstanceTx,
    nbr: &mut Neighbor,
    msg: LabelMsg,
) -> Result<(), Error> {
    // Report unrecognized optional TLVs back to the peer.
    for unknown_tlv in &msg.unknown_tlvs {
        let returned_tlvs = Some(TlvReturnedTlvs::from(unknown_tlv));
        nbr.send_notification(
            state,
            tx,
            StatusCode::UnknownTlv,
            false,
            Some((msg.msg_id, msg.msg_type as u16)),
            returned_tlvs,
        );
    }

    // Validate all records before delivering any of them.
    let mut records = Vec::with_capacity(msg.fec.0.len());
    for fec_elem in &msg.fec.0 {
        // Silently drop records of administratively disabled families.
        if let FecElem::Prefix(prefix) = fec_elem {
            let af = match prefix {
                IpNetwork::V4(_) => AddressFamily::Ipv4,
                IpNetwork::V6(_) => AddressFamily::Ipv6,
            };
            if !nbr.is_af_enabled(af) {
                continue;
            }
        }

        let mapping = Mapping::from_msg_elem(&msg, *fec_elem);

        // Pseudowire labels must lie outside the reserved range.
        if let FecElem::Pwid(_) = fec_elem
            && let Some(label) = mapping.label
            && label.is_reserved()
        {
            let status = StatusCode::MalformedTlvValue;
            nbr.send_notification(
                state,
                tx,
                status,
                true,
                Some((msg.msg_id, msg.msg_type as u16)),
                None,
            );
            return Err(Error::NbrSentError(nbr.lsr_id, status));
        }

        records.push(mapping);
    }

    // Deliver records in wire order.
    let kind = LabelDistEventKind::from(msg.msg_type);
    for mapping in records {
        let _ = tx.label_dist.send(LabelDistMsg {
            nbr_id: nbr.id,
            kind,
            mapping,
        });
    }

    Ok(())
}
