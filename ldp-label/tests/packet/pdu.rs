//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::VecDeque;

use ldp_utils::mpls::Label;

use super::*;

static PDU1: Lazy<(Vec<u8>, Pdu)> = Lazy::new(|| {
    (
        vec![
            0x00, 0x01, 0x00, 0x21, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x04,
            0x00, 0x00, 0x17, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x07,
            0x02, 0x00, 0x01, 0x18, 0x0a, 0x00, 0x00, 0x02, 0x00, 0x00, 0x04,
            0x00, 0x00, 0x00, 0x64,
        ],
        Pdu {
            version: 1,
            lsr_id: Ipv4Addr::new(1, 1, 1, 1),
            lspace_id: 0,
            messages: VecDeque::from(vec![Message::Label(LabelMsg {
                msg_id: 1,
                msg_type: LabelMessageType::LabelMapping,
                fec: TlvFec(vec![FecElem::Prefix(net!("10.0.0.0/24"))]),
                label: Some(TlvLabel(Label::new(100))),
                request_id: None,
                pw_status: None,
                status: None,
                unknown_tlvs: vec![],
            })]),
        },
    )
});

#[test]
fn test_encode_pdu1() {
    let (ref bytes, ref pdu) = *PDU1;
    test_encode_pdu(bytes, pdu);
}

#[test]
fn test_decode_pdu1() {
    let (ref bytes, ref pdu) = *PDU1;
    test_decode_pdu(&IPV4_CXT, bytes, pdu);
}

// Session management messages are skipped by the decoder, so a PDU carrying
// a KeepAlive followed by a Label Mapping yields the mapping only.
#[test]
fn test_decode_pdu_skips_session_messages() {
    let bytes = vec![
        0x00, 0x01, 0x00, 0x29, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x02,
        0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x63, 0x04, 0x00, 0x00, 0x17,
        0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x07, 0x02, 0x00, 0x01,
        0x18, 0x0a, 0x00, 0x00, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x64,
    ];
    let (_, ref pdu) = *PDU1;
    test_decode_pdu(&IPV4_CXT, &bytes, pdu);
}

// An unknown message type with the U-bit set is skipped without throwing
// off the framing of the messages that follow it.
#[test]
fn test_decode_pdu_skips_unknown_message() {
    let bytes = vec![
        0x00, 0x01, 0x00, 0x2d, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x87,
        0x77, 0x00, 0x08, 0x00, 0x00, 0x00, 0x63, 0xde, 0xad, 0xbe, 0xef,
        0x04, 0x00, 0x00, 0x17, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x07, 0x02, 0x00, 0x01, 0x18, 0x0a, 0x00, 0x00, 0x02, 0x00, 0x00,
        0x04, 0x00, 0x00, 0x00, 0x64,
    ];
    let (_, ref pdu) = *PDU1;
    test_decode_pdu(&IPV4_CXT, &bytes, pdu);
}

#[test]
fn test_decode_pdu_invalid_version() {
    let (ref bytes, _) = *PDU1;
    let mut bytes = bytes.clone();
    bytes[1] = 0x02;
    let _pdu_size = Pdu::get_pdu_size(&bytes, &IPV4_CXT).unwrap();
    let error = Pdu::decode(&bytes, &IPV4_CXT).unwrap_err();
    assert!(matches!(error, DecodeError::InvalidVersion(2)));
}

#[test]
fn test_get_pdu_size_incomplete() {
    let (ref bytes, _) = *PDU1;
    let error = Pdu::get_pdu_size(&bytes[..12], &IPV4_CXT).unwrap_err();
    assert!(matches!(error, DecodeError::IncompletePdu));
}
