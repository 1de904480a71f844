//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ldp_utils::ip::AddressFamily;

use super::*;

static NOTIF_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x00, 0x01, 0x00, 0x12, 0x00, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00,
            0x0a, 0x80, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x39, 0x04, 0x00,
        ],
        NotifMsg {
            msg_id: 1,
            status: TlvStatus {
                status_code: StatusCode::BadTlvLen.encode(false),
                msg_id: 57,
                msg_type: MessageType::LabelMapping as u16,
            },
            returned_tlvs: None,
            fec: None,
        }
        .into(),
    )
});
static NOTIF_MSG2: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x00, 0x01, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00,
            0x0a, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x28, 0x04, 0x00,
            0x83, 0x04, 0x00, 0x06, 0x05, 0x00, 0x00, 0x02, 0xaa, 0xbb,
        ],
        NotifMsg {
            msg_id: 2,
            status: TlvStatus {
                status_code: StatusCode::UnknownTlv.encode(false),
                msg_id: 40,
                msg_type: MessageType::LabelMapping as u16,
            },
            returned_tlvs: Some(TlvReturnedTlvs(vec![
                0x05, 0x00, 0x00, 0x02, 0xaa, 0xbb,
            ])),
            fec: None,
        }
        .into(),
    )
});
static NOTIF_MSG3: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x00, 0x01, 0x00, 0x1b, 0x00, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
            0x0a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x05, 0x05, 0x02, 0x02, 0x00, 0x01,
        ],
        NotifMsg {
            msg_id: 3,
            status: TlvStatus {
                status_code: StatusCode::Success.encode(false),
                msg_id: 0,
                msg_type: 0,
            },
            returned_tlvs: None,
            fec: Some(TlvFec(vec![FecElem::Wildcard(FecElemWildcard::Typed(
                TypedWildcardFecElem::Prefix(AddressFamily::Ipv4),
            ))])),
        }
        .into(),
    )
});

#[test]
fn test_encode_notification1() {
    let (ref bytes, ref msg) = *NOTIF_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_notification1() {
    let (ref bytes, ref msg) = *NOTIF_MSG1;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_notification2() {
    let (ref bytes, ref msg) = *NOTIF_MSG2;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_notification2() {
    let (ref bytes, ref msg) = *NOTIF_MSG2;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_notification3() {
    let (ref bytes, ref msg) = *NOTIF_MSG3;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_notification3() {
    let (ref bytes, ref msg) = *NOTIF_MSG3;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

// The Status TLV must be the first TLV of the message.
#[test]
fn test_decode_notification_missing_status() {
    let bytes = vec![
        0x00, 0x01, 0x00, 0x0d, 0x00, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00,
        0x05, 0x05, 0x02, 0x02, 0x00, 0x01,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(
        error,
        DecodeError::MissingMsgParams(_, TlvType::Status)
    ));
}

#[test]
fn test_decode_notification_bad_status_length() {
    let bytes = vec![
        0x00, 0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x05, 0x03, 0x00, 0x00,
        0x08, 0x80, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x39,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvLength(8)));
}

#[test]
fn test_status_code_fatal_flag() {
    assert_eq!(StatusCode::Shutdown.encode(false), 0x8000_000a);
    assert_eq!(StatusCode::UnknownTlv.encode(false), 0x0000_0006);
    assert_eq!(StatusCode::UnknownTlv.encode(true), 0x4000_0006);
    assert_eq!(
        StatusCode::decode(0x8000_000a),
        Some(StatusCode::Shutdown)
    );
    assert_eq!(StatusCode::decode(0x3fff_ffff), None);
}
