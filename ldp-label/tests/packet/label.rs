//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ldp_utils::ip::AddressFamily;
use ldp_utils::mpls::Label;

use super::*;

static LABEL_MAPPING_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x00, 0x00, 0x17, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
            0x07, 0x02, 0x00, 0x01, 0x18, 0x0a, 0x00, 0x00, 0x02, 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00, 0x64,
        ],
        LabelMsg {
            msg_id: 1,
            msg_type: LabelMessageType::LabelMapping,
            fec: TlvFec(vec![FecElem::Prefix(net!("10.0.0.0/24"))]),
            label: Some(TlvLabel(Label::new(100))),
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_MAPPING_MSG2: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x00, 0x00, 0x24, 0x00, 0x00, 0x00, 0x41, 0x01, 0x00, 0x00,
            0x0c, 0x02, 0x00, 0x02, 0x40, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00,
            0x00, 0x00, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x12, 0x06,
            0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x09,
        ],
        LabelMsg {
            msg_id: 65,
            msg_type: LabelMessageType::LabelMapping,
            fec: TlvFec(vec![FecElem::Prefix(net!("2001:db8::/64"))]),
            label: Some(TlvLabel(Label::new(18))),
            request_id: Some(TlvLabelRequestId(9)),
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_MAPPING_MSG3: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x42, 0x01, 0x00, 0x00,
            0x10, 0x80, 0x80, 0x05, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x64, 0x01, 0x04, 0x05, 0xdc, 0x02, 0x00, 0x00, 0x04, 0x00,
            0x00, 0x00, 0x10, 0x09, 0x6a, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00,
        ],
        LabelMsg {
            msg_id: 66,
            msg_type: LabelMessageType::LabelMapping,
            fec: TlvFec(vec![FecElem::Pwid(FecPwId {
                pw_type: 5,
                cword: true,
                group_id: 0,
                pwid: Some(100),
                ifmtu: Some(1500),
            })]),
            label: Some(TlvLabel(Label::new(16))),
            request_id: None,
            pw_status: Some(TlvPwStatus(0)),
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_MAPPING_MSG4: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x0a, 0x01, 0x00, 0x00,
            0x0f, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
            0x01, 0x18, 0x0a, 0x00, 0x00, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00,
            0x00, 0x10,
        ],
        LabelMsg {
            msg_id: 10,
            msg_type: LabelMessageType::LabelMapping,
            fec: TlvFec(vec![
                FecElem::Prefix(net!("1.1.1.1/32")),
                FecElem::Prefix(net!("10.0.0.0/24")),
            ]),
            label: Some(TlvLabel(Label::new(16))),
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_MAPPING_MSG5: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x00, 0x00, 0x26, 0x00, 0x00, 0x00, 0x0b, 0x01, 0x00, 0x00,
            0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
            0x00, 0x04, 0x00, 0x00, 0x00, 0x10, 0x83, 0x00, 0x00, 0x0a, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        LabelMsg {
            msg_id: 11,
            msg_type: LabelMessageType::LabelMapping,
            fec: TlvFec(vec![FecElem::Prefix(net!("1.1.1.1/32"))]),
            label: Some(TlvLabel(Label::new(16))),
            request_id: None,
            pw_status: None,
            status: Some(TlvStatus {
                status_code: 0,
                msg_id: 0,
                msg_type: 0,
            }),
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_REQUEST_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x01, 0x00, 0x0d, 0x00, 0x00, 0x00, 0x41, 0x01, 0x00, 0x00,
            0x05, 0x05, 0x02, 0x02, 0x00, 0x01,
        ],
        LabelMsg {
            msg_id: 65,
            msg_type: LabelMessageType::LabelRequest,
            fec: TlvFec(vec![FecElem::Wildcard(FecElemWildcard::Typed(
                TypedWildcardFecElem::Prefix(AddressFamily::Ipv4),
            ))]),
            label: None,
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_WITHDRAW_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x02, 0x00, 0x11, 0x00, 0x00, 0x00, 0x05, 0x01, 0x00, 0x00,
            0x01, 0x01, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x12,
        ],
        LabelMsg {
            msg_id: 5,
            msg_type: LabelMessageType::LabelWithdraw,
            fec: TlvFec(vec![FecElem::Wildcard(FecElemWildcard::All)]),
            label: Some(TlvLabel(Label::new(18))),
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_WITHDRAW_MSG2: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x02, 0x00, 0x10, 0x00, 0x00, 0x00, 0x08, 0x01, 0x00, 0x00,
            0x08, 0x80, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x01,
        ],
        LabelMsg {
            msg_id: 8,
            msg_type: LabelMessageType::LabelWithdraw,
            fec: TlvFec(vec![FecElem::Pwid(FecPwId {
                pw_type: 5,
                cword: false,
                group_id: 1,
                pwid: None,
                ifmtu: None,
            })]),
            label: None,
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_RELEASE_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x03, 0x00, 0x0d, 0x00, 0x00, 0x00, 0x07, 0x01, 0x00, 0x00,
            0x05, 0x05, 0x80, 0x02, 0x00, 0x05,
        ],
        LabelMsg {
            msg_id: 7,
            msg_type: LabelMessageType::LabelRelease,
            fec: TlvFec(vec![FecElem::Wildcard(FecElemWildcard::Typed(
                TypedWildcardFecElem::Pwid(5),
            ))]),
            label: None,
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});
static LABEL_ABORT_MSG1: Lazy<(Vec<u8>, Message)> = Lazy::new(|| {
    (
        vec![
            0x04, 0x04, 0x00, 0x16, 0x00, 0x00, 0x00, 0x09, 0x01, 0x00, 0x00,
            0x06, 0x02, 0x00, 0x01, 0x10, 0xac, 0x10, 0x06, 0x00, 0x00, 0x04,
            0x00, 0x00, 0x00, 0x09,
        ],
        LabelMsg {
            msg_id: 9,
            msg_type: LabelMessageType::LabelAbortReq,
            fec: TlvFec(vec![FecElem::Prefix(net!("172.16.0.0/16"))]),
            label: None,
            request_id: Some(TlvLabelRequestId(9)),
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        }
        .into(),
    )
});

#[test]
fn test_encode_label_mapping1() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping1() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG1;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_mapping2() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG2;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping2() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG2;
    test_decode_msg(&IPV6_CXT, bytes, msg);
}

#[test]
fn test_encode_label_mapping3() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG3;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping3() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG3;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_mapping4() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG4;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping4() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG4;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_mapping5() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG5;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_mapping5() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG5;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_request1() {
    let (ref bytes, ref msg) = *LABEL_REQUEST_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_request1() {
    let (ref bytes, ref msg) = *LABEL_REQUEST_MSG1;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_withdraw1() {
    let (ref bytes, ref msg) = *LABEL_WITHDRAW_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_withdraw1() {
    let (ref bytes, ref msg) = *LABEL_WITHDRAW_MSG1;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_withdraw2() {
    let (ref bytes, ref msg) = *LABEL_WITHDRAW_MSG2;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_withdraw2() {
    let (ref bytes, ref msg) = *LABEL_WITHDRAW_MSG2;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_release1() {
    let (ref bytes, ref msg) = *LABEL_RELEASE_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_release1() {
    let (ref bytes, ref msg) = *LABEL_RELEASE_MSG1;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

#[test]
fn test_encode_label_abort1() {
    let (ref bytes, ref msg) = *LABEL_ABORT_MSG1;
    test_encode_msg(bytes, msg);
}

#[test]
fn test_decode_label_abort1() {
    let (ref bytes, ref msg) = *LABEL_ABORT_MSG1;
    test_decode_msg(&IPV4_CXT, bytes, msg);
}

// A label message with the U-bit set in its type decodes like the base
// type.
#[test]
fn test_decode_label_mapping_ubit() {
    let (ref bytes, ref msg) = *LABEL_MAPPING_MSG1;
    let mut bytes = bytes.clone();
    bytes[0] |= 0x80;
    test_decode_msg(&IPV4_CXT, &bytes, msg);
}

// A TLV length close to u16::MAX must not wrap around the message budget.
#[test]
fn test_decode_tlv_length_overflow() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0xff,
        0xff,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvLength(0xffff)));
}

// Likewise for a message length close to u16::MAX and the PDU budget.
#[test]
fn test_decode_msg_length_overflow() {
    let bytes = vec![0x04, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidMessageLength(0xffff)));
}

// A prefix with host bits set is canonicalized during decoding.
#[test]
fn test_decode_prefix_host_bits() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x17, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x07, 0x02, 0x00, 0x01, 0x14, 0x0a, 0x00, 0x1f, 0x02, 0x00, 0x00,
        0x04, 0x00, 0x00, 0x00, 0x10,
    ];
    let msg = LabelMsg {
        msg_id: 1,
        msg_type: LabelMessageType::LabelMapping,
        fec: TlvFec(vec![FecElem::Prefix(net!("10.0.16.0/20"))]),
        label: Some(TlvLabel(Label::new(16))),
        request_id: None,
        pw_status: None,
        status: None,
        unknown_tlvs: vec![],
    }
    .into();
    test_decode_msg(&IPV4_CXT, &bytes, &msg);
}

// Unrecognized optional TLVs without the U-bit are collected for the
// Returned-TLVs notification.
#[test]
fn test_decode_unknown_tlv_collected() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x1e, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x00, 0x04, 0x00, 0x00, 0x00, 0x10, 0x05, 0x00, 0x00, 0x02, 0xaa,
        0xbb,
    ];
    let msg = LabelMsg {
        msg_id: 1,
        msg_type: LabelMessageType::LabelMapping,
        fec: TlvFec(vec![FecElem::Prefix(net!("1.1.1.1/32"))]),
        label: Some(TlvLabel(Label::new(16))),
        request_id: None,
        pw_status: None,
        status: None,
        unknown_tlvs: vec![RawTlv {
            tlv_type: 0x0500,
            tlv_len: 2,
            value: Bytes::copy_from_slice(&[0xaa, 0xbb]),
        }],
    }
    .into();
    test_decode_msg(&IPV4_CXT, &bytes, &msg);
}

// Unrecognized optional TLVs with the U-bit set are ignored silently.
#[test]
fn test_decode_unknown_tlv_ignored() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x1e, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x00, 0x04, 0x00, 0x00, 0x00, 0x10, 0x85, 0x00, 0x00, 0x02, 0xaa,
        0xbb,
    ];
    let msg = LabelMsg {
        msg_id: 1,
        msg_type: LabelMessageType::LabelMapping,
        fec: TlvFec(vec![FecElem::Prefix(net!("1.1.1.1/32"))]),
        label: Some(TlvLabel(Label::new(16))),
        request_id: None,
        pw_status: None,
        status: None,
        unknown_tlvs: vec![],
    }
    .into();
    test_decode_msg(&IPV4_CXT, &bytes, &msg);
}

#[test]
fn test_decode_label_out_of_range() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x00, 0x04, 0x00, 0x10, 0x00, 0x00,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvValue(_)));
}

#[test]
fn test_decode_label_reserved() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x00, 0x04, 0x00, 0x00, 0x00, 0x05,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvValue(_)));
}

// An IPv6 explicit null label can't be bound to an IPv4 prefix.
#[test]
fn test_decode_label_explicit_null_mismatch() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x00, 0x04, 0x00, 0x00, 0x00, 0x02,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvValue(_)));
}

// The wildcard FEC element is only valid in Label Withdraw and Label
// Release messages. Its misuse is reported separately from an unrecognized
// FEC element type, which is merely advisory.
#[test]
fn test_decode_wildcard_in_mapping() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x01, 0x02, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x10,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidWildcardFec(_, 1)));
}

// The typed wildcard FEC element isn't valid in Label Mapping messages.
#[test]
fn test_decode_typed_wildcard_in_mapping() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x15, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x05, 0x05, 0x02, 0x02, 0x00, 0x01, 0x02, 0x00, 0x00, 0x04, 0x00,
        0x00, 0x00, 0x10,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidWildcardFec(_, 5)));
}

// Multiple FEC elements are allowed in Label Mapping messages only.
#[test]
fn test_decode_multiple_fec_elems_in_withdraw() {
    let bytes = vec![
        0x04, 0x02, 0x00, 0x18, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x10, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x01, 0x20, 0x02, 0x02, 0x02, 0x02,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvValue(_)));
}

// A prefix element whose payload is shorter than its prefix length claims.
#[test]
fn test_decode_truncated_prefix() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x06, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvLength(_)));
}

#[test]
fn test_decode_unsupported_af() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x06, 0x02, 0x00, 0x03, 0x20, 0x01, 0x01,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::UnsupportedAf(_, 3)));
}

#[test]
fn test_decode_mapping_without_label() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(
        error,
        DecodeError::MissingMsgParams(_, TlvType::GenericLabel)
    ));
}

// In a Label Mapping message the Label TLV must appear right after the FEC
// TLV.
#[test]
fn test_decode_mapping_label_not_first() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x06, 0x00,
        0x00, 0x04, 0x00, 0x00, 0x00, 0x09,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(
        error,
        DecodeError::MissingMsgParams(_, TlvType::GenericLabel)
    ));
}

#[test]
fn test_decode_abort_without_request_id() {
    let bytes = vec![
        0x04, 0x04, 0x00, 0x10, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(
        error,
        DecodeError::MissingMsgParams(_, TlvType::LabelRequestId)
    ));
}

// ATM and Frame Relay label encodings aren't supported.
#[test]
fn test_decode_atm_label() {
    let bytes = vec![
        0x04, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x08, 0x02, 0x00, 0x01, 0x20, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00,
        0x00, 0x04, 0x00, 0x00, 0x00, 0x10, 0x02, 0x01, 0x00, 0x04, 0x00,
        0x00, 0x00, 0x00,
    ];
    let error = test_decode_msg_error(&IPV4_CXT, &bytes);
    assert!(matches!(error, DecodeError::InvalidTlvValue(_)));
}
