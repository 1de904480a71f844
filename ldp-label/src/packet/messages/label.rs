//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use ldp_utils::ip::{
    AddressFamily, IpAddrExt, IpNetworkExt, Ipv4AddrExt, Ipv4NetworkExt,
    Ipv6AddrExt, Ipv6NetworkExt,
};
use ldp_utils::mpls::Label;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::packet::DecodeCxt;
use crate::packet::error::{DecodeError, DecodeResult};
use crate::packet::message::{
    LabelMessageType, Message, MessageDecodeInfo, MessageKind, MessageType,
};
use crate::packet::messages::notification::TlvStatus;
use crate::packet::tlv::{self, TlvDecodeInfo, TlvKind, TlvType};

//
// Label messages.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |0|   Label Mapping (0x0400)    |      Message Length           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Message ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     FEC TLV                                   |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Label TLV                                 |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Optional Parameters                       |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The Label Request (0x0401), Label Withdraw (0x0402), Label Release
// (0x0403) and Label Abort Request (0x0404) messages share the same
// structure, with the Label TLV being optional (Withdraw/Release), absent
// (Request) or replaced by the Label Request Message ID TLV (Abort Request).
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[skip_serializing_none]
#[derive(Deserialize, Serialize)]
pub struct LabelMsg {
    pub msg_id: u32,
    pub msg_type: LabelMessageType,
    pub fec: TlvFec,
    pub label: Option<TlvLabel>,
    pub request_id: Option<TlvLabelRequestId>,
    pub pw_status: Option<TlvPwStatus>,
    pub status: Option<TlvStatus>,
    // Unrecognized optional TLVs without the U-bit, kept for the
    // Returned-TLVs notification.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_tlvs: Vec<RawTlv>,
}

//
// FEC TLV.
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |0|0| FEC (0x0100)              |      Length                   |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                        FEC Element 1                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                                                               |
// ~                                                               ~
// |                                                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                        FEC Element n                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TlvFec(pub Vec<FecElem>);

//
// Prefix FEC Element value encoding:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Prefix (2)   |     Address Family            |     PreLen    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Prefix                                    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FecElem {
    Wildcard(FecElemWildcard),
    Prefix(IpNetwork),
    Pwid(FecPwId),
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FecElemWildcard {
    All,
    Typed(TypedWildcardFecElem),
}

//
// PWid FEC Element value encoding (RFC 4447):
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  PWid (0x80)  |C|         PW type             |PW info Length |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                          Group ID                             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                          PW ID                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                Interface Parameter Sub-TLVs                   |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FecPwId {
    pub pw_type: u16,
    pub cword: bool,
    pub group_id: u32,
    pub pwid: Option<u32>,
    pub ifmtu: Option<u16>,
}

// Forwarding Equivalence Class (FEC) Type Name Space.
//
// IANA registry:
// https://www.iana.org/assignments/ldp-namespaces/ldp-namespaces.xhtml#fec-type
pub const TLV_FEC_ELEMENT_WILDCARD: u8 = 1;
pub const TLV_FEC_ELEMENT_PREFIX: u8 = 2;
pub const TLV_FEC_ELEMENT_TYPED_WILDCARD: u8 = 5;
pub const TLV_FEC_ELEMENT_PWID: u8 = 0x80;

// Control-word flag in the PW type field (RFC 4447).
pub const CONTROL_WORD_FLAG: u16 = 0x8000;
// Reserved bit of the PW type in a Typed Wildcard element (RFC 6667).
pub const PW_TWCARD_RESERVED_BIT: u16 = 0x8000;

// Interface parameter sub-TLVs. The sub-TLV length field counts the 2-byte
// sub-TLV header as well (RFC 4447 - Section 5.2).
const SUBTLV_HDR_SIZE: u8 = 2;
const SUBTLV_IFMTU: u8 = 0x01;
const SUBTLV_IFMTU_SIZE: u8 = 4;

//
// Typed Wildcard FEC Element value encoding:
//
// 0                   1                   2                   3
// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// | Typed (0x05)  | FEC Element   | Len FEC Type  |               |
// | Wildcard      | Type          | Info          |               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+               |
// |                                                               |
// ~          Additional FEC Type-specific Information             ~
// |                  (Optional)                                   |
// |                                               +-+-+-+-+-+-+-+-+
// |                                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The FEC-type-specific information is the address family for the Prefix
// FEC and the PW type for the PWid FEC (RFC 5918 / RFC 6667), two bytes in
// both cases.
//
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypedWildcardFecElem {
    Prefix(AddressFamily),
    Pwid(u16),
}

// Generic Label TLV.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TlvLabel(pub Label);

// Label Request Message ID TLV.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TlvLabelRequestId(pub u32);

// PW Status TLV (RFC 4447).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TlvPwStatus(pub u32);

// Raw optional TLV preserved for peer diagnostics.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RawTlv {
    pub tlv_type: u16,
    pub tlv_len: u16,
    pub value: Bytes,
}

// ===== impl LabelMsg =====

impl MessageKind for LabelMsg {
    const U_BIT: bool = false;

    fn msg_id(&self) -> u32 {
        self.msg_id
    }

    fn msg_type(&self) -> MessageType {
        self.msg_type.into()
    }

    fn encode_body(&self, buf: &mut BytesMut) {
        // Encode mandatory TLV(s).
        self.fec.encode(self.msg_type(), buf);

        // Encode optional TLV(s), in fixed order.
        if let Some(tlv) = &self.label {
            tlv.encode(self.msg_type(), buf);
        }
        if let Some(tlv) = &self.request_id {
            tlv.encode(self.msg_type(), buf);
        }
        if let Some(tlv) = &self.pw_status {
            tlv.encode(self.msg_type(), buf);
        }
        if let Some(tlv) = &self.status {
            tlv.encode(self.msg_type(), buf);
        }
    }

    fn decode_body(
        buf: &mut Bytes,
        cxt: &DecodeCxt,
        msgi: &mut MessageDecodeInfo,
    ) -> DecodeResult<Message> {
        // Decode mandatory FEC TLV (all label messages).
        let tlvi = tlv::decode_tlv_hdr(buf, msgi)?;
        if tlvi.tlv_type != TlvType::Fec as u16 {
            return Err(DecodeError::MissingMsgParams(
                msgi.clone(),
                TlvType::Fec,
            ));
        }
        let fec = TlvFec::decode_value(buf, cxt, &tlvi)?;

        // Create new message.
        let mut msg = LabelMsg {
            msg_type: LabelMessageType::from_u16(
                msgi.msg_type & Message::TYPE_MASK,
            )
            .unwrap(),
            msg_id: msgi.msg_id,
            fec,
            label: None,
            request_id: None,
            pw_status: None,
            status: None,
            unknown_tlvs: vec![],
        };

        // Decode optional TLV(s).
        msg.decode_opt_tlvs(buf, cxt, msgi)?;

        // Additional sanity checks.
        for fec_elem in &msg.fec.0 {
            match msgi.msg_etype.unwrap() {
                // RFC 5036 - Section 3.4.1:
                // "Note that this version of LDP supports the use of multiple
                // FEC Elements per FEC for the Label Mapping message only".
                MessageType::LabelRequest
                | MessageType::LabelWithdraw
                | MessageType::LabelRelease
                | MessageType::LabelAbortReq
                    if msg.fec.0.len() > 1 =>
                {
                    return Err(DecodeError::InvalidTlvValue(tlvi));
                }
                // RFC 5918 - Section 1:
                // "Use of the Wildcard FEC Element is limited to Label
                // Withdraw and Label Release messages only".
                MessageType::LabelMapping
                | MessageType::LabelRequest
                | MessageType::LabelAbortReq
                    if matches!(
                        fec_elem,
                        FecElem::Wildcard(FecElemWildcard::All)
                    ) =>
                {
                    return Err(DecodeError::InvalidWildcardFec(
                        msgi.clone(),
                        TLV_FEC_ELEMENT_WILDCARD,
                    ));
                }
                // RFC 5918 - Section 4:
                // "An LDP implementation that supports the Typed Wildcard FEC
                // Element MUST support its use in Label Request, Label
                // Withdraw, and Label Release messages".
                MessageType::LabelMapping | MessageType::LabelAbortReq
                    if matches!(
                        fec_elem,
                        FecElem::Wildcard(FecElemWildcard::Typed(..))
                    ) =>
                {
                    return Err(DecodeError::InvalidWildcardFec(
                        msgi.clone(),
                        TLV_FEC_ELEMENT_TYPED_WILDCARD,
                    ));
                }
                // A PWid FEC without an explicit PW ID can only reference an
                // existing pseudowire.
                MessageType::LabelMapping
                | MessageType::LabelRequest
                | MessageType::LabelAbortReq
                    if matches!(
                        fec_elem,
                        FecElem::Pwid(FecPwId { pwid: None, .. })
                    ) =>
                {
                    return Err(DecodeError::MissingMsgParams(
                        msgi.clone(),
                        TlvType::Fec,
                    ));
                }
                _ => (),
            }
        }

        // Check for missing message-specific mandatory parameters.
        match msgi.msg_etype.unwrap() {
            MessageType::LabelMapping if msg.label.is_none() => {
                return Err(DecodeError::MissingMsgParams(
                    msgi.clone(),
                    TlvType::GenericLabel,
                ));
            }
            MessageType::LabelAbortReq if msg.request_id.is_none() => {
                return Err(DecodeError::MissingMsgParams(
                    msgi.clone(),
                    TlvType::LabelRequestId,
                ));
            }
            _ => (),
        }

        // Check for invalid explicit null labels.
        if let Some(label) = &msg.label {
            for fec_elem in &msg.fec.0 {
                if let FecElem::Prefix(prefix) = fec_elem
                    && ((prefix.is_ipv4()
                        && label.0.get() == Label::IPV6_EXPLICIT_NULL)
                        || (prefix.is_ipv6()
                            && label.0.get() == Label::IPV4_EXPLICIT_NULL))
                {
                    return Err(DecodeError::InvalidTlvValue(tlvi));
                }
            }
        }

        Ok(Message::Label(msg))
    }

    // The optional TLV set accepted here depends on the message type, and
    // unrecognized TLVs are collected instead of aborting the decode, so the
    // default loop doesn't fit.
    fn decode_opt_tlvs(
        &mut self,
        buf: &mut Bytes,
        cxt: &DecodeCxt,
        msgi: &mut MessageDecodeInfo,
    ) -> DecodeResult<()> {
        let msg_type = self.msg_type();
        let mut current_tlv = 1;

        while msgi.msg_rlen >= tlv::TLV_HDR_SIZE {
            let tlvi = tlv::decode_tlv_hdr(buf, msgi)?;

            // For Label Mapping messages the Label TLV is mandatory and must
            // appear right after the FEC TLV.
            if current_tlv == 1
                && msg_type == MessageType::LabelMapping
                && tlvi.tlv_etype != Some(TlvType::GenericLabel)
            {
                return Err(DecodeError::MissingMsgParams(
                    msgi.clone(),
                    TlvType::GenericLabel,
                ));
            }

            match tlvi.tlv_etype {
                Some(TlvType::GenericLabel) => match msg_type {
                    MessageType::LabelMapping
                    | MessageType::LabelWithdraw
                    | MessageType::LabelRelease => {
                        if self.label.is_some() {
                            return Err(DecodeError::InvalidTlvValue(tlvi));
                        }
                        self.label =
                            Some(TlvLabel::decode_value(buf, cxt, &tlvi)?);
                    }
                    _ => buf.advance(tlvi.tlv_len as usize),
                },
                Some(TlvType::AtmLabel | TlvType::FrLabel) => match msg_type {
                    // Unsupported label encodings.
                    MessageType::LabelMapping
                    | MessageType::LabelWithdraw
                    | MessageType::LabelRelease => {
                        return Err(DecodeError::InvalidTlvValue(tlvi));
                    }
                    _ => buf.advance(tlvi.tlv_len as usize),
                },
                Some(TlvType::LabelRequestId) => match msg_type {
                    MessageType::LabelMapping
                    | MessageType::LabelRequest
                    | MessageType::LabelAbortReq => {
                        self.request_id = Some(TlvLabelRequestId::decode_value(
                            buf, cxt, &tlvi,
                        )?);
                    }
                    _ => buf.advance(tlvi.tlv_len as usize),
                },
                Some(TlvType::PwStatus) => match msg_type {
                    MessageType::LabelMapping => {
                        self.pw_status =
                            Some(TlvPwStatus::decode_value(buf, cxt, &tlvi)?);
                    }
                    _ => buf.advance(tlvi.tlv_len as usize),
                },
                Some(TlvType::Status) => {
                    // Length-validated and recorded, but otherwise unused by
                    // label message processing.
                    self.status =
                        Some(TlvStatus::decode_value(buf, cxt, &tlvi)?);
                }
                Some(TlvType::HopCount | TlvType::PathVector) => {
                    // Loop detection is unnecessary for frame-mode MPLS
                    // networks.
                    buf.advance(tlvi.tlv_len as usize);
                }
                _ => {
                    let value = buf.slice(0..tlvi.tlv_len as usize);
                    buf.advance(tlvi.tlv_len as usize);

                    // Silently ignore the TLV if the U-bit is set, otherwise
                    // keep it so an Unknown-TLV notification carrying the
                    // offending TLV can be sent back.
                    if tlvi.tlv_type & tlv::TLV_UNKNOWN_FLAG == 0 {
                        self.unknown_tlvs.push(RawTlv {
                            tlv_type: tlvi.tlv_type,
                            tlv_len: tlvi.tlv_len,
                            value,
                        });
                    }
                }
            }

            current_tlv += 1;
        }

        Ok(())
    }
}

impl LabelMsg {
    pub(crate) fn get_label(&self) -> Option<Label> {
        self.label.as_ref().map(|label| label.0)
    }
}

// ===== impl TlvFec =====

impl TlvKind for TlvFec {
    const TLV_TYPE: TlvType = TlvType::Fec;
    const U_BIT: bool = false;
    const F_BIT: bool = false;

    fn encode_value(&self, buf: &mut BytesMut) {
        for fec_elem in &self.0 {
            fec_elem.encode(buf);
        }
    }

    fn decode_value(
        buf: &mut Bytes,
        _cxt: &DecodeCxt,
        tlvi: &TlvDecodeInfo,
    ) -> DecodeResult<Self> {
        // FEC list can't be empty.
        if tlvi.tlv_len < 1 {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }

        let mut fec_elems: Vec<FecElem> = vec![];
        let mut tlv_rlen = tlvi.tlv_len;
        while tlv_rlen >= 1 {
            let fec_elem = FecElem::decode(buf, tlvi, &mut tlv_rlen)?;

            fec_elems.push(fec_elem);
        }

        Ok(Self(fec_elems))
    }
}

// ===== impl FecElem =====

impl FecElem {
    // Size of this element inside the FEC TLV value.
    pub fn wire_len(&self) -> u16 {
        match self {
            FecElem::Wildcard(FecElemWildcard::All) => 1,
            FecElem::Wildcard(FecElemWildcard::Typed(..)) => 5,
            FecElem::Prefix(prefix) => {
                4 + prefix_wire_len(prefix.prefix()) as u16
            }
            FecElem::Pwid(pwid) => {
                let mut len = 8;
                if pwid.pwid.is_some() {
                    len += 4;
                }
                if pwid.ifmtu.is_some() {
                    len += SUBTLV_IFMTU_SIZE as u16;
                }
                len
            }
        }
    }

    fn encode(&self, buf: &mut BytesMut) {
        match self {
            FecElem::Wildcard(FecElemWildcard::All) => {
                buf.put_u8(TLV_FEC_ELEMENT_WILDCARD);
            }
            FecElem::Wildcard(FecElemWildcard::Typed(typed_wcard)) => {
                typed_wcard.encode(buf);
            }
            FecElem::Prefix(prefix) => {
                // FEC element type.
                buf.put_u8(TLV_FEC_ELEMENT_PREFIX);

                // FEC address family.
                let af = match prefix {
                    IpNetwork::V4(_) => AddressFamily::Ipv4,
                    IpNetwork::V6(_) => AddressFamily::Ipv6,
                };
                buf.put_u16(af as u16);

                // FEC prefix length.
                let plen = prefix.prefix();
                buf.put_u8(plen);

                // FEC prefix (variable length).
                let prefix_bytes = prefix.ip().bytes();
                let plen_wire = prefix_wire_len(plen);
                buf.put(&prefix_bytes[0..plen_wire]);
            }
            FecElem::Pwid(pwid) => {
                // FEC element type.
                buf.put_u8(TLV_FEC_ELEMENT_PWID);

                // PW type and control-word flag.
                let mut pw_type = pwid.pw_type;
                if pwid.cword {
                    pw_type |= CONTROL_WORD_FLAG;
                }
                buf.put_u16(pw_type);

                // PW info length.
                let mut pw_len = 0;
                if pwid.pwid.is_some() {
                    pw_len += 4;
                }
                if pwid.ifmtu.is_some() {
                    pw_len += SUBTLV_IFMTU_SIZE;
                }
                buf.put_u8(pw_len);

                // Group ID.
                buf.put_u32(pwid.group_id);

                // PW ID.
                if let Some(id) = pwid.pwid {
                    buf.put_u32(id);
                }

                // Interface MTU sub-TLV.
                if let Some(ifmtu) = pwid.ifmtu {
                    buf.put_u8(SUBTLV_IFMTU);
                    buf.put_u8(SUBTLV_IFMTU_SIZE);
                    buf.put_u16(ifmtu);
                }
            }
        }
    }

    fn decode(
        buf: &mut Bytes,
        tlvi: &TlvDecodeInfo,
        tlv_rlen: &mut u16,
    ) -> DecodeResult<Self> {
        // Parse FEC element type.
        let fec_elem_type = buf.get_u8();
        *tlv_rlen -= 1;

        match fec_elem_type {
            TLV_FEC_ELEMENT_WILDCARD => {
                // The wildcard element is the entire FEC.
                if *tlv_rlen != 0 {
                    return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
                }
                Ok(FecElem::Wildcard(FecElemWildcard::All))
            }
            TLV_FEC_ELEMENT_PREFIX => {
                if *tlv_rlen < 3 {
                    return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
                }

                // Parse prefix address family.
                let af = buf.get_u16();
                *tlv_rlen -= 2;
                let af = match FromPrimitive::from_u16(af) {
                    Some(AddressFamily::Ipv4) => AddressFamily::Ipv4,
                    Some(AddressFamily::Ipv6) => AddressFamily::Ipv6,
                    _ => {
                        return Err(DecodeError::UnsupportedAf(
                            tlvi.clone(),
                            af,
                        ));
                    }
                };

                // Parse prefix length.
                let plen = buf.get_u8();
                *tlv_rlen -= 1;
                if (af == AddressFamily::Ipv4
                    && plen > Ipv4Network::MAX_PREFIXLEN)
                    || (af == AddressFamily::Ipv6
                        && plen > Ipv6Network::MAX_PREFIXLEN)
                {
                    return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
                }

                // Truncated prefix payload.
                let plen_wire = prefix_wire_len(plen);
                if *tlv_rlen < plen_wire as u16 {
                    return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
                }

                // Parse prefix.
                let prefix = match af {
                    AddressFamily::Ipv4 => {
                        let mut prefix_bytes = [0; Ipv4Addr::LENGTH];
                        buf.copy_to_slice(&mut prefix_bytes[..plen_wire]);
                        Ipv4Addr::from(prefix_bytes).into()
                    }
                    AddressFamily::Ipv6 => {
                        let mut prefix_bytes = [0; Ipv6Addr::LENGTH];
                        buf.copy_to_slice(&mut prefix_bytes[..plen_wire]);
                        Ipv6Addr::from(prefix_bytes).into()
                    }
                };
                *tlv_rlen -= plen_wire as u16;
                IpNetwork::new(prefix, plen)
                    .map(|prefix| FecElem::Prefix(prefix.apply_mask()))
                    .map_err(|_| DecodeError::InvalidTlvValue(tlvi.clone()))
            }
            TLV_FEC_ELEMENT_PWID => {
                let elem = FecPwId::decode(buf, tlvi, tlv_rlen)?;
                Ok(FecElem::Pwid(elem))
            }
            TLV_FEC_ELEMENT_TYPED_WILDCARD => {
                let elem = TypedWildcardFecElem::decode(buf, tlvi, tlv_rlen)?;
                Ok(FecElem::Wildcard(FecElemWildcard::Typed(elem)))
            }
            _ => Err(DecodeError::UnknownFec(tlvi.clone(), fec_elem_type)),
        }
    }
}

impl From<IpNetwork> for FecElem {
    fn from(prefix: IpNetwork) -> FecElem {
        FecElem::Prefix(prefix)
    }
}

// ===== impl FecPwId =====

impl FecPwId {
    fn decode(
        buf: &mut Bytes,
        tlvi: &TlvDecodeInfo,
        tlv_rlen: &mut u16,
    ) -> DecodeResult<Self> {
        // PW type, PW info length and group ID.
        if *tlv_rlen < 7 {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }

        // Parse PW type and control-word flag.
        let mut pw_type = buf.get_u16();
        *tlv_rlen -= 2;
        let cword = pw_type & CONTROL_WORD_FLAG != 0;
        pw_type &= !CONTROL_WORD_FLAG;

        // Parse PW info length.
        let mut pw_len = buf.get_u8() as u16;
        *tlv_rlen -= 1;
        if *tlv_rlen < 4 + pw_len {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }

        // Parse group ID.
        let group_id = buf.get_u32();
        *tlv_rlen -= 4;

        let mut pwid = FecPwId {
            pw_type,
            cword,
            group_id,
            pwid: None,
            ifmtu: None,
        };

        // Parse PW ID.
        if pw_len == 0 {
            return Ok(pwid);
        }
        if pw_len < 4 {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }
        pwid.pwid = Some(buf.get_u32());
        *tlv_rlen -= 4;
        pw_len -= 4;

        // Parse optional interface parameter sub-TLVs. The declared PW info
        // length must be consumed exactly.
        while pw_len > 0 {
            if pw_len < SUBTLV_HDR_SIZE as u16 {
                return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
            }

            let stlv_type = buf.get_u8();
            let stlv_len = buf.get_u8() as u16;
            if stlv_len < SUBTLV_HDR_SIZE as u16 || stlv_len > pw_len {
                return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
            }
            let stlv_vlen = stlv_len - SUBTLV_HDR_SIZE as u16;

            match stlv_type {
                SUBTLV_IFMTU => {
                    if stlv_len != SUBTLV_IFMTU_SIZE as u16 {
                        return Err(DecodeError::InvalidTlvLength(
                            tlvi.tlv_len,
                        ));
                    }
                    pwid.ifmtu = Some(buf.get_u16());
                }
                _ => {
                    // Skip unknown sub-TLVs using their declared length.
                    buf.advance(stlv_vlen as usize);
                }
            }

            *tlv_rlen -= stlv_len;
            pw_len -= stlv_len;
        }

        Ok(pwid)
    }
}

// ===== impl TypedWildcardFecElem =====

impl TypedWildcardFecElem {
    fn encode(&self, buf: &mut BytesMut) {
        // FEC element type.
        buf.put_u8(TLV_FEC_ELEMENT_TYPED_WILDCARD);

        match self {
            TypedWildcardFecElem::Prefix(af) => {
                // Typed Wildcard FEC element type.
                buf.put_u8(TLV_FEC_ELEMENT_PREFIX);

                // Len FEC Type Info.
                buf.put_u8(2);

                // Address Family.
                buf.put_u16(*af as u16);
            }
            TypedWildcardFecElem::Pwid(pw_type) => {
                // Typed Wildcard FEC element type.
                buf.put_u8(TLV_FEC_ELEMENT_PWID);

                // Len FEC Type Info.
                buf.put_u8(2);

                // PW type.
                buf.put_u16(*pw_type);
            }
        };
    }

    fn decode(
        buf: &mut Bytes,
        tlvi: &TlvDecodeInfo,
        tlv_rlen: &mut u16,
    ) -> DecodeResult<Self> {
        if *tlv_rlen < 2 {
            return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
        }

        // Typed Wildcard FEC element type.
        let typed_wcard = buf.get_u8();
        *tlv_rlen -= 1;

        match typed_wcard {
            TLV_FEC_ELEMENT_PREFIX => {
                if *tlv_rlen < 3 {
                    return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
                }

                // Len FEC Type Info.
                let len = buf.get_u8();
                *tlv_rlen -= 1;
                if len != 2 {
                    return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
                }

                // Address Family.
                let af = buf.get_u16();
                *tlv_rlen -= 2;
                let af = match FromPrimitive::from_u16(af) {
                    Some(AddressFamily::Ipv4) => AddressFamily::Ipv4,
                    Some(AddressFamily::Ipv6) => AddressFamily::Ipv6,
                    _ => {
                        return Err(DecodeError::UnsupportedAf(
                            tlvi.clone(),
                            af,
                        ));
                    }
                };

                Ok(TypedWildcardFecElem::Prefix(af))
            }
            TLV_FEC_ELEMENT_PWID => {
                if *tlv_rlen < 3 {
                    return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
                }

                // Len FEC Type Info.
                let len = buf.get_u8();
                *tlv_rlen -= 1;
                if len != 2 {
                    return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
                }

                // PW type, ignoring the reserved bit as per RFC 6667.
                let pw_type = buf.get_u16() & !PW_TWCARD_RESERVED_BIT;
                *tlv_rlen -= 2;

                Ok(TypedWildcardFecElem::Pwid(pw_type))
            }
            _ => Err(DecodeError::UnknownFec(tlvi.clone(), typed_wcard)),
        }
    }
}

// ===== impl TlvLabel =====

impl TlvKind for TlvLabel {
    const TLV_TYPE: TlvType = TlvType::GenericLabel;
    const U_BIT: bool = false;
    const F_BIT: bool = false;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0.get());
    }

    fn decode_value(
        buf: &mut Bytes,
        _cxt: &DecodeCxt,
        tlvi: &TlvDecodeInfo,
    ) -> DecodeResult<Self> {
        if tlvi.tlv_len != 4 {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }

        let label = buf.get_u32();
        if label > *Label::UNRESERVED_RANGE.end()
            || (label <= *Label::RESERVED_RANGE.end()
                && label != Label::IPV4_EXPLICIT_NULL
                && label != Label::IPV6_EXPLICIT_NULL
                && label != Label::IMPLICIT_NULL)
        {
            return Err(DecodeError::InvalidTlvValue(tlvi.clone()));
        }

        Ok(Self(Label::new(label)))
    }
}

// ===== impl TlvLabelRequestId =====

impl TlvKind for TlvLabelRequestId {
    const TLV_TYPE: TlvType = TlvType::LabelRequestId;
    const U_BIT: bool = false;
    const F_BIT: bool = false;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(
        buf: &mut Bytes,
        _cxt: &DecodeCxt,
        tlvi: &TlvDecodeInfo,
    ) -> DecodeResult<Self> {
        if tlvi.tlv_len != 4 {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }

        let request_id = buf.get_u32();

        Ok(Self(request_id))
    }
}

// ===== impl TlvPwStatus =====

impl TlvKind for TlvPwStatus {
    const TLV_TYPE: TlvType = TlvType::PwStatus;
    const U_BIT: bool = false;
    const F_BIT: bool = false;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(
        buf: &mut Bytes,
        _cxt: &DecodeCxt,
        tlvi: &TlvDecodeInfo,
    ) -> DecodeResult<Self> {
        if tlvi.tlv_len != 4 {
            return Err(DecodeError::InvalidTlvLength(tlvi.tlv_len));
        }

        let pw_status = buf.get_u32();

        Ok(Self(pw_status))
    }
}

// ===== global functions =====

// Calculate the number of bytes required to encode a prefix.
fn prefix_wire_len(len: u8) -> usize {
    len.div_ceil(8) as usize
}
