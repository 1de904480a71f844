//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// LDP inter-task message types.
pub mod messages {
    // Output messages (label subsystem -> collaborator tasks).
    pub mod output {
        use serde::{Deserialize, Serialize};

        use crate::fec::Mapping;
        use crate::neighbor::{NeighborId, fsm};
        use crate::packet::LabelMessageType;
        use crate::packet::pdu::Pdu;

        // Finalized PDU bound for the neighbor's transport connection.
        #[derive(Debug, Serialize)]
        pub struct NbrTxPduMsg {
            pub nbr_id: NeighborId,
            pub pdu: Pdu,
        }

        // Event bound for the session FSM.
        #[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
        pub struct SessionEventMsg {
            pub nbr_id: NeighborId,
            pub event: fsm::Event,
        }

        // Decoded mapping record bound for the label distribution engine.
        #[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
        pub struct LabelDistMsg {
            pub nbr_id: NeighborId,
            pub kind: LabelDistEventKind,
            pub mapping: Mapping,
        }

        #[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
        pub enum LabelDistEventKind {
            MappingRcvd,
            RequestRcvd,
            WithdrawRcvd,
            ReleaseRcvd,
            AbortRcvd,
        }

        impl From<LabelMessageType> for LabelDistEventKind {
            fn from(msg_type: LabelMessageType) -> LabelDistEventKind {
                match msg_type {
                    LabelMessageType::LabelMapping => {
                        LabelDistEventKind::MappingRcvd
                    }
                    LabelMessageType::LabelRequest => {
                        LabelDistEventKind::RequestRcvd
                    }
                    LabelMessageType::LabelWithdraw => {
                        LabelDistEventKind::WithdrawRcvd
                    }
                    LabelMessageType::LabelRelease => {
                        LabelDistEventKind::ReleaseRcvd
                    }
                    LabelMessageType::LabelAbortReq => {
                        LabelDistEventKind::AbortRcvd
                    }
                }
            }
        }
    }
}
