// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated TLV descriptor layouts for kiwi v1.

use wlan_hwio::tlv_descriptor;

tlv_descriptor! {
    pub mod rx_attention [4; Qword] {
        RXPCU_MPDU_FILTER_IN_CATEGORY @ 0x0 [1:0] = 0x0000000000000003,
        SW_FRAME_GROUP_ID @ 0x0 [8:2] = 0x00000000000001fc,
        RESERVED_0 @ 0x0 [15:9] = 0x000000000000fe00,
        PHY_PPDU_ID @ 0x0 [31:16] = 0x00000000ffff0000,
        FIRST_MPDU @ 0x0 [32:32] = 0x0000000100000000,
        RESERVED_1A @ 0x0 [33:33] = 0x0000000200000000,
        MCAST_BCAST @ 0x0 [34:34] = 0x0000000400000000,
        AST_INDEX_NOT_FOUND @ 0x0 [35:35] = 0x0000000800000000,
        AST_INDEX_TIMEOUT @ 0x0 [36:36] = 0x0000001000000000,
        POWER_MGMT @ 0x0 [37:37] = 0x0000002000000000,
        NON_QOS @ 0x0 [38:38] = 0x0000004000000000,
        NULL_DATA @ 0x0 [39:39] = 0x0000008000000000,
        MGMT_TYPE @ 0x0 [40:40] = 0x0000010000000000,
        CTRL_TYPE @ 0x0 [41:41] = 0x0000020000000000,
        MORE_DATA @ 0x0 [42:42] = 0x0000040000000000,
        EOSP @ 0x0 [43:43] = 0x0000080000000000,
        A_MSDU_ERROR @ 0x0 [44:44] = 0x0000100000000000,
        FRAGMENT_FLAG @ 0x0 [45:45] = 0x0000200000000000,
        ORDER @ 0x0 [46:46] = 0x0000400000000000,
        CCE_MATCH @ 0x0 [47:47] = 0x0000800000000000,
        OVERFLOW_ERR @ 0x0 [48:48] = 0x0001000000000000,
        MSDU_LENGTH_ERR @ 0x0 [49:49] = 0x0002000000000000,
        TCP_UDP_CHKSUM_FAIL @ 0x0 [50:50] = 0x0004000000000000,
        IP_CHKSUM_FAIL @ 0x0 [51:51] = 0x0008000000000000,
        SA_IDX_INVALID @ 0x0 [52:52] = 0x0010000000000000,
        DA_IDX_INVALID @ 0x0 [53:53] = 0x0020000000000000,
        RESERVED_1B @ 0x0 [54:54] = 0x0040000000000000,
        RX_IN_TX_DECRYPT_BYP @ 0x0 [55:55] = 0x0080000000000000,
        ENCRYPT_REQUIRED @ 0x0 [56:56] = 0x0100000000000000,
        DIRECTED @ 0x0 [57:57] = 0x0200000000000000,
        BUFFER_FRAGMENT @ 0x0 [58:58] = 0x0400000000000000,
        MPDU_LENGTH_ERR @ 0x0 [59:59] = 0x0800000000000000,
        TKIP_MIC_ERR @ 0x0 [60:60] = 0x1000000000000000,
        DECRYPT_ERR @ 0x0 [61:61] = 0x2000000000000000,
        UNENCRYPTED_FRAME_ERR @ 0x0 [62:62] = 0x4000000000000000,
        FCS_ERR @ 0x0 [63:63] = 0x8000000000000000,
        FLOW_IDX_TIMEOUT @ 0x8 [0:0] = 0x0000000000000001,
        FLOW_IDX_INVALID @ 0x8 [1:1] = 0x0000000000000002,
        WIFI_PARSER_ERROR @ 0x8 [2:2] = 0x0000000000000004,
        AMSDU_PARSER_ERROR @ 0x8 [3:3] = 0x0000000000000008,
        SA_IDX_TIMEOUT @ 0x8 [4:4] = 0x0000000000000010,
        DA_IDX_TIMEOUT @ 0x8 [5:5] = 0x0000000000000020,
        MSDU_LIMIT_ERROR @ 0x8 [6:6] = 0x0000000000000040,
        DA_IS_VALID @ 0x8 [7:7] = 0x0000000000000080,
        DA_IS_MCBC @ 0x8 [8:8] = 0x0000000000000100,
        SA_IS_VALID @ 0x8 [9:9] = 0x0000000000000200,
        DECRYPT_STATUS_CODE @ 0x8 [12:10] = 0x0000000000001c00,
        RX_BITMAP_NOT_UPDATED @ 0x8 [13:13] = 0x0000000000002000,
        RESERVED_2 @ 0x8 [30:14] = 0x000000007fffc000,
        MSDU_DONE @ 0x8 [31:31] = 0x0000000080000000,
        TLV64_PADDING @ 0x8 [63:32] = 0xffffffff00000000,
    }
}

pub const DESCRIPTORS: &[wlan_hwio::DescriptorLayout] = &[
    rx_attention::LAYOUT,
];
