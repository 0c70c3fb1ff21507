// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated TLV descriptor layouts for peach v2.

use wlan_hwio::tlv_descriptor;

tlv_descriptor! {
    pub mod rx_attention [3; Dword] {
        RXPCU_MPDU_FILTER_IN_CATEGORY @ 0x0 [1:0] = 0x00000003,
        SW_FRAME_GROUP_ID @ 0x0 [8:2] = 0x000001fc,
        RESERVED_0 @ 0x0 [15:9] = 0x0000fe00,
        PHY_PPDU_ID @ 0x0 [31:16] = 0xffff0000,
        FIRST_MPDU @ 0x4 [0:0] = 0x00000001,
        RESERVED_1A @ 0x4 [1:1] = 0x00000002,
        MCAST_BCAST @ 0x4 [2:2] = 0x00000004,
        AST_INDEX_NOT_FOUND @ 0x4 [3:3] = 0x00000008,
        AST_INDEX_TIMEOUT @ 0x4 [4:4] = 0x00000010,
        POWER_MGMT @ 0x4 [5:5] = 0x00000020,
        NON_QOS @ 0x4 [6:6] = 0x00000040,
        NULL_DATA @ 0x4 [7:7] = 0x00000080,
        MGMT_TYPE @ 0x4 [8:8] = 0x00000100,
        CTRL_TYPE @ 0x4 [9:9] = 0x00000200,
        MORE_DATA @ 0x4 [10:10] = 0x00000400,
        EOSP @ 0x4 [11:11] = 0x00000800,
        A_MSDU_ERROR @ 0x4 [12:12] = 0x00001000,
        FRAGMENT_FLAG @ 0x4 [13:13] = 0x00002000,
        ORDER @ 0x4 [14:14] = 0x00004000,
        CCE_MATCH @ 0x4 [15:15] = 0x00008000,
        OVERFLOW_ERR @ 0x4 [16:16] = 0x00010000,
        MSDU_LENGTH_ERR @ 0x4 [17:17] = 0x00020000,
        TCP_UDP_CHKSUM_FAIL @ 0x4 [18:18] = 0x00040000,
        IP_CHKSUM_FAIL @ 0x4 [19:19] = 0x00080000,
        SA_IDX_INVALID @ 0x4 [20:20] = 0x00100000,
        DA_IDX_INVALID @ 0x4 [21:21] = 0x00200000,
        RESERVED_1B @ 0x4 [22:22] = 0x00400000,
        RX_IN_TX_DECRYPT_BYP @ 0x4 [23:23] = 0x00800000,
        ENCRYPT_REQUIRED @ 0x4 [24:24] = 0x01000000,
        DIRECTED @ 0x4 [25:25] = 0x02000000,
        BUFFER_FRAGMENT @ 0x4 [26:26] = 0x04000000,
        MPDU_LENGTH_ERR @ 0x4 [27:27] = 0x08000000,
        TKIP_MIC_ERR @ 0x4 [28:28] = 0x10000000,
        DECRYPT_ERR @ 0x4 [29:29] = 0x20000000,
        UNENCRYPTED_FRAME_ERR @ 0x4 [30:30] = 0x40000000,
        FCS_ERR @ 0x4 [31:31] = 0x80000000,
        FLOW_IDX_TIMEOUT @ 0x8 [0:0] = 0x00000001,
        FLOW_IDX_INVALID @ 0x8 [1:1] = 0x00000002,
        WIFI_PARSER_ERROR @ 0x8 [2:2] = 0x00000004,
        AMSDU_PARSER_ERROR @ 0x8 [3:3] = 0x00000008,
        SA_IDX_TIMEOUT @ 0x8 [4:4] = 0x00000010,
        DA_IDX_TIMEOUT @ 0x8 [5:5] = 0x00000020,
        MSDU_LIMIT_ERROR @ 0x8 [6:6] = 0x00000040,
        DA_IS_VALID @ 0x8 [7:7] = 0x00000080,
        DA_IS_MCBC @ 0x8 [8:8] = 0x00000100,
        SA_IS_VALID @ 0x8 [9:9] = 0x00000200,
        DECRYPT_STATUS_CODE @ 0x8 [12:10] = 0x00001c00,
        RX_BITMAP_NOT_UPDATED @ 0x8 [13:13] = 0x00002000,
        RESERVED_2 @ 0x8 [30:14] = 0x7fffc000,
        MSDU_DONE @ 0x8 [31:31] = 0x80000000,
    }

    pub mod tx_fes_status_end [11; Dword] {
        PROT_COEX_BT_TX_WHILE_WLAN_TX @ 0x0 [0:0] = 0x00000001,
        PROT_COEX_BT_TX_WHILE_WLAN_RX @ 0x0 [1:1] = 0x00000002,
        PROT_COEX_WAN_TX_WHILE_WLAN_TX @ 0x0 [2:2] = 0x00000004,
        PROT_COEX_WAN_TX_WHILE_WLAN_RX @ 0x0 [3:3] = 0x00000008,
        PROT_COEX_WLAN_TX_WHILE_WLAN_TX @ 0x0 [4:4] = 0x00000010,
        PROT_COEX_WLAN_TX_WHILE_WLAN_RX @ 0x0 [5:5] = 0x00000020,
        COEX_BT_TX_WHILE_WLAN_TX @ 0x0 [6:6] = 0x00000040,
        COEX_BT_TX_WHILE_WLAN_RX @ 0x0 [7:7] = 0x00000080,
        COEX_WAN_TX_WHILE_WLAN_TX @ 0x0 [8:8] = 0x00000100,
        COEX_WAN_TX_WHILE_WLAN_RX @ 0x0 [9:9] = 0x00000200,
        COEX_WLAN_TX_WHILE_WLAN_TX @ 0x0 [10:10] = 0x00000400,
        COEX_WLAN_TX_WHILE_WLAN_RX @ 0x0 [11:11] = 0x00000800,
        GLOBAL_DATA_UNDERFLOW_WARNING @ 0x0 [12:12] = 0x00001000,
        GLOBAL_FES_TRANSMIT_RESULT @ 0x0 [16:13] = 0x0001e000,
        CBF_BW_RECEIVED_VALID @ 0x0 [17:17] = 0x00020000,
        CBF_BW_RECEIVED @ 0x0 [20:18] = 0x001c0000,
        ACTUAL_RECEIVED_ACK_TYPE @ 0x0 [24:21] = 0x01e00000,
        STA_RESPONSE_COUNT @ 0x0 [30:25] = 0x7e000000,
        MORE_DATA_RECEIVED @ 0x0 [31:31] = 0x80000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_PHYTX_ABORT_REASON @ 0x4 [7:0] = 0x000000ff,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_USER_NUMBER @ 0x4 [13:8] = 0x00003f00,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_RESERVED @ 0x4 [15:14] = 0x0000c000,
        RESERVED_AFTER_STRUCT16 @ 0x4 [19:16] = 0x000f0000,
        BRP_INFO_VALID @ 0x4 [20:20] = 0x00100000,
        QOS_NULL_SWITCH_DONE_FOR_EOSP @ 0x4 [21:21] = 0x00200000,
        RESERVED_1A @ 0x4 [26:22] = 0x07c00000,
        PHYTX_PKT_END_INFO_VALID @ 0x4 [27:27] = 0x08000000,
        PHYTX_ABORT_REQUEST_INFO_VALID @ 0x4 [28:28] = 0x10000000,
        FES_IN_11AX_TRIGGER_RESPONSE_CONFIG @ 0x4 [29:29] = 0x20000000,
        NULL_DELIM_INSERTED_BEFORE_MPDUS @ 0x4 [30:30] = 0x40000000,
        ONLY_NULL_DELIM_SENT @ 0x4 [31:31] = 0x80000000,
        TERMINATE_RANGING_SEQUENCE @ 0x8 [0:0] = 0x00000001,
        RESERVED_2B @ 0x8 [5:1] = 0x0000003e,
        RESPONSE_TYPE @ 0x8 [10:6] = 0x000007c0,
        R2R_END_STATUS_TO_FOLLOW @ 0x8 [11:11] = 0x00000800,
        RESERVED_5A @ 0x8 [14:12] = 0x00007000,
        PROT_COEX_LTE_TX_WHILE_WLAN_TX @ 0x8 [15:15] = 0x00008000,
        PROT_COEX_LTE_TX_WHILE_WLAN_RX @ 0x8 [16:16] = 0x00010000,
        RESERVED_2C @ 0x8 [31:17] = 0xfffe0000,
        BEAMFORM_MASKED_USER_BITMAP_15_0 @ 0xc [15:0] = 0x0000ffff,
        BEAMFORM_MASKED_USER_BITMAP_31_16 @ 0xc [31:16] = 0xffff0000,
        CBF_SEGMENT_REQUEST_MASK @ 0x10 [7:0] = 0x000000ff,
        CBF_SEGMENT_SENT_MASK @ 0x10 [15:8] = 0x0000ff00,
        HIGHEST_ACHIEVED_DATA_NULL_RATIO @ 0x10 [20:16] = 0x001f0000,
        USE_ALT_POWER_SR @ 0x10 [21:21] = 0x00200000,
        STATIC_2_PWR_MODE_STATUS @ 0x10 [22:22] = 0x00400000,
        OBSS_SRG_OPPORT_TRANSMIT_STATUS @ 0x10 [23:23] = 0x00800000,
        SRP_BASED_TRANSMIT_STATUS @ 0x10 [24:24] = 0x01000000,
        OBSS_PD_BASED_TRANSMIT_STATUS @ 0x10 [25:25] = 0x02000000,
        BEAMFORM_MASKED_USER_BITMAP_36_32 @ 0x10 [30:26] = 0x7c000000,
        PDG_MPDU_READY @ 0x10 [31:31] = 0x80000000,
        PDG_MPDU_COUNT @ 0x14 [15:0] = 0x0000ffff,
        PDG_EST_MPDU_TX_COUNT @ 0x14 [31:16] = 0xffff0000,
        PDG_OVERVIEW_LENGTH @ 0x18 [23:0] = 0x00ffffff,
        TXOP_DURATION @ 0x18 [30:24] = 0x7f000000,
        PDG_DROPPED_MPDU_WARNING @ 0x18 [31:31] = 0x80000000,
        PACKET_EXTENSION_A_FACTOR @ 0x1c [1:0] = 0x00000003,
        PACKET_EXTENSION_PE_DISAMBIGUITY @ 0x1c [2:2] = 0x00000004,
        PACKET_EXTENSION @ 0x1c [5:3] = 0x00000038,
        FEC_TYPE @ 0x1c [6:6] = 0x00000040,
        STBC @ 0x1c [7:7] = 0x00000080,
        NUM_DATA_SYMBOLS @ 0x1c [23:8] = 0x00ffff00,
        RU_SIZE @ 0x1c [27:24] = 0x0f000000,
        RESERVED_17A @ 0x1c [31:28] = 0xf0000000,
        NUM_LTF_SYMBOLS @ 0x20 [2:0] = 0x00000007,
        LTF_SIZE @ 0x20 [4:3] = 0x00000018,
        CP_SETTING @ 0x20 [6:5] = 0x00000060,
        RESERVED_18A @ 0x20 [11:7] = 0x00000f80,
        DCM @ 0x20 [12:12] = 0x00001000,
        LDPC_EXTRA_SYMBOL @ 0x20 [13:13] = 0x00002000,
        FORCE_EXTRA_SYMBOL @ 0x20 [14:14] = 0x00004000,
        RESERVED_18B @ 0x20 [15:15] = 0x00008000,
        TX_PWR_SHARED @ 0x20 [23:16] = 0x00ff0000,
        TX_PWR_UNSHARED @ 0x20 [31:24] = 0xff000000,
        RANGING_ACTIVE_USER_MAP @ 0x24 [15:0] = 0x0000ffff,
        RANGING_SENT_DUMMY_TX @ 0x24 [16:16] = 0x00010000,
        RANGING_FTM_FRAME_SENT @ 0x24 [17:17] = 0x00020000,
        COEX_UWB_TX_WHILE_WLAN_TX @ 0x24 [18:18] = 0x00040000,
        COEX_UWB_TX_WHILE_WLAN_RX @ 0x24 [19:19] = 0x00080000,
        PROT_COEX_UWB_TX_WHILE_WLAN_TX @ 0x24 [20:20] = 0x00100000,
        PROT_COEX_UWB_TX_WHILE_WLAN_RX @ 0x24 [21:21] = 0x00200000,
        COEX_LTE_TX_WHILE_WLAN_TX @ 0x24 [22:22] = 0x00400000,
        COEX_LTE_TX_WHILE_WLAN_RX @ 0x24 [23:23] = 0x00800000,
        CV_CORR_STATUS @ 0x24 [31:24] = 0xff000000,
        CURRENT_TX_DURATION @ 0x28 [15:0] = 0x0000ffff,
        RESERVED_21A @ 0x28 [19:16] = 0x000f0000,
        HW_QOS_NULL_BITMAP @ 0x28 [27:20] = 0x0ff00000,
        HW_QOS_NULL_SETUP_MISSING @ 0x28 [28:28] = 0x10000000,
        RESERVED_21B @ 0x28 [31:29] = 0xe0000000,
    }
}

pub const DESCRIPTORS: &[wlan_hwio::DescriptorLayout] = &[
    rx_attention::LAYOUT,
    tx_fes_status_end::LAYOUT,
];
