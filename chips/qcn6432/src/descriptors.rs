// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated TLV descriptor layouts for qcn6432.

use wlan_hwio::tlv_descriptor;

tlv_descriptor! {
    pub mod tx_msdu_start [8; Qword] {
        MSDU_LEN @ 0x0 [13:0] = 0x0000000000003fff,
        FIRST_MSDU @ 0x0 [14:14] = 0x0000000000004000,
        LAST_MSDU @ 0x0 [15:15] = 0x0000000000008000,
        ENCAP_TYPE @ 0x0 [17:16] = 0x0000000000030000,
        EPD_EN @ 0x0 [18:18] = 0x0000000000040000,
        DA_SA_PRESENT @ 0x0 [20:19] = 0x0000000000180000,
        IPV4_CHECKSUM_EN @ 0x0 [21:21] = 0x0000000000200000,
        UDP_OVER_IPV4_CHECKSUM_EN @ 0x0 [22:22] = 0x0000000000400000,
        UDP_OVER_IPV6_CHECKSUM_EN @ 0x0 [23:23] = 0x0000000000800000,
        TCP_OVER_IPV4_CHECKSUM_EN @ 0x0 [24:24] = 0x0000000001000000,
        TCP_OVER_IPV6_CHECKSUM_EN @ 0x0 [25:25] = 0x0000000002000000,
        DUMMY_MSDU_DELIMITATION @ 0x0 [26:26] = 0x0000000004000000,
        RESERVED_0A @ 0x0 [31:27] = 0x00000000f8000000,
        TSO_ENABLE @ 0x0 [32:32] = 0x0000000100000000,
        RESERVED_1A @ 0x0 [38:33] = 0x0000007e00000000,
        TCP_FLAG @ 0x0 [47:39] = 0x0000ff8000000000,
        TCP_FLAG_MASK @ 0x0 [56:48] = 0x01ff000000000000,
        MESH_ENABLE @ 0x0 [57:57] = 0x0200000000000000,
        RESERVED_1B @ 0x0 [63:58] = 0xfc00000000000000,
        L2_LENGTH @ 0x8 [15:0] = 0x000000000000ffff,
        IP_LENGTH @ 0x8 [31:16] = 0x00000000ffff0000,
        TCP_SEQ_NUMBER @ 0x8 [63:32] = 0xffffffff00000000,
        IP_IDENTIFICATION @ 0x10 [15:0] = 0x000000000000ffff,
        CHECKSUM_OFFSET @ 0x10 [28:16] = 0x000000001fff0000,
        PARTIAL_CHECKSUM_EN @ 0x10 [29:29] = 0x0000000020000000,
        RESERVED_4 @ 0x10 [31:30] = 0x00000000c0000000,
        PAYLOAD_START_OFFSET @ 0x10 [45:32] = 0x00003fff00000000,
        RESERVED_5A @ 0x10 [47:46] = 0x0000c00000000000,
        PAYLOAD_END_OFFSET @ 0x10 [61:48] = 0x3fff000000000000,
        RESERVED_5B @ 0x10 [63:62] = 0xc000000000000000,
        UDP_LENGTH @ 0x18 [15:0] = 0x000000000000ffff,
        RESERVED_6 @ 0x18 [31:16] = 0x00000000ffff0000,
        TLV64_PADDING @ 0x18 [63:32] = 0xffffffff00000000,
    }

    pub mod pdg_response_rate_setting [7; Dword] {
        RESERVED_0A @ 0x0 [0:0] = 0x00000001,
        TX_ANTENNA_SECTOR_CTRL @ 0x0 [24:1] = 0x01fffffe,
        PKT_TYPE @ 0x0 [28:25] = 0x1e000000,
        SMOOTHING @ 0x0 [29:29] = 0x20000000,
        LDPC @ 0x0 [30:30] = 0x40000000,
        STBC @ 0x0 [31:31] = 0x80000000,
        ALT_TX_PWR @ 0x4 [7:0] = 0x000000ff,
        ALT_MIN_TX_PWR @ 0x4 [15:8] = 0x0000ff00,
        ALT_NSS @ 0x4 [18:16] = 0x00070000,
        ALT_TX_CHAIN_MASK @ 0x4 [26:19] = 0x07f80000,
        ALT_BW @ 0x4 [29:27] = 0x38000000,
        STF_LTF_3DB_BOOST @ 0x4 [30:30] = 0x40000000,
        FORCE_EXTRA_SYMBOL @ 0x4 [31:31] = 0x80000000,
        ALT_RATE_MCS @ 0x8 [3:0] = 0x0000000f,
        NSS @ 0x8 [6:4] = 0x00000070,
        DPD_ENABLE @ 0x8 [7:7] = 0x00000080,
        TX_PWR @ 0x8 [15:8] = 0x0000ff00,
        MIN_TX_PWR @ 0x8 [23:16] = 0x00ff0000,
        TX_CHAIN_MASK @ 0x8 [31:24] = 0xff000000,
        RESERVED_3A @ 0xc [7:0] = 0x000000ff,
        SGI @ 0xc [9:8] = 0x00000300,
        RATE_MCS @ 0xc [13:10] = 0x00003c00,
        RESERVED_3B @ 0xc [15:14] = 0x0000c000,
        TX_PWR_1 @ 0xc [23:16] = 0x00ff0000,
        ALT_TX_PWR_1 @ 0xc [31:24] = 0xff000000,
        AGGREGATION @ 0x10 [0:0] = 0x00000001,
        DOT11AX_BSS_COLOR_ID @ 0x10 [6:1] = 0x0000007e,
        DOT11AX_SPATIAL_REUSE @ 0x10 [10:7] = 0x00000780,
        DOT11AX_CP_LTF_SIZE @ 0x10 [12:11] = 0x00001800,
        DOT11AX_DCM @ 0x10 [13:13] = 0x00002000,
        DOT11AX_DOPPLER_INDICATION @ 0x10 [14:14] = 0x00004000,
        DOT11AX_SU_EXTENDED @ 0x10 [15:15] = 0x00008000,
        DOT11AX_MIN_PACKET_EXTENSION @ 0x10 [17:16] = 0x00030000,
        DOT11AX_PE_NSS @ 0x10 [20:18] = 0x001c0000,
        DOT11AX_PE_CONTENT @ 0x10 [21:21] = 0x00200000,
        DOT11AX_PE_LTF_SIZE @ 0x10 [23:22] = 0x00c00000,
        DOT11AX_CHAIN_CSD_EN @ 0x10 [24:24] = 0x01000000,
        DOT11AX_PE_CHAIN_CSD_EN @ 0x10 [25:25] = 0x02000000,
        DOT11AX_DL_UL_FLAG @ 0x10 [26:26] = 0x04000000,
        RESERVED_4A @ 0x10 [31:27] = 0xf8000000,
        DOT11AX_EXT_RU_START_INDEX @ 0x14 [3:0] = 0x0000000f,
        DOT11AX_EXT_RU_SIZE @ 0x14 [7:4] = 0x000000f0,
        EHT_DUPLICATE_MODE @ 0x14 [9:8] = 0x00000300,
        HE_SIGB_DCM @ 0x14 [10:10] = 0x00000400,
        HE_SIGB_0_MCS @ 0x14 [13:11] = 0x00003800,
        NUM_HE_SIGB_SYM @ 0x14 [18:14] = 0x0007c000,
        REQUIRED_RESPONSE_TIME_SOURCE @ 0x14 [19:19] = 0x00080000,
        RESERVED_5A @ 0x14 [25:20] = 0x03f00000,
        U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x14 [31:26] = 0xfc000000,
        MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x18 [9:0] = 0x000003ff,
        MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x18 [10:10] = 0x00000400,
        MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x18 [11:11] = 0x00000800,
        MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x18 [12:12] = 0x00001000,
        MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x18 [15:13] = 0x0000e000,
        REQUIRED_RESPONSE_TIME @ 0x18 [27:16] = 0x0fff0000,
        DOT11BE_PARAMS_PLACEHOLDER @ 0x18 [31:28] = 0xf0000000,
    }

    pub mod expected_response [6; Qword] {
        TX_AD2_31_0 @ 0x0 [31:0] = 0x00000000ffffffff,
        TX_AD2_47_32 @ 0x0 [47:32] = 0x0000ffff00000000,
        EXPECTED_RESPONSE_TYPE @ 0x0 [52:48] = 0x001f000000000000,
        RESPONSE_TO_RESPONSE @ 0x0 [55:53] = 0x00e0000000000000,
        SU_BA_USER_NUMBER @ 0x0 [56:56] = 0x0100000000000000,
        RESPONSE_INFO_PART2_REQUIRED @ 0x0 [57:57] = 0x0200000000000000,
        TRANSMITTED_BSSID_CHECK_EN @ 0x0 [58:58] = 0x0400000000000000,
        RESERVED_1 @ 0x0 [63:59] = 0xf800000000000000,
        NDP_STA_PARTIAL_AID_2_8_0 @ 0x8 [10:0] = 0x00000000000007ff,
        RESERVED_2 @ 0x8 [20:11] = 0x00000000001ff800,
        NDP_STA_PARTIAL_AID1_8_0 @ 0x8 [31:21] = 0x00000000ffe00000,
        AST_INDEX @ 0x8 [47:32] = 0x0000ffff00000000,
        CAPTURE_ACK_BA_SOUNDING @ 0x8 [48:48] = 0x0001000000000000,
        CAPTURE_SOUNDING_1STR_20MHZ @ 0x8 [49:49] = 0x0002000000000000,
        CAPTURE_SOUNDING_1STR_40MHZ @ 0x8 [50:50] = 0x0004000000000000,
        CAPTURE_SOUNDING_1STR_80MHZ @ 0x8 [51:51] = 0x0008000000000000,
        CAPTURE_SOUNDING_1STR_160MHZ @ 0x8 [52:52] = 0x0010000000000000,
        CAPTURE_SOUNDING_1STR_240MHZ @ 0x8 [53:53] = 0x0020000000000000,
        CAPTURE_SOUNDING_1STR_320MHZ @ 0x8 [54:54] = 0x0040000000000000,
        RESERVED_3A @ 0x8 [63:55] = 0xff80000000000000,
        FCS @ 0x10 [8:0] = 0x00000000000001ff,
        RESERVED_4A @ 0x10 [9:9] = 0x0000000000000200,
        CRC @ 0x10 [13:10] = 0x0000000000003c00,
        SCRAMBLER_SEED @ 0x10 [20:14] = 0x00000000001fc000,
        RESERVED_4B @ 0x10 [31:21] = 0x00000000ffe00000,
        TLV64_PADDING @ 0x10 [63:32] = 0xffffffff00000000,
    }

    pub mod tx_peer_entry [18; Qword] {
        MAC_ADDR_A_31_0 @ 0x0 [31:0] = 0x00000000ffffffff,
        MAC_ADDR_A_47_32 @ 0x0 [47:32] = 0x0000ffff00000000,
        MAC_ADDR_B_15_0 @ 0x0 [63:48] = 0xffff000000000000,
        MAC_ADDR_B_47_16 @ 0x8 [31:0] = 0x00000000ffffffff,
        USE_AD_B @ 0x8 [32:32] = 0x0000000100000000,
        STRIP_INSERT_VLAN_INNER @ 0x8 [33:33] = 0x0000000200000000,
        STRIP_INSERT_VLAN_OUTER @ 0x8 [34:34] = 0x0000000400000000,
        VLAN_LLC_MODE @ 0x8 [35:35] = 0x0000000800000000,
        KEY_TYPE @ 0x8 [39:36] = 0x000000f000000000,
        A_MSDU_WDS_AD3_AD4 @ 0x8 [42:40] = 0x0000070000000000,
        IGNORE_HARD_FILTERS @ 0x8 [43:43] = 0x0000080000000000,
        IGNORE_SOFT_FILTERS @ 0x8 [44:44] = 0x0000100000000000,
        EPD_OUTPUT @ 0x8 [45:45] = 0x0000200000000000,
        WDS @ 0x8 [46:46] = 0x0000400000000000,
        INSERT_OR_STRIP @ 0x8 [47:47] = 0x0000800000000000,
        SW_FILTER_ID @ 0x8 [63:48] = 0xffff000000000000,
        TEMPORAL_KEY_31_0 @ 0x10 [31:0] = 0x00000000ffffffff,
        TEMPORAL_KEY_63_32 @ 0x10 [63:32] = 0xffffffff00000000,
        TEMPORAL_KEY_95_64 @ 0x18 [31:0] = 0x00000000ffffffff,
        TEMPORAL_KEY_127_96 @ 0x18 [63:32] = 0xffffffff00000000,
        TEMPORAL_KEY_159_128 @ 0x20 [31:0] = 0x00000000ffffffff,
        TEMPORAL_KEY_191_160 @ 0x20 [63:32] = 0xffffffff00000000,
        TEMPORAL_KEY_223_192 @ 0x28 [31:0] = 0x00000000ffffffff,
        TEMPORAL_KEY_255_224 @ 0x28 [63:32] = 0xffffffff00000000,
        STA_PARTIAL_AID @ 0x30 [10:0] = 0x00000000000007ff,
        TRANSMIT_VIF @ 0x30 [14:11] = 0x0000000000007800,
        BLOCK_THIS_USER @ 0x30 [15:15] = 0x0000000000008000,
        MESH_AMSDU_MODE @ 0x30 [17:16] = 0x0000000000030000,
        USE_QOS_ALT_MUTE_MASK @ 0x30 [18:18] = 0x0000000000040000,
        DL_UL_DIRECTION @ 0x30 [19:19] = 0x0000000000080000,
        RESERVED_12 @ 0x30 [31:20] = 0x00000000fff00000,
        INSERT_VLAN_OUTER_TCI @ 0x30 [47:32] = 0x0000ffff00000000,
        INSERT_VLAN_INNER_TCI @ 0x30 [63:48] = 0xffff000000000000,
        MULTI_LINK_ADDR_AD1_31_0 @ 0x38 [31:0] = 0x00000000ffffffff,
        MULTI_LINK_ADDR_AD1_47_32 @ 0x38 [47:32] = 0x0000ffff00000000,
        MULTI_LINK_ADDR_AD2_15_0 @ 0x38 [63:48] = 0xffff000000000000,
        MULTI_LINK_ADDR_AD2_47_16 @ 0x40 [31:0] = 0x00000000ffffffff,
        MULTI_LINK_ADDR_CRYPTO_ENABLE @ 0x40 [32:32] = 0x0000000100000000,
        RESERVED_17A @ 0x40 [47:33] = 0x0000fffe00000000,
        SW_PEER_ID @ 0x40 [63:48] = 0xffff000000000000,
    }

    pub mod rx_msdu_end [32; Qword] {
        RXPCU_MPDU_FILTER_IN_CATEGORY @ 0x0 [1:0] = 0x0000000000000003,
        SW_FRAME_GROUP_ID @ 0x0 [8:2] = 0x00000000000001fc,
        RESERVED_0 @ 0x0 [15:9] = 0x000000000000fe00,
        PHY_PPDU_ID @ 0x0 [31:16] = 0x00000000ffff0000,
        IP_HDR_CHKSUM @ 0x0 [47:32] = 0x0000ffff00000000,
        REPORTED_MPDU_LENGTH @ 0x0 [61:48] = 0x3fff000000000000,
        RESERVED_1A @ 0x0 [63:62] = 0xc000000000000000,
        RESERVED_2A @ 0x8 [7:0] = 0x00000000000000ff,
        CCE_SUPER_RULE @ 0x8 [13:8] = 0x0000000000003f00,
        CCE_CLASSIFY_NOT_DONE_TRUNCATE @ 0x8 [14:14] = 0x0000000000004000,
        CCE_CLASSIFY_NOT_DONE_CCE_DIS @ 0x8 [15:15] = 0x0000000000008000,
        CUMULATIVE_L3_CHECKSUM @ 0x8 [31:16] = 0x00000000ffff0000,
        RULE_INDICATION_31_0 @ 0x8 [63:32] = 0xffffffff00000000,
        IPV6_OPTIONS_CRC @ 0x10 [31:0] = 0x00000000ffffffff,
        DA_OFFSET @ 0x10 [37:32] = 0x0000003f00000000,
        SA_OFFSET @ 0x10 [43:38] = 0x00000fc000000000,
        DA_OFFSET_VALID @ 0x10 [44:44] = 0x0000100000000000,
        SA_OFFSET_VALID @ 0x10 [45:45] = 0x0000200000000000,
        RESERVED_5A @ 0x10 [47:46] = 0x0000c00000000000,
        L3_TYPE @ 0x10 [63:48] = 0xffff000000000000,
        RULE_INDICATION_63_32 @ 0x18 [31:0] = 0x00000000ffffffff,
        TCP_SEQ_NUMBER @ 0x18 [63:32] = 0xffffffff00000000,
        TCP_ACK_NUMBER @ 0x20 [31:0] = 0x00000000ffffffff,
        TCP_FLAG @ 0x20 [40:32] = 0x000001ff00000000,
        LRO_ELIGIBLE @ 0x20 [41:41] = 0x0000020000000000,
        RESERVED_9A @ 0x20 [47:42] = 0x0000fc0000000000,
        WINDOW_SIZE @ 0x20 [63:48] = 0xffff000000000000,
        SA_SW_PEER_ID @ 0x28 [15:0] = 0x000000000000ffff,
        SA_IDX_TIMEOUT @ 0x28 [16:16] = 0x0000000000010000,
        DA_IDX_TIMEOUT @ 0x28 [17:17] = 0x0000000000020000,
        TO_DS @ 0x28 [18:18] = 0x0000000000040000,
        TID @ 0x28 [22:19] = 0x0000000000780000,
        SA_IS_VALID @ 0x28 [23:23] = 0x0000000000800000,
        DA_IS_VALID @ 0x28 [24:24] = 0x0000000001000000,
        DA_IS_MCBC @ 0x28 [25:25] = 0x0000000002000000,
        L3_HEADER_PADDING @ 0x28 [27:26] = 0x000000000c000000,
        FIRST_MSDU @ 0x28 [28:28] = 0x0000000010000000,
        LAST_MSDU @ 0x28 [29:29] = 0x0000000020000000,
        FR_DS @ 0x28 [30:30] = 0x0000000040000000,
        IP_CHKSUM_FAIL_COPY @ 0x28 [31:31] = 0x0000000080000000,
        SA_IDX @ 0x28 [47:32] = 0x0000ffff00000000,
        DA_IDX_OR_SW_PEER_ID @ 0x28 [63:48] = 0xffff000000000000,
        MSDU_DROP @ 0x30 [0:0] = 0x0000000000000001,
        REO_DESTINATION_INDICATION @ 0x30 [5:1] = 0x000000000000003e,
        FLOW_IDX @ 0x30 [25:6] = 0x0000000003ffffc0,
        USE_PPE @ 0x30 [26:26] = 0x0000000004000000,
        MESH_STA @ 0x30 [28:27] = 0x0000000018000000,
        VLAN_CTAG_STRIPPED @ 0x30 [29:29] = 0x0000000020000000,
        VLAN_STAG_STRIPPED @ 0x30 [30:30] = 0x0000000040000000,
        FRAGMENT_FLAG @ 0x30 [31:31] = 0x0000000080000000,
        FSE_METADATA @ 0x30 [63:32] = 0xffffffff00000000,
        CCE_METADATA @ 0x38 [15:0] = 0x000000000000ffff,
        TCP_UDP_CHKSUM @ 0x38 [31:16] = 0x00000000ffff0000,
        AGGREGATION_COUNT @ 0x38 [39:32] = 0x000000ff00000000,
        FLOW_AGGREGATION_CONTINUATION @ 0x38 [40:40] = 0x0000010000000000,
        FISA_TIMEOUT @ 0x38 [41:41] = 0x0000020000000000,
        TCP_UDP_CHKSUM_FAIL_COPY @ 0x38 [42:42] = 0x0000040000000000,
        MSDU_LIMIT_ERROR @ 0x38 [43:43] = 0x0000080000000000,
        FLOW_IDX_TIMEOUT @ 0x38 [44:44] = 0x0000100000000000,
        FLOW_IDX_INVALID @ 0x38 [45:45] = 0x0000200000000000,
        CCE_MATCH @ 0x38 [46:46] = 0x0000400000000000,
        AMSDU_PARSER_ERROR @ 0x38 [47:47] = 0x0000800000000000,
        CUMULATIVE_IP_LENGTH @ 0x38 [63:48] = 0xffff000000000000,
        KEY_ID_OCTET @ 0x40 [7:0] = 0x00000000000000ff,
        RESERVED_16A @ 0x40 [31:8] = 0x00000000ffffff00,
        RESERVED_17A @ 0x40 [37:32] = 0x0000003f00000000,
        SERVICE_CODE @ 0x40 [46:38] = 0x00007fc000000000,
        PRIORITY_VALID @ 0x40 [47:47] = 0x0000800000000000,
        INTRA_BSS @ 0x40 [48:48] = 0x0001000000000000,
        DEST_CHIP_ID @ 0x40 [50:49] = 0x0006000000000000,
        MULTICAST_ECHO @ 0x40 [51:51] = 0x0008000000000000,
        WDS_LEARNING_EVENT @ 0x40 [52:52] = 0x0010000000000000,
        WDS_ROAMING_EVENT @ 0x40 [53:53] = 0x0020000000000000,
        WDS_KEEP_ALIVE_EVENT @ 0x40 [54:54] = 0x0040000000000000,
        DEST_CHIP_PMAC_ID @ 0x40 [55:55] = 0x0080000000000000,
        RESERVED_17B @ 0x40 [63:56] = 0xff00000000000000,
        MSDU_LENGTH @ 0x48 [13:0] = 0x0000000000003fff,
        STBC @ 0x48 [14:14] = 0x0000000000004000,
        IPSEC_ESP @ 0x48 [15:15] = 0x0000000000008000,
        L3_OFFSET @ 0x48 [22:16] = 0x00000000007f0000,
        IPSEC_AH @ 0x48 [23:23] = 0x0000000000800000,
        L4_OFFSET @ 0x48 [31:24] = 0x00000000ff000000,
        MSDU_NUMBER @ 0x48 [39:32] = 0x000000ff00000000,
        DECAP_FORMAT @ 0x48 [41:40] = 0x0000030000000000,
        IPV4_PROTO @ 0x48 [42:42] = 0x0000040000000000,
        IPV6_PROTO @ 0x48 [43:43] = 0x0000080000000000,
        TCP_PROTO @ 0x48 [44:44] = 0x0000100000000000,
        UDP_PROTO @ 0x48 [45:45] = 0x0000200000000000,
        IP_FRAG @ 0x48 [46:46] = 0x0000400000000000,
        TCP_ONLY_ACK @ 0x48 [47:47] = 0x0000800000000000,
        DA_IS_BCAST_MCAST @ 0x48 [48:48] = 0x0001000000000000,
        TOEPLITZ_HASH_SEL @ 0x48 [50:49] = 0x0006000000000000,
        IP_FIXED_HEADER_VALID @ 0x48 [51:51] = 0x0008000000000000,
        IP_EXTN_HEADER_VALID @ 0x48 [52:52] = 0x0010000000000000,
        TCP_UDP_HEADER_VALID @ 0x48 [53:53] = 0x0020000000000000,
        MESH_CONTROL_PRESENT @ 0x48 [54:54] = 0x0040000000000000,
        LDPC @ 0x48 [55:55] = 0x0080000000000000,
        IP4_PROTOCOL_IP6_NEXT_HEADER @ 0x48 [63:56] = 0xff00000000000000,
        VLAN_CTAG_CI @ 0x50 [15:0] = 0x000000000000ffff,
        VLAN_STAG_CI @ 0x50 [31:16] = 0x00000000ffff0000,
        PEER_META_DATA @ 0x50 [63:32] = 0xffffffff00000000,
        USER_RSSI @ 0x58 [7:0] = 0x00000000000000ff,
        PKT_TYPE @ 0x58 [11:8] = 0x0000000000000f00,
        SGI @ 0x58 [13:12] = 0x0000000000003000,
        RATE_MCS @ 0x58 [17:14] = 0x000000000003c000,
        RECEIVE_BANDWIDTH @ 0x58 [20:18] = 0x00000000001c0000,
        RECEPTION_TYPE @ 0x58 [23:21] = 0x0000000000e00000,
        MIMO_SS_BITMAP @ 0x58 [30:24] = 0x000000007f000000,
        MSDU_DONE_COPY @ 0x58 [31:31] = 0x0000000080000000,
        FLOW_ID_TOEPLITZ @ 0x58 [63:32] = 0xffffffff00000000,
        PPDU_START_TIMESTAMP_63_32 @ 0x60 [31:0] = 0x00000000ffffffff,
        SW_PHY_META_DATA @ 0x60 [63:32] = 0xffffffff00000000,
        PPDU_START_TIMESTAMP_31_0 @ 0x68 [31:0] = 0x00000000ffffffff,
        TOEPLITZ_HASH_2_OR_4 @ 0x68 [63:32] = 0xffffffff00000000,
        RESERVED_28A @ 0x70 [15:0] = 0x000000000000ffff,
        SA_15_0 @ 0x70 [31:16] = 0x00000000ffff0000,
        SA_47_16 @ 0x70 [63:32] = 0xffffffff00000000,
        FIRST_MPDU @ 0x78 [0:0] = 0x0000000000000001,
        RESERVED_30A @ 0x78 [1:1] = 0x0000000000000002,
        MCAST_BCAST @ 0x78 [2:2] = 0x0000000000000004,
        AST_INDEX_NOT_FOUND @ 0x78 [3:3] = 0x0000000000000008,
        AST_INDEX_TIMEOUT @ 0x78 [4:4] = 0x0000000000000010,
        POWER_MGMT @ 0x78 [5:5] = 0x0000000000000020,
        NON_QOS @ 0x78 [6:6] = 0x0000000000000040,
        NULL_DATA @ 0x78 [7:7] = 0x0000000000000080,
        MGMT_TYPE @ 0x78 [8:8] = 0x0000000000000100,
        CTRL_TYPE @ 0x78 [9:9] = 0x0000000000000200,
        MORE_DATA @ 0x78 [10:10] = 0x0000000000000400,
        EOSP @ 0x78 [11:11] = 0x0000000000000800,
        A_MSDU_ERROR @ 0x78 [12:12] = 0x0000000000001000,
        RESERVED_30B @ 0x78 [13:13] = 0x0000000000002000,
        ORDER @ 0x78 [14:14] = 0x0000000000004000,
        WIFI_PARSER_ERROR @ 0x78 [15:15] = 0x0000000000008000,
        OVERFLOW_ERR @ 0x78 [16:16] = 0x0000000000010000,
        MSDU_LENGTH_ERR @ 0x78 [17:17] = 0x0000000000020000,
        TCP_UDP_CHKSUM_FAIL @ 0x78 [18:18] = 0x0000000000040000,
        IP_CHKSUM_FAIL @ 0x78 [19:19] = 0x0000000000080000,
        SA_IDX_INVALID @ 0x78 [20:20] = 0x0000000000100000,
        DA_IDX_INVALID @ 0x78 [21:21] = 0x0000000000200000,
        AMSDU_ADDR_MISMATCH @ 0x78 [22:22] = 0x0000000000400000,
        RX_IN_TX_DECRYPT_BYP @ 0x78 [23:23] = 0x0000000000800000,
        ENCRYPT_REQUIRED @ 0x78 [24:24] = 0x0000000001000000,
        DIRECTED @ 0x78 [25:25] = 0x0000000002000000,
        BUFFER_FRAGMENT @ 0x78 [26:26] = 0x0000000004000000,
        MPDU_LENGTH_ERR @ 0x78 [27:27] = 0x0000000008000000,
        TKIP_MIC_ERR @ 0x78 [28:28] = 0x0000000010000000,
        DECRYPT_ERR @ 0x78 [29:29] = 0x0000000020000000,
        UNENCRYPTED_FRAME_ERR @ 0x78 [30:30] = 0x0000000040000000,
        FCS_ERR @ 0x78 [31:31] = 0x0000000080000000,
        RESERVED_31A @ 0x78 [41:32] = 0x000003ff00000000,
        DECRYPT_STATUS_CODE @ 0x78 [44:42] = 0x00001c0000000000,
        RX_BITMAP_NOT_UPDATED @ 0x78 [45:45] = 0x0000200000000000,
        RESERVED_31B @ 0x78 [62:46] = 0x7fffc00000000000,
        MSDU_DONE @ 0x78 [63:63] = 0x8000000000000000,
    }

    pub mod rx_flow_search_entry [16; Dword] {
        SRC_IP_127_96 @ 0x0 [31:0] = 0xffffffff,
        SRC_IP_95_64 @ 0x4 [31:0] = 0xffffffff,
        SRC_IP_63_32 @ 0x8 [31:0] = 0xffffffff,
        SRC_IP_31_0 @ 0xc [31:0] = 0xffffffff,
        DEST_IP_127_96 @ 0x10 [31:0] = 0xffffffff,
        DEST_IP_95_64 @ 0x14 [31:0] = 0xffffffff,
        DEST_IP_63_32 @ 0x18 [31:0] = 0xffffffff,
        DEST_IP_31_0 @ 0x1c [31:0] = 0xffffffff,
        SRC_PORT @ 0x20 [15:0] = 0x0000ffff,
        DEST_PORT @ 0x20 [31:16] = 0xffff0000,
        L4_PROTOCOL @ 0x24 [7:0] = 0x000000ff,
        VALID @ 0x24 [8:8] = 0x00000100,
        RESERVED_9 @ 0x24 [12:9] = 0x00001e00,
        SERVICE_CODE @ 0x24 [21:13] = 0x003fe000,
        PRIORITY_VALID @ 0x24 [22:22] = 0x00400000,
        USE_PPE @ 0x24 [23:23] = 0x00800000,
        REO_DESTINATION_INDICATION @ 0x24 [28:24] = 0x1f000000,
        MSDU_DROP @ 0x24 [29:29] = 0x20000000,
        REO_DESTINATION_HANDLER @ 0x24 [31:30] = 0xc0000000,
        METADATA @ 0x28 [31:0] = 0xffffffff,
        AGGREGATION_COUNT @ 0x2c [6:0] = 0x0000007f,
        LRO_ELIGIBLE @ 0x2c [7:7] = 0x00000080,
        MSDU_COUNT @ 0x2c [31:8] = 0xffffff00,
        MSDU_BYTE_COUNT @ 0x30 [31:0] = 0xffffffff,
        TIMESTAMP @ 0x34 [31:0] = 0xffffffff,
        CUMULATIVE_IP_LENGTH_PMAC1 @ 0x38 [15:0] = 0x0000ffff,
        CUMULATIVE_IP_LENGTH @ 0x38 [31:16] = 0xffff0000,
        TCP_SEQUENCE_NUMBER @ 0x3c [31:0] = 0xffffffff,
    }

    pub mod tcl_data_cmd [8; Dword] {
        BUF_ADDR_INFO_BUFFER_ADDR_31_0 @ 0x0 [31:0] = 0xffffffff,
        BUF_ADDR_INFO_BUFFER_ADDR_39_32 @ 0x4 [7:0] = 0x000000ff,
        BUF_ADDR_INFO_RETURN_BUFFER_MANAGER @ 0x4 [11:8] = 0x00000f00,
        BUF_ADDR_INFO_SW_BUFFER_COOKIE @ 0x4 [31:12] = 0xfffff000,
        TCL_CMD_TYPE @ 0x8 [0:0] = 0x00000001,
        BUF_OR_EXT_DESC_TYPE @ 0x8 [1:1] = 0x00000002,
        BANK_ID @ 0x8 [7:2] = 0x000000fc,
        TX_NOTIFY_FRAME @ 0x8 [10:8] = 0x00000700,
        HEADER_LENGTH_READ_SEL @ 0x8 [11:11] = 0x00000800,
        BUFFER_TIMESTAMP @ 0x8 [30:12] = 0x7ffff000,
        BUFFER_TIMESTAMP_VALID @ 0x8 [31:31] = 0x80000000,
        RESERVED_3A @ 0xc [15:0] = 0x0000ffff,
        TCL_CMD_NUMBER @ 0xc [31:16] = 0xffff0000,
        DATA_LENGTH @ 0x10 [15:0] = 0x0000ffff,
        IPV4_CHECKSUM_EN @ 0x10 [16:16] = 0x00010000,
        UDP_OVER_IPV4_CHECKSUM_EN @ 0x10 [17:17] = 0x00020000,
        UDP_OVER_IPV6_CHECKSUM_EN @ 0x10 [18:18] = 0x00040000,
        TCP_OVER_IPV4_CHECKSUM_EN @ 0x10 [19:19] = 0x00080000,
        TCP_OVER_IPV6_CHECKSUM_EN @ 0x10 [20:20] = 0x00100000,
        TO_FW @ 0x10 [21:21] = 0x00200000,
        RESERVED_4A @ 0x10 [22:22] = 0x00400000,
        PACKET_OFFSET @ 0x10 [31:23] = 0xff800000,
        HLOS_TID_OVERWRITE @ 0x14 [0:0] = 0x00000001,
        FLOW_OVERRIDE_ENABLE @ 0x14 [1:1] = 0x00000002,
        WHO_CLASSIFY_INFO_SEL @ 0x14 [3:2] = 0x0000000c,
        HLOS_TID @ 0x14 [7:4] = 0x000000f0,
        FLOW_OVERRIDE @ 0x14 [8:8] = 0x00000100,
        PMAC_ID @ 0x14 [10:9] = 0x00000600,
        MSDU_COLOR @ 0x14 [12:11] = 0x00001800,
        RESERVED_5A @ 0x14 [23:13] = 0x00ffe000,
        VDEV_ID @ 0x14 [31:24] = 0xff000000,
        SEARCH_INDEX @ 0x18 [19:0] = 0x000fffff,
        CACHE_SET_NUM @ 0x18 [23:20] = 0x00f00000,
        INDEX_LOOKUP_OVERRIDE @ 0x18 [24:24] = 0x01000000,
        RESERVED_6A @ 0x18 [31:25] = 0xfe000000,
        RESERVED_7A @ 0x1c [19:0] = 0x000fffff,
        RING_ID @ 0x1c [27:20] = 0x0ff00000,
        LOOPING_COUNT @ 0x1c [31:28] = 0xf0000000,
    }

    pub mod wbm_release_ring_tx [8; Dword] {
        RELEASED_BUFF_OR_DESC_ADDR_INFO_BUFFER_ADDR_31_0 @ 0x0 [31:0] = 0xffffffff,
        RELEASED_BUFF_OR_DESC_ADDR_INFO_BUFFER_ADDR_39_32 @ 0x4 [7:0] = 0x000000ff,
        RELEASED_BUFF_OR_DESC_ADDR_INFO_RETURN_BUFFER_MANAGER @ 0x4 [11:8] = 0x00000f00,
        RELEASED_BUFF_OR_DESC_ADDR_INFO_SW_BUFFER_COOKIE @ 0x4 [31:12] = 0xfffff000,
        RELEASE_SOURCE_MODULE @ 0x8 [2:0] = 0x00000007,
        BM_ACTION @ 0x8 [5:3] = 0x00000038,
        BUFFER_OR_DESC_TYPE @ 0x8 [8:6] = 0x000001c0,
        FIRST_MSDU_INDEX @ 0x8 [12:9] = 0x00001e00,
        TQM_RELEASE_REASON @ 0x8 [16:13] = 0x0001e000,
        RBM_OVERRIDE_VALID @ 0x8 [17:17] = 0x00020000,
        RBM_OVERRIDE @ 0x8 [21:18] = 0x003c0000,
        RESERVED_2A @ 0x8 [28:22] = 0x1fc00000,
        CACHE_ID @ 0x8 [29:29] = 0x20000000,
        COOKIE_CONVERSION_STATUS @ 0x8 [30:30] = 0x40000000,
        WBM_INTERNAL_ERROR @ 0x8 [31:31] = 0x80000000,
        TQM_STATUS_NUMBER @ 0xc [23:0] = 0x00ffffff,
        TRANSMIT_COUNT @ 0xc [30:24] = 0x7f000000,
        SW_RELEASE_DETAILS_VALID @ 0xc [31:31] = 0x80000000,
        ACK_FRAME_RSSI @ 0x10 [7:0] = 0x000000ff,
        FIRST_MSDU @ 0x10 [8:8] = 0x00000100,
        LAST_MSDU @ 0x10 [9:9] = 0x00000200,
        FW_TX_NOTIFY_FRAME @ 0x10 [12:10] = 0x00001c00,
        BUFFER_TIMESTAMP @ 0x10 [31:13] = 0xffffe000,
        TX_RATE_STATS_TX_RATE_STATS_INFO_VALID @ 0x14 [0:0] = 0x00000001,
        TX_RATE_STATS_TRANSMIT_BW @ 0x14 [3:1] = 0x0000000e,
        TX_RATE_STATS_TRANSMIT_PKT_TYPE @ 0x14 [7:4] = 0x000000f0,
        TX_RATE_STATS_TRANSMIT_STBC @ 0x14 [8:8] = 0x00000100,
        TX_RATE_STATS_TRANSMIT_LDPC @ 0x14 [9:9] = 0x00000200,
        TX_RATE_STATS_TRANSMIT_SGI @ 0x14 [11:10] = 0x00000c00,
        TX_RATE_STATS_TRANSMIT_MCS @ 0x14 [15:12] = 0x0000f000,
        TX_RATE_STATS_OFDMA_TRANSMISSION @ 0x14 [16:16] = 0x00010000,
        TX_RATE_STATS_TONES_IN_RU @ 0x14 [28:17] = 0x1ffe0000,
        TX_RATE_STATS_TRANSMIT_NSS @ 0x14 [31:29] = 0xe0000000,
        TX_RATE_STATS_PPDU_TRANSMISSION_TSF @ 0x18 [31:0] = 0xffffffff,
        SW_PEER_ID @ 0x1c [15:0] = 0x0000ffff,
        TID @ 0x1c [19:16] = 0x000f0000,
        TQM_STATUS_NUMBER_31_24 @ 0x1c [27:20] = 0x0ff00000,
        LOOPING_COUNT @ 0x1c [31:28] = 0xf0000000,
    }

    pub mod tx_flush_req [2; Qword] {
        FLUSH_REQ_REASON @ 0x0 [7:0] = 0x00000000000000ff,
        PHYTX_ABORT_REASON @ 0x0 [15:8] = 0x000000000000ff00,
        FLUSH_REQ_USER_NUMBER_OR_LINK_ID @ 0x0 [21:16] = 0x00000000003f0000,
        MLO_ABORT_REASON @ 0x0 [26:22] = 0x0000000007c00000,
        RESERVED_0A @ 0x0 [31:27] = 0x00000000f8000000,
        TLV64_PADDING @ 0x0 [63:32] = 0xffffffff00000000,
    }
}

pub const DESCRIPTORS: &[wlan_hwio::DescriptorLayout] = &[
    tx_msdu_start::LAYOUT,
    pdg_response_rate_setting::LAYOUT,
    expected_response::LAYOUT,
    tx_peer_entry::LAYOUT,
    rx_msdu_end::LAYOUT,
    rx_flow_search_entry::LAYOUT,
    tcl_data_cmd::LAYOUT,
    wbm_release_ring_tx::LAYOUT,
    tx_flush_req::LAYOUT,
];
