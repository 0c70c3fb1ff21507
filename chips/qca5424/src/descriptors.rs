// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated TLV descriptor layouts for qca5424.

use wlan_hwio::tlv_descriptor;

tlv_descriptor! {
    pub mod pcu_ppdu_setup_init [58; Qword] {
        MEDIUM_PROT_TYPE @ 0x0 [2:0] = 0x0000000000000007,
        RESPONSE_TYPE @ 0x0 [7:3] = 0x00000000000000f8,
        RESPONSE_INFO_PART2_REQUIRED @ 0x0 [8:8] = 0x0000000000000100,
        RESPONSE_TO_RESPONSE @ 0x0 [11:9] = 0x0000000000000e00,
        MBA_USER_ORDER @ 0x0 [13:12] = 0x0000000000003000,
        EXPECTED_MBA_SIZE @ 0x0 [24:14] = 0x0000000001ffc000,
        REQUIRED_UL_MU_RESP_USER_COUNT @ 0x0 [30:25] = 0x000000007e000000,
        TRANSMITTED_BSSID_CHECK_EN @ 0x0 [31:31] = 0x0000000080000000,
        MPROT_REQUIRED_BW1 @ 0x0 [32:32] = 0x0000000100000000,
        MPROT_REQUIRED_BW20 @ 0x0 [33:33] = 0x0000000200000000,
        MPROT_REQUIRED_BW40 @ 0x0 [34:34] = 0x0000000400000000,
        MPROT_REQUIRED_BW80 @ 0x0 [35:35] = 0x0000000800000000,
        MPROT_REQUIRED_BW160 @ 0x0 [36:36] = 0x0000001000000000,
        MPROT_REQUIRED_BW240 @ 0x0 [37:37] = 0x0000002000000000,
        MPROT_REQUIRED_BW320 @ 0x0 [38:38] = 0x0000004000000000,
        PPDU_ALLOWED_BW1 @ 0x0 [39:39] = 0x0000008000000000,
        PPDU_ALLOWED_BW20 @ 0x0 [40:40] = 0x0000010000000000,
        PPDU_ALLOWED_BW40 @ 0x0 [41:41] = 0x0000020000000000,
        PPDU_ALLOWED_BW80 @ 0x0 [42:42] = 0x0000040000000000,
        PPDU_ALLOWED_BW160 @ 0x0 [43:43] = 0x0000080000000000,
        PPDU_ALLOWED_BW240 @ 0x0 [44:44] = 0x0000100000000000,
        PPDU_ALLOWED_BW320 @ 0x0 [45:45] = 0x0000200000000000,
        SET_FC_PWR_MGT @ 0x0 [46:46] = 0x0000400000000000,
        USE_CTS_DURATION_FOR_DATA_TX @ 0x0 [47:47] = 0x0000800000000000,
        UPDATE_TIMESTAMP_64 @ 0x0 [48:48] = 0x0001000000000000,
        UPDATE_TIMESTAMP_32_LOWER @ 0x0 [49:49] = 0x0002000000000000,
        UPDATE_TIMESTAMP_32_UPPER @ 0x0 [50:50] = 0x0004000000000000,
        RESERVED_1A @ 0x0 [63:51] = 0xfff8000000000000,
        INSERT_TIMESTAMP_OFFSET_0 @ 0x8 [15:0] = 0x000000000000ffff,
        INSERT_TIMESTAMP_OFFSET_1 @ 0x8 [31:16] = 0x00000000ffff0000,
        MAX_BW40_TRY_COUNT @ 0x8 [35:32] = 0x0000000f00000000,
        MAX_BW80_TRY_COUNT @ 0x8 [39:36] = 0x000000f000000000,
        MAX_BW160_TRY_COUNT @ 0x8 [43:40] = 0x00000f0000000000,
        MAX_BW240_TRY_COUNT @ 0x8 [47:44] = 0x0000f00000000000,
        MAX_BW320_TRY_COUNT @ 0x8 [51:48] = 0x000f000000000000,
        INSERT_WUR_TIMESTAMP_OFFSET @ 0x8 [57:52] = 0x03f0000000000000,
        UPDATE_WUR_TIMESTAMP @ 0x8 [58:58] = 0x0400000000000000,
        WUR_EMBEDDED_BSSID_PRESENT @ 0x8 [59:59] = 0x0800000000000000,
        INSERT_WUR_FCS @ 0x8 [60:60] = 0x1000000000000000,
        RESERVED_3B @ 0x8 [63:61] = 0xe000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_0A @ 0x10 [0:0] = 0x0000000000000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_ANTENNA_SECTOR_CTRL @ 0x10 [24:1] = 0x0000000001fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_PKT_TYPE @ 0x10 [28:25] = 0x000000001e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_SMOOTHING @ 0x10 [29:29] = 0x0000000020000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_LDPC @ 0x10 [30:30] = 0x0000000040000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_STBC @ 0x10 [31:31] = 0x0000000080000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_TX_PWR @ 0x10 [39:32] = 0x000000ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_MIN_TX_PWR @ 0x10 [47:40] = 0x0000ff0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_NSS @ 0x10 [50:48] = 0x0007000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_TX_CHAIN_MASK @ 0x10 [58:51] = 0x07f8000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_BW @ 0x10 [61:59] = 0x3800000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_STF_LTF_3DB_BOOST @ 0x10 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_FORCE_EXTRA_SYMBOL @ 0x10 [63:63] = 0x8000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_RATE_MCS @ 0x18 [3:0] = 0x000000000000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_NSS @ 0x18 [6:4] = 0x0000000000000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DPD_ENABLE @ 0x18 [7:7] = 0x0000000000000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_PWR @ 0x18 [15:8] = 0x000000000000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MIN_TX_PWR @ 0x18 [23:16] = 0x0000000000ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_CHAIN_MASK @ 0x18 [31:24] = 0x00000000ff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_3A @ 0x18 [39:32] = 0x000000ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_SGI @ 0x18 [41:40] = 0x0000030000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RATE_MCS @ 0x18 [45:42] = 0x00003c0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_3B @ 0x18 [47:46] = 0x0000c00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_PWR_1 @ 0x18 [55:48] = 0x00ff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_TX_PWR_1 @ 0x18 [63:56] = 0xff00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_AGGREGATION @ 0x20 [0:0] = 0x0000000000000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_BSS_COLOR_ID @ 0x20 [6:1] = 0x000000000000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_SPATIAL_REUSE @ 0x20 [10:7] = 0x0000000000000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_CP_LTF_SIZE @ 0x20 [12:11] = 0x0000000000001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_DCM @ 0x20 [13:13] = 0x0000000000002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_DOPPLER_INDICATION @ 0x20 [14:14] = 0x0000000000004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_SU_EXTENDED @ 0x20 [15:15] = 0x0000000000008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_MIN_PACKET_EXTENSION @ 0x20 [17:16] = 0x0000000000030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_NSS @ 0x20 [20:18] = 0x00000000001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_CONTENT @ 0x20 [21:21] = 0x0000000000200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_LTF_SIZE @ 0x20 [23:22] = 0x0000000000c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_CHAIN_CSD_EN @ 0x20 [24:24] = 0x0000000001000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_CHAIN_CSD_EN @ 0x20 [25:25] = 0x0000000002000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_DL_UL_FLAG @ 0x20 [26:26] = 0x0000000004000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_4A @ 0x20 [31:27] = 0x00000000f8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_EXT_RU_START_INDEX @ 0x20 [35:32] = 0x0000000f00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_EXT_RU_SIZE @ 0x20 [39:36] = 0x000000f000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_EHT_DUPLICATE_MODE @ 0x20 [41:40] = 0x0000030000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_HE_SIGB_DCM @ 0x20 [42:42] = 0x0000040000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_HE_SIGB_0_MCS @ 0x20 [45:43] = 0x0000380000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_NUM_HE_SIGB_SYM @ 0x20 [50:46] = 0x0007c00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_REQUIRED_RESPONSE_TIME_SOURCE @ 0x20 [51:51] = 0x0008000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_5A @ 0x20 [57:52] = 0x03f0000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x20 [63:58] = 0xfc00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x28 [9:0] = 0x00000000000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x28 [10:10] = 0x0000000000000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x28 [11:11] = 0x0000000000000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x28 [12:12] = 0x0000000000001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x28 [15:13] = 0x000000000000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_REQUIRED_RESPONSE_TIME @ 0x28 [27:16] = 0x000000000fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11BE_PARAMS_PLACEHOLDER @ 0x28 [31:28] = 0x00000000f0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_0A @ 0x28 [32:32] = 0x0000000100000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_ANTENNA_SECTOR_CTRL @ 0x28 [56:33] = 0x01fffffe00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_PKT_TYPE @ 0x28 [60:57] = 0x1e00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_SMOOTHING @ 0x28 [61:61] = 0x2000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_LDPC @ 0x28 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_STBC @ 0x28 [63:63] = 0x8000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_TX_PWR @ 0x30 [7:0] = 0x00000000000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_MIN_TX_PWR @ 0x30 [15:8] = 0x000000000000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_NSS @ 0x30 [18:16] = 0x0000000000070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_TX_CHAIN_MASK @ 0x30 [26:19] = 0x0000000007f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_BW @ 0x30 [29:27] = 0x0000000038000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_STF_LTF_3DB_BOOST @ 0x30 [30:30] = 0x0000000040000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_FORCE_EXTRA_SYMBOL @ 0x30 [31:31] = 0x0000000080000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_RATE_MCS @ 0x30 [35:32] = 0x0000000f00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_NSS @ 0x30 [38:36] = 0x0000007000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DPD_ENABLE @ 0x30 [39:39] = 0x0000008000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_PWR @ 0x30 [47:40] = 0x0000ff0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MIN_TX_PWR @ 0x30 [55:48] = 0x00ff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_CHAIN_MASK @ 0x30 [63:56] = 0xff00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_3A @ 0x38 [7:0] = 0x00000000000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_SGI @ 0x38 [9:8] = 0x0000000000000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RATE_MCS @ 0x38 [13:10] = 0x0000000000003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_3B @ 0x38 [15:14] = 0x000000000000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_PWR_1 @ 0x38 [23:16] = 0x0000000000ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_TX_PWR_1 @ 0x38 [31:24] = 0x00000000ff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_AGGREGATION @ 0x38 [32:32] = 0x0000000100000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_BSS_COLOR_ID @ 0x38 [38:33] = 0x0000007e00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_SPATIAL_REUSE @ 0x38 [42:39] = 0x0000078000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_CP_LTF_SIZE @ 0x38 [44:43] = 0x0000180000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_DCM @ 0x38 [45:45] = 0x0000200000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_DOPPLER_INDICATION @ 0x38 [46:46] = 0x0000400000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_SU_EXTENDED @ 0x38 [47:47] = 0x0000800000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_MIN_PACKET_EXTENSION @ 0x38 [49:48] = 0x0003000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_NSS @ 0x38 [52:50] = 0x001c000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_CONTENT @ 0x38 [53:53] = 0x0020000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_LTF_SIZE @ 0x38 [55:54] = 0x00c0000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_CHAIN_CSD_EN @ 0x38 [56:56] = 0x0100000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_CHAIN_CSD_EN @ 0x38 [57:57] = 0x0200000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_DL_UL_FLAG @ 0x38 [58:58] = 0x0400000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_4A @ 0x38 [63:59] = 0xf800000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_EXT_RU_START_INDEX @ 0x40 [3:0] = 0x000000000000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_EXT_RU_SIZE @ 0x40 [7:4] = 0x00000000000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_EHT_DUPLICATE_MODE @ 0x40 [9:8] = 0x0000000000000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_HE_SIGB_DCM @ 0x40 [10:10] = 0x0000000000000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_HE_SIGB_0_MCS @ 0x40 [13:11] = 0x0000000000003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_NUM_HE_SIGB_SYM @ 0x40 [18:14] = 0x000000000007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_REQUIRED_RESPONSE_TIME_SOURCE @ 0x40 [19:19] = 0x0000000000080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_5A @ 0x40 [25:20] = 0x0000000003f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x40 [31:26] = 0x00000000fc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x40 [41:32] = 0x000003ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x40 [42:42] = 0x0000040000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x40 [43:43] = 0x0000080000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x40 [44:44] = 0x0000100000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x40 [47:45] = 0x0000e00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_REQUIRED_RESPONSE_TIME @ 0x40 [59:48] = 0x0fff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11BE_PARAMS_PLACEHOLDER @ 0x40 [63:60] = 0xf000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_0A @ 0x48 [0:0] = 0x0000000000000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_ANTENNA_SECTOR_CTRL @ 0x48 [24:1] = 0x0000000001fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_PKT_TYPE @ 0x48 [28:25] = 0x000000001e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_SMOOTHING @ 0x48 [29:29] = 0x0000000020000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_LDPC @ 0x48 [30:30] = 0x0000000040000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_STBC @ 0x48 [31:31] = 0x0000000080000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_TX_PWR @ 0x48 [39:32] = 0x000000ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_MIN_TX_PWR @ 0x48 [47:40] = 0x0000ff0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_NSS @ 0x48 [50:48] = 0x0007000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_TX_CHAIN_MASK @ 0x48 [58:51] = 0x07f8000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_BW @ 0x48 [61:59] = 0x3800000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_STF_LTF_3DB_BOOST @ 0x48 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_FORCE_EXTRA_SYMBOL @ 0x48 [63:63] = 0x8000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_RATE_MCS @ 0x50 [3:0] = 0x000000000000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_NSS @ 0x50 [6:4] = 0x0000000000000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DPD_ENABLE @ 0x50 [7:7] = 0x0000000000000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_PWR @ 0x50 [15:8] = 0x000000000000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MIN_TX_PWR @ 0x50 [23:16] = 0x0000000000ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_CHAIN_MASK @ 0x50 [31:24] = 0x00000000ff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_3A @ 0x50 [39:32] = 0x000000ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_SGI @ 0x50 [41:40] = 0x0000030000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RATE_MCS @ 0x50 [45:42] = 0x00003c0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_3B @ 0x50 [47:46] = 0x0000c00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_PWR_1 @ 0x50 [55:48] = 0x00ff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_TX_PWR_1 @ 0x50 [63:56] = 0xff00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_AGGREGATION @ 0x58 [0:0] = 0x0000000000000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_BSS_COLOR_ID @ 0x58 [6:1] = 0x000000000000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_SPATIAL_REUSE @ 0x58 [10:7] = 0x0000000000000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_CP_LTF_SIZE @ 0x58 [12:11] = 0x0000000000001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_DCM @ 0x58 [13:13] = 0x0000000000002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_DOPPLER_INDICATION @ 0x58 [14:14] = 0x0000000000004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_SU_EXTENDED @ 0x58 [15:15] = 0x0000000000008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_MIN_PACKET_EXTENSION @ 0x58 [17:16] = 0x0000000000030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_NSS @ 0x58 [20:18] = 0x00000000001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_CONTENT @ 0x58 [21:21] = 0x0000000000200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_LTF_SIZE @ 0x58 [23:22] = 0x0000000000c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_CHAIN_CSD_EN @ 0x58 [24:24] = 0x0000000001000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_CHAIN_CSD_EN @ 0x58 [25:25] = 0x0000000002000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_DL_UL_FLAG @ 0x58 [26:26] = 0x0000000004000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_4A @ 0x58 [31:27] = 0x00000000f8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_EXT_RU_START_INDEX @ 0x58 [35:32] = 0x0000000f00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_EXT_RU_SIZE @ 0x58 [39:36] = 0x000000f000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_EHT_DUPLICATE_MODE @ 0x58 [41:40] = 0x0000030000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_HE_SIGB_DCM @ 0x58 [42:42] = 0x0000040000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_HE_SIGB_0_MCS @ 0x58 [45:43] = 0x0000380000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_NUM_HE_SIGB_SYM @ 0x58 [50:46] = 0x0007c00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_REQUIRED_RESPONSE_TIME_SOURCE @ 0x58 [51:51] = 0x0008000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_5A @ 0x58 [57:52] = 0x03f0000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x58 [63:58] = 0xfc00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x60 [9:0] = 0x00000000000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x60 [10:10] = 0x0000000000000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x60 [11:11] = 0x0000000000000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x60 [12:12] = 0x0000000000001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x60 [15:13] = 0x000000000000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_REQUIRED_RESPONSE_TIME @ 0x60 [27:16] = 0x000000000fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11BE_PARAMS_PLACEHOLDER @ 0x60 [31:28] = 0x00000000f0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_0A @ 0x60 [32:32] = 0x0000000100000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_ANTENNA_SECTOR_CTRL @ 0x60 [56:33] = 0x01fffffe00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_PKT_TYPE @ 0x60 [60:57] = 0x1e00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_SMOOTHING @ 0x60 [61:61] = 0x2000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_LDPC @ 0x60 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_STBC @ 0x60 [63:63] = 0x8000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_TX_PWR @ 0x68 [7:0] = 0x00000000000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_MIN_TX_PWR @ 0x68 [15:8] = 0x000000000000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_NSS @ 0x68 [18:16] = 0x0000000000070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_TX_CHAIN_MASK @ 0x68 [26:19] = 0x0000000007f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_BW @ 0x68 [29:27] = 0x0000000038000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_STF_LTF_3DB_BOOST @ 0x68 [30:30] = 0x0000000040000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_FORCE_EXTRA_SYMBOL @ 0x68 [31:31] = 0x0000000080000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_RATE_MCS @ 0x68 [35:32] = 0x0000000f00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_NSS @ 0x68 [38:36] = 0x0000007000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DPD_ENABLE @ 0x68 [39:39] = 0x0000008000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_PWR @ 0x68 [47:40] = 0x0000ff0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MIN_TX_PWR @ 0x68 [55:48] = 0x00ff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_CHAIN_MASK @ 0x68 [63:56] = 0xff00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_3A @ 0x70 [7:0] = 0x00000000000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_SGI @ 0x70 [9:8] = 0x0000000000000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RATE_MCS @ 0x70 [13:10] = 0x0000000000003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_3B @ 0x70 [15:14] = 0x000000000000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_PWR_1 @ 0x70 [23:16] = 0x0000000000ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_TX_PWR_1 @ 0x70 [31:24] = 0x00000000ff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_AGGREGATION @ 0x70 [32:32] = 0x0000000100000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_BSS_COLOR_ID @ 0x70 [38:33] = 0x0000007e00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_SPATIAL_REUSE @ 0x70 [42:39] = 0x0000078000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_CP_LTF_SIZE @ 0x70 [44:43] = 0x0000180000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_DCM @ 0x70 [45:45] = 0x0000200000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_DOPPLER_INDICATION @ 0x70 [46:46] = 0x0000400000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_SU_EXTENDED @ 0x70 [47:47] = 0x0000800000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_MIN_PACKET_EXTENSION @ 0x70 [49:48] = 0x0003000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_NSS @ 0x70 [52:50] = 0x001c000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_CONTENT @ 0x70 [53:53] = 0x0020000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_LTF_SIZE @ 0x70 [55:54] = 0x00c0000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_CHAIN_CSD_EN @ 0x70 [56:56] = 0x0100000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_CHAIN_CSD_EN @ 0x70 [57:57] = 0x0200000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_DL_UL_FLAG @ 0x70 [58:58] = 0x0400000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_4A @ 0x70 [63:59] = 0xf800000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_EXT_RU_START_INDEX @ 0x78 [3:0] = 0x000000000000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_EXT_RU_SIZE @ 0x78 [7:4] = 0x00000000000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_EHT_DUPLICATE_MODE @ 0x78 [9:8] = 0x0000000000000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_HE_SIGB_DCM @ 0x78 [10:10] = 0x0000000000000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_HE_SIGB_0_MCS @ 0x78 [13:11] = 0x0000000000003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_NUM_HE_SIGB_SYM @ 0x78 [18:14] = 0x000000000007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_REQUIRED_RESPONSE_TIME_SOURCE @ 0x78 [19:19] = 0x0000000000080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_5A @ 0x78 [25:20] = 0x0000000003f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x78 [31:26] = 0x00000000fc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x78 [41:32] = 0x000003ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x78 [42:42] = 0x0000040000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x78 [43:43] = 0x0000080000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x78 [44:44] = 0x0000100000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x78 [47:45] = 0x0000e00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_REQUIRED_RESPONSE_TIME @ 0x78 [59:48] = 0x0fff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11BE_PARAMS_PLACEHOLDER @ 0x78 [63:60] = 0xf000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_0A @ 0x80 [0:0] = 0x0000000000000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_ANTENNA_SECTOR_CTRL @ 0x80 [24:1] = 0x0000000001fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_PKT_TYPE @ 0x80 [28:25] = 0x000000001e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_SMOOTHING @ 0x80 [29:29] = 0x0000000020000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_LDPC @ 0x80 [30:30] = 0x0000000040000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_STBC @ 0x80 [31:31] = 0x0000000080000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_TX_PWR @ 0x80 [39:32] = 0x000000ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_MIN_TX_PWR @ 0x80 [47:40] = 0x0000ff0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_NSS @ 0x80 [50:48] = 0x0007000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_TX_CHAIN_MASK @ 0x80 [58:51] = 0x07f8000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_BW @ 0x80 [61:59] = 0x3800000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_STF_LTF_3DB_BOOST @ 0x80 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_FORCE_EXTRA_SYMBOL @ 0x80 [63:63] = 0x8000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_RATE_MCS @ 0x88 [3:0] = 0x000000000000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_NSS @ 0x88 [6:4] = 0x0000000000000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DPD_ENABLE @ 0x88 [7:7] = 0x0000000000000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_PWR @ 0x88 [15:8] = 0x000000000000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MIN_TX_PWR @ 0x88 [23:16] = 0x0000000000ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_CHAIN_MASK @ 0x88 [31:24] = 0x00000000ff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_3A @ 0x88 [39:32] = 0x000000ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_SGI @ 0x88 [41:40] = 0x0000030000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RATE_MCS @ 0x88 [45:42] = 0x00003c0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_3B @ 0x88 [47:46] = 0x0000c00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_PWR_1 @ 0x88 [55:48] = 0x00ff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_TX_PWR_1 @ 0x88 [63:56] = 0xff00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_AGGREGATION @ 0x90 [0:0] = 0x0000000000000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_BSS_COLOR_ID @ 0x90 [6:1] = 0x000000000000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_SPATIAL_REUSE @ 0x90 [10:7] = 0x0000000000000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_CP_LTF_SIZE @ 0x90 [12:11] = 0x0000000000001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_DCM @ 0x90 [13:13] = 0x0000000000002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_DOPPLER_INDICATION @ 0x90 [14:14] = 0x0000000000004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_SU_EXTENDED @ 0x90 [15:15] = 0x0000000000008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_MIN_PACKET_EXTENSION @ 0x90 [17:16] = 0x0000000000030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_NSS @ 0x90 [20:18] = 0x00000000001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_CONTENT @ 0x90 [21:21] = 0x0000000000200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_LTF_SIZE @ 0x90 [23:22] = 0x0000000000c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_CHAIN_CSD_EN @ 0x90 [24:24] = 0x0000000001000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_CHAIN_CSD_EN @ 0x90 [25:25] = 0x0000000002000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_DL_UL_FLAG @ 0x90 [26:26] = 0x0000000004000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_4A @ 0x90 [31:27] = 0x00000000f8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_EXT_RU_START_INDEX @ 0x90 [35:32] = 0x0000000f00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_EXT_RU_SIZE @ 0x90 [39:36] = 0x000000f000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_EHT_DUPLICATE_MODE @ 0x90 [41:40] = 0x0000030000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_HE_SIGB_DCM @ 0x90 [42:42] = 0x0000040000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_HE_SIGB_0_MCS @ 0x90 [45:43] = 0x0000380000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_NUM_HE_SIGB_SYM @ 0x90 [50:46] = 0x0007c00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_REQUIRED_RESPONSE_TIME_SOURCE @ 0x90 [51:51] = 0x0008000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_5A @ 0x90 [57:52] = 0x03f0000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x90 [63:58] = 0xfc00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x98 [9:0] = 0x00000000000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x98 [10:10] = 0x0000000000000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x98 [11:11] = 0x0000000000000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x98 [12:12] = 0x0000000000001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x98 [15:13] = 0x000000000000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_REQUIRED_RESPONSE_TIME @ 0x98 [27:16] = 0x000000000fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11BE_PARAMS_PLACEHOLDER @ 0x98 [31:28] = 0x00000000f0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_0A @ 0x98 [32:32] = 0x0000000100000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_ANTENNA_SECTOR_CTRL @ 0x98 [56:33] = 0x01fffffe00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_PKT_TYPE @ 0x98 [60:57] = 0x1e00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_SMOOTHING @ 0x98 [61:61] = 0x2000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_LDPC @ 0x98 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_STBC @ 0x98 [63:63] = 0x8000000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_TX_PWR @ 0xa0 [7:0] = 0x00000000000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_MIN_TX_PWR @ 0xa0 [15:8] = 0x000000000000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_NSS @ 0xa0 [18:16] = 0x0000000000070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_TX_CHAIN_MASK @ 0xa0 [26:19] = 0x0000000007f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_BW @ 0xa0 [29:27] = 0x0000000038000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_STF_LTF_3DB_BOOST @ 0xa0 [30:30] = 0x0000000040000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_FORCE_EXTRA_SYMBOL @ 0xa0 [31:31] = 0x0000000080000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_RATE_MCS @ 0xa0 [35:32] = 0x0000000f00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_NSS @ 0xa0 [38:36] = 0x0000007000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DPD_ENABLE @ 0xa0 [39:39] = 0x0000008000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_PWR @ 0xa0 [47:40] = 0x0000ff0000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MIN_TX_PWR @ 0xa0 [55:48] = 0x00ff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_CHAIN_MASK @ 0xa0 [63:56] = 0xff00000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_3A @ 0xa8 [7:0] = 0x00000000000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_SGI @ 0xa8 [9:8] = 0x0000000000000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RATE_MCS @ 0xa8 [13:10] = 0x0000000000003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_3B @ 0xa8 [15:14] = 0x000000000000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_PWR_1 @ 0xa8 [23:16] = 0x0000000000ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_TX_PWR_1 @ 0xa8 [31:24] = 0x00000000ff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_AGGREGATION @ 0xa8 [32:32] = 0x0000000100000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_BSS_COLOR_ID @ 0xa8 [38:33] = 0x0000007e00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_SPATIAL_REUSE @ 0xa8 [42:39] = 0x0000078000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_CP_LTF_SIZE @ 0xa8 [44:43] = 0x0000180000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_DCM @ 0xa8 [45:45] = 0x0000200000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_DOPPLER_INDICATION @ 0xa8 [46:46] = 0x0000400000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_SU_EXTENDED @ 0xa8 [47:47] = 0x0000800000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_MIN_PACKET_EXTENSION @ 0xa8 [49:48] = 0x0003000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_NSS @ 0xa8 [52:50] = 0x001c000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_CONTENT @ 0xa8 [53:53] = 0x0020000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_LTF_SIZE @ 0xa8 [55:54] = 0x00c0000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_CHAIN_CSD_EN @ 0xa8 [56:56] = 0x0100000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_CHAIN_CSD_EN @ 0xa8 [57:57] = 0x0200000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_DL_UL_FLAG @ 0xa8 [58:58] = 0x0400000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_4A @ 0xa8 [63:59] = 0xf800000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_EXT_RU_START_INDEX @ 0xb0 [3:0] = 0x000000000000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_EXT_RU_SIZE @ 0xb0 [7:4] = 0x00000000000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_EHT_DUPLICATE_MODE @ 0xb0 [9:8] = 0x0000000000000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_HE_SIGB_DCM @ 0xb0 [10:10] = 0x0000000000000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_HE_SIGB_0_MCS @ 0xb0 [13:11] = 0x0000000000003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_NUM_HE_SIGB_SYM @ 0xb0 [18:14] = 0x000000000007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_REQUIRED_RESPONSE_TIME_SOURCE @ 0xb0 [19:19] = 0x0000000000080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_5A @ 0xb0 [25:20] = 0x0000000003f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0xb0 [31:26] = 0x00000000fc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0xb0 [41:32] = 0x000003ff00000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0xb0 [42:42] = 0x0000040000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0xb0 [43:43] = 0x0000080000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0xb0 [44:44] = 0x0000100000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0xb0 [47:45] = 0x0000e00000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_REQUIRED_RESPONSE_TIME @ 0xb0 [59:48] = 0x0fff000000000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11BE_PARAMS_PLACEHOLDER @ 0xb0 [63:60] = 0xf000000000000000,
        R2R_HW_RESPONSE_TX_DURATION @ 0xb8 [15:0] = 0x000000000000ffff,
        R2R_RX_DURATION_FIELD @ 0xb8 [31:16] = 0x00000000ffff0000,
        R2R_GROUP_ID @ 0xb8 [37:32] = 0x0000003f00000000,
        R2R_RESPONSE_FRAME_TYPE @ 0xb8 [41:38] = 0x000003c000000000,
        R2R_STA_PARTIAL_AID @ 0xb8 [52:42] = 0x001ffc0000000000,
        USE_ADDRESS_FIELDS_FOR_PROTECTION @ 0xb8 [53:53] = 0x0020000000000000,
        R2R_SET_REQUIRED_RESPONSE_TIME @ 0xb8 [54:54] = 0x0040000000000000,
        RESERVED_29A @ 0xb8 [57:55] = 0x0380000000000000,
        R2R_BW20_ACTIVE_CHANNEL @ 0xb8 [60:58] = 0x1c00000000000000,
        R2R_BW40_ACTIVE_CHANNEL @ 0xb8 [63:61] = 0xe000000000000000,
        R2R_BW80_ACTIVE_CHANNEL @ 0xc0 [2:0] = 0x0000000000000007,
        R2R_BW160_ACTIVE_CHANNEL @ 0xc0 [5:3] = 0x0000000000000038,
        R2R_BW240_ACTIVE_CHANNEL @ 0xc0 [8:6] = 0x00000000000001c0,
        R2R_BW320_ACTIVE_CHANNEL @ 0xc0 [11:9] = 0x0000000000000e00,
        R2R_BW20 @ 0xc0 [14:12] = 0x0000000000007000,
        R2R_BW40 @ 0xc0 [17:15] = 0x0000000000038000,
        R2R_BW80 @ 0xc0 [20:18] = 0x00000000001c0000,
        R2R_BW160 @ 0xc0 [23:21] = 0x0000000000e00000,
        R2R_BW240 @ 0xc0 [26:24] = 0x0000000007000000,
        R2R_BW320 @ 0xc0 [29:27] = 0x0000000038000000,
        RESERVED_30A @ 0xc0 [31:30] = 0x00000000c0000000,
        MU_RESPONSE_EXPECTED_BITMAP_31_0 @ 0xc0 [63:32] = 0xffffffff00000000,
        MU_RESPONSE_EXPECTED_BITMAP_36_32 @ 0xc8 [4:0] = 0x000000000000001f,
        MU_EXPECTED_RESPONSE_CBF_COUNT @ 0xc8 [10:5] = 0x00000000000007e0,
        MU_EXPECTED_RESPONSE_STA_COUNT @ 0xc8 [16:11] = 0x000000000001f800,
        TRANSMIT_INCLUDES_MULTIDESTINATION @ 0xc8 [17:17] = 0x0000000000020000,
        INSERT_PREV_TX_START_TIMING_INFO @ 0xc8 [18:18] = 0x0000000000040000,
        INSERT_CURRENT_TX_START_TIMING_INFO @ 0xc8 [19:19] = 0x0000000000080000,
        TX_START_TRANSMIT_TIME_BYTE_OFFSET @ 0xc8 [31:20] = 0x00000000fff00000,
        PROTECTION_FRAME_AD1_31_0 @ 0xc8 [63:32] = 0xffffffff00000000,
        PROTECTION_FRAME_AD1_47_32 @ 0xd0 [15:0] = 0x000000000000ffff,
        PROTECTION_FRAME_AD2_15_0 @ 0xd0 [31:16] = 0x00000000ffff0000,
        PROTECTION_FRAME_AD2_47_16 @ 0xd0 [63:32] = 0xffffffff00000000,
        DYNAMIC_MEDIUM_PROT_THRESHOLD @ 0xd8 [23:0] = 0x0000000000ffffff,
        DYNAMIC_MEDIUM_PROT_TYPE @ 0xd8 [24:24] = 0x0000000001000000,
        RESERVED_54A @ 0xd8 [31:25] = 0x00000000fe000000,
        PROTECTION_FRAME_AD3_31_0 @ 0xd8 [63:32] = 0xffffffff00000000,
        PROTECTION_FRAME_AD3_47_32 @ 0xe0 [15:0] = 0x000000000000ffff,
        PROTECTION_FRAME_AD4_15_0 @ 0xe0 [31:16] = 0x00000000ffff0000,
        PROTECTION_FRAME_AD4_47_16 @ 0xe0 [63:32] = 0xffffffff00000000,
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

    pub mod response_end_status [22; Qword] {
        COEX_BT_TX_WHILE_WLAN_TX @ 0x0 [0:0] = 0x0000000000000001,
        COEX_WAN_TX_WHILE_WLAN_TX @ 0x0 [1:1] = 0x0000000000000002,
        COEX_WLAN_TX_WHILE_WLAN_TX @ 0x0 [2:2] = 0x0000000000000004,
        GLOBAL_DATA_UNDERFLOW_WARNING @ 0x0 [3:3] = 0x0000000000000008,
        RESPONSE_TRANSMIT_STATUS @ 0x0 [7:4] = 0x00000000000000f0,
        PHYTX_PKT_END_INFO_VALID @ 0x0 [8:8] = 0x0000000000000100,
        PHYTX_ABORT_REQUEST_INFO_VALID @ 0x0 [9:9] = 0x0000000000000200,
        GENERATED_RESPONSE @ 0x0 [12:10] = 0x0000000000001c00,
        MBA_USER_COUNT @ 0x0 [19:13] = 0x00000000000fe000,
        MBA_FAKE_BITMAP_COUNT @ 0x0 [26:20] = 0x0000000007f00000,
        COEX_BASED_TX_BW @ 0x0 [29:27] = 0x0000000038000000,
        TRIG_RESPONSE_RELATED @ 0x0 [30:30] = 0x0000000040000000,
        DPDTRAIN_DONE @ 0x0 [31:31] = 0x0000000080000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_PHYTX_ABORT_REASON @ 0x0 [39:32] = 0x000000ff00000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_USER_NUMBER @ 0x0 [45:40] = 0x00003f0000000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_RESERVED @ 0x0 [47:46] = 0x0000c00000000000,
        CBF_SEGMENT_REQUEST_MASK @ 0x0 [55:48] = 0x00ff000000000000,
        CBF_SEGMENT_SENT_MASK @ 0x0 [63:56] = 0xff00000000000000,
        UNDERFLOW_MPDU_COUNT @ 0x8 [8:0] = 0x00000000000001ff,
        DATA_UNDERFLOW_WARNING @ 0x8 [10:9] = 0x0000000000000600,
        PHY_TX_GAIN_SETTING @ 0x8 [18:11] = 0x000000000007f800,
        TIMING_STATUS @ 0x8 [20:19] = 0x0000000000180000,
        ONLY_NULL_DELIM_SENT @ 0x8 [21:21] = 0x0000000000200000,
        BRP_INFO_VALID @ 0x8 [22:22] = 0x0000000000400000,
        RESERVED_2A @ 0x8 [31:23] = 0x00000000ff800000,
        MU_RESPONSE_BITMAP_31_0 @ 0x8 [63:32] = 0xffffffff00000000,
        MU_RESPONSE_BITMAP_36_32 @ 0x10 [4:0] = 0x000000000000001f,
        RESERVED_4A @ 0x10 [15:5] = 0x000000000000ffe0,
        TRANSMIT_DELAY @ 0x10 [31:16] = 0x00000000ffff0000,
        START_OF_FRAME_TIMESTAMP_15_0 @ 0x10 [47:32] = 0x0000ffff00000000,
        START_OF_FRAME_TIMESTAMP_31_16 @ 0x10 [63:48] = 0xffff000000000000,
        END_OF_FRAME_TIMESTAMP_15_0 @ 0x18 [15:0] = 0x000000000000ffff,
        END_OF_FRAME_TIMESTAMP_31_16 @ 0x18 [31:16] = 0x00000000ffff0000,
        TX_GROUP_DELAY @ 0x18 [43:32] = 0x00000fff00000000,
        RESERVED_7A @ 0x18 [47:44] = 0x0000f00000000000,
        TPC_DBG_INFO_CMN_15_0 @ 0x18 [63:48] = 0xffff000000000000,
        TPC_DBG_INFO_31_16 @ 0x20 [15:0] = 0x000000000000ffff,
        TPC_DBG_INFO_47_32 @ 0x20 [31:16] = 0x00000000ffff0000,
        TPC_DBG_INFO_CHN1_15_0 @ 0x20 [47:32] = 0x0000ffff00000000,
        TPC_DBG_INFO_CHN1_31_16 @ 0x20 [63:48] = 0xffff000000000000,
        TPC_DBG_INFO_CHN1_47_32 @ 0x28 [15:0] = 0x000000000000ffff,
        TPC_DBG_INFO_CHN1_63_48 @ 0x28 [31:16] = 0x00000000ffff0000,
        TPC_DBG_INFO_CHN1_79_64 @ 0x28 [47:32] = 0x0000ffff00000000,
        TPC_DBG_INFO_CHN2_15_0 @ 0x28 [63:48] = 0xffff000000000000,
        TPC_DBG_INFO_CHN2_31_16 @ 0x30 [15:0] = 0x000000000000ffff,
        TPC_DBG_INFO_CHN2_47_32 @ 0x30 [31:16] = 0x00000000ffff0000,
        TPC_DBG_INFO_CHN2_63_48 @ 0x30 [47:32] = 0x0000ffff00000000,
        TPC_DBG_INFO_CHN2_79_64 @ 0x30 [63:48] = 0xffff000000000000,
        PHYTX_TX_END_SW_INFO_15_0 @ 0x38 [15:0] = 0x000000000000ffff,
        PHYTX_TX_END_SW_INFO_31_16 @ 0x38 [31:16] = 0x00000000ffff0000,
        PHYTX_TX_END_SW_INFO_47_32 @ 0x38 [47:32] = 0x0000ffff00000000,
        PHYTX_TX_END_SW_INFO_63_48 @ 0x38 [63:48] = 0xffff000000000000,
        ADDR1_31_0 @ 0x40 [31:0] = 0x00000000ffffffff,
        ADDR1_47_32 @ 0x40 [47:32] = 0x0000ffff00000000,
        ADDR2_15_0 @ 0x40 [63:48] = 0xffff000000000000,
        ADDR2_47_16 @ 0x48 [31:0] = 0x00000000ffffffff,
        ADDR3_31_0 @ 0x48 [63:32] = 0xffffffff00000000,
        ADDR3_47_32 @ 0x50 [15:0] = 0x000000000000ffff,
        RANGING @ 0x50 [16:16] = 0x0000000000010000,
        SECURE @ 0x50 [17:17] = 0x0000000000020000,
        RANGING_FTM_FRAME_SENT @ 0x50 [18:18] = 0x0000000000040000,
        RESERVED_20A @ 0x50 [31:19] = 0x00000000fff80000,
        TLV64_PADDING @ 0x50 [63:32] = 0xffffffff00000000,
    }

    pub mod tx_fes_status_end [22; Qword] {
        PROT_COEX_BT_TX_WHILE_WLAN_TX @ 0x0 [0:0] = 0x0000000000000001,
        PROT_COEX_BT_TX_WHILE_WLAN_RX @ 0x0 [1:1] = 0x0000000000000002,
        PROT_COEX_WAN_TX_WHILE_WLAN_TX @ 0x0 [2:2] = 0x0000000000000004,
        PROT_COEX_WAN_TX_WHILE_WLAN_RX @ 0x0 [3:3] = 0x0000000000000008,
        PROT_COEX_WLAN_TX_WHILE_WLAN_TX @ 0x0 [4:4] = 0x0000000000000010,
        PROT_COEX_WLAN_TX_WHILE_WLAN_RX @ 0x0 [5:5] = 0x0000000000000020,
        COEX_BT_TX_WHILE_WLAN_TX @ 0x0 [6:6] = 0x0000000000000040,
        COEX_BT_TX_WHILE_WLAN_RX @ 0x0 [7:7] = 0x0000000000000080,
        COEX_WAN_TX_WHILE_WLAN_TX @ 0x0 [8:8] = 0x0000000000000100,
        COEX_WAN_TX_WHILE_WLAN_RX @ 0x0 [9:9] = 0x0000000000000200,
        COEX_WLAN_TX_WHILE_WLAN_TX @ 0x0 [10:10] = 0x0000000000000400,
        COEX_WLAN_TX_WHILE_WLAN_RX @ 0x0 [11:11] = 0x0000000000000800,
        GLOBAL_DATA_UNDERFLOW_WARNING @ 0x0 [12:12] = 0x0000000000001000,
        GLOBAL_FES_TRANSMIT_RESULT @ 0x0 [16:13] = 0x000000000001e000,
        CBF_BW_RECEIVED_VALID @ 0x0 [17:17] = 0x0000000000020000,
        CBF_BW_RECEIVED @ 0x0 [20:18] = 0x00000000001c0000,
        ACTUAL_RECEIVED_ACK_TYPE @ 0x0 [24:21] = 0x0000000001e00000,
        STA_RESPONSE_COUNT @ 0x0 [30:25] = 0x000000007e000000,
        DPDTRAIN_DONE @ 0x0 [31:31] = 0x0000000080000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_PHYTX_ABORT_REASON @ 0x0 [39:32] = 0x000000ff00000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_USER_NUMBER @ 0x0 [45:40] = 0x00003f0000000000,
        PHYTX_ABORT_REQUEST_INFO_DETAILS_RESERVED @ 0x0 [47:46] = 0x0000c00000000000,
        RESERVED_AFTER_STRUCT16 @ 0x0 [51:48] = 0x000f000000000000,
        BRP_INFO_VALID @ 0x0 [52:52] = 0x0010000000000000,
        RESERVED_1A @ 0x0 [58:53] = 0x07e0000000000000,
        PHYTX_PKT_END_INFO_VALID @ 0x0 [59:59] = 0x0800000000000000,
        PHYTX_ABORT_REQUEST_INFO_VALID @ 0x0 [60:60] = 0x1000000000000000,
        FES_IN_11AX_TRIGGER_RESPONSE_CONFIG @ 0x0 [61:61] = 0x2000000000000000,
        NULL_DELIM_INSERTED_BEFORE_MPDUS @ 0x0 [62:62] = 0x4000000000000000,
        ONLY_NULL_DELIM_SENT @ 0x0 [63:63] = 0x8000000000000000,
        START_OF_FRAME_TIMESTAMP_15_0 @ 0x8 [15:0] = 0x000000000000ffff,
        START_OF_FRAME_TIMESTAMP_31_16 @ 0x8 [31:16] = 0x00000000ffff0000,
        END_OF_FRAME_TIMESTAMP_15_0 @ 0x8 [47:32] = 0x0000ffff00000000,
        END_OF_FRAME_TIMESTAMP_31_16 @ 0x8 [63:48] = 0xffff000000000000,
        TERMINATE_RANGING_SEQUENCE @ 0x10 [0:0] = 0x0000000000000001,
        RESERVED_4A @ 0x10 [7:1] = 0x00000000000000fe,
        TIMING_STATUS @ 0x10 [9:8] = 0x0000000000000300,
        RESPONSE_TYPE @ 0x10 [14:10] = 0x0000000000007c00,
        R2R_END_STATUS_TO_FOLLOW @ 0x10 [15:15] = 0x0000000000008000,
        TRANSMIT_DELAY @ 0x10 [31:16] = 0x00000000ffff0000,
        TX_GROUP_DELAY @ 0x10 [43:32] = 0x00000fff00000000,
        RESERVED_5A @ 0x10 [47:44] = 0x0000f00000000000,
        TPC_DBG_INFO_CMN_15_0 @ 0x10 [63:48] = 0xffff000000000000,
        TPC_DBG_INFO_CMN_31_16 @ 0x18 [15:0] = 0x000000000000ffff,
        TPC_DBG_INFO_47_32 @ 0x18 [31:16] = 0x00000000ffff0000,
        TPC_DBG_INFO_CHN1_15_0 @ 0x18 [47:32] = 0x0000ffff00000000,
        TPC_DBG_INFO_CHN1_31_16 @ 0x18 [63:48] = 0xffff000000000000,
        TPC_DBG_INFO_CHN1_47_32 @ 0x20 [15:0] = 0x000000000000ffff,
        TPC_DBG_INFO_CHN1_63_48 @ 0x20 [31:16] = 0x00000000ffff0000,
        TPC_DBG_INFO_CHN1_79_64 @ 0x20 [47:32] = 0x0000ffff00000000,
        TPC_DBG_INFO_CHN2_15_0 @ 0x20 [63:48] = 0xffff000000000000,
        TPC_DBG_INFO_CHN2_31_16 @ 0x28 [15:0] = 0x000000000000ffff,
        TPC_DBG_INFO_CHN2_47_32 @ 0x28 [31:16] = 0x00000000ffff0000,
        TPC_DBG_INFO_CHN2_63_48 @ 0x28 [47:32] = 0x0000ffff00000000,
        TPC_DBG_INFO_CHN2_79_64 @ 0x28 [63:48] = 0xffff000000000000,
        PHYTX_TX_END_SW_INFO_15_0 @ 0x30 [15:0] = 0x000000000000ffff,
        PHYTX_TX_END_SW_INFO_31_16 @ 0x30 [31:16] = 0x00000000ffff0000,
        PHYTX_TX_END_SW_INFO_47_32 @ 0x30 [47:32] = 0x0000ffff00000000,
        PHYTX_TX_END_SW_INFO_63_48 @ 0x30 [63:48] = 0xffff000000000000,
        BEAMFORM_MASKED_USER_BITMAP_15_0 @ 0x38 [15:0] = 0x000000000000ffff,
        BEAMFORM_MASKED_USER_BITMAP_31_16 @ 0x38 [31:16] = 0x00000000ffff0000,
        CBF_SEGMENT_REQUEST_MASK @ 0x38 [39:32] = 0x000000ff00000000,
        CBF_SEGMENT_SENT_MASK @ 0x38 [47:40] = 0x0000ff0000000000,
        HIGHEST_ACHIEVED_DATA_NULL_RATIO @ 0x38 [52:48] = 0x001f000000000000,
        USE_ALT_POWER_SR @ 0x38 [53:53] = 0x0020000000000000,
        STATIC_2_PWR_MODE_STATUS @ 0x38 [54:54] = 0x0040000000000000,
        OBSS_SRG_OPPORT_TRANSMIT_STATUS @ 0x38 [55:55] = 0x0080000000000000,
        SRP_BASED_TRANSMIT_STATUS @ 0x38 [56:56] = 0x0100000000000000,
        OBSS_PD_BASED_TRANSMIT_STATUS @ 0x38 [57:57] = 0x0200000000000000,
        BEAMFORM_MASKED_USER_BITMAP_36_32 @ 0x38 [62:58] = 0x7c00000000000000,
        PDG_MPDU_READY @ 0x38 [63:63] = 0x8000000000000000,
        PDG_MPDU_COUNT @ 0x40 [15:0] = 0x000000000000ffff,
        PDG_EST_MPDU_TX_COUNT @ 0x40 [31:16] = 0x00000000ffff0000,
        PDG_OVERVIEW_LENGTH @ 0x40 [55:32] = 0x00ffffff00000000,
        TXOP_DURATION @ 0x40 [62:56] = 0x7f00000000000000,
        PDG_DROPPED_MPDU_WARNING @ 0x40 [63:63] = 0x8000000000000000,
        PACKET_EXTENSION_A_FACTOR @ 0x48 [1:0] = 0x0000000000000003,
        PACKET_EXTENSION_PE_DISAMBIGUITY @ 0x48 [2:2] = 0x0000000000000004,
        PACKET_EXTENSION @ 0x48 [5:3] = 0x0000000000000038,
        FEC_TYPE @ 0x48 [6:6] = 0x0000000000000040,
        STBC @ 0x48 [7:7] = 0x0000000000000080,
        NUM_DATA_SYMBOLS @ 0x48 [23:8] = 0x0000000000ffff00,
        RU_SIZE @ 0x48 [27:24] = 0x000000000f000000,
        RESERVED_17A @ 0x48 [31:28] = 0x00000000f0000000,
        NUM_LTF_SYMBOLS @ 0x48 [34:32] = 0x0000000700000000,
        LTF_SIZE @ 0x48 [36:35] = 0x0000001800000000,
        CP_SETTING @ 0x48 [38:37] = 0x0000006000000000,
        RESERVED_18A @ 0x48 [43:39] = 0x00000f8000000000,
        DCM @ 0x48 [44:44] = 0x0000100000000000,
        LDPC_EXTRA_SYMBOL @ 0x48 [45:45] = 0x0000200000000000,
        FORCE_EXTRA_SYMBOL @ 0x48 [46:46] = 0x0000400000000000,
        RESERVED_18B @ 0x48 [47:47] = 0x0000800000000000,
        TX_PWR_SHARED @ 0x48 [55:48] = 0x00ff000000000000,
        TX_PWR_UNSHARED @ 0x48 [63:56] = 0xff00000000000000,
        RANGING_ACTIVE_USER_MAP @ 0x50 [15:0] = 0x000000000000ffff,
        RANGING_SENT_DUMMY_TX @ 0x50 [16:16] = 0x0000000000010000,
        RANGING_FTM_FRAME_SENT @ 0x50 [17:17] = 0x0000000000020000,
        RESERVED_20A @ 0x50 [23:18] = 0x0000000000fc0000,
        CV_CORR_STATUS @ 0x50 [31:24] = 0x00000000ff000000,
        CURRENT_TX_DURATION @ 0x50 [47:32] = 0x0000ffff00000000,
        RESERVED_21A @ 0x50 [63:48] = 0xffff000000000000,
    }

    pub mod tx_fes_setup [10; Qword] {
        SCHEDULE_ID @ 0x0 [31:0] = 0x00000000ffffffff,
        FES_IN_11AX_TRIGGER_RESPONSE_CONFIG @ 0x0 [32:32] = 0x0000000100000000,
        BO_BASED_TID_AGGREGATION_LIMIT @ 0x0 [36:33] = 0x0000001e00000000,
        RANGING @ 0x0 [37:37] = 0x0000002000000000,
        EXPECT_I2R_LMR @ 0x0 [38:38] = 0x0000004000000000,
        TRANSMIT_START_REASON @ 0x0 [41:39] = 0x0000038000000000,
        USE_ALT_POWER_SR @ 0x0 [42:42] = 0x0000040000000000,
        STATIC_2_PWR_MODE_STATUS @ 0x0 [43:43] = 0x0000080000000000,
        OBSS_SRG_OPPORT_TRANSMIT_STATUS @ 0x0 [44:44] = 0x0000100000000000,
        SRP_BASED_TRANSMIT_STATUS @ 0x0 [45:45] = 0x0000200000000000,
        OBSS_PD_BASED_TRANSMIT_STATUS @ 0x0 [46:46] = 0x0000400000000000,
        PUNCTURE_FROM_ALL_ALLOWED_MODES @ 0x0 [47:47] = 0x0000800000000000,
        SCHEDULE_CMD_RING_ID @ 0x0 [52:48] = 0x001f000000000000,
        FES_CONTROL_MODE @ 0x0 [54:53] = 0x0060000000000000,
        NUMBER_OF_USERS @ 0x0 [60:55] = 0x1f80000000000000,
        MU_TYPE @ 0x0 [61:61] = 0x2000000000000000,
        OFDMA_TRIGGERED_RESPONSE @ 0x0 [62:62] = 0x4000000000000000,
        RESPONSE_TO_RESPONSE_CMD @ 0x0 [63:63] = 0x8000000000000000,
        SCHEDULE_TRY @ 0x8 [3:0] = 0x000000000000000f,
        NDP_FRAME @ 0x8 [5:4] = 0x0000000000000030,
        TXBF @ 0x8 [6:6] = 0x0000000000000040,
        ALLOW_TXOP_EXCEED_IN_1ST_PKT @ 0x8 [7:7] = 0x0000000000000080,
        IGNORE_BW_AVAILABLE @ 0x8 [8:8] = 0x0000000000000100,
        IGNORE_TBTT @ 0x8 [9:9] = 0x0000000000000200,
        STATIC_BANDWIDTH @ 0x8 [12:10] = 0x0000000000001c00,
        SET_TXOP_DURATION_ALL_ONES @ 0x8 [13:13] = 0x0000000000002000,
        TRANSMISSION_CONTAINS_MU_RTS @ 0x8 [14:14] = 0x0000000000004000,
        BW_RESTRICTED_FRAMES_EMBEDDED @ 0x8 [15:15] = 0x0000000000008000,
        AST_INDEX @ 0x8 [31:16] = 0x00000000ffff0000,
        CV_ID @ 0x8 [39:32] = 0x000000ff00000000,
        TRIGGER_RESP_TXPDU_PPDU_BOUNDARY @ 0x8 [41:40] = 0x0000030000000000,
        RXPCU_SETUP_COMPLETE_PRESENT @ 0x8 [42:42] = 0x0000040000000000,
        RBO_MUST_HAVE_DATA_USER_LIMIT @ 0x8 [46:43] = 0x0000780000000000,
        MU_NDP @ 0x8 [47:47] = 0x0000800000000000,
        BF_TYPE @ 0x8 [49:48] = 0x0003000000000000,
        CBF_NC_INDEX_MASK @ 0x8 [50:50] = 0x0004000000000000,
        CBF_NC_INDEX @ 0x8 [53:51] = 0x0038000000000000,
        CBF_NR_INDEX_MASK @ 0x8 [54:54] = 0x0040000000000000,
        CBF_NR_INDEX @ 0x8 [57:55] = 0x0380000000000000,
        SECURE_RANGING_ISTA @ 0x8 [58:58] = 0x0400000000000000,
        NDPA @ 0x8 [59:59] = 0x0800000000000000,
        WAIT_SIFS @ 0x8 [61:60] = 0x3000000000000000,
        CBF_FEEDBACK_TYPE_MASK @ 0x8 [62:62] = 0x4000000000000000,
        CBF_FEEDBACK_TYPE @ 0x8 [63:63] = 0x8000000000000000,
        CBF_SOUNDING_TOKEN @ 0x10 [5:0] = 0x000000000000003f,
        CBF_SOUNDING_TOKEN_MASK @ 0x10 [6:6] = 0x0000000000000040,
        CBF_BW_MASK @ 0x10 [7:7] = 0x0000000000000080,
        CBF_BW @ 0x10 [10:8] = 0x0000000000000700,
        USE_STATIC_BW @ 0x10 [11:11] = 0x0000000000000800,
        COEX_NACK_COUNT @ 0x10 [16:12] = 0x000000000001f000,
        SCH_TX_BURST_ONGOING @ 0x10 [17:17] = 0x0000000000020000,
        GEN_TQM_UPDATE_MPDU_COUNT_TLV @ 0x10 [18:18] = 0x0000000000040000,
        TRANSMIT_VIF @ 0x10 [22:19] = 0x0000000000780000,
        OPTIMAL_BW_RETRY_COUNT @ 0x10 [26:23] = 0x0000000007800000,
        FES_CONTINUATION_RATIO_THRESHOLD @ 0x10 [31:27] = 0x00000000f8000000,
        TRANSMIT_CCA_BITMAP @ 0x10 [63:32] = 0xffffffff00000000,
        TB_RANGING @ 0x18 [0:0] = 0x0000000000000001,
        RANGING_TRIGGER_SUBTYPE @ 0x18 [4:1] = 0x000000000000001e,
        MIN_CTS2SELF_COUNT @ 0x18 [8:5] = 0x00000000000001e0,
        MAX_CTS2SELF_COUNT @ 0x18 [12:9] = 0x0000000000001e00,
        WIFI_RADAR_ENABLE @ 0x18 [13:13] = 0x0000000000002000,
        RESERVED_6A @ 0x18 [31:14] = 0x00000000ffffc000,
        MONITOR_OVERRIDE_STA_31_0 @ 0x18 [63:32] = 0xffffffff00000000,
        MONITOR_OVERRIDE_STA_36_32 @ 0x20 [4:0] = 0x000000000000001f,
        RESERVED_8A @ 0x20 [31:5] = 0x00000000ffffffe0,
        FW2SW_INFO @ 0x20 [63:32] = 0xffffffff00000000,
    }

    pub mod rx_mpdu_info [30; Dword] {
        RXPT_CLASSIFY_INFO_DETAILS_REO_DESTINATION_INDICATION @ 0x0 [4:0] = 0x0000001f,
        RXPT_CLASSIFY_INFO_DETAILS_LMAC_PEER_ID_MSB @ 0x0 [6:5] = 0x00000060,
        RXPT_CLASSIFY_INFO_DETAILS_USE_FLOW_ID_TOEPLITZ_CLFY @ 0x0 [7:7] = 0x00000080,
        RXPT_CLASSIFY_INFO_DETAILS_PKT_SELECTION_FP_UCAST_DATA @ 0x0 [8:8] = 0x00000100,
        RXPT_CLASSIFY_INFO_DETAILS_PKT_SELECTION_FP_MCAST_DATA @ 0x0 [9:9] = 0x00000200,
        RXPT_CLASSIFY_INFO_DETAILS_PKT_SELECTION_FP_1000 @ 0x0 [10:10] = 0x00000400,
        RXPT_CLASSIFY_INFO_DETAILS_RXDMA0_SOURCE_RING_SELECTION @ 0x0 [13:11] = 0x00003800,
        RXPT_CLASSIFY_INFO_DETAILS_RXDMA0_DESTINATION_RING_SELECTION @ 0x0 [16:14] = 0x0001c000,
        RXPT_CLASSIFY_INFO_DETAILS_MCAST_ECHO_DROP_ENABLE @ 0x0 [17:17] = 0x00020000,
        RXPT_CLASSIFY_INFO_DETAILS_WDS_LEARNING_DETECT_EN @ 0x0 [18:18] = 0x00040000,
        RXPT_CLASSIFY_INFO_DETAILS_INTRABSS_CHECK_EN @ 0x0 [19:19] = 0x00080000,
        RXPT_CLASSIFY_INFO_DETAILS_USE_PPE @ 0x0 [20:20] = 0x00100000,
        RXPT_CLASSIFY_INFO_DETAILS_PPE_ROUTING_ENABLE @ 0x0 [21:21] = 0x00200000,
        RXPT_CLASSIFY_INFO_DETAILS_RESERVED_0B @ 0x0 [31:22] = 0xffc00000,
        RX_REO_QUEUE_DESC_ADDR_31_0 @ 0x4 [31:0] = 0xffffffff,
        RX_REO_QUEUE_DESC_ADDR_39_32 @ 0x8 [7:0] = 0x000000ff,
        RECEIVE_QUEUE_NUMBER @ 0x8 [23:8] = 0x00ffff00,
        PRE_DELIM_ERR_WARNING @ 0x8 [24:24] = 0x01000000,
        FIRST_DELIM_ERR @ 0x8 [25:25] = 0x02000000,
        RESERVED_2A @ 0x8 [31:26] = 0xfc000000,
        PN_31_0 @ 0xc [31:0] = 0xffffffff,
        PN_63_32 @ 0x10 [31:0] = 0xffffffff,
        PN_95_64 @ 0x14 [31:0] = 0xffffffff,
        PN_127_96 @ 0x18 [31:0] = 0xffffffff,
        EPD_EN @ 0x1c [0:0] = 0x00000001,
        ALL_FRAMES_SHALL_BE_ENCRYPTED @ 0x1c [1:1] = 0x00000002,
        ENCRYPT_TYPE @ 0x1c [5:2] = 0x0000003c,
        WEP_KEY_WIDTH_FOR_VARIABLE_KEY @ 0x1c [7:6] = 0x000000c0,
        MESH_STA @ 0x1c [9:8] = 0x00000300,
        BSSID_HIT @ 0x1c [10:10] = 0x00000400,
        BSSID_NUMBER @ 0x1c [14:11] = 0x00007800,
        TID @ 0x1c [18:15] = 0x00078000,
        RESERVED_7A @ 0x1c [31:19] = 0xfff80000,
        PEER_META_DATA @ 0x20 [31:0] = 0xffffffff,
        RXPCU_MPDU_FILTER_IN_CATEGORY @ 0x24 [1:0] = 0x00000003,
        SW_FRAME_GROUP_ID @ 0x24 [8:2] = 0x000001fc,
        NDP_FRAME @ 0x24 [9:9] = 0x00000200,
        PHY_ERR @ 0x24 [10:10] = 0x00000400,
        PHY_ERR_DURING_MPDU_HEADER @ 0x24 [11:11] = 0x00000800,
        PROTOCOL_VERSION_ERR @ 0x24 [12:12] = 0x00001000,
        AST_BASED_LOOKUP_VALID @ 0x24 [13:13] = 0x00002000,
        RANGING @ 0x24 [14:14] = 0x00004000,
        RESERVED_9A @ 0x24 [15:15] = 0x00008000,
        PHY_PPDU_ID @ 0x24 [31:16] = 0xffff0000,
        AST_INDEX @ 0x28 [15:0] = 0x0000ffff,
        SW_PEER_ID @ 0x28 [31:16] = 0xffff0000,
        MPDU_FRAME_CONTROL_VALID @ 0x2c [0:0] = 0x00000001,
        MPDU_DURATION_VALID @ 0x2c [1:1] = 0x00000002,
        MAC_ADDR_AD1_VALID @ 0x2c [2:2] = 0x00000004,
        MAC_ADDR_AD2_VALID @ 0x2c [3:3] = 0x00000008,
        MAC_ADDR_AD3_VALID @ 0x2c [4:4] = 0x00000010,
        MAC_ADDR_AD4_VALID @ 0x2c [5:5] = 0x00000020,
        MPDU_SEQUENCE_CONTROL_VALID @ 0x2c [6:6] = 0x00000040,
        MPDU_QOS_CONTROL_VALID @ 0x2c [7:7] = 0x00000080,
        MPDU_HT_CONTROL_VALID @ 0x2c [8:8] = 0x00000100,
        FRAME_ENCRYPTION_INFO_VALID @ 0x2c [9:9] = 0x00000200,
        MPDU_FRAGMENT_NUMBER @ 0x2c [13:10] = 0x00003c00,
        MORE_FRAGMENT_FLAG @ 0x2c [14:14] = 0x00004000,
        RESERVED_11A @ 0x2c [15:15] = 0x00008000,
        FR_DS @ 0x2c [16:16] = 0x00010000,
        TO_DS @ 0x2c [17:17] = 0x00020000,
        ENCRYPTED @ 0x2c [18:18] = 0x00040000,
        MPDU_RETRY @ 0x2c [19:19] = 0x00080000,
        MPDU_SEQUENCE_NUMBER @ 0x2c [31:20] = 0xfff00000,
        KEY_ID_OCTET @ 0x30 [7:0] = 0x000000ff,
        NEW_PEER_ENTRY @ 0x30 [8:8] = 0x00000100,
        DECRYPT_NEEDED @ 0x30 [9:9] = 0x00000200,
        DECAP_TYPE @ 0x30 [11:10] = 0x00000c00,
        RX_INSERT_VLAN_C_TAG_PADDING @ 0x30 [12:12] = 0x00001000,
        RX_INSERT_VLAN_S_TAG_PADDING @ 0x30 [13:13] = 0x00002000,
        STRIP_VLAN_C_TAG_DECAP @ 0x30 [14:14] = 0x00004000,
        STRIP_VLAN_S_TAG_DECAP @ 0x30 [15:15] = 0x00008000,
        PRE_DELIM_COUNT @ 0x30 [27:16] = 0x0fff0000,
        AMPDU_FLAG @ 0x30 [28:28] = 0x10000000,
        BAR_FRAME @ 0x30 [29:29] = 0x20000000,
        RAW_MPDU @ 0x30 [30:30] = 0x40000000,
        RESERVED_12 @ 0x30 [31:31] = 0x80000000,
        MPDU_LENGTH @ 0x34 [13:0] = 0x00003fff,
        FIRST_MPDU @ 0x34 [14:14] = 0x00004000,
        MCAST_BCAST @ 0x34 [15:15] = 0x00008000,
        AST_INDEX_NOT_FOUND @ 0x34 [16:16] = 0x00010000,
        AST_INDEX_TIMEOUT @ 0x34 [17:17] = 0x00020000,
        POWER_MGMT @ 0x34 [18:18] = 0x00040000,
        NON_QOS @ 0x34 [19:19] = 0x00080000,
        NULL_DATA @ 0x34 [20:20] = 0x00100000,
        MGMT_TYPE @ 0x34 [21:21] = 0x00200000,
        CTRL_TYPE @ 0x34 [22:22] = 0x00400000,
        MORE_DATA @ 0x34 [23:23] = 0x00800000,
        EOSP @ 0x34 [24:24] = 0x01000000,
        FRAGMENT_FLAG @ 0x34 [25:25] = 0x02000000,
        ORDER @ 0x34 [26:26] = 0x04000000,
        U_APSD_TRIGGER @ 0x34 [27:27] = 0x08000000,
        ENCRYPT_REQUIRED @ 0x34 [28:28] = 0x10000000,
        DIRECTED @ 0x34 [29:29] = 0x20000000,
        AMSDU_PRESENT @ 0x34 [30:30] = 0x40000000,
        RESERVED_13 @ 0x34 [31:31] = 0x80000000,
        MPDU_FRAME_CONTROL_FIELD @ 0x38 [15:0] = 0x0000ffff,
        MPDU_DURATION_FIELD @ 0x38 [31:16] = 0xffff0000,
        MAC_ADDR_AD1_31_0 @ 0x3c [31:0] = 0xffffffff,
        MAC_ADDR_AD1_47_32 @ 0x40 [15:0] = 0x0000ffff,
        MAC_ADDR_AD2_15_0 @ 0x40 [31:16] = 0xffff0000,
        MAC_ADDR_AD2_47_16 @ 0x44 [31:0] = 0xffffffff,
        MAC_ADDR_AD3_31_0 @ 0x48 [31:0] = 0xffffffff,
        MAC_ADDR_AD3_47_32 @ 0x4c [15:0] = 0x0000ffff,
        MPDU_SEQUENCE_CONTROL_FIELD @ 0x4c [31:16] = 0xffff0000,
        MAC_ADDR_AD4_31_0 @ 0x50 [31:0] = 0xffffffff,
        MAC_ADDR_AD4_47_32 @ 0x54 [15:0] = 0x0000ffff,
        MPDU_QOS_CONTROL_FIELD @ 0x54 [31:16] = 0xffff0000,
        MPDU_HT_CONTROL_FIELD @ 0x58 [31:0] = 0xffffffff,
        VDEV_ID @ 0x5c [7:0] = 0x000000ff,
        SERVICE_CODE @ 0x5c [16:8] = 0x0001ff00,
        PRIORITY_VALID @ 0x5c [17:17] = 0x00020000,
        SRC_INFO @ 0x5c [29:18] = 0x3ffc0000,
        RESERVED_23A @ 0x5c [30:30] = 0x40000000,
        MULTI_LINK_ADDR_AD1_AD2_VALID @ 0x5c [31:31] = 0x80000000,
        MULTI_LINK_ADDR_AD1_31_0 @ 0x60 [31:0] = 0xffffffff,
        MULTI_LINK_ADDR_AD1_47_32 @ 0x64 [15:0] = 0x0000ffff,
        MULTI_LINK_ADDR_AD2_15_0 @ 0x64 [31:16] = 0xffff0000,
        MULTI_LINK_ADDR_AD2_47_16 @ 0x68 [31:0] = 0xffffffff,
        AUTHORIZED_TO_SEND_WDS @ 0x6c [0:0] = 0x00000001,
        RESERVED_27A @ 0x6c [31:1] = 0xfffffffe,
        RESERVED_28A @ 0x70 [31:0] = 0xffffffff,
        RESERVED_29A @ 0x74 [31:0] = 0xffffffff,
    }
}

pub const DESCRIPTORS: &[wlan_hwio::DescriptorLayout] = &[
    pcu_ppdu_setup_init::LAYOUT,
    pdg_response_rate_setting::LAYOUT,
    response_end_status::LAYOUT,
    tx_fes_status_end::LAYOUT,
    tx_fes_setup::LAYOUT,
    rx_mpdu_info::LAYOUT,
];
