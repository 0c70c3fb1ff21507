// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated TLV descriptor layouts for peach v1.

use wlan_hwio::tlv_descriptor;

tlv_descriptor! {
    pub mod pcu_ppdu_setup_init [58; Dword] {
        MEDIUM_PROT_TYPE @ 0x0 [2:0] = 0x00000007,
        RESPONSE_TYPE @ 0x0 [7:3] = 0x000000f8,
        RESPONSE_INFO_PART2_REQUIRED @ 0x0 [8:8] = 0x00000100,
        RESPONSE_TO_RESPONSE @ 0x0 [11:9] = 0x00000e00,
        MBA_USER_ORDER @ 0x0 [13:12] = 0x00003000,
        EXPECTED_MBA_SIZE @ 0x0 [24:14] = 0x01ffc000,
        REQUIRED_UL_MU_RESP_USER_COUNT @ 0x0 [30:25] = 0x7e000000,
        TRANSMITTED_BSSID_CHECK_EN @ 0x0 [31:31] = 0x80000000,
        MPROT_REQUIRED_BW1 @ 0x4 [0:0] = 0x00000001,
        MPROT_REQUIRED_BW20 @ 0x4 [1:1] = 0x00000002,
        MPROT_REQUIRED_BW40 @ 0x4 [2:2] = 0x00000004,
        MPROT_REQUIRED_BW80 @ 0x4 [3:3] = 0x00000008,
        MPROT_REQUIRED_BW160 @ 0x4 [4:4] = 0x00000010,
        MPROT_REQUIRED_BW240 @ 0x4 [5:5] = 0x00000020,
        MPROT_REQUIRED_BW320 @ 0x4 [6:6] = 0x00000040,
        PPDU_ALLOWED_BW1 @ 0x4 [7:7] = 0x00000080,
        PPDU_ALLOWED_BW20 @ 0x4 [8:8] = 0x00000100,
        PPDU_ALLOWED_BW40 @ 0x4 [9:9] = 0x00000200,
        PPDU_ALLOWED_BW80 @ 0x4 [10:10] = 0x00000400,
        PPDU_ALLOWED_BW160 @ 0x4 [11:11] = 0x00000800,
        PPDU_ALLOWED_BW240 @ 0x4 [12:12] = 0x00001000,
        PPDU_ALLOWED_BW320 @ 0x4 [13:13] = 0x00002000,
        SET_FC_PWR_MGT @ 0x4 [14:14] = 0x00004000,
        USE_CTS_DURATION_FOR_DATA_TX @ 0x4 [15:15] = 0x00008000,
        UPDATE_TIMESTAMP_64 @ 0x4 [16:16] = 0x00010000,
        UPDATE_TIMESTAMP_32_LOWER @ 0x4 [17:17] = 0x00020000,
        UPDATE_TIMESTAMP_32_UPPER @ 0x4 [18:18] = 0x00040000,
        RESERVED_1A @ 0x4 [31:19] = 0xfff80000,
        INSERT_TIMESTAMP_OFFSET_0 @ 0x8 [15:0] = 0x0000ffff,
        INSERT_TIMESTAMP_OFFSET_1 @ 0x8 [31:16] = 0xffff0000,
        MAX_BW40_TRY_COUNT @ 0xc [3:0] = 0x0000000f,
        MAX_BW80_TRY_COUNT @ 0xc [7:4] = 0x000000f0,
        MAX_BW160_TRY_COUNT @ 0xc [11:8] = 0x00000f00,
        MAX_BW240_TRY_COUNT @ 0xc [15:12] = 0x0000f000,
        MAX_BW320_TRY_COUNT @ 0xc [19:16] = 0x000f0000,
        INSERT_WUR_TIMESTAMP_OFFSET @ 0xc [25:20] = 0x03f00000,
        UPDATE_WUR_TIMESTAMP @ 0xc [26:26] = 0x04000000,
        WUR_EMBEDDED_BSSID_PRESENT @ 0xc [27:27] = 0x08000000,
        INSERT_WUR_FCS @ 0xc [28:28] = 0x10000000,
        RESERVED_3B @ 0xc [31:29] = 0xe0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_0A @ 0x10 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_ANTENNA_SECTOR_CTRL @ 0x10 [24:1] = 0x01fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_PKT_TYPE @ 0x10 [28:25] = 0x1e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_SMOOTHING @ 0x10 [29:29] = 0x20000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_LDPC @ 0x10 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_STBC @ 0x10 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_TX_PWR @ 0x14 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_MIN_TX_PWR @ 0x14 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_NSS @ 0x14 [18:16] = 0x00070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_TX_CHAIN_MASK @ 0x14 [26:19] = 0x07f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_BW @ 0x14 [29:27] = 0x38000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_STF_LTF_3DB_BOOST @ 0x14 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_FORCE_EXTRA_SYMBOL @ 0x14 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_RATE_MCS @ 0x18 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_NSS @ 0x18 [6:4] = 0x00000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DPD_ENABLE @ 0x18 [7:7] = 0x00000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_PWR @ 0x18 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MIN_TX_PWR @ 0x18 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_CHAIN_MASK @ 0x18 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_3A @ 0x1c [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_SGI @ 0x1c [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RATE_MCS @ 0x1c [13:10] = 0x00003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_3B @ 0x1c [15:14] = 0x0000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_TX_PWR_1 @ 0x1c [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_ALT_TX_PWR_1 @ 0x1c [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_AGGREGATION @ 0x20 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_BSS_COLOR_ID @ 0x20 [6:1] = 0x0000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_SPATIAL_REUSE @ 0x20 [10:7] = 0x00000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_CP_LTF_SIZE @ 0x20 [12:11] = 0x00001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_DCM @ 0x20 [13:13] = 0x00002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_DOPPLER_INDICATION @ 0x20 [14:14] = 0x00004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_SU_EXTENDED @ 0x20 [15:15] = 0x00008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_MIN_PACKET_EXTENSION @ 0x20 [17:16] = 0x00030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_NSS @ 0x20 [20:18] = 0x001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_CONTENT @ 0x20 [21:21] = 0x00200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_LTF_SIZE @ 0x20 [23:22] = 0x00c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_CHAIN_CSD_EN @ 0x20 [24:24] = 0x01000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_PE_CHAIN_CSD_EN @ 0x20 [25:25] = 0x02000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_DL_UL_FLAG @ 0x20 [26:26] = 0x04000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_4A @ 0x20 [31:27] = 0xf8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_EXT_RU_START_INDEX @ 0x24 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11AX_EXT_RU_SIZE @ 0x24 [7:4] = 0x000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_EHT_DUPLICATE_MODE @ 0x24 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_HE_SIGB_DCM @ 0x24 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_HE_SIGB_0_MCS @ 0x24 [13:11] = 0x00003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_NUM_HE_SIGB_SYM @ 0x24 [18:14] = 0x0007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_REQUIRED_RESPONSE_TIME_SOURCE @ 0x24 [19:19] = 0x00080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_RESERVED_5A @ 0x24 [25:20] = 0x03f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x24 [31:26] = 0xfc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x28 [9:0] = 0x000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x28 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x28 [11:11] = 0x00000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x28 [12:12] = 0x00001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x28 [15:13] = 0x0000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_REQUIRED_RESPONSE_TIME @ 0x28 [27:16] = 0x0fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW20_DOT11BE_PARAMS_PLACEHOLDER @ 0x28 [31:28] = 0xf0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_0A @ 0x2c [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_ANTENNA_SECTOR_CTRL @ 0x2c [24:1] = 0x01fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_PKT_TYPE @ 0x2c [28:25] = 0x1e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_SMOOTHING @ 0x2c [29:29] = 0x20000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_LDPC @ 0x2c [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_STBC @ 0x2c [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_TX_PWR @ 0x30 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_MIN_TX_PWR @ 0x30 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_NSS @ 0x30 [18:16] = 0x00070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_TX_CHAIN_MASK @ 0x30 [26:19] = 0x07f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_BW @ 0x30 [29:27] = 0x38000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_STF_LTF_3DB_BOOST @ 0x30 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_FORCE_EXTRA_SYMBOL @ 0x30 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_RATE_MCS @ 0x34 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_NSS @ 0x34 [6:4] = 0x00000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DPD_ENABLE @ 0x34 [7:7] = 0x00000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_PWR @ 0x34 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MIN_TX_PWR @ 0x34 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_CHAIN_MASK @ 0x34 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_3A @ 0x38 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_SGI @ 0x38 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RATE_MCS @ 0x38 [13:10] = 0x00003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_3B @ 0x38 [15:14] = 0x0000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_TX_PWR_1 @ 0x38 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_ALT_TX_PWR_1 @ 0x38 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_AGGREGATION @ 0x3c [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_BSS_COLOR_ID @ 0x3c [6:1] = 0x0000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_SPATIAL_REUSE @ 0x3c [10:7] = 0x00000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_CP_LTF_SIZE @ 0x3c [12:11] = 0x00001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_DCM @ 0x3c [13:13] = 0x00002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_DOPPLER_INDICATION @ 0x3c [14:14] = 0x00004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_SU_EXTENDED @ 0x3c [15:15] = 0x00008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_MIN_PACKET_EXTENSION @ 0x3c [17:16] = 0x00030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_NSS @ 0x3c [20:18] = 0x001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_CONTENT @ 0x3c [21:21] = 0x00200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_LTF_SIZE @ 0x3c [23:22] = 0x00c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_CHAIN_CSD_EN @ 0x3c [24:24] = 0x01000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_PE_CHAIN_CSD_EN @ 0x3c [25:25] = 0x02000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_DL_UL_FLAG @ 0x3c [26:26] = 0x04000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_4A @ 0x3c [31:27] = 0xf8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_EXT_RU_START_INDEX @ 0x40 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11AX_EXT_RU_SIZE @ 0x40 [7:4] = 0x000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_EHT_DUPLICATE_MODE @ 0x40 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_HE_SIGB_DCM @ 0x40 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_HE_SIGB_0_MCS @ 0x40 [13:11] = 0x00003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_NUM_HE_SIGB_SYM @ 0x40 [18:14] = 0x0007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_REQUIRED_RESPONSE_TIME_SOURCE @ 0x40 [19:19] = 0x00080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_RESERVED_5A @ 0x40 [25:20] = 0x03f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x40 [31:26] = 0xfc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x44 [9:0] = 0x000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x44 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x44 [11:11] = 0x00000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x44 [12:12] = 0x00001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x44 [15:13] = 0x0000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_REQUIRED_RESPONSE_TIME @ 0x44 [27:16] = 0x0fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW40_DOT11BE_PARAMS_PLACEHOLDER @ 0x44 [31:28] = 0xf0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_0A @ 0x48 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_ANTENNA_SECTOR_CTRL @ 0x48 [24:1] = 0x01fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_PKT_TYPE @ 0x48 [28:25] = 0x1e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_SMOOTHING @ 0x48 [29:29] = 0x20000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_LDPC @ 0x48 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_STBC @ 0x48 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_TX_PWR @ 0x4c [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_MIN_TX_PWR @ 0x4c [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_NSS @ 0x4c [18:16] = 0x00070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_TX_CHAIN_MASK @ 0x4c [26:19] = 0x07f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_BW @ 0x4c [29:27] = 0x38000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_STF_LTF_3DB_BOOST @ 0x4c [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_FORCE_EXTRA_SYMBOL @ 0x4c [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_RATE_MCS @ 0x50 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_NSS @ 0x50 [6:4] = 0x00000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DPD_ENABLE @ 0x50 [7:7] = 0x00000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_PWR @ 0x50 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MIN_TX_PWR @ 0x50 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_CHAIN_MASK @ 0x50 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_3A @ 0x54 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_SGI @ 0x54 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RATE_MCS @ 0x54 [13:10] = 0x00003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_3B @ 0x54 [15:14] = 0x0000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_TX_PWR_1 @ 0x54 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_ALT_TX_PWR_1 @ 0x54 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_AGGREGATION @ 0x58 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_BSS_COLOR_ID @ 0x58 [6:1] = 0x0000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_SPATIAL_REUSE @ 0x58 [10:7] = 0x00000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_CP_LTF_SIZE @ 0x58 [12:11] = 0x00001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_DCM @ 0x58 [13:13] = 0x00002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_DOPPLER_INDICATION @ 0x58 [14:14] = 0x00004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_SU_EXTENDED @ 0x58 [15:15] = 0x00008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_MIN_PACKET_EXTENSION @ 0x58 [17:16] = 0x00030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_NSS @ 0x58 [20:18] = 0x001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_CONTENT @ 0x58 [21:21] = 0x00200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_LTF_SIZE @ 0x58 [23:22] = 0x00c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_CHAIN_CSD_EN @ 0x58 [24:24] = 0x01000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_PE_CHAIN_CSD_EN @ 0x58 [25:25] = 0x02000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_DL_UL_FLAG @ 0x58 [26:26] = 0x04000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_4A @ 0x58 [31:27] = 0xf8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_EXT_RU_START_INDEX @ 0x5c [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11AX_EXT_RU_SIZE @ 0x5c [7:4] = 0x000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_EHT_DUPLICATE_MODE @ 0x5c [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_HE_SIGB_DCM @ 0x5c [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_HE_SIGB_0_MCS @ 0x5c [13:11] = 0x00003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_NUM_HE_SIGB_SYM @ 0x5c [18:14] = 0x0007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_REQUIRED_RESPONSE_TIME_SOURCE @ 0x5c [19:19] = 0x00080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_RESERVED_5A @ 0x5c [25:20] = 0x03f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x5c [31:26] = 0xfc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x60 [9:0] = 0x000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x60 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x60 [11:11] = 0x00000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x60 [12:12] = 0x00001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x60 [15:13] = 0x0000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_REQUIRED_RESPONSE_TIME @ 0x60 [27:16] = 0x0fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW80_DOT11BE_PARAMS_PLACEHOLDER @ 0x60 [31:28] = 0xf0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_0A @ 0x64 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_ANTENNA_SECTOR_CTRL @ 0x64 [24:1] = 0x01fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_PKT_TYPE @ 0x64 [28:25] = 0x1e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_SMOOTHING @ 0x64 [29:29] = 0x20000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_LDPC @ 0x64 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_STBC @ 0x64 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_TX_PWR @ 0x68 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_MIN_TX_PWR @ 0x68 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_NSS @ 0x68 [18:16] = 0x00070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_TX_CHAIN_MASK @ 0x68 [26:19] = 0x07f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_BW @ 0x68 [29:27] = 0x38000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_STF_LTF_3DB_BOOST @ 0x68 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_FORCE_EXTRA_SYMBOL @ 0x68 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_RATE_MCS @ 0x6c [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_NSS @ 0x6c [6:4] = 0x00000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DPD_ENABLE @ 0x6c [7:7] = 0x00000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_PWR @ 0x6c [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MIN_TX_PWR @ 0x6c [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_CHAIN_MASK @ 0x6c [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_3A @ 0x70 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_SGI @ 0x70 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RATE_MCS @ 0x70 [13:10] = 0x00003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_3B @ 0x70 [15:14] = 0x0000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_TX_PWR_1 @ 0x70 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_ALT_TX_PWR_1 @ 0x70 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_AGGREGATION @ 0x74 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_BSS_COLOR_ID @ 0x74 [6:1] = 0x0000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_SPATIAL_REUSE @ 0x74 [10:7] = 0x00000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_CP_LTF_SIZE @ 0x74 [12:11] = 0x00001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_DCM @ 0x74 [13:13] = 0x00002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_DOPPLER_INDICATION @ 0x74 [14:14] = 0x00004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_SU_EXTENDED @ 0x74 [15:15] = 0x00008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_MIN_PACKET_EXTENSION @ 0x74 [17:16] = 0x00030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_NSS @ 0x74 [20:18] = 0x001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_CONTENT @ 0x74 [21:21] = 0x00200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_LTF_SIZE @ 0x74 [23:22] = 0x00c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_CHAIN_CSD_EN @ 0x74 [24:24] = 0x01000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_PE_CHAIN_CSD_EN @ 0x74 [25:25] = 0x02000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_DL_UL_FLAG @ 0x74 [26:26] = 0x04000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_4A @ 0x74 [31:27] = 0xf8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_EXT_RU_START_INDEX @ 0x78 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11AX_EXT_RU_SIZE @ 0x78 [7:4] = 0x000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_EHT_DUPLICATE_MODE @ 0x78 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_HE_SIGB_DCM @ 0x78 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_HE_SIGB_0_MCS @ 0x78 [13:11] = 0x00003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_NUM_HE_SIGB_SYM @ 0x78 [18:14] = 0x0007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_REQUIRED_RESPONSE_TIME_SOURCE @ 0x78 [19:19] = 0x00080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_RESERVED_5A @ 0x78 [25:20] = 0x03f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x78 [31:26] = 0xfc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x7c [9:0] = 0x000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x7c [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x7c [11:11] = 0x00000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x7c [12:12] = 0x00001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x7c [15:13] = 0x0000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_REQUIRED_RESPONSE_TIME @ 0x7c [27:16] = 0x0fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW160_DOT11BE_PARAMS_PLACEHOLDER @ 0x7c [31:28] = 0xf0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_0A @ 0x80 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_ANTENNA_SECTOR_CTRL @ 0x80 [24:1] = 0x01fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_PKT_TYPE @ 0x80 [28:25] = 0x1e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_SMOOTHING @ 0x80 [29:29] = 0x20000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_LDPC @ 0x80 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_STBC @ 0x80 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_TX_PWR @ 0x84 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_MIN_TX_PWR @ 0x84 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_NSS @ 0x84 [18:16] = 0x00070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_TX_CHAIN_MASK @ 0x84 [26:19] = 0x07f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_BW @ 0x84 [29:27] = 0x38000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_STF_LTF_3DB_BOOST @ 0x84 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_FORCE_EXTRA_SYMBOL @ 0x84 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_RATE_MCS @ 0x88 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_NSS @ 0x88 [6:4] = 0x00000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DPD_ENABLE @ 0x88 [7:7] = 0x00000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_PWR @ 0x88 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MIN_TX_PWR @ 0x88 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_CHAIN_MASK @ 0x88 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_3A @ 0x8c [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_SGI @ 0x8c [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RATE_MCS @ 0x8c [13:10] = 0x00003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_3B @ 0x8c [15:14] = 0x0000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_TX_PWR_1 @ 0x8c [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_ALT_TX_PWR_1 @ 0x8c [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_AGGREGATION @ 0x90 [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_BSS_COLOR_ID @ 0x90 [6:1] = 0x0000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_SPATIAL_REUSE @ 0x90 [10:7] = 0x00000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_CP_LTF_SIZE @ 0x90 [12:11] = 0x00001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_DCM @ 0x90 [13:13] = 0x00002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_DOPPLER_INDICATION @ 0x90 [14:14] = 0x00004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_SU_EXTENDED @ 0x90 [15:15] = 0x00008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_MIN_PACKET_EXTENSION @ 0x90 [17:16] = 0x00030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_NSS @ 0x90 [20:18] = 0x001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_CONTENT @ 0x90 [21:21] = 0x00200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_LTF_SIZE @ 0x90 [23:22] = 0x00c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_CHAIN_CSD_EN @ 0x90 [24:24] = 0x01000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_PE_CHAIN_CSD_EN @ 0x90 [25:25] = 0x02000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_DL_UL_FLAG @ 0x90 [26:26] = 0x04000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_4A @ 0x90 [31:27] = 0xf8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_EXT_RU_START_INDEX @ 0x94 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11AX_EXT_RU_SIZE @ 0x94 [7:4] = 0x000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_EHT_DUPLICATE_MODE @ 0x94 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_HE_SIGB_DCM @ 0x94 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_HE_SIGB_0_MCS @ 0x94 [13:11] = 0x00003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_NUM_HE_SIGB_SYM @ 0x94 [18:14] = 0x0007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_REQUIRED_RESPONSE_TIME_SOURCE @ 0x94 [19:19] = 0x00080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_RESERVED_5A @ 0x94 [25:20] = 0x03f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0x94 [31:26] = 0xfc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0x98 [9:0] = 0x000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0x98 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0x98 [11:11] = 0x00000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0x98 [12:12] = 0x00001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0x98 [15:13] = 0x0000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_REQUIRED_RESPONSE_TIME @ 0x98 [27:16] = 0x0fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW240_DOT11BE_PARAMS_PLACEHOLDER @ 0x98 [31:28] = 0xf0000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_0A @ 0x9c [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_ANTENNA_SECTOR_CTRL @ 0x9c [24:1] = 0x01fffffe,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_PKT_TYPE @ 0x9c [28:25] = 0x1e000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_SMOOTHING @ 0x9c [29:29] = 0x20000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_LDPC @ 0x9c [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_STBC @ 0x9c [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_TX_PWR @ 0xa0 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_MIN_TX_PWR @ 0xa0 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_NSS @ 0xa0 [18:16] = 0x00070000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_TX_CHAIN_MASK @ 0xa0 [26:19] = 0x07f80000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_BW @ 0xa0 [29:27] = 0x38000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_STF_LTF_3DB_BOOST @ 0xa0 [30:30] = 0x40000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_FORCE_EXTRA_SYMBOL @ 0xa0 [31:31] = 0x80000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_RATE_MCS @ 0xa4 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_NSS @ 0xa4 [6:4] = 0x00000070,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DPD_ENABLE @ 0xa4 [7:7] = 0x00000080,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_PWR @ 0xa4 [15:8] = 0x0000ff00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MIN_TX_PWR @ 0xa4 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_CHAIN_MASK @ 0xa4 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_3A @ 0xa8 [7:0] = 0x000000ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_SGI @ 0xa8 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RATE_MCS @ 0xa8 [13:10] = 0x00003c00,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_3B @ 0xa8 [15:14] = 0x0000c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_TX_PWR_1 @ 0xa8 [23:16] = 0x00ff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_ALT_TX_PWR_1 @ 0xa8 [31:24] = 0xff000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_AGGREGATION @ 0xac [0:0] = 0x00000001,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_BSS_COLOR_ID @ 0xac [6:1] = 0x0000007e,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_SPATIAL_REUSE @ 0xac [10:7] = 0x00000780,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_CP_LTF_SIZE @ 0xac [12:11] = 0x00001800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_DCM @ 0xac [13:13] = 0x00002000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_DOPPLER_INDICATION @ 0xac [14:14] = 0x00004000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_SU_EXTENDED @ 0xac [15:15] = 0x00008000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_MIN_PACKET_EXTENSION @ 0xac [17:16] = 0x00030000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_NSS @ 0xac [20:18] = 0x001c0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_CONTENT @ 0xac [21:21] = 0x00200000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_LTF_SIZE @ 0xac [23:22] = 0x00c00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_CHAIN_CSD_EN @ 0xac [24:24] = 0x01000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_PE_CHAIN_CSD_EN @ 0xac [25:25] = 0x02000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_DL_UL_FLAG @ 0xac [26:26] = 0x04000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_4A @ 0xac [31:27] = 0xf8000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_EXT_RU_START_INDEX @ 0xb0 [3:0] = 0x0000000f,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11AX_EXT_RU_SIZE @ 0xb0 [7:4] = 0x000000f0,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_EHT_DUPLICATE_MODE @ 0xb0 [9:8] = 0x00000300,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_HE_SIGB_DCM @ 0xb0 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_HE_SIGB_0_MCS @ 0xb0 [13:11] = 0x00003800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_NUM_HE_SIGB_SYM @ 0xb0 [18:14] = 0x0007c000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_REQUIRED_RESPONSE_TIME_SOURCE @ 0xb0 [19:19] = 0x00080000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_RESERVED_5A @ 0xb0 [25:20] = 0x03f00000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_U_SIG_PUNCTURE_PATTERN_ENCODING @ 0xb0 [31:26] = 0xfc000000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID @ 0xb4 [9:0] = 0x000003ff,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_BLOCK_SELF_ML_SYNC @ 0xb4 [10:10] = 0x00000400,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_BLOCK_PARTNER_ML_SYNC @ 0xb4 [11:11] = 0x00000800,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_NSTR_MLO_STA_ID_VALID @ 0xb4 [12:12] = 0x00001000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_MLO_STA_ID_DETAILS_RX_RESERVED_0A @ 0xb4 [15:13] = 0x0000e000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_REQUIRED_RESPONSE_TIME @ 0xb4 [27:16] = 0x0fff0000,
        RESPONSE_TO_RESPONSE_RATE_INFO_BW320_DOT11BE_PARAMS_PLACEHOLDER @ 0xb4 [31:28] = 0xf0000000,
        R2R_HW_RESPONSE_TX_DURATION @ 0xb8 [15:0] = 0x0000ffff,
        R2R_RX_DURATION_FIELD @ 0xb8 [31:16] = 0xffff0000,
        R2R_GROUP_ID @ 0xbc [5:0] = 0x0000003f,
        R2R_RESPONSE_FRAME_TYPE @ 0xbc [9:6] = 0x000003c0,
        R2R_STA_PARTIAL_AID @ 0xbc [20:10] = 0x001ffc00,
        USE_ADDRESS_FIELDS_FOR_PROTECTION @ 0xbc [21:21] = 0x00200000,
        R2R_SET_REQUIRED_RESPONSE_TIME @ 0xbc [22:22] = 0x00400000,
        RESERVED_29A @ 0xbc [25:23] = 0x03800000,
        R2R_BW20_ACTIVE_CHANNEL @ 0xbc [28:26] = 0x1c000000,
        R2R_BW40_ACTIVE_CHANNEL @ 0xbc [31:29] = 0xe0000000,
        R2R_BW80_ACTIVE_CHANNEL @ 0xc0 [2:0] = 0x00000007,
        R2R_BW160_ACTIVE_CHANNEL @ 0xc0 [5:3] = 0x00000038,
        R2R_BW240_ACTIVE_CHANNEL @ 0xc0 [8:6] = 0x000001c0,
        R2R_BW320_ACTIVE_CHANNEL @ 0xc0 [11:9] = 0x00000e00,
        R2R_BW20 @ 0xc0 [14:12] = 0x00007000,
        R2R_BW40 @ 0xc0 [17:15] = 0x00038000,
        R2R_BW80 @ 0xc0 [20:18] = 0x001c0000,
        R2R_BW160 @ 0xc0 [23:21] = 0x00e00000,
        R2R_BW240 @ 0xc0 [26:24] = 0x07000000,
        R2R_BW320 @ 0xc0 [29:27] = 0x38000000,
        RESERVED_30A @ 0xc0 [31:30] = 0xc0000000,
        MU_RESPONSE_EXPECTED_BITMAP_31_0 @ 0xc4 [31:0] = 0xffffffff,
        MU_RESPONSE_EXPECTED_BITMAP_36_32 @ 0xc8 [4:0] = 0x0000001f,
        MU_EXPECTED_RESPONSE_CBF_COUNT @ 0xc8 [10:5] = 0x000007e0,
        MU_EXPECTED_RESPONSE_STA_COUNT @ 0xc8 [16:11] = 0x0001f800,
        TRANSMIT_INCLUDES_MULTIDESTINATION @ 0xc8 [17:17] = 0x00020000,
        INSERT_PREV_TX_START_TIMING_INFO @ 0xc8 [18:18] = 0x00040000,
        INSERT_CURRENT_TX_START_TIMING_INFO @ 0xc8 [19:19] = 0x00080000,
        TX_START_TRANSMIT_TIME_BYTE_OFFSET @ 0xc8 [31:20] = 0xfff00000,
        PROTECTION_FRAME_AD1_31_0 @ 0xcc [31:0] = 0xffffffff,
        PROTECTION_FRAME_AD1_47_32 @ 0xd0 [15:0] = 0x0000ffff,
        PROTECTION_FRAME_AD2_15_0 @ 0xd0 [31:16] = 0xffff0000,
        PROTECTION_FRAME_AD2_47_16 @ 0xd4 [31:0] = 0xffffffff,
        DYNAMIC_MEDIUM_PROT_THRESHOLD @ 0xd8 [23:0] = 0x00ffffff,
        DYNAMIC_MEDIUM_PROT_TYPE @ 0xd8 [24:24] = 0x01000000,
        RESERVED_54A @ 0xd8 [31:25] = 0xfe000000,
        PROTECTION_FRAME_AD3_31_0 @ 0xdc [31:0] = 0xffffffff,
        PROTECTION_FRAME_AD3_47_32 @ 0xe0 [15:0] = 0x0000ffff,
        PROTECTION_FRAME_AD4_15_0 @ 0xe0 [31:16] = 0xffff0000,
        PROTECTION_FRAME_AD4_47_16 @ 0xe4 [31:0] = 0xffffffff,
    }

    pub mod mactx_phy_desc [4; Dword] {
        RESERVED_0A @ 0x0 [15:0] = 0x0000ffff,
        BF_TYPE @ 0x0 [17:16] = 0x00030000,
        WAIT_SIFS @ 0x0 [19:18] = 0x000c0000,
        DOT11B_PREAMBLE_TYPE @ 0x0 [20:20] = 0x00100000,
        PKT_TYPE @ 0x0 [24:21] = 0x01e00000,
        SU_OR_MU @ 0x0 [26:25] = 0x06000000,
        MU_TYPE @ 0x0 [27:27] = 0x08000000,
        BANDWIDTH @ 0x0 [30:28] = 0x70000000,
        CHANNEL_CAPTURE @ 0x0 [31:31] = 0x80000000,
        MCS @ 0x4 [3:0] = 0x0000000f,
        GLOBAL_OFDMA_MIMO_ENABLE @ 0x4 [4:4] = 0x00000010,
        RESERVED_1A @ 0x4 [5:5] = 0x00000020,
        STBC @ 0x4 [6:6] = 0x00000040,
        DOT11AX_SU_EXTENDED @ 0x4 [7:7] = 0x00000080,
        DOT11AX_TRIGGER_FRAME_EMBEDDED @ 0x4 [8:8] = 0x00000100,
        TX_PWR_SHARED @ 0x4 [16:9] = 0x0001fe00,
        TX_PWR_UNSHARED @ 0x4 [24:17] = 0x01fe0000,
        MEASURE_POWER @ 0x4 [25:25] = 0x02000000,
        TPC_GLUT_SELF_CAL @ 0x4 [26:26] = 0x04000000,
        BACK_TO_BACK_TRANSMISSION_EXPECTED @ 0x4 [27:27] = 0x08000000,
        HEAVY_CLIP_NSS @ 0x4 [30:28] = 0x70000000,
        TXBF_PER_PACKET_NO_CSD_NO_WALSH @ 0x4 [31:31] = 0x80000000,
        NDP @ 0x8 [1:0] = 0x00000003,
        UL_FLAG @ 0x8 [2:2] = 0x00000004,
        TRIGGERED @ 0x8 [3:3] = 0x00000008,
        AP_PKT_BW @ 0x8 [6:4] = 0x00000070,
        RU_POSITION_START @ 0x8 [14:7] = 0x00007f80,
        PCU_PPDU_SETUP_START_REASON @ 0x8 [17:15] = 0x00038000,
        TLV_SOURCE @ 0x8 [18:18] = 0x00040000,
        RESERVED_2A @ 0x8 [20:19] = 0x00180000,
        NSS @ 0x8 [23:21] = 0x00e00000,
        STREAM_OFFSET @ 0x8 [26:24] = 0x07000000,
        RESERVED_2B @ 0x8 [28:27] = 0x18000000,
        CLPC_ENABLE @ 0x8 [29:29] = 0x20000000,
        MU_NDP @ 0x8 [30:30] = 0x40000000,
        RESPONSE_EXPECTED @ 0x8 [31:31] = 0x80000000,
        RX_CHAIN_MASK @ 0xc [7:0] = 0x000000ff,
        RX_CHAIN_MASK_VALID @ 0xc [8:8] = 0x00000100,
        ANT_SEL_VALID @ 0xc [9:9] = 0x00000200,
        ANT_SEL @ 0xc [10:10] = 0x00000400,
        CP_SETTING @ 0xc [12:11] = 0x00001800,
        HE_PPDU_SUBTYPE @ 0xc [14:13] = 0x00006000,
        ACTIVE_CHANNEL @ 0xc [17:15] = 0x00038000,
        GENERATE_PHYRX_TX_START_TIMING @ 0xc [18:18] = 0x00040000,
        LTF_SIZE @ 0xc [20:19] = 0x00180000,
        RU_SIZE_UPDATED_V2 @ 0xc [24:21] = 0x01e00000,
        RESERVED_3C @ 0xc [25:25] = 0x02000000,
        U_SIG_PUNCTURE_PATTERN_ENCODING @ 0xc [31:26] = 0xfc000000,
    }

    pub mod mactx_user_desc_common [16; Dword] {
        NUM_USERS @ 0x0 [5:0] = 0x0000003f,
        RESERVED_0B @ 0x0 [10:6] = 0x000007c0,
        LTF_SIZE @ 0x0 [12:11] = 0x00001800,
        RESERVED_0C @ 0x0 [15:13] = 0x0000e000,
        HE_STF_LONG @ 0x0 [16:16] = 0x00010000,
        RESERVED_0D @ 0x0 [23:17] = 0x00fe0000,
        NUM_USERS_HE_SIGB_BAND0 @ 0x0 [31:24] = 0xff000000,
        NUM_LTF_SYMBOLS @ 0x4 [2:0] = 0x00000007,
        RESERVED_1A @ 0x4 [7:3] = 0x000000f8,
        NUM_USERS_HE_SIGB_BAND1 @ 0x4 [15:8] = 0x0000ff00,
        RESERVED_1B @ 0x4 [31:16] = 0xffff0000,
        PACKET_EXTENSION_A_FACTOR @ 0x8 [1:0] = 0x00000003,
        PACKET_EXTENSION_PE_DISAMBIGUITY @ 0x8 [2:2] = 0x00000004,
        PACKET_EXTENSION @ 0x8 [5:3] = 0x00000038,
        RESERVED @ 0x8 [7:6] = 0x000000c0,
        HE_SIGB_DCM @ 0x8 [8:8] = 0x00000100,
        RESERVED_2B @ 0x8 [15:9] = 0x0000fe00,
        HE_SIGB_COMPRESSION @ 0x8 [16:16] = 0x00010000,
        RESERVED_2C @ 0x8 [31:17] = 0xfffe0000,
        HE_SIGB_0_MCS @ 0xc [2:0] = 0x00000007,
        RESERVED_3A @ 0xc [15:3] = 0x0000fff8,
        NUM_HE_SIGB_SYM @ 0xc [20:16] = 0x001f0000,
        CENTER_RU_0 @ 0xc [21:21] = 0x00200000,
        CENTER_RU_1 @ 0xc [22:22] = 0x00400000,
        RESERVED_3B @ 0xc [23:23] = 0x00800000,
        FTM_EN @ 0xc [24:24] = 0x01000000,
        PE_NSS @ 0xc [27:25] = 0x0e000000,
        PE_LTF_SIZE @ 0xc [29:28] = 0x30000000,
        PE_CONTENT @ 0xc [30:30] = 0x40000000,
        PE_CHAIN_CSD_EN @ 0xc [31:31] = 0x80000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_0 @ 0x10 [8:0] = 0x000001ff,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_1 @ 0x10 [17:9] = 0x0003fe00,
        RU_ALLOCATION_0123_DETAILS_RESERVED_0A @ 0x10 [23:18] = 0x00fc0000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATIONS_01_SUBBAND80_MASK @ 0x10 [27:24] = 0x0f000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATIONS_23_SUBBAND80_MASK @ 0x10 [31:28] = 0xf0000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_2 @ 0x14 [8:0] = 0x000001ff,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_3 @ 0x14 [17:9] = 0x0003fe00,
        RU_ALLOCATION_0123_DETAILS_RESERVED_1A @ 0x14 [31:18] = 0xfffc0000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_0 @ 0x18 [8:0] = 0x000001ff,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_1 @ 0x18 [17:9] = 0x0003fe00,
        RU_ALLOCATION_0123_DETAILS_RESERVED_2A @ 0x18 [31:18] = 0xfffc0000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_2 @ 0x1c [8:0] = 0x000001ff,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_3 @ 0x1c [17:9] = 0x0003fe00,
        RU_ALLOCATION_0123_DETAILS_RESERVED_3A @ 0x1c [31:18] = 0xfffc0000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_0 @ 0x20 [8:0] = 0x000001ff,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_1 @ 0x20 [17:9] = 0x0003fe00,
        RU_ALLOCATION_4567_DETAILS_RESERVED_0A @ 0x20 [23:18] = 0x00fc0000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATIONS_01_SUBBAND80_MASK @ 0x20 [27:24] = 0x0f000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATIONS_23_SUBBAND80_MASK @ 0x20 [31:28] = 0xf0000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_2 @ 0x24 [8:0] = 0x000001ff,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_3 @ 0x24 [17:9] = 0x0003fe00,
        RU_ALLOCATION_4567_DETAILS_RESERVED_1A @ 0x24 [31:18] = 0xfffc0000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_0 @ 0x28 [8:0] = 0x000001ff,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_1 @ 0x28 [17:9] = 0x0003fe00,
        RU_ALLOCATION_4567_DETAILS_RESERVED_2A @ 0x28 [31:18] = 0xfffc0000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_2 @ 0x2c [8:0] = 0x000001ff,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_3 @ 0x2c [17:9] = 0x0003fe00,
        RU_ALLOCATION_4567_DETAILS_RESERVED_3A @ 0x2c [31:18] = 0xfffc0000,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_0_CC0 @ 0x30 [7:0] = 0x000000ff,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_0_CC1 @ 0x30 [15:8] = 0x0000ff00,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_1_CC0 @ 0x30 [23:16] = 0x00ff0000,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_1_CC1 @ 0x30 [31:24] = 0xff000000,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_0_CC0 @ 0x34 [7:0] = 0x000000ff,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_0_CC1 @ 0x34 [15:8] = 0x0000ff00,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_1_CC0 @ 0x34 [23:16] = 0x00ff0000,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_1_CC1 @ 0x34 [31:24] = 0xff000000,
        NUM_DATA_SYMBOLS @ 0x38 [15:0] = 0x0000ffff,
        NDP_RU_TONE_SET_INDEX @ 0x38 [22:16] = 0x007f0000,
        NDP_FEEDBACK_STATUS @ 0x38 [23:23] = 0x00800000,
        DOPPLER_INDICATION @ 0x38 [24:24] = 0x01000000,
        RESERVED_14A @ 0x38 [31:25] = 0xfe000000,
        SPATIAL_REUSE @ 0x3c [15:0] = 0x0000ffff,
        RESERVED_15A @ 0x3c [31:16] = 0xffff0000,
    }
}

pub const DESCRIPTORS: &[wlan_hwio::DescriptorLayout] = &[
    pcu_ppdu_setup_init::LAYOUT,
    mactx_phy_desc::LAYOUT,
    mactx_user_desc_common::LAYOUT,
];
