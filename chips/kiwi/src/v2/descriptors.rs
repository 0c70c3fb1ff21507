// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated TLV descriptor layouts for kiwi v2.

use wlan_hwio::tlv_descriptor;

tlv_descriptor! {
    pub mod receive_rssi_info [16; Dword] {
        RSSI_PRI20_CHAIN0 @ 0x0 [7:0] = 0x000000ff,
        RSSI_EXT20_CHAIN0 @ 0x0 [15:8] = 0x0000ff00,
        RSSI_EXT40_LOW20_CHAIN0 @ 0x0 [23:16] = 0x00ff0000,
        RSSI_EXT40_HIGH20_CHAIN0 @ 0x0 [31:24] = 0xff000000,
        RSSI_EXT80_LOW20_CHAIN0 @ 0x4 [7:0] = 0x000000ff,
        RSSI_EXT80_LOW_HIGH20_CHAIN0 @ 0x4 [15:8] = 0x0000ff00,
        RSSI_EXT80_HIGH_LOW20_CHAIN0 @ 0x4 [23:16] = 0x00ff0000,
        RSSI_EXT80_HIGH20_CHAIN0 @ 0x4 [31:24] = 0xff000000,
        RSSI_EXT160_0_CHAIN0 @ 0x8 [7:0] = 0x000000ff,
        RSSI_EXT160_1_CHAIN0 @ 0x8 [15:8] = 0x0000ff00,
        RSSI_EXT160_2_CHAIN0 @ 0x8 [23:16] = 0x00ff0000,
        RSSI_EXT160_3_CHAIN0 @ 0x8 [31:24] = 0xff000000,
        RSSI_EXT160_4_CHAIN0 @ 0xc [7:0] = 0x000000ff,
        RSSI_EXT160_5_CHAIN0 @ 0xc [15:8] = 0x0000ff00,
        RSSI_EXT160_6_CHAIN0 @ 0xc [23:16] = 0x00ff0000,
        RSSI_EXT160_7_CHAIN0 @ 0xc [31:24] = 0xff000000,
        RSSI_PRI20_CHAIN1 @ 0x10 [7:0] = 0x000000ff,
        RSSI_EXT20_CHAIN1 @ 0x10 [15:8] = 0x0000ff00,
        RSSI_EXT40_LOW20_CHAIN1 @ 0x10 [23:16] = 0x00ff0000,
        RSSI_EXT40_HIGH20_CHAIN1 @ 0x10 [31:24] = 0xff000000,
        RSSI_EXT80_LOW20_CHAIN1 @ 0x14 [7:0] = 0x000000ff,
        RSSI_EXT80_LOW_HIGH20_CHAIN1 @ 0x14 [15:8] = 0x0000ff00,
        RSSI_EXT80_HIGH_LOW20_CHAIN1 @ 0x14 [23:16] = 0x00ff0000,
        RSSI_EXT80_HIGH20_CHAIN1 @ 0x14 [31:24] = 0xff000000,
        RSSI_EXT160_0_CHAIN1 @ 0x18 [7:0] = 0x000000ff,
        RSSI_EXT160_1_CHAIN1 @ 0x18 [15:8] = 0x0000ff00,
        RSSI_EXT160_2_CHAIN1 @ 0x18 [23:16] = 0x00ff0000,
        RSSI_EXT160_3_CHAIN1 @ 0x18 [31:24] = 0xff000000,
        RSSI_EXT160_4_CHAIN1 @ 0x1c [7:0] = 0x000000ff,
        RSSI_EXT160_5_CHAIN1 @ 0x1c [15:8] = 0x0000ff00,
        RSSI_EXT160_6_CHAIN1 @ 0x1c [23:16] = 0x00ff0000,
        RSSI_EXT160_7_CHAIN1 @ 0x1c [31:24] = 0xff000000,
        RSSI_PRI20_CHAIN2 @ 0x20 [7:0] = 0x000000ff,
        RSSI_EXT20_CHAIN2 @ 0x20 [15:8] = 0x0000ff00,
        RSSI_EXT40_LOW20_CHAIN2 @ 0x20 [23:16] = 0x00ff0000,
        RSSI_EXT40_HIGH20_CHAIN2 @ 0x20 [31:24] = 0xff000000,
        RSSI_EXT80_LOW20_CHAIN2 @ 0x24 [7:0] = 0x000000ff,
        RSSI_EXT80_LOW_HIGH20_CHAIN2 @ 0x24 [15:8] = 0x0000ff00,
        RSSI_EXT80_HIGH_LOW20_CHAIN2 @ 0x24 [23:16] = 0x00ff0000,
        RSSI_EXT80_HIGH20_CHAIN2 @ 0x24 [31:24] = 0xff000000,
        RSSI_EXT160_0_CHAIN2 @ 0x28 [7:0] = 0x000000ff,
        RSSI_EXT160_1_CHAIN2 @ 0x28 [15:8] = 0x0000ff00,
        RSSI_EXT160_2_CHAIN2 @ 0x28 [23:16] = 0x00ff0000,
        RSSI_EXT160_3_CHAIN2 @ 0x28 [31:24] = 0xff000000,
        RSSI_EXT160_4_CHAIN2 @ 0x2c [7:0] = 0x000000ff,
        RSSI_EXT160_5_CHAIN2 @ 0x2c [15:8] = 0x0000ff00,
        RSSI_EXT160_6_CHAIN2 @ 0x2c [23:16] = 0x00ff0000,
        RSSI_EXT160_7_CHAIN2 @ 0x2c [31:24] = 0xff000000,
        RSSI_PRI20_CHAIN3 @ 0x30 [7:0] = 0x000000ff,
        RSSI_EXT20_CHAIN3 @ 0x30 [15:8] = 0x0000ff00,
        RSSI_EXT40_LOW20_CHAIN3 @ 0x30 [23:16] = 0x00ff0000,
        RSSI_EXT40_HIGH20_CHAIN3 @ 0x30 [31:24] = 0xff000000,
        RSSI_EXT80_LOW20_CHAIN3 @ 0x34 [7:0] = 0x000000ff,
        RSSI_EXT80_LOW_HIGH20_CHAIN3 @ 0x34 [15:8] = 0x0000ff00,
        RSSI_EXT80_HIGH_LOW20_CHAIN3 @ 0x34 [23:16] = 0x00ff0000,
        RSSI_EXT80_HIGH20_CHAIN3 @ 0x34 [31:24] = 0xff000000,
        RSSI_EXT160_0_CHAIN3 @ 0x38 [7:0] = 0x000000ff,
        RSSI_EXT160_1_CHAIN3 @ 0x38 [15:8] = 0x0000ff00,
        RSSI_EXT160_2_CHAIN3 @ 0x38 [23:16] = 0x00ff0000,
        RSSI_EXT160_3_CHAIN3 @ 0x38 [31:24] = 0xff000000,
        RSSI_EXT160_4_CHAIN3 @ 0x3c [7:0] = 0x000000ff,
        RSSI_EXT160_5_CHAIN3 @ 0x3c [15:8] = 0x0000ff00,
        RSSI_EXT160_6_CHAIN3 @ 0x3c [23:16] = 0x00ff0000,
        RSSI_EXT160_7_CHAIN3 @ 0x3c [31:24] = 0xff000000,
    }

    pub mod tx_fes_status_1k_ba [34; Qword] {
        ACK_BA_STATUS_TYPE @ 0x0 [0:0] = 0x0000000000000001,
        BA_TYPE @ 0x0 [1:1] = 0x0000000000000002,
        BA_TID @ 0x0 [5:2] = 0x000000000000003c,
        UNEXPECTED_ACK_OR_BA @ 0x0 [6:6] = 0x0000000000000040,
        RESPONSE_TIMEOUT @ 0x0 [7:7] = 0x0000000000000080,
        ACK_FRAME_RSSI @ 0x0 [15:8] = 0x000000000000ff00,
        SSN @ 0x0 [27:16] = 0x000000000fff0000,
        RESERVED_0B @ 0x0 [31:28] = 0x00000000f0000000,
        SW_PEER_ID @ 0x0 [47:32] = 0x0000ffff00000000,
        RESERVED_1A @ 0x0 [63:48] = 0xffff000000000000,
        BA_BITMAP_31_0 @ 0x8 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_63_32 @ 0x8 [63:32] = 0xffffffff00000000,
        BA_BITMAP_95_64 @ 0x10 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_127_96 @ 0x10 [63:32] = 0xffffffff00000000,
        BA_BITMAP_159_128 @ 0x18 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_191_160 @ 0x18 [63:32] = 0xffffffff00000000,
        BA_BITMAP_223_192 @ 0x20 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_255_224 @ 0x20 [63:32] = 0xffffffff00000000,
        BA_BITMAP_287_256 @ 0x28 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_319_288 @ 0x28 [63:32] = 0xffffffff00000000,
        BA_BITMAP_351_320 @ 0x30 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_383_352 @ 0x30 [63:32] = 0xffffffff00000000,
        BA_BITMAP_415_384 @ 0x38 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_447_416 @ 0x38 [63:32] = 0xffffffff00000000,
        BA_BITMAP_479_448 @ 0x40 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_511_480 @ 0x40 [63:32] = 0xffffffff00000000,
        BA_BITMAP_543_512 @ 0x48 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_575_544 @ 0x48 [63:32] = 0xffffffff00000000,
        BA_BITMAP_607_576 @ 0x50 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_639_608 @ 0x50 [63:32] = 0xffffffff00000000,
        BA_BITMAP_671_640 @ 0x58 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_703_672 @ 0x58 [63:32] = 0xffffffff00000000,
        BA_BITMAP_735_704 @ 0x60 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_767_736 @ 0x60 [63:32] = 0xffffffff00000000,
        BA_BITMAP_799_768 @ 0x68 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_831_800 @ 0x68 [63:32] = 0xffffffff00000000,
        BA_BITMAP_863_832 @ 0x70 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_895_864 @ 0x70 [63:32] = 0xffffffff00000000,
        BA_BITMAP_927_896 @ 0x78 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_959_928 @ 0x78 [63:32] = 0xffffffff00000000,
        BA_BITMAP_991_960 @ 0x80 [31:0] = 0x00000000ffffffff,
        BA_BITMAP_1023_992 @ 0x80 [63:32] = 0xffffffff00000000,
    }

    pub mod rx_frame_1k_bitmap_ack [38; Qword] {
        RESERVED_0A @ 0x0 [4:0] = 0x000000000000001f,
        BA_BITMAP_SIZE @ 0x0 [6:5] = 0x0000000000000060,
        RESERVED_0B @ 0x0 [9:7] = 0x0000000000000380,
        BA_TID @ 0x0 [13:10] = 0x0000000000003c00,
        STA_FULL_AID @ 0x0 [26:14] = 0x0000000007ffc000,
        RESERVED_0C @ 0x0 [31:27] = 0x00000000f8000000,
        ADDR1_31_0 @ 0x0 [63:32] = 0xffffffff00000000,
        ADDR1_47_32 @ 0x8 [15:0] = 0x000000000000ffff,
        ADDR2_15_0 @ 0x8 [31:16] = 0x00000000ffff0000,
        ADDR2_47_16 @ 0x8 [63:32] = 0xffffffff00000000,
        BA_TS_CTRL @ 0x10 [15:0] = 0x000000000000ffff,
        BA_TS_SEQ @ 0x10 [31:16] = 0x00000000ffff0000,
        BA_TS_BITMAP_31_0 @ 0x10 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_63_32 @ 0x18 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_95_64 @ 0x18 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_127_96 @ 0x20 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_159_128 @ 0x20 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_191_160 @ 0x28 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_223_192 @ 0x28 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_255_224 @ 0x30 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_287_256 @ 0x30 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_319_288 @ 0x38 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_351_320 @ 0x38 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_383_352 @ 0x40 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_415_384 @ 0x40 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_447_416 @ 0x48 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_479_448 @ 0x48 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_511_480 @ 0x50 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_543_512 @ 0x50 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_575_544 @ 0x58 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_607_576 @ 0x58 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_639_608 @ 0x60 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_671_640 @ 0x60 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_703_672 @ 0x68 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_735_704 @ 0x68 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_767_736 @ 0x70 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_799_768 @ 0x70 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_831_800 @ 0x78 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_863_832 @ 0x78 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_895_864 @ 0x80 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_927_896 @ 0x80 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_959_928 @ 0x88 [31:0] = 0x00000000ffffffff,
        BA_TS_BITMAP_991_960 @ 0x88 [63:32] = 0xffffffff00000000,
        BA_TS_BITMAP_1023_992 @ 0x90 [31:0] = 0x00000000ffffffff,
        TLV64_PADDING @ 0x90 [63:32] = 0xffffffff00000000,
    }

    pub mod mactx_user_desc_common [16; Qword] {
        NUM_USERS @ 0x0 [5:0] = 0x000000000000003f,
        RESERVED_0B @ 0x0 [10:6] = 0x00000000000007c0,
        LTF_SIZE @ 0x0 [12:11] = 0x0000000000001800,
        RESERVED_0C @ 0x0 [15:13] = 0x000000000000e000,
        HE_STF_LONG @ 0x0 [16:16] = 0x0000000000010000,
        RESERVED_0D @ 0x0 [23:17] = 0x0000000000fe0000,
        NUM_USERS_HE_SIGB_BAND0 @ 0x0 [31:24] = 0x00000000ff000000,
        NUM_LTF_SYMBOLS @ 0x0 [34:32] = 0x0000000700000000,
        RESERVED_1A @ 0x0 [39:35] = 0x000000f800000000,
        NUM_USERS_HE_SIGB_BAND1 @ 0x0 [47:40] = 0x0000ff0000000000,
        RESERVED_1B @ 0x0 [63:48] = 0xffff000000000000,
        PACKET_EXTENSION_A_FACTOR @ 0x8 [1:0] = 0x0000000000000003,
        PACKET_EXTENSION_PE_DISAMBIGUITY @ 0x8 [2:2] = 0x0000000000000004,
        PACKET_EXTENSION @ 0x8 [5:3] = 0x0000000000000038,
        RESERVED @ 0x8 [7:6] = 0x00000000000000c0,
        HE_SIGB_DCM @ 0x8 [8:8] = 0x0000000000000100,
        RESERVED_2B @ 0x8 [15:9] = 0x000000000000fe00,
        HE_SIGB_COMPRESSION @ 0x8 [16:16] = 0x0000000000010000,
        RESERVED_2C @ 0x8 [31:17] = 0x00000000fffe0000,
        HE_SIGB_0_MCS @ 0x8 [34:32] = 0x0000000700000000,
        RESERVED_3A @ 0x8 [47:35] = 0x0000fff800000000,
        NUM_HE_SIGB_SYM @ 0x8 [52:48] = 0x001f000000000000,
        CENTER_RU_0 @ 0x8 [53:53] = 0x0020000000000000,
        CENTER_RU_1 @ 0x8 [54:54] = 0x0040000000000000,
        RESERVED_3B @ 0x8 [55:55] = 0x0080000000000000,
        FTM_EN @ 0x8 [56:56] = 0x0100000000000000,
        PE_NSS @ 0x8 [59:57] = 0x0e00000000000000,
        PE_LTF_SIZE @ 0x8 [61:60] = 0x3000000000000000,
        PE_CONTENT @ 0x8 [62:62] = 0x4000000000000000,
        PE_CHAIN_CSD_EN @ 0x8 [63:63] = 0x8000000000000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_0 @ 0x10 [8:0] = 0x00000000000001ff,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_1 @ 0x10 [17:9] = 0x000000000003fe00,
        RU_ALLOCATION_0123_DETAILS_RESERVED_0A @ 0x10 [23:18] = 0x0000000000fc0000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATIONS_01_SUBBAND80_MASK @ 0x10 [27:24] = 0x000000000f000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATIONS_23_SUBBAND80_MASK @ 0x10 [31:28] = 0x00000000f0000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_2 @ 0x10 [40:32] = 0x000001ff00000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND0_3 @ 0x10 [49:41] = 0x0003fe0000000000,
        RU_ALLOCATION_0123_DETAILS_RESERVED_1A @ 0x10 [63:50] = 0xfffc000000000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_0 @ 0x18 [8:0] = 0x00000000000001ff,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_1 @ 0x18 [17:9] = 0x000000000003fe00,
        RU_ALLOCATION_0123_DETAILS_RESERVED_2A @ 0x18 [31:18] = 0x00000000fffc0000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_2 @ 0x18 [40:32] = 0x000001ff00000000,
        RU_ALLOCATION_0123_DETAILS_RU_ALLOCATION_BAND1_3 @ 0x18 [49:41] = 0x0003fe0000000000,
        RU_ALLOCATION_0123_DETAILS_RESERVED_3A @ 0x18 [63:50] = 0xfffc000000000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_0 @ 0x20 [8:0] = 0x00000000000001ff,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_1 @ 0x20 [17:9] = 0x000000000003fe00,
        RU_ALLOCATION_4567_DETAILS_RESERVED_0A @ 0x20 [23:18] = 0x0000000000fc0000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATIONS_01_SUBBAND80_MASK @ 0x20 [27:24] = 0x000000000f000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATIONS_23_SUBBAND80_MASK @ 0x20 [31:28] = 0x00000000f0000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_2 @ 0x20 [40:32] = 0x000001ff00000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND0_3 @ 0x20 [49:41] = 0x0003fe0000000000,
        RU_ALLOCATION_4567_DETAILS_RESERVED_1A @ 0x20 [63:50] = 0xfffc000000000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_0 @ 0x28 [8:0] = 0x00000000000001ff,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_1 @ 0x28 [17:9] = 0x000000000003fe00,
        RU_ALLOCATION_4567_DETAILS_RESERVED_2A @ 0x28 [31:18] = 0x00000000fffc0000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_2 @ 0x28 [40:32] = 0x000001ff00000000,
        RU_ALLOCATION_4567_DETAILS_RU_ALLOCATION_BAND1_3 @ 0x28 [49:41] = 0x0003fe0000000000,
        RU_ALLOCATION_4567_DETAILS_RESERVED_3A @ 0x28 [63:50] = 0xfffc000000000000,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_0_CC0 @ 0x30 [7:0] = 0x00000000000000ff,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_0_CC1 @ 0x30 [15:8] = 0x000000000000ff00,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_1_CC0 @ 0x30 [23:16] = 0x0000000000ff0000,
        RU_ALLOCATION_160_0_DETAILS_SUBBAND80_1_CC1 @ 0x30 [31:24] = 0x00000000ff000000,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_0_CC0 @ 0x30 [39:32] = 0x000000ff00000000,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_0_CC1 @ 0x30 [47:40] = 0x0000ff0000000000,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_1_CC0 @ 0x30 [55:48] = 0x00ff000000000000,
        RU_ALLOCATION_160_1_DETAILS_SUBBAND80_1_CC1 @ 0x30 [63:56] = 0xff00000000000000,
        NUM_DATA_SYMBOLS @ 0x38 [15:0] = 0x000000000000ffff,
        NDP_RU_TONE_SET_INDEX @ 0x38 [22:16] = 0x00000000007f0000,
        NDP_FEEDBACK_STATUS @ 0x38 [23:23] = 0x0000000000800000,
        DOPPLER_INDICATION @ 0x38 [24:24] = 0x0000000001000000,
        RESERVED_14A @ 0x38 [31:25] = 0x00000000fe000000,
        SPATIAL_REUSE @ 0x38 [47:32] = 0x0000ffff00000000,
        RESERVED_15A @ 0x38 [63:48] = 0xffff000000000000,
    }
}

pub const DESCRIPTORS: &[wlan_hwio::DescriptorLayout] = &[
    receive_rssi_info::LAYOUT,
    tx_fes_status_1k_ba::LAYOUT,
    rx_frame_1k_bitmap_ack::LAYOUT,
    mactx_user_desc_common::LAYOUT,
];
