// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated register constants for the kiwi v1 UMAC.
//!
//! Offsets are relative to `UMAC_BASE`.

use wlan_hwio::hwio_registers;

hwio_registers! {
    /// Wireless buffer manager.
    pub mod wbm @ 0x34000 {
        R0_IDLE_LIST_SIZE @ 0xc4 [
            SCATTER_RING_SIZE_OF_IDLE_LINK_DESC_LIST(0xffff0000, 16),
            SCATTER_RING_SIZE_OF_IDLE_BUF_LIST(0xffff, 0),
        ],
        R0_SCATTERED_LINK_DESC_LIST_BASE_LSB @ 0xd0 [],
        R0_SCATTERED_LINK_DESC_PTR_HEAD_INFO_IX0 @ 0xe0 [],
        R0_SCATTERED_LINK_DESC_LIST_BASE_MSB @ 0xd4 [
            ADDRESS_MATCH_TAG(0xffffff00, 8),
            BASE_ADDRESS_39_32(0xff, 0),
        ],
        R0_SCATTERED_LINK_DESC_PTR_TAIL_INFO_IX0 @ 0xf0 [],
        R0_SCATTERED_LINK_DESC_PTR_HP @ 0xfc [],
        R0_SCATTERED_LINK_DESC_PTR_TAIL_INFO_IX1 @ 0xf4 [
            TAIL_POINTER_OFFSET(0x1fff00, 8),
            BUFFER_ADDRESS_39_32(0xff, 0),
        ],
        R0_SCATTERED_LINK_DESC_PTR_HEAD_INFO_IX1 @ 0xe4 [
            HEAD_POINTER_OFFSET(0x1fff00, 8),
            BUFFER_ADDRESS_39_32(0xff, 0),
        ],
        R0_WBM_IDLE_LINK_RING_MISC @ 0xb6c [
            RING_ID_DISABLE(0x1, 0),
        ],
        R0_SW_COOKIE_CFG0 @ 0x34 [],
        R0_SW_COOKIE_CONVERT_CFG @ 0x74 [
            WBM_COOKIE_CONV_GLOBAL_ENABLE(0x100, 8),
            WBM2SW6_COOKIE_CONVERSION_EN(0x80, 7),
            WBM2SW5_COOKIE_CONVERSION_EN(0x40, 6),
            WBM2SW4_COOKIE_CONVERSION_EN(0x20, 5),
            WBM2SW3_COOKIE_CONVERSION_EN(0x10, 4),
            WBM2SW2_COOKIE_CONVERSION_EN(0x8, 3),
            WBM2SW1_COOKIE_CONVERSION_EN(0x4, 2),
            WBM2SW0_COOKIE_CONVERSION_EN(0x2, 1),
            WBM2FW_COOKIE_CONVERSION_EN(0x1, 0),
        ],
        R0_SW_COOKIE_CFG1 @ 0x38 [
            PAGE_ALIGNMENT(0x40000, 18),
            COOKIE_OFFSET_MSB(0x3e000, 13),
            COOKIE_PAGE_MSB(0x1f00, 8),
            CMEM_LUT_BASE_ADDR_39_32(0xff, 0),
        ],
        R0_MISC_CONTROL @ 0x60 [],
        R0_IDLE_LIST_CONTROL @ 0xc0 [
            SCATTER_BUFFER_SIZE(0x7fc, 2),
            LINK_DESC_IDLE_LIST_MODE(0x2, 1),
        ],
        R0_WBM_IDLE_LINK_RING_BASE_LSB @ 0xb5c [],
        R0_WBM_IDLE_LINK_RING_BASE_MSB @ 0xb60 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R2_WBM_IDLE_LINK_RING_HP @ 0x30b8 [],
        R0_SW_RELEASE_RING_BASE_LSB @ 0x268 [],
        R0_SW_RELEASE_RING_BASE_MSB @ 0x26c .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R2_SW_RELEASE_RING_HP @ 0x3018 [],
        R0_WBM2SW0_RELEASE_RING_BASE_LSB @ 0xc20 [],
        R0_WBM2SW0_RELEASE_RING_BASE_MSB @ 0xc24 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R2_WBM2SW0_RELEASE_RING_HP @ 0x30c8 [],
        R0_WBM2SW1_RELEASE_RING_BASE_LSB @ 0xc94 [],
        R2_WBM2SW1_RELEASE_RING_HP @ 0x30d0 [],
    }

    /// Transmit classifier.
    pub mod tcl @ 0x44000 {
        R0_SW_CONFIG_BANK_n @ 0x88 .indexed(0x4, 7) .rmsk(0x7ffff) .por(0x38) .por_rmsk(0xffffffff) .attr(3) [
            MCAST_PACKET_CTRL(0x60000, 17),
            PMAC_ID(0x18000, 15),
            VDEV_ID_CHECK_EN(0x4000, 14),
            MESH_ENABLE(0x3000, 12),
            ADDRY_EN(0x800, 11),
            ADDRX_EN(0x400, 10),
            INDEX_LOOKUP_ENABLE(0x200, 9),
            LINK_META_SWAP(0x100, 8),
            SRC_BUFFER_SWAP(0x80, 7),
            ENCRYPT_TYPE(0x78, 3),
            ENCAP_TYPE(0x6, 1),
            EPD(0x1, 0),
        ],
        R0_SW2TCL1_RING_BASE_LSB @ 0x878 [],
        R0_SW2TCL1_RING_MISC @ 0x888 [
            DATA_TLV_SWAP_BIT(0x20, 5),
            HOST_FW_SWAP_BIT(0x10, 4),
            MSI_SWAP_BIT(0x8, 3),
            LOOPCNT_DISABLE(0x2, 1),
            RING_ID_DISABLE(0x1, 0),
        ],
        R0_SW2TCL1_RING_TP_ADDR_LSB @ 0x894 [],
        R0_SW2TCL1_RING_TP_ADDR_MSB @ 0x898 [],
        R0_SW2TCL1_RING_MSI1_BASE_LSB @ 0x8c0 [],
        R0_SW2TCL1_RING_MSI1_BASE_MSB @ 0x8c4 [
            MSI1_ENABLE(0x100, 8),
            ADDR(0xff, 0),
        ],
        R0_SW2TCL1_RING_MSI1_DATA @ 0x8c8 [],
        R0_SW2TCL1_RING_BASE_MSB @ 0x87c [
            RING_SIZE(0xfffff00, 8),
            RING_BASE_ADDR_MSB(0xff, 0),
        ],
        R0_SW2TCL1_RING_CONSUMER_INT_SETUP_IX0 @ 0x8a8 [
            INTERRUPT_TIMER_THRESHOLD(0xffff0000, 16),
            BATCH_COUNTER_THRESHOLD(0x7fff, 0),
        ],
        R0_SW2TCL1_RING_CONSUMER_INT_SETUP_IX1 @ 0x8ac [
            LOW_THRESHOLD(0xffff, 0),
        ],
        R2_SW2TCL1_RING_HP @ 0x2000 [],
        R0_SW2TCL1_RING_ID @ 0x880 [
            ENTRY_SIZE(0xff, 0),
        ],
        R2_SW2TCL1_RING_TP @ 0x2004 [],
        R0_DSCP_TID_MAP_n @ 0x1f8 .strided(0x4) .rmsk(0xffffffff) [],
        R0_CONS_RING_CMN_CTRL_REG @ 0x20 [
            DSCP_TID_MAP_PROGRAM_EN(0x800000, 23),
        ],
        R0_PCP_TID_MAP @ 0x678 .rmsk(0xffffff) [
            PCP_7(0xe00000, 21),
            PCP_6(0x1c0000, 18),
            PCP_5(0x38000, 15),
            PCP_4(0x7000, 12),
            PCP_3(0xe00, 9),
            PCP_2(0x1c0, 6),
            PCP_1(0x38, 3),
            PCP_0(0x7, 0),
        ],
        R0_TID_MAP_PRTY @ 0x6a0 .rmsk(0xef) [],
        R0_SW2TCL2_RING_BASE_LSB @ 0x8ec [],
        R2_SW2TCL2_RING_HP @ 0x2008 [],
        R0_SW2TCL_CREDIT_RING_BASE_LSB @ 0xabc [],
        R0_SW2TCL_CREDIT_RING_BASE_MSB @ 0xac0 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R2_SW2TCL_CREDIT_RING_HP @ 0x2028 [],
        R0_TCL_STATUS1_RING_BASE_LSB @ 0xc8c [],
        R0_TCL_STATUS1_RING_BASE_MSB @ 0xc90 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R2_TCL_STATUS1_RING_HP @ 0x2048 [],
    }

    /// Rx reorder engine.
    pub mod reo @ 0x38000 {
        R0_REO2SW1_RING_MSI1_BASE_MSB @ 0x3f0 [],
        R0_REO2SW1_RING_HP_ADDR_MSB @ 0x3bc [],
        R0_REO2SW1_RING_MSI1_DATA @ 0x3f4 [],
        R0_REO2SW1_RING_BASE_MSB @ 0x3a8 [
            RING_SIZE(0xfffff00, 8),
            RING_BASE_ADDR_MSB(0xff, 0),
        ],
        R0_REO2SW1_RING_PRODUCER_INT_SETUP @ 0x3c8 [],
        R0_REO2SW1_RING_HP_ADDR_LSB @ 0x3b8 [],
        R0_REO2SW1_RING_ID @ 0x3ac [],
        R0_REO2SW1_RING_BASE_LSB @ 0x3a4 [],
        R0_REO2SW1_RING_MSI1_BASE_LSB @ 0x3ec [],
        R0_REO2SW1_RING_MISC @ 0x3b4 [],
        R2_REO2SW1_RING_TP @ 0x303c [],
        R2_REO2SW1_RING_HP @ 0x3038 [],
        R0_SW_COOKIE_CFG1 @ 0x54 [
            SW_COOKIE_CONVERT_GLOBAL_ENABLE(0x100000, 20),
            SW_COOKIE_CONVERT_ENABLE(0x80000, 19),
            PAGE_ALIGNMENT(0x40000, 18),
            COOKIE_OFFSET_MSB(0x3e000, 13),
            COOKIE_PAGE_MSB(0x1f00, 8),
            CMEM_LUT_BASE_ADDR_39_32(0xff, 0),
        ],
        R0_SW_COOKIE_CFG0 @ 0x50 [],
        R0_GENERAL_ENABLE @ 0x0 [
            AGING_FLUSH_ENABLE(0x8, 3),
            AGING_LIST_ENABLE(0x4, 2),
        ],
        R0_AGING_THRESHOLD_IX_0 @ 0x994 [],
        R0_AGING_THRESHOLD_IX_1 @ 0x998 [],
        R0_AGING_THRESHOLD_IX_2 @ 0x99c [],
        R0_AGING_THRESHOLD_IX_3 @ 0x9a0 [],
        R0_DESTINATION_RING_CTRL_IX_2 @ 0xc [
            DEST_RING_MAPPING_23(0xf0000000, 28),
            DEST_RING_MAPPING_22(0xf000000, 24),
            DEST_RING_MAPPING_21(0xf00000, 20),
            DEST_RING_MAPPING_20(0xf0000, 16),
            DEST_RING_MAPPING_19(0xf000, 12),
            DEST_RING_MAPPING_18(0xf00, 8),
            DEST_RING_MAPPING_17(0xf0, 4),
            DEST_RING_MAPPING_16(0xf, 0),
        ],
        R0_DESTINATION_RING_CTRL_IX_3 @ 0x10 [
            DEST_RING_MAPPING_31(0xf0000000, 28),
            DEST_RING_MAPPING_30(0xf000000, 24),
            DEST_RING_MAPPING_29(0xf00000, 20),
            DEST_RING_MAPPING_28(0xf0000, 16),
            DEST_RING_MAPPING_27(0xf000, 12),
            DEST_RING_MAPPING_26(0xf00, 8),
            DEST_RING_MAPPING_25(0xf0, 4),
            DEST_RING_MAPPING_24(0xf, 0),
        ],
        R0_MISC_CTL @ 0xa08 [
            BAR_DEST_RING(0x1e00000, 21),
            FRAGMENT_DEST_RING(0x1e0000, 17),
        ],
        R0_SW2REO_RING_BASE_LSB @ 0x1d4 [],
        R0_SW2REO_RING_BASE_MSB @ 0x1d8 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R2_SW2REO_RING_HP @ 0x3018 [],
        R0_REO_CMD_RING_BASE_LSB @ 0x160 [],
        R0_REO_CMD_RING_BASE_MSB @ 0x164 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R2_REO_CMD_RING_HP @ 0x3010 [],
        R0_REO_STATUS_RING_BASE_LSB @ 0x914 [],
        R0_REO_STATUS_RING_BASE_MSB @ 0x918 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R2_REO_STATUS_RING_HP @ 0x3098 [],
        R0_REO2SW1_RING_MSI2_BASE_LSB @ 0x3fc [],
        R0_REO2SW1_RING_MSI2_BASE_MSB @ 0x400 [],
        R0_REO2SW1_RING_MSI2_DATA @ 0x404 [],
        R0_REO2SW1_RING_PRODUCER_INT2_SETUP @ 0x3f8 [],
        R0_REO2SW0_RING_BASE_LSB @ 0x744 [],
        R0_REO2SW0_RING_BASE_MSB @ 0x748 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_REO2SW2_RING_BASE_LSB @ 0x418 [],
        R2_REO2SW0_RING_HP @ 0x3078 [],
        R2_REO2SW2_RING_HP @ 0x3040 [],
        R0_ERROR_DESTINATION_MAPPING_IX_0 @ 0x28 [
            ERROR_DESTINATION_RING_7(0xf0000000, 28),
            ERROR_DESTINATION_RING_6(0xf000000, 24),
            ERROR_DESTINATION_RING_5(0xf00000, 20),
            ERROR_DESTINATION_RING_4(0xf0000, 16),
            ERROR_DESTINATION_RING_3(0xf000, 12),
            ERROR_DESTINATION_RING_2(0xf00, 8),
            ERROR_DESTINATION_RING_1(0xf0, 4),
            ERROR_DESTINATION_RING_0(0xf, 0),
        ],
        R0_ERROR_DESTINATION_MAPPING_IX_1 @ 0x2c [
            ERROR_DESTINATION_RING_13(0xf00000, 20),
            ERROR_DESTINATION_RING_12(0xf0000, 16),
            ERROR_DESTINATION_RING_11(0xf000, 12),
            ERROR_DESTINATION_RING_10(0xf00, 8),
            ERROR_DESTINATION_RING_9(0xf0, 4),
            ERROR_DESTINATION_RING_8(0xf, 0),
        ],
        R0_PN_IN_DEST @ 0x4c [],
    }
}
