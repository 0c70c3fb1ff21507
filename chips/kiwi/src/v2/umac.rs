// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated register constants for the kiwi v2 UMAC.
//!
//! Offsets are relative to `UMAC_BASE`.

use wlan_hwio::hwio_registers;

hwio_registers! {
    /// Wireless buffer manager.
    pub mod wbm @ 0x34000 {
        R0_SW_COOKIE_CFG0 @ 0x40 [],
        R0_SW_COOKIE_CFG1 @ 0x44 [
            PAGE_ALIGNMENT(0x40000, 18),
            COOKIE_OFFSET_MSB(0x3e000, 13),
            COOKIE_PAGE_MSB(0x1f00, 8),
            CMEM_LUT_BASE_ADDR_39_32(0xff, 0),
        ],
        R0_MISC_CONTROL @ 0x7c [],
        R0_SW_COOKIE_CONVERT_CFG @ 0x94 [
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
        R0_IDLE_LIST_CONTROL @ 0x240 [
            SCATTER_BUFFER_SIZE(0x7fc, 2),
            LINK_DESC_IDLE_LIST_MODE(0x2, 1),
        ],
        R0_IDLE_LIST_SIZE @ 0x244 [
            SCATTER_RING_SIZE_OF_IDLE_LINK_DESC_LIST(0xffff0000, 16),
            SCATTER_RING_SIZE_OF_IDLE_BUF_LIST(0xffff, 0),
        ],
        R0_SCATTERED_LINK_DESC_LIST_BASE_LSB @ 0x250 [],
        R0_SCATTERED_LINK_DESC_LIST_BASE_MSB @ 0x254 [
            ADDRESS_MATCH_TAG(0xffffff00, 8),
            BASE_ADDRESS_39_32(0xff, 0),
        ],
        R0_SCATTERED_LINK_DESC_PTR_HEAD_INFO_IX0 @ 0x260 [],
        R0_SCATTERED_LINK_DESC_PTR_HEAD_INFO_IX1 @ 0x264 [
            HEAD_POINTER_OFFSET(0x1fff00, 8),
            BUFFER_ADDRESS_39_32(0xff, 0),
        ],
        R0_SCATTERED_LINK_DESC_PTR_TAIL_INFO_IX0 @ 0x270 [],
        R0_SCATTERED_LINK_DESC_PTR_TAIL_INFO_IX1 @ 0x274 [
            TAIL_POINTER_OFFSET(0x1fff00, 8),
            BUFFER_ADDRESS_39_32(0xff, 0),
        ],
        R0_SCATTERED_LINK_DESC_PTR_HP @ 0x27c [],
        R0_SW_RELEASE_RING_BASE_LSB @ 0x37c [],
        R0_SW_RELEASE_RING_BASE_MSB @ 0x380 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_WBM_IDLE_LINK_RING_BASE_LSB @ 0xd3c [],
        R0_WBM_IDLE_LINK_RING_BASE_MSB @ 0xd40 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_WBM_IDLE_LINK_RING_MISC @ 0xd4c [
            RING_ID_DISABLE(0x1, 0),
        ],
        R0_WBM2SW0_RELEASE_RING_BASE_LSB @ 0xe08 [],
        R0_WBM2SW0_RELEASE_RING_BASE_MSB @ 0xe0c .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_WBM2SW1_RELEASE_RING_BASE_LSB @ 0xe80 [],
        R2_SW_RELEASE_RING_HP @ 0x3010 [],
        R2_WBM_IDLE_LINK_RING_HP @ 0x30b8 [],
        R2_WBM2SW0_RELEASE_RING_HP @ 0x30c8 [],
        R2_WBM2SW1_RELEASE_RING_HP @ 0x30d0 [],
        R0_WBM_CFG_2 @ 0x90 .rmsk(0x4b) .por(0x40) .por_rmsk(0xffffffff) .attr(3) [
            COOKIE_DEBUG_SEL(0x40, 6),
            COOKIE_CONV_INDICATION_EN(0x8, 3),
            ERROR_PATH_COOKIE_CONV_EN(0x2, 1),
            RELEASE_PATH_COOKIE_CONV_EN(0x1, 0),
        ],
    }

    /// Rx reorder engine.
    pub mod reo @ 0x38000 {
        R0_GENERAL_ENABLE @ 0x0 [
            AGING_FLUSH_ENABLE(0x8, 3),
            AGING_LIST_ENABLE(0x4, 2),
        ],
        R0_DESTINATION_RING_CTRL_IX_2 @ 0xc [],
        R0_DESTINATION_RING_CTRL_IX_3 @ 0x10 [],
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
        R0_ERROR_DESTINATION_MAPPING_IX_1 @ 0x2c [],
        R0_PN_IN_DEST @ 0x4c [],
        R0_SW_COOKIE_CFG0 @ 0x50 [],
        R0_SW_COOKIE_CFG1 @ 0x54 [
            SW_COOKIE_CONVERT_GLOBAL_ENABLE(0x100000, 20),
            SW_COOKIE_CONVERT_ENABLE(0x80000, 19),
            PAGE_ALIGNMENT(0x40000, 18),
            COOKIE_OFFSET_MSB(0x3e000, 13),
            COOKIE_PAGE_MSB(0x1f00, 8),
            CMEM_LUT_BASE_ADDR_39_32(0xff, 0),
        ],
        R0_REO_CMD_RING_BASE_LSB @ 0x28c [],
        R0_REO_CMD_RING_BASE_MSB @ 0x290 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_SW2REO_RING_BASE_LSB @ 0x304 [],
        R0_SW2REO_RING_BASE_MSB @ 0x308 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_REO2SW1_RING_BASE_LSB @ 0x4e4 [],
        R0_REO2SW1_RING_BASE_MSB @ 0x4e8 [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_REO2SW1_RING_ID @ 0x4ec [],
        R0_REO2SW1_RING_MISC @ 0x4f4 [],
        R0_REO2SW1_RING_HP_ADDR_LSB @ 0x4f8 [],
        R0_REO2SW1_RING_HP_ADDR_MSB @ 0x4fc [],
        R0_REO2SW1_RING_PRODUCER_INT_SETUP @ 0x508 [],
        R0_REO2SW1_RING_MSI1_BASE_LSB @ 0x52c [],
        R0_REO2SW1_RING_MSI1_BASE_MSB @ 0x530 [],
        R0_REO2SW1_RING_MSI1_DATA @ 0x534 [],
        R0_REO2SW1_RING_PRODUCER_INT2_SETUP @ 0x538 [],
        R0_REO2SW1_RING_MSI2_BASE_LSB @ 0x53c [],
        R0_REO2SW1_RING_MSI2_BASE_MSB @ 0x540 [],
        R0_REO2SW1_RING_MSI2_DATA @ 0x544 [],
        R0_REO2SW2_RING_BASE_LSB @ 0x55c [],
        R0_REO2SW0_RING_BASE_LSB @ 0x8a4 [],
        R0_REO2SW0_RING_BASE_MSB @ 0x8a8 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_REO_STATUS_RING_BASE_LSB @ 0xa84 [],
        R0_REO_STATUS_RING_BASE_MSB @ 0xa88 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_AGING_THRESHOLD_IX_0 @ 0xb08 [],
        R0_AGING_THRESHOLD_IX_1 @ 0xb0c [],
        R0_AGING_THRESHOLD_IX_2 @ 0xb10 [],
        R0_AGING_THRESHOLD_IX_3 @ 0xb14 [],
        R0_MISC_CTL @ 0xb7c [
            BAR_DEST_RING(0x1e00000, 21),
            FRAGMENT_DEST_RING(0x1e0000, 17),
        ],
        R2_REO_CMD_RING_HP @ 0x3020 [],
        R2_SW2REO_RING_HP @ 0x3028 [],
        R2_REO2SW1_RING_HP @ 0x3048 [],
        R2_REO2SW1_RING_TP @ 0x304c [],
        R2_REO2SW2_RING_HP @ 0x3050 [],
        R2_REO2SW0_RING_HP @ 0x3088 [],
        R2_REO_STATUS_RING_HP @ 0x30a8 [],
    }

    /// Transmit classifier.
    pub mod tcl @ 0x44000 {
        R0_CONS_RING_CMN_CTRL_REG @ 0x20 [
            DSCP_TID_MAP_PROGRAM_EN(0x800000, 23),
        ],
        R0_SW_CONFIG_BANK_n @ 0x8c .strided(0x4) [],
        R0_DSCP_TID_MAP_n @ 0x240 .strided(0x4) .rmsk(0xffffffff) [],
        R0_PCP_TID_MAP @ 0x6c0 .rmsk(0xffffff) [],
        R0_TID_MAP_PRTY @ 0x6e8 .rmsk(0xef) [],
        R0_SW2TCL1_RING_BASE_LSB @ 0x900 [],
        R0_SW2TCL1_RING_BASE_MSB @ 0x904 [
            RING_SIZE(0xfffff00, 8),
            RING_BASE_ADDR_MSB(0xff, 0),
        ],
        R0_SW2TCL1_RING_ID @ 0x908 [
            ENTRY_SIZE(0xff, 0),
        ],
        R0_SW2TCL1_RING_MISC @ 0x910 [
            DATA_TLV_SWAP_BIT(0x20, 5),
            HOST_FW_SWAP_BIT(0x10, 4),
            MSI_SWAP_BIT(0x8, 3),
            LOOPCNT_DISABLE(0x2, 1),
            RING_ID_DISABLE(0x1, 0),
        ],
        R0_SW2TCL1_RING_TP_ADDR_LSB @ 0x91c [],
        R0_SW2TCL1_RING_TP_ADDR_MSB @ 0x920 [],
        R0_SW2TCL1_RING_CONSUMER_INT_SETUP_IX0 @ 0x930 [
            INTERRUPT_TIMER_THRESHOLD(0xffff0000, 16),
            BATCH_COUNTER_THRESHOLD(0x7fff, 0),
        ],
        R0_SW2TCL1_RING_CONSUMER_INT_SETUP_IX1 @ 0x934 [
            LOW_THRESHOLD(0xffff, 0),
        ],
        R0_SW2TCL1_RING_MSI1_BASE_LSB @ 0x948 [],
        R0_SW2TCL1_RING_MSI1_BASE_MSB @ 0x94c [
            MSI1_ENABLE(0x100, 8),
            ADDR(0xff, 0),
        ],
        R0_SW2TCL1_RING_MSI1_DATA @ 0x950 [],
        R0_SW2TCL2_RING_BASE_LSB @ 0x978 [],
        R0_SW2TCL_CREDIT_RING_BASE_LSB @ 0xb58 [],
        R0_SW2TCL_CREDIT_RING_BASE_MSB @ 0xb5c .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_TCL_STATUS1_RING_BASE_LSB @ 0xd38 [],
        R0_TCL_STATUS1_RING_BASE_MSB @ 0xd3c .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R2_SW2TCL1_RING_HP @ 0x2000 [],
        R2_SW2TCL1_RING_TP @ 0x2004 [],
        R2_SW2TCL2_RING_HP @ 0x2008 [],
        R2_SW2TCL_CREDIT_RING_HP @ 0x2028 [],
        R2_TCL_STATUS1_RING_HP @ 0x2048 [],
    }
}
