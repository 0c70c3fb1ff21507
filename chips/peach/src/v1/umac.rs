// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated register constants for the peach v1 UMAC.
//!
//! Offsets are relative to `UMAC_BASE`.

use wlan_hwio::hwio_registers;

hwio_registers! {
    /// UMAC bus interface. Addressed through a runtime base.
    pub mod umac_mxi {
        R0_MXI_NULL_REMAP_CFG_REG @ 0xa0 .rmsk(0x7) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            SIZE_OF_NULL_REMAP(0x7, 0),
        ],
        R0_WMAC_GXI_GXI_SS_UP_TIMEOUT_INT_CTRL @ 0xa4 .rmsk(0x1ffffff) .por(0x1ffe) .por_rmsk(0xffffffff) .attr(3) [
            GXI_SS_UP_TIMEOUT_STATS(0x1ffe000, 13),
            GXI_SS_UP_TIMEOUT_LIMIT(0x1ffe, 1),
            GXI_SS_UP_TIMEOUT_INT(0x1, 0),
        ],
        R0_WMAC_GXI_GXI_ZERO_ERR_STATS @ 0xd8 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            RD_ZERO_ADDR_PORT(0xff000000, 24),
            RD_ZERO_SIZE_PORT(0xff0000, 16),
            WR_ZERO_ADDR_PORT(0xff00, 8),
            WR_ZERO_SIZE_PORT(0xff, 0),
        ],
        R0_MXI_TRACKING_TRANSACTION_TIME_n @ 0x1a4 .indexed(0x4, 3) .rmsk(0xfff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            TRANSACTION_TIME(0xfff, 0),
        ],
        R0_GXI_TXN_HALT_ACK_CONFIG @ 0x1c4 .rmsk(0x3) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            TXN_HALT_ACK(0x2, 1),
            TXN_HALT_EN(0x1, 0),
        ],
        R1_MXI_TESTBUS_CAPTURE_n @ 0x508 .indexed(0x4, 63) .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            DATA(0xffffffff, 0),
        ],
    }

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
        R0_WBM_CFG_2 @ 0x90 .rmsk(0x4b) .por(0x40) .por_rmsk(0xffffffff) .attr(3) [
            COOKIE_DEBUG_SEL(0x40, 6),
            COOKIE_CONV_INDICATION_EN(0x8, 3),
            ERROR_PATH_COOKIE_CONV_EN(0x2, 1),
            RELEASE_PATH_COOKIE_CONV_EN(0x1, 0),
        ],
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
        R0_MULTI_SRNG_CONS_RING_MISC_COMMON @ 0x1408 .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_MULTI_SRNG_CONS_RING_MISC_COMMON_EXT @ 0x140c .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_MULTI_SRNG_PROD_RING_MISC_COMMON @ 0x1410 .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_MULTI_SRNG_PROD_RING_MISC_COMMON_EXT @ 0x1414 .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_LPM_FW_CTRL @ 0x1418 .rmsk(0x3f) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            SLEEP_REQ_ACK_OVR_SRNG_P(0x20, 5),
            SLEEP_REQ_ACK_OVR_SRNG_C(0x10, 4),
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_P(0x8, 3),
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_C(0x4, 2),
            SLEEP_REQ_ACK_OVR_TOP(0x2, 1),
            SLEEP_REQ(0x1, 0),
        ],
        R0_IDLE_SEQ_FIFO_CTRL @ 0x141c .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            MISC_SPARE(0xffe00000, 21),
            CMD_UD_CNT(0x1f0000, 16),
            UD_CNT(0xf800, 11),
            WR_PTR(0x7c0, 6),
            RD_PTR(0x3e, 1),
            LOAD(0x1, 0),
        ],
        R1_LPM_REQ_HANDLER_STATUS @ 0x2030 .rmsk(0x3ff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            SLEEP_REQ_ACK_SRNG_P(0x200, 9),
            SLEEP_REQ_ACK_SRNG_C(0x100, 8),
            SLEEP_REQ_ACK_MULTI_SRNG_P(0x80, 7),
            SLEEP_REQ_ACK_MULTI_SRNG_C(0x40, 6),
            SLEEP_REQ_ACK_TOP(0x20, 5),
            SLEEP_REQ_ACK_TO_LPM(0x10, 4),
            SLEEP_REQ_FROM_LPM(0x8, 3),
            SM_STATE(0x7, 0),
        ],
        R1_TESTBUS_CAPTURE_n @ 0x2034 .indexed(0x4, 255) .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            DATA(0xffffffff, 0),
        ],
        R2_SW_RELEASE_RING_HP @ 0x3010 [],
        R2_WBM_IDLE_LINK_RING_HP @ 0x30b8 [],
        R2_WBM2SW0_RELEASE_RING_HP @ 0x30c8 [],
        R2_WBM2SW1_RELEASE_RING_HP @ 0x30d0 [],
    }

    /// Rx reorder engine.
    pub mod reo @ 0x38000 {
        R0_GENERAL_ENABLE @ 0x0 [
            AGING_FLUSH_ENABLE(0x8, 3),
            AGING_LIST_ENABLE(0x4, 2),
        ],
        R0_DESTINATION_RING_CTRL_IX_2 @ 0xc [],
        R0_DESTINATION_RING_CTRL_IX_3 @ 0x10 [],
        R0_DESTINATION_RING_CTRL_TID_BASED_IX_0 @ 0x14 .rmsk(0xffffffff) .por(0x76543210) .por_rmsk(0xffffffff) .attr(3) [
            DEST_RING_MAPPING_TID_BASED_7(0xf0000000, 28),
            DEST_RING_MAPPING_TID_BASED_6(0xf000000, 24),
            DEST_RING_MAPPING_TID_BASED_5(0xf00000, 20),
            DEST_RING_MAPPING_TID_BASED_4(0xf0000, 16),
            DEST_RING_MAPPING_TID_BASED_3(0xf000, 12),
            DEST_RING_MAPPING_TID_BASED_2(0xf00, 8),
            DEST_RING_MAPPING_TID_BASED_1(0xf0, 4),
            DEST_RING_MAPPING_TID_BASED_0(0xf, 0),
        ],
        R0_DESTINATION_RING_CTRL_TID_BASED_IX_1 @ 0x18 .rmsk(0xffffffff) .por(0x66666a98) .por_rmsk(0xffffffff) .attr(3) [
            DEST_RING_MAPPING_TID_BASED_15(0xf0000000, 28),
            DEST_RING_MAPPING_TID_BASED_14(0xf000000, 24),
            DEST_RING_MAPPING_TID_BASED_13(0xf00000, 20),
            DEST_RING_MAPPING_TID_BASED_12(0xf0000, 16),
            DEST_RING_MAPPING_TID_BASED_11(0xf000, 12),
            DEST_RING_MAPPING_TID_BASED_10(0xf00, 8),
            DEST_RING_MAPPING_TID_BASED_9(0xf0, 4),
            DEST_RING_MAPPING_TID_BASED_8(0xf, 0),
        ],
        R0_DESTINATION_RING_CTRL_TID_BASED_IX_2 @ 0x1c .rmsk(0xffffffff) .por(0x66666666) .por_rmsk(0xffffffff) .attr(3) [
            DEST_RING_MAPPING_TID_BASED_23(0xf0000000, 28),
            DEST_RING_MAPPING_TID_BASED_22(0xf000000, 24),
            DEST_RING_MAPPING_TID_BASED_21(0xf00000, 20),
            DEST_RING_MAPPING_TID_BASED_20(0xf0000, 16),
            DEST_RING_MAPPING_TID_BASED_19(0xf000, 12),
            DEST_RING_MAPPING_TID_BASED_18(0xf00, 8),
            DEST_RING_MAPPING_TID_BASED_17(0xf0, 4),
            DEST_RING_MAPPING_TID_BASED_16(0xf, 0),
        ],
        R0_DESTINATION_RING_CTRL_TID_BASED_IX_3 @ 0x20 .rmsk(0xffffffff) .por(0x66666666) .por_rmsk(0xffffffff) .attr(3) [
            DEST_RING_MAPPING_TID_BASED_31(0xf0000000, 28),
            DEST_RING_MAPPING_TID_BASED_30(0xf000000, 24),
            DEST_RING_MAPPING_TID_BASED_29(0xf00000, 20),
            DEST_RING_MAPPING_TID_BASED_28(0xf0000, 16),
            DEST_RING_MAPPING_TID_BASED_27(0xf000, 12),
            DEST_RING_MAPPING_TID_BASED_26(0xf00, 8),
            DEST_RING_MAPPING_TID_BASED_25(0xf0, 4),
            DEST_RING_MAPPING_TID_BASED_24(0xf, 0),
        ],
        R0_ERROR_DESTINATION_MAPPING_IX_0 @ 0x38 [
            ERROR_DESTINATION_RING_7(0xf0000000, 28),
            ERROR_DESTINATION_RING_6(0xf000000, 24),
            ERROR_DESTINATION_RING_5(0xf00000, 20),
            ERROR_DESTINATION_RING_4(0xf0000, 16),
            ERROR_DESTINATION_RING_3(0xf000, 12),
            ERROR_DESTINATION_RING_2(0xf00, 8),
            ERROR_DESTINATION_RING_1(0xf0, 4),
            ERROR_DESTINATION_RING_0(0xf, 0),
        ],
        R0_ERROR_DESTINATION_MAPPING_IX_1 @ 0x3c [],
        R0_ERROR_DESTINATION_MAPPING_TID_BASED_IX_0 @ 0x40 .rmsk(0xffffffff) .por(0x55555555) .por_rmsk(0xffffffff) .attr(3) [
            ERROR_DESTINATION_RING_TID_BASED_7(0xf0000000, 28),
            ERROR_DESTINATION_RING_TID_BASED_6(0xf000000, 24),
            ERROR_DESTINATION_RING_TID_BASED_5(0xf00000, 20),
            ERROR_DESTINATION_RING_TID_BASED_4(0xf0000, 16),
            ERROR_DESTINATION_RING_TID_BASED_3(0xf000, 12),
            ERROR_DESTINATION_RING_TID_BASED_2(0xf00, 8),
            ERROR_DESTINATION_RING_TID_BASED_1(0xf0, 4),
            ERROR_DESTINATION_RING_TID_BASED_0(0xf, 0),
        ],
        R0_ERROR_DESTINATION_MAPPING_TID_BASED_IX_1 @ 0x44 .rmsk(0xffffffff) .por(0x55555555) .por_rmsk(0xffffffff) .attr(3) [
            ERROR_DESTINATION_RING_TID_BASED_OTHER(0xf0000000, 28),
            ERROR_DESTINATION_RING_TID_BASED_14(0xf000000, 24),
            ERROR_DESTINATION_RING_TID_BASED_13(0xf00000, 20),
            ERROR_DESTINATION_RING_TID_BASED_12(0xf0000, 16),
            ERROR_DESTINATION_RING_TID_BASED_11(0xf000, 12),
            ERROR_DESTINATION_RING_TID_BASED_10(0xf00, 8),
            ERROR_DESTINATION_RING_TID_BASED_9(0xf0, 4),
            ERROR_DESTINATION_RING_TID_BASED_8(0xf, 0),
        ],
        R0_RDI_CTRL_SEL_WITH_TID @ 0x48 .rmsk(0x1ffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            TID_CTRL(0x1ffff, 0),
        ],
        R0_PN_IN_DEST @ 0x68 [],
        R0_SW_COOKIE_CFG0 @ 0x6c [],
        R0_SW_COOKIE_CFG1 @ 0x70 [
            SW_COOKIE_CONVERT_GLOBAL_ENABLE(0x100000, 20),
            SW_COOKIE_CONVERT_ENABLE(0x80000, 19),
            PAGE_ALIGNMENT(0x40000, 18),
            COOKIE_OFFSET_MSB(0x3e000, 13),
            COOKIE_PAGE_MSB(0x1f00, 8),
            CMEM_LUT_BASE_ADDR_39_32(0xff, 0),
        ],
        R0_REO_CMD_RING_BASE_LSB @ 0x2a8 [],
        R0_REO_CMD_RING_BASE_MSB @ 0x2ac .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_SW2REO_RING_BASE_LSB @ 0x320 [],
        R0_SW2REO_RING_BASE_MSB @ 0x324 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_REO2SW1_RING_BASE_LSB @ 0x500 [],
        R0_REO2SW1_RING_BASE_MSB @ 0x504 [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_REO2SW1_RING_ID @ 0x508 [],
        R0_REO2SW1_RING_MISC @ 0x510 [
            TRANSACTION_TYPE(0x8000000, 27),
        ],
        R0_REO2SW1_RING_HP_ADDR_LSB @ 0x514 [],
        R0_REO2SW1_RING_HP_ADDR_MSB @ 0x518 [],
        R0_REO2SW1_RING_PRODUCER_INT_SETUP @ 0x524 [],
        R0_REO2SW1_RING_MSI1_BASE_LSB @ 0x548 [],
        R0_REO2SW1_RING_MSI1_BASE_MSB @ 0x54c [],
        R0_REO2SW1_RING_MSI1_DATA @ 0x550 [],
        R0_REO2SW1_RING_MISC_1 @ 0x574 [
            TIME_THRESHOLD_TO_UPDATE(0xffff0000, 16),
            NUM_THRESHOLD_TO_UPDATE(0x3f, 0),
        ],
        R0_REO2SW1_RING_PRODUCER_INT2_SETUP @ 0x554 [],
        R0_REO2SW1_RING_MSI2_BASE_LSB @ 0x558 [],
        R0_REO2SW1_RING_MSI2_BASE_MSB @ 0x55c [],
        R0_REO2SW1_RING_MSI2_DATA @ 0x560 [],
        R0_REO2SW2_RING_BASE_LSB @ 0x578 [],
        R0_REO2SW0_RING_BASE_LSB @ 0x8c0 [],
        R0_REO2SW0_RING_BASE_MSB @ 0x8c4 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_REO_STATUS_RING_BASE_LSB @ 0xaa0 [],
        R0_REO_STATUS_RING_BASE_MSB @ 0xaa4 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_MISC_CFG @ 0xb24 .rmsk(0x1) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            CREDIT_BASED_MECH_EN(0x1, 0),
        ],
        R0_MSDU_BUF_COUNT_CFG @ 0xb28 .rmsk(0x1ff) .por(0x2d) .por_rmsk(0xffffffff) .attr(3) [
            THRESHOLD_BUF_COUNT(0x1fe, 1),
            DROP_EN(0x1, 0),
        ],
        R0_AGING_THRESHOLD_IX_0 @ 0xb2c [],
        R0_AGING_THRESHOLD_IX_1 @ 0xb30 [],
        R0_AGING_THRESHOLD_IX_2 @ 0xb34 [],
        R0_AGING_THRESHOLD_IX_3 @ 0xb38 [],
        R0_MISC_CTL @ 0xba0 [
            BAR_DEST_RING(0x1e00000, 21),
            FRAGMENT_DEST_RING(0x1e0000, 17),
        ],
        R0_REO_MULTI_SRNG_CONS_RING_MISC_COMMON @ 0xd78 .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_REO_MULTI_SRNG_CONS_RING_MISC_COMMON_EXT @ 0xd7c .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_REO_MULTI_SRNG_PROD_RING_MISC_COMMON @ 0xd80 .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_REO_MULTI_SRNG_PROD_RING_MISC_COMMON_EXT @ 0xd84 .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_CREDIT @ 0xd88 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            VAL(0xffffffff, 0),
        ],
        R0_CREDIT_AVAIL_RING_MASK @ 0xd8c .rmsk(0x7) .por(0x2) .por_rmsk(0xffffffff) .attr(3) [
            ENABLE(0x7, 0),
        ],
        R0_CREDIT_COUNTER_STATUS @ 0xd90 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            VAL(0xffffffff, 0),
        ],
        R0_LPM_FW_CTRL @ 0xdbc .rmsk(0x7) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_P(0x4, 2),
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_C(0x2, 1),
            SLEEP_REQ(0x1, 0),
        ],
        R1_CACHE_CTL_DEBUG_OWNER_CHECK_ADDR_HIGH @ 0x2054 .rmsk(0xff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            ADDR_39_32(0xff, 0),
        ],
        R1_CACHE_CTL_DEBUG_OWNER_CHECK_ADDR_LOW @ 0x2058 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            ADDR_31_0(0xffffffff, 0),
        ],
        R1_CACHE_CTL_DEBUG_CACHE_SNAPSHOT_ADDR_HIGH @ 0x205c .rmsk(0xff) .por(0x0) .por_rmsk(0xffffffff) .attr(2) [
            ADDR_39_32(0xff, 0),
        ],
        R1_CACHE_CTL_DEBUG_CACHE_SNAPSHOT_ADDR_LOW @ 0x2060 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(2) [
            ADDR_31_0(0xffffffff, 0),
        ],
        R1_CACHE_CTL_DEBUG_CACHE_SNAPSHOT_CAP_CONTROL @ 0x2064 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CTRL(0xffff0000, 16),
            ARMED_CAPTURE_TRIGGER(0xfff0, 4),
            CAPTURE_ARMED_DONE(0x8, 3),
            CAPTURE_ARMED(0x4, 2),
            CAPTURE_NOW_DONE_STATUS(0x2, 1),
            CAPTURE_NOW(0x1, 0),
        ],
        R1_MISC_DEBUG_STATUS @ 0x20c0 .rmsk(0x3f) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            BUF_COUNT_EXCEEDED_FLAG_2(0x20, 5),
            TMP_FIFO_FULL_2(0x10, 4),
            TMP_CMD_FIFO_FULL_2(0x8, 3),
            BUF_COUNT_EXCEEDED_FLAG(0x4, 2),
            TMP_FIFO_FULL(0x2, 1),
            TMP_CMD_FIFO_FULL(0x1, 0),
        ],
        R1_DEBUG_COUNTER_MSDU_BUF_COUNT_EXCEEDED @ 0x20c4 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            COUNT(0xffffffff, 0),
        ],
        R1_LPM_REQ_HANDLER_STATUS @ 0x20cc .rmsk(0x7f) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            SLEEP_REQ_ACK_MULTI_SRNG_P(0x40, 6),
            SLEEP_REQ_ACK_MULTI_SRNG_C(0x20, 5),
            SLEEP_REQ_ACK_TO_LPM(0x10, 4),
            SLEEP_REQ_FROM_LPM(0x8, 3),
            SM_STATE(0x7, 0),
        ],
        R1_TESTBUS_CAPTURE_n @ 0x20d0 .indexed(0x4, 255) .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            DATA(0xffffffff, 0),
        ],
        R2_REO_CMD_RING_HP @ 0x3020 [],
        R2_SW2REO_RING_HP @ 0x3028 [],
        R2_REO2SW1_RING_HP @ 0x3048 [],
        R2_REO2SW1_RING_TP @ 0x304c [],
        R2_REO2SW2_RING_HP @ 0x3050 [],
        R2_REO2SW0_RING_HP @ 0x3088 [],
        R2_REO_STATUS_RING_HP @ 0x30a8 [],
    }

    /// Transmit queue manager. Its offset from `UMAC_BASE` is not
    /// part of the register database.
    pub mod tqm {
        R0_TQM_MULTI_SRNG_PROD_RING_MISC_COMMON @ 0x3f4 .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_TQM_MULTI_SRNG_PROD_RING_MISC_COMMON_EXT @ 0x3f8 .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_TQM_MULTI_SRNG_CONS_RING_MISC_COMMON @ 0x3fc .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_TQM_MULTI_SRNG_CONS_RING_MISC_COMMON_EXT @ 0x400 .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_LPM_FW_CTRL @ 0x480 .rmsk(0xf) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_P(0x8, 3),
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_C(0x4, 2),
            SLEEP_REQ_ACK_OVR_TOP(0x2, 1),
            SLEEP_REQ(0x1, 0),
        ],
        R0_CLKGATE_CTRL_2 @ 0x484 .rmsk(0x3) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            CLKGATE_DISABLE_TESTBUS_APB_CAPTURE(0x2, 1),
            CLKGATE_DISABLE_LPM_HANDLER(0x1, 0),
        ],
        R0_DROPPED_MSDU_COUNT_VDEV_ID_MISMATCH @ 0x508 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            VALUE(0xffffffff, 0),
        ],
        R0_DROPPED_MSDU_BYTE_COUNT_VDEV_ID_MISMATCH_0 @ 0x50c .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            VALUE(0xffffffff, 0),
        ],
        R0_DROPPED_MSDU_BYTE_COUNT_VDEV_ID_MISMATCH_1 @ 0x510 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            VALUE(0xffffffff, 0),
        ],
        R0_WATCHDOG_SRNG @ 0x51c .rmsk(0xfff) .por(0x710) .por_rmsk(0xffffffff) .attr(3) [
            LIMIT(0xfff, 0),
        ],
        R1_CACHE_CTL_DEBUG_OWNER_CHECK_ADDR_HIGH @ 0x204c .rmsk(0xff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            ADDR_39_32(0xff, 0),
        ],
        R1_CACHE_CTL_DEBUG_OWNER_CHECK_ADDR_LOW @ 0x2050 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            ADDR_31_0(0xffffffff, 0),
        ],
        R1_CACHE_CTL_DEBUG_CACHE_SNAPSHOT_ADDR_HIGH @ 0x2054 .rmsk(0xff) .por(0x0) .por_rmsk(0xffffffff) .attr(2) [
            ADDR_39_32(0xff, 0),
        ],
        R1_CACHE_CTL_DEBUG_CACHE_SNAPSHOT_ADDR_LOW @ 0x2058 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(2) [
            ADDR_31_0(0xffffffff, 0),
        ],
        R1_CACHE_CTL_DEBUG_CACHE_SNAPSHOT_CAP_CONTROL @ 0x205c .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CTRL(0xffff0000, 16),
            ARMED_CAPTURE_TRIGGER(0xfff0, 4),
            CAPTURE_ARMED_DONE(0x8, 3),
            CAPTURE_ARMED(0x4, 2),
            CAPTURE_NOW_DONE_STATUS(0x2, 1),
            CAPTURE_NOW(0x1, 0),
        ],
        R1_SW_CMD_PROCESSING @ 0x2060 .rmsk(0x1ffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            DELAY_VALUE(0x1ffff, 0),
        ],
        R1_ENT_CMD_PROCESSING @ 0x2064 .rmsk(0x1ffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            DELAY_VALUE(0x1ffff, 0),
        ],
        R1_HW_CMD_PROCESSING @ 0x2068 .rmsk(0x1ffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            DELAY_VALUE(0x1ffff, 0),
        ],
        R1_DELAY_PROCESSING_STATUS @ 0x206c .rmsk(0xf) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            ENT_ONE_SHOT_DELAY_DONE(0x8, 3),
            HW_ONE_SHOT_DELAY_DONE(0x4, 2),
            SW_ONE_SHOT_DELAY_DONE(0x2, 1),
            ENT_DELAY_PROCESSING_DONE(0x1, 0),
        ],
        R1_TOTAL_TX_MPDU_COUNT @ 0x2070 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            VALUE(0xffffffff, 0),
        ],
        R1_TOTAL_ACKED_MPDU_COUNT @ 0x2074 .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            VALUE(0xffffffff, 0),
        ],
        R1_LPM_REQ_HANDLER_STATUS @ 0x2078 .rmsk(0xff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            SLEEP_REQ_ACK_MULTI_SRNG_P(0x80, 7),
            SLEEP_REQ_ACK_MULTI_SRNG_C(0x40, 6),
            SLEEP_REQ_ACK_TOP(0x20, 5),
            SLEEP_REQ_ACK_TO_LPM(0x10, 4),
            SLEEP_REQ_FROM_LPM(0x8, 3),
            SM_STATE(0x7, 0),
        ],
        R1_TESTBUS_CAPTURE_n @ 0x2114 .indexed(0x4, 127) .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            DATA(0xffffffff, 0),
        ],
    }

    /// UMAC common registers. Addressed through a runtime base.
    pub mod umcmn {
        R0_TX_TIMESTAMP_RESOLUTION_SELECT @ 0x168 .rmsk(0xf) .por(0xa) .por_rmsk(0xffffffff) .attr(3) [
            VALUE(0xf, 0),
        ],
        R0_LPM_FW_CTRL @ 0x16c .rmsk(0x1f) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            SLEEP_REQ_ACK_OVR_REO(0x10, 4),
            SLEEP_REQ_ACK_OVR_WBM(0x8, 3),
            SLEEP_REQ_ACK_OVR_TQM(0x4, 2),
            SLEEP_REQ_ACK_OVR_TCL(0x2, 1),
            SLEEP_REQ(0x1, 0),
        ],
        R0_LINK_ID @ 0x170 .rmsk(0xffff) .por(0x52c8) .por_rmsk(0xffffffff) .attr(3) [
            WLAN1_LINK_EN(0x80, 7),
            WLAN0_LINK_EN(0x40, 6),
            WLAN1_LINK_ID(0x38, 3),
            WLAN0_LINK_ID(0x7, 0),
        ],
        R0_EVENT_MODE_SELECT @ 0x184 .rmsk(0x1) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            VAL(0x1, 0),
        ],
        R0_SIMULATED_WCSS_EVENT_BPGEN_CFG @ 0x188 .rmsk(0x1ffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            BACK_TO_BACK_BACKPRESSURE_COUNT(0x1fe00, 9),
            BACK_TO_BACK_ALLOWED_VALID_COUNT(0x1fe, 1),
            SIMULATED_BACKPRESSURE_ENABLE(0x1, 0),
        ],
        R1_LPM_REQ_HANDLER_STATUS @ 0x2010 .rmsk(0x1ff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            SLEEP_REQ_ACK_REO(0x100, 8),
            SLEEP_REQ_ACK_WBM(0x80, 7),
            SLEEP_REQ_ACK_TQM(0x40, 6),
            SLEEP_REQ_ACK_TCL(0x20, 5),
            SLEEP_REQ_ACK_TO_LPM(0x10, 4),
            SLEEP_REQ_FROM_LPM(0x8, 3),
            SM_STATE(0x7, 0),
        ],
        R1_RETENTION_SPARE_REGISTER_n @ 0x2014 .indexed(0x4, 7) .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            VAL(0xffffffff, 0),
        ],
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
        R0_CLKGATE_DISABLE2 @ 0x8b4 .rmsk(0x3) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            MULTI_SRNG_P(0x2, 1),
            MULTI_SRNG_C(0x1, 0),
        ],
        R0_LPM_FW_CTRL @ 0x914 .rmsk(0x7) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_P(0x4, 2),
            SLEEP_REQ_ACK_OVR_MULTI_SRNG_C(0x2, 1),
            SLEEP_REQ(0x1, 0),
        ],
        R0_SW2TCL1_RING_BASE_LSB @ 0x918 [],
        R0_SW2TCL1_RING_BASE_MSB @ 0x91c [
            RING_SIZE(0xfffff00, 8),
            RING_BASE_ADDR_MSB(0xff, 0),
        ],
        R0_SW2TCL1_RING_ID @ 0x920 [
            ENTRY_SIZE(0xff, 0),
        ],
        R0_SW2TCL1_RING_MISC @ 0x928 [
            TRANSACTION_TYPE(0x400000, 22),
            DATA_TLV_SWAP_BIT(0x20, 5),
            HOST_FW_SWAP_BIT(0x10, 4),
            MSI_SWAP_BIT(0x8, 3),
            LOOPCNT_DISABLE(0x2, 1),
            RING_ID_DISABLE(0x1, 0),
        ],
        R0_SW2TCL1_RING_TP_ADDR_LSB @ 0x934 [],
        R0_SW2TCL1_RING_TP_ADDR_MSB @ 0x938 [],
        R0_SW2TCL1_RING_CONSUMER_INT_SETUP_IX0 @ 0x948 [
            INTERRUPT_TIMER_THRESHOLD(0xffff0000, 16),
            BATCH_COUNTER_THRESHOLD(0x7fff, 0),
        ],
        R0_SW2TCL1_RING_CONSUMER_INT_SETUP_IX1 @ 0x94c [
            LOW_THRESHOLD(0xffff, 0),
        ],
        R0_SW2TCL1_RING_MSI1_BASE_LSB @ 0x960 [],
        R0_SW2TCL1_RING_MSI1_BASE_MSB @ 0x964 [
            MSI1_ENABLE(0x100, 8),
            ADDR(0xff, 0),
        ],
        R0_SW2TCL1_RING_MSI1_DATA @ 0x968 [],
        R0_SW2TCL2_RING_BASE_LSB @ 0x990 [],
        R0_SW2TCL_CREDIT_RING_BASE_LSB @ 0xb70 [],
        R0_SW2TCL_CREDIT_RING_BASE_MSB @ 0xb74 .inferred() [
            RING_SIZE(0xfffff00, 8),
        ],
        R0_TCL_STATUS1_RING_BASE_LSB @ 0xd50 [],
        R0_TCL_STATUS1_RING_BASE_MSB @ 0xd54 .inferred() [
            RING_SIZE(0xffff00, 8),
        ],
        R0_MULTI_SRNG_CONS_RING_MISC_COMMON @ 0xedc .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_MULTI_SRNG_CONS_RING_MISC_COMMON_EXT @ 0xee0 .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R0_MULTI_SRNG_PROD_RING_MISC_COMMON @ 0xee4 .rmsk(0x1fffff) .por(0x1000) .por_rmsk(0xffffffff) .attr(3) [
            MISC_CONTROL(0x1fe000, 13),
            SRNG_IS_IDLE(0x1000, 12),
            SRNG_SM1_STATE2(0xc00, 10),
            SRNG_SM1_STATE1(0x3c0, 6),
            SRNG_SM0_STATE2(0x30, 4),
            SRNG_SM0_STATE1(0xf, 0),
        ],
        R0_MULTI_SRNG_PROD_RING_MISC_COMMON_EXT @ 0xee8 .rmsk(0xffffff) .por(0xfff) .por_rmsk(0xffffffff) .attr(3) [
            RING_WATCHDOG_TIMER_STATUS(0xfff000, 12),
            WATCHDOG_TIMEOUT_VALUE(0xfff, 0),
        ],
        R1_LPM_REQ_HANDLER_STATUS @ 0x1000 .rmsk(0x7f) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            SLEEP_REQ_ACK_MULTI_SRNG_P(0x40, 6),
            SLEEP_REQ_ACK_MULTI_SRNG_C(0x20, 5),
            SLEEP_REQ_ACK_TO_LPM(0x10, 4),
            SLEEP_REQ_FROM_LPM(0x8, 3),
            SM_STATE(0x7, 0),
        ],
        R1_TESTBUS_CTRL @ 0x1030 .rmsk(0x1ff) .por(0x0) .por_rmsk(0xffffffff) .attr(3) [
            HW_ERROR_INTERRUPT_TESTBUS_OVERWRITE(0x100, 8),
            BLOCK_SELECT(0xc0, 6),
            SUBBLOCK_SELECT(0x3f, 0),
        ],
        R1_TESTBUS_CAPTURE_n @ 0x1034 .indexed(0x4, 511) .rmsk(0xffffffff) .por(0x0) .por_rmsk(0xffffffff) .attr(1) [
            DATA(0xffffffff, 0),
        ],
        R2_SW2TCL1_RING_HP @ 0x2000 [],
        R2_SW2TCL1_RING_TP @ 0x2004 [],
        R2_SW2TCL2_RING_HP @ 0x2008 [],
        R2_SW2TCL_CREDIT_RING_HP @ 0x2028 [],
        R2_TCL_STATUS1_RING_HP @ 0x2048 [],
    }
}
