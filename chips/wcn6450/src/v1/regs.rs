// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Generated register constants for the wcn6450 v1 copy engines.
//!
//! Offsets are relative to the copy engine register top.

use wlan_hwio::hwio_registers;

hwio_registers! {
    /// Copy engine channel registers. Channel `n` sits at
    /// `BASE + n * 0x1000`.
    pub mod ce @ 0x0 {
        SR_BA_LOW @ 0x0 .rmsk(0xffffffff) [
            BASE_ADDR_LOW(0xffffffff, 0),
        ],
        SR_BA_HIGH @ 0x4 .rmsk(0xff) [
            BASE_ADDR_HIGH(0xff, 0),
        ],
        SR_SIZE @ 0x8 .rmsk(0xffffffff) [
            START_OFFSET(0xffff0000, 16),
            SIZE(0xffff, 0),
        ],
        DR_BA_LOW @ 0xc .rmsk(0xffffffff) [
            BASE_ADDR_LOW(0xffffffff, 0),
        ],
        DR_BA_HIGH @ 0x10 .rmsk(0x3ff) [
            DESC_SKIP_DWORD(0x300, 8),
            BASE_ADDR_HIGH(0xff, 0),
        ],
        DR_SIZE @ 0x14 .rmsk(0xffffffff) [
            START_OFFSET(0xffff0000, 16),
            SIZE(0xffff, 0),
        ],
        CE_CTRL1 @ 0x18 .rmsk(0x1ffffff) [
            TARGET_MSI_EN(0x1000000, 24),
            FW_EN(0x800000, 23),
            SECURITY_DEST(0x400000, 22),
            SECURITY_SRC(0x200000, 21),
            PREFETCH_EN(0x100000, 20),
            IDX_UPD_EN(0x80000, 19),
            DST_RING_BYTE_SWAP_EN(0x40000, 18),
            SRC_RING_BYTE_SWAP_EN(0x20000, 17),
            HOST_MSI_EN(0x10000, 16),
            DEST_MAX_LENGTH(0xffff, 0),
        ],
        CE_CTRL2 @ 0x1c .rmsk(0xf) [
            DST_AXI_MAX_LEN(0xc, 2),
            SRC_AXI_MAX_LEN(0x3, 0),
        ],
        CE_CMD @ 0x20 .rmsk(0xf) [
            HALT_STATUS(0x8, 3),
            DST_FLUSH(0x4, 2),
            SRC_FLUSH(0x2, 1),
            HALT(0x1, 0),
        ],
        TARGET_IE @ 0x24 .rmsk(0x7f) [
            DST_TIMER_BATCH(0x40, 6),
            SRC_TIMER_BATCH(0x20, 5),
            DST_RING_LOW_WATERMARK(0x10, 4),
            DST_RING_HIGH_WATERMARK(0x8, 3),
            SRC_RING_LOW_WATERMARK(0x4, 2),
            SRC_RING_HIGH_WATERMARK(0x2, 1),
            COPY_COMPLETE(0x1, 0),
        ],
        TARGET_IS @ 0x28 .rmsk(0x7f) [
            DST_TIMER_BATCH(0x40, 6),
            SRC_TIMER_BATCH(0x20, 5),
            DST_RING_LOW_WATERMARK(0x10, 4),
            DST_RING_HIGH_WATERMARK(0x8, 3),
            SRC_RING_LOW_WATERMARK(0x4, 2),
            SRC_RING_HIGH_WATERMARK(0x2, 1),
            COPY_COMPLETE(0x1, 0),
        ],
        HOST_IE @ 0x2c .rmsk(0x7f) [
            DST_TIMER_BATCH(0x40, 6),
            SRC_TIMER_BATCH(0x20, 5),
            DST_RING_LOW_WATERMARK(0x10, 4),
            DST_RING_HIGH_WATERMARK(0x8, 3),
            SRC_RING_LOW_WATERMARK(0x4, 2),
            SRC_RING_HIGH_WATERMARK(0x2, 1),
            COPY_COMPLETE(0x1, 0),
        ],
        HOST_IS @ 0x30 .rmsk(0x7f) [
            DST_TIMER_BATCH(0x40, 6),
            SRC_TIMER_BATCH(0x20, 5),
            DST_RING_LOW_WATERMARK(0x10, 4),
            DST_RING_HIGH_WATERMARK(0x8, 3),
            SRC_RING_LOW_WATERMARK(0x4, 2),
            SRC_RING_HIGH_WATERMARK(0x2, 1),
            COPY_COMPLETE(0x1, 0),
        ],
        MISC_IE @ 0x34 .rmsk(0xfffff) [
            PARSER_INT(0xfc000, 14),
            REG_INVAL_ADDR_RD(0x2000, 13),
            REG_INVAL_ADDR_WR(0x1000, 12),
            REG_RO_WR(0x800, 11),
            AXI_TIMEOUT_ERR(0x400, 10),
            AXI_ERR(0x200, 9),
            SRC_LEN_ERR(0x100, 8),
            DST_MAX_LEN_VIO(0x80, 7),
            DST_RING_OVERFLOW(0x40, 6),
            SRC_RING_OVERFLOW(0x20, 5),
            DST_RING_LOW_WATERMARK(0x10, 4),
            DST_RING_HIGH_WATERMARK(0x8, 3),
            SRC_RING_LOW_WATERMARK(0x4, 2),
            SRC_RING_HIGH_WATERMARK(0x2, 1),
            COPY_COMPLETE(0x1, 0),
        ],
        MISC_IS @ 0x38 .rmsk(0xfffff) [
            PARSER_INT(0xfc000, 14),
            REG_INVAL_ADDR_RD(0x2000, 13),
            REG_INVAL_ADDR_WR(0x1000, 12),
            REG_INVAL_RO_WR(0x800, 11),
            AXI_TIMEOUT_ERR(0x400, 10),
            AXI_BUS_ERR(0x200, 9),
            SRC_LEN_ERR(0x100, 8),
            DST_MAX_LEN_VIO(0x80, 7),
            DST_RING_OVERFLOW(0x40, 6),
            SRC_RING_OVERFLOW(0x20, 5),
            DST_RING_LOW_WATERMARK(0x10, 4),
            DST_RING_HIGH_WATERMARK(0x8, 3),
            SRC_RING_LOW_WATERMARK(0x4, 2),
            SRC_RING_HIGH_WATERMARK(0x2, 1),
            COPY_COMPLETE(0x1, 0),
        ],
        SRC_WR_INDEX @ 0x3c .rmsk(0xffff) [
            SRC_WR_INDEX(0xffff, 0),
        ],
        DST_WR_INDEX @ 0x40 .rmsk(0xffff) [
            DST_WR_INDEX(0xffff, 0),
        ],
        CURRENT_SRRI @ 0x44 .rmsk(0xffff) [
            CURRENT_SRRI(0xffff, 0),
        ],
        CURRENT_DRRI @ 0x48 .rmsk(0xffff) [
            CURRENT_DRRI(0xffff, 0),
        ],
        SRC_WATERMARK @ 0x4c .rmsk(0xffffffff) [
            SR_LOW_WATER_MARK_THRESOLD(0xffff0000, 16),
            SR_HIGH_WATER_MARK_THRESHOLD(0xffff, 0),
        ],
        DST_WATERMARK @ 0x50 .rmsk(0xffffffff) [
            DR_LOW_WATER_MARK_THRESHOLD(0xffff0000, 16),
            DR_HIGH_WATER_MARK_THRESHOLD(0xffff, 0),
        ],
        CE_CHANNEL_PRIORITY @ 0x54 .rmsk(0x7) [
            CE_DST_OVERFLOW_MASK(0x4, 2),
            CE_SRC_OVERFLOW_MASK(0x2, 1),
            CE_PRIORITY(0x1, 0),
        ],
        HOST_MSI_ADDR_LOW @ 0x58 .rmsk(0xffffffff) [
            MSI_ADDR_LOW(0xffffffff, 0),
        ],
        HOST_MSI_ADDR_HIGH @ 0x5c .rmsk(0xff) [
            MSI_ADDR_HIGH(0xff, 0),
        ],
        HOST_MSI_DATA @ 0x60 .rmsk(0xffffffff) [
            MSI_DATA(0xffffffff, 0),
        ],
        CE_OBFF_TIMEOUT @ 0x64 .rmsk(0xffff) [
            OBFF_TOLERANCE_TIMEOUT(0xffff, 0),
        ],
        CE_CHANNEL_OBFF_CFG @ 0x68 .rmsk(0x3) [
            OBFF_CE_FLUSH_REQ(0x2, 1),
            OBFF_CE_AUTO_PRIORITY_DISABLE(0x1, 0),
        ],
        CE_WATCHDOG @ 0x6c .rmsk(0xffffffff) [
            STATUS(0xffff0000, 16),
            LIMIT(0xffff, 0),
        ],
        CE_CSM_DBG @ 0x70 .rmsk(0xffffffff) [
            VALUE(0xffffffff, 0),
        ],
        CE_SRC_BATCH_TIMER_INT_SETUP @ 0x74 .rmsk(0xffffffff) [
            INTERRUPT_TIMER_THRESHOLD(0xffff0000, 16),
            SW_INTERRUPT_MODE(0x8000, 15),
            BATCH_COUNTER_THRESHOLD(0x7fff, 0),
        ],
        CE_SRC_BATCH_TIMER_INT_STATUS @ 0x78 .rmsk(0xffffffff) [
            CURRENT_INTERRUPT_TIMER_VALUE(0xffff0000, 16),
            CURRENT_SW_INT_WIRE_VALUE(0x8000, 15),
            INTERNAL_BATCH_COUNTER_VALUE(0x7fff, 0),
        ],
        CE_DST_BATCH_TIMER_INT_SETUP @ 0x7c .rmsk(0xffffffff) [
            INTERRUPT_TIMER_THRESHOLD(0xffff0000, 16),
            SW_INTERRUPT_MODE(0x8000, 15),
            BATCH_COUNTER_THRESHOLD(0x7fff, 0),
        ],
        CE_DST_BATCH_TIMER_INT_STATUS @ 0x80 .rmsk(0xffffffff) [
            CURRENT_INTERRUPT_TIMER_VALUE(0xffff0000, 16),
            CURRENT_SW_INT_WIRE_VALUE(0x8000, 15),
            INTERNAL_BATCH_COUNTER_VALUE(0x7fff, 0),
        ],
        TARGET_MSI_ADDR_LOW @ 0x84 .rmsk(0xffffffff) [
            MSI_ADDR_LOW(0xffffffff, 0),
        ],
        TARGET_MSI_ADDR_HIGH @ 0x88 .rmsk(0xff) [
            MSI_ADDR_HIGH(0xff, 0),
        ],
        TARGET_MSI_DATA @ 0x8c .rmsk(0xffffffff) [
            MSI_DATA(0xffffffff, 0),
        ],
    }

    /// Interrupt summary and shadow index bases shared by all channels.
    pub mod common_wrapper @ 0x10000 {
        CE_WRAPPER_HOST_INTERRUPT_SUMMARY @ 0x0 .rmsk(0xfff000) [
            HOST(0xfff000, 12),
        ],
        CE_WRAPPER_INDEX_BASE_LOW @ 0x4 .rmsk(0xffffffff) [
            VAL(0xffffffff, 0),
        ],
        CE_WRAPPER_INDEX_BASE_HIGH @ 0x8 .rmsk(0xff) [
            VAL(0xff, 0),
        ],
        CE_WRAPPER_FW_INDEX_BASE_LOW @ 0xc .rmsk(0xffffffff) [
            VAL(0xffffffff, 0),
        ],
        CE_WRAPPER_FW_INDEX_BASE_HIGH @ 0x10 .rmsk(0xff) [
            VAL(0xff, 0),
        ],
    }
}
