// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Host ring table shared by the kiwi revisions.
//!
//! `REO2SW1` is the register template of all destination rings and `SW2TCL1`
//! of all source rings. Ring ids follow the host ring numbering: REO rings
//! start at 0, TCL at 24, WBM at 120 and the per-MAC RXDMA rings at 184.

/// Expands to the ring table of one revision. Expects `reo`, `tcl` and `wbm`
/// register blocks in scope.
macro_rules! ring_table {
    () => {
        use wlan_hwio::srng::{RingDirection::*, RingType, SrngConfig};

        const DST_TEMPLATE: [usize; 2] = [
            reo::R0_REO2SW1_RING_BASE_LSB.offset,
            reo::R2_REO2SW1_RING_HP.offset,
        ];
        const SRC_TEMPLATE: [usize; 2] = [
            tcl::R0_SW2TCL1_RING_BASE_LSB.offset,
            tcl::R2_SW2TCL1_RING_HP.offset,
        ];

        pub const REO_DST: SrngConfig = SrngConfig::umac(
            RingType::ReoDst,
            1,
            8,
            Dst,
            [
                reo::BASE + reo::R0_REO2SW1_RING_BASE_LSB.offset,
                reo::BASE + reo::R2_REO2SW1_RING_HP.offset,
            ],
            [
                reo::R0_REO2SW2_RING_BASE_LSB.offset - reo::R0_REO2SW1_RING_BASE_LSB.offset,
                reo::R2_REO2SW2_RING_HP.offset - reo::R2_REO2SW1_RING_HP.offset,
            ],
            DST_TEMPLATE,
            reo::R0_REO2SW1_RING_BASE_MSB::RING_SIZE.mask,
        );

        /// `REO2SW0`, used as the exception ring.
        pub const REO_EXCEPTION: SrngConfig = SrngConfig::umac(
            RingType::ReoException,
            0,
            1,
            Dst,
            [
                reo::BASE + reo::R0_REO2SW0_RING_BASE_LSB.offset,
                reo::BASE + reo::R2_REO2SW0_RING_HP.offset,
            ],
            [0; 2],
            DST_TEMPLATE,
            reo::R0_REO2SW0_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const REO_REINJECT: SrngConfig = SrngConfig::umac(
            RingType::ReoReinject,
            16,
            1,
            Src,
            [
                reo::BASE + reo::R0_SW2REO_RING_BASE_LSB.offset,
                reo::BASE + reo::R2_SW2REO_RING_HP.offset,
            ],
            [0; 2],
            SRC_TEMPLATE,
            reo::R0_SW2REO_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const REO_CMD: SrngConfig = SrngConfig::umac(
            RingType::ReoCmd,
            20,
            1,
            Src,
            [
                reo::BASE + reo::R0_REO_CMD_RING_BASE_LSB.offset,
                reo::BASE + reo::R2_REO_CMD_RING_HP.offset,
            ],
            [0; 2],
            SRC_TEMPLATE,
            reo::R0_REO_CMD_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const REO_STATUS: SrngConfig = SrngConfig::umac(
            RingType::ReoStatus,
            21,
            1,
            Dst,
            [
                reo::BASE + reo::R0_REO_STATUS_RING_BASE_LSB.offset,
                reo::BASE + reo::R2_REO_STATUS_RING_HP.offset,
            ],
            [0; 2],
            DST_TEMPLATE,
            reo::R0_REO_STATUS_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const TCL_DATA: SrngConfig = SrngConfig::umac(
            RingType::TclData,
            24,
            5,
            Src,
            [
                tcl::BASE + tcl::R0_SW2TCL1_RING_BASE_LSB.offset,
                tcl::BASE + tcl::R2_SW2TCL1_RING_HP.offset,
            ],
            [
                tcl::R0_SW2TCL2_RING_BASE_LSB.offset - tcl::R0_SW2TCL1_RING_BASE_LSB.offset,
                tcl::R2_SW2TCL2_RING_HP.offset - tcl::R2_SW2TCL1_RING_HP.offset,
            ],
            SRC_TEMPLATE,
            tcl::R0_SW2TCL1_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const TCL_CMD_CREDIT: SrngConfig = SrngConfig::umac(
            RingType::TclCmdCredit,
            40,
            1,
            Src,
            [
                tcl::BASE + tcl::R0_SW2TCL_CREDIT_RING_BASE_LSB.offset,
                tcl::BASE + tcl::R2_SW2TCL_CREDIT_RING_HP.offset,
            ],
            [0; 2],
            SRC_TEMPLATE,
            tcl::R0_SW2TCL_CREDIT_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const TCL_STATUS: SrngConfig = SrngConfig::umac(
            RingType::TclStatus,
            41,
            1,
            Dst,
            [
                tcl::BASE + tcl::R0_TCL_STATUS1_RING_BASE_LSB.offset,
                tcl::BASE + tcl::R2_TCL_STATUS1_RING_HP.offset,
            ],
            [0; 2],
            DST_TEMPLATE,
            tcl::R0_TCL_STATUS1_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const WBM_IDLE_LINK: SrngConfig = SrngConfig::umac(
            RingType::WbmIdleLink,
            120,
            1,
            Src,
            [
                wbm::BASE + wbm::R0_WBM_IDLE_LINK_RING_BASE_LSB.offset,
                wbm::BASE + wbm::R2_WBM_IDLE_LINK_RING_HP.offset,
            ],
            [0; 2],
            SRC_TEMPLATE,
            wbm::R0_WBM_IDLE_LINK_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const SW2WBM_RELEASE: SrngConfig = SrngConfig::umac(
            RingType::Sw2WbmRelease,
            121,
            1,
            Src,
            [
                wbm::BASE + wbm::R0_SW_RELEASE_RING_BASE_LSB.offset,
                wbm::BASE + wbm::R2_SW_RELEASE_RING_HP.offset,
            ],
            [0; 2],
            SRC_TEMPLATE,
            wbm::R0_SW_RELEASE_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const WBM2SW_RELEASE: SrngConfig = SrngConfig::umac(
            RingType::Wbm2SwRelease,
            128,
            8,
            Dst,
            [
                wbm::BASE + wbm::R0_WBM2SW0_RELEASE_RING_BASE_LSB.offset,
                wbm::BASE + wbm::R2_WBM2SW0_RELEASE_RING_HP.offset,
            ],
            [
                wbm::R0_WBM2SW1_RELEASE_RING_BASE_LSB.offset - wbm::R0_WBM2SW0_RELEASE_RING_BASE_LSB.offset,
                wbm::R2_WBM2SW1_RELEASE_RING_HP.offset - wbm::R2_WBM2SW0_RELEASE_RING_HP.offset,
            ],
            DST_TEMPLATE,
            wbm::R0_WBM2SW0_RELEASE_RING_BASE_MSB::RING_SIZE.mask,
        );

        pub const RINGS: &[SrngConfig] = &[
            REO_DST,
            REO_EXCEPTION,
            REO_REINJECT,
            REO_CMD,
            REO_STATUS,
            TCL_DATA,
            TCL_CMD_CREDIT,
            TCL_STATUS,
            WBM_IDLE_LINK,
            SW2WBM_RELEASE,
            WBM2SW_RELEASE,
            SrngConfig::lmac(RingType::RxdmaBuf, 184, 2, Src),
            SrngConfig::lmac(RingType::RxdmaDst, 189, 1, Dst),
            SrngConfig::lmac(RingType::RxdmaMonitorBuf, 186, 1, Src),
            SrngConfig::lmac(RingType::RxdmaMonitorStatus, 188, 1, Src),
            SrngConfig::lmac(RingType::RxdmaMonitorDst, 190, 1, Dst),
            SrngConfig::lmac(RingType::RxdmaMonitorDesc, 191, 1, Src),
            SrngConfig::lmac(RingType::DirBufRxDmaSrc, 192, 2, Src),
        ];
    };
}

pub(crate) use ring_table;
