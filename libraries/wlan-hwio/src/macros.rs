// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Macros for declaring HWIO register blocks and TLV descriptor layouts.

/// Declares IP blocks of HWIO registers.
///
/// Each block becomes a module holding one [`HwioRegister`] constant per
/// register and, for every register, a module of the same name with its
/// `tock_registers` [`Field`]s, a `FIELDS` table and a `REGISTER` handle for
/// typed access.
///
/// ```rust
/// wlan_hwio::hwio_registers! {
///     pub mod reo @ 0x38000 {
///         R0_GENERAL_ENABLE @ 0x0 [
///             AGING_FLUSH_ENABLE(0x8, 3),
///             AGING_LIST_ENABLE(0x4, 2),
///         ],
///         R1_TESTBUS_CAPTURE_n @ 0x20d0 .indexed(0x4, 255) .attr(0x1) [],
///     }
/// }
///
/// assert_eq!(reo::R0_GENERAL_ENABLE.address(0), 0x0);
/// assert_eq!(reo::R0_GENERAL_ENABLE::AGING_FLUSH_ENABLE.shift, 3);
/// ```
///
/// [`HwioRegister`]: crate::HwioRegister
/// [`Field`]: tock_registers::fields::Field
#[macro_export]
macro_rules! hwio_registers {
    {
        $(
            $(#[$block_attr:meta])*
            $vis:vis mod $block:ident $(@ $base:literal)? {
                $(
                    $(#[$reg_attr:meta])*
                    $reg:ident @ $offset:literal $(. $key:ident ( $($arg:literal),* ))* [
                        $( $(#[$field_attr:meta])* $field:ident ( $bmsk:literal, $shft:literal ) ),*
                        $(,)?
                    ]
                ),*
                $(,)?
            }
        )*
    } => {
        $(
            $(#[$block_attr])*
            #[allow(non_snake_case, non_upper_case_globals, dead_code)]
            $vis mod $block {
                $( pub const BASE: usize = $base; )?

                pub const BASE_OFFSET: ::core::option::Option<usize> =
                    $crate::hwio_base_offset!($($base)?);

                $(
                    $crate::hwio_register!{
                        $(#[$reg_attr])*
                        $reg @ $offset $(. $key ( $($arg),* ))* [
                            $( $(#[$field_attr])* $field ( $bmsk, $shft ) ),*
                        ]
                    }
                )*

                pub const REGISTERS: &[$crate::register::HwioRegister] = &[$($reg),*];

                pub const BLOCK: $crate::chip::BlockMap = $crate::chip::BlockMap {
                    name: stringify!($block),
                    base_offset: BASE_OFFSET,
                    instances: &[],
                    registers: REGISTERS,
                };
            }
        )*
    };
}

/// For internal use by `wlan-hwio`.
#[doc(hidden)]
#[macro_export]
macro_rules! hwio_base_offset {
    () => {
        ::core::option::Option::None
    };
    ($base:literal) => {
        ::core::option::Option::Some($base)
    };
}

/// For internal use by `wlan-hwio`.
#[doc(hidden)]
#[macro_export]
macro_rules! hwio_register {
    {
        $(#[$reg_attr:meta])*
        $reg:ident @ $offset:literal $(. $key:ident ( $($arg:literal),* ))* [
            $( $(#[$field_attr:meta])* $field:ident ( $bmsk:literal, $shft:literal ) ),*
        ]
    } => {
        $(#[$reg_attr])*
        pub const $reg: $crate::register::HwioRegister =
            $crate::register::HwioRegister::new(stringify!($reg), $offset)
                $(.$key($($arg),*))*
                .with_fields($reg::FIELDS);

        pub mod $reg {
            #[derive(Clone, Copy, Debug)]
            pub struct Register;

            impl $crate::reexport::RegisterLongName for Register {}

            $(
                $(#[$field_attr])*
                pub const $field: $crate::reexport::Field<u32, Register> =
                    $crate::reexport::Field::<u32, Register>::new($bmsk >> $shft, $shft);
            )*

            pub const FIELDS: &[$crate::field::HwioField] = &[
                $( $crate::field::HwioField::new(stringify!($field), $bmsk, $shft) ),*
            ];

            pub const REGISTER: $crate::register::TypedRegister<Register> =
                $crate::register::TypedRegister::new(&super::$reg);
        }
    };
}

/// Declares TLV descriptor layouts.
///
/// Every field gives the `_OFFSET`, `_MSB`, `_LSB` and `_MASK` values of the
/// register database. `Dword` layouts count `LSB`/`MSB` inside the 32-bit word
/// at `OFFSET`, `Qword` layouts inside the 64-bit word at `OFFSET`.
///
/// ```rust
/// wlan_hwio::tlv_descriptor! {
///     pub mod tx_flush_req [2; Qword] {
///         FLUSH_TIDS @ 0x0 [7:0] = 0x00000000000000ff,
///         RESERVED @ 0x0 [63:8] = 0xffffffffffffff00,
///     }
/// }
///
/// assert_eq!(tx_flush_req::LAYOUT.bytes(), 8);
/// ```
#[macro_export]
macro_rules! tlv_descriptor {
    {
        $(
            $(#[$attr:meta])*
            $vis:vis mod $name:ident [$dwords:literal; $unit:ident] {
                $(
                    $(#[$field_attr:meta])*
                    $field:ident @ $offset:literal [$msb:literal : $lsb:literal] = $mask:literal
                ),*
                $(,)?
            }
        )*
    } => {
        $(
            $(#[$attr])*
            #[allow(non_upper_case_globals, dead_code)]
            $vis mod $name {
                /// Marker type of this descriptor.
                #[derive(Clone, Copy, Debug)]
                pub struct Tlv;

                $(
                    $(#[$field_attr])*
                    pub const $field: $crate::descriptor::DescField<Tlv> =
                        $crate::descriptor::DescField::new($crate::descriptor::FieldSpec::new(
                            stringify!($field),
                            $offset,
                            $lsb,
                            $msb,
                            $mask,
                        ));
                )*

                pub const FIELDS: &[$crate::descriptor::FieldSpec] = &[$($field.spec),*];

                pub const LAYOUT: $crate::descriptor::DescriptorLayout =
                    $crate::descriptor::DescriptorLayout {
                        name: stringify!($name),
                        dwords: $dwords,
                        unit: $crate::descriptor::OffsetUnit::$unit,
                        fields: FIELDS,
                    };

                impl $crate::descriptor::Descriptor for Tlv {
                    const LAYOUT: $crate::descriptor::DescriptorLayout = LAYOUT;
                }
            }
        )*
    };
}
