// SPDX-License-Identifier: MPL-2.0
pub mod input_shield;
pub mod spinner;

pub use input_shield::input_shield;
pub use spinner::Spinner;
