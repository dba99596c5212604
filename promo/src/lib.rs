//! # **promo** 核心库
//!
//! 合作伙伴促销码限额的生命周期规则：每个合作伙伴同一时刻至多持有一个有效限额，
//! 设置新限额会撤销旧限额并将已发放促销码计数清零。

#![warn(missing_docs)]

extern crate self as promo;

mod request;
mod response;

pub mod config;
pub mod domain;
pub mod errors;
pub mod partner;
pub mod policy;
pub mod store;
#[doc(hidden)]
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// # **promo** 宏
pub mod macros {
    pub use promo_macros::*;
}

pub use request::{LimitKey, PartnerKey, PromoJson};
pub use response::PromoResponse;

#[cfg(test)]
mod tests;
