//! 内部测试


use super::*;
use crate::{
    domain::{Entity, PartnerStore},
    errors::PromoError,
    partner::{Partner, PartnerLimit},
    policy::LimitPolicy,
    test_utils::{LimitBuilder, MockStore, PartnerBuilder},
};
use rstest::*;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

fn assert_recent(at: OffsetDateTime) {
    let elapsed = OffsetDateTime::now_utc() - at;
    assert!(elapsed >= Duration::ZERO && elapsed < Duration::seconds(1));
}

#[fixture]
fn partner() -> Partner {
    PartnerBuilder::new().with_issued_codes(10).build()
}

#[fixture]
fn policy() -> LimitPolicy<MockStore> {
    LimitPolicy::new(MockStore::new())
}
