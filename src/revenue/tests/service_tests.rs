//! Service orchestration tests for windowed revenue aggregation.

use std::sync::Arc;

use crate::revenue::{
    adapters::memory::InMemoryBalanceFeed,
    domain::{BalanceTransaction, RevenueAccount, RevenueWindow},
    services::{RevenueService, RevenueServiceError},
};
use crate::test_support::{FixedClock, utc};
use rstest::rstest;

const NOW: (i32, u32, u32, u32, u32, u32) = (2026, 7, 15, 18, 0, 0);

fn service_over(
    feed: Arc<InMemoryBalanceFeed>,
) -> RevenueService<InMemoryBalanceFeed, FixedClock> {
    let (y, mo, d, h, mi, s) = NOW;
    RevenueService::new(feed, Arc::new(FixedClock(utc(y, mo, d, h, mi, s))))
}

fn tx(id: &str, amount: i64, kind: &str) -> BalanceTransaction {
    BalanceTransaction {
        id: id.to_owned(),
        amount,
        kind: kind.to_owned(),
    }
}

fn seed_windows(feed: &InMemoryBalanceFeed) {
    let (y, mo, d, h, mi, s) = NOW;
    let now = utc(y, mo, d, h, mi, s);
    let today_start = RevenueWindow::Today.start_unix(now);
    let mtd_start = RevenueWindow::MonthToDate.start_unix(now);
    let ytd_start = RevenueWindow::YearToDate.start_unix(now);

    feed.seed(
        RevenueAccount::Landmodo,
        today_start + 60,
        tx("txn_today", 10_000, "charge"),
    );
    feed.seed(
        RevenueAccount::Landmodo,
        mtd_start + 60,
        tx("txn_month", 20_000, "payment"),
    );
    feed.seed(
        RevenueAccount::Landmodo,
        ytd_start + 60,
        tx("txn_year", 40_000, "charge"),
    );
    feed.seed(
        RevenueAccount::Landmodo,
        ytd_start - 60,
        tx("txn_last_year", 80_000, "charge"),
    );
    // Outgoing money inside the windows must never count.
    feed.seed(
        RevenueAccount::Landmodo,
        today_start + 120,
        tx("txn_payout", 999_999, "payout"),
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summarize_windows_per_eastern_boundaries() {
    let feed = Arc::new(InMemoryBalanceFeed::new());
    seed_windows(&feed);
    let service = service_over(feed);

    let summary = service
        .summarize("landmodo")
        .await
        .expect("summary should succeed");

    assert!((summary.today - 100.0).abs() < f64::EPSILON);
    assert!((summary.mtd - 300.0).abs() < f64::EPSILON);
    assert!((summary.ytd - 700.0).abs() < f64::EPSILON);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sum_is_independent_of_page_boundaries() {
    let (y, mo, d, h, mi, s) = NOW;
    let today_start = RevenueWindow::Today.start_unix(utc(y, mo, d, h, mi, s));

    let single_page = Arc::new(InMemoryBalanceFeed::with_page_size(200));
    let tiny_pages = Arc::new(InMemoryBalanceFeed::with_page_size(3));
    for feed in [&single_page, &tiny_pages] {
        for index in 0..20_i64 {
            feed.seed(
                RevenueAccount::St,
                today_start + index,
                tx(&format!("txn_{index}"), 100 + index, "charge"),
            );
        }
    }

    let from_single = service_over(single_page)
        .summarize("st")
        .await
        .expect("summary should succeed");
    let from_tiny = service_over(tiny_pages)
        .summarize("st")
        .await
        .expect("summary should succeed");

    // 20 charges of 100..=119 cents: 21.90 regardless of page size.
    assert!((from_single.today - 21.90).abs() < f64::EPSILON);
    assert!((from_tiny.today - from_single.today).abs() < f64::EPSILON);
    assert!((from_tiny.ytd - from_single.ytd).abs() < f64::EPSILON);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summarize_rejects_unknown_accounts() {
    let service = service_over(Arc::new(InMemoryBalanceFeed::new()));
    let result = service.summarize("acme").await;
    assert!(matches!(
        result,
        Err(RevenueServiceError::UnknownAccount(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summarize_converts_minor_units_to_major() {
    let feed = Arc::new(InMemoryBalanceFeed::new());
    let (y, mo, d, h, mi, s) = NOW;
    let now = utc(y, mo, d, h, mi, s);
    feed.seed(
        RevenueAccount::Investorninjas,
        RevenueWindow::Today.start_unix(now) + 1,
        tx("txn_cents", 12_345, "charge"),
    );
    let service = service_over(feed);

    let summary = service
        .summarize("investorninjas")
        .await
        .expect("summary should succeed");
    assert!((summary.today - 123.45).abs() < f64::EPSILON);
}
