#![cfg(feature = "test-adapters")]

use vnfin_core::VnConnector;
use vnfin_tcbs::{TcbsConnector, adapter};

#[test]
fn tcbs_connector_advertises_all_capabilities() {
    let tcbs = TcbsConnector::new_default().unwrap();
    assert_eq!(tcbs.name(), "vnfin-tcbs");
    assert_eq!(tcbs.source(), "TCBS");
    assert!(tcbs.as_income_statement_provider().is_some());
    assert!(tcbs.as_balance_sheet_provider().is_some());
    assert!(tcbs.as_cashflow_provider().is_some());
    assert!(tcbs.as_ratio_provider().is_some());
    assert!(tcbs.as_news_provider().is_some());
    assert!(tcbs.as_credential_provider().is_some());
}

struct StatementsOnly;
impl adapter::CloneArcAdapters for StatementsOnly {}

#[test]
fn news_capability_follows_adapter() {
    let tcbs = TcbsConnector::from_adapter(&StatementsOnly);
    assert!(tcbs.as_news_provider().is_none());
    assert!(tcbs.as_income_statement_provider().is_some());
}
