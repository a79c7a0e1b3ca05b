#![cfg(feature = "test-adapters")]

use std::sync::Arc;

use vnfin_core::{StatementRequest, Ticker, VnfinError, connector::IncomeStatementProvider};
use vnfin_tcbs::{TcbsConnector, adapter};

struct Combo {
    f: Arc<dyn adapter::TcbsFinance>,
}
impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_finance(&self) -> Arc<dyn adapter::TcbsFinance> {
        self.f.clone()
    }
}

async fn income_err(e: VnfinError) -> VnfinError {
    let f = <dyn adapter::TcbsFinance>::from_fn(move |_, _, _, _| Err(e.clone()));
    let tcbs = TcbsConnector::from_adapter(&Combo { f });
    tcbs.income_statement(&Ticker::new("ZZZ"), &StatementRequest::default())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn other_error_is_attributed_to_connector() {
    let err = income_err(VnfinError::Other("socket closed".into())).await;
    match err {
        VnfinError::Connector { connector, msg } => {
            assert_eq!(connector, "vnfin-tcbs");
            assert_eq!(msg, "socket closed");
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_names_the_request() {
    let err = income_err(VnfinError::not_found("whatever")).await;
    assert_eq!(err, VnfinError::not_found("income statement for ZZZ"));
}

#[tokio::test]
async fn data_errors_pass_through() {
    let err = income_err(VnfinError::Data("bad json".into())).await;
    assert_eq!(err, VnfinError::Data("bad json".into()));
}

struct Empty;
impl adapter::CloneArcAdapters for Empty {}

#[tokio::test]
async fn default_finance_adapter_is_unsupported() {
    let tcbs = TcbsConnector::from_adapter(&Empty);
    let err = tcbs
        .income_statement(&Ticker::new("FPT"), &StatementRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, VnfinError::Unsupported { .. }));
}
