use vnfin_core::{
    AccessTier, NewsRequest, Period, RatioRequest, StatementRequest, Ticker, VnConnector,
    VnfinError,
};
use vnfin_mock::{MockConnector, NEWS_COUNT};

#[tokio::test]
async fn statements_have_eight_rows() {
    let mock = MockConnector::new();
    let t = Ticker::new("FPT");
    let req = StatementRequest::default();
    let income = mock.as_income_statement_provider().unwrap();
    let balance = mock.as_balance_sheet_provider().unwrap();
    let cash = mock.as_cashflow_provider().unwrap();
    assert_eq!(income.income_statement(&t, &req).await.unwrap().len(), 8);
    assert_eq!(balance.balance_sheet(&t, &req).await.unwrap().len(), 8);
    assert_eq!(cash.cash_flow(&t, &req).await.unwrap().len(), 8);
}

#[tokio::test]
async fn quarterly_rows_carry_quarter() {
    let mock = MockConnector::new();
    let rows = mock
        .as_income_statement_provider()
        .unwrap()
        .income_statement(
            &Ticker::new("VNM"),
            &StatementRequest::new(Period::new("quarter")),
        )
        .await
        .unwrap();
    assert!(rows.iter().all(|r| r["quarter"].is_i64()));
}

#[tokio::test]
async fn ratios_drop_missing_rows() {
    let mock = MockConnector::new();
    let ratios = mock.as_ratio_provider().unwrap();
    let t = Ticker::new("FPT");
    let mut req = RatioRequest::new(Period::default());
    assert_eq!(ratios.ratios(&t, &req).await.unwrap().len(), 6);
    req.drop_missing = false;
    assert_eq!(ratios.ratios(&t, &req).await.unwrap().len(), 8);
}

#[tokio::test]
async fn news_honors_limit_and_switch() {
    let mock = MockConnector::new();
    let news = mock.as_news_provider().unwrap();
    let t = Ticker::new("HPG");
    assert_eq!(news.news(&t, &NewsRequest { limit: 3 }).await.unwrap().len(), 3);
    assert_eq!(
        news.news(&t, &NewsRequest::default()).await.unwrap().len(),
        NEWS_COUNT
    );
    assert!(MockConnector::new().without_news().as_news_provider().is_none());
}

#[tokio::test]
async fn fail_ticker_forces_connector_error() {
    let mock = MockConnector::new();
    let err = mock
        .as_cashflow_provider()
        .unwrap()
        .cash_flow(&Ticker::new("FAIL"), &StatementRequest::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        VnfinError::connector("vnfin-mock", "forced failure: cash-flow")
    );
}

#[tokio::test]
async fn registration_outcomes() {
    let mock = MockConnector::new();
    let creds = mock.as_credential_provider().unwrap();
    let mut console = Vec::new();
    assert!(creds.register("bad-key", &mut console).await.is_err());
    assert_eq!(creds.tier(), AccessTier::Guest);
    assert_eq!(
        creds.register("good", &mut console).await.unwrap(),
        AccessTier::Elevated
    );
    assert_eq!(creds.tier(), AccessTier::Elevated);
    assert!(!console.is_empty());
    assert!(
        MockConnector::new()
            .without_credentials()
            .as_credential_provider()
            .is_none()
    );
}
