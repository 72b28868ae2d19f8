//! Integration tests for the scanning panel.

use pantry_integration_tests::TestApp;

#[tokio::test]
async fn test_scanned_code_prefills_name() {
    let app = TestApp::new();
    assert!(app.post("/scan/start", "").await.is_redirect_home());
    assert!(app.get("/").await.body.contains("scan-video"));

    let response = app.post("/scan/result", "code=4006381333931").await;
    assert!(response.is_redirect_home());

    let page = app.get("/").await.body;
    assert!(page.contains(r#"value="4006381333931""#));
    assert!(page.contains("Scanned: 4006381333931"));
    assert!(!page.contains("scan-video"));
}

#[tokio::test]
async fn test_adding_item_clears_draft_name() {
    let app = TestApp::new();
    app.post("/scan/start", "").await;
    app.post("/scan/result", "code=4006381333931").await;
    app.post("/items", "name=4006381333931").await;

    assert!(app.state().session().await.draft_name.is_none());
}

#[tokio::test]
async fn test_result_after_stop_is_dropped() {
    let app = TestApp::new();
    app.post("/scan/start", "").await;
    app.post("/scan/stop", "").await;
    app.post("/scan/result", "code=4006381333931").await;

    let session = app.state().session().await;
    assert!(session.draft_name.is_none());
    assert!(!session.scan.is_scanning());
}

#[tokio::test]
async fn test_unsupported_scanner_reports_status() {
    let app = TestApp::new();
    app.post("/scan/start", "").await;
    app.post("/scan/result", "error=unsupported&message=no+camera").await;

    let page = app.get("/").await.body;
    assert!(page.contains("Scanning not supported: no camera"));
    assert!(app.state().session().await.draft_name.is_none());
}

#[tokio::test]
async fn test_cancelled_scan_reports_status() {
    let app = TestApp::new();
    app.post("/scan/start", "").await;
    app.post("/scan/result", "error=cancelled").await;
    assert!(app.get("/").await.body.contains("Scan cancelled."));
}

#[tokio::test]
async fn test_cancelled_scan_keeps_previous_draft() {
    let app = TestApp::new();
    app.post("/scan/start", "").await;
    app.post("/scan/result", "code=111").await;

    app.post("/scan/start", "").await;
    app.post("/scan/result", "error=cancelled").await;

    let session = app.state().session().await;
    assert_eq!(session.draft_name.as_deref(), Some("111"));
    assert_eq!(session.scan.status(), Some("Scan cancelled."));
}
