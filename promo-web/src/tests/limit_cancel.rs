use super::*;

#[rstest]
#[tokio::test]
async fn cancel_partner_not_found(_setup: ()) {
    let app = TestApp::new(Vec::<Partner>::new()).await;

    let response = app.send(cancel_request(Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn cancel_inactive_partner(_setup: ()) {
    let partner = PartnerBuilder::new()
        .with_active(false)
        .with_limit(LimitBuilder::new().build())
        .build();
    let id = partner.id();
    let app = TestApp::new([partner.clone()]).await;

    let response = app.send(cancel_request(id)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.partner(id).await, partner);
}

#[rstest]
#[tokio::test]
async fn cancel_keeps_counter(_setup: ()) {
    let partner = PartnerBuilder::new()
        .with_issued_codes(10)
        .with_limit(LimitBuilder::new().build())
        .build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;

    let response = app.send(cancel_request(id)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let stored = app.partner(id).await;
    assert!(stored.active_limit().is_none());
    assert!(stored.limits()[0].canceled_at().is_some());
    assert_eq!(stored.issued_codes, 10);
}

#[rstest]
#[tokio::test]
async fn cancel_without_limits(_setup: ()) {
    let partner = PartnerBuilder::new().build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;

    let response = app.send(cancel_request(id)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.partner(id).await.limits().is_empty());
}

#[rstest]
#[tokio::test]
async fn cancel_store_failure(_setup: ()) {
    let partner = PartnerBuilder::new().build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;
    app.store.fail_fetch(true);

    let response = app.send(cancel_request(id)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.contains("模拟"));
}
