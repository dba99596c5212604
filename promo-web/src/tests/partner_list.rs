use super::*;

#[rstest]
#[tokio::test]
async fn list_partners(_setup: ()) {
    let active = PartnerBuilder::new()
        .with_name("甲")
        .with_issued_codes(4)
        .with_limit(LimitBuilder::new().with_cap(30).build())
        .build();
    let inactive = PartnerBuilder::new().with_name("乙").with_active(false).build();
    let app = TestApp::new([active.clone(), inactive.clone()]).await;

    let response = app.send(get_request("/api/v1/partners")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let partners = body.as_array().unwrap();
    assert_eq!(partners.len(), 2);

    let first = partners.iter().find(|p| p["id"] == json!(active.id())).unwrap();
    assert_eq!(first["name"], "甲");
    assert_eq!(first["numberIssuedPromoCodes"], 4);
    assert_eq!(first["isActive"], true);
    let limits = first["partnerLimits"].as_array().unwrap();
    assert_eq!(limits.len(), 1);
    assert_eq!(limits[0]["limit"], 30);
    assert!(limits[0]["cancelDate"].is_null());

    let second = partners.iter().find(|p| p["id"] == json!(inactive.id())).unwrap();
    assert_eq!(second["isActive"], false);
    assert!(second["partnerLimits"].as_array().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn list_partners_store_failure(_setup: ()) {
    let app = TestApp::new([PartnerBuilder::new().build()]).await;
    app.store.fail_fetch(true);

    let response = app.send(get_request("/api/v1/partners")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
