use super::*;
use time::macros::datetime;

fn valid_body(limit: i32) -> Value {
    json!({ "limit": limit, "endDate": "2030-01-31T12:00:00Z" })
}

#[rstest]
#[tokio::test]
async fn set_limit_partner_not_found(_setup: ()) {
    let app = TestApp::new(Vec::<Partner>::new()).await;

    let response = app.send(set_limit_request(Uuid::new_v4(), valid_body(100))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn set_limit_inactive_partner(_setup: ()) {
    let partner = PartnerBuilder::new()
        .with_active(false)
        .with_issued_codes(5)
        .with_limit(LimitBuilder::new().build())
        .build();
    let id = partner.id();
    let app = TestApp::new([partner.clone()]).await;

    let response = app.send(set_limit_request(id, valid_body(100))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.partner(id).await, partner);
    assert_eq!(app.store.persisted(), 0);
}

#[rstest]
#[case(0)]
#[case(-10)]
#[tokio::test]
async fn set_limit_non_positive(_setup: (), #[case] limit: i32) {
    let partner = PartnerBuilder::new()
        .with_issued_codes(5)
        .with_limit(LimitBuilder::new().build())
        .build();
    let id = partner.id();
    let app = TestApp::new([partner.clone()]).await;

    let response = app.send(set_limit_request(id, valid_body(limit))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.partner(id).await, partner);
}

#[rstest]
#[tokio::test]
async fn set_limit_malformed_body(_setup: ()) {
    let partner = PartnerBuilder::new().build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;

    let response = app
        .send(set_limit_request(id, json!({ "limit": 100, "endDate": "明天" })))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.persisted(), 0);
}

#[rstest]
#[tokio::test]
async fn set_limit_replaces_previous(_setup: ()) {
    let previous = LimitBuilder::new().with_cap(50).build();
    let previous_id = previous.id();
    let partner = PartnerBuilder::new()
        .with_issued_codes(10)
        .with_limit(previous)
        .build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;

    let response = app.send(set_limit_request(id, valid_body(100))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert!(body_text(response).await.is_empty());

    let stored = app.partner(id).await;
    assert_eq!(stored.issued_codes, 0);
    assert!(stored.limit(previous_id).unwrap().canceled_at().is_some());
    let active = stored.active_limit().unwrap();
    assert_eq!(active.cap(), 100);
    assert_eq!(location, format!("/api/v1/partners/{id}/limits/{}", active.id()));
    assert_eq!(app.store.persisted(), 1);
}

#[rstest]
#[tokio::test]
async fn set_first_limit_keeps_counter(_setup: ()) {
    let partner = PartnerBuilder::new().with_issued_codes(3).build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;

    let response = app.send(set_limit_request(id, valid_body(20))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let stored = app.partner(id).await;
    assert_eq!(stored.issued_codes, 3);
    assert_eq!(stored.limits().len(), 1);
}

#[rstest]
#[tokio::test]
async fn set_limit_store_failure(_setup: ()) {
    let partner = PartnerBuilder::new().build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;
    app.store.fail_persist(true);

    let response = app.send(set_limit_request(id, valid_body(100))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert_eq!(body, "服务器内部错误");
    assert!(app.partner(id).await.limits().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_set_limit_keeps_single_active(_setup: ()) {
    let partner = PartnerBuilder::new()
        .with_issued_codes(10)
        .with_limit(LimitBuilder::new().build())
        .build();
    let id = partner.id();
    let app = Arc::new(TestApp::new([partner]).await);

    let mut tasks = Vec::new();
    for cap in 1..=16 {
        let app = Arc::clone(&app);
        tasks.push(tokio::spawn(async move {
            app.send(set_limit_request(id, valid_body(cap))).await.status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::CREATED);
    }

    let stored = app.partner(id).await;
    assert_eq!(stored.limits().len(), 17);
    assert_eq!(stored.limits().iter().filter(|l| l.is_active()).count(), 1);
    assert_eq!(app.store.persisted(), 16);
}

#[rstest]
#[case("2030-01-31T12:00:00")]
#[case("2030-01-31T12:00:00.250")]
#[case("2030-01-31T14:00:00+02:00")]
#[tokio::test]
async fn set_limit_end_date_formats(_setup: (), #[case] end_date: &str) {
    let partner = PartnerBuilder::new().build();
    let id = partner.id();
    let app = TestApp::new([partner]).await;

    let response = app
        .send(set_limit_request(id, json!({ "limit": 100, "endDate": end_date })))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let stored = app.partner(id).await;
    let end_at = stored.active_limit().unwrap().end_at();
    assert_eq!(end_at.replace_millisecond(0).unwrap(), datetime!(2030-01-31 12:00 UTC));
}
