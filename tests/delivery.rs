use std::{collections::HashMap, net::TcpListener, time::Duration};

use portfolio_site::{
    contact::{ContactError, ContactForm},
    delivery::{DeliveryCredentials, MessageDelivery},
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn credentials() -> DeliveryCredentials {
    DeliveryCredentials {
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        public_key: "public_test".to_string(),
    }
}

fn form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Let's talk.".to_string(),
    }
}

async fn delivery_for(server: &MockServer) -> MessageDelivery {
    MessageDelivery::new(credentials())
        .expect("client should build")
        .with_endpoint(format!("{}/api/v1.0/email/send", server.uri()))
}

// ============================================================================
// Delivery Tests
// ============================================================================

#[tokio::test]
async fn test_sends_emailjs_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_json(json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "public_test",
            "template_params": {
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Let's talk."
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let delivery = delivery_for(&server).await;
    assert_eq!(delivery.send(&form()).await, Ok(()));
}

#[tokio::test]
async fn test_error_status_is_delivery_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
        .mount(&server)
        .await;

    let delivery = delivery_for(&server).await;
    let err = delivery.send(&form()).await.unwrap_err();
    assert!(matches!(err, ContactError::Delivery(ref reason) if reason.contains("400")));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_delivery_failure() {
    // bind then release a port so nothing is listening on it
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("should be able to bind a port");
        listener.local_addr().unwrap().port()
    };

    let delivery = MessageDelivery::new(credentials())
        .unwrap()
        .with_endpoint(format!("http://127.0.0.1:{port}/api/v1.0/email/send"));
    let err = delivery.send(&form()).await.unwrap_err();
    match err {
        ContactError::Delivery(reason) => assert!(!reason.starts_with("status")),
        other => panic!("expected a transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let delivery = delivery_for(&server)
        .await
        .with_timeout(Duration::from_millis(100))
        .unwrap();
    let err = delivery.send(&form()).await.unwrap_err();
    match err {
        ContactError::Delivery(reason) => assert!(!reason.starts_with("status")),
        other => panic!("expected a timeout failure, got {other:?}"),
    }
}

fn lookup(vars: &HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
    let vars = vars.clone();
    move |key: &str| vars.get(key).map(|v| v.to_string())
}

#[test]
fn test_credentials_require_all_tokens() {
    let mut vars = HashMap::from([
        ("EMAILJS_SERVICE_ID", "svc"),
        ("EMAILJS_TEMPLATE_ID", "tpl"),
        ("EMAILJS_PUBLIC_KEY", "key"),
    ]);

    let creds = DeliveryCredentials::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(creds.service_id, "svc");
    assert_eq!(creds.public_key, "key");

    vars.insert("EMAILJS_TEMPLATE_ID", "  ");
    assert_eq!(
        DeliveryCredentials::from_lookup(lookup(&vars)),
        Err(ContactError::NotConfigured)
    );

    vars.remove("EMAILJS_PUBLIC_KEY");
    assert_eq!(
        DeliveryCredentials::from_lookup(lookup(&vars)),
        Err(ContactError::NotConfigured)
    );
}
