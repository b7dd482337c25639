//! CRUD operations end to end: validation, request shape, decoding.

use super::common::{assert_resource_request, generic_error, record, TestOrg, API_VERSION};
use sforce::{SObject, UpsertResult};
use wiremock::ResponseTemplate;

fn sobject_path(segments: &[&str]) -> String {
    let mut path = format!("/services/data/{API_VERSION}/sobjects");
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

fn upsert_ok(id: &str) -> serde_json::Value {
    serde_json::json!({"id": id, "success": true, "errors": []})
}

/// Response for a case: the success body, or the generic error when the
/// case expects one.
fn template(status: u16, err_snippet: &str, success: Option<serde_json::Value>) -> ResponseTemplate {
    let template = ResponseTemplate::new(status);
    if !err_snippet.is_empty() {
        return template.set_body_json(generic_error());
    }
    match success {
        Some(body) => template.set_body_json(body),
        None => template,
    }
}

fn assert_outcome<T: std::fmt::Debug>(result: &Result<T, sforce::rest::Error>, err_snippet: &str, msg: &str) {
    if err_snippet.is_empty() {
        assert!(result.is_ok(), "{msg}: {result:?}");
    } else {
        let err = result.as_ref().expect_err(msg);
        assert!(
            err.to_string().contains(err_snippet),
            "{msg}: {err} does not contain {err_snippet}"
        );
    }
}

fn fields() -> SObject {
    record(serde_json::json!({"Field1": "one", "Field2": 2}))
}

#[tokio::test]
async fn test_create_sobject() {
    let org = TestOrg::start().await;

    let cases: Vec<(&str, SObject, u16, usize, &str)> = vec![
        ("", SObject::new(), 0, 0, "sobject name is required"),
        ("Object", SObject::new(), 0, 0, "sobject value is required"),
        ("", fields(), 0, 0, "sobject name is required"),
        ("Object", fields(), 201, 1, ""),
        ("Object", fields(), 400, 1, "GENERIC_ERROR"),
    ];

    for (object_type, object, status, request_count, err_snippet) in cases {
        let msg = format!("input: {object_type:?} {object:?} {status}");
        org.respond_with(template(status.max(200), err_snippet, Some(upsert_ok("id"))))
            .await;

        let result = org.client.create_sobject(object_type, &object).await;

        let requests = org.requests().await;
        assert_eq!(requests.len(), request_count, "{msg}");
        if let Some(request) = requests.first() {
            let body = serde_json::Value::Object(object.clone());
            assert_resource_request(request, "POST", &sobject_path(&[object_type]), Some(&body), &msg);
        }
        assert_outcome(&result, err_snippet, &msg);
        if let Ok(result) = result {
            assert!(result.success, "{msg}");
            assert_eq!(result.id, "id", "{msg}");
        }
    }
}

#[tokio::test]
async fn test_get_sobject() {
    let org = TestOrg::start().await;
    let wanted = record(serde_json::json!({"A": "one", "B": 2.0, "C": true}));

    let cases: Vec<(&str, &str, u16, usize, &str)> = vec![
        ("", "", 0, 0, "sobject name is required"),
        ("", "A", 0, 0, "sobject name is required"),
        ("Object", "", 0, 0, "sobject id is required"),
        ("Object", "A", 200, 1, ""),
        ("Object", "A", 400, 1, "GENERIC_ERROR"),
    ];

    for (object_type, id, status, request_count, err_snippet) in cases {
        let msg = format!("input: {object_type:?} {id:?} {status}");
        let success = serde_json::Value::Object(wanted.clone());
        org.respond_with(template(status.max(200), err_snippet, Some(success)))
            .await;

        let result = org.client.get_sobject(object_type, id).await;

        let requests = org.requests().await;
        assert_eq!(requests.len(), request_count, "{msg}");
        if let Some(request) = requests.first() {
            assert_resource_request(request, "GET", &sobject_path(&[object_type, id]), None, &msg);
        }
        assert_outcome(&result, err_snippet, &msg);
        if let Ok(object) = result {
            assert_eq!(object, wanted, "{msg}");
        }
    }
}

#[tokio::test]
async fn test_get_sobject_by_external_id() {
    let org = TestOrg::start().await;
    let wanted = record(serde_json::json!({"A": "one", "B": 2.0, "C": true}));

    let cases: Vec<(&str, &str, &str, u16, usize, &str)> = vec![
        ("", "", "", 0, 0, "sobject name is required"),
        ("", "Ext", "A", 0, 0, "sobject name is required"),
        ("Object", "", "A", 0, 0, "external id field is required"),
        ("Object", "", "", 0, 0, "external id field is required"),
        ("Object", "Ext", "", 0, 0, "external id is required"),
        ("Object", "Ext", "A", 200, 1, ""),
        ("Object", "Ext", "A", 400, 1, "GENERIC_ERROR"),
    ];

    for (object_type, field, external_id, status, request_count, err_snippet) in cases {
        let msg = format!("input: {object_type:?} {field:?} {external_id:?} {status}");
        let success = serde_json::Value::Object(wanted.clone());
        org.respond_with(template(status.max(200), err_snippet, Some(success)))
            .await;

        let result = org
            .client
            .get_sobject_by_external_id(object_type, field, external_id)
            .await;

        let requests = org.requests().await;
        assert_eq!(requests.len(), request_count, "{msg}");
        if let Some(request) = requests.first() {
            let path = sobject_path(&[object_type, field, external_id]);
            assert_resource_request(request, "GET", &path, None, &msg);
        }
        assert_outcome(&result, err_snippet, &msg);
        if let Ok(object) = result {
            assert_eq!(object, wanted, "{msg}");
        }
    }
}

#[tokio::test]
async fn test_upsert_sobject() {
    let org = TestOrg::start().await;

    let cases: Vec<(&str, &str, SObject, u16, usize, &str)> = vec![
        ("", "", SObject::new(), 0, 0, "sobject name is required"),
        ("", "A", fields(), 0, 0, "sobject name is required"),
        ("Object", "", fields(), 0, 0, "sobject id is required"),
        ("Object", "A", SObject::new(), 0, 0, "sobject value is required"),
        ("Object", "A", fields(), 204, 1, ""),
        ("Object", "A", fields(), 400, 1, "GENERIC_ERROR"),
    ];

    for (object_type, id, object, status, request_count, err_snippet) in cases {
        let msg = format!("input: {object_type:?} {id:?} {object:?} {status}");
        org.respond_with(template(status.max(200), err_snippet, None))
            .await;

        let result = org.client.upsert_sobject(object_type, id, &object).await;

        let requests = org.requests().await;
        assert_eq!(requests.len(), request_count, "{msg}");
        if let Some(request) = requests.first() {
            let body = serde_json::Value::Object(object.clone());
            let path = sobject_path(&[object_type, id]);
            assert_resource_request(request, "PATCH", &path, Some(&body), &msg);
        }
        assert_outcome(&result, err_snippet, &msg);
        if let Ok(result) = result {
            assert!(result.success, "{msg}");
            assert_eq!(result.id, id, "{msg}");
        }
    }
}

#[tokio::test]
async fn test_upsert_sobject_by_external_id() {
    let org = TestOrg::start().await;

    let cases: Vec<(&str, &str, &str, SObject, u16, usize, &str)> = vec![
        ("", "", "", SObject::new(), 0, 0, "sobject name is required"),
        ("", "Ext", "A", fields(), 0, 0, "sobject name is required"),
        ("Object", "", "A", fields(), 0, 0, "external id field is required"),
        ("Object", "Ext", "", fields(), 0, 0, "external id is required"),
        ("Object", "Ext", "A", SObject::new(), 0, 0, "sobject value is required"),
        ("Object", "Ext", "A", fields(), 201, 1, ""),
        ("Object", "Ext", "A", fields(), 400, 1, "GENERIC_ERROR"),
    ];

    for (object_type, field, external_id, object, status, request_count, err_snippet) in cases {
        let msg = format!("input: {object_type:?} {field:?} {external_id:?} {object:?} {status}");
        org.respond_with(template(status.max(200), err_snippet, Some(upsert_ok("id"))))
            .await;

        let result = org
            .client
            .upsert_sobject_by_external_id(object_type, field, external_id, &object)
            .await;

        let requests = org.requests().await;
        assert_eq!(requests.len(), request_count, "{msg}");
        if let Some(request) = requests.first() {
            let body = serde_json::Value::Object(object.clone());
            let path = sobject_path(&[object_type, field, external_id]);
            assert_resource_request(request, "PATCH", &path, Some(&body), &msg);
        }
        assert_outcome(&result, err_snippet, &msg);
        if let Ok(result) = result {
            assert!(result.success, "{msg}");
            assert_eq!(result.id, "id", "{msg}");
        }
    }
}

#[tokio::test]
async fn test_delete_sobject() {
    let org = TestOrg::start().await;

    let cases: Vec<(&str, &str, u16, usize, &str)> = vec![
        ("", "", 0, 0, "sobject name is required"),
        ("", "A", 0, 0, "sobject name is required"),
        ("Object", "", 0, 0, "sobject id is required"),
        ("Object", "A", 204, 1, ""),
        ("Object", "A", 400, 1, "GENERIC_ERROR"),
    ];

    for (object_type, id, status, request_count, err_snippet) in cases {
        let msg = format!("input: {object_type:?} {id:?} {status}");
        org.respond_with(template(status.max(200), err_snippet, None))
            .await;

        let result = org.client.delete_sobject(object_type, id).await;

        let requests = org.requests().await;
        assert_eq!(requests.len(), request_count, "{msg}");
        if let Some(request) = requests.first() {
            let path = sobject_path(&[object_type, id]);
            assert_resource_request(request, "DELETE", &path, None, &msg);
        }
        assert_outcome(&result, err_snippet, &msg);
    }
}

#[tokio::test]
async fn test_error_body_array_and_object_shapes() {
    let org = TestOrg::start().await;

    for body in [generic_error(), serde_json::json!([generic_error()])] {
        org.respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
            .await;

        let err = org.client.get_sobject("Object", "A").await.unwrap_err();

        assert!(err.to_string().contains("GENERIC_ERROR"), "{body}: {err}");
        assert!(err.to_string().contains("Generic API error"), "{body}: {err}");
        assert_eq!(err.status(), Some(400));
    }
}

#[tokio::test]
async fn test_repeated_get_is_not_cached() {
    let org = TestOrg::start().await;
    let wanted = record(serde_json::json!({"A": "one", "B": 2.0, "C": true}));
    org.respond_with(
        ResponseTemplate::new(200).set_body_json(serde_json::Value::Object(wanted.clone())),
    )
    .await;

    let first = org.client.get_sobject("Object", "A").await.unwrap();
    assert_eq!(org.request_count().await, 1);

    let second = org.client.get_sobject("Object", "A").await.unwrap();
    assert_eq!(org.request_count().await, 2);

    assert_eq!(first, wanted);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_from_raw_body() {
    let org = TestOrg::start().await;
    org.respond_with(ResponseTemplate::new(201).set_body_json(upsert_ok("001NEW")))
        .await;

    let object = sforce::parse_sobject(br#"{"Name": "Acme", "Active": true}"#).unwrap();
    let result = org.client.create_sobject("Account", &object).await.unwrap();

    assert_eq!(
        result,
        UpsertResult {
            id: "001NEW".to_string(),
            success: true,
            created: false,
            errors: vec![],
        }
    );
    let requests = org.requests().await;
    assert_resource_request(
        &requests[0],
        "POST",
        &sobject_path(&["Account"]),
        Some(&serde_json::json!({"Name": "Acme", "Active": true})),
        "raw body",
    );
}

#[tokio::test]
async fn test_dot_segment_inputs_send_nothing() {
    let org = TestOrg::start().await;
    org.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "encoding": "UTF-8",
        "sobjects": []
    })))
    .await;
    let body = fields();

    let errors = vec![
        org.client.get_sobject("Object", "..").await.map(|_| ()).unwrap_err(),
        org.client.get_sobject("..", "A").await.map(|_| ()).unwrap_err(),
        org.client.delete_sobject("Object", "..").await.unwrap_err(),
        org.client.delete_sobject("Object", ".").await.unwrap_err(),
        org.client
            .get_sobject_by_external_id("Object", "..", "A")
            .await
            .map(|_| ())
            .unwrap_err(),
        org.client
            .upsert_sobject("Object", "..", &body)
            .await
            .map(|_| ())
            .unwrap_err(),
        org.client
            .upsert_sobject_by_external_id("Object", "Ext", "..", &body)
            .await
            .map(|_| ())
            .unwrap_err(),
    ];

    for err in errors {
        assert!(err.is_validation(), "{err}");
        assert!(err.to_string().contains("must not be"), "{err}");
    }
    assert_eq!(org.request_count().await, 0, "no request may leave for a dot segment");
}
