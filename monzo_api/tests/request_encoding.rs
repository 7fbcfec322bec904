use monzo_api::{AccessToken, Body, Params, RequestEncoder, MONZO_API_URL};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::json;

fn encoder() -> RequestEncoder {
    RequestEncoder::new(MONZO_API_URL, &AccessToken::new("token")).unwrap()
}

fn awkward_values() -> Vec<&'static str> {
    vec![
        "plain",
        "with space",
        "a+b=c&d",
        "100%",
        "ünïcødé £10.00",
        "https://example.com/path?q=1#frag",
        "",
        "[brackets]",
    ]
}

#[test]
fn every_query_value_round_trips() {
    let enc = encoder();
    for (i, value) in awkward_values().into_iter().enumerate() {
        let key = format!("key_{}[]", i);
        let query = Params::new().with(key.as_str(), value).with("other", "x");
        let req = enc
            .encode(Method::GET, "/transactions", Some(&query), Body::None)
            .unwrap();

        assert_eq!(req.url.scheme(), "https");
        assert_eq!(req.url.host_str(), Some("api.monzo.com"));
        assert_eq!(req.url.path(), "/transactions");

        let matching: Vec<String> = req
            .url
            .query_pairs()
            .filter(|(k, _)| k == key.as_str())
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(matching, vec![value.to_string()], "value {:?}", value);
    }
}

#[test]
fn every_form_body_round_trips() {
    let enc = encoder();
    for value in awkward_values() {
        let body = Params::new()
            .with("metadata[note]", value)
            .with("amount", 1000);
        let req = enc
            .encode(Method::POST, "/feed", None, Body::Form(body.clone()))
            .unwrap();
        let decoded: Params = url::form_urlencoded::parse(req.body.unwrap().as_bytes())
            .map(|(k, v)| (k.into_owned(), Some(v.into_owned())))
            .collect();
        assert_eq!(decoded, body, "value {:?}", value);
    }
}

#[test]
fn json_bodies_match_compact_serialization() {
    let enc = encoder();
    let bodies = vec![
        json!({}),
        json!([]),
        json!({"transaction_id": "tx_1", "external_id": "tx_1", "items": [
            {"description": "Coffee", "amount": 350, "currency": "GBP", "quantity": 1}
        ], "tax": 58}),
        json!({"nested": {"deep": [1, 2.5, null, true, "s"]}}),
    ];
    for body in bodies {
        let req = enc
            .encode(Method::PUT, "/transaction-receipts", None, Body::Json(body.clone()))
            .unwrap();
        let encoded = req.body.unwrap();
        assert_eq!(encoded, serde_json::to_string(&body).unwrap());
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains(": "));
    }
}

#[test]
fn content_type_follows_body_kind() {
    let enc = encoder();
    let cases = vec![
        (Body::None, None),
        (
            Body::Form(Params::new().with("a", "1")),
            Some("application/x-www-form-urlencoded"),
        ),
        (Body::Json(json!({"a": 1})), Some("application/json")),
    ];
    for (body, expected) in cases {
        let req = enc.encode(Method::PUT, "/x", None, body).unwrap();
        let actual = req.headers.get(CONTENT_TYPE).map(|v| v.to_str().unwrap());
        assert_eq!(actual, expected);
        assert_eq!(req.headers[AUTHORIZATION], "Bearer token");
    }
}

#[test]
fn descriptors_are_stable_across_calls() {
    let enc = encoder();
    let query = Params::new().with("account_id", "acc_1").with("limit", 10);
    let a = enc
        .encode(Method::GET, "/transactions", Some(&query), Body::None)
        .unwrap();
    let b = enc
        .encode(Method::GET, "/transactions", Some(&query), Body::None)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.url.as_str(), b.url.as_str());
}

#[test]
fn different_clients_differ_only_in_authorization() {
    let a = RequestEncoder::new(MONZO_API_URL, &AccessToken::new("one"))
        .unwrap()
        .encode(Method::DELETE, "/webhooks/wh_1", None, Body::None)
        .unwrap();
    let b = RequestEncoder::new(MONZO_API_URL, &AccessToken::new("two"))
        .unwrap()
        .encode(Method::DELETE, "/webhooks/wh_1", None, Body::None)
        .unwrap();
    assert_ne!(a, b);
    assert_eq!(a.url, b.url);
    assert_eq!(a.body, b.body);
    assert_eq!(a.headers.len(), 1);
    assert_eq!(b.headers.len(), 1);
}
