//! # OpenAPI 仕様テスト
//!
//! utoipa から生成される OpenAPI 仕様の整合性を検証する。

use userhub_api::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi仕様がパニックせず生成される() {
    let doc = ApiDoc::openapi();
    // パニックしなければ成功
    let _yaml = doc.to_yaml().unwrap();
}

#[test]
fn test_全パスが含まれている() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    // 3 パス（6 ハンドラ、同一パスに複数メソッドがあるため 3 パス）
    assert_eq!(paths.len(), 3, "パス数が 3 であること: {paths:?}");

    assert!(paths.contains(&"/health"));
    assert!(paths.contains(&"/users"));
    assert!(paths.contains(&"/users/{id}"));
}

#[test]
fn test_usersパスに全メソッドが含まれている() {
    let doc = ApiDoc::openapi();
    let json = serde_json::to_value(&doc).unwrap();

    assert!(json["paths"]["/users"]["get"].is_object(), "GET /users");
    assert!(json["paths"]["/users"]["post"].is_object(), "POST /users");
    assert!(
        json["paths"]["/users/{id}"]["get"].is_object(),
        "GET /users/{{id}}"
    );
    assert!(
        json["paths"]["/users/{id}"]["put"].is_object(),
        "PUT /users/{{id}}"
    );
    assert!(
        json["paths"]["/users/{id}"]["delete"].is_object(),
        "DELETE /users/{{id}}"
    );
}

#[test]
fn test_スキーマが含まれている() {
    let doc = ApiDoc::openapi();
    let components = doc.components.as_ref().expect("components が存在すること");

    assert!(
        components.schemas.contains_key("ErrorResponse"),
        "ErrorResponse スキーマが存在すること"
    );
    assert!(
        components.schemas.contains_key("UserDto"),
        "UserDto スキーマが存在すること"
    );
}

#[test]
fn test_全タグが含まれている() {
    let doc = ApiDoc::openapi();
    let tags = doc.tags.as_ref().expect("tags が存在すること");
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();

    assert!(names.contains(&"health"));
    assert!(names.contains(&"users"));
}
