//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, user};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "UserHub API",
      version = "0.1.0",
      description = "ユーザーレコードを管理する CRUD API"
   ),
   paths(
      // health
      health::health_check,
      // users
      user::list_users,
      user::get_user,
      user::create_user,
      user::update_user,
      user::delete_user,
   ),
   components(schemas(
      userhub_shared::ErrorResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "users", description = "ユーザー管理"),
   )
)]
pub struct ApiDoc;
