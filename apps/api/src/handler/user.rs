//! # ユーザー管理 API ハンドラ
//!
//! ユーザーレコードに対する CRUD エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /users` - ユーザー一覧
//! - `GET /users/{id}` - ユーザー取得
//! - `POST /users` - ユーザー作成
//! - `PUT /users/{id}` - ユーザー更新（フィールド単位のマージ）
//! - `DELETE /users/{id}` - ユーザー削除
//!
//! パス中の `{id}` はストアネイティブな識別子（24 桁 16 進数の ObjectId）。
//! パースできない場合は 400、一致するレコードがない場合は 404 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use userhub_domain::user::{Email, User, UserId, UserName};
use userhub_shared::ErrorResponse;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    usecase::user::{CreateUserInput, UpdateUserInput, UserUseCaseImpl},
};

/// ユーザー API の共有状態
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

// --- リクエスト型 ---

/// ユーザー作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name:  String,
    pub email: String,
}

/// ユーザー更新リクエスト
///
/// 指定されたフィールドのみ上書きされ、省略されたフィールドは保持される。
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name:  Option<String>,
    pub email: Option<String>,
}

// --- レスポンス型 ---

/// ユーザーレスポンス DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// ストアが採番した識別子（24 桁 16 進数）
    pub id:    String,
    pub name:  String,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id:    user.id().to_string(),
            name:  user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
        }
    }
}

/// ユーザー削除レスポンス DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserDto {
    pub message: String,
}

// --- ハンドラ ---

/// GET /users
///
/// コレクション内の全ユーザーを取得する。
/// ページネーション・フィルタ・ソートは行わない。
#[utoipa::path(
   get,
   path = "/users",
   tag = "users",
   responses(
      (status = 200, description = "ユーザー一覧", body = Vec<UserDto>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(
    State(state): State<Arc<UserState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.usecase.list_users().await?;

    let dtos: Vec<UserDto> = users.iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /users/{id}
///
/// ID でユーザーを取得する。
///
/// ## レスポンス
///
/// - `200 OK`: ユーザー
/// - `400 Bad Request`: 識別子がパースできない
/// - `404 Not Found`: ユーザーが見つからない
#[utoipa::path(
   get,
   path = "/users/{id}",
   tag = "users",
   params(("id" = String, Path, description = "ユーザーID")),
   responses(
      (status = 200, description = "ユーザー", body = UserDto),
      (status = 400, description = "不正な識別子", body = ErrorResponse),
      (status = 404, description = "ユーザーが見つからない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = UserId::parse_str(&id)?;

    let user = state.usecase.get_user(&user_id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(&user))))
}

/// POST /users
///
/// ユーザーを作成する。識別子はストア側で採番され、
/// 永続化されたレコードとともに返される。
///
/// ## レスポンス
///
/// - `200 OK`: 作成されたユーザー（採番済み識別子を含む）
/// - `400 Bad Request`: バリデーションエラー
#[utoipa::path(
   post,
   path = "/users",
   tag = "users",
   request_body = CreateUserRequest,
   responses(
      (status = 200, description = "作成されたユーザー", body = UserDto),
      (status = 400, description = "バリデーションエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateUserInput {
        name:  UserName::new(req.name)?,
        email: Email::new(req.email)?,
    };

    let user = state.usecase.create_user(input).await?;

    Ok((StatusCode::OK, Json(UserDto::from(&user))))
}

/// PUT /users/{id}
///
/// ユーザーを更新する。既存レコードをロードし、指定された
/// フィールドのみ上書きして保存する（未指定フィールドは保持）。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のユーザー
/// - `400 Bad Request`: 識別子がパースできない / バリデーションエラー
/// - `404 Not Found`: ユーザーが見つからない
#[utoipa::path(
   put,
   path = "/users/{id}",
   tag = "users",
   params(("id" = String, Path, description = "ユーザーID")),
   request_body = UpdateUserRequest,
   responses(
      (status = 200, description = "更新後のユーザー", body = UserDto),
      (status = 400, description = "不正な識別子 / バリデーションエラー", body = ErrorResponse),
      (status = 404, description = "ユーザーが見つからない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = UpdateUserInput {
        user_id: UserId::parse_str(&id)?,
        name:    req.name.map(UserName::new).transpose()?,
        email:   req.email.map(Email::new).transpose()?,
    };

    let user = state.usecase.update_user(input).await?;

    Ok((StatusCode::OK, Json(UserDto::from(&user))))
}

/// DELETE /users/{id}
///
/// ユーザーを削除する。削除件数が 0 の場合は 404 を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 確認メッセージ
/// - `400 Bad Request`: 識別子がパースできない
/// - `404 Not Found`: ユーザーが見つからない
#[utoipa::path(
   delete,
   path = "/users/{id}",
   tag = "users",
   params(("id" = String, Path, description = "ユーザーID")),
   responses(
      (status = 200, description = "削除成功", body = DeleteUserDto),
      (status = 400, description = "不正な識別子", body = ErrorResponse),
      (status = 404, description = "ユーザーが見つからない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = UserId::parse_str(&id)?;

    state.usecase.delete_user(&user_id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteUserDto {
            message: "ユーザーを削除しました".to_string(),
        }),
    ))
}
