//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `NotFound` | 404 Not Found | 識別子に一致するレコードが存在しない |
//! | `InvalidId` | 400 Bad Request | 識別子がストアネイティブ形式にパースできない |
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `Database` | 500 Internal Server Error | ストアとの通信失敗（詳細は隠蔽） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use userhub_domain::DomainError;
use userhub_infra::InfraError;
use userhub_shared::ErrorResponse;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 識別子のパース失敗
    #[error("不正な識別子です: {0}")]
    InvalidId(String),

    /// 不正なリクエスト
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::InvalidId { value } => Self::InvalidId(value),
            DomainError::NotFound { .. } => Self::NotFound(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::InvalidId(value) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::invalid_id(format!("不正な識別子です: {value}")),
            ),
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(msg),
            ),
            ApiError::Database(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
