//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ストア操作はユースケース層に委譲

pub mod health;
pub mod user;

pub use health::health_check;
pub use user::{UserState, create_user, delete_user, get_user, list_users, update_user};
