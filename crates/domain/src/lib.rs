//! # UserHub ドメイン層
//!
//! ユーザー管理 API の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`user::User`]）
//! - **値オブジェクト**: 生成時にバリデーションを実行する不変オブジェクト
//!   （[`user::Email`], [`user::UserName`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//! 識別子はストアネイティブな BSON ObjectId をラップするため、
//! シリアライズ用途の `bson` クレートのみに依存する。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use userhub_domain::user::{Email, User, UserId, UserName};
//!
//! let user = User::new(
//!     UserId::new(),
//!     UserName::new("山田太郎")?,
//!     Email::new("user@example.com")?,
//! );
//! assert_eq!(user.email().as_str(), "user@example.com");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod user;

pub use error::DomainError;
