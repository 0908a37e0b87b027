//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`UserId`] はストアネイティブな ObjectId をラップし、
//!   型安全性を確保
//! - **不変性**: エンティティフィールドは不変、変更は `with_*` メソッド経由
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
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
//!
//! assert_eq!(user.name().as_str(), "山田太郎");
//! # Ok(())
//! # }
//! ```

use bson::oid::ObjectId;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// ユーザー ID（一意識別子）
///
/// ストアが採番する BSON ObjectId をラップする。
/// ワイヤー上は 24 桁 16 進数の文字列として扱い、
/// パースできない入力は [`DomainError::InvalidId`] になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct UserId(ObjectId);

impl UserId {
    /// 新しいユーザー ID を生成する
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// 文字列からユーザー ID をパースする
    ///
    /// # エラー
    ///
    /// 24 桁 16 進数の ObjectId 形式でない場合は
    /// [`DomainError::InvalidId`] を返す。
    pub fn parse_str(value: &str) -> Result<Self, DomainError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidId {
                value: value.to_string(),
            })
    }

    /// 既存の ObjectId からユーザー ID を作成する
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// 内部の ObjectId を取得する
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式である
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        // 基本的な構造検証: local@domain の形式であること
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ユーザー表示名（値オブジェクト）
///
/// # バリデーション
///
/// - 前後の空白をトリムした上で空文字列ではない
/// - 最大 100 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// ユーザー名を作成する
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("ユーザー名は必須です".to_string()));
        }

        if value.chars().count() > 100 {
            return Err(DomainError::Validation(
                "ユーザー名は 100 文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ユーザーエンティティ
///
/// API が管理する唯一のドメインエンティティ。
/// 識別子はコレクションへの登録時に採番され、以後変更されない。
///
/// # 不変条件
///
/// - `id` は採番後に変更されない（コレクション内で一意）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:    UserId,
    name:  UserName,
    email: Email,
}

impl User {
    /// 新しいユーザーを作成する
    pub fn new(id: UserId, name: UserName, email: Email) -> Self {
        Self { id, name, email }
    }

    /// 既存のデータからユーザーを復元する（データベースから取得時）
    pub fn from_db(id: UserId, name: UserName, email: Email) -> Self {
        Self { id, name, email }
    }

    // Getter メソッド

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    // フィールドマージ用メソッド

    /// ユーザー名を変更した新しいインスタンスを返す
    pub fn with_name(self, name: UserName) -> Self {
        Self { name, ..self }
    }

    /// メールアドレスを変更した新しいインスタンスを返す
    pub fn with_email(self, email: Email) -> Self {
        Self { email, ..self }
    }
}
