//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `InvalidId` | 400 Bad Request | 識別子がストアネイティブ形式にパースできない |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが空文字列
    /// - 文字数制限の超過
    /// - 不正なメールアドレス形式
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 識別子のパース失敗
    ///
    /// 与えられた文字列がストアネイティブな識別子形式
    /// （24 桁 16 進数の ObjectId）に変換できない場合に使用する。
    #[error("不正な識別子です: {value}")]
    InvalidId {
        /// パースに失敗した入力文字列
        value: String,
    },

    /// エンティティが見つからない
    ///
    /// 指定された ID のエンティティがコレクションに存在しない場合に使用する。
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"User" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}
