//! # UserRepository
//!
//! ユーザー情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **トレイトによる抽象化**: ユースケース層はトレイト経由で利用し、
//!   テストではスタブ実装に差し替える
//! - **ドキュメントマッピング**: 格納形式（[`UserDocument`]）とドメイン
//!   エンティティ（[`User`]）を分離し、`_id` などストア固有の表現を閉じ込める
//! - **同時実行制御なし**: read-modify-write の競合はストアの素の挙動に従う

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use userhub_domain::user::{Email, User, UserId, UserName};

use crate::error::InfraError;

/// ユーザーを格納するコレクション名
const COLLECTION_NAME: &str = "users";

/// ユーザーリポジトリトレイト
///
/// ユーザー情報の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// コレクション内の全ユーザーを取得
    ///
    /// 並び順はストア定義（コレクションの自然順）。
    /// ページネーションは行わない。
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;

    /// ID でユーザーを検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError>;

    /// ユーザーをコレクションに登録
    async fn insert(&self, user: &User) -> Result<(), InfraError>;

    /// ユーザーを ID で置き換え保存
    ///
    /// 同一 ID のドキュメントが存在しない場合は何もしない
    /// （存在確認はユースケース層の責務）。
    async fn update(&self, user: &User) -> Result<(), InfraError>;

    /// ユーザーを ID で削除
    ///
    /// # 戻り値
    ///
    /// 削除されたドキュメント数（0 または 1）。
    async fn delete(&self, id: &UserId) -> Result<u64, InfraError>;
}

/// ユーザーの格納ドキュメント
///
/// MongoDB に格納される形式。識別子は `_id` フィールドに
/// ObjectId として格納される。
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id:    ObjectId,
    pub name:  String,
    pub email: String,
}

impl UserDocument {
    /// ドメインエンティティから格納ドキュメントを作成する
    pub fn from_entity(user: &User) -> Self {
        Self {
            id:    user.id().as_object_id(),
            name:  user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
        }
    }

    /// 格納ドキュメントをドメインエンティティに復元する
    ///
    /// # エラー
    ///
    /// 格納値がドメインの不変条件を満たさない場合は
    /// `InfraError::InvalidDocument` を返す。
    pub fn into_entity(self) -> Result<User, InfraError> {
        Ok(User::from_db(
            UserId::from_object_id(self.id),
            UserName::new(&self.name).map_err(|e| InfraError::invalid_document(e.to_string()))?,
            Email::new(&self.email).map_err(|e| InfraError::invalid_document(e.to_string()))?,
        ))
    }
}

/// MongoDB 実装の UserRepository
#[derive(Debug, Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            users.push(document.into_entity()?);
        }

        Ok(users)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;

        document.map(UserDocument::into_entity).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        self.collection
            .insert_one(UserDocument::from_entity(user))
            .await?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), InfraError> {
        self.collection
            .replace_one(
                doc! { "_id": user.id().as_object_id() },
                UserDocument::from_entity(user),
            )
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<u64, InfraError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(result.deleted_count)
    }
}
