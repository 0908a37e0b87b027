//! ユーザー管理ユースケース

use std::sync::Arc;

use userhub_domain::user::{Email, User, UserId, UserName};
use userhub_infra::repository::UserRepository;

use crate::error::ApiError;

/// ユーザー作成の入力
pub struct CreateUserInput {
    pub name:  UserName,
    pub email: Email,
}

/// ユーザー更新の入力
///
/// `None` のフィールドは既存の値を保持する（フィールド単位のマージ）。
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub name:    Option<UserName>,
    pub email:   Option<Email>,
}

/// ユーザー管理ユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// コレクション内の全ユーザーを取得する
    ///
    /// 並び順はストア定義。ページネーションやフィルタリングは行わない。
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.user_repository.find_all().await?;
        Ok(users)
    }

    /// ID でユーザーを取得する
    pub async fn get_user(&self, user_id: &UserId) -> Result<User, ApiError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("ユーザーが見つかりません".to_string()))
    }

    /// ユーザーを作成する
    ///
    /// 識別子は作成時に採番され、永続化されたレコードとともに返される。
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, ApiError> {
        let user = User::new(UserId::new(), input.name, input.email);

        self.user_repository.insert(&user).await?;

        Ok(user)
    }

    /// ユーザーを更新する
    ///
    /// 1. 既存レコードをロード（存在しなければ not-found）
    /// 2. 指定されたフィールドのみ上書き（未指定フィールドは保持）
    /// 3. 永続化し、更新後のレコードを返す
    ///
    /// read-modify-write にロックや楽観的排他制御はない。
    pub async fn update_user(&self, input: UpdateUserInput) -> Result<User, ApiError> {
        let user = self
            .user_repository
            .find_by_id(&input.user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("ユーザーが見つかりません".to_string()))?;

        // フィールド単位のマージ
        let user = match input.name {
            Some(name) => user.with_name(name),
            None => user,
        };
        let user = match input.email {
            Some(email) => user.with_email(email),
            None => user,
        };

        self.user_repository.update(&user).await?;

        Ok(user)
    }

    /// ユーザーを削除する
    ///
    /// 削除件数が 0 の場合は not-found を返す。
    pub async fn delete_user(&self, user_id: &UserId) -> Result<(), ApiError> {
        let deleted_count = self.user_repository.delete(user_id).await?;

        if deleted_count == 0 {
            return Err(ApiError::NotFound("ユーザーが見つかりません".to_string()));
        }

        Ok(())
    }
}
