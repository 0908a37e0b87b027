//! # ユースケース層
//!
//! ハンドラから呼び出されるアプリケーションロジックを定義する。
//! 各ユースケースはリポジトリトレイトにのみ依存し、
//! ストアの具体実装から独立している。

pub mod user;

pub use user::{CreateUserInput, UpdateUserInput, UserUseCaseImpl};
