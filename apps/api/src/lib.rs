//! # UserHub API ライブラリ
//!
//! API サーバーのハンドラ・ユースケース・OpenAPI 定義を公開する。
//! `generate-openapi` バイナリとテストから利用される。

pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
