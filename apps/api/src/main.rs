//! # UserHub API サーバー
//!
//! ユーザーレコードの CRUD を提供する REST API サーバー。
//!
//! ## 役割
//!
//! - **CRUD API**: `/users` 以下でユーザーレコードの一覧・取得・作成・更新・削除
//! - **API ドキュメント**: `/api-docs` で Swagger UI を提供
//! - **データ永続化**: MongoDB のドキュメントコレクションに保存
//!
//! ## 環境変数
//!
//! ポート番号などは `.env` ファイルでも設定できる。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `MONGO_URL` | **Yes** | MongoDB 接続 URL |
//! | `MONGO_DB_NAME` | No | データベース名（デフォルト: `userhub`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`、デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p userhub-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=3000 MONGO_URL=mongodb://... cargo run -p userhub-api --release
//! ```

mod config;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use config::ApiConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use userhub_api::{
    handler::{UserState, create_user, delete_user, get_user, health_check, list_users, update_user},
    openapi::ApiDoc,
    usecase::UserUseCaseImpl,
};
use userhub_infra::{
    db,
    repository::{MongoUserRepository, UserRepository},
};
use userhub_shared::observability::TracingConfig;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. MongoDB クライアントの作成
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    userhub_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // MongoDB クライアントを作成
    let client = db::create_client(&config.mongo_url)
        .await
        .expect("MongoDB クライアントの作成に失敗しました");
    let database = client.database(&config.mongo_db_name);
    tracing::info!("データベースに接続しました: {}", config.mongo_db_name);

    // 依存コンポーネントを初期化
    let user_repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
    let usecase = UserUseCaseImpl::new(user_repository);
    let user_state = Arc::new(UserState { usecase });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(user_state)
        // API ドキュメント（Swagger UI）
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
