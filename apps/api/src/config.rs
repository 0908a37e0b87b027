//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// MongoDB 接続 URL
    pub mongo_url: String,
    /// データベース名
    pub mongo_db_name: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            mongo_url: env::var("MONGO_URL").expect("MONGO_URL が設定されていません"),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "userhub".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、
    // テスト用のパース関数で検証する

    #[test]
    fn test_ポート番号未設定のときデフォルト3000を使う() {
        assert_eq!(parse_port(None), 3000);
    }

    #[test]
    fn test_ポート番号設定値をパースする() {
        assert_eq!(parse_port(Some("8080")), 8080);
    }

    /// Option<&str> からポート番号をパースする（テスト用）
    fn parse_port(value: Option<&str>) -> u16 {
        value
            .unwrap_or("3000")
            .parse()
            .expect("API_PORT は有効なポート番号である必要があります")
    }
}
