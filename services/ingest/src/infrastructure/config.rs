/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// DynamoDB設定のエラー型
#[derive(Debug, Error)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つDynamoDB設定
///
/// コールドスタート時に一度だけ構築し、以降の呼び出しで再利用する
/// （エントリポイント側のOnceCellに保持される）。
/// テーブル名は環境変数TABLE_NAMEで設定する。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 映画テーブル名
    table_name: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、環境変数からテーブル名を読み取って新しいDynamoDbConfigを作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - TABLE_NAME: 映画レコード用DynamoDBテーブル名
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        // AWS設定からDynamoDBクライアントを作成
        let client = DynamoDbClient::new(&aws_config);

        // 環境変数からテーブル名を読み込み
        let table_name = std::env::var("TABLE_NAME")
            .map_err(|_| DynamoDbConfigError::MissingEnvVar("TABLE_NAME".to_string()))?;

        Ok(Self { client, table_name })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 映画テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を設定/削除するヘルパー
    // 安全性: 環境変数を触るテストは#[serial]で直列実行する
    unsafe fn set_env(key: &str, value: &str) {
        // 安全性: 呼び出し元が直列実行を保証
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        // 安全性: 呼び出し元が直列実行を保証
        unsafe { std::env::remove_var(key) };
    }

    // エラー型テスト
    #[test]
    fn test_missing_env_var_error_display() {
        let error = DynamoDbConfigError::MissingEnvVar("TABLE_NAME".to_string());
        assert_eq!(error.to_string(), "Missing environment variable: TABLE_NAME");
    }

    // 明示的な値でDynamoDbConfig構築のテスト
    #[tokio::test]
    async fn test_dynamodb_config_new() {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        let config = DynamoDbConfig::new(client, "test-movies".to_string());

        assert_eq!(config.table_name(), "test-movies");

        // クライアントがアクセス可能であることを検証
        let _client_ref = config.client();
    }

    // TABLE_NAME未設定時にfrom_envが失敗するテスト
    #[tokio::test]
    #[serial]
    async fn test_from_env_missing_table_name() {
        // 安全性: #[serial]により直列実行
        unsafe { remove_env("TABLE_NAME") };

        let result = DynamoDbConfig::from_env().await;

        assert!(result.is_err());
        match result.unwrap_err() {
            DynamoDbConfigError::MissingEnvVar(var) => assert_eq!(var, "TABLE_NAME"),
        }
    }

    // TABLE_NAME設定時にfrom_envが成功するテスト
    #[tokio::test]
    #[serial]
    async fn test_from_env_with_table_name() {
        // 安全性: #[serial]により直列実行
        unsafe { set_env("TABLE_NAME", "my-movies-table") };

        let result = DynamoDbConfig::from_env().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().table_name(), "my-movies-table");

        // クリーンアップ
        // 安全性: #[serial]により直列実行
        unsafe { remove_env("TABLE_NAME") };
    }
}
