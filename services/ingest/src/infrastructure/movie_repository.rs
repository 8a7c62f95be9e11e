/// DynamoDBで映画レコードを管理するためのリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::domain::Movie;

/// リポジトリ操作のエラー型
///
/// スロットリング、検証、接続のいずれの障害も単一の書き込みエラー
/// として扱う。呼び出し側での再試行は行わない。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MovieRepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// 映画レコード永続化用トレイト
///
/// 異なる実装を可能にします（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// レコードを1件書き込み
    ///
    /// # 引数
    /// * `movie` - 書き込む映画レコード（idがテーブルキー）
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(MovieRepositoryError)`
    async fn put(&self, movie: &Movie) -> Result<(), MovieRepositoryError>;
}

/// MovieRepositoryのDynamoDB実装
///
/// この構造体はDynamoDBのput_item 1回で映画レコードを
/// 永続化するMovieRepositoryトレイトを実装します。
#[derive(Debug, Clone)]
pub struct DynamoMovieRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 映画テーブル名
    table_name: String,
}

impl DynamoMovieRepository {
    /// 新しいDynamoMovieRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 映画テーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl MovieRepository for DynamoMovieRepository {
    async fn put(&self, movie: &Movie) -> Result<(), MovieRepositoryError> {
        // yearのみ数値型（N）として書き込む。数値として不正な値は
        // この呼び出しがそのまま失敗する。
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("year", AttributeValue::N(movie.year.clone()))
            .item("title", AttributeValue::S(movie.title.clone()))
            .item("id", AttributeValue::S(movie.id.clone()))
            .send()
            .await
            .map_err(|e| MovieRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }
}
