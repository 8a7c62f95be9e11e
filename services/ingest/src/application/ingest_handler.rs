/// 書き込みリクエストハンドラー
///
/// ペイロードのパース、映画レコードの構築、リポジトリへの書き込み、
/// レスポンスの構築を行う。
use thiserror::Error;
use tracing::{debug, info};

use crate::application::request_parser::{ParseError, RequestParser};
use crate::domain::{ApiResponse, Movie};
use crate::infrastructure::{MovieRepository, MovieRepositoryError};

/// ハンドラーのエラー型
///
/// 発生したエラーはすべてそのまま上位へ伝播する（リトライなし、
/// フォールバック応答なし）。
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngestHandlerError {
    /// ペイロードのパース/形状エラー
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// ストレージ書き込みエラー
    #[error(transparent)]
    Repository(#[from] MovieRepositoryError),
}

impl IngestHandlerError {
    /// 構造化エラーログ用のエラー分類
    pub fn category(&self) -> &'static str {
        match self {
            IngestHandlerError::Parse(_) => "ParseError",
            IngestHandlerError::Repository(_) => "MovieRepositoryError",
        }
    }
}

/// 書き込みリクエストを処理するハンドラー
///
/// 異なるリポジトリ実装を受け取れる（実際のDynamoDB、テスト用モック）。
pub struct IngestHandler<R>
where
    R: MovieRepository,
{
    /// 映画レコードリポジトリ
    movie_repo: R,
}

impl<R> IngestHandler<R>
where
    R: MovieRepository,
{
    /// 新しいIngestHandlerを作成
    pub fn new(movie_repo: R) -> Self {
        Self { movie_repo }
    }

    /// 書き込みリクエストを処理
    ///
    /// # 処理フロー
    /// 1. bodyがあればパースして映画レコードを構築
    /// 2. bodyがない（または空の）場合はフォールバックレコードを構築
    /// 3. レコードを1件書き込み
    /// 4. 固定の200レスポンスを返却
    ///
    /// # 引数
    /// * `request_id` - 呼び出し基盤が割り当てたトラッキングID
    /// * `body` - イベントのbodyペイロード（任意）
    ///
    /// # 戻り値
    /// * `Ok(ApiResponse)` - 書き込み成功時
    /// * `Err(IngestHandlerError)` - パースまたは書き込み失敗時
    pub async fn handle(
        &self,
        request_id: &str,
        body: Option<&str>,
    ) -> Result<ApiResponse, IngestHandlerError> {
        let movie = match body {
            Some(body) if !body.is_empty() => {
                let movie = RequestParser::parse(body)?;

                // ペイロード本体はログへ出力しない（idのみ記録）
                info!(
                    request_id = request_id,
                    movie_id = %movie.id,
                    "レコードを書き込み"
                );
                movie
            }
            _ => {
                let movie = Movie::fallback();

                info!(
                    request_id = request_id,
                    movie_id = %movie.id,
                    "ペイロードなし、フォールバックレコードを使用"
                );
                movie
            }
        };

        self.movie_repo.put(&movie).await?;

        debug!(
            request_id = request_id,
            movie_id = %movie.id,
            "書き込み完了"
        );

        Ok(ApiResponse::ok())
    }
}
