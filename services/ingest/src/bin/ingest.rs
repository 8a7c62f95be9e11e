/// API Gateway 書き込みルートハンドラー
///
/// API GatewayのHTTPリクエストを処理し、
/// 映画レコードをDynamoDBに1件書き込む。
///
/// ペイロードがない場合は固定のフォールバックレコードを書き込む。
/// 失敗時はエラーログを出力した上でエラーをそのまま返し、
/// 呼び出し基盤側で失敗として扱われる（ローカルでのリトライなし）。
use ingest::application::IngestHandler;
use ingest::infrastructure::{
    DynamoDbConfig, DynamoDbConfigError, DynamoMovieRepository, init_logging,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{error, info};

/// DynamoDbConfigの静的インスタンス
///
/// Lambda warm start時にクライアントとテーブル名を再利用するため、
/// 一度初期化した設定を静的に保持する。
static CONFIG: OnceCell<DynamoDbConfig> = OnceCell::const_new();

/// DynamoDbConfigを取得（初期化されていなければ初期化）
///
/// # 戻り値
/// * `Ok(&'static DynamoDbConfig)` - 静的参照への設定
/// * `Err(DynamoDbConfigError)` - 設定読み込みエラー
async fn get_config() -> Result<&'static DynamoDbConfig, DynamoDbConfigError> {
    CONFIG
        .get_or_try_init(|| async { DynamoDbConfig::from_env().await })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. DynamoDB設定を取得（コールドスタート時のみ初期化）
/// 2. requestContextからアクセスログ情報を取得
/// 3. IngestHandlerでペイロードを処理して1件書き込み
/// 4. 成功時は200レスポンスを返却、失敗時はエラーを伝播
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    let request_id = context.request_id;

    // DynamoDB設定を取得（warm start間で再利用）
    let config = match get_config().await {
        Ok(config) => config,
        Err(err) => {
            error!(
                request_id = %request_id,
                error = %err,
                error_type = "DynamoDbConfigError",
                "DynamoDB設定読み込み失敗"
            );
            return Err(err.into());
        }
    };

    // requestContextからアクセスログ情報を取得（欠落時は空文字）
    let identity = payload
        .get("requestContext")
        .and_then(|ctx| ctx.get("identity"));

    let source_ip = identity
        .and_then(|identity| identity.get("sourceIp"))
        .and_then(|ip| ip.as_str())
        .unwrap_or("");

    let user_agent = identity
        .and_then(|identity| identity.get("userAgent"))
        .and_then(|ua| ua.as_str())
        .unwrap_or("");

    // アクセスログ出力
    info!(
        request_id = %request_id,
        table_name = config.table_name(),
        source_ip = source_ip,
        user_agent = user_agent,
        "リクエスト受信"
    );

    // リポジトリを作成してハンドラーに委譲
    let movie_repo =
        DynamoMovieRepository::new(config.client().clone(), config.table_name().to_string());
    let ingest_handler = IngestHandler::new(movie_repo);

    // メッセージボディを取得（空文字はボディなしと同等に扱う）
    let body = payload.get("body").and_then(|b| b.as_str());

    match ingest_handler.handle(&request_id, body).await {
        Ok(response) => {
            info!(
                request_id = %request_id,
                "リクエスト処理完了"
            );
            Ok(response.to_value())
        }
        Err(err) => {
            // エラーはログ出力後そのまま伝播（エラー用レスポンス本文は構築しない）
            error!(
                request_id = %request_id,
                error = %err,
                error_type = err.category(),
                "リクエスト処理失敗"
            );
            Err(err.into())
        }
    }
}
