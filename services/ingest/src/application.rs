// アプリケーション層モジュール
pub mod ingest_handler;
pub mod request_parser;

// 再エクスポート
pub use ingest_handler::{IngestHandler, IngestHandlerError};
pub use request_parser::{ParseError, RequestParser};
