/// リクエストペイロードパーサー
///
/// API Gatewayイベントのbody文字列をパースし、映画レコードに変換する。
/// 存在チェックのみを行い、スキーマ検証は行わない。
use serde_json::Value;
use thiserror::Error;

use crate::domain::Movie;

/// ペイロードパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// JSONパースに失敗
    #[error("failed to parse JSON payload")]
    InvalidJson,

    /// ペイロードがJSONオブジェクトでない
    #[error("payload must be a JSON object")]
    NotObject,

    /// 必須フィールドが不足
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// リクエストペイロードパーサー
pub struct RequestParser;

impl RequestParser {
    /// bodyペイロードをパースしてMovieに変換
    ///
    /// # 引数
    /// * `body` - パースするJSON文字列
    ///
    /// # 戻り値
    /// * `Ok(Movie)` - パース成功時
    /// * `Err(ParseError)` - パース失敗時
    ///
    /// # 例
    /// ```
    /// use ingest::application::RequestParser;
    ///
    /// let result = RequestParser::parse(r#"{"year": 2015, "title": "X", "id": "abc"}"#);
    /// assert!(result.is_ok());
    /// ```
    pub fn parse(body: &str) -> Result<Movie, ParseError> {
        // JSONとしてパース
        let value: Value = serde_json::from_str(body).map_err(|_| ParseError::InvalidJson)?;

        // オブジェクトであることを検証
        let object = value.as_object().ok_or(ParseError::NotObject)?;

        // 必須フィールドを取得して文字列化
        let year = Self::require_field(object, "year")?;
        let title = Self::require_field(object, "title")?;
        let id = Self::require_field(object, "id")?;

        Ok(Movie::new(year, title, id))
    }

    /// 必須フィールドを取り出して文字列に強制変換
    ///
    /// JSON文字列はそのまま、それ以外の値はJSON表現のまま文字列化する。
    /// yearが数値として妥当かはここでは検証しない（不正な値は
    /// ストレージ層の書き込みで失敗する）。
    fn require_field(
        object: &serde_json::Map<String, Value>,
        field: &'static str,
    ) -> Result<String, ParseError> {
        let value = object.get(field).ok_or(ParseError::MissingField(field))?;

        match value {
            Value::String(s) => Ok(s.clone()),
            other => Ok(other.to_string()),
        }
    }
}
