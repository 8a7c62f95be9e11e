/// 映画レコード
///
/// DynamoDBに1件分として書き込むレコードを表す。
/// 3フィールドともプロセス内では文字列として保持し、
/// yearのみ書き込み時にDynamoDBの数値型（N）へマップされる。
use uuid::Uuid;

/// ペイロードなし時に使用する固定の公開年
pub const FALLBACK_YEAR: &str = "2012";

/// ペイロードなし時に使用する固定のタイトル
pub const FALLBACK_TITLE: &str = "The Amazing Spider-Man 2";

/// 映画レコード
///
/// idがテーブルのキー。このサービスは書き込み専用で、
/// 保存したレコードを読み戻すことはない。
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// 公開年（数値としての検証は行わず文字列のまま保持）
    pub year: String,
    /// タイトル
    pub title: String,
    /// レコードID（テーブルキー）
    pub id: String,
}

impl Movie {
    /// 新しいMovieを作成
    pub fn new(year: String, title: String, id: String) -> Self {
        Self { year, title, id }
    }

    /// ペイロードなし時のフォールバックレコードを作成
    ///
    /// 固定のyear/titleと、呼び出しごとに新しく生成される
    /// UUID v4のidを持つ。
    pub fn fallback() -> Self {
        Self {
            year: FALLBACK_YEAR.to_string(),
            title: FALLBACK_TITLE.to_string(),
            id: Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // フィールドがそのまま保持されるテスト
    #[test]
    fn test_new_keeps_fields() {
        let movie = Movie::new("2015".to_string(), "X".to_string(), "abc".to_string());

        assert_eq!(movie.year, "2015");
        assert_eq!(movie.title, "X");
        assert_eq!(movie.id, "abc");
    }

    // フォールバックレコードの固定フィールドのテスト
    #[test]
    fn test_fallback_fixed_fields() {
        let movie = Movie::fallback();

        assert_eq!(movie.year, "2012");
        assert_eq!(movie.title, "The Amazing Spider-Man 2");
    }

    // フォールバックのidがUUID形式であるテスト
    #[test]
    fn test_fallback_id_is_uuid() {
        let movie = Movie::fallback();

        assert!(Uuid::parse_str(&movie.id).is_ok());
    }

    // フォールバックのidが呼び出しごとに異なるテスト
    #[test]
    fn test_fallback_id_unique_per_call() {
        let first = Movie::fallback();
        let second = Movie::fallback();

        assert_ne!(first.id, second.id);
    }
}
