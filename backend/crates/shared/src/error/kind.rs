//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate in the workspace.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ログインモジュールとホスト間で共有されるエラー分類を定義します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unsupported;
/// assert_eq!(kind.as_str(), "Unsupported");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値が不正（オプション値の型違いなど）
    BadInput,
    /// ライフサイクルの呼び出し順序が不正
    InvalidState,
    /// ホストが要求されたコールバックをサポートしていない
    Unsupported,
    /// 入出力エラー（コンソール、パイプなど）
    Io,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// 表示用の文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidState.as_str(), "Invalid State");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadInput => "Bad Input",
            ErrorKind::InvalidState => "Invalid State",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::Io => "I/O Error",
            ErrorKind::Internal => "Internal Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
