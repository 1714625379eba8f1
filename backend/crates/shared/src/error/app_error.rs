//! Application Error - Unified error type for the workspace
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// 統一エラー型
///
/// ワークスペース全体で使用する標準エラー型です。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類
/// * `message` - エラーメッセージ
/// * `hint` - ホストまたは利用者が取るべき対応（オプション）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// // シンプルなエラー
/// let err = AppError::new(ErrorKind::InvalidState, "Module not initialized");
///
/// // 詳細なエラー
/// let err = AppError::bad_input("Option `debug` must be a boolean")
///     .with_hint("Use true or false");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// メッセージ
    message: Cow<'static, str>,
    /// 取るべき対応
    hint: Option<Cow<'static, str>>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// 結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn parse_flag(raw: &str) -> AppResult<bool> {
///     match raw {
///         "true" => Ok(true),
///         "false" => Ok(false),
///         _ => Err(AppError::bad_input("Not a boolean")),
///     }
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `kind` - エラー種別
    /// * `message` - メッセージ
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint: None,
            source: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 不正な入力
    #[inline]
    pub fn bad_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadInput, message)
    }

    /// 内部エラー
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 取るべき対応を設定
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::AppError;
    /// use kernel::error::kind::ErrorKind;
    /// let err = AppError::new(ErrorKind::InvalidState, "login() called before initialize()")
    ///     .with_hint("Call initialize() first");
    /// ```
    #[inline]
    pub fn with_hint(mut self, hint: impl Into<Cow<'static, str>>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn parse_options(raw: &str) -> AppResult<serde_json::Value> {
    ///     serde_json::from_str(raw)
    ///         .map_err(|e| AppError::bad_input("Options are not JSON").with_source(e))
    /// }
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 取るべき対応を取得
    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(hint) = &self.hint {
            builder.field("hint", hint);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (Hint: {})", hint)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
