use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the expense report pipeline.
///
/// Row-level rejections (bad date, empty employee, unparseable amount) are
/// not errors; they silently exclude the row. Only the aggregate
/// "zero survivors" condition is surfaced, as [`ReportError::NoValidTransactions`].
#[derive(Error, Debug)]
pub enum ReportError {
    /// The workbook file could not be read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The supplied bytes could not be interpreted as a spreadsheet.
    ///
    /// Surfaced with a single generic user-facing message; the underlying
    /// parser error stays available through the source chain.
    #[error(
        "Не удалось проанализировать файл XLSX. \
         Убедитесь, что он имеет правильный формат и названия столбцов."
    )]
    Workbook(#[from] calamine::Error),

    /// The container parsed but holds no worksheets at all.
    #[error("В файле нет ни одного листа с данными.")]
    EmptyWorkbook,

    /// Parsing succeeded structurally but zero rows survived normalization.
    #[error(
        "Не найдено действительных транзакций в файле. Проверьте названия \
         столбцов: 'Дата', 'Комментарий', 'Итого', 'Тип операции'."
    )]
    NoValidTransactions,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
