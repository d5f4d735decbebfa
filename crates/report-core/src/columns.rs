//! Header labels the workbook is expected to carry.
//!
//! Rows are matched by exact header text; anything under other headers is
//! ignored by the normalizer.

/// Date column. Text formatted `DD.MM.YYYY`, optionally followed by a time.
pub const DATE: &str = "Дата";

/// Employee identifier (free text).
pub const EMPLOYEE: &str = "Комментарий";

/// Operation amount. A numeric cell, or locale-formatted text with a comma
/// decimal separator and optional space thousands separators.
pub const TOTAL: &str = "Итого";

/// Operation type (free text). Optional; an absent cell reads as empty.
pub const OPERATION_TYPE: &str = "Тип операции";

/// All four expected labels in display order.
pub const ALL: [&str; 4] = [DATE, EMPLOYEE, TOTAL, OPERATION_TYPE];
