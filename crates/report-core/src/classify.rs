//! Substring classification of operation types.
//!
//! Both predicates run against the already-lowercased operation type and are
//! evaluated independently of each other: a transaction can in principle
//! count as a refund and a card issuance at the same time, and it then
//! contributes to both buckets.

/// Marker meaning a refund operation.
const REFUND_MARKER: &str = "возврат";

/// Markers meaning a card-issuance operation. The second entry is a
/// misspelling that occurs in real exports and must keep matching.
const CARD_ISSUE_MARKERS: [&str; 2] = ["выпуск карты", "выпуск карти"];

/// True when the operation type describes a refund.
pub fn is_refund(operation_type: &str) -> bool {
    operation_type.contains(REFUND_MARKER)
}

/// True when the operation type describes a card issuance.
pub fn is_card_issue(operation_type: &str) -> bool {
    CARD_ISSUE_MARKERS
        .iter()
        .any(|marker| operation_type.contains(marker))
}
