use chrono::Utc;

/// Human-facing receipt reference: fixed prefix plus the last six digits of
/// the epoch millisecond clock. Two calls in the same millisecond collide;
/// acceptable for a reference number that is not a key.
pub fn generate_receipt_number() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("RCP-{:06}", millis % 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_number_shape() {
        let receipt = generate_receipt_number();
        assert!(receipt.starts_with("RCP-"));
        assert_eq!(receipt.len(), 10);
        assert!(receipt[4..].chars().all(|c| c.is_ascii_digit()));
    }
}
