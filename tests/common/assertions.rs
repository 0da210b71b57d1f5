//! Custom test assertions

use sheet_texter::SendState;

/// Assertions for the send log
pub trait SendStateAssertions {
    /// Assert the row is resolved
    fn assert_sent(&self, row_id: &str);

    /// Assert the row is recorded and will be retried
    fn assert_pending(&self, row_id: &str);
}

impl SendStateAssertions for SendState {
    fn assert_sent(&self, row_id: &str) {
        let record = self
            .get(row_id)
            .unwrap_or_else(|| panic!("Expected a record for {}", row_id));
        assert!(record.sent, "Expected {} to be sent, got {:?}", row_id, record);
    }

    fn assert_pending(&self, row_id: &str) {
        let record = self
            .get(row_id)
            .unwrap_or_else(|| panic!("Expected a record for {}", row_id));
        assert!(!record.sent, "Expected {} to be pending, got {:?}", row_id, record);
    }
}
