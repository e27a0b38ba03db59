//! Time-related utilities.

use chrono::Utc;

/// Get the current Unix timestamp in milliseconds (UTC)
pub fn get_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_timestamp_millis_returns_positive_value() {
        // テスト項目: get_timestamp_millis が正の値を返す
        // given (前提条件):

        // when (操作):
        let timestamp = get_timestamp_millis();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_get_timestamp_millis_returns_increasing_timestamps() {
        // テスト項目: 呼び出すたびに増加するタイムスタンプを返す
        // given (前提条件):

        // when (操作):
        let timestamp1 = get_timestamp_millis();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let timestamp2 = get_timestamp_millis();

        // then (期待する結果):
        assert!(timestamp2 >= timestamp1);
    }
}
