//! JSON export

use serde::Serialize;
use std::io::Write;

use crate::error::{SpendPaceError, SpendPaceResult};

/// Write `value` as pretty-printed JSON followed by a newline
pub fn export_json<T: Serialize, W: Write>(value: &T, writer: &mut W) -> SpendPaceResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer).map_err(|e| SpendPaceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[derive(Serialize)]
    struct Totals {
        spent: Money,
        count: usize,
    }

    #[test]
    fn test_json_export() {
        let mut buf = Vec::new();
        export_json(
            &Totals {
                spent: Money::from_cents(1050),
                count: 2,
            },
            &mut buf,
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["spent"], 1050);
        assert_eq!(parsed["count"], 2);
        assert!(buf.ends_with(b"\n"));
    }
}
