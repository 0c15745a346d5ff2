//! Console consumer: prints the pending handle, then the outcome once it settles.

use std::io::{self, Write};

use crate::runtime::DeferredHandle;

/// Writes the handle as it is now (pending), waits for it to settle, then
/// writes either the square or `Error: <message>`.
pub async fn report<W>(handle: DeferredHandle<f64>, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{handle}")?;
    out.flush()?;

    match handle.await {
        Ok(number) => writeln!(out, "{}", format_number(number))?,
        Err(error) => writeln!(out, "Error: {error}")?,
    }
    out.flush()
}

/// Renders a result the way a dynamic-number console would, so overflow
/// prints `Infinity` rather than `inf`.
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number == f64::INFINITY {
        "Infinity".to_string()
    } else if number == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;
    use serde_json::json;

    async fn captured(input: serde_json::Value) -> Vec<String> {
        let mut out = Vec::new();
        report(compute(input), &mut out).await.unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn prints_pending_handle_then_square() {
        assert_eq!(captured(json!(5)).await, ["DeferredHandle { <pending> }", "25"]);
        assert_eq!(captured(json!(-3)).await, ["DeferredHandle { <pending> }", "9"]);
    }

    #[tokio::test(start_paused = true)]
    async fn prints_pending_handle_then_error() {
        assert_eq!(
            captured(json!(null)).await,
            ["DeferredHandle { <pending> }", "Error: Input must be a number"]
        );
        assert_eq!(
            captured(json!("hello")).await,
            ["DeferredHandle { <pending> }", "Error: Input must be a number"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn overflow_prints_infinity() {
        assert_eq!(
            captured(json!(1e200)).await,
            ["DeferredHandle { <pending> }", "Infinity"]
        );
    }

    #[test]
    fn formats_special_values() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
