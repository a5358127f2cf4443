//! Fitting text into a maximum width.

use tracing::trace;

use crate::error::Result;
use crate::measure::{FontSpec, TextMeasurer, measure_all};

/// Shortens `text` so that it renders narrower than `max_width`.
///
/// Text that already fits is returned unchanged. Otherwise the longest prefix
/// whose width, with `overflow` appended, stays below `max_width` is kept,
/// trimmed of surrounding whitespace, and `overflow` is appended. Prefixes
/// grow one character at a time and stop at the first one that does not fit.
///
/// All candidate prefixes are measured in a single batch.
///
/// # Errors
///
/// Returns an error if the measurer fails.
///
/// # Examples
///
/// ```
/// use nextbday_layout::measure::{FontSpec, FontWeight, TextMeasurer};
/// use nextbday_layout::{Result, truncate};
///
/// struct OnePerChar;
///
/// impl TextMeasurer for OnePerChar {
///     async fn measure(&self, texts: &[String], _font: FontSpec) -> Result<Vec<f64>> {
///         Ok(texts.iter().map(|t| t.chars().count() as f64).collect())
///     }
/// }
///
/// # tokio_test(async {
/// let font = FontSpec::new("Helvetica-Light", 12.0, FontWeight::Light);
/// let short = truncate(&OnePerChar, "Ada Lovelace", 6.0, "…", font).await?;
/// assert_eq!(short, "Ada…");
/// # Ok::<(), nextbday_layout::LayoutError>(())
/// # });
/// # fn tokio_test<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
pub async fn truncate<M>(
    measurer: &M,
    text: &str,
    max_width: f64,
    overflow: &str,
    font: FontSpec,
) -> Result<String>
where
    M: TextMeasurer + Sync + ?Sized,
{
    let full = measure_all(measurer, &[text.to_string()], font.clone()).await?;
    truncate_measured(measurer, text, full[0], max_width, overflow, font).await
}

/// Like [`truncate`], for a `text` already known to be `width` wide.
///
/// # Errors
///
/// Returns an error if the measurer fails.
pub async fn truncate_measured<M>(
    measurer: &M,
    text: &str,
    width: f64,
    max_width: f64,
    overflow: &str,
    font: FontSpec,
) -> Result<String>
where
    M: TextMeasurer + Sync + ?Sized,
{
    if width < max_width {
        return Ok(text.to_string());
    }

    let candidates: Vec<String> = text
        .char_indices()
        .map(|(offset, c)| format!("{}{overflow}", &text[..offset + c.len_utf8()]))
        .collect();
    let widths = measure_all(measurer, &candidates, font).await?;

    let kept = widths
        .iter()
        .position(|&width| width >= max_width)
        .unwrap_or(widths.len());
    let prefix: String = text.chars().take(kept).collect();
    trace!(text, kept, max_width, "truncated text");

    Ok(format!("{}{overflow}", prefix.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FontWeight;
    use crate::test_utils::{CharMeasurer, FailingMeasurer};
    use proptest::prelude::*;

    fn light() -> FontSpec {
        FontSpec::new("Helvetica-Light", 10.0, FontWeight::Light)
    }

    #[tokio::test]
    async fn fitting_text_is_unchanged() {
        let measurer = CharMeasurer::new(1.0);
        let result = truncate(&measurer, "Grace Hopper", 13.0, "…", light()).await.unwrap();
        assert_eq!(result, "Grace Hopper");
        assert_eq!(measurer.calls(), 1);
    }

    #[tokio::test]
    async fn text_of_exactly_max_width_is_truncated() {
        let measurer = CharMeasurer::new(1.0);
        let result = truncate(&measurer, "Grace Hopper", 12.0, "…", light()).await.unwrap();
        assert_eq!(result, "Grace Hopp…");
    }

    #[tokio::test]
    async fn trailing_whitespace_is_trimmed_before_the_marker() {
        let measurer = CharMeasurer::new(1.0);
        // "Grace " + "…" is 7 wide, "Grace H…" would be 8
        let result = truncate(&measurer, "Grace Hopper", 8.0, "…", light()).await.unwrap();
        assert_eq!(result, "Grace…");
    }

    #[tokio::test]
    async fn nothing_fits() {
        let measurer = CharMeasurer::new(5.0);
        let result = truncate(&measurer, "Knuth", 4.0, "...", light()).await.unwrap();
        assert_eq!(result, "...");
    }

    #[tokio::test]
    async fn multibyte_characters_are_kept_whole() {
        let measurer = CharMeasurer::new(1.0);
        let result = truncate(&measurer, "Ümit Ğökçe", 6.0, "…", light()).await.unwrap();
        assert_eq!(result, "Ümit…");
    }

    #[tokio::test]
    async fn known_width_skips_measuring_fitting_text() {
        let measurer = CharMeasurer::new(1.0);
        let result = truncate_measured(&measurer, "Grace Hopper", 12.0, 13.0, "…", light())
            .await
            .unwrap();
        assert_eq!(result, "Grace Hopper");
        assert_eq!(measurer.calls(), 0);
    }

    #[tokio::test]
    async fn known_width_that_overflows_is_truncated() {
        let measurer = CharMeasurer::new(1.0);
        let result = truncate_measured(&measurer, "Grace Hopper", 12.0, 8.0, "…", light())
            .await
            .unwrap();
        assert_eq!(result, "Grace…");
        assert_eq!(measurer.calls(), 1);
    }

    #[tokio::test]
    async fn measurement_errors_propagate() {
        assert!(truncate(&FailingMeasurer, "Ada", 10.0, "…", light()).await.is_err());
    }

    proptest! {
        #[test]
        fn result_fits_or_is_unchanged(text in "[a-zA-Z ]{0,30}", max_width in 2.0f64..40.0) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let measurer = CharMeasurer::new(1.0);
            let result = runtime
                .block_on(truncate(&measurer, &text, max_width, "…", light()))
                .unwrap();

            let full = measurer.width(&text, &light());
            if full < max_width {
                prop_assert_eq!(result, text);
            } else {
                prop_assert!(measurer.width(&result, &light()) < max_width);
                prop_assert!(result.ends_with('…'));
            }
        }
    }
}
