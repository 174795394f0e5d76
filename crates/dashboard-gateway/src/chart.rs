//! Chart Endpoint Payload
//!
//! Typed envelope for the quote chart response. The price of record is the
//! meta field; when absent the last non-null daily close stands in.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    pub chart: ChartOuter,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartOuter {
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

/// Meta price first, else the newest non-null close.
pub(crate) fn extract_price(envelope: &ChartEnvelope) -> Option<f64> {
    let result = envelope.chart.result.as_ref()?.first()?;
    result.meta.regular_market_price.or_else(|| {
        result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.iter().rev().flatten().copied().next())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_price_wins() {
        let envelope: ChartEnvelope = serde_json::from_str(
            r#"{"chart":{"result":[{"meta":{"regularMarketPrice":10400.0},
                "indicators":{"quote":[{"close":[10000.0,10200.0]}]}}]}}"#,
        )
        .unwrap();
        assert_eq!(extract_price(&envelope), Some(10400.0));
    }

    #[test]
    fn falls_back_to_last_non_null_close() {
        let envelope: ChartEnvelope = serde_json::from_str(
            r#"{"chart":{"result":[{"meta":{},
                "indicators":{"quote":[{"close":[2900.0,2980.0,null]}]}}]}}"#,
        )
        .unwrap();
        assert_eq!(extract_price(&envelope), Some(2980.0));
    }

    #[test]
    fn empty_result_has_no_price() {
        let envelope: ChartEnvelope =
            serde_json::from_str(r#"{"chart":{"result":null}}"#).unwrap();
        assert_eq!(extract_price(&envelope), None);
    }
}
