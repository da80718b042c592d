/// Raw text as entered in the three calculator fields. The projection is a
/// pure function of these values, recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadInputs {
    pub monthly_traffic: String,
    pub conversion_rate: String,
    pub average_order_value: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadProjection {
    pub projected_leads: i64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
}

fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

impl LeadInputs {
    pub fn new(monthly_traffic: &str, conversion_rate: &str, average_order_value: &str) -> Self {
        Self {
            monthly_traffic: monthly_traffic.to_string(),
            conversion_rate: conversion_rate.to_string(),
            average_order_value: average_order_value.to_string(),
        }
    }

    /// `None` until all three raw fields are non-empty; the gate is on the
    /// raw strings, not the parsed values, so `"0"` still calculates.
    /// An unparseable field contributes 0 to the projection.
    pub fn project(&self) -> Option<LeadProjection> {
        if self.monthly_traffic.is_empty()
            || self.conversion_rate.is_empty()
            || self.average_order_value.is_empty()
        {
            return None;
        }

        let traffic = parse_or_zero(&self.monthly_traffic);
        let rate = parse_or_zero(&self.conversion_rate);
        let order_value = parse_or_zero(&self.average_order_value);

        let projected_leads = (traffic * rate / 100.0).round() as i64;
        let monthly_revenue = projected_leads as f64 * order_value;

        Some(LeadProjection {
            projected_leads,
            monthly_revenue,
            annual_revenue: monthly_revenue * 12.0,
        })
    }
}

/// Zero-decimal, comma-grouped USD, e.g. `$74,250`. Matches what the
/// results panel displays.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let inputs = LeadInputs::new("10000", "2.5", "297");
        let projection = inputs.project().unwrap();

        assert_eq!(projection.projected_leads, 250);
        assert_eq!(projection.monthly_revenue, 74250.0);
        assert_eq!(projection.annual_revenue, 891000.0);
    }

    #[test]
    fn test_any_empty_field_suppresses_projection() {
        assert!(LeadInputs::new("", "2.5", "297").project().is_none());
        assert!(LeadInputs::new("10000", "", "297").project().is_none());
        assert!(LeadInputs::new("10000", "2.5", "").project().is_none());
        assert!(LeadInputs::default().project().is_none());
    }

    #[test]
    fn test_unparseable_field_counts_as_zero() {
        let projection = LeadInputs::new("lots", "2.5", "297").project().unwrap();
        assert_eq!(projection.projected_leads, 0);
        assert_eq!(projection.monthly_revenue, 0.0);

        let projection = LeadInputs::new("10000", "2.5", "n/a").project().unwrap();
        assert_eq!(projection.projected_leads, 250);
        assert_eq!(projection.monthly_revenue, 0.0);
    }

    #[test]
    fn test_leads_round_half_up() {
        // 1000 * 2.45% = 24.5 leads
        let projection = LeadInputs::new("1000", "2.45", "100").project().unwrap();
        assert_eq!(projection.projected_leads, 25);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(74250.0), "$74,250");
        assert_eq!(format_usd(891000.0), "$891,000");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(1000.0), "$1,000");
        assert_eq!(format_usd(1234567.89), "$1,234,568");
        assert_eq!(format_usd(-1500.0), "-$1,500");
    }
}
