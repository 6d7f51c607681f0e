//! Sales reporting
//!
//! Aggregations behind the admin dashboard: revenue, transaction count,
//! units sold, average sale value, a per-day revenue series and the most
//! recent sales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::Sale;
use std::collections::BTreeMap;

/// Number of recent sales carried by a summary
const RECENT_LIMIT: usize = 6;

/// One point of the per-day revenue series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenue {
    /// Calendar date, `YYYY-MM-DD` (UTC)
    pub date: String,
    pub total: i64,
}

/// Dashboard aggregates over the sales history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: i64,
    pub sale_count: usize,
    /// Units sold across all sale lines
    pub items_sold: u64,
    /// Mean sale total, whole currency units (0 when there are no sales)
    pub average_sale: i64,
    /// Revenue grouped by UTC calendar day, oldest first
    pub revenue_by_day: Vec<DailyRevenue>,
    /// Most recent sales, newest first
    pub recent: Vec<Sale>,
}

/// Summarize a sales history; `sales` must be sorted newest first
pub fn summarize(sales: &[Sale]) -> SalesSummary {
    let total_revenue: i64 = sales.iter().map(|s| s.total).sum();
    let items_sold: u64 = sales
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|i| i.quantity as u64)
        .sum();
    let average_sale = if sales.is_empty() {
        0
    } else {
        total_revenue / sales.len() as i64
    };

    let mut by_day: BTreeMap<String, i64> = BTreeMap::new();
    for sale in sales {
        let date = DateTime::<Utc>::from_timestamp_millis(sale.timestamp)
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        *by_day.entry(date).or_insert(0) += sale.total;
    }

    SalesSummary {
        total_revenue,
        sale_count: sales.len(),
        items_sold,
        average_sale,
        revenue_by_day: by_day
            .into_iter()
            .map(|(date, total)| DailyRevenue { date, total })
            .collect(),
        recent: sales.iter().take(RECENT_LIMIT).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{PaymentMethod, SaleItem};

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    fn sale(timestamp: i64, total: i64, quantity: u32) -> Sale {
        Sale {
            id: Some(format!("s-{timestamp}")),
            items: vec![SaleItem {
                product_id: "p-1".into(),
                name: "Bakso Urat".into(),
                price: total,
                quantity,
            }],
            subtotal: total,
            discount: 0,
            total,
            payment_method: PaymentMethod::Tunai,
            timestamp,
            staff_name: "Budi".into(),
            promo_code: None,
        }
    }

    #[test]
    fn test_summary_totals() {
        // 2023-11-15 00:00 UTC
        let base = 1_700_006_400_000;
        let sales = vec![
            sale(base + DAY_MS, 20000, 2),
            sale(base + 1000, 15000, 1),
            sale(base, 10000, 1),
        ];

        let summary = summarize(&sales);
        assert_eq!(summary.total_revenue, 45000);
        assert_eq!(summary.sale_count, 3);
        assert_eq!(summary.items_sold, 4);
        assert_eq!(summary.average_sale, 15000);
    }

    #[test]
    fn test_revenue_grouped_by_day_oldest_first() {
        let base = 1_700_006_400_000;
        let sales = vec![
            sale(base + DAY_MS, 20000, 1),
            sale(base + 1000, 15000, 1),
            sale(base, 10000, 1),
        ];

        let summary = summarize(&sales);
        assert_eq!(
            summary.revenue_by_day,
            vec![
                DailyRevenue {
                    date: "2023-11-15".into(),
                    total: 25000,
                },
                DailyRevenue {
                    date: "2023-11-16".into(),
                    total: 20000,
                },
            ]
        );
    }

    #[test]
    fn test_recent_is_capped_and_newest_first() {
        let base = 1_700_006_400_000;
        let sales: Vec<Sale> = (0..10).map(|i| sale(base + (9 - i) * 1000, 1000, 1)).collect();

        let summary = summarize(&sales);
        assert_eq!(summary.recent.len(), RECENT_LIMIT);
        assert_eq!(summary.recent[0].timestamp, base + 9000);
    }

    #[test]
    fn test_empty_history() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.sale_count, 0);
        assert_eq!(summary.average_sale, 0);
        assert!(summary.revenue_by_day.is_empty());
        assert!(summary.recent.is_empty());
    }
}
