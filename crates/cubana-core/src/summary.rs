//! Financial-status aggregation for the admin dashboard

use super::models::FinancialStatus;
use super::reports::{FinancialSummary, OperationCounts, ProvinceSummary};
use super::types::MovementKind;
use cubana_utils::format_cup;

/// Aggregate the raw financial status into the admin summary cards
///
/// Pure function of its input: the grand total is passed through from the
/// server, province entries keep their order, and movement counts are
/// tallied by kind across all provinces.
pub fn summarize(status: &FinancialStatus) -> FinancialSummary {
    let mut counts = OperationCounts::default();
    for entry in &status.by_province {
        for movement in &entry.movements {
            match movement.kind {
                MovementKind::Entrada => counts.entradas += 1,
                MovementKind::Remesa => counts.remesas += 1,
                MovementKind::Recarga => counts.recargas += 1,
            }
            counts.total_movements += 1;
        }
    }

    let by_province = status
        .by_province
        .iter()
        .map(|entry| ProvinceSummary {
            province: entry.province.clone(),
            total: entry.total,
            total_display: format_cup(&entry.total),
            movement_count: entry.movements.len(),
        })
        .collect();

    FinancialSummary {
        total: status.total,
        total_display: format_cup(&status.total),
        by_province,
        operation_counts: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, ProvinceRef, ProvinceStatus};
    use crate::types::MovementKind;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn movement(id: &str, kind: MovementKind, amount: i64) -> Movement {
        Movement {
            id: id.to_string(),
            kind,
            amount: Decimal::from(amount),
            operation_id: None,
            date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            province: None,
        }
    }

    fn province(id: &str, name: &str) -> ProvinceRef {
        ProvinceRef {
            id: id.to_string(),
            name: name.to_string(),
            code: None,
        }
    }

    fn status() -> FinancialStatus {
        FinancialStatus {
            by_province: vec![
                ProvinceStatus {
                    province: province("p1", "La Habana"),
                    movements: vec![
                        movement("m1", MovementKind::Entrada, 1000),
                        movement("m2", MovementKind::Remesa, -150),
                        movement("m3", MovementKind::Recarga, -50),
                    ],
                    total: Decimal::from(800),
                },
                ProvinceStatus {
                    province: province("p2", "Matanzas"),
                    movements: vec![movement("m4", MovementKind::Remesa, -200)],
                    total: Decimal::from(-200),
                },
            ],
            total: Decimal::from(600),
        }
    }

    #[test]
    fn test_summarize_totals_and_counts() {
        let summary = summarize(&status());
        assert_eq!(summary.total, Decimal::from(600));
        assert_eq!(summary.operation_counts.entradas, 1);
        assert_eq!(summary.operation_counts.remesas, 2);
        assert_eq!(summary.operation_counts.recargas, 1);
        assert_eq!(summary.operation_counts.total_movements, 4);
    }

    #[test]
    fn test_summarize_keeps_province_order() {
        let summary = summarize(&status());
        assert_eq!(summary.by_province.len(), 2);
        assert_eq!(summary.by_province[0].province.name, "La Habana");
        assert_eq!(summary.by_province[0].movement_count, 3);
        assert_eq!(summary.by_province[1].province.name, "Matanzas");
    }

    #[test]
    fn test_summarize_is_order_independent() {
        let mut reversed = status();
        reversed.by_province.reverse();
        let a = summarize(&status());
        let b = summarize(&reversed);
        assert_eq!(a.total, b.total);
        assert_eq!(
            a.operation_counts.total_movements,
            b.operation_counts.total_movements
        );
    }

    #[test]
    fn test_summarize_formats_totals() {
        let summary = summarize(&status());
        assert_eq!(summary.total_display, "$600.00 CUP");
    }
}
