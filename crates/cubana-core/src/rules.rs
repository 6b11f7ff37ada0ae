//! Business rules applied client-side before talking to the server
//!
//! The server is authoritative; these rules pre-validate what the
//! back-office UI is allowed to propose or submit.

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;

use super::error::{CoreError, CoreResult};
use super::models::Movement;

/// Default service cost proposed for a remesa of the given amount
///
/// 20 CUP per started block of 100, with a 20 CUP floor. The operator may
/// edit the proposed value before submission; it is applied at creation
/// only and never recomputed.
pub fn remesa_cost(amount: Decimal) -> Decimal {
    let fee = Decimal::from(20);
    if amount <= Decimal::ONE_HUNDRED {
        fee
    } else {
        (amount / Decimal::ONE_HUNDRED).ceil() * fee
    }
}

/// Whether a ledger movement may be deleted through the back office
///
/// Only manual entradas recorded today qualify: the movement must carry no
/// `operation_id` and its calendar date must equal today's, both taken in
/// `now`'s timezone (time-of-day ignored). The operators' clocks run on
/// Cuban local time, so "today" is a local day, not a UTC one. Movements
/// generated by a remesa/recarga are removed by the server when their
/// operation changes, never directly.
pub fn movement_deletable<Tz: TimeZone>(movement: &Movement, now: &DateTime<Tz>) -> bool {
    movement.operation_id.is_none()
        && movement.date.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

/// Checked variant of [`movement_deletable`] with a user-facing reason
pub fn check_movement_deletable<Tz: TimeZone>(
    movement: &Movement,
    now: &DateTime<Tz>,
) -> CoreResult<()> {
    if movement.operation_id.is_some() {
        return Err(CoreError::NotDeletable {
            reason: "movement was generated by an operation".to_string(),
        });
    }
    if movement.date.with_timezone(&now.timezone()).date_naive() != now.date_naive() {
        return Err(CoreError::NotDeletable {
            reason: "only movements recorded today can be deleted".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovementKind;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_remesa_cost_floor() {
        assert_eq!(remesa_cost(Decimal::from(50)), Decimal::from(20));
        assert_eq!(remesa_cost(Decimal::from(100)), Decimal::from(20));
    }

    #[test]
    fn test_remesa_cost_blocks() {
        assert_eq!(remesa_cost(Decimal::from(101)), Decimal::from(40));
        assert_eq!(remesa_cost(Decimal::from(250)), Decimal::from(60));
        assert_eq!(remesa_cost(Decimal::from(300)), Decimal::from(60));
        assert_eq!(remesa_cost(Decimal::from(301)), Decimal::from(80));
    }

    fn movement(operation_id: Option<&str>, y: i32, m: u32, d: u32, h: u32) -> Movement {
        Movement {
            id: "m1".to_string(),
            kind: MovementKind::Entrada,
            amount: Decimal::from(100),
            operation_id: operation_id.map(str::to_string),
            date: Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap(),
            province: None,
        }
    }

    #[test]
    fn test_manual_entrada_today_is_deletable() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap();
        let m = movement(None, 2024, 3, 7, 9);
        assert!(movement_deletable(&m, &now));
        assert!(check_movement_deletable(&m, &now).is_ok());
    }

    #[test]
    fn test_operation_movement_is_never_deletable() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap();
        let m = movement(Some("r1"), 2024, 3, 7, 9);
        assert!(!movement_deletable(&m, &now));
        assert!(matches!(
            check_movement_deletable(&m, &now),
            Err(CoreError::NotDeletable { .. })
        ));
    }

    #[test]
    fn test_yesterday_entrada_is_not_deletable() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap();
        let m = movement(None, 2024, 3, 6, 9);
        assert!(!movement_deletable(&m, &now));
    }

    #[test]
    fn test_today_is_a_local_day() {
        // Havana runs at UTC-4: an entrada stored at 01:30Z on the 8th
        // was recorded late on the local 7th and stays deletable all of
        // that local day.
        let havana = FixedOffset::west_opt(4 * 3600).unwrap();
        let now = havana.with_ymd_and_hms(2024, 3, 7, 22, 0, 0).unwrap();
        let m = movement(None, 2024, 3, 8, 1);
        assert!(movement_deletable(&m, &now));

        // In UTC the same movement reads as the 8th and would not match
        let utc_now = Utc.with_ymd_and_hms(2024, 3, 7, 23, 0, 0).unwrap();
        assert!(!movement_deletable(&m, &utc_now));
    }
}
