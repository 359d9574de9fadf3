//! Invoice-level aggregation.

use boxoffice_core::{BillingResult, Money};
use boxoffice_plays::Catalog;

use crate::invoice::Invoice;
use crate::pricing::PricingPolicy;

/// Sum of per-performance prices, iterated in invoice order.
///
/// Errors from resolution or pricing propagate unmodified; no partial sum
/// is ever returned.
pub fn total_amount(
    invoice: &Invoice,
    catalog: &Catalog,
    policy: &PricingPolicy,
) -> BillingResult<Money> {
    let mut total = Money::ZERO;
    for performance in &invoice.performances {
        let play = catalog.resolve(&performance.play_id)?;
        total = total.checked_add(policy.price(performance, play)?)?;
    }
    Ok(total)
}

/// Sum of per-performance volume credits, iterated in invoice order.
pub fn total_credits(
    invoice: &Invoice,
    catalog: &Catalog,
    policy: &PricingPolicy,
) -> BillingResult<u64> {
    let mut total: u64 = 0;
    for performance in &invoice.performances {
        let play = catalog.resolve(&performance.play_id)?;
        total += policy.volume_credits(performance, play)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Performance;
    use boxoffice_core::BillingError;
    use boxoffice_plays::{Play, PlayId, PlayKind};
    use proptest::prelude::*;

    fn test_catalog() -> Catalog {
        Catalog::from_iter([
            (
                PlayId::from("hamlet"),
                Play::new("Hamlet", PlayKind::Tragedy),
            ),
            (
                PlayId::from("as-like"),
                Play::new("As You Like It", PlayKind::Comedy),
            ),
            (
                PlayId::from("othello"),
                Play::new("Othello", PlayKind::Tragedy),
            ),
        ])
    }

    fn test_invoice() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new(PlayId::from("hamlet"), 55),
                Performance::new(PlayId::from("as-like"), 35),
                Performance::new(PlayId::from("othello"), 40),
            ],
        )
    }

    #[test]
    fn totals_sum_every_performance() {
        let catalog = test_catalog();
        let policy = PricingPolicy::default();
        let invoice = test_invoice();

        // 65000 + 58000 + 50000
        assert_eq!(
            total_amount(&invoice, &catalog, &policy).unwrap(),
            Money::from_cents(173_000)
        );
        // 25 + (5 + 7) + 10
        assert_eq!(total_credits(&invoice, &catalog, &policy).unwrap(), 47);
    }

    #[test]
    fn empty_invoice_totals_to_zero() {
        let catalog = test_catalog();
        let policy = PricingPolicy::default();
        let invoice = Invoice::new("BigCo", Vec::new());

        assert_eq!(
            total_amount(&invoice, &catalog, &policy).unwrap(),
            Money::ZERO
        );
        assert_eq!(total_credits(&invoice, &catalog, &policy).unwrap(), 0);
    }

    #[test]
    fn unresolved_play_id_fails_both_totals() {
        let catalog = test_catalog();
        let policy = PricingPolicy::default();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new(PlayId::from("macbeth"), 20)],
        );

        for err in [
            total_amount(&invoice, &catalog, &policy).unwrap_err(),
            total_credits(&invoice, &catalog, &policy).unwrap_err(),
        ] {
            match err {
                BillingError::UnresolvedPlayId(id) if id == "macbeth" => {}
                _ => panic!("Expected UnresolvedPlayId from aggregation"),
            }
        }
    }

    #[test]
    fn unknown_kind_fails_the_credit_total_too() {
        let mut catalog = test_catalog();
        catalog.insert(
            PlayId::from("henry-v"),
            Play::new("Henry V", PlayKind::Other("history".to_string())),
        );
        let policy = PricingPolicy::default();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new(PlayId::from("henry-v"), 40)],
        );

        let err = total_credits(&invoice, &catalog, &policy).unwrap_err();
        match err {
            BillingError::UnknownPlayType(tag) if tag == "history" => {}
            _ => panic!("Expected UnknownPlayType from credit aggregation"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: reordering performances never changes either total.
        #[test]
        fn totals_are_order_independent(
            audiences in prop::collection::vec(0u32..500, 0..20)
        ) {
            let catalog = test_catalog();
            let policy = PricingPolicy::default();

            let performances: Vec<Performance> = audiences
                .iter()
                .enumerate()
                .map(|(i, &audience)| {
                    let id = if i % 2 == 0 { "hamlet" } else { "as-like" };
                    Performance::new(PlayId::from(id), audience)
                })
                .collect();

            let forward = Invoice::new("BigCo", performances.clone());
            let mut reversed_performances = performances;
            reversed_performances.reverse();
            let reversed = Invoice::new("BigCo", reversed_performances);

            prop_assert_eq!(
                total_amount(&forward, &catalog, &policy).unwrap(),
                total_amount(&reversed, &catalog, &policy).unwrap()
            );
            prop_assert_eq!(
                total_credits(&forward, &catalog, &policy).unwrap(),
                total_credits(&reversed, &catalog, &policy).unwrap()
            );
        }
    }
}
