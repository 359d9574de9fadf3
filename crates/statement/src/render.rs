use boxoffice_billing::{Invoice, PricingPolicy, total_amount, total_credits};
use boxoffice_core::{BillingResult, Money};
use boxoffice_plays::Catalog;

/// Render the plain-text statement for an invoice.
///
/// Lines appear in invoice order; amounts become USD text at this boundary
/// only. Any unresolved play id or unknown play kind fails the whole
/// statement — the caller never sees partial output.
pub fn render(
    invoice: &Invoice,
    catalog: &Catalog,
    policy: &PricingPolicy,
) -> BillingResult<String> {
    let mut out = format!("Statement for {}\n", invoice.customer);

    for performance in &invoice.performances {
        let play = catalog.resolve(&performance.play_id)?;
        let amount = policy.price(performance, play)?;
        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            play.name,
            usd(amount),
            performance.audience
        ));
    }

    out.push_str(&format!(
        "Amount owed is {}\n",
        usd(total_amount(invoice, catalog, policy)?)
    ));
    out.push_str(&format!(
        "You earned {} credits\n",
        total_credits(invoice, catalog, policy)?
    ));
    Ok(out)
}

/// Format an amount US-dollar style: `$`, thousands separators, exactly
/// two decimal places. Integer quotient/remainder throughout; no floats.
pub fn usd(amount: Money) -> String {
    let dollars = amount.cents() / 100;
    let cents = amount.cents() % 100;
    format!("${}.{:02}", group_thousands(dollars), cents)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
