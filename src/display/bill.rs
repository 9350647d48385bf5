//! Bill display formatting
//!
//! Formats the ledger and split results as plain-text tables.

use std::collections::BTreeMap;

use crate::models::Bill;

/// Format the ledger as a table, numbering bills from 1
pub fn format_bill_list(bills: &[Bill]) -> String {
    if bills.is_empty() {
        return "There are no bills in the bill list yet.".to_string();
    }

    let id_width = bills.len().to_string().len().max(2);
    let amount_width = bills
        .iter()
        .map(|b| format_amount(b.amount).len())
        .max()
        .unwrap_or(6)
        .max(6);
    let payer_width = bills
        .iter()
        .map(|b| b.payer.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:>amount_width$}  {:<payer_width$}  {}\n",
        "ID",
        "Amount",
        "Payer",
        "Participants",
        id_width = id_width,
        amount_width = amount_width,
        payer_width = payer_width,
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:->amount_width$}  {:-<payer_width$}  {:-<12}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        amount_width = amount_width,
        payer_width = payer_width,
    ));

    for (i, bill) in bills.iter().enumerate() {
        output.push_str(&format!(
            "{:<id_width$}  {:>amount_width$}  {:<payer_width$}  {}\n",
            i + 1,
            format_amount(bill.amount),
            bill.payer,
            bill.participants.join(", "),
            id_width = id_width,
            amount_width = amount_width,
            payer_width = payer_width,
        ));
    }

    let total: f64 = bills.iter().map(|b| b.amount).sum();
    output.push_str(&format!(
        "{:-<id_width$}  {:->amount_width$}\n",
        "",
        "",
        id_width = id_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "{:<id_width$}  {:>amount_width$}\n",
        "",
        format_amount(total),
        id_width = id_width,
        amount_width = amount_width,
    ));

    output
}

/// Format the amount each participant owes
pub fn format_owed(owed: &BTreeMap<String, f64>) -> String {
    if owed.is_empty() {
        return "Nobody owes anything.".to_string();
    }

    format_name_table(owed, "Owes", format_amount)
}

/// Format net balances; positive means the person is owed money
pub fn format_balances(balances: &BTreeMap<String, f64>) -> String {
    if balances.is_empty() {
        return "Nobody owes anything.".to_string();
    }

    format_name_table(balances, "Balance", |v| {
        // Rounds to cents so tiny float residue shows as $0.00
        let cents = (v * 100.0).round();
        if cents < 0.0 {
            format!("-{}", format_amount(cents.abs() / 100.0))
        } else {
            format!("+{}", format_amount(cents.abs() / 100.0))
        }
    })
}

fn format_name_table(
    values: &BTreeMap<String, f64>,
    heading: &str,
    render: impl Fn(f64) -> String,
) -> String {
    let name_width = values
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let rendered: Vec<_> = values.values().map(|v| render(*v)).collect();
    let value_width = rendered
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(heading.len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>value_width$}\n",
        "Name",
        heading,
        name_width = name_width,
        value_width = value_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->value_width$}\n",
        "",
        "",
        name_width = name_width,
        value_width = value_width,
    ));

    for (name, value) in values.keys().zip(rendered) {
        output.push_str(&format!(
            "{:<name_width$}  {:>value_width$}\n",
            name,
            value,
            name_width = name_width,
            value_width = value_width,
        ));
    }

    output
}

/// Format a dollar amount with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert!(format_bill_list(&[]).contains("no bills"));
    }

    #[test]
    fn test_format_bill_list() {
        let bills = vec![
            Bill::new(vec!["Ann".into(), "Bo".into()], "Pat", 90.0),
            Bill::new(vec!["Cy".into()], "Ann", 1234.5),
        ];

        let output = format_bill_list(&bills);
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("1 "));
        assert!(lines[2].contains("$90.00"));
        assert!(lines[2].ends_with("Ann, Bo"));
        assert!(lines[3].starts_with("2 "));
        assert!(lines[3].contains("$1234.50"));
        assert!(output.contains("$1324.50"));
    }

    #[test]
    fn test_format_owed() {
        let mut owed = BTreeMap::new();
        owed.insert("Ann".to_string(), 30.0);
        owed.insert("Bo".to_string(), 12.345);

        let output = format_owed(&owed);
        assert!(output.contains("Ann"));
        assert!(output.contains("$30.00"));
        assert!(output.contains("$12.35") || output.contains("$12.34"));
        assert!(format_owed(&BTreeMap::new()).contains("Nobody"));
    }

    #[test]
    fn test_format_balances_signs() {
        let mut balances = BTreeMap::new();
        balances.insert("Pat".to_string(), 60.0);
        balances.insert("Ann".to_string(), -60.0);
        balances.insert("Bo".to_string(), -1e-12);

        let output = format_balances(&balances);
        assert!(output.contains("+$60.00"));
        assert!(output.contains("-$60.00"));
        assert!(output.contains("+$0.00"));
    }
}
