//! Currency formatting for report output

/// Currency symbol for a currency code (unknown codes use `$`)
pub fn currency_symbol(currency_code: &str) -> &'static str {
    match currency_code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CAD" => "CA$",
        "AUD" => "A$",
        _ => "$",
    }
}

/// Format an amount for display, e.g. `$1,234.50` or `¥1,234`.
///
/// Yen amounts are truncated to whole units; everything else is shown with
/// two decimals. The sign, if any, follows the symbol.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let symbol = currency_symbol(currency_code);

    let number = if currency_code == "JPY" {
        group_thousands(&format!("{}", amount.trunc() as i64))
    } else {
        group_thousands(&format!("{:.2}", amount))
    };

    format!("{}{}", symbol, number)
}

/// Insert thousands separators into the integer part of a plain decimal string
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
