//! Display formatting for the pt-BR site.

use rust_decimal::Decimal;

use crate::booking::round_money;

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_money(amount, 2);
    let fixed = format!("{:.2}", rounded.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, grouped, fraction)
}
