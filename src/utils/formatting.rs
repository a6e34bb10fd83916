/// Quetzal amount with two decimals, e.g. `Q30.00`.
pub fn format_money(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount }; // avoid negative zero display
    format!("Q{:.2}", amount)
}

pub fn format_days(days: f64) -> String {
    format!("{:.2} días", days)
}
