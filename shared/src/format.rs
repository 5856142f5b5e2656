/// Format a number with comma thousands separators.
///
/// Renders like the browser's default `en-US` number formatting: at most
/// three fraction digits rounded half away from zero, trailing zeros
/// dropped, `-0` shown as `0`.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (int_part, frac_part) = round_to_thousandths(amount.abs());
    let frac_part = frac_part.trim_end_matches('0');

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if amount.is_sign_negative() && !is_zero { "-" } else { "" };

    let mut result = String::with_capacity(int_part.len() + int_part.len() / 3 + 5);
    result.push_str(sign);
    result.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

/// Round a finite, non-negative value to three decimals, ties going up.
///
/// Works on the exact decimal expansion of the float so binary ties such as
/// `1.0625` are not sent to the even neighbour the way `{:.3}` does.
fn round_to_thousandths(value: f64) -> (String, String) {
    // 1100 digits covers the longest exact expansion of any f64
    let exact = format!("{:.1100}", value);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(3))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(3).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 3;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

/// Amount with a literal currency symbol in front, e.g. `$1,200`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            grouped.push(',');
            count = 0;
        }
        grouped.push(c);
        count += 1;
    }
    grouped.chars().rev().collect()
}
