//! Number formatting for table cells and dashboard figures

/// Thousands separated by spaces, fixed number of decimals (0..=3, otherwise 2)
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = if decimals > 3 { 2 } else { decimals as usize };
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Quantities: integers without decimals, fractions with up to 2
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_int(value)
    } else {
        format_number_with_decimals(value, 2)
    }
}
