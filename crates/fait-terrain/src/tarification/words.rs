use super::domain::Ariary;

const CURRENCY: &str = "ARIARY";
const ZERO: &str = "ZÉRO";

const UNITS: [&str; 10] = [
    "", "UN", "DEUX", "TROIS", "QUATRE", "CINQ", "SIX", "SEPT", "HUIT", "NEUF",
];

const TEENS: [&str; 10] = [
    "DIX",
    "ONZE",
    "DOUZE",
    "TREIZE",
    "QUATORZE",
    "QUINZE",
    "SEIZE",
    "DIX-SEPT",
    "DIX-HUIT",
    "DIX-NEUF",
];

const TENS: [&str; 10] = [
    "",
    "DIX",
    "VINGT",
    "TRENTE",
    "QUARANTE",
    "CINQUANTE",
    "SOIXANTE",
    "SOIXANTE-DIX",
    "QUATRE-VINGT",
    "QUATRE-VINGT-DIX",
];

/// Spells an amount in upper-case French followed by the currency name, as printed on notices.
///
/// Only millions, thousands and units are composed; amounts of a billion or more wrap.
pub fn amount_to_french_words(amount: Ariary) -> String {
    if amount == 0 {
        return format!("{ZERO} {CURRENCY}");
    }

    let millions = amount / 1_000_000;
    let thousands = (amount % 1_000_000) / 1000;
    let remainder = amount % 1000;

    let mut words = String::new();

    if millions > 0 {
        if millions == 1 {
            words.push_str("UN MILLION ");
        } else {
            words.push_str(&spell_small(millions));
            words.push_str(" MILLIONS ");
        }
    }

    if thousands > 0 {
        // "MILLE" never takes a leading "UN".
        if thousands == 1 {
            words.push_str("MILLE ");
        } else {
            words.push_str(&spell_small(thousands));
            words.push_str(" MILLE ");
        }
    }

    if remainder > 0 {
        words.push_str(&spell_small(remainder));
    }

    format!("{} {CURRENCY}", words.trim())
}

fn spell_small(n: u64) -> String {
    let n = (n % 1000) as usize;

    match n {
        0 => String::new(),
        1..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=99 => {
            let tens = n / 10;
            let units = n % 10;
            if units == 0 {
                TENS[tens].to_string()
            } else if tens == 7 || tens == 9 {
                format!("{}-{}", TENS[tens - 1], TEENS[units])
            } else {
                format!("{}-{}", TENS[tens], UNITS[units])
            }
        }
        _ => {
            let hundreds = n / 100;
            let rest = n % 100;
            let head = if hundreds == 1 {
                "CENT".to_string()
            } else if rest == 0 {
                format!("{} CENTS", UNITS[hundreds])
            } else {
                format!("{} CENT", UNITS[hundreds])
            };

            if rest == 0 {
                head
            } else {
                format!("{head} {}", spell_small(rest as u64))
            }
        }
    }
}
