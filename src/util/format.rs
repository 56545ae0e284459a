//! Display formatting for account identifiers and the header date.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Portuguese weekday names, Sunday first (matches `Date.getDay()`).
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Domingo",
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
];

fn digits(id: &str) -> String {
    id.chars().filter(char::is_ascii_digit).collect()
}

fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let start = s.char_indices().nth(count - n).map_or(0, |(i, _)| i);
    &s[start..]
}

/// Format an account id as a branch account number, `NNNNNN-N`.
///
/// Uses the last seven digits of the id. Ids with fewer than six digits fall
/// back to the last seven characters of the raw id.
pub fn format_account_number(account_id: &str) -> String {
    if account_id.is_empty() {
        return String::new();
    }
    let numeric = digits(account_id);
    if numeric.len() >= 7 {
        let last7 = last_chars(&numeric, 7);
        return format!("{}-{}", &last7[..6], &last7[6..]);
    }
    if numeric.len() == 6 {
        return format!("{numeric}-{}", &numeric[5..]);
    }
    last_chars(account_id, 7).to_owned()
}

/// Last four digits of an account id, or its last four characters when it
/// carries no digits at all.
pub fn account_last_digits(account_id: &str) -> String {
    let numeric = digits(account_id);
    if numeric.is_empty() {
        return last_chars(account_id, 4).to_owned();
    }
    last_chars(&numeric, 4).to_owned()
}

/// Dropdown label for an account, e.g. `"Conta Corrente - 4821"`.
pub fn account_label(kind: &str, account_id: &str) -> String {
    format!("{kind} - {}", account_last_digits(account_id))
}

/// Header date, e.g. `"Segunda-feira, 07/04/2025"`.
///
/// `weekday` is zero-based from Sunday; `month` is one-based.
pub fn format_date(weekday: u32, day: u32, month: u32, year: i32) -> String {
    let name = DAYS_OF_WEEK.get(weekday as usize).copied().unwrap_or_default();
    format!("{name}, {day:02}/{month:02}/{year}")
}

/// Today's date from the browser clock.
pub fn current_date() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        format_date(now.get_day(), now.get_date(), now.get_month() + 1, year)
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
