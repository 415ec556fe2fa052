/// English ordinal suffix for a day number ("1st", "22nd", "13th").
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&n) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
