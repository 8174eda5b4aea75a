/// NFL season, identified by the calendar year it starts in (e.g., 2024)
pub type Season = i32;
