use recurra::{CalendarCell, CellMarker, DateRange, GenerationResult, MonthGrid};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Most month grids drawn for one run.
const MAX_GRIDS: usize = 12;

pub struct View {
    pub calendar: bool,
    pub color: bool,
}

pub fn print_run(summary: &str, range: &DateRange, res: &GenerationResult, view: View) {
    let palette = ansi::Palette::new(view.color);
    println!("\n{}", palette.bold(palette.paint(format!("↻  {summary}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Range ━━━", ansi::GRAY));
    match (&res.error, &res.details) {
        (Some(err), _) => println!("  {}", palette.paint(format!("✗ {err}"), ansi::RED)),
        (None, Some(details)) => {
            let end_note = if range.end.as_deref().is_some_and(|e| !e.trim().is_empty()) { "" } else { " (default)" };
            println!(
                "  {} {} {} {}{}",
                palette.paint("✓", ansi::GREEN),
                palette.paint(details.window.start.to_string(), ansi::YELLOW),
                palette.dim("→"),
                palette.paint(details.window.end.to_string(), ansi::YELLOW),
                palette.dim(end_note),
            );
        }
        (None, None) => println!("  {}", palette.dim("no range")),
    }

    println!("\n{}", palette.paint("━━━ Dates ━━━", ansi::GRAY));
    if res.dates.is_empty() {
        println!("{}", palette.dim("  No dates generated"));
        if res.error.is_none() {
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • The anchor day does not exist in the covered months (try --overflow clamp)");
            println!("  • The interval is longer than the range");
            println!("  • The only candidates fall before the start date");
        }
    } else {
        print_dates(res, &palette);
    }

    if view.calendar && !res.dates.is_empty() {
        println!("\n{}", palette.paint("━━━ Calendar ━━━", ansi::GRAY));
        print_calendar(range, res, &palette);
    }

    if let Some(details) = &res.details {
        println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
        println!(
            "  Total: {}  │  Generate: {}  │  Finalize: {}",
            palette.paint(format!("{:?}", details.total), ansi::GREEN),
            palette.paint(format!("{:?}", details.generate), ansi::CYAN),
            palette.dim(format!("{:?}", details.finalize)),
        );
        println!(
            "  Candidates: {}  │  Duplicates: {}  │  Truncated: {}",
            palette.paint(details.candidates.to_string(), ansi::BLUE),
            palette.paint(details.duplicates_removed.to_string(), ansi::BLUE),
            palette.paint(details.truncated.to_string(), ansi::BLUE),
        );
    }
    println!();
}

fn print_dates(res: &GenerationResult, palette: &ansi::Palette) {
    for (idx, date) in res.dates.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{idx:>2}]"), ansi::GRAY),
            palette.bold(palette.paint(date.to_string(), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(date.format("%A, %B %-d, %Y").to_string(), ansi::BLUE),
        );
    }
}

fn print_calendar(range: &DateRange, res: &GenerationResult, palette: &ansi::Palette) {
    let grids = MonthGrid::for_dates(&res.dates, range);
    for grid in grids.iter().take(MAX_GRIDS) {
        print_grid(grid, palette);
    }
    if grids.len() > MAX_GRIDS {
        println!("\n  {}", palette.dim(format!("... calendar limited to {MAX_GRIDS} months")));
    }
}

fn print_grid(grid: &MonthGrid, palette: &ansi::Palette) {
    println!("\n  {}", palette.bold(grid.title()));
    println!("  {}", palette.dim("Su Mo Tu We Th Fr Sa"));
    for week in grid.weeks() {
        let row: Vec<String> = week.iter().map(|cell| fmt_cell(cell, palette)).collect();
        println!("  {}", row.join(" "));
    }
}

fn fmt_cell(cell: &CalendarCell, palette: &ansi::Palette) -> String {
    let text = format!("{:>2}", chrono::Datelike::day(&cell.date));
    if !cell.in_month {
        return palette.paint(text, ansi::GRAY);
    }
    match cell.marker {
        CellMarker::Start => palette.bold(palette.paint(text, ansi::GREEN)),
        CellMarker::End => palette.bold(palette.paint(text, ansi::RED)),
        CellMarker::Occurrence => palette.bold(palette.paint(text, ansi::BLUE)),
        CellMarker::None => text,
    }
}
