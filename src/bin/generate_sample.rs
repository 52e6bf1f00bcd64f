//! Writes a deterministic `concerts.csv` for trying the viewer.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

const BANDS: &[&str] = &[
    "Phish", "Goose", "Umphrey's McGee", "Vulfpeck", "Khruangbin", "Billy Strings",
];
const MUSICALS: &[&str] = &["Hamilton", "Wicked", "Hadestown", "The Book of Mormon"];
const VENUES: &[&str] = &[
    "Madison Square Garden, NYC",
    "Broadway Theatre, New York",
    "Overture Center, Madison",
    "Bill Graham Civic, SF",
    "Frost Amphitheater, Stanford",
    "Greek Theatre, Berkeley",
    "Van Andel Arena, Grand Rapids",
    "Wrigley Field, Chicago",
    "Aragon Ballroom, Chicago",
];
const SONGS: &[&str] = &[
    "Tweezer", "Harry Hood", "Ghost", "Arcadia", "Dean Town", "Maria Tambien",
];

fn setlist(rng: &mut SimpleRng) -> String {
    match rng.below(4) {
        0 => String::new(),
        1 => (0..3).map(|_| *rng.pick(SONGS)).collect::<Vec<_>>().join(";"),
        _ => format!(
            "Set 1:;{};{};Encore:;{}",
            rng.pick(SONGS),
            rng.pick(SONGS),
            rng.pick(SONGS)
        ),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let start = NaiveDate::from_ymd_opt(2012, 1, 1).context("invalid start date")?;

    let output_path = "concerts.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record([
        "Date",
        "Band/Artist",
        "Location",
        "Concert Type",
        "Additional Info on Setlist",
    ])?;

    let mut rows = 0;
    for i in 0..60 {
        let date = start + Duration::days(rng.below(12 * 365) as i64);
        let (artist, kind, notes) = if rng.below(4) == 0 {
            (*rng.pick(MUSICALS), "Musical", String::new())
        } else {
            (*rng.pick(BANDS), "Concert", setlist(&mut rng))
        };
        // Every 15th row carries an unparseable date to exercise the cleaner.
        let date_cell = if i % 15 == 14 {
            "TBD".to_string()
        } else {
            date.format("%Y-%m-%d").to_string()
        };
        writer.write_record([
            date_cell.as_str(),
            artist,
            *rng.pick(VENUES),
            kind,
            notes.as_str(),
        ])?;
        rows += 1;
    }
    writer.flush()?;

    println!("Wrote {rows} concerts to {output_path}");
    Ok(())
}
