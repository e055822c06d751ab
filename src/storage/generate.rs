//! Fake user record generation.

use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::UserDetail;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Bruno", "Carla", "Chen", "Dara", "Diego", "Elena", "Farid", "Grace",
    "Hana", "Ivan", "Jonas", "Kiri", "Lena", "Malik", "Nora", "Omar", "Priya", "Quinn", "Rosa",
    "Sami", "Tomas", "Uma", "Vera", "Wen", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Berg", "Castillo", "Dubois", "Eriksen", "Fontaine", "Garcia", "Haddad", "Ito",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Quispe", "Rossi",
    "Schmidt", "Tanaka", "Ueda", "Varga", "Weber", "Xu", "Yilmaz", "Zielinski",
];

const STREETS: &[&str] = &[
    "Maple Avenue", "Oak Street", "Harbor Road", "Mill Lane", "Station Road", "Park Drive",
    "Church Street", "River Way", "Hillcrest Court", "Cedar Boulevard",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Lakeside", "Fairview", "Greenville", "Bristol", "Madison",
    "Clinton", "Georgetown", "Salem",
];

const STATES: &[&str] = &[
    "Alabama", "California", "Colorado", "Georgia", "Illinois", "Maine", "Nevada", "Ohio",
    "Oregon", "Texas", "Vermont", "Washington",
];

const COUNTRIES: &[&str] = &[
    "Argentina", "Canada", "Denmark", "Ghana", "India", "Japan", "Kenya", "Mexico", "Norway",
    "Portugal", "Singapore", "United States",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const MIN_AGE_YEARS: i64 = 18;
const MAX_AGE_YEARS: i64 = 80;

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Generates `count` users with sequential ids starting at zero.
pub fn generate_users<R: Rng>(count: u64, rng: &mut R) -> Vec<UserDetail> {
    let today = Utc::now().date_naive();
    (0..count).map(|id| generate_user(id, today, rng)).collect()
}

fn generate_user<R: Rng>(id: u64, today: NaiveDate, rng: &mut R) -> UserDetail {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);

    let age_days = rng.gen_range(MIN_AGE_YEARS * 365..=MAX_AGE_YEARS * 365);
    let dob = today - Duration::days(age_days);

    UserDetail {
        id,
        name: format!("{} {}", first, last),
        dob,
        email: format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            rng.gen_range(1..100),
            pick(rng, EMAIL_DOMAINS)
        ),
        phone: format!(
            "({:03}) {:03}-{:04}",
            rng.gen_range(200..1000),
            rng.gen_range(200..1000),
            rng.gen_range(0..10000)
        ),
        address: format!("{} {}", rng.gen_range(1..10000), pick(rng, STREETS)),
        city: pick(rng, CITIES).to_string(),
        state: pick(rng, STATES).to_string(),
        country: pick(rng, COUNTRIES).to_string(),
        zip_code: format!("{:05}", rng.gen_range(0..100000)),
    }
}
