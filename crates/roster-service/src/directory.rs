//! Read-only people directory
//!
//! The directory is built once at startup and shared behind an `Arc`.
//! People are kept in locale-aware full-name order, so any filtered
//! subsequence is already in result order and searching never re-sorts.

use crate::collation::NameCollator;
use crate::names::{CLASSIC_TEAM, DEPARTMENTS, FIRST_NAMES, LAST_NAMES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_core::{Person, PersonId};
use std::collections::HashMap;

/// Ordered, immutable collection of people
#[derive(Debug, Clone, Default)]
pub struct Directory {
    /// People in result order
    people: Vec<Person>,
    /// Lowercased full names, parallel to `people`
    folded: Vec<String>,
}

impl Directory {
    /// Build a directory from arbitrary records
    ///
    /// Records are reordered by full name under [`NameCollator`], ties
    /// broken by id.
    #[must_use]
    pub fn from_people(mut people: Vec<Person>) -> Self {
        let collator = NameCollator::new();
        people.sort_by(|a, b| {
            collator
                .compare(&a.full_name, &b.full_name)
                .then_with(|| a.id.cmp(&b.id))
        });

        let folded = people.iter().map(|p| fold(&p.full_name)).collect();
        Self { people, folded }
    }

    /// Generate `size` synthetic people, reproducibly for a given `seed`
    ///
    /// Ids run from 1 to `size` in generation order.
    #[must_use]
    pub fn generate(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seen: HashMap<String, u32> = HashMap::new();
        let mut people = Vec::with_capacity(size);

        for i in 0..size {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            let role = DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())];

            let local = format!("{first}.{last}").to_lowercase();
            let count = seen.entry(local.clone()).or_insert(0);
            *count += 1;
            let email = if *count == 1 {
                format!("{local}@gmail.com")
            } else {
                format!("{local}{count}@gmail.com")
            };

            people.push(Person::new(
                (i + 1) as u32,
                format!("{first} {last}"),
                email,
                role,
            ));
        }

        tracing::debug!(size, seed, "generated directory");
        Self::from_people(people)
    }

    /// The fixed 40-person team
    #[must_use]
    pub fn classic() -> Self {
        let people = CLASSIC_TEAM
            .iter()
            .enumerate()
            .map(|(i, (name, department))| {
                let email = format!("{}@example.com", name.replace(' ', "").to_lowercase());
                Person::new((i + 1) as u32, *name, email, *department)
            })
            .collect();
        Self::from_people(people)
    }

    /// Number of people
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the directory is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All people, sorted by full name
    #[inline]
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Look up a person by id
    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// People whose full name contains `needle`, ignoring case, in sorted order
    ///
    /// An empty needle matches everyone.
    pub fn matching<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Person> + 'a {
        let needle = fold(needle);
        self.folded
            .iter()
            .zip(&self.people)
            .filter(move |(name, _)| name.contains(needle.as_str()))
            .map(|(_, person)| person)
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}
