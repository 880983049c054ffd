//! A small catalogue of developer jokes and random selection from it.

/// How many jokes the jokes page shows.
pub const JOKES_SHOWN: usize = 3;

pub const CATALOGUE: &[&str] = &[
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, goes up to two tables and asks: \"Can I join you?\"",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "It works on my machine. Then we'll ship your machine.",
    "I would tell you a UDP joke, but you might not get it.",
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "A programmer's partner says: \"Buy a loaf of bread, and if they have eggs, buy a dozen.\" They came back with 12 loaves.",
    "Why did the developer go broke? Because they used up all their cache.",
    "To understand recursion, you must first understand recursion.",
    "Knock knock. Race condition. Who's there?",
    "Debugging: being the detective in a crime movie where you are also the murderer.",
    "The best thing about a boolean is that even if you are wrong, you are only off by a bit.",
];

/// A joke drawn for display. `key` is the draw position, unique within one
/// draw even when the same joke comes up twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joke {
    pub key: usize,
    pub text: &'static str,
}

/// Draws `count` jokes with replacement.
///
/// `random` must return values in `[0, 1)`, like `Math.random`. Out of range
/// values are clamped onto the catalogue.
///
/// # Example
/// ```
/// use primer::jokes::{CATALOGUE, random_jokes};
///
/// let jokes = random_jokes(2, || 0.0);
/// assert_eq!(jokes.len(), 2);
/// assert_eq!(jokes[0].text, CATALOGUE[0]);
/// ```
pub fn random_jokes(count: usize, mut random: impl FnMut() -> f64) -> Vec<Joke> {
    let last = CATALOGUE.len() - 1;

    (0..count)
        .map(|key| {
            let index = (random().max(0.0) * CATALOGUE.len() as f64) as usize;
            Joke {
                key,
                text: CATALOGUE[index.min(last)],
            }
        })
        .collect()
}
