//! Staggered text partitioning.
//!
//! Splits a string into display units and assigns each a start delay so the
//! whole string animates as a wave rather than atomically. The animation
//! itself is CSS (`animation-delay` per unit); this module only decides the
//! units and their delays.

/// Placeholder for whitespace in character mode, so split-out spaces keep
/// their layout width.
pub const NBSP: char = '\u{00a0}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Chars,
    Words,
    Lines,
}

impl Granularity {
    /// Per-unit delay increments used by the site's headings.
    pub fn default_step(self) -> f64 {
        match self {
            Granularity::Chars => 0.02,
            Granularity::Words => 0.05,
            Granularity::Lines => 0.15,
        }
    }
}

/// Base delay plus a per-unit increment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub fn starting_at(base: f64, granularity: Granularity) -> Self {
        Self {
            base,
            step: granularity.default_step(),
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base + self.step * index as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealUnit {
    pub text: String,
    pub delay_s: f64,
}

/// Partition `text` into ordered units with staggered delays.
pub fn split_into_units(text: &str, granularity: Granularity, stagger: Stagger) -> Vec<RevealUnit> {
    let units: Vec<String> = match granularity {
        Granularity::Chars => text
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    NBSP.to_string()
                } else {
                    c.to_string()
                }
            })
            .collect(),
        Granularity::Words => text.split_whitespace().map(str::to_owned).collect(),
        Granularity::Lines => text.lines().map(str::to_owned).collect(),
    };
    units
        .into_iter()
        .enumerate()
        .map(|(index, text)| RevealUnit {
            text,
            delay_s: stagger.delay_for(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_unit_per_character() {
        let units = split_into_units(
            "Balhir",
            Granularity::Chars,
            Stagger::starting_at(0.5, Granularity::Chars),
        );
        assert_eq!(units.len(), 6);
        assert_eq!(units[0].text, "B");
        assert_eq!(units[0].delay_s, 0.5);
    }

    #[test]
    fn whitespace_characters_become_nbsp() {
        let units = split_into_units(
            "a b",
            Granularity::Chars,
            Stagger::starting_at(0.0, Granularity::Chars),
        );
        assert_eq!(units[1].text, NBSP.to_string());
    }

    #[test]
    fn one_unit_per_word_and_line() {
        let words = split_into_units(
            "A Haven of  Sophistication",
            Granularity::Words,
            Stagger::starting_at(0.0, Granularity::Words),
        );
        assert_eq!(words.len(), 4);
        assert_eq!(words[3].text, "Sophistication");

        let lines = split_into_units(
            "Welcome to\nBalhir",
            Granularity::Lines,
            Stagger::starting_at(0.0, Granularity::Lines),
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "Balhir");
    }

    #[test]
    fn delays_strictly_increase() {
        for granularity in [Granularity::Chars, Granularity::Words, Granularity::Lines] {
            let units = split_into_units(
                "where modern elegance meets hospitality",
                granularity,
                Stagger::starting_at(0.2, granularity),
            );
            assert!(!units.is_empty());
            assert!(units
                .windows(2)
                .all(|pair| pair[1].delay_s > pair[0].delay_s));
        }
    }

    #[test]
    fn empty_input_yields_no_units() {
        let units = split_into_units(
            "",
            Granularity::Words,
            Stagger::starting_at(0.0, Granularity::Words),
        );
        assert!(units.is_empty());
    }
}
