use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Money amount in minor units; travels over the wire as a decimal string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("empty price");
        }
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            bail!("invalid price {:?}", s);
        }
        if frac.len() > 2 {
            bail!("price {:?} has more than two decimal places", s);
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            bail!("invalid price {:?}", s);
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .with_context(|| format!("price {:?} out of range", s))?
        };
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => 10 * frac.parse::<u64>().with_context(|| format!("invalid price {:?}", s))?,
            _ => frac.parse().with_context(|| format!("invalid price {:?}", s))?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .with_context(|| format!("price {:?} out of range", s))?;
        Ok(Self { cents })
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl std::str::FromStr for Price {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Price::parse(s)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(f64),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(s) => Price::parse(&s).map_err(serde::de::Error::custom),
            Wire::Number(n) if n.is_finite() && n >= 0.0 => {
                let cents = (n * 100.0).round();
                // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
                if cents >= u64::MAX as f64 {
                    return Err(serde::de::Error::custom(format!("price {} out of range", n)));
                }
                Ok(Price {
                    cents: cents as u64,
                })
            }
            Wire::Number(n) => Err(serde::de::Error::custom(format!("invalid price {}", n))),
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/price_tests.rs"]
mod tests;
